pub use util::*;

pub mod util;

solutions![(y2022, [d1, d2, d3, d4, d5, d6, d7, d8]),];

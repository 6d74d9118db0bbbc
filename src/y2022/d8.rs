use {crate::*, glam::IVec2};

/// Height of a single tree, 0-9
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
struct Height(u8);

#[allow(dead_code)]
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct CharIsNotAsciiDigit(char);

impl TryFrom<char> for Height {
    type Error = CharIsNotAsciiDigit;

    fn try_from(height_char: char) -> Result<Self, Self::Error> {
        if height_char.is_ascii_digit() {
            Ok(Self(height_char as u8 - ZERO_OFFSET))
        } else {
            Err(CharIsNotAsciiDigit(height_char))
        }
    }
}

#[derive(Debug, Default)]
struct Visibility(bool);

/// Marks trees taller than every tree before them in the sweep; the first tree of a row or column
/// has nothing before it and is always visible
#[derive(Default)]
struct ComputeVisibility {
    tallest_so_far: Option<u8>,
}

impl GridVisitor for ComputeVisibility {
    type Old = Height;
    type New = Visibility;

    fn visit_cell(
        &mut self,
        new: &mut Self::New,
        old: &Self::Old,
        _old_grid: &Grid2D<Self::Old>,
        _rev_dir: Direction,
        _pos: IVec2,
    ) {
        if self
            .tallest_so_far
            .map_or(true, |tallest_so_far| old.0 > tallest_so_far)
        {
            new.0 = true;
        }

        self.tallest_so_far = Some(
            self.tallest_so_far
                .map_or(old.0, |tallest_so_far| tallest_so_far.max(old.0)),
        );
    }
}

/// Product of the four directional viewing distances
#[derive(Debug)]
struct ScenicScore(u32);

impl Default for ScenicScore {
    fn default() -> Self {
        Self(1_u32)
    }
}

/// Accumulates one direction's viewing distance per sweep, using the most recent sweep position of
/// each height: the blocking tree is the nearest earlier tree at least as tall, or the edge if
/// there is none
#[derive(Default)]
struct ComputeViewingDistance {
    steps: u32,
    last_position_by_height: [Option<u32>; 10_usize],
}

impl GridVisitor for ComputeViewingDistance {
    type Old = Height;
    type New = ScenicScore;

    fn visit_cell(
        &mut self,
        new: &mut Self::New,
        old: &Self::Old,
        _old_grid: &Grid2D<Self::Old>,
        _rev_dir: Direction,
        _pos: IVec2,
    ) {
        let height_index: usize = old.0 as usize;
        let blocking_position: u32 = self.last_position_by_height[height_index..]
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or_default();

        new.0 *= self.steps - blocking_position;
        self.last_position_by_height[height_index] = Some(self.steps);
        self.steps += 1_u32;
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Height>);

impl Solution {
    fn visible_tree_count(&self) -> usize {
        ComputeVisibility::visit_grid(&self.0)
            .cells()
            .iter()
            .filter(|visibility: &&Visibility| visibility.0)
            .count()
    }

    fn max_scenic_score(&self) -> u32 {
        ComputeViewingDistance::visit_grid(&self.0)
            .cells()
            .iter()
            .map(|scenic_score: &ScenicScore| scenic_score.0)
            .max()
            .unwrap_or_default()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.visible_tree_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.max_scenic_score());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = GridParseError<'i, CharIsNotAsciiDigit>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self(Grid2D::<Height>::try_from(input)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT_GRID_STR: &str = "\
        30373\n\
        25512\n\
        65332\n\
        33549\n\
        35390";

    fn solution() -> Solution {
        macro_rules! heights { [ $( $height:expr ),* ] => { vec![ $( Height($height), )* ] }; }

        Solution(
            Grid2D::try_from_cells_and_width(
                heights![
                    3, 0, 3, 7, 3, 2, 5, 5, 1, 2, 6, 5, 3, 3, 2, 3, 3, 5, 4, 9, 3, 5, 3, 9, 0
                ],
                5_usize,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(HEIGHT_GRID_STR), Ok(solution()));
    }

    #[test]
    fn test_visible_tree_count() {
        assert_eq!(solution().visible_tree_count(), 21_usize);
    }

    #[test]
    fn test_max_scenic_score() {
        assert_eq!(solution().max_scenic_score(), 8_u32);
    }
}

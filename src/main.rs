use {aoc2022::*, clap::Parser};

fn main() {
    let args: Args = Args::parse();

    solutions().run(&args);
}

use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{line_ending, satisfy},
        combinator::{map, map_opt, opt},
        error::Error,
        multi::{many0, many1, separated_list1},
        sequence::{delimited, preceded, separated_pair, terminated, tuple},
        Err, IResult,
    },
};

/// One cell of the starting-stacks drawing: a crate letter, or a three-space gap above a shorter
/// stack
struct DrawingCell(Option<u8>);

impl Parse for DrawingCell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(tag("["), satisfy(|c: char| c.is_ascii_uppercase()), tag("]")),
                |crate_char: char| Self(Some(crate_char as u8)),
            ),
            map(tag("   "), |_| Self(None)),
        ))(input)
    }
}

/// Parses the footer of the drawing, ` 1   2   3 ...`, validating that the column indices count up
/// from 1, and returning the column count
fn parse_column_count(input: &str) -> IResult<&str, usize> {
    map_opt(
        separated_list1(
            tag(" "),
            delimited(tag(" "), satisfy(|c: char| c.is_ascii_digit()), tag(" ")),
        ),
        |column_indices: Vec<char>| -> Option<usize> {
            column_indices
                .iter()
                .enumerate()
                .all(|(index, column_index_char)| {
                    *column_index_char as u8 - ZERO_OFFSET == index as u8 + 1_u8
                })
                .then(|| column_indices.len())
        },
    )(input)
}

/// The stacks of crates, bottom to top
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct CrateStacks(Vec<Vec<u8>>);

impl CrateStacks {
    fn try_from_drawing_rows(rows: Vec<Vec<DrawingCell>>, columns: usize) -> Option<Self> {
        let mut crate_stacks: Self = Self(vec![Vec::new(); columns]);

        for row in rows.into_iter().rev() {
            if row.len() != columns {
                return None;
            }

            for (crate_stack, drawing_cell) in crate_stacks.0.iter_mut().zip(row) {
                if let Some(crate_byte) = drawing_cell.0 {
                    crate_stack.push(crate_byte);
                }
            }
        }

        Some(crate_stacks)
    }

    fn try_execute(&mut self, step: &Step, crane_model: CraneModel) -> Option<()> {
        let from_index: usize = (step.from as usize).checked_sub(1_usize)?;
        let to_index: usize = (step.to as usize).checked_sub(1_usize)?;

        let moved_crates: Vec<u8> = {
            let from_stack: &mut Vec<u8> = self.0.get_mut(from_index)?;

            if from_stack.len() < step.count {
                return None;
            }

            from_stack.split_off(from_stack.len() - step.count)
        };
        let to_stack: &mut Vec<u8> = self.0.get_mut(to_index)?;

        match crane_model {
            CraneModel::CrateMover9000 => to_stack.extend(moved_crates.into_iter().rev()),
            CraneModel::CrateMover9001 => to_stack.extend(moved_crates),
        }

        Some(())
    }

    fn stack_tops(&self) -> String {
        self.0
            .iter()
            .filter_map(|crate_stack: &Vec<u8>| -> Option<char> {
                crate_stack.last().map(|&crate_byte| crate_byte as char)
            })
            .collect()
    }
}

impl Parse for CrateStacks {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(
            tuple((
                many1(terminated(
                    separated_list1(tag(" "), DrawingCell::parse),
                    line_ending,
                )),
                terminated(parse_column_count, line_ending),
            )),
            |(rows, columns)| Self::try_from_drawing_rows(rows, columns),
        )(input)
    }
}

/// One step of the rearrangement procedure, with 1-based stack indices
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Step {
    count: usize,
    from: u8,
    to: u8,
}

impl Parse for Step {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                preceded(tag("move "), parse_integer::<usize>),
                preceded(tag(" from "), parse_integer::<u8>),
                preceded(tag(" to "), parse_integer::<u8>),
            )),
            |(count, from, to)| Self { count, from, to },
        )(input)
    }
}

/// Which crane is executing the rearrangement procedure
#[derive(Clone, Copy)]
enum CraneModel {
    /// Moves one crate at a time, so each moved group ends up reversed
    CrateMover9000,

    /// Moves whole groups at once, preserving their order
    CrateMover9001,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    crate_stacks: CrateStacks,
    steps: Vec<Step>,
}

impl Solution {
    /// Runs the full rearrangement procedure on a copy of the starting stacks and reads off the
    /// top crate of each stack
    ///
    /// Returns `None` if a step addresses a missing stack or moves more crates than its source
    /// stack holds.
    fn try_stack_tops_after_rearrangement(&self, crane_model: CraneModel) -> Option<String> {
        let mut crate_stacks: CrateStacks = self.crate_stacks.clone();

        for step in &self.steps {
            crate_stacks.try_execute(step, crane_model)?;
        }

        Some(crate_stacks.stack_tops())
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                CrateStacks::parse,
                line_ending,
                many0(terminated(Step::parse, opt(line_ending))),
            ),
            |(crate_stacks, steps)| Self {
                crate_stacks,
                steps,
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_stack_tops_after_rearrangement(CraneModel::CrateMover9000));
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_stack_tops_after_rearrangement(CraneModel::CrateMover9001));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRATE_STACKS_STR: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2",
    );

    fn solution() -> Solution {
        Solution {
            crate_stacks: CrateStacks(vec![
                vec![b'Z', b'N'],
                vec![b'M', b'C', b'D'],
                vec![b'P'],
            ]),
            steps: vec![
                Step {
                    count: 1_usize,
                    from: 2_u8,
                    to: 1_u8,
                },
                Step {
                    count: 3_usize,
                    from: 1_u8,
                    to: 3_u8,
                },
                Step {
                    count: 2_usize,
                    from: 2_u8,
                    to: 1_u8,
                },
                Step {
                    count: 1_usize,
                    from: 1_u8,
                    to: 2_u8,
                },
            ],
        }
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(CRATE_STACKS_STR), Ok(solution()));
    }

    #[test]
    fn test_crate_mover_9000() {
        assert_eq!(
            solution().try_stack_tops_after_rearrangement(CraneModel::CrateMover9000),
            Some("CMZ".into())
        );
    }

    #[test]
    fn test_crate_mover_9001() {
        assert_eq!(
            solution().try_stack_tops_after_rearrangement(CraneModel::CrateMover9001),
            Some("MCD".into())
        );
    }

    #[test]
    fn test_try_execute_rejects_impossible_steps() {
        let mut crate_stacks: CrateStacks = solution().crate_stacks.clone();

        assert_eq!(
            crate_stacks.try_execute(
                &Step {
                    count: 4_usize,
                    from: 1_u8,
                    to: 2_u8,
                },
                CraneModel::CrateMover9000,
            ),
            None
        );
        assert_eq!(
            crate_stacks.try_execute(
                &Step {
                    count: 1_usize,
                    from: 0_u8,
                    to: 2_u8,
                },
                CraneModel::CrateMover9000,
            ),
            None
        );
    }
}

use {
    crate::*, static_assertions::const_assert, std::mem::transmute, strum::EnumCount,
    strum_macros::EnumCount as EnumCountMacro,
};

/// A shape thrown in a round of Rock Paper Scissors, worth its own score when played
#[derive(Clone, Copy, Debug, EnumCountMacro, PartialEq)]
#[repr(u8)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

const_assert!(Shape::COUNT == 3_usize);

impl Shape {
    const fn from_u8(value: u8) -> Self {
        // SAFETY: The modulo keeps the value in range of the variants, per the `const_assert`
        // above
        unsafe { transmute(value % Shape::COUNT as u8) }
    }

    fn score(self) -> u32 {
        self as u32 + 1_u32
    }

    /// The shape this shape defeats, one step back in the Rock → Paper → Scissors cycle
    fn defeats(self) -> Self {
        Self::from_u8(self as u8 + 2_u8)
    }

    /// The shape this shape loses to, one step forward in the cycle
    fn loses_to(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }

    fn outcome_against(self, opponent: Self) -> Outcome {
        if self == opponent {
            Outcome::Draw
        } else if self.defeats() == opponent {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// The shape to respond with such that the round against `opponent` ends in `outcome`
    fn for_outcome(opponent: Self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Loss => opponent.defeats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.loses_to(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    fn score(self) -> u32 {
        match self {
            Self::Loss => 0_u32,
            Self::Draw => 3_u32,
            Self::Win => 6_u32,
        }
    }
}

/// One line of the strategy guide: the opponent's shape, and the response column kept as its
/// offset from `'X'` because the two questions read it differently
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Round {
    opponent: Shape,
    response: u8,
}

impl Round {
    fn response_as_shape_score(self) -> u32 {
        let response: Shape = Shape::from_u8(self.response);

        response.score() + response.outcome_against(self.opponent).score()
    }

    fn response_as_outcome_score(self) -> u32 {
        let outcome: Outcome = match self.response {
            0_u8 => Outcome::Loss,
            1_u8 => Outcome::Draw,
            _ => Outcome::Win,
        };

        Shape::for_outcome(self.opponent, outcome).score() + outcome.score()
    }
}

/// A line that doesn't match `{A|B|C} {X|Y|Z}`
#[allow(dead_code)]
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct InvalidRound<'s>(&'s str);

impl<'s> TryFrom<&'s str> for Round {
    type Error = InvalidRound<'s>;

    fn try_from(round_str: &'s str) -> Result<Self, Self::Error> {
        match *round_str.as_bytes() {
            [opponent @ b'A'..=b'C', b' ', response @ b'X'..=b'Z'] => Ok(Self {
                opponent: Shape::from_u8(opponent - b'A'),
                response: response - b'X',
            }),
            _ => Err(InvalidRound(round_str)),
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Round>);

impl Solution {
    fn total_score_with_response_as_shape(&self) -> u32 {
        self.0.iter().copied().map(Round::response_as_shape_score).sum()
    }

    fn total_score_with_response_as_outcome(&self) -> u32 {
        self.0
            .iter()
            .copied()
            .map(Round::response_as_outcome_score)
            .sum()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_score_with_response_as_shape());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_score_with_response_as_outcome());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = InvalidRound<'i>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        input
            .lines()
            .map(Round::try_from)
            .collect::<Result<Vec<Round>, Self::Error>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGY_GUIDE_STR: &str = "\
        A Y\n\
        B X\n\
        C Z";

    fn solution() -> Solution {
        Solution(vec![
            Round {
                opponent: Shape::Rock,
                response: 1_u8,
            },
            Round {
                opponent: Shape::Paper,
                response: 0_u8,
            },
            Round {
                opponent: Shape::Scissors,
                response: 2_u8,
            },
        ])
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(STRATEGY_GUIDE_STR), Ok(solution()));
        assert!(Solution::try_from("A  Y").is_err());
        assert!(Solution::try_from("D X").is_err());
    }

    #[test]
    fn test_shape_cycle() {
        assert_eq!(Shape::Rock.defeats(), Shape::Scissors);
        assert_eq!(Shape::Paper.defeats(), Shape::Rock);
        assert_eq!(Shape::Scissors.defeats(), Shape::Paper);
        assert_eq!(Shape::Rock.loses_to(), Shape::Paper);
    }

    #[test]
    fn test_total_score_with_response_as_shape() {
        assert_eq!(solution().total_score_with_response_as_shape(), 15_u32);
    }

    #[test]
    fn test_total_score_with_response_as_outcome() {
        assert_eq!(solution().total_score_with_response_as_outcome(), 12_u32);
    }
}

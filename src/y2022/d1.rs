use {
    crate::*,
    std::{num::ParseIntError, str::FromStr},
};

/// Total calories carried per elf, in inventory order
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u32>);

impl Solution {
    fn max_calorie_sum(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or_default()
    }

    fn top_three_calorie_sum(&self) -> u32 {
        let mut calorie_sums: Vec<u32> = self.0.clone();

        calorie_sums.sort_unstable_by(|a, b| b.cmp(a));

        calorie_sums.into_iter().take(3_usize).sum()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.max_calorie_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.top_three_calorie_sum());
    }
}

impl TryFrom<&str> for Solution {
    type Error = ParseIntError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        input
            .trim_end()
            .split("\n\n")
            .map(|elf_inventory_str: &str| -> Result<u32, ParseIntError> {
                elf_inventory_str.lines().map(u32::from_str).sum()
            })
            .collect::<Result<Vec<u32>, ParseIntError>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALORIES_STR: &str = "\
        1000\n\
        2000\n\
        3000\n\
        \n\
        4000\n\
        \n\
        5000\n\
        6000\n\
        \n\
        7000\n\
        8000\n\
        9000\n\
        \n\
        10000";

    fn solution() -> Solution {
        Solution(vec![6000_u32, 4000_u32, 11000_u32, 24000_u32, 10000_u32])
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(CALORIES_STR), Ok(solution()));
    }

    #[test]
    fn test_max_calorie_sum() {
        assert_eq!(solution().max_calorie_sum(), 24000_u32);
    }

    #[test]
    fn test_top_three_calorie_sum() {
        assert_eq!(solution().top_three_calorie_sum(), 45000_u32);
    }
}

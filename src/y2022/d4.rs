use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, map_opt, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::ops::RangeInclusive,
};

/// An inclusive, non-empty range of section IDs assigned to one elf
#[cfg_attr(test, derive(Debug, PartialEq))]
struct SectionRange(RangeInclusive<u32>);

impl SectionRange {
    fn fully_contains(&self, other: &Self) -> bool {
        self.0.contains(other.0.start()) && self.0.contains(other.0.end())
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.0.start() <= other.0.end() && other.0.start() <= self.0.end()
    }
}

impl Parse for SectionRange {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(
            separated_pair(parse_integer, tag("-"), parse_integer),
            |(start, end): (u32, u32)| (start <= end).then(|| Self(start..=end)),
        )(input)
    }
}

/// The pair of section ranges listed on one line
#[cfg_attr(test, derive(Debug, PartialEq))]
struct SectionRangePair(SectionRange, SectionRange);

impl SectionRangePair {
    fn one_fully_contains_other(&self) -> bool {
        self.0.fully_contains(&self.1) || self.1.fully_contains(&self.0)
    }

    fn is_overlapping(&self) -> bool {
        self.0.overlaps(&self.1)
    }
}

impl Parse for SectionRangePair {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(SectionRange::parse, tag(","), SectionRange::parse),
            |(first, second)| Self(first, second),
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<SectionRangePair>);

impl Solution {
    fn count_pairs_with_fully_contained_range(&self) -> usize {
        self.0
            .iter()
            .filter(|pair| pair.one_fully_contains_other())
            .count()
    }

    fn count_overlapping_pairs(&self) -> usize {
        self.0.iter().filter(|pair| pair.is_overlapping()).count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(SectionRangePair::parse, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_pairs_with_fully_contained_range());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_overlapping_pairs());
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

    const SECTION_RANGE_PAIRS_STR: &str = "\
        2-4,6-8\n\
        2-3,4-5\n\
        5-7,7-9\n\
        2-8,3-7\n\
        6-6,4-6\n\
        2-6,4-8";

    fn section_range_pair(
        first_start: u32,
        first_end: u32,
        second_start: u32,
        second_end: u32,
    ) -> SectionRangePair {
        SectionRangePair(
            SectionRange(first_start..=first_end),
            SectionRange(second_start..=second_end),
        )
    }

    fn solution() -> Solution {
        Solution(vec![
            section_range_pair(2_u32, 4_u32, 6_u32, 8_u32),
            section_range_pair(2_u32, 3_u32, 4_u32, 5_u32),
            section_range_pair(5_u32, 7_u32, 7_u32, 9_u32),
            section_range_pair(2_u32, 8_u32, 3_u32, 7_u32),
            section_range_pair(6_u32, 6_u32, 4_u32, 6_u32),
            section_range_pair(2_u32, 6_u32, 4_u32, 8_u32),
        ])
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            Solution::try_from(SECTION_RANGE_PAIRS_STR),
            Ok(solution())
        );
    }

    #[test]
    fn test_count_pairs_with_fully_contained_range() {
        assert_eq!(solution().count_pairs_with_fully_contained_range(), 2_usize);
    }

    #[test]
    fn test_count_overlapping_pairs() {
        assert_eq!(solution().count_overlapping_pairs(), 4_usize);
    }
}

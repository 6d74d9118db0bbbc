use crate::*;

/// Bitset over item priorities: bit `p` is set iff an item with priority `p` is present
type ItemSet = u64;

/// Returns the priority of an ASCII-alphabetic item: `a-z` map to 1-26, `A-Z` to 27-52
fn try_item_priority(item: char) -> Option<u32> {
    if item.is_ascii_lowercase() {
        Some((item as u8 - LOWERCASE_A_OFFSET) as u32 + 1_u32)
    } else if item.is_ascii_uppercase() {
        Some((item as u8 - UPPERCASE_A_OFFSET) as u32 + 27_u32)
    } else {
        None
    }
}

#[allow(dead_code)]
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum RucksackParseError<'s> {
    OddItemCount(&'s str),
    NoCharBoundaryAtMidpoint(&'s str),
    ItemIsNotAsciiAlphabetic(char),
}

fn item_set(items_str: &str) -> Result<ItemSet, RucksackParseError> {
    let mut item_set: ItemSet = 0_u64;

    for item in items_str.chars() {
        let priority: u32 = try_item_priority(item)
            .ok_or(RucksackParseError::ItemIsNotAsciiAlphabetic(item))?;

        item_set |= 1_u64 << priority;
    }

    Ok(item_set)
}

/// The two compartments of one rucksack, reduced to their item-priority sets
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Rucksack {
    first_compartment: ItemSet,
    second_compartment: ItemSet,
}

impl Rucksack {
    fn all_items(&self) -> ItemSet {
        self.first_compartment | self.second_compartment
    }

    /// The priority of the item present in both compartments, if there is one
    fn try_duplicate_item_priority(&self) -> Option<u32> {
        let duplicates: ItemSet = self.first_compartment & self.second_compartment;

        (duplicates != 0_u64).then(|| duplicates.trailing_zeros())
    }
}

impl<'s> TryFrom<&'s str> for Rucksack {
    type Error = RucksackParseError<'s>;

    fn try_from(rucksack_str: &'s str) -> Result<Self, Self::Error> {
        use RucksackParseError as Error;

        if rucksack_str.len() % 2_usize != 0_usize {
            return Err(Error::OddItemCount(rucksack_str));
        }

        let midpoint: usize = rucksack_str.len() / 2_usize;

        if !rucksack_str.is_char_boundary(midpoint) {
            return Err(Error::NoCharBoundaryAtMidpoint(rucksack_str));
        }

        Ok(Self {
            first_compartment: item_set(&rucksack_str[..midpoint])?,
            second_compartment: item_set(&rucksack_str[midpoint..])?,
        })
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Rucksack>);

impl Solution {
    fn duplicate_item_priority_sum(&self) -> u32 {
        self.0
            .iter()
            .filter_map(Rucksack::try_duplicate_item_priority)
            .sum()
    }

    /// Sums the priorities of the badge items: for each group of three rucksacks, the one item
    /// carried by all three
    fn badge_priority_sum(&self) -> u32 {
        self.0
            .chunks_exact(3_usize)
            .filter_map(|group: &[Rucksack]| -> Option<u32> {
                let common_items: ItemSet = group
                    .iter()
                    .fold(ItemSet::MAX, |common_items, rucksack| {
                        common_items & rucksack.all_items()
                    });

                (common_items != 0_u64).then(|| common_items.trailing_zeros())
            })
            .sum()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.duplicate_item_priority_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.badge_priority_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = RucksackParseError<'i>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        input
            .lines()
            .map(Rucksack::try_from)
            .collect::<Result<Vec<Rucksack>, Self::Error>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUCKSACKS_STR: &str = "\
        vJrwpWtwJgWrhcsFMMfFFhFp\n\
        jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL\n\
        PmmdzqPrVvPwwTWBwg\n\
        wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn\n\
        ttgJtRGJQctTZtZT\n\
        CrZsJsPPZsGzwwsLwLmpwMDw";

    fn solution() -> Solution {
        Solution::try_from(RUCKSACKS_STR).unwrap()
    }

    #[test]
    fn test_try_item_priority() {
        assert_eq!(try_item_priority('a'), Some(1_u32));
        assert_eq!(try_item_priority('z'), Some(26_u32));
        assert_eq!(try_item_priority('A'), Some(27_u32));
        assert_eq!(try_item_priority('Z'), Some(52_u32));
        assert_eq!(try_item_priority('1'), None);
    }

    #[test]
    fn test_try_duplicate_item_priority() {
        assert_eq!(
            solution()
                .0
                .iter()
                .map(|rucksack| rucksack.try_duplicate_item_priority().unwrap())
                .collect::<Vec<u32>>(),
            // p, L, P, v, t, s
            vec![16_u32, 38_u32, 42_u32, 22_u32, 20_u32, 19_u32]
        );
    }

    #[test]
    fn test_duplicate_item_priority_sum() {
        assert_eq!(solution().duplicate_item_priority_sum(), 157_u32);
    }

    #[test]
    fn test_badge_priority_sum() {
        assert_eq!(solution().badge_priority_sum(), 70_u32);
    }

    #[test]
    fn test_try_from_str() {
        assert!(Solution::try_from("abc").is_err());
        assert!(Solution::try_from("a1b2").is_err());
    }
}

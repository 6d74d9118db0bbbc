use crate::*;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(String);

impl Solution {
    /// Returns how many characters have been processed once the first window of `window_len`
    /// distinct characters completes
    ///
    /// Single scan over the datastream: the window start jumps just past the previous occurrence
    /// of a repeated letter, tracked per letter, instead of re-examining the window contents.
    ///
    /// Returns `None` if a non-lowercase-ASCII byte is encountered, or if no marker exists.
    fn try_detect_marker(&self, window_len: usize) -> Option<usize> {
        let mut last_position_by_letter: [Option<usize>; 26_usize] = [None; 26_usize];
        let mut window_start: usize = 0_usize;

        for (position, byte) in self.0.bytes().enumerate() {
            if !byte.is_ascii_lowercase() {
                return None;
            }

            let letter_index: usize = (byte - LOWERCASE_A_OFFSET) as usize;

            if let Some(repeat_position) = last_position_by_letter[letter_index] {
                if repeat_position >= window_start {
                    window_start = repeat_position + 1_usize;
                }
            }

            last_position_by_letter[letter_index] = Some(position);

            if position + 1_usize - window_start == window_len {
                return Some(position + 1_usize);
            }
        }

        None
    }

    fn try_detect_start_of_packet_marker(&self) -> Option<usize> {
        self.try_detect_marker(4_usize)
    }

    fn try_detect_start_of_message_marker(&self) -> Option<usize> {
        self.try_detect_marker(14_usize)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_detect_start_of_packet_marker());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_detect_start_of_message_marker());
    }
}

impl TryFrom<&str> for Solution {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.trim_end().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASTREAMS: &[(&str, usize, usize)] = &[
        ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7_usize, 19_usize),
        ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5_usize, 23_usize),
        ("nppdvjthqldpwncqszvftbrmjlhg", 6_usize, 23_usize),
        ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10_usize, 29_usize),
        ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11_usize, 26_usize),
    ];

    #[test]
    fn test_try_detect_marker() {
        for (datastream, start_of_packet, start_of_message) in DATASTREAMS.iter().copied() {
            let solution: Solution = Solution::try_from(datastream).unwrap();

            assert_eq!(
                solution.try_detect_start_of_packet_marker(),
                Some(start_of_packet)
            );
            assert_eq!(
                solution.try_detect_start_of_message_marker(),
                Some(start_of_message)
            );
        }
    }

    #[test]
    fn test_try_detect_marker_without_marker() {
        assert_eq!(
            Solution::try_from("abcabcabcabc")
                .unwrap()
                .try_detect_start_of_packet_marker(),
            None
        );
        assert_eq!(
            Solution::try_from("AB")
                .unwrap()
                .try_detect_start_of_packet_marker(),
            None
        );
    }
}

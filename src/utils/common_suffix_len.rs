use core::ops::{Index, Range};

/// Given two lookups and ranges calculates the length of common suffix.
/// Copied from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
pub fn common_suffix_len<Old, New>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    new_range
        .rev()
        .zip(old_range.rev())
        .take_while(|x| new[x.0] == old[x.1])
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_common_suffix_len() {
        assert_eq!(common_suffix_len(&[] as &[char], 0..0, &[] as &[char], 0..0), 0);

        let digits = "1234".chars().collect::<Vec<_>>();
        let padded = "X0001234".chars().collect::<Vec<_>>();
        assert_eq!(common_suffix_len(digits.as_slice(), 0..4, padded.as_slice(), 0..8), 4);
        assert_eq!(common_suffix_len(digits.as_slice(), 2..4, padded.as_slice(), 6..8), 2);
        assert_eq!(common_suffix_len(digits.as_slice(), 0..3, padded.as_slice(), 0..8), 0);
    }
}

use std::cmp::Ordering;

use super::tokenizer::{tokenize, Token};

/// Number-aware ordering where `None` sorts before any string.
///
/// See [`natural_cmp`] for how two strings are ordered.
pub fn natural_compare(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => natural_cmp(left, right),
    }
}

/// Orders two strings so that `"File 9"` comes before `"File 10"`.
///
/// Both strings are split with [`tokenize`] and compared fragment by
/// fragment:
///
/// * two numeric fragments compare by value, and on equal value the one
///   with more characters (such as leading zeros) sorts after
/// * a numeric fragment sorts before a non-numeric one
/// * two non-numeric fragments compare ordinally, separators included
///
/// When every aligned pair ties, the string with fewer fragments sorts
/// first.
///
/// ```
/// use stringscout::compare::natural_cmp;
///
/// let mut names = vec!["File 10", "File 9", "file 1", "File 9a"];
/// names.sort_by(|a, b| natural_cmp(a, b));
/// assert_eq!(names, vec!["File 9", "File 9a", "File 10", "file 1"]);
/// ```
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }

    let mut right_tokens = tokenize(right);
    for left_token in tokenize(left) {
        let Some(right_token) = right_tokens.next() else {
            return Ordering::Greater;
        };

        match compare_tokens(&left_token, &right_token) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    if right_tokens.next().is_some() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Orders two fragments the way [`natural_cmp`] orders aligned pairs
pub fn compare_tokens(left: &Token<'_>, right: &Token<'_>) -> Ordering {
    match (left.number(), right.number()) {
        (Some(l), Some(r)) => l
            .partial_cmp(&r)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left.char_len().cmp(&right.char_len())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => left.text.cmp(right.text),
    }
}

/// True when the strings differ at most in the values of their numbers.
///
/// Aligned fragments must either both be numeric or be identical text, and
/// both strings must have the same number of fragments. A `None` on either
/// side is never equal to anything, including another `None`.
pub fn equals_ignoring_numbers(left: Option<&str>, right: Option<&str>) -> bool {
    let (Some(left), Some(right)) = (left, right) else {
        return false;
    };
    if left == right {
        return true;
    }

    let mut right_tokens = tokenize(right);
    for left_token in tokenize(left) {
        let Some(right_token) = right_tokens.next() else {
            return false;
        };

        let equal_enough = match left_token.number() {
            Some(_) => right_token.number().is_some(),
            None => left_token.text == right_token.text,
        };
        if !equal_enough {
            return false;
        }
    }

    right_tokens.next().is_none()
}

/// A string that sorts with [`natural_cmp`], for use as a sort key or in
/// ordered collections.
#[derive(Debug, Clone)]
pub struct NaturalKey<S = String>(pub S);

impl<S: AsRef<str>> PartialEq for NaturalKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: AsRef<str>> Eq for NaturalKey<S> {}

impl<S: AsRef<str>> PartialOrd for NaturalKey<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<str>> Ord for NaturalKey<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(self.0.as_ref(), other.0.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sorted<'a>(input: &[&'a str]) -> Vec<&'a str> {
        let mut actual = input.to_vec();
        actual.sort_by(|a, b| natural_cmp(a, b));
        actual
    }

    #[test]
    fn test_numbers_sort_before_letters() {
        assert_eq!(
            sorted(&["A", "B", "C", "1", "2", "3"]),
            vec!["1", "2", "3", "A", "B", "C"]
        );
    }

    #[test]
    fn test_lexical_prefixes_supercede_numerical_value() {
        assert_eq!(
            sorted(&["A10", "B1", "C002", "C01", "1"]),
            vec!["1", "A10", "B1", "C01", "C002"]
        );
    }

    #[test]
    fn test_leading_zeros_are_ignored_in_sort_order() {
        assert_eq!(
            sorted(&["003", "00005", "0004", "1", "02"]),
            vec!["1", "02", "003", "0004", "00005"]
        );
    }

    #[test]
    fn test_fragments_are_ordered_left_to_right() {
        assert_eq!(
            sorted(&[
                "Word 1 A 1",
                "Word 1 B 2",
                "Word 2 A 10",
                "Word 1 A 10",
                "Word 1 B 20"
            ]),
            vec![
                "Word 1 A 1",
                "Word 1 A 10",
                "Word 1 B 2",
                "Word 1 B 20",
                "Word 2 A 10"
            ]
        );
    }

    #[test]
    fn test_equal_value_longer_fragment_sorts_after() {
        assert_eq!(natural_cmp("1", "01"), Ordering::Less);
        assert_eq!(natural_cmp("x01", "x1"), Ordering::Greater);
    }

    #[test]
    fn test_number_before_word_in_both_directions() {
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
        assert_eq!(natural_cmp("a", "1"), Ordering::Greater);
    }

    #[test]
    fn test_shorter_sequence_sorts_first() {
        assert_eq!(natural_cmp("abc", "abc1"), Ordering::Less);
        assert_eq!(natural_cmp("abc1", "abc"), Ordering::Greater);
        // trailing separators produce no fragment
        assert_eq!(natural_cmp("abc!", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_absent_values_sort_first() {
        assert_eq!(natural_compare(None, None), Ordering::Equal);
        assert_eq!(natural_compare(None, Some("")), Ordering::Less);
        assert_eq!(natural_compare(Some("a"), None), Ordering::Greater);
        assert_eq!(natural_compare(Some("a2"), Some("a10")), Ordering::Less);
    }

    #[test]
    fn test_strings_that_vary_only_by_number_value() {
        let cases = [
            ("1 is less than 10", "007 is less than 10000"),
            ("the 10th day is Tuesday", "the 4th day is Tuesday"),
            ("2", "7"),
        ];
        for (a, b) in cases {
            assert!(equals_ignoring_numbers(Some(a), Some(b)), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_strings_with_missing_or_moved_numbers() {
        let cases = [
            ("1 is less than one hundred", "1 is less than 100"),
            ("the 10th day is Tuesday", "the day is Tuesday"),
            ("very totally", "different"),
        ];
        for (a, b) in cases {
            assert!(!equals_ignoring_numbers(Some(a), Some(b)), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_absent_is_not_equal_to_anything() {
        assert!(!equals_ignoring_numbers(None, Some("a string")));
        assert!(!equals_ignoring_numbers(Some("a string"), None));
        assert!(!equals_ignoring_numbers(None, None));
        assert!(equals_ignoring_numbers(
            Some("they are the same picture"),
            Some("they are the same picture")
        ));
    }

    #[test]
    fn test_natural_key_in_ordered_set() {
        let set: BTreeSet<NaturalKey> = ["img12.png", "img10.png", "img2.png", "img1.png"]
            .into_iter()
            .map(|s| NaturalKey(s.to_string()))
            .collect();
        let ordered: Vec<&str> = set.iter().map(|k| k.0.as_str()).collect();
        assert_eq!(
            ordered,
            vec!["img1.png", "img2.png", "img10.png", "img12.png"]
        );
    }
}

use std::cmp::Ordering;

use super::tokenizer::tokenize;

/// The magnitudes of every number in `s`, in order. `-`, `.` and `,` are
/// separators here, so `"2020-02-03"` gives `[2020.0, 2.0, 3.0]`.
pub fn numbers_in(s: &str) -> Vec<f64> {
    tokenize(s).filter_map(|token| token.unsigned_number()).collect()
}

/// Numbers-only ordering where `None` sorts before any string.
pub fn numbers_only_compare(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => numbers_only_cmp(left, right),
    }
}

/// Orders two strings by the numbers they contain and nothing else.
///
/// Aligned numbers decide first. Past that a string with no numbers sorts
/// after one that has some, fewer numbers sort before more, and the last
/// resort is ordinal comparison of the whole strings.
///
/// ```
/// use stringscout::compare::numbers_only_cmp;
///
/// let mut names = vec!["File", "Users 2020-01-01", "Accounts 2020-02-03"];
/// names.sort_by(|a, b| numbers_only_cmp(a, b));
/// assert_eq!(names, vec!["Users 2020-01-01", "Accounts 2020-02-03", "File"]);
/// ```
pub fn numbers_only_cmp(left: &str, right: &str) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }

    let left_numbers = numbers_in(left);
    let right_numbers = numbers_in(right);

    match (left_numbers.is_empty(), right_numbers.is_empty()) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    for (l, r) in left_numbers.iter().zip(&right_numbers) {
        match l.partial_cmp(r) {
            Some(Ordering::Equal) | None => continue,
            Some(decided) => return decided,
        }
    }

    left_numbers
        .len()
        .cmp(&right_numbers.len())
        .then_with(|| left.cmp(right))
}

/// A string that sorts with [`numbers_only_cmp`]
#[derive(Debug, Clone)]
pub struct NumbersOnlyKey<S = String>(pub S);

impl<S: AsRef<str>> PartialEq for NumbersOnlyKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: AsRef<str>> Eq for NumbersOnlyKey<S> {}

impl<S: AsRef<str>> PartialOrd for NumbersOnlyKey<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<str>> Ord for NumbersOnlyKey<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        numbers_only_cmp(self.0.as_ref(), other.0.as_ref())
    }
}

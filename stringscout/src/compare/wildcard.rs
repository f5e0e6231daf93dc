use rayon::prelude::*;
use std::collections::HashSet;

/// Outcome of walking the mask and subject in lockstep from one position
enum Walk {
    Matched,
    Failed,
    /// Hit a `*` that is not the last mask character
    Star { mask_index: usize, subject_index: usize },
}

/// Tests `subject` against a path-style wildcard `mask`.
///
/// * `*` as the last mask character matches whatever is left, including
///   nothing. Anywhere else it consumes one or more characters, so it never
///   matches an empty infix.
/// * `?` consumes exactly one character.
/// * Any other character must match literally, ignoring case when
///   `ignore_case` is set.
///
/// Once the subject runs out, the mask must be exhausted too, or continue
/// with `*` or `;`. There is no escape syntax.
///
/// Backtracking over `*` uses an explicit work list, and each
/// `(mask, subject)` position is tried at most once.
///
/// ```
/// use stringscout::compare::wildcard_match;
///
/// assert!(wildcard_match("prefix", "pre*", false));
/// assert!(!wildcard_match("emptystar", "empty*star", false));
/// assert!(wildcard_match("Case Insensitive", "cAsE In??NS*E", true));
/// ```
pub fn wildcard_match(subject: &str, mask: &str, ignore_case: bool) -> bool {
    let subject: Vec<char> = subject.chars().collect();
    let mask: Vec<char> = mask.chars().collect();

    let mut pending = vec![(0usize, 0usize)];
    let mut visited = HashSet::new();

    while let Some((mask_index, subject_index)) = pending.pop() {
        if !visited.insert((mask_index, subject_index)) {
            continue;
        }

        match walk(&subject, &mask, mask_index, subject_index, ignore_case) {
            Walk::Matched => return true,
            Walk::Failed => {}
            Walk::Star {
                mask_index,
                subject_index,
            } => {
                // Shortest consumption is popped first
                for resume in (subject_index + 1..=subject.len()).rev() {
                    pending.push((mask_index + 1, resume));
                }
            }
        }
    }

    false
}

fn walk(subject: &[char], mask: &[char], mut i: usize, mut k: usize, ignore_case: bool) -> Walk {
    while k < subject.len() {
        let Some(&m) = mask.get(i) else {
            return Walk::Failed;
        };

        match m {
            '*' if i + 1 == mask.len() => return Walk::Matched,
            '*' => {
                return Walk::Star {
                    mask_index: i,
                    subject_index: k,
                }
            }
            '?' => {}
            literal => {
                if !chars_equal(subject[k], literal, ignore_case) {
                    return Walk::Failed;
                }
            }
        }

        i += 1;
        k += 1;
    }

    match mask.get(i) {
        None | Some('*') | Some(';') => Walk::Matched,
        Some(_) => Walk::Failed,
    }
}

fn chars_equal(a: char, b: char, ignore_case: bool) -> bool {
    if ignore_case {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    } else {
        a == b
    }
}

/// Lines of `text` that fit `mask`, with their 1-based line numbers.
/// Lines are tested in parallel; the result keeps input order.
pub fn filter_lines<'a>(text: &'a str, mask: &str, ignore_case: bool) -> Vec<(usize, &'a str)> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .collect();

    lines
        .into_par_iter()
        .filter(|(_, line)| wildcard_match(line, mask, ignore_case))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive_kleene_stars() {
        let cases = [
            ("haystack", "needle", false),
            ("simple match", "simple match", true),
            ("simple star", "*", true),
            ("", "*", true), // star will match empty
            ("case sensitive", "Case Sensitive", false),
            ("prefix", "pre*", true),
            ("postfix", "*fix", true),
            ("emptystar", "empty*star", false), // star can't be an empty infix
            ("emptyprefix", "emptyprefix*", true), // star may match nothing at end of input
            ("emptypostfix", "*emptypostfix", false), // nor at start of input
            ("intercedents", "*c*", true),
            ("intercedents", "*X*", false),
            ("special \r\n chars", "special*chars", true),
        ];
        for (subject, mask, expected) in cases {
            assert_eq!(
                wildcard_match(subject, mask, false),
                expected,
                "{:?} against {:?}",
                subject,
                mask
            );
        }
    }

    #[test]
    fn test_case_sensitive_wildcards() {
        let cases = [
            ("haystack", "h?yst??k", true),
            ("haystack", "h?yst?k", false),
            ("prefix", "prefix?", false), // wildcard can never be empty
            ("postfix", "?postfix", false),
            ("special\r\nchars", "special??chars", true),
        ];
        for (subject, mask, expected) in cases {
            assert_eq!(wildcard_match(subject, mask, false), expected, "{:?}", mask);
        }
    }

    #[test]
    fn test_mixing_stars_and_wildcards() {
        let cases = [
            ("haystack", "h?yst*k", true),
            ("haystack", "h?yst?*k", true),
            ("haystack", "h?yst*?k", true),
            ("haystack", "h?yst??*k", false), // would need an empty infix star
            ("haystack", "h?yst**k", true),
            ("special\r\nchars", "special*?chars", true),
        ];
        for (subject, mask, expected) in cases {
            assert_eq!(wildcard_match(subject, mask, false), expected, "{:?}", mask);
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert!(wildcard_match("Case Insensitive", "cAsE In??NS*E", true));
        assert!(wildcard_match("cASE iNSENSITIVE", "CaSe iN??ns*e", true));
        assert!(!wildcard_match("Case Insensitive", "cAsE In??NS*E", false));
    }

    #[test]
    fn test_mask_terminators() {
        assert!(wildcard_match("abc", "abc;", false));
        assert!(wildcard_match("abc", "abc;ignored", false));
        // trailing mask starting with a star is accepted once the subject ends
        assert!(wildcard_match("abc", "abc*x", false));
        assert!(!wildcard_match("abc", "abcd", false));
    }

    #[test]
    fn test_mask_shorter_than_subject() {
        assert!(!wildcard_match("abcdef", "abc", false));
        assert!(!wildcard_match("abc", "", false));
        assert!(wildcard_match("", "", false));
    }

    #[test]
    fn test_many_stars_do_not_explode() {
        let subject = "a".repeat(200);
        let mask = format!("{}b", "*a".repeat(30));
        assert!(!wildcard_match(&subject, &mask, false));
    }

    #[test]
    fn test_filter_lines() {
        let text = "report-1.txt\nnotes.md\nreport-22.txt\nREPORT-3.TXT";
        assert_eq!(
            filter_lines(text, "report-*.txt", false),
            vec![(1, "report-1.txt"), (3, "report-22.txt")]
        );
        assert_eq!(filter_lines(text, "report-?.txt", true).len(), 2);
    }
}

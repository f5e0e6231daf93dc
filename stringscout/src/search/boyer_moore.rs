/// Finds the first exact occurrence of `needle` in `haystack` with a
/// simplified Boyer-Moore scan, returning its byte offset.
///
/// Each alignment is compared right to left. On a mismatch the needle is
/// shifted so that its rightmost occurrence of the haystack byte under its
/// last position lines up with that byte, or moved past it entirely when the
/// byte does not occur. The occurrence is found by scanning the needle again
/// on every mismatch rather than from a precomputed table, which keeps short
/// needles cheap at the price of an O(n·m) worst case.
///
/// Matching is done on UTF-8 bytes. An exact match of a valid UTF-8 needle
/// always starts on a character boundary, so the offset can be used to slice
/// `haystack`. An empty needle matches at offset 0.
///
/// ```
/// use stringscout::search::find_boyer_moore;
///
/// assert_eq!(find_boyer_moore("contains simple match", "simple"), Some(9));
/// assert_eq!(find_boyer_moore("contains abc match", "bbb"), None);
/// ```
pub fn find_boyer_moore(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.is_empty() {
        return Some(0);
    }
    if haystack.len() < needle.len() {
        return None;
    }

    let last = needle.len() - 1;
    let mut start = 0;

    while start <= haystack.len() - needle.len() {
        let window = &haystack[start..start + needle.len()];
        if window.iter().rev().eq(needle.iter().rev()) {
            return Some(start);
        }

        start += shift_for(needle, window[last]);
    }

    None
}

/// Distance from the end of the needle to the rightmost earlier occurrence of
/// `aligned`, or the full needle length when it does not occur. Never zero.
fn shift_for(needle: &[u8], aligned: u8) -> usize {
    let last = needle.len() - 1;
    needle[..last]
        .iter()
        .rev()
        .position(|&b| b == aligned)
        .map_or(needle.len(), |distance| distance + 1)
}

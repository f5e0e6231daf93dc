/// Finds the first window of `haystack` whose character codes sum to the same
/// total as `needle`, returning its byte offset.
///
/// This is an approximate search: the sum ignores order, so anagrams of the
/// needle match, and so does any window whose codes happen to add up to the
/// same value. Each slide of the window is a single subtraction and addition.
///
/// An empty needle matches at offset 0.
///
/// ```
/// use stringscout::search::find_cluster;
///
/// assert_eq!(find_cluster("contains simple match", "simple"), Some(9));
/// // "abc" and "bbb" have the same code sum
/// assert_eq!(find_cluster("contains abc match", "bbb"), Some(9));
/// ```
pub fn find_cluster(haystack: &str, needle: &str) -> Option<usize> {
    find_cluster_with(haystack, needle.chars().count(), code_sum(needle), |_| true)
}

/// Sum of the character codes of `s`
pub(crate) fn code_sum(s: &str) -> u64 {
    s.chars().map(|c| c as u64).sum()
}

/// Cluster search for a window of `width` characters summing to `target`,
/// stopping only on windows `accept` agrees with.
pub(crate) fn find_cluster_with(
    haystack: &str,
    width: usize,
    target: u64,
    mut accept: impl FnMut(usize) -> bool,
) -> Option<usize> {
    let mut entering = haystack.chars();
    let mut leaving = haystack.chars();

    let mut rolling = 0u64;
    for _ in 0..width {
        rolling += entering.next()? as u64;
    }

    let mut start = 0;
    loop {
        if rolling == target && accept(start) {
            return Some(start);
        }

        let incoming = entering.next()?;
        let outgoing = leaving.next()?;
        rolling += incoming as u64;
        rolling -= outgoing as u64;
        start += outgoing.len_utf8();
    }
}

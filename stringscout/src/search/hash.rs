use super::rolling_hash::RollingHash;

/// Finds the first window of `haystack` whose rolling hash equals the hash of
/// `needle`, returning its byte offset.
///
/// The hash is order sensitive, so it rejects the anagram matches that
/// [`find_cluster`](super::find_cluster) accepts, but it is only 32 bits wide
/// and can still collide. Callers that need certainty should check the
/// substring at the returned offset, or use [`find_verified`].
///
/// An empty needle matches at offset 0.
pub fn find_hash(haystack: &str, needle: &str) -> Option<usize> {
    let width = needle.chars().count();
    find_hash_with(haystack, width, RollingHash::hash_of(needle), |_| true)
}

/// Rolling hash search that confirms every hash hit against the needle and
/// keeps rolling past false positives. The result is always an exact match.
///
/// ```
/// use stringscout::search::find_verified;
///
/// assert_eq!(find_verified("contains simple match", "simple"), Some(9));
/// assert_eq!(find_verified("contains abc match", "bbb"), None);
/// ```
pub fn find_verified(haystack: &str, needle: &str) -> Option<usize> {
    let width = needle.chars().count();
    find_hash_with(haystack, width, RollingHash::hash_of(needle), |start| {
        haystack[start..].starts_with(needle)
    })
}

/// Rolling hash search for a window of `width` characters hashing to
/// `target`, stopping only on windows `accept` agrees with.
pub(crate) fn find_hash_with(
    haystack: &str,
    width: usize,
    target: u32,
    mut accept: impl FnMut(usize) -> bool,
) -> Option<usize> {
    let mut entering = haystack.chars();
    let mut leaving = haystack.chars();

    let mut rolling = RollingHash::new(width);
    for _ in 0..width {
        rolling.fill(entering.next()?);
    }

    let mut start = 0;
    loop {
        if rolling.value() == target && accept(start) {
            return Some(start);
        }

        let incoming = entering.next()?;
        let outgoing = leaving.next()?;
        rolling.update(incoming);
        start += outgoing.len_utf8();
    }
}

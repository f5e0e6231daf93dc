//! Substring search strategies and the line scanner built on them.
//!
//! Three independent strategies locate a needle inside a haystack:
//!
//! * [`find_cluster`] slides a sum of character codes across the haystack.
//!   It is a cheap approximate filter: anagrams and equal sums match.
//! * [`find_hash`] slides a [`RollingHash`] instead. It respects character
//!   order but is only 32 bits wide, so collisions remain possible.
//!   [`find_verified`] checks each hash hit and is exact.
//! * [`find_boyer_moore`] compares right to left and skips ahead on a
//!   mismatch. It is always exact.
//!
//! Every strategy returns the byte offset of the match start, `None` when
//! nothing matches, and `Some(0)` for an empty needle.
//!
//! ```
//! use stringscout::search::{find_boyer_moore, find_cluster, find_hash};
//!
//! let haystack = "contains abc match";
//! assert_eq!(find_cluster(haystack, "bbb"), Some(9)); // sum collision
//! assert_eq!(find_hash(haystack, "bbb"), None);
//! assert_eq!(find_boyer_moore(haystack, "abc"), Some(9));
//! ```
//!
//! [`Finder`] wraps a needle and a [`SearchStrategy`] for repeated use, and
//! [`scan_lines`] / [`scan`] run a finder over the lines of text or files in
//! parallel with rayon.
pub mod boyer_moore;
pub mod cluster;
pub mod engine;
pub mod finder;
pub mod hash;
pub mod processor;
pub mod rolling_hash;

pub use boyer_moore::find_boyer_moore;
pub use cluster::find_cluster;
pub use engine::{scan, scan_lines};
pub use finder::{Finder, SearchStrategy};
pub use hash::{find_hash, find_verified};
pub use processor::FileProcessor;
pub use rolling_hash::RollingHash;

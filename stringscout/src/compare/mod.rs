//! String ordering and matching rules beyond plain lexical comparison.
//!
//! * [`wildcard_match`] tests a string against a `*` / `?` mask.
//! * [`natural_cmp`] puts `"File 9"` before `"File 10"`.
//! * [`numbers_only_cmp`] orders by the numbers inside a string alone.
//! * [`equals_ignoring_numbers`] and [`edit_distance`] tell how alike two
//!   strings are.
//!
//! The natural and numbers-only rules both read strings through
//! [`tokenize`], which splits them into word and number fragments.
//!
//! Comparisons are ordinal: characters compare by code point, with no
//! locale-aware collation.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::ScoutError;

pub mod edit_distance;
pub mod natural;
pub mod numbers_only;
pub mod tokenizer;
pub mod wildcard;

pub use edit_distance::edit_distance;
pub use natural::{compare_tokens, equals_ignoring_numbers, natural_cmp, natural_compare, NaturalKey};
pub use numbers_only::{numbers_in, numbers_only_cmp, numbers_only_compare, NumbersOnlyKey};
pub use tokenizer::{tokenize, Token, TokenKind, Tokens};
pub use wildcard::{filter_lines, wildcard_match};

/// How [`sort_strings`] orders its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Natural,
    NumbersOnly,
    /// Plain code point order
    Ordinal,
}

impl SortOrder {
    pub fn compare(self, left: &str, right: &str) -> Ordering {
        match self {
            SortOrder::Natural => natural_cmp(left, right),
            SortOrder::NumbersOnly => numbers_only_cmp(left, right),
            SortOrder::Ordinal => left.cmp(right),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Natural => "natural",
            SortOrder::NumbersOnly => "numbers-only",
            SortOrder::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "natural" => Ok(SortOrder::Natural),
            "numbers-only" | "numbers" => Ok(SortOrder::NumbersOnly),
            "ordinal" => Ok(SortOrder::Ordinal),
            _ => Err(ScoutError::invalid_sort_order(s)),
        }
    }
}

/// Sorts `items` in place, in parallel. The sort is stable.
pub fn sort_strings<S>(items: &mut [S], order: SortOrder)
where
    S: AsRef<str> + Send,
{
    debug!("Sorting {} strings in {} order", items.len(), order);
    items.par_sort_by(|a, b| order.compare(a.as_ref(), b.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("natural".parse::<SortOrder>().unwrap(), SortOrder::Natural);
        assert_eq!(
            "Numbers-Only".parse::<SortOrder>().unwrap(),
            SortOrder::NumbersOnly
        );
        assert_eq!("ordinal".parse::<SortOrder>().unwrap(), SortOrder::Ordinal);
        assert!(matches!(
            "shuffled".parse::<SortOrder>(),
            Err(ScoutError::InvalidSortOrder(_))
        ));
    }

    #[test]
    fn test_sort_order_display_round_trips() {
        for order in [SortOrder::Natural, SortOrder::NumbersOnly, SortOrder::Ordinal] {
            assert_eq!(order.to_string().parse::<SortOrder>().unwrap(), order);
        }
    }

    #[test]
    fn test_sort_strings_each_order() {
        let input = vec![
            "v10".to_string(),
            "v9".to_string(),
            "alpha".to_string(),
            "v9.1".to_string(),
        ];

        let mut natural = input.clone();
        sort_strings(&mut natural, SortOrder::Natural);
        assert_eq!(natural, vec!["alpha", "v9", "v9.1", "v10"]);

        let mut numbers = input.clone();
        sort_strings(&mut numbers, SortOrder::NumbersOnly);
        assert_eq!(numbers, vec!["v9", "v9.1", "v10", "alpha"]);

        let mut ordinal = input;
        sort_strings(&mut ordinal, SortOrder::Ordinal);
        assert_eq!(ordinal, vec!["alpha", "v10", "v9", "v9.1"]);
    }

    #[test]
    fn test_sort_large_input_matches_sequential() {
        let mut parallel: Vec<String> = (0..5000).rev().map(|i| format!("item {}", i)).collect();
        let mut sequential = parallel.clone();

        sort_strings(&mut parallel, SortOrder::Natural);
        sequential.sort_by(|a, b| natural_cmp(a, b));

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[0], "item 0");
        assert_eq!(parallel[4999], "item 4999");
    }
}

//! # Tag Query Language
//!
//! Queries select objects by the tags they carry:
//!
//! ```text
//! tag:candle
//! tag:desk AND tag:candle
//! tag:desk OR tag:props
//! tag:hero AND NOT tag:small
//! ```
//!
//! ## Grammar
//!
//! ```text
//! query  := clause (" OR " clause)*
//! clause := term (" AND " term)*
//! term   := "tag:" name | "NOT " "tag:" name
//! name   := [A-Za-z0-9_-]+
//! ```
//!
//! Keywords are case-sensitive and separated by single spaces. There are no
//! parentheses, so precedence is fixed: OR binds loosest, AND tighter, and NOT
//! applies to exactly one term. That makes
//!
//! ```text
//! tag:a OR tag:b AND tag:c    ==  a OR (b AND c)
//! tag:a AND tag:b OR tag:c    ==  (a AND b) OR c
//! ```
//!
//! which surprises people reading left to right. `vg query explain` prints the
//! grouping.
//!
//! ## Failure Policy
//!
//! [`validate_query`] is advisory and reports the first problem it finds.
//! [`evaluate`] does not depend on it: a query that cannot be understood
//! matches nothing, term by term. It never matches everything and never errors.

pub mod parser;
pub mod validation;

use crate::tags::TagSet;

pub use parser::{Expr, Query};
pub use validation::{validate_query, QueryValidationError};

/// Evaluates `query` against one object's tags.
///
/// Parses on every call; use [`Query::parse`] once when matching many objects.
pub fn evaluate(query: &str, tags: &TagSet) -> bool {
    Query::parse(query).matches(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> TagSet {
        names.iter().copied().collect()
    }

    #[test]
    fn evaluate_precedence_examples() {
        let q = "tag:a OR tag:b AND tag:c";
        assert!(evaluate(q, &tags(&["a"])));
        assert!(evaluate(q, &tags(&["b", "c"])));
        assert!(!evaluate(q, &tags(&["b"])));
        assert!(!evaluate(q, &tags(&["c"])));
    }

    #[test]
    fn evaluate_not_examples() {
        let q = "tag:hero AND NOT tag:small";
        assert!(evaluate(q, &tags(&["hero"])));
        assert!(!evaluate(q, &tags(&["hero", "small"])));
        assert!(!evaluate(q, &tags(&["small"])));
    }

    #[test]
    fn invalid_queries_never_match_everything() {
        let everything = tags(&["a", "b", "c", "candle"]);
        for q in ["", "AND", "OR OR", "NOT", "tag:", "candle", "AND tag:"] {
            assert!(validate_query(q).is_err(), "{q:?} should be invalid");
            assert!(!evaluate(q, &everything), "{q:?} should not match");
        }
    }
}

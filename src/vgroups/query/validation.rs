//! Query pre-flight validation.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. not empty or whitespace
//! 2. contains `tag:` somewhere
//! 3. contains at least one well-formed `tag:<name>`
//! 4. does not start with `AND ` / `OR `
//! 5. does not end with ` AND` / ` OR` / ` NOT`
//! 6. does not end with a dangling `NOT`
//!
//! Rule 3 is satisfied by *any* well-formed clause. `tag:@ AND tag:desk`
//! passes, and so does `tag:hello@world` (its prefix `tag:hello` is
//! well-formed). The evaluator never relies on validation having run.

use super::parser::leading_tag_name;

/// Validates query syntax.
///
/// # Examples
/// ```
/// use vgroups::query::validate_query;
///
/// assert!(validate_query("tag:candle").is_ok());
/// assert!(validate_query("tag:hero AND NOT tag:small").is_ok());
///
/// assert!(validate_query("").is_err());
/// assert!(validate_query("AND tag:candle").is_err());
/// assert!(validate_query("tag:candle AND").is_err());
/// ```
pub fn validate_query(query: &str) -> Result<(), QueryValidationError> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(QueryValidationError::Empty);
    }

    if !query.contains("tag:") {
        return Err(QueryValidationError::MissingTagClause);
    }

    let has_valid_clause = query
        .match_indices("tag:")
        .any(|(i, m)| leading_tag_name(&query[i + m.len()..]).is_some());
    if !has_valid_clause {
        return Err(QueryValidationError::NoValidTagName);
    }

    if trimmed.starts_with("AND ") || trimmed.starts_with("OR ") {
        return Err(QueryValidationError::LeadingOperator);
    }

    if trimmed.ends_with(" AND") || trimmed.ends_with(" OR") || trimmed.ends_with(" NOT") {
        return Err(QueryValidationError::TrailingOperator);
    }

    if query.trim_end().ends_with("NOT") {
        return Err(QueryValidationError::DanglingNot);
    }

    Ok(())
}

/// Error type for query validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValidationError {
    /// Query is empty or whitespace
    Empty,
    /// Query has no `tag:` at all
    MissingTagClause,
    /// Every `tag:` is followed by something that is not a tag name
    NoValidTagName,
    /// Query starts with `AND` or `OR`
    LeadingOperator,
    /// Query ends with `AND`, `OR` or `NOT`
    TrailingOperator,
    /// `NOT` with nothing after it
    DanglingNot,
}

impl std::fmt::Display for QueryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryValidationError::Empty => write!(f, "Query cannot be empty"),
            QueryValidationError::MissingTagClause => {
                write!(f, "Query must contain at least one 'tag:' clause")
            }
            QueryValidationError::NoValidTagName => write!(
                f,
                "No valid tag names found (use letters, numbers, underscores, or hyphens)"
            ),
            QueryValidationError::LeadingOperator => {
                write!(f, "Query cannot start with AND or OR")
            }
            QueryValidationError::TrailingOperator => {
                write!(f, "Query cannot end with an operator")
            }
            QueryValidationError::DanglingNot => {
                write!(f, "NOT operator must be followed by a tag")
            }
        }
    }
}

impl std::error::Error for QueryValidationError {}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{validate_query, Query};
use crate::scan::match_query;
use crate::store::SceneStore;

/// Checks a query and reports it as valid. Invalid queries are errors.
pub fn validate(query: &str) -> Result<CmdResult> {
    validate_query(query)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Query is valid"));
    Ok(result)
}

/// Shows how a query groups: OR of ANDs, with malformed terms flagged.
pub fn explain(query: &str) -> Result<CmdResult> {
    let parsed = Query::parse(query);
    let mut result = CmdResult::default();

    if parsed.is_empty() {
        result.add_message(CmdMessage::warning("Empty query matches nothing"));
        return Ok(result);
    }

    result.add_message(CmdMessage::info(parsed.to_string()));
    let tags = parsed.referenced_tags();
    if !tags.is_empty() {
        result.add_message(CmdMessage::info(format!("Tags: {}", tags.join(", "))));
    }
    if let Err(e) = validate_query(query) {
        result.add_message(CmdMessage::warning(format!("Invalid query: {}", e)));
    }
    Ok(result)
}

/// Names of the scene objects matching `query`. The query is evaluated as
/// written, without validation.
pub fn matching<S: SceneStore>(store: &S, query: &str) -> Result<CmdResult> {
    let scene = store.load_scene()?;
    let names: Vec<String> = match_query(query, &scene.objects).into_iter().collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Query matched {} object(s)",
        names.len()
    )));
    Ok(result.with_affected_objects(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::VgError;
    use crate::query::QueryValidationError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn validate_reports_errors() {
        assert!(validate("tag:a AND NOT tag:b").is_ok());
        assert!(matches!(
            validate("tag:a NOT"),
            Err(VgError::InvalidQuery(QueryValidationError::TrailingOperator))
        ));
        assert!(matches!(
            validate(""),
            Err(VgError::InvalidQuery(QueryValidationError::Empty))
        ));
    }

    #[test]
    fn explain_shows_grouping() {
        let result = explain("tag:a OR tag:b AND tag:c").unwrap();
        assert_eq!(result.messages[0].content, "tag:a OR (tag:b AND tag:c)");
        assert_eq!(result.messages[1].content, "Tags: a, b, c");
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn explain_flags_invalid_queries() {
        let result = explain("OR tag:a").unwrap();
        let last = result.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Warning);
        assert_eq!(last.content, "Invalid query: Query cannot start with AND or OR");
    }

    #[test]
    fn matching_scans_scene() {
        let store = StoreFixture::new()
            .with_object("Desk", &["wood", "office"])
            .with_object("Chair", &["wood"])
            .with_object("Lamp", &["office"])
            .build();

        let result = matching(&store, "tag:wood AND NOT tag:office").unwrap();
        assert_eq!(result.affected_objects, vec!["Chair"]);

        let result = matching(&store, "").unwrap();
        assert!(result.affected_objects.is_empty());
    }
}

use crate::commands::{CmdMessage, CmdResult, ListedView};
use crate::error::{Result, VgError};
use crate::model::View;
use crate::query::validate_query;
use crate::store::SceneStore;
use crate::views::resolve_view;
use uuid::Uuid;

use super::helpers::{refresh_count, resolve_view_index};

/// Creates an empty View with a fresh guid and makes it active.
pub fn add<S: SceneStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VgError::Api("View name cannot be empty".to_string()));
    }

    let mut scene = store.load_scene()?;
    scene
        .views
        .push(View::new(name, Uuid::new_v4().to_string()));
    let index = scene.views.len() - 1;
    scene.active_view = Some(index);
    store.save_scene(&scene)?;

    let mut result = CmdResult::default().with_listed_views(vec![ListedView {
        index,
        view: scene.views[index].clone(),
        active: true,
    }]);
    result.add_message(CmdMessage::success(format!("Created View '{}'", name)));
    Ok(result)
}

/// Deletes a View. Membership tags of the deleted View stay on the objects.
pub fn delete<S: SceneStore>(store: &mut S, index: Option<usize>) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, index)?;
    let removed = scene.views.remove(index);

    scene.active_view = match scene.active_view {
        _ if scene.views.is_empty() => None,
        Some(active) if active > index => Some(active - 1),
        Some(active) => Some(active.min(scene.views.len() - 1)),
        None => None,
    };
    store.save_scene(&scene)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted View '{}'",
        removed.name
    )));
    Ok(result)
}

/// Replaces a View's query. An empty query is allowed and turns the View
/// into a membership-only View.
pub fn set_query<S: SceneStore>(
    store: &mut S,
    index: Option<usize>,
    query: &str,
) -> Result<CmdResult> {
    if !query.trim().is_empty() {
        validate_query(query)?;
    }

    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, index)?;
    scene.views[index].query = query.to_string();
    store.save_scene(&scene)?;

    let mut result = CmdResult::default();
    let name = &scene.views[index].name;
    if query.trim().is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Cleared query of View '{}'",
            name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Set query of View '{}' to: {}",
            name, query
        )));
    }
    Ok(result)
}

/// Validates the View's query (when present) and refreshes its cached count.
pub fn apply_query<S: SceneStore>(store: &mut S, index: Option<usize>) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, index)?;

    let query = &scene.views[index].query;
    if !query.trim().is_empty() {
        validate_query(query)?;
    }

    let count = refresh_count(&mut scene, index);
    store.save_scene(&scene)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Query matched {} object(s)",
        count
    )));
    Ok(result)
}

pub fn list<S: SceneStore>(store: &S) -> Result<CmdResult> {
    let scene = store.load_scene()?;
    let listed: Vec<ListedView> = scene
        .views
        .iter()
        .enumerate()
        .map(|(index, view)| ListedView {
            index,
            view: view.clone(),
            active: scene.active_view == Some(index),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No Views yet"));
    }
    Ok(result.with_listed_views(listed))
}

/// Resolves a View and returns its objects. Does not touch the cached count.
pub fn show<S: SceneStore>(store: &S, index: Option<usize>) -> Result<CmdResult> {
    let scene = store.load_scene()?;
    let index = resolve_view_index(&scene, index)?;
    let view = &scene.views[index];
    let names: Vec<String> = resolve_view(view, &scene.objects).into_iter().collect();

    let mut result = CmdResult::default().with_listed_views(vec![ListedView {
        index,
        view: view.clone(),
        active: scene.active_view == Some(index),
    }]);
    if names.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "View '{}' has no objects",
            view.name
        )));
    }
    Ok(result.with_affected_objects(names))
}

pub fn activate<S: SceneStore>(store: &mut S, index: usize) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, Some(index))?;
    scene.active_view = Some(index);
    store.save_scene(&scene)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Active View: '{}'",
        scene.views[index].name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryValidationError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::views::membership_tag;

    #[test]
    fn add_view_gets_guid_and_becomes_active() {
        let mut store = InMemoryStore::new();
        add(&mut store, "First").unwrap();
        add(&mut store, "  Second ").unwrap();

        let scene = store.scene();
        assert_eq!(scene.views.len(), 2);
        assert_eq!(scene.views[1].name, "Second");
        assert_eq!(scene.active_view, Some(1));
        assert!(Uuid::parse_str(&scene.views[0].guid).is_ok());
        assert_ne!(scene.views[0].guid, scene.views[1].guid);
        assert_eq!(scene.views[1].cached_count, 0);
        assert!(scene.views[1].query.is_empty());
    }

    #[test]
    fn add_view_requires_name() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            add(&mut store, "   "),
            Err(VgError::Api(msg)) if msg == "View name cannot be empty"
        ));
    }

    #[test]
    fn delete_active_clamps_index() {
        let mut store = StoreFixture::new()
            .with_view("A", "g1", "")
            .with_view("B", "g2", "")
            .build();
        assert_eq!(store.scene().active_view, Some(1));

        let result = delete(&mut store, None).unwrap();
        assert_eq!(result.messages[0].content, "Deleted View 'B'");
        assert_eq!(store.scene().active_view, Some(0));

        delete(&mut store, None).unwrap();
        assert_eq!(store.scene().active_view, None);
        assert!(matches!(
            delete(&mut store, None),
            Err(VgError::NoViewSelected)
        ));
    }

    #[test]
    fn delete_before_active_keeps_same_view_active() {
        let mut store = StoreFixture::new()
            .with_view("A", "g1", "")
            .with_view("B", "g2", "")
            .with_view("C", "g3", "")
            .build();

        delete(&mut store, Some(0)).unwrap();

        let scene = store.scene();
        let active = scene.active_view.unwrap();
        assert_eq!(scene.views[active].name, "C");
    }

    #[test]
    fn set_query_validates() {
        let mut store = StoreFixture::new().with_view("A", "g1", "").build();

        assert!(matches!(
            set_query(&mut store, None, "tag:a AND"),
            Err(VgError::InvalidQuery(QueryValidationError::TrailingOperator))
        ));
        set_query(&mut store, None, "tag:a OR tag:b").unwrap();
        assert_eq!(store.scene().views[0].query, "tag:a OR tag:b");

        set_query(&mut store, None, "").unwrap();
        assert!(store.scene().views[0].query.is_empty());
    }

    #[test]
    fn apply_query_counts_hybrid_members() {
        let member = membership_tag("g1");
        let mut store = StoreFixture::new()
            .with_object("Desk", &["desk"])
            .with_object("Lamp", &[member.as_str()])
            .with_object("Rug", &[])
            .with_view("Office", "g1", "tag:desk")
            .build();

        let result = apply_query(&mut store, None).unwrap();

        assert_eq!(store.scene().views[0].cached_count, 2);
        assert_eq!(result.messages[0].content, "Query matched 2 object(s)");
    }

    #[test]
    fn apply_query_rejects_stored_invalid_query() {
        let mut store = StoreFixture::new()
            .with_object("Desk", &["desk"])
            .with_view("Broken", "g1", "OR tag:desk")
            .build();

        assert!(matches!(
            apply_query(&mut store, None),
            Err(VgError::InvalidQuery(QueryValidationError::LeadingOperator))
        ));
        assert_eq!(store.scene().views[0].cached_count, 0);
    }

    #[test]
    fn list_marks_active() {
        let store = StoreFixture::new()
            .with_view("A", "g1", "")
            .with_view("B", "g2", "tag:x")
            .build();
        let result = list(&store).unwrap();
        assert_eq!(result.listed_views.len(), 2);
        assert!(!result.listed_views[0].active);
        assert!(result.listed_views[1].active);
    }

    #[test]
    fn show_resolves_without_touching_count() {
        let store = StoreFixture::new()
            .with_object("Desk", &["desk"])
            .with_object("Lamp", &["lamp"])
            .with_view("Desks", "g1", "tag:desk")
            .build();

        let result = show(&store, None).unwrap();

        assert_eq!(result.affected_objects, vec!["Desk"]);
        assert_eq!(store.scene().views[0].cached_count, 0);
    }

    #[test]
    fn activate_by_index() {
        let mut store = StoreFixture::new()
            .with_view("A", "g1", "")
            .with_view("B", "g2", "")
            .build();
        activate(&mut store, 0).unwrap();
        assert_eq!(store.scene().active_view, Some(0));
        assert!(activate(&mut store, 7).is_err());
    }
}

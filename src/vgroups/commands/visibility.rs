//! Whole-View toggles.
//!
//! Each toggle looks at the View's current state first: if every object is
//! already visible (or render-visible, or selected) the toggle turns the
//! property off for all of them, otherwise on for all of them. Mixed Views
//! therefore converge instead of flipping object by object.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scene;
use crate::store::SceneStore;

use super::helpers::{names_at, resolve_view_index, view_object_indexes};

pub fn toggle_visibility<S: SceneStore>(
    store: &mut S,
    view_index: Option<usize>,
) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, view_index)?;
    let view_name = scene.views[index].name.clone();
    let indexes = view_object_indexes(&scene, index);
    if indexes.is_empty() {
        return Ok(empty_view());
    }

    let all_visible = indexes.iter().all(|&i| !scene.objects[i].hide_viewport);
    for &i in &indexes {
        scene.objects[i].hide_viewport = all_visible;
    }
    store.save_scene(&scene)?;

    let action = if all_visible { "Hid" } else { "Showed" };
    let message = format!(
        "{} {} object(s) in View '{}'",
        action,
        indexes.len(),
        view_name
    );
    finish(&scene, &indexes, message)
}

pub fn toggle_render<S: SceneStore>(
    store: &mut S,
    view_index: Option<usize>,
) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, view_index)?;
    let view_name = scene.views[index].name.clone();
    let indexes = view_object_indexes(&scene, index);
    if indexes.is_empty() {
        return Ok(empty_view());
    }

    let all_render_visible = indexes.iter().all(|&i| !scene.objects[i].hide_render);
    for &i in &indexes {
        scene.objects[i].hide_render = all_render_visible;
    }
    store.save_scene(&scene)?;

    let action = if all_render_visible {
        "Hid from render"
    } else {
        "Enabled for render"
    };
    let message = format!(
        "{} {} object(s) in View '{}'",
        action,
        indexes.len(),
        view_name
    );
    finish(&scene, &indexes, message)
}

/// Selects or deselects the View's objects together with all their
/// descendants. Other objects keep their selection state.
pub fn toggle_selection<S: SceneStore>(
    store: &mut S,
    view_index: Option<usize>,
) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, view_index)?;
    let view_name = scene.views[index].name.clone();
    let mut indexes = view_object_indexes(&scene, index);
    if indexes.is_empty() {
        return Ok(empty_view());
    }

    let roots = names_at(&scene, &indexes);
    for root in &roots {
        for child in scene.children_recursive(root) {
            if let Some(pos) = scene.objects.iter().position(|o| o.name == child) {
                if !indexes.contains(&pos) {
                    indexes.push(pos);
                }
            }
        }
    }

    let all_selected = indexes.iter().all(|&i| scene.objects[i].selected);
    for &i in &indexes {
        scene.objects[i].selected = !all_selected;
    }
    store.save_scene(&scene)?;

    let action = if all_selected { "Deselected" } else { "Selected" };
    let message = format!(
        "{} {} object(s) from View '{}'",
        action,
        indexes.len(),
        view_name
    );
    finish(&scene, &indexes, message)
}

fn empty_view() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning("View has no objects"));
    result
}

fn finish(scene: &Scene, indexes: &[usize], message: String) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_affected_objects(names_at(scene, indexes));
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn office() -> InMemoryStore {
        StoreFixture::new()
            .with_object("Desk", &["office"])
            .with_object("Lamp", &["office"])
            .with_object("Rug", &[])
            .with_view("Office", "g1", "tag:office")
            .build()
    }

    #[test]
    fn visibility_hides_when_all_visible() {
        let mut store = office();

        let result = toggle_visibility(&mut store, None).unwrap();

        let scene = store.scene();
        assert!(scene.object("Desk").unwrap().hide_viewport);
        assert!(scene.object("Lamp").unwrap().hide_viewport);
        assert!(!scene.object("Rug").unwrap().hide_viewport);
        assert_eq!(result.messages[0].content, "Hid 2 object(s) in View 'Office'");
    }

    #[test]
    fn visibility_shows_all_when_mixed() {
        let mut store = office();
        let mut scene = store.scene().clone();
        scene.object_mut("Desk").unwrap().hide_viewport = true;
        store.save_scene(&scene).unwrap();

        let result = toggle_visibility(&mut store, None).unwrap();

        let scene = store.scene();
        assert!(!scene.object("Desk").unwrap().hide_viewport);
        assert!(!scene.object("Lamp").unwrap().hide_viewport);
        assert!(result.messages[0].content.starts_with("Showed 2"));
    }

    #[test]
    fn render_toggle() {
        let mut store = office();
        toggle_render(&mut store, Some(0)).unwrap();
        assert!(store.scene().object("Lamp").unwrap().hide_render);

        let result = toggle_render(&mut store, Some(0)).unwrap();
        assert!(!store.scene().object("Lamp").unwrap().hide_render);
        assert!(result.messages[0].content.starts_with("Enabled for render"));
    }

    #[test]
    fn selection_includes_descendants() {
        let mut store = StoreFixture::new()
            .with_object("Table", &["office"])
            .with_child("Leg", "Table")
            .with_child("Screw", "Leg")
            .with_object("Rug", &[])
            .with_selected(&["Rug"])
            .with_view("Office", "g1", "tag:office")
            .build();

        let result = toggle_selection(&mut store, None).unwrap();

        assert_eq!(
            store.scene().selected_names(),
            vec!["Table", "Leg", "Screw", "Rug"]
        );
        assert_eq!(
            result.messages[0].content,
            "Selected 3 object(s) from View 'Office'"
        );

        toggle_selection(&mut store, None).unwrap();
        assert_eq!(store.scene().selected_names(), vec!["Rug"]);
    }

    #[test]
    fn empty_view_warns() {
        let mut store = StoreFixture::new()
            .with_object("Rug", &[])
            .with_view("Nothing", "g1", "tag:missing")
            .build();

        let result = toggle_visibility(&mut store, None).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "View has no objects");
        assert!(!store.scene().object("Rug").unwrap().hide_viewport);
    }
}

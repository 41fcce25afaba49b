use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SceneStore;
use crate::views;

use super::helpers::{names_at, objects_at, refresh_count, resolve_targets, resolve_view_index};

/// Adds the target objects to a View's explicit membership.
pub fn add<S: SceneStore, N: AsRef<str>>(
    store: &mut S,
    view_index: Option<usize>,
    targets: &[N],
) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, view_index)?;
    let indexes = resolve_targets(&scene, targets)?;
    if indexes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("No objects selected"));
        return Ok(result);
    }

    let view = scene.views[index].clone();
    let count = views::add_members(&view, objects_at(&mut scene, &indexes))?;
    refresh_count(&mut scene, index);
    store.save_scene(&scene)?;

    let mut result = CmdResult::default().with_affected_objects(names_at(&scene, &indexes));
    result.add_message(CmdMessage::success(format!(
        "Added {} object(s) to View '{}'",
        count, view.name
    )));
    Ok(result)
}

/// Removes the target objects from a View's explicit membership. Objects the
/// query matches stay in the View.
pub fn remove<S: SceneStore, N: AsRef<str>>(
    store: &mut S,
    view_index: Option<usize>,
    targets: &[N],
) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, view_index)?;
    let indexes = resolve_targets(&scene, targets)?;
    if indexes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("No objects selected"));
        return Ok(result);
    }

    let view = scene.views[index].clone();
    let count = views::remove_members(&view, objects_at(&mut scene, &indexes))?;
    refresh_count(&mut scene, index);
    store.save_scene(&scene)?;

    let mut result = CmdResult::default().with_affected_objects(names_at(&scene, &indexes));
    result.add_message(CmdMessage::success(format!(
        "Removed {} object(s) from View '{}'",
        count, view.name
    )));
    Ok(result)
}

/// Drops every explicit member of a View.
pub fn clear<S: SceneStore>(store: &mut S, view_index: Option<usize>) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let index = resolve_view_index(&scene, view_index)?;

    let view = scene.views[index].clone();
    let count = views::clear_membership(&view, scene.objects.iter_mut())?;
    refresh_count(&mut scene, index);
    store.save_scene(&scene)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} object(s) from membership in View '{}'",
        count, view.name
    )));
    Ok(result)
}

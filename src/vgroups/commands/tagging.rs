use crate::commands::{CmdMessage, CmdResult, TagCount};
use crate::config::{TagSort, VgConfig};
use crate::error::{Result, VgError};
use crate::store::SceneStore;
use crate::tags::{self, validate_tag_name};
use crate::views::is_membership_tag;

use super::helpers::{names_at, objects_at, resolve_targets};

/// Rejects names the user may not type: invalid ones and the membership prefix.
pub(crate) fn check_user_tag(tag: &str) -> Result<()> {
    validate_tag_name(tag)?;
    if is_membership_tag(tag) {
        return Err(VgError::ReservedTag(tag.to_string()));
    }
    Ok(())
}

pub fn add<S: SceneStore, N: AsRef<str>>(
    store: &mut S,
    targets: &[N],
    tag: &str,
) -> Result<CmdResult> {
    let tag = tag.trim();
    check_user_tag(tag)?;

    let mut scene = store.load_scene()?;
    let indexes = resolve_targets(&scene, targets)?;
    if indexes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("No objects selected"));
        return Ok(result);
    }

    for obj in objects_at(&mut scene, &indexes) {
        tags::add_tag(obj, tag)?;
    }
    store.save_scene(&scene)?;

    let mut result = CmdResult::default().with_affected_objects(names_at(&scene, &indexes));
    result.add_message(CmdMessage::success(format!(
        "Added tag '{}' to {} object(s)",
        tag,
        indexes.len()
    )));
    Ok(result)
}

pub fn remove<S: SceneStore, N: AsRef<str>>(
    store: &mut S,
    targets: &[N],
    tag: &str,
) -> Result<CmdResult> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(VgError::Api("No tag specified".to_string()));
    }

    let mut scene = store.load_scene()?;
    let indexes = resolve_targets(&scene, targets)?;
    if indexes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("No objects selected"));
        return Ok(result);
    }

    for obj in objects_at(&mut scene, &indexes) {
        tags::remove_tag(obj, tag)?;
    }
    store.save_scene(&scene)?;

    let mut result = CmdResult::default().with_affected_objects(names_at(&scene, &indexes));
    result.add_message(CmdMessage::success(format!(
        "Removed tag '{}' from {} object(s)",
        tag,
        indexes.len()
    )));
    Ok(result)
}

/// Lists tags with usage counts, scene-wide or for the named objects.
///
/// Unlike the editing commands, an empty target list means the whole scene.
pub fn list<S: SceneStore, N: AsRef<str>>(
    store: &S,
    config: &VgConfig,
    objects: &[N],
) -> Result<CmdResult> {
    let scene = store.load_scene()?;

    let usage = if objects.is_empty() {
        tags::tag_usage(&scene.objects)
    } else {
        let indexes = resolve_targets(&scene, objects)?;
        tags::tag_usage(indexes.iter().map(|&i| &scene.objects[i]))
    };

    let mut listed: Vec<TagCount> = usage
        .into_iter()
        .filter(|(tag, _)| !(config.hide_membership_tags && is_membership_tag(tag)))
        .map(|(tag, count)| TagCount { tag, count })
        .collect();

    if config.tag_sort == TagSort::Usage {
        // Stable sort keeps the alphabetical order among equal counts.
        listed.sort_by(|a, b| b.count.cmp(&a.count));
    }

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No tags found"));
    }
    Ok(result.with_listed_tags(listed))
}

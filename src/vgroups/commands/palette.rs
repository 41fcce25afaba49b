//! Tag palette: pick a few tags, then act on every object carrying them.
//!
//! The picked tags live in `Scene::palette`, sorted. Every action other than
//! [`toggle`] consumes the palette, clearing it once it ran.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VgError};
use crate::scan::{filter_by_tags, FilterMode};
use crate::store::SceneStore;
use crate::tags;

use super::helpers::{names_at, objects_at, resolve_targets};
use super::tagging::check_user_tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    Hide,
    Show,
    ToggleVisibility,
    /// Replace the selection with the matching objects
    Select,
    /// Put the picked tags on the target objects
    AddTags,
    /// Take the picked tags off the target objects
    RemoveTags,
}

/// Adds `tag` to the palette, or removes it if already picked.
pub fn toggle<S: SceneStore>(store: &mut S, tag: &str) -> Result<CmdResult> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(VgError::Api("No tag specified".to_string()));
    }

    let mut scene = store.load_scene()?;
    let picked = match scene.palette.binary_search_by(|t| t.as_str().cmp(tag)) {
        Ok(pos) => {
            scene.palette.remove(pos);
            false
        }
        Err(pos) => {
            scene.palette.insert(pos, tag.to_string());
            true
        }
    };
    store.save_scene(&scene)?;

    let mut result = CmdResult::default();
    let verb = if picked { "Picked" } else { "Unpicked" };
    result.add_message(CmdMessage::info(format!("{} tag '{}'", verb, tag)));
    if !scene.palette.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Palette: [{}]",
            scene.palette.join(", ")
        )));
    }
    Ok(result)
}

pub fn run<S: SceneStore, N: AsRef<str>>(
    store: &mut S,
    mode: FilterMode,
    action: PaletteAction,
    targets: &[N],
) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    if scene.palette.is_empty() {
        return Err(VgError::Api("No tags selected".to_string()));
    }
    let picked = scene.palette.clone();
    let tag_str = picked.join(", ");
    let mut result = CmdResult::default();

    match action {
        PaletteAction::AddTags | PaletteAction::RemoveTags => {
            let indexes = resolve_targets(&scene, targets)?;
            if indexes.is_empty() {
                result.add_message(CmdMessage::warning("No objects selected"));
                return Ok(result);
            }
            if action == PaletteAction::AddTags {
                for tag in &picked {
                    check_user_tag(tag)?;
                }
            }
            for obj in objects_at(&mut scene, &indexes) {
                for tag in &picked {
                    if action == PaletteAction::AddTags {
                        tags::add_tag(obj, tag)?;
                    } else {
                        tags::remove_tag(obj, tag)?;
                    }
                }
            }
            let message = if action == PaletteAction::AddTags {
                format!("Added tags [{}] to {} object(s)", tag_str, indexes.len())
            } else {
                format!("Removed tags [{}] from {} object(s)", tag_str, indexes.len())
            };
            result.add_message(CmdMessage::success(message));
            result.affected_objects = names_at(&scene, &indexes);
        }
        PaletteAction::Hide
        | PaletteAction::Show
        | PaletteAction::ToggleVisibility
        | PaletteAction::Select => {
            let matched = filter_by_tags(&scene.objects, &picked, mode);
            for obj in scene.objects.iter_mut() {
                let hit = matched.contains(&obj.name);
                match action {
                    PaletteAction::Hide if hit => obj.hide_viewport = true,
                    PaletteAction::Show if hit => obj.hide_viewport = false,
                    PaletteAction::ToggleVisibility if hit => {
                        obj.hide_viewport = !obj.hide_viewport
                    }
                    PaletteAction::Select => obj.selected = hit,
                    _ => {}
                }
            }
            let verb = match action {
                PaletteAction::Hide => "Hid",
                PaletteAction::Show => "Showed",
                PaletteAction::ToggleVisibility => "Toggled visibility for",
                _ => "Selected",
            };
            result.add_message(CmdMessage::success(format!(
                "{} {} object(s)",
                verb,
                matched.len()
            )));
            result.affected_objects = matched.into_iter().collect();
        }
    }

    scene.palette.clear();
    store.save_scene(&scene)?;
    Ok(result)
}

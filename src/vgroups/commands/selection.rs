use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SceneStore;

use super::helpers::{names_at, resolve_targets};

/// Replaces the scene selection with the named objects. No names clears it.
pub fn select<S: SceneStore, N: AsRef<str>>(store: &mut S, names: &[N]) -> Result<CmdResult> {
    let mut scene = store.load_scene()?;
    let indexes = if names.is_empty() {
        Vec::new()
    } else {
        resolve_targets(&scene, names)?
    };

    for (i, obj) in scene.objects.iter_mut().enumerate() {
        obj.selected = indexes.contains(&i);
    }
    store.save_scene(&scene)?;

    let mut result = CmdResult::default().with_affected_objects(names_at(&scene, &indexes));
    if indexes.is_empty() {
        result.add_message(CmdMessage::info("Selection cleared"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Selected {} object(s)",
            indexes.len()
        )));
    }
    Ok(result)
}

use crate::error::{Result, VgError};
use crate::model::{Scene, SceneObject};
use crate::views::resolve_view;

/// Positions of the target objects in `scene.objects`.
///
/// An empty `names` list targets the current selection. Unknown names fail the
/// whole command before anything is changed.
pub fn resolve_targets<N: AsRef<str>>(scene: &Scene, names: &[N]) -> Result<Vec<usize>> {
    if names.is_empty() {
        return Ok(scene
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.selected)
            .map(|(i, _)| i)
            .collect());
    }

    let mut indexes = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let idx = scene
            .objects
            .iter()
            .position(|o| o.name == name)
            .ok_or_else(|| VgError::ObjectNotFound(name.to_string()))?;
        if !indexes.contains(&idx) {
            indexes.push(idx);
        }
    }
    Ok(indexes)
}

/// Mutable access to the objects at `indexes`.
pub fn objects_at<'a>(
    scene: &'a mut Scene,
    indexes: &'a [usize],
) -> impl Iterator<Item = &'a mut SceneObject> + 'a {
    scene
        .objects
        .iter_mut()
        .enumerate()
        .filter(move |(i, _)| indexes.contains(i))
        .map(|(_, o)| o)
}

/// The View addressed by `index`, or the active View when `None`.
pub fn resolve_view_index(scene: &Scene, index: Option<usize>) -> Result<usize> {
    match index.or(scene.active_view) {
        Some(idx) if idx < scene.views.len() => Ok(idx),
        _ => Err(VgError::NoViewSelected),
    }
}

/// Positions of every object currently in the View at `view_index`.
pub fn view_object_indexes(scene: &Scene, view_index: usize) -> Vec<usize> {
    let names = resolve_view(&scene.views[view_index], &scene.objects);
    scene
        .objects
        .iter()
        .enumerate()
        .filter(|(_, o)| names.contains(&o.name))
        .map(|(i, _)| i)
        .collect()
}

/// Re-resolves the View at `view_index` and stores its size.
pub fn refresh_count(scene: &mut Scene, view_index: usize) -> usize {
    let count = resolve_view(&scene.views[view_index], &scene.objects).len();
    scene.views[view_index].cached_count = count;
    count
}

pub fn names_at(scene: &Scene, indexes: &[usize]) -> Vec<String> {
    indexes
        .iter()
        .map(|&i| scene.objects[i].name.clone())
        .collect()
}

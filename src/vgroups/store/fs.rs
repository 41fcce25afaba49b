use super::SceneStore;
use crate::error::Result;
use crate::model::Scene;
use std::fs;
use std::path::PathBuf;

/// Scene stored as one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl SceneStore for FileStore {
    fn load_scene(&self) -> Result<Scene> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no scene file, starting empty");
            return Ok(Scene::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let scene: Scene = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            objects = scene.objects.len(),
            views = scene.views.len(),
            "loaded scene"
        );
        Ok(scene)
    }

    fn save_scene(&mut self, scene: &Scene) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(scene)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "saved scene");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VgError;
    use crate::model::{SceneObject, View};
    use crate::tags::{add_tag, get_tags};
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty_scene() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("scene.json"));
        assert_eq!(store.load_scene().unwrap(), Scene::default());
    }

    #[test]
    fn save_creates_parent_dirs_and_roundtrips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scene.json");
        let mut store = FileStore::new(&path);

        let mut obj = SceneObject::new("Desk");
        add_tag(&mut obj, "desk").unwrap();
        let scene = Scene {
            objects: vec![obj],
            views: vec![View::new("Desks", "g-1").with_query("tag:desk")],
            active_view: Some(0),
            palette: vec!["desk".into()],
        };
        store.save_scene(&scene).unwrap();
        assert!(path.exists());

        let loaded = store.load_scene().unwrap();
        assert_eq!(loaded, scene);
        assert_eq!(get_tags(&loaded.objects[0]), vec!["desk"]);
    }

    #[test]
    fn location_names_the_scene_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.json");
        let store = FileStore::new(&path);
        assert_eq!(store.location(), path.display().to_string());
    }

    #[test]
    fn corrupt_scene_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load_scene(), Err(VgError::Serialization(_))));
    }

    #[test]
    fn corrupt_tag_blob_inside_valid_file_is_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.json");
        fs::write(
            &path,
            r#"{"objects": [{"name": "Cube", "properties": {"vg_tags": "[broken"}}]}"#,
        )
        .unwrap();

        let scene = FileStore::new(&path).load_scene().unwrap();
        assert!(get_tags(&scene.objects[0]).is_empty());
    }
}

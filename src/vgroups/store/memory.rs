use super::SceneStore;
use crate::error::Result;
use crate::model::Scene;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    scene: Scene,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl SceneStore for InMemoryStore {
    fn load_scene(&self) -> Result<Scene> {
        Ok(self.scene.clone())
    }

    fn save_scene(&mut self, scene: &Scene) -> Result<()> {
        self.scene = scene.clone();
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{SceneObject, View};
    use crate::tags::set_tags;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_object(mut self, name: &str, tags: &[&str]) -> Self {
            let mut obj = SceneObject::new(name);
            let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            set_tags(&mut obj, &tags).unwrap();
            self.store.scene.objects.push(obj);
            self
        }

        pub fn with_child(mut self, name: &str, parent: &str) -> Self {
            self.store
                .scene
                .objects
                .push(SceneObject::new(name).with_parent(parent));
            self
        }

        pub fn with_selected(mut self, names: &[&str]) -> Self {
            for obj in &mut self.store.scene.objects {
                obj.selected = names.contains(&obj.name.as_str());
            }
            self
        }

        /// Adds a View and makes it active.
        pub fn with_view(mut self, name: &str, guid: &str, query: &str) -> Self {
            self.store
                .scene
                .views
                .push(View::new(name, guid).with_query(query));
            self.store.scene.active_view = Some(self.store.scene.views.len() - 1);
            self
        }

        pub fn with_palette(mut self, tags: &[&str]) -> Self {
            self.store.scene.palette = tags.iter().map(|t| t.to_string()).collect();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

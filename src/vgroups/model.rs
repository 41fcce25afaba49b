use crate::host::{PropertyHost, SceneEntity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One object in a scene.
///
/// This is the host-side object the bundled scene file stores. Properties are
/// arbitrary JSON so the file can hold whatever a real host would; only string
/// values are visible through [`PropertyHost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
    #[serde(default)]
    pub hide_viewport: bool,
    #[serde(default)]
    pub hide_render: bool,
    #[serde(default)]
    pub selected: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            properties: BTreeMap::new(),
            hide_viewport: false,
            hide_render: false,
            selected: false,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

impl PropertyHost for SceneObject {
    fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    fn set_property(&mut self, key: &str, value: String) {
        self.properties.insert(key.to_string(), Value::String(value));
    }
}

impl SceneEntity for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A named virtual grouping of objects.
///
/// Membership is the union of objects matching `query` and objects explicitly
/// added to the View (see [`crate::views`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    /// Stable id used to build the membership tag. Empty on Views created
    /// before ids existed; such Views cannot hold explicit members.
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub query: String,
    /// Object count from the last explicit recompute. May be stale.
    #[serde(default)]
    pub cached_count: usize,
}

impl View {
    pub fn new(name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            query: String::new(),
            cached_count: 0,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn has_guid(&self) -> bool {
        !self.guid.is_empty()
    }
}

/// Everything the host persists for one scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_view: Option<usize>,
    /// Tags currently picked in the tag palette, sorted.
    #[serde(default)]
    pub palette: Vec<String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.objects
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.name.clone())
            .collect()
    }

    /// All descendants of `name`, depth first, not including `name` itself.
    pub fn children_recursive(&self, name: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![name.to_string()];
        while let Some(current) = stack.pop() {
            for child in self
                .objects
                .iter()
                .filter(|o| o.parent.as_deref() == Some(current.as_str()))
            {
                // Guard against parent cycles in hand-edited files.
                if child.name != name && !out.contains(&child.name) {
                    out.push(child.name.clone());
                    stack.push(child.name.clone());
                }
            }
        }
        out
    }
}

//! # Command Layer
//!
//! Every user-facing operation lives here as a plain function over a
//! [`SceneStore`](crate::store::SceneStore). A command loads the scene, edits
//! it, saves it once, and hands back a [`CmdResult`]: what it touched and the
//! messages worth showing. Commands never print.
//!
//! Object targets are names. An empty target list means "the objects currently
//! selected in the scene", the way a host's operators act on the selection.

use crate::config::VgConfig;
use crate::model::View;

pub mod config;
pub mod helpers;
pub mod membership;
pub mod palette;
pub mod query;
pub mod selection;
pub mod tagging;
pub mod views;
pub mod visibility;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A tag and how many objects carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// A View as listed, with its position and whether it is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedView {
    /// Zero-based position in the scene's View list.
    pub index: usize,
    pub view: View,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Names of objects the command changed or matched.
    pub affected_objects: Vec<String>,
    pub listed_tags: Vec<TagCount>,
    pub listed_views: Vec<ListedView>,
    pub config: Option<VgConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_objects(mut self, objects: Vec<String>) -> Self {
        self.affected_objects = objects;
        self
    }

    pub fn with_listed_tags(mut self, tags: Vec<TagCount>) -> Self {
        self.listed_tags = tags;
        self
    }

    pub fn with_listed_views(mut self, views: Vec<ListedView>) -> Self {
        self.listed_views = views;
        self
    }

    pub fn with_config(mut self, config: VgConfig) -> Self {
        self.config = Some(config);
        self
    }
}

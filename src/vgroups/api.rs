//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! vgroups operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: Views are addressed by 1-based display numbers
//!   here and by 0-based positions in the commands
//! - **Loads configuration** for commands whose behavior depends on it
//!
//! It does no printing and holds no business logic.
//!
//! `VgApi<S: SceneStore>` is generic over the storage backend:
//! `VgApi<FileStore>` in the binary, `VgApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::VgConfig;
use crate::error::{Result, VgError};
use crate::store::SceneStore;
use std::path::PathBuf;

pub struct VgApi<S: SceneStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: SceneStore> VgApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_config(&self) -> Result<VgConfig> {
        VgConfig::load(&self.config_dir)
    }

    // --- Tags ---

    pub fn add_tag<N: AsRef<str>>(
        &mut self,
        targets: &[N],
        tag: &str,
    ) -> Result<commands::CmdResult> {
        commands::tagging::add(&mut self.store, targets, tag)
    }

    pub fn remove_tag<N: AsRef<str>>(
        &mut self,
        targets: &[N],
        tag: &str,
    ) -> Result<commands::CmdResult> {
        commands::tagging::remove(&mut self.store, targets, tag)
    }

    pub fn list_tags<N: AsRef<str>>(&self, objects: &[N]) -> Result<commands::CmdResult> {
        let config = self.load_config()?;
        commands::tagging::list(&self.store, &config, objects)
    }

    pub fn select<N: AsRef<str>>(&mut self, names: &[N]) -> Result<commands::CmdResult> {
        commands::selection::select(&mut self.store, names)
    }

    // --- Palette ---

    pub fn palette_toggle(&mut self, tag: &str) -> Result<commands::CmdResult> {
        commands::palette::toggle(&mut self.store, tag)
    }

    pub fn palette_run<N: AsRef<str>>(
        &mut self,
        action: PaletteAction,
        targets: &[N],
    ) -> Result<commands::CmdResult> {
        let config = self.load_config()?;
        commands::palette::run(&mut self.store, config.palette_mode, action, targets)
    }

    // --- Views ---

    pub fn add_view(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::views::add(&mut self.store, name)
    }

    pub fn delete_view(&mut self, number: Option<usize>) -> Result<commands::CmdResult> {
        commands::views::delete(&mut self.store, view_position(number)?)
    }

    pub fn set_query(&mut self, number: Option<usize>, query: &str) -> Result<commands::CmdResult> {
        commands::views::set_query(&mut self.store, view_position(number)?, query)
    }

    pub fn apply_query(&mut self, number: Option<usize>) -> Result<commands::CmdResult> {
        commands::views::apply_query(&mut self.store, view_position(number)?)
    }

    pub fn list_views(&self) -> Result<commands::CmdResult> {
        commands::views::list(&self.store)
    }

    pub fn show_view(&self, number: Option<usize>) -> Result<commands::CmdResult> {
        commands::views::show(&self.store, view_position(number)?)
    }

    pub fn activate_view(&mut self, number: usize) -> Result<commands::CmdResult> {
        let index = view_position(Some(number))?.ok_or(VgError::NoViewSelected)?;
        commands::views::activate(&mut self.store, index)
    }

    // --- Membership ---

    pub fn add_to_view<N: AsRef<str>>(
        &mut self,
        number: Option<usize>,
        targets: &[N],
    ) -> Result<commands::CmdResult> {
        commands::membership::add(&mut self.store, view_position(number)?, targets)
    }

    pub fn remove_from_view<N: AsRef<str>>(
        &mut self,
        number: Option<usize>,
        targets: &[N],
    ) -> Result<commands::CmdResult> {
        commands::membership::remove(&mut self.store, view_position(number)?, targets)
    }

    pub fn clear_membership(&mut self, number: Option<usize>) -> Result<commands::CmdResult> {
        commands::membership::clear(&mut self.store, view_position(number)?)
    }

    // --- Visibility ---

    pub fn toggle_view_visibility(&mut self, number: Option<usize>) -> Result<commands::CmdResult> {
        commands::visibility::toggle_visibility(&mut self.store, view_position(number)?)
    }

    pub fn toggle_view_render(&mut self, number: Option<usize>) -> Result<commands::CmdResult> {
        commands::visibility::toggle_render(&mut self.store, view_position(number)?)
    }

    pub fn toggle_view_selection(&mut self, number: Option<usize>) -> Result<commands::CmdResult> {
        commands::visibility::toggle_selection(&mut self.store, view_position(number)?)
    }

    // --- Queries ---

    pub fn validate_query(&self, query: &str) -> Result<commands::CmdResult> {
        commands::query::validate(query)
    }

    pub fn explain_query(&self, query: &str) -> Result<commands::CmdResult> {
        commands::query::explain(query)
    }

    pub fn match_query(&self, query: &str) -> Result<commands::CmdResult> {
        commands::query::matching(&self.store, query)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

/// Converts a 1-based View number into a position in the View list.
fn view_position(number: Option<usize>) -> Result<Option<usize>> {
    match number {
        None => Ok(None),
        Some(0) => Err(VgError::Api("View numbers start at 1".to_string())),
        Some(n) => Ok(Some(n - 1)),
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::palette::PaletteAction;
pub use commands::{CmdMessage, CmdResult, ListedView, MessageLevel, TagCount};

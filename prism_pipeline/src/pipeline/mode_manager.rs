//! Central graphics mode registry
//!
//! Stores named graphics modes. Multiple modes can be registered
//! simultaneously (e.g. "default", "vibrant") and each can be activated
//! any number of times at different sizes.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::renderer::{FrameRenderer, WorldRenderer};
use super::mode::GraphicsMode;
use super::pipeline::RenderPipeline;

/// Graphics mode registry
pub struct GraphicsModeManager {
    modes: FxHashMap<String, GraphicsMode>,
}

impl GraphicsModeManager {
    /// Create a new empty mode manager
    pub fn new() -> Self {
        Self {
            modes: FxHashMap::default(),
        }
    }

    /// Register a graphics mode under its own name
    ///
    /// # Errors
    ///
    /// Returns an error if a mode with the same name is already registered.
    pub fn register(&mut self, mode: GraphicsMode) -> Result<()> {
        if self.modes.contains_key(mode.name()) {
            crate::render_bail!(
                "prism::GraphicsModeManager",
                "GraphicsMode '{}' already registered",
                mode.name()
            );
        }

        self.modes.insert(mode.name().to_string(), mode);
        Ok(())
    }

    /// Get a mode by name
    pub fn mode(&self, name: &str) -> Option<&GraphicsMode> {
        self.modes.get(name)
    }

    /// Remove a mode by name
    ///
    /// Returns the removed mode, or None if not found.
    pub fn remove_mode(&mut self, name: &str) -> Option<GraphicsMode> {
        self.modes.remove(name)
    }

    /// Get the number of registered modes
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    /// Get all registered mode names
    pub fn mode_names(&self) -> Vec<&str> {
        self.modes.keys().map(|k| k.as_str()).collect()
    }

    /// Remove all registered modes
    pub fn clear(&mut self) {
        self.modes.clear();
    }

    /// Activate a registered mode at a concrete size
    ///
    /// # Errors
    ///
    /// Unknown mode name, or whatever the mode's factory reports.
    pub fn activate(
        &self,
        name: &str,
        world_renderer: &mut dyn WorldRenderer,
        frame_renderer: &mut dyn FrameRenderer,
        width: u32,
        height: u32,
    ) -> Result<RenderPipeline> {
        let mode = match self.modes.get(name) {
            Some(mode) => mode,
            None => crate::render_bail!(
                "prism::GraphicsModeManager",
                "GraphicsMode '{}' is not registered",
                name
            ),
        };
        mode.create_pipeline(world_renderer, frame_renderer, width, height)
    }
}

impl Default for GraphicsModeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mode_manager_tests.rs"]
mod tests;

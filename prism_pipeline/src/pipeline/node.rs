//! Render node — one pass in the frame-rendering graph
//!
//! A node has a fixed extent, an optional depth buffer, a table of named
//! output resources it produces, a table of named input references it
//! consumes, and three life-cycle hooks (construct, render, destroy).
//! Every hook slot is optional: an absent render hook falls through to the
//! frame renderer's default fullscreen path, and an absent destroy hook is
//! a no-op.

use std::sync::{Arc, Weak};

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::render_warn;
use crate::renderer::{FrameRenderer, WorldRenderer};
use super::texture::{TextureHandle, TextureKind, TextureResource};

bitflags! {
    /// Node option flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeFlags: u32 {
        /// The node owns a depth buffer
        const HAS_DEPTH = 1 << 0;
        /// Alpha blending is enabled while this node renders
        const BLENDING = 1 << 1;
    }
}

/// An RGBA color value, used for clear colors and shader inputs
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Plain shader-input value attached to a node
///
/// Nodes carry these as data; how a backend feeds them to an actual shader
/// program is outside this layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(glam::Vec2),
    Vec3(glam::Vec3),
    Vec4(glam::Vec4),
    Mat3(glam::Mat3),
    Mat4(glam::Mat4),
    Color(Color),
    FloatArray(Vec<f32>),
    IntArray(Vec<i32>),
}

/// Construct hook: fires once, synchronously, during the pipeline build,
/// after the node's outputs are registered and before the node is inserted
/// into the pipeline. May allocate backend-side resources.
pub type ConstructHook =
    Box<dyn FnOnce(&RenderNode, &mut dyn WorldRenderer, &mut dyn FrameRenderer) -> Result<()>>;

/// Render hook: fires once per frame when the frame driver reaches the node.
pub type RenderHook = Box<dyn FnMut(&RenderNode, &mut dyn FrameRenderer) -> Result<()>>;

/// Destroy hook: fires exactly once at pipeline teardown. Must release
/// whatever the construct hook acquired.
pub type DestroyHook = Box<dyn FnOnce(&RenderNode) -> Result<()>>;

/// One pass in the frame-rendering graph
///
/// Outputs are owned by the node (`Arc`); inputs are weak references into
/// another node's outputs. Both tables are fixed once the pipeline build
/// completes.
pub struct RenderNode {
    name: String,
    width: u32,
    height: u32,
    flags: NodeFlags,
    outputs: FxHashMap<String, Arc<TextureResource>>,
    inputs: FxHashMap<String, Weak<TextureResource>>,
    uniforms: FxHashMap<String, UniformValue>,
    render_hook: Option<RenderHook>,
    destroy_hook: Option<DestroyHook>,
    /// Per-frame guard: set on first render of a frame, cleared by finish()
    rendered: bool,
    /// Teardown guard: the destroy hook fires at most once
    destroyed: bool,
}

impl RenderNode {
    /// Create a bare node with the given name, extent and flags
    ///
    /// Intended for node builders and for `WorldRenderer` implementations
    /// producing the canonical world node. Output declaration and hook
    /// registration are construction-time operations; once the pipeline
    /// build completes the node must no longer be reshaped.
    pub fn new(name: impl Into<String>, width: u32, height: u32, flags: NodeFlags) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            flags,
            outputs: FxHashMap::default(),
            inputs: FxHashMap::default(),
            uniforms: FxHashMap::default(),
            render_hook: None,
            destroy_hook: None,
            rendered: false,
            destroyed: false,
        }
    }

    /// Declare a named output resource on this node
    ///
    /// Returns a handle usable immediately as a dependency source for
    /// later-declared nodes.
    ///
    /// # Errors
    ///
    /// Rejects a duplicate output name on the same node.
    pub fn declare_output(&mut self, name: &str, kind: TextureKind) -> Result<TextureHandle> {
        if self.outputs.contains_key(name) {
            crate::render_bail!(
                "prism::RenderNode",
                "output '{}' already declared on node '{}'",
                name,
                self.name
            );
        }

        let resource = TextureResource::new(kind);
        self.outputs.insert(name.to_string(), resource.clone());
        Ok(TextureHandle::new(name.to_string(), resource))
    }

    /// Bind a named input to a producer's output resource
    pub(crate) fn bind_input(&mut self, name: &str, resource: Weak<TextureResource>) {
        self.inputs.insert(name.to_string(), resource);
    }

    /// Set or replace the render hook (last write wins)
    pub fn set_render_hook(&mut self, hook: RenderHook) {
        self.render_hook = Some(hook);
    }

    /// Set or replace the destroy hook (last write wins)
    pub fn set_destroy_hook(&mut self, hook: DestroyHook) {
        self.destroy_hook = Some(hook);
    }

    /// Attach a plain shader-input value (last write wins)
    pub fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.uniforms.insert(name.to_string(), value);
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn set_flags(&mut self, flags: NodeFlags) {
        self.flags = flags;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Whether the node owns a depth buffer
    pub fn has_depth(&self) -> bool {
        self.flags.contains(NodeFlags::HAS_DEPTH)
    }

    /// Look up a declared output resource
    pub fn output(&self, name: &str) -> Option<&Arc<TextureResource>> {
        self.outputs.get(name)
    }

    /// Resolve a bound input to its producer's resource
    ///
    /// Returns `None` if the input was never bound or the producer has
    /// already been torn down.
    pub fn input(&self, name: &str) -> Option<Arc<TextureResource>> {
        self.inputs.get(name).and_then(Weak::upgrade)
    }

    /// Names of all declared outputs (unordered)
    pub fn output_names(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    /// Names of all bound inputs (unordered)
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.keys().map(String::as_str)
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Look up an attached shader-input value
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }

    /// Names of all attached shader-input values (unordered)
    pub fn uniform_names(&self) -> impl Iterator<Item = &str> {
        self.uniforms.keys().map(String::as_str)
    }

    /// Render this node for the current frame
    ///
    /// The first call of a frame runs the render hook; repeated calls are
    /// no-ops until [`finish`](Self::finish) resets the frame guard. A node
    /// without a render hook falls through to the frame renderer's default
    /// fullscreen path.
    pub fn render(&mut self, frame: &mut dyn FrameRenderer) -> Result<()> {
        if self.rendered {
            return Ok(());
        }
        self.rendered = true;

        // The hook is taken out for the call so it can borrow the node
        // read-only alongside its own mutable state.
        match self.render_hook.take() {
            Some(mut hook) => {
                let result = hook(&*self, frame);
                self.render_hook = Some(hook);
                result
            }
            None => frame.draw_fullscreen(&*self),
        }
    }

    /// Whether the node has already rendered this frame
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Clear the per-frame render guard
    pub fn finish(&mut self) {
        self.rendered = false;
    }

    /// Tear the node down, firing the destroy hook at most once
    ///
    /// An absent destroy hook is a no-op. Hook failures are logged rather
    /// than propagated; teardown always completes.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;

        if let Some(hook) = self.destroy_hook.take() {
            if let Err(err) = hook(&*self) {
                render_warn!(
                    "prism::RenderNode",
                    "destroy hook for node '{}' failed: {}",
                    self.name,
                    err
                );
            }
        }
    }

    /// Whether the node has been torn down
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Update the node's extent after a surface resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl std::fmt::Debug for RenderNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderNode")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("flags", &self.flags)
            .field("outputs", &self.outputs.len())
            .field("inputs", &self.inputs.len())
            .field("rendered", &self.rendered)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;

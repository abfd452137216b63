//! Render pipeline — the built graph of nodes for one rendering configuration
//!
//! A pipeline is produced by `RenderPipelineBuilder` when a graphics mode is
//! activated at a concrete size. Node registration order is render order.
//! The node set is immutable once the build completes; after that the
//! pipeline is only rendered, resized and eventually destroyed.

use slotmap::{new_key_type, SlotMap};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::render_debug;
use crate::renderer::FrameRenderer;
use super::node::RenderNode;
use super::settings::PipelineSettings;

new_key_type! {
    /// Stable handle to a node registered in a pipeline
    pub struct NodeKey;
}

/// The built graph of render nodes and their wiring for one configuration
pub struct RenderPipeline {
    width: u32,
    height: u32,
    nodes: SlotMap<NodeKey, RenderNode>,
    /// Registration order = render order
    order: Vec<NodeKey>,
    index: FxHashMap<String, NodeKey>,
    /// Node and output name presented at the end of a frame
    output: Option<(NodeKey, String)>,
    settings: PipelineSettings,
    destroyed: bool,
}

impl RenderPipeline {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            index: FxHashMap::default(),
            output: None,
            settings: PipelineSettings::new(),
            destroyed: false,
        }
    }

    /// Register a node under its own name, in render order
    ///
    /// # Errors
    ///
    /// Rejects a name already registered in this pipeline.
    pub(crate) fn insert(&mut self, node: RenderNode) -> Result<NodeKey> {
        if self.index.contains_key(node.name()) {
            crate::render_bail!(
                "prism::RenderPipeline",
                "node '{}' already registered in this pipeline",
                node.name()
            );
        }

        let name = node.name().to_string();
        let key = self.nodes.insert(node);
        self.order.push(key);
        self.index.insert(name, key);
        Ok(key)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&RenderNode> {
        self.index.get(name).and_then(|&key| self.nodes.get(key))
    }

    /// Look up a node by key
    pub fn node_by_key(&self, key: NodeKey) -> Option<&RenderNode> {
        self.nodes.get(key)
    }

    /// Key of a registered node, by name
    pub fn key_of(&self, name: &str) -> Option<NodeKey> {
        self.index.get(name).copied()
    }

    /// Whether a node of this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Node names in registration (= render) order
    pub fn node_names(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter_map(|&key| self.nodes.get(key))
            .map(RenderNode::name)
            .collect()
    }

    /// Tunable settings registered by the pipeline factory
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PipelineSettings {
        &mut self.settings
    }

    /// Name the node output that gets presented at the end of each frame
    ///
    /// # Errors
    ///
    /// The key must belong to this pipeline and the node must declare an
    /// output of the given name.
    pub fn set_output(&mut self, key: NodeKey, output_name: &str) -> Result<()> {
        let node = match self.nodes.get(key) {
            Some(node) => node,
            None => crate::render_bail!(
                "prism::RenderPipeline",
                "output node key does not belong to this pipeline"
            ),
        };
        if node.output(output_name).is_none() {
            crate::render_bail!(
                "prism::RenderPipeline",
                "node '{}' has no output '{}' to present",
                node.name(),
                output_name
            );
        }

        self.output = Some((key, output_name.to_string()));
        Ok(())
    }

    /// The presented node/output pair, if one has been set
    pub fn output(&self) -> Option<(NodeKey, &str)> {
        self.output.as_ref().map(|(key, name)| (*key, name.as_str()))
    }

    /// Check the pipeline is fully configured for frame rendering
    pub fn verify(&self) -> Result<()> {
        if self.destroyed {
            return Err(Error::Lifecycle("pipeline has been destroyed".to_string()));
        }
        if self.output.is_none() {
            return Err(Error::Lifecycle("output node is not set".to_string()));
        }
        Ok(())
    }

    /// Render one frame
    ///
    /// Invokes every node's render hook in registration order, presents the
    /// configured output resource, then clears every node's per-frame guard.
    /// The guards are cleared even when a hook fails mid-walk, so the next
    /// frame renders every node again instead of skipping the ones that ran
    /// before the failure.
    pub fn render(&mut self, frame: &mut dyn FrameRenderer) -> Result<()> {
        self.verify()?;

        let result = self.walk_nodes(frame);

        for &key in &self.order {
            if let Some(node) = self.nodes.get_mut(key) {
                node.finish();
            }
        }

        result
    }

    fn walk_nodes(&mut self, frame: &mut dyn FrameRenderer) -> Result<()> {
        for &key in &self.order {
            if let Some(node) = self.nodes.get_mut(key) {
                node.render(frame)?;
            }
        }

        if let Some((key, name)) = &self.output {
            let resource = self
                .nodes
                .get(*key)
                .and_then(|node| node.output(name))
                .cloned()
                .ok_or_else(|| {
                    Error::Lifecycle(format!("output '{}' vanished from pipeline", name))
                })?;
            frame.present(&resource)?;
        }

        Ok(())
    }

    /// Propagate a surface resize to the pipeline and every node
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        for &key in &self.order {
            if let Some(node) = self.nodes.get_mut(key) {
                node.resize(width, height);
            }
        }
    }

    /// Tear the pipeline down, firing each node's destroy hook exactly once
    ///
    /// Idempotent; also invoked from `Drop` as a safety net.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;

        for &key in &self.order {
            if let Some(node) = self.nodes.get_mut(key) {
                node.destroy();
            }
        }
        render_debug!(
            "prism::RenderPipeline",
            "destroyed pipeline with {} node(s)",
            self.order.len()
        );
    }

    /// Whether the pipeline has been torn down
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Drop for RenderPipeline {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for RenderPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPipeline")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("nodes", &self.node_names())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

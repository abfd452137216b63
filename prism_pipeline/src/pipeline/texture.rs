//! Texture resource handles for the render pipeline
//!
//! A render node declares the textures it produces (outputs) and consumes
//! (inputs). Outputs are owned by the declaring node; consumers only ever
//! hold weak references, so no node owns another node's resources.

use std::sync::{Arc, Weak};

/// Color formats for framebuffer texture outputs
///
/// Closed enumeration of the render-target-capable color formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFormat {
    /// 8-bit RGBA, the default output format
    #[default]
    Rgba8,
    Bgra8,
    Rgb8,
    Rgba16,
    Rgb16,
    Rgba16F,
    /// 32-bit float RGBA, used by HDR pipeline stages
    Rgba32F,
    Rgb16F,
    Rgb32F,
    Red,
    RedInteger,
}

impl TextureFormat {
    /// Number of color channels in this format
    pub fn channels(&self) -> u32 {
        match self {
            TextureFormat::Rgba8
            | TextureFormat::Bgra8
            | TextureFormat::Rgba16
            | TextureFormat::Rgba16F
            | TextureFormat::Rgba32F => 4,
            TextureFormat::Rgb8
            | TextureFormat::Rgb16
            | TextureFormat::Rgb16F
            | TextureFormat::Rgb32F => 3,
            TextureFormat::Red | TextureFormat::RedInteger => 1,
        }
    }

    /// Whether the format stores floating-point components
    pub fn is_float(&self) -> bool {
        matches!(
            self,
            TextureFormat::Rgba16F
                | TextureFormat::Rgba32F
                | TextureFormat::Rgb16F
                | TextureFormat::Rgb32F
        )
    }
}

/// Depth formats for framebuffer depth texture outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthTextureFormat {
    /// 24-bit depth, the default depth format
    #[default]
    Depth24,
    /// 24-bit depth with an 8-bit stencil channel
    Depth24Stencil8,
}

impl DepthTextureFormat {
    /// Whether the format carries a stencil channel
    pub fn has_stencil(&self) -> bool {
        matches!(self, DepthTextureFormat::Depth24Stencil8)
    }
}

/// Kind of a texture resource: color attachment or depth attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Color(TextureFormat),
    Depth(DepthTextureFormat),
}

impl TextureKind {
    /// True for color attachments
    pub fn is_color(&self) -> bool {
        matches!(self, TextureKind::Color(_))
    }

    /// True for depth attachments
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureKind::Depth(_))
    }
}

/// Opaque handle to a single render target
///
/// Created when a node declares an output. The declaring node keeps the
/// owning `Arc`; everything handed to consumers is a `Weak` reference.
/// The extent lives on the owning node, not on the resource — a resize
/// does not re-identify the resource.
#[derive(Debug)]
pub struct TextureResource {
    kind: TextureKind,
}

impl TextureResource {
    pub(crate) fn new(kind: TextureKind) -> Arc<Self> {
        Arc::new(Self { kind })
    }

    /// Kind (color or depth) and format of this resource
    pub fn kind(&self) -> TextureKind {
        self.kind
    }
}

/// Named reference to a node's declared output
///
/// Returned by output declaration on a node builder. The handle is usable
/// immediately as a dependency source for nodes declared later: passing it
/// to `RenderNodeBuilder::dependency` binds the consumer's input under the
/// same name the producer declared.
#[derive(Debug, Clone)]
pub struct TextureHandle {
    name: String,
    resource: Arc<TextureResource>,
}

impl TextureHandle {
    pub(crate) fn new(name: String, resource: Arc<TextureResource>) -> Self {
        Self { name, resource }
    }

    /// Output name the producer declared this resource under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying resource
    pub fn resource(&self) -> &Arc<TextureResource> {
        &self.resource
    }

    /// Downgrade to the non-owning reference stored in consumer input tables
    pub(crate) fn downgrade(&self) -> Weak<TextureResource> {
        Arc::downgrade(&self.resource)
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;

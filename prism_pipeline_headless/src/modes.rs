//! Stock graphics modes
//!
//! Two ready-made modes mirroring the client defaults: "default" presents
//! the world through a single tonemap pass, "vibrant" adds a bloom chain
//! with its tunables exposed as pipeline settings. Both are pure
//! declarations; no pipeline exists until a mode is activated.

use prism_pipeline::prism::render::{
    GraphicsMode, GraphicsModeManager, TextureFormat, UniformValue, WORLD_NODE_NAME,
};
use prism_pipeline::prism::Result;

/// The baseline mode: world pass, tonemap, present
pub fn default_mode() -> GraphicsMode {
    GraphicsMode::new("default", |pipeline| {
        pipeline.world()?;

        let tonemap = pipeline.node("tonemap", false, |node| {
            node.dependency_on(WORLD_NODE_NAME, "color")?;
            node.framebuffer_texture("color", TextureFormat::Rgba8)?;
            node.shader_input("exposure", UniformValue::Float(1.0));
            Ok(())
        })?;

        pipeline.output(tonemap, "color")
    })
}

/// The enhanced mode: world pass, bloom chain, composite, present
pub fn vibrant_mode() -> GraphicsMode {
    GraphicsMode::new("vibrant", |pipeline| {
        pipeline.world()?;
        pipeline.register_bool("bloom", true);
        pipeline.register_int("bloom_radius", 4, 1, 16);

        pipeline.node("bright_pass", false, |node| {
            node.dependency_on(WORLD_NODE_NAME, "color")?;
            node.framebuffer_texture("color", TextureFormat::Rgba16F)?;
            node.shader_input("threshold", UniformValue::Float(1.0));
            Ok(())
        })?;

        let mut blur_handle = None;
        pipeline.node("bloom_blur", false, |node| {
            node.dependency_on("bright_pass", "color")?;
            blur_handle = Some(node.framebuffer_texture("bloom", TextureFormat::Rgba16F)?);
            node.shader_input("radius", UniformValue::Int(4));
            Ok(())
        })?;

        let composite = pipeline.node("composite", false, |node| {
            node.dependency_on(WORLD_NODE_NAME, "color")?;
            if let Some(bloom) = &blur_handle {
                node.dependency(bloom);
            }
            node.framebuffer_texture("color", TextureFormat::Rgba8)?;
            node.shader_input("saturation", UniformValue::Float(1.2));
            node.blending(true);
            Ok(())
        })?;

        pipeline.output(composite, "color")
    })
}

/// A manager pre-loaded with the stock modes
pub fn stock_modes() -> Result<GraphicsModeManager> {
    let mut manager = GraphicsModeManager::new();
    manager.register(default_mode())?;
    manager.register(vibrant_mode())?;
    Ok(manager)
}

#[cfg(test)]
#[path = "modes_tests.rs"]
mod tests;

//! Unit tests for RenderPipeline

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::error::Error;
use crate::pipeline::node::{NodeFlags, RenderNode};
use crate::pipeline::texture::{TextureFormat, TextureKind};
use crate::renderer::mock_renderer::{MockFrameRenderer, MockOp};

fn node_with_color(name: &str) -> RenderNode {
    let mut node = RenderNode::new(name, 1280, 720, NodeFlags::empty());
    node.declare_output("color", TextureKind::Color(TextureFormat::Rgba8))
        .unwrap();
    node
}

// ============================================================================
// NODE TABLE TESTS
// ============================================================================

#[test]
fn test_insert_and_lookup() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    let key = pipeline.insert(node_with_color("scene")).unwrap();

    assert_eq!(pipeline.node_count(), 1);
    assert!(pipeline.contains("scene"));
    assert_eq!(pipeline.key_of("scene"), Some(key));
    assert_eq!(pipeline.node("scene").unwrap().name(), "scene");
    assert_eq!(pipeline.node_by_key(key).unwrap().name(), "scene");
}

#[test]
fn test_insert_duplicate_name_fails() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    pipeline.insert(node_with_color("scene")).unwrap();

    let err = pipeline.insert(node_with_color("scene")).unwrap_err();
    match err {
        Error::Configuration(msg) => assert!(msg.contains("scene")),
        other => panic!("expected Configuration error, got {:?}", other),
    }
    assert_eq!(pipeline.node_count(), 1);
}

#[test]
fn test_registration_order_is_render_order() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    pipeline.insert(node_with_color("scene")).unwrap();
    pipeline.insert(node_with_color("bloom")).unwrap();
    pipeline.insert(node_with_color("post")).unwrap();

    assert_eq!(pipeline.node_names(), vec!["scene", "bloom", "post"]);
}

// ============================================================================
// OUTPUT NODE TESTS
// ============================================================================

#[test]
fn test_set_output_validates_node_and_name() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    let key = pipeline.insert(node_with_color("post")).unwrap();

    assert!(pipeline.set_output(key, "nonexistent").is_err());
    pipeline.set_output(key, "color").unwrap();
    assert_eq!(pipeline.output(), Some((key, "color")));
}

#[test]
fn test_verify_requires_output_node() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    let key = pipeline.insert(node_with_color("post")).unwrap();

    match pipeline.verify().unwrap_err() {
        Error::Lifecycle(msg) => assert!(msg.contains("output node")),
        other => panic!("expected Lifecycle error, got {:?}", other),
    }

    pipeline.set_output(key, "color").unwrap();
    assert!(pipeline.verify().is_ok());
}

// ============================================================================
// FRAME RENDER TESTS
// ============================================================================

#[test]
fn test_render_walks_nodes_in_order_then_presents() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    pipeline.insert(node_with_color("scene")).unwrap();
    let post = pipeline.insert(node_with_color("post")).unwrap();
    pipeline.set_output(post, "color").unwrap();

    let mut frame = MockFrameRenderer::new();
    pipeline.render(&mut frame).unwrap();

    assert_eq!(
        frame.ops,
        vec![
            MockOp::DrawFullscreen("scene".to_string()),
            MockOp::DrawFullscreen("post".to_string()),
            MockOp::Present,
        ]
    );
}

#[test]
fn test_render_clears_per_frame_guards() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    let key = pipeline.insert(node_with_color("post")).unwrap();
    pipeline.set_output(key, "color").unwrap();

    let mut frame = MockFrameRenderer::new();
    pipeline.render(&mut frame).unwrap();
    pipeline.render(&mut frame).unwrap();

    // Without the finish pass the second frame would skip every node.
    assert_eq!(frame.fullscreen_draws.get("post"), Some(&2));
    assert_eq!(frame.present_count(), 2);
}

#[test]
fn test_failed_frame_clears_guards_for_retry() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    pipeline.insert(node_with_color("scene")).unwrap();

    let failed_once = Rc::new(Cell::new(false));
    let mut broken = node_with_color("broken");
    let flag = failed_once.clone();
    broken.set_render_hook(Box::new(move |node, frame| {
        if !flag.get() {
            flag.set(true);
            return Err(Error::Backend("transient draw failure".to_string()));
        }
        frame.draw_fullscreen(node)
    }));
    let key = pipeline.insert(broken).unwrap();
    pipeline.set_output(key, "color").unwrap();

    let mut frame = MockFrameRenderer::new();
    assert!(pipeline.render(&mut frame).is_err());
    assert_eq!(frame.fullscreen_draws.get("scene"), Some(&1));

    // The retried frame renders every node again, including the ones that
    // ran before the failure.
    pipeline.render(&mut frame).unwrap();
    assert_eq!(frame.fullscreen_draws.get("scene"), Some(&2));
    assert_eq!(frame.fullscreen_draws.get("broken"), Some(&1));
    assert_eq!(frame.present_count(), 1);
}

#[test]
fn test_render_without_output_node_fails() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    pipeline.insert(node_with_color("scene")).unwrap();

    let mut frame = MockFrameRenderer::new();
    assert!(pipeline.render(&mut frame).is_err());
    assert!(frame.ops.is_empty());
}

// ============================================================================
// RESIZE TESTS
// ============================================================================

#[test]
fn test_resize_propagates_to_nodes() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    pipeline.insert(node_with_color("scene")).unwrap();
    pipeline.insert(node_with_color("post")).unwrap();

    pipeline.resize(1920, 1080);

    assert_eq!(pipeline.width(), 1920);
    assert_eq!(pipeline.height(), 1080);
    assert_eq!(pipeline.node("scene").unwrap().width(), 1920);
    assert_eq!(pipeline.node("post").unwrap().height(), 1080);
}

// ============================================================================
// TEARDOWN TESTS
// ============================================================================

#[test]
fn test_destroy_fires_each_node_hook_exactly_once() {
    let counter = Rc::new(Cell::new(0u32));

    let mut pipeline = RenderPipeline::new(1280, 720);
    for name in ["scene", "post"] {
        let mut node = node_with_color(name);
        let hook_counter = counter.clone();
        node.set_destroy_hook(Box::new(move |_node| {
            hook_counter.set(hook_counter.get() + 1);
            Ok(())
        }));
        pipeline.insert(node).unwrap();
    }

    pipeline.destroy();
    assert_eq!(counter.get(), 2);
    assert!(pipeline.is_destroyed());

    // Idempotent; the later Drop must not re-fire hooks either.
    pipeline.destroy();
    drop(pipeline);
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_destroy_with_hookless_nodes_is_noop() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    pipeline.insert(node_with_color("scene")).unwrap();
    pipeline.destroy();
    assert!(pipeline.is_destroyed());
}

#[test]
fn test_drop_tears_down_nodes() {
    let counter = Rc::new(Cell::new(0u32));

    {
        let mut pipeline = RenderPipeline::new(1280, 720);
        let mut node = node_with_color("scene");
        let hook_counter = counter.clone();
        node.set_destroy_hook(Box::new(move |_node| {
            hook_counter.set(hook_counter.get() + 1);
            Ok(())
        }));
        pipeline.insert(node).unwrap();
    }

    assert_eq!(counter.get(), 1);
}

#[test]
fn test_render_after_destroy_fails() {
    let mut pipeline = RenderPipeline::new(1280, 720);
    let key = pipeline.insert(node_with_color("post")).unwrap();
    pipeline.set_output(key, "color").unwrap();
    pipeline.destroy();

    let mut frame = MockFrameRenderer::new();
    match pipeline.render(&mut frame).unwrap_err() {
        Error::Lifecycle(msg) => assert!(msg.contains("destroyed")),
        other => panic!("expected Lifecycle error, got {:?}", other),
    }
}

// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-look camera control sharing a style stack with a cursor.
//!
//! While the right button drags the view, `grabbing` outranks the cursor's
//! hover `pointer` request.
//!
//! Run:
//! - `cargo run -p reticle_demos --example mouse_look`

use glam::{Vec2, Vec3};
use reticle_behaviors::{MouseLook, MouseLookConfig, StyleRequester};
use reticle_cast::{SceneGraph, SceneTree, Transform};
use reticle_style::SharedStyleStack;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = SceneTree::new();
    let camera = scene.spawn(None, Transform::IDENTITY);
    let styles = SharedStyleStack::default();

    // Stand-in for a cursor hovering a button.
    let hover = StyleRequester::new(&styles);
    hover.request("pointer").unwrap();

    let config = MouseLookConfig::default()
        .with_drag_button(Some(2))
        .with_sensitivity(0.5);
    let mut look = MouseLook::new(camera, config, &styles);
    println!("suppress context menu: {}", look.suppresses_context_menu());

    look.on_mouse_down(2);
    println!("dragging, cursor: {}", styles.effective_style());
    assert_eq!(styles.effective_style(), "grabbing");

    for step in [Vec2::new(40.0, 0.0), Vec2::new(40.0, -20.0), Vec2::new(0.0, -20.0)] {
        look.on_mouse_move(step, &mut scene);
        let forward = scene.world_rotation(camera).unwrap_or_default() * Vec3::NEG_Z;
        println!(
            "  pitch {:6.2} yaw {:7.2} forward {:.2?}",
            look.pitch(),
            look.yaw(),
            forward
        );
    }

    look.on_mouse_leave();
    println!("released, cursor: {}", styles.effective_style());
    assert_eq!(styles.effective_style(), "pointer");
}

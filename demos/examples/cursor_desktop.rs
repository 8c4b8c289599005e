// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A desktop cursor over two buttons.
//!
//! The camera looks down -Z at two boxes. Pointer samples sweep from empty
//! space onto the left box, press and release it, then move to the right box.
//! The left box carries a `ButtonBehavior`; both report through the cursor's
//! global target.
//!
//! Run:
//! - `cargo run -p reticle_demos --example cursor_desktop`
//! - `RUST_LOG=reticle_cursor=debug cargo run -p reticle_demos --example cursor_desktop`

use std::cell::Cell;
use std::rc::Rc;

use glam::{Mat4, Vec2, Vec3};
use reticle_behaviors::ButtonBehavior;
use reticle_cast::{Aabb3, Collider, CollisionMask, CollisionWorld, SceneTree, Shape, Transform};
use reticle_cursor::{
    CursorConfig, CursorContext, CursorTarget, EventKind, InputEvent, PointerInput, RayCursor,
    TargetRegistry,
};
use reticle_style::SharedStyleStack;
use tracing_subscriber::EnvFilter;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = SceneTree::new();
    let camera = scene.spawn(None, Transform::IDENTITY);
    let mut colliders = CollisionWorld::new();
    let mut targets = TargetRegistry::new();

    let mut spawn_box = |center: Vec3| {
        let e = scene.spawn(None, Transform::from_translation(center));
        colliders.insert(
            Collider::new(e, Shape::Aabb(Aabb3::from_center_size(center, Vec3::ONE)))
                .with_mask(CollisionMask::from_group(1)),
        );
        e
    };
    let left = spawn_box(Vec3::new(-1.5, 0.0, -5.0));
    let right = spawn_box(Vec3::new(1.5, 0.0, -5.0));
    targets.attach(left);
    targets.attach(right);

    let styles = SharedStyleStack::default();
    styles.set_change_handler(|style| println!("  [canvas] cursor: {style}"));

    let clicks = Rc::new(Cell::new(0));
    let c = clicks.clone();
    let mut button = ButtonBehavior::new(left, &styles)
        .with_on_click(move || {
            c.set(c.get() + 1);
            println!("  [button] clicked");
        })
        .with_on_state_change(|state| println!("  [button] {state:?}"));
    button.activate(&mut targets);

    let aspect = VIEWPORT.x / VIEWPORT.y;
    let projection = Mat4::perspective_rh_gl(60_f32.to_radians(), aspect, 0.1, 100.0);
    let mut cursor = RayCursor::new(camera, CursorConfig::default(), styles.clone())
        .with_view(projection, VIEWPORT);
    cursor.activate(&mut scene);

    for kind in EventKind::ALL {
        cursor.global_target_mut().on(kind, move |target, snapshot, _| {
            if let CursorTarget::Entity(e) = target {
                println!(
                    "  [global] {kind:?} entity {} at {:.2?}",
                    e.index(),
                    snapshot.position
                );
            }
        });
    }

    // Screen positions of the two boxes' centers.
    let left_px = Vec2::new(244.0, 300.0);
    let right_px = Vec2::new(556.0, 300.0);

    let at = PointerInput::primary;
    let script = [
        ("move to empty space", InputEvent::PointerMove(at(Vec2::new(400.0, 50.0)))),
        ("move onto left box", InputEvent::PointerMove(at(left_px))),
        ("press", InputEvent::PointerDown(at(left_px))),
        ("release", InputEvent::PointerUp(at(left_px))),
        ("move onto right box", InputEvent::PointerMove(at(right_px))),
    ];
    for (label, event) in script {
        println!("== {label} ==");
        let mut ctx = CursorContext::new(&mut scene, &colliders, &mut targets);
        cursor.handle_input(&event, &mut ctx);
        cursor.update(&mut ctx);
        if let Some(indicator) = cursor.indicator() {
            println!("  [indicator] ray length {:.2}", indicator.ray_length);
        }
    }

    assert_eq!(cursor.hovered(), Some(right));
    assert_eq!(clicks.get(), 1);
    assert_eq!(styles.effective_style(), "pointer");

    println!("== deactivate ==");
    cursor.deactivate(&mut scene, &mut targets);
    button.deactivate(&mut targets);
    assert_eq!(styles.effective_style(), "default");
}

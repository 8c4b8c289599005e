// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An XR controller cursor competing with a reality hit test.
//!
//! A right-hand controller points down -Z at a floor plane reported by the
//! platform's hit test and at a panel in front of it. Object hits win ties;
//! a strictly nearer reality hit takes over the hover. Selects from the left
//! controller are ignored.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p reticle_demos --example cursor_xr_reality`

use glam::{Mat4, Quat, Vec3};
use reticle_cast::{
    Aabb3, Collider, CollisionMask, FixedRealityHitTest, HitTestPayload, PhysicsWorld,
    RealityHit, SceneTree, Shape, Transform,
};
use reticle_cursor::{
    CursorConfig, CursorContext, CursorTarget, EventKind, Handedness, HandednessSetting,
    InputEvent, RaycastMode, RayCursor, TargetRegistry, XrFrameState, XrInput,
};
use reticle_style::SharedStyleStack;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = SceneTree::new();
    let controller = scene.spawn(None, Transform::from_translation(Vec3::new(0.0, 1.2, 0.0)));

    let panel_center = Vec3::new(0.0, 1.2, -3.0);
    let panel = scene.spawn(None, Transform::from_translation(panel_center));
    let mut physics = PhysicsWorld::new();
    physics.insert(
        Collider::new(
            panel,
            Shape::Aabb(Aabb3::from_center_size(panel_center, Vec3::new(2.0, 1.0, 0.1))),
        )
        .with_mask(CollisionMask::from_group(1)),
    );
    // A collider world is still required by the context; physics mode ignores it.
    let colliders = PhysicsWorld::new();

    let mut targets = TargetRegistry::new();
    targets.attach(panel).on(EventKind::Click, |_, snapshot, original| {
        println!("  [panel] selected by {:?} via {original:?}", snapshot.handedness);
    });

    let styles = SharedStyleStack::default();
    let config = CursorConfig::default()
        .with_handedness(HandednessSetting::Right)
        .with_raycast_mode(RaycastMode::Physics)
        .with_max_distance(10.0)
        .with_hit_test(true);
    let mut cursor = RayCursor::new(controller, config, styles.clone())
        .with_input_device(Handedness::Right);
    cursor.activate(&mut scene);
    cursor.on_xr_session_start(Mat4::perspective_rh_gl(1.6, 1.0, 0.05, 50.0));
    println!("hit-test anchor: {:?}", cursor.hit_test_anchor());

    for kind in EventKind::ALL {
        cursor.reality_target_mut().on(kind, move |target, snapshot, _| {
            if let CursorTarget::Reality(payload) = target {
                println!("  [reality] {kind:?} {payload:?} at {:.2?}", snapshot.position);
            }
        });
    }

    let mut reality = FixedRealityHitTest::new();
    let xr = XrFrameState {
        screen_axes: None,
        controller_tracked: true,
    };
    let right = XrInput {
        handedness: Handedness::Right,
    };
    let left = XrInput {
        handedness: Handedness::Left,
    };

    let frames = [
        ("floor behind the panel", Vec3::new(0.0, 1.2, -6.0)),
        ("floor exactly at the panel", Vec3::new(0.0, 1.2, -2.95)),
        ("floor in front of the panel", Vec3::new(0.0, 1.2, -1.0)),
    ];
    for (label, floor) in frames {
        println!("== {label} ==");
        reality.set_result(Some(RealityHit {
            point: floor,
            payload: HitTestPayload(7),
        }));
        let mut ctx = CursorContext::new(&mut scene, &colliders, &mut targets)
            .with_physics(&physics)
            .with_reality(&reality)
            .with_xr(xr);
        cursor.update(&mut ctx);
        println!(
            "  hovered {:?}, reality {}",
            cursor.hovered(),
            cursor.hovering_reality()
        );

        cursor.handle_input(&InputEvent::Select(left), &mut ctx);
        cursor.handle_input(&InputEvent::Select(right), &mut ctx);
    }
    assert!(cursor.hovering_reality());

    println!("== turn away from the panel ==");
    scene.set_local_transform(
        controller,
        Transform::from_translation(Vec3::new(0.0, 1.2, 0.0))
            .with_rotation(Quat::from_rotation_y(core::f32::consts::PI)),
    );
    reality.set_result(None);
    let mut ctx = CursorContext::new(&mut scene, &colliders, &mut targets)
        .with_physics(&physics)
        .with_reality(&reality)
        .with_xr(xr);
    cursor.update(&mut ctx);
    assert_eq!(cursor.hovered(), None);
    assert!(!cursor.hovering_reality());

    cursor.deactivate(&mut scene, &mut targets);
    assert_eq!(cursor.hit_test_anchor(), None);
}

//! End-to-end scenarios for the viewer core
//!
//! These drive `SceneState` through the same calls the UI and frame loop make
//! and check the invariants that must hold between any two calls.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use cmy4d_core::{
    build_cube, Axis, ColorChannel, CoreError, FrameTime, Layer, NodeKind, Role, SceneSettings,
    SceneState, Shape3D, Vec3, View,
};
use cmy4d_input::{CameraControl, OrbitController};

const EPSILON: f32 = 1e-5;

fn scene() -> SceneState {
    SceneState::new(SceneSettings::default()).expect("default settings are valid")
}

fn exactly_one_visible(s: &SceneState) -> bool {
    s.cube().is_visible() != s.tesseract().is_visible()
}

#[test]
fn test_build_cube_scenario() {
    let cube = build_cube(2.0).unwrap();

    let cyan = cube.node(Role::Face(ColorChannel::Cyan, Layer::Outer)).unwrap();
    assert_eq!(cyan.transform.position, Vec3::new(0.0, 0.0, 1.0));

    let magenta = cube.node(Role::Face(ColorChannel::Magenta, Layer::Outer)).unwrap();
    assert_eq!(magenta.transform.position, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(magenta.transform.rotation.x, FRAC_PI_2);

    let yellow = cube.node(Role::Face(ColorChannel::Yellow, Layer::Outer)).unwrap();
    assert_eq!(yellow.transform.position, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(yellow.transform.rotation.y, FRAC_PI_2);

    match &cube.node(Role::Wireframe(Layer::Outer)).unwrap().kind {
        NodeKind::Edges { shape } => assert_eq!(shape.edge_count(), 12),
        other => panic!("cube wireframe is {:?}", other),
    }
}

#[test]
fn test_switch_then_rotate_scenario() {
    let mut s = scene();
    s.switch_to(View::Tesseract);
    s.rotate_axis_named("x").unwrap();

    assert!((s.tesseract().rotation().x - FRAC_PI_4).abs() < EPSILON);
    assert!(s.cube().rotation().is_zero());
    assert!(!s.cube().is_visible());
    assert!(s.tesseract().is_visible());
}

#[test]
fn test_toggle_wireframe_twice_restores_flags() {
    let mut s = scene();
    let before: Vec<Vec<bool>> = s
        .objects()
        .iter()
        .map(|o| o.iter().map(|(_, n)| n.material.wireframe).collect())
        .collect();

    s.toggle_wireframe();
    s.toggle_wireframe();

    let after: Vec<Vec<bool>> = s
        .objects()
        .iter()
        .map(|o| o.iter().map(|(_, n)| n.material.wireframe).collect())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_eight_w_steps_scenario() {
    let mut s = scene();
    s.select_view("tesseract").unwrap();

    let mut seen = Vec::new();
    for _ in 0..8 {
        s.rotate_w();
        seen.push(s.w_scale());
    }
    assert_eq!(seen, vec![0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 1.0]);

    for (channel, expected) in [
        (ColorChannel::Cyan, Vec3::new(0.0, 0.0, 0.5)),
        (ColorChannel::Magenta, Vec3::new(0.5, 0.0, 0.0)),
        (ColorChannel::Yellow, Vec3::new(0.0, 0.5, 0.0)),
    ] {
        let face = s.tesseract().node(Role::Face(channel, Layer::Inner)).unwrap();
        assert!(face.transform.position.approx_eq(expected, EPSILON));
        assert!((face.transform.scale - 0.5).abs() < EPSILON);
    }
}

#[test]
fn test_reset_view_is_idempotent() {
    let mut s = scene();
    s.switch_to(View::Tesseract);
    s.rotate_axis(Axis::Y);
    s.rotate_w();
    s.rotate_w();
    s.camera_mut().orbit(0.4, 0.2);

    s.reset_view();
    let once_rotation = s.tesseract().rotation();
    let once_w = s.w_scale();
    let once_eye = s.camera().position();
    let once_connectors: Vec<_> = (0..8)
        .map(|i| s.tesseract().node(Role::Connector(i)).unwrap().connector_inner())
        .collect();

    s.reset_view();
    assert_eq!(s.tesseract().rotation(), once_rotation);
    assert!(once_rotation.is_zero());
    assert_eq!(s.w_scale(), once_w);
    assert_eq!(once_w, 1.0);
    assert_eq!(s.camera().position(), once_eye);
    assert!(s.camera().is_at_home());
    let twice_connectors: Vec<_> = (0..8)
        .map(|i| s.tesseract().node(Role::Connector(i)).unwrap().connector_inner())
        .collect();
    assert_eq!(once_connectors, twice_connectors);
}

#[test]
fn test_one_object_visible_through_a_session() {
    let mut s = scene();
    assert!(exactly_one_visible(&s));

    let actions: [fn(&mut SceneState); 7] = [
        |s| { s.switch_to(View::Tesseract); },
        |s| { let _ = s.select_view("nope"); },
        |s| { s.rotate_w(); },
        |s| { s.toggle_wireframe(); },
        |s| { s.switch_to(View::Cube); },
        |s| { s.reset_view(); },
        |s| { let _ = s.select_view("tesseract"); },
    ];
    for (frame, action) in actions.iter().enumerate() {
        action(&mut s);
        assert!(exactly_one_visible(&s));
        s.tick(FrameTime::from_millis(frame as u64 * 700));
        assert!(exactly_one_visible(&s));
    }
}

#[test]
fn test_w_scale_bounded_over_long_run() {
    let mut s = scene();
    s.switch_to(View::Tesseract);
    // Three minutes of 60 Hz frames
    for frame in 0..(60 * 180) {
        s.tick(FrameTime::from_millis(frame * 16));
        let w = s.w_scale();
        assert!((0.2..=1.0).contains(&w), "w_scale {} at frame {}", w, frame);
    }
    assert!(s.projection().steps() > 0);
}

#[test]
fn test_connector_outer_endpoints_fixed_over_run() {
    let mut s = scene();
    s.switch_to(View::Tesseract);
    let outer: Vec<_> = (0..8)
        .map(|i| s.tesseract().node(Role::Connector(i)).unwrap().connector_outer())
        .collect();
    for frame in 0..2000 {
        s.tick(FrameTime::from_millis(frame * 16));
    }
    for (i, expected) in outer.iter().enumerate() {
        assert_eq!(&s.tesseract().node(Role::Connector(i)).unwrap().connector_outer(), expected);
    }
}

#[test]
fn test_invalid_ui_input_is_rejected() {
    let mut s = scene();
    s.switch_to(View::Tesseract);
    s.rotate_w();
    let w = s.w_scale();

    assert_eq!(s.select_view("hypercube").unwrap_err(), CoreError::InvalidView("hypercube".into()));
    assert_eq!(s.rotate_axis_named("w").unwrap_err(), CoreError::InvalidAxis("w".into()));
    assert!(s.set_rotation_speed(-3.0).is_err());

    assert_eq!(s.active_view(), View::Tesseract);
    assert_eq!(s.w_scale(), w);
    assert!(s.tesseract().rotation().is_zero());
}

#[test]
fn test_orbit_controller_drives_camera() {
    let mut s = scene();
    let mut controller = OrbitController::new();
    controller.process_mouse_button(winit::event::MouseButton::Left, winit::event::ElementState::Pressed);
    controller.process_mouse_motion(120.0, 0.0);
    controller.update(s.camera_mut());

    for frame in 0..30 {
        s.tick(FrameTime::from_millis(frame * 16));
    }
    assert!(!s.camera().is_at_home());

    s.reset_view();
    assert!(s.camera().is_at_home());
}

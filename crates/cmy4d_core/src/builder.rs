//! Geometry builders for the cube and the tesseract
//!
//! Both builders run once at startup. Every node is registered under its
//! [`Role`], so later stages look parts up by meaning rather than position.

use std::f32::consts::FRAC_PI_2;
use cmy4d_math::{Axis, BoxShape, Euler3, Quad, Vec3};
use crate::error::CoreError;
use crate::material::{ColorChannel, Material};
use crate::node::{Layer, Node, NodeKind, Role};
use crate::object::SceneObject;
use crate::transform::Transform3D;
use crate::view::View;

/// Opacity of the CMY cube faces
pub const CUBE_FACE_OPACITY: f32 = 0.65;
/// Opacity of the CMY cube edge wireframe
pub const CUBE_EDGE_OPACITY: f32 = 0.7;
/// Opacity of the tesseract faces
pub const TESSERACT_FACE_OPACITY: f32 = 0.6;
/// Opacity of the tesseract's translucent shells
pub const SHELL_OPACITY: f32 = 0.25;
/// Opacity of tesseract wireframes and connectors at build time
pub const LINE_OPACITY: f32 = 0.8;
/// Number of connectors, one per cube vertex
pub const CONNECTOR_COUNT: usize = 8;

/// Scale of an inner tesseract face relative to its outer twin
pub const INNER_FACE_SCALE: f32 = 0.5;

/// Color of connector `index`
///
/// Indices 0 and 1 are cyan, 2 and 3 magenta, the rest yellow.
pub fn connector_channel(index: usize) -> ColorChannel {
    match index {
        0 | 1 => ColorChannel::Cyan,
        2 | 3 => ColorChannel::Magenta,
        _ => ColorChannel::Yellow,
    }
}

/// Axis along which a tesseract face of this channel is offset from the center
pub fn face_offset_axis(channel: ColorChannel) -> Axis {
    match channel {
        ColorChannel::Cyan => Axis::Z,
        ColorChannel::Magenta => Axis::X,
        ColorChannel::Yellow => Axis::Y,
    }
}

/// Unit vector along an axis
pub(crate) fn axis_vector(axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::X,
        Axis::Y => Vec3::Y,
        Axis::Z => Vec3::Z,
    }
}

fn validate_size(size: f32) -> Result<f32, CoreError> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(CoreError::InvalidSize(size))
    }
}

/// Build the CMY cube: three orthogonal faces plus the edges of the enclosing box
///
/// Cyan sits on the XY plane at `z = +size/2`, magenta on XZ at `y = +size/2`
/// and yellow on YZ at `x = +size/2`.
pub fn build_cube(size: f32) -> Result<SceneObject, CoreError> {
    let size = validate_size(size)?;
    let h = size * 0.5;
    let mut cube = SceneObject::new(View::Cube);

    let placements = [
        (ColorChannel::Cyan, Vec3::new(0.0, 0.0, h), Euler3::ZERO),
        (ColorChannel::Magenta, Vec3::new(0.0, h, 0.0), Euler3::about(Axis::X, FRAC_PI_2)),
        (ColorChannel::Yellow, Vec3::new(h, 0.0, 0.0), Euler3::about(Axis::Y, FRAC_PI_2)),
    ];
    for (channel, position, rotation) in placements {
        let face = Node::new(
            NodeKind::Face { quad: Quad::new(size) },
            Material::channel(channel, CUBE_FACE_OPACITY),
        )
        .with_transform(Transform3D::from_position_rotation(position, rotation));
        cube.add_node(Role::Face(channel, Layer::Outer), face);
    }

    cube.add_node(
        Role::Wireframe(Layer::Outer),
        Node::new(NodeKind::Edges { shape: BoxShape::new(size) }, Material::white(CUBE_EDGE_OPACITY)),
    );

    log::debug!("Built CMY cube (size {}, {} nodes)", size, cube.node_count());
    Ok(cube)
}

/// Rotation that turns a quad in the XY plane onto the outer face of `channel`
fn tesseract_face_rotation(channel: ColorChannel) -> Euler3 {
    match channel {
        ColorChannel::Cyan => Euler3::ZERO,
        ColorChannel::Magenta => Euler3::about(Axis::Y, FRAC_PI_2),
        ColorChannel::Yellow => Euler3::about(Axis::X, -FRAC_PI_2),
    }
}

/// Canonical position of an inner face: half the outer offset along its axis
pub fn inner_face_position(channel: ColorChannel, outer_half: f32) -> Vec3 {
    axis_vector(face_offset_axis(channel)) * (outer_half * 0.5)
}

/// Build the tesseract projection
///
/// Node order: outer shell, inner shell, connectors 0..8, outer wireframe,
/// inner wireframe, then faces as cyan outer/inner, magenta outer/inner,
/// yellow outer/inner. Connector `i` joins outer vertex `i` to inner vertex
/// `i` in [`BoxShape`] vertex order.
pub fn build_tesseract(outer_size: f32, inner_size: f32) -> Result<SceneObject, CoreError> {
    let outer_size = validate_size(outer_size)?;
    let inner_size = validate_size(inner_size)?;
    if inner_size >= outer_size {
        return Err(CoreError::InnerNotSmaller { outer: outer_size, inner: inner_size });
    }

    let outer_half = outer_size * 0.5;
    let inner_half = inner_size * 0.5;
    let mut tesseract = SceneObject::new(View::Tesseract);

    tesseract.add_node(
        Role::Shell(Layer::Outer),
        Node::new(NodeKind::Shell { shape: BoxShape::new(outer_size) }, Material::white(SHELL_OPACITY)),
    );
    tesseract.add_node(
        Role::Shell(Layer::Inner),
        Node::new(NodeKind::Shell { shape: BoxShape::new(inner_size) }, Material::white(SHELL_OPACITY)),
    );

    for i in 0..CONNECTOR_COUNT {
        let kind = NodeKind::Connector {
            outer: BoxShape::corner(i, outer_half),
            inner: BoxShape::corner(i, inner_half),
        };
        tesseract.add_node(
            Role::Connector(i),
            Node::new(kind, Material::channel(connector_channel(i), LINE_OPACITY)),
        );
    }

    tesseract.add_node(
        Role::Wireframe(Layer::Outer),
        Node::new(NodeKind::Edges { shape: BoxShape::new(outer_size) }, Material::white(LINE_OPACITY)),
    );
    tesseract.add_node(
        Role::Wireframe(Layer::Inner),
        Node::new(NodeKind::Edges { shape: BoxShape::new(inner_size) }, Material::white(LINE_OPACITY)),
    );

    for channel in ColorChannel::ALL {
        let rotation = tesseract_face_rotation(channel);
        let material = Material::channel(channel, TESSERACT_FACE_OPACITY);

        let outer_position = axis_vector(face_offset_axis(channel)) * outer_half;
        let outer = Node::new(NodeKind::Face { quad: Quad::new(outer_size) }, material)
            .with_transform(Transform3D::from_position_rotation(outer_position, rotation));
        tesseract.add_node(Role::Face(channel, Layer::Outer), outer);

        let inner_transform = Transform3D::from_position_rotation(
            inner_face_position(channel, outer_half),
            rotation,
        )
        .with_scale(INNER_FACE_SCALE);
        let inner = Node::new(NodeKind::Face { quad: Quad::new(outer_size) }, material)
            .with_transform(inner_transform);
        tesseract.add_node(Role::Face(channel, Layer::Inner), inner);
    }

    log::debug!(
        "Built tesseract (outer {}, inner {}, {} nodes)",
        outer_size,
        inner_size,
        tesseract.node_count()
    );
    Ok(tesseract)
}

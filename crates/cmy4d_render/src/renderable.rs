//! Renderable geometry - bridges the scene graph to GPU buffers
//!
//! This module flattens the visible object of a [`SceneState`] into two flat
//! vertex lists: filled triangles and line segments, both in world space.

use cmy4d_core::{Node, NodeKind, OrbitCamera, SceneObject, SceneState, Shape3D, Vec3};
use crate::pipeline::{look_at_matrix, mat4_mul, perspective_matrix, SceneUniforms, SceneVertex};

/// GPU-ready geometry for one frame
#[derive(Clone, Debug, Default)]
pub struct RenderableScene {
    /// Triangle list vertices (faces and shells)
    pub triangles: Vec<SceneVertex>,
    /// Line list vertices (wireframes, connectors, faces in wireframe mode)
    pub lines: Vec<SceneVertex>,
}

impl RenderableScene {
    /// Create an empty renderable scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the geometry of every visible object
    pub fn from_scene(scene: &SceneState) -> Self {
        let mut result = Self::new();
        for object in scene.objects() {
            if object.is_visible() {
                result.add_object(object);
            }
        }
        result
    }

    /// Add an object's nodes in construction order
    pub fn add_object(&mut self, object: &SceneObject) {
        let object_transform = object.transform();
        for (_, node) in object.iter() {
            let to_world = |p: Vec3| object_transform.transform_point(node.transform.transform_point(p));
            self.add_node(node, &to_world);
        }
    }

    fn add_node(&mut self, node: &Node, to_world: &dyn Fn(Vec3) -> Vec3) {
        let color = node.material.rgba();
        match &node.kind {
            NodeKind::Face { quad } => self.add_surface(quad, node.material.wireframe, color, to_world),
            NodeKind::Shell { shape } => self.add_surface(shape, node.material.wireframe, color, to_world),
            NodeKind::Edges { shape } => {
                let world: Vec<Vec3> = shape.vertices().iter().map(|v| to_world(*v)).collect();
                for [a, b] in shape.edges() {
                    self.push_line(world[*a], world[*b], color);
                }
            }
            NodeKind::Connector { outer, inner } => {
                self.push_line(to_world(*outer), to_world(*inner), color);
            }
        }
    }

    /// Filled triangles, or the edges of every triangle in wireframe mode
    fn add_surface(&mut self, shape: &dyn Shape3D, wireframe: bool, color: [f32; 4], to_world: &dyn Fn(Vec3) -> Vec3) {
        let world: Vec<Vec3> = shape.vertices().iter().map(|v| to_world(*v)).collect();
        for [a, b, c] in shape.triangles() {
            let (a, b, c) = (world[*a], world[*b], world[*c]);
            if wireframe {
                self.push_line(a, b, color);
                self.push_line(b, c, color);
                self.push_line(c, a, color);
            } else {
                self.triangles.push(SceneVertex::new(a.to_array(), color));
                self.triangles.push(SceneVertex::new(b.to_array(), color));
                self.triangles.push(SceneVertex::new(c.to_array(), color));
            }
        }
    }

    fn push_line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        self.lines.push(SceneVertex::new(a.to_array(), color));
        self.lines.push(SceneVertex::new(b.to_array(), color));
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }
}

/// View-projection uniforms for the camera's current pose
pub fn camera_uniforms(camera: &OrbitCamera) -> SceneUniforms {
    let view = look_at_matrix(
        camera.position().to_array(),
        camera.target().to_array(),
        [0.0, 1.0, 0.0],
    );
    let projection = perspective_matrix(camera.fov_radians(), camera.aspect(), camera.near(), camera.far());
    SceneUniforms {
        view_projection: mat4_mul(view, projection),
    }
}

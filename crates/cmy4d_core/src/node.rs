//! Scene nodes and their semantic roles
//!
//! A [`Node`] is one drawable part of an object: a colored face, a
//! translucent shell, an edge wireframe, or a tesseract connector. Nodes are
//! addressed by [`Role`], never by position in a child list.

use bitflags::bitflags;
use cmy4d_math::{BoxShape, Quad, Vec3};
use crate::material::{ColorChannel, Material};
use crate::transform::Transform3D;

bitflags! {
    /// Flags indicating which parts of a node have changed and need re-upload
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Transform (position, rotation, scale) has changed
        const TRANSFORM = 1 << 0;
        /// Material (color, opacity, wireframe) has changed
        const MATERIAL = 1 << 1;
        /// Vertex data (connector endpoints) has changed
        const GEOMETRY = 1 << 2;
        /// All flags set - node needs full rebuild
        const ALL = Self::TRANSFORM.bits() | Self::MATERIAL.bits() | Self::GEOMETRY.bits();
    }
}

/// Which of the tesseract's two nested cubes a node belongs to
///
/// The single cube of the CMY view uses `Outer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Outer,
    Inner,
}

/// Semantic role of a node within its object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// A colored face
    Face(ColorChannel, Layer),
    /// A translucent box mesh
    Shell(Layer),
    /// The edge set of a box
    Wireframe(Layer),
    /// Line from outer vertex `i` to inner vertex `i`
    Connector(usize),
}

/// Geometry carried by a node
#[derive(Clone, Debug)]
pub enum NodeKind {
    Face { quad: Quad },
    Shell { shape: BoxShape },
    Edges { shape: BoxShape },
    /// `outer` never moves; `inner` is rewritten by the W-projection
    Connector { outer: Vec3, inner: Vec3 },
}

impl NodeKind {
    /// True for kinds drawn as filled triangles (and so affected by wireframe mode)
    pub fn is_surface(&self) -> bool {
        matches!(self, NodeKind::Face { .. } | NodeKind::Shell { .. })
    }
}

/// A drawable part of a scene object
#[derive(Clone, Debug)]
pub struct Node {
    /// Transform relative to the owning object
    pub transform: Transform3D,
    /// The node's material
    pub material: Material,
    /// The node's geometry
    pub kind: NodeKind,
    dirty: DirtyFlags,
}

impl Node {
    /// Create a node with identity transform
    pub fn new(kind: NodeKind, material: Material) -> Self {
        Self {
            transform: Transform3D::identity(),
            material,
            kind,
            dirty: DirtyFlags::ALL, // New nodes are dirty
        }
    }

    /// Builder: set the transform
    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }

    // --- Dirty tracking methods ---

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }

    /// Set the transform and mark it as dirty
    pub fn set_transform(&mut self, transform: Transform3D) {
        self.transform = transform;
        self.mark_dirty(DirtyFlags::TRANSFORM);
    }

    /// Set the material and mark it as dirty
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        self.mark_dirty(DirtyFlags::MATERIAL);
    }

    /// Set the wireframe flag on surface nodes; line nodes are left alone
    pub fn set_wireframe(&mut self, wireframe: bool) {
        if self.kind.is_surface() && self.material.wireframe != wireframe {
            self.material.wireframe = wireframe;
            self.mark_dirty(DirtyFlags::MATERIAL);
        }
    }

    /// Outer endpoint of a connector
    pub fn connector_outer(&self) -> Option<Vec3> {
        match self.kind {
            NodeKind::Connector { outer, .. } => Some(outer),
            _ => None,
        }
    }

    /// Inner endpoint of a connector
    pub fn connector_inner(&self) -> Option<Vec3> {
        match self.kind {
            NodeKind::Connector { inner, .. } => Some(inner),
            _ => None,
        }
    }

    /// Move a connector's inner endpoint; no-op for other kinds
    pub fn set_connector_inner(&mut self, point: Vec3) {
        if let NodeKind::Connector { inner, .. } = &mut self.kind {
            *inner = point;
            self.dirty |= DirtyFlags::GEOMETRY;
        }
    }
}

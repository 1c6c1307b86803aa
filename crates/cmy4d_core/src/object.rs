//! Scene objects: keyed containers of nodes
//!
//! A [`SceneObject`] is the cube or the tesseract. Its nodes are stored in a
//! slot map and looked up by [`Role`], so behavior never depends on the order
//! in which parts were created. Construction order is still recorded for
//! deterministic drawing.

use std::collections::HashMap;
use cmy4d_math::{Axis, Euler3};
use slotmap::{new_key_type, SlotMap};
use crate::node::{DirtyFlags, Node, Role};
use crate::transform::Transform3D;
use crate::view::View;

new_key_type! {
    /// Key to a node within a scene object
    pub struct NodeKey;
}

/// The cube or the tesseract, with its transform, visibility and nodes
pub struct SceneObject {
    /// Which view shows this object
    pub kind: View,
    /// Object-level transform; only the rotation is animated
    transform: Transform3D,
    visible: bool,
    nodes: SlotMap<NodeKey, Node>,
    roles: HashMap<Role, NodeKey>,
    /// Construction order, used for drawing
    order: Vec<(Role, NodeKey)>,
    dirty: DirtyFlags,
}

impl SceneObject {
    /// Create an empty, hidden object
    pub fn new(kind: View) -> Self {
        Self {
            kind,
            transform: Transform3D::identity(),
            visible: false,
            nodes: SlotMap::with_key(),
            roles: HashMap::new(),
            order: Vec::new(),
            dirty: DirtyFlags::ALL,
        }
    }

    /// Add a node under a role, returning its key
    ///
    /// A node already holding the role is replaced.
    pub fn add_node(&mut self, role: Role, node: Node) -> NodeKey {
        if let Some(old) = self.roles.remove(&role) {
            self.nodes.remove(old);
            self.order.retain(|(r, _)| *r != role);
        }
        let key = self.nodes.insert(node);
        self.roles.insert(role, key);
        self.order.push((role, key));
        key
    }

    /// Key of the node holding a role
    pub fn key_of(&self, role: Role) -> Option<NodeKey> {
        self.roles.get(&role).copied()
    }

    /// Node holding a role
    pub fn node(&self, role: Role) -> Option<&Node> {
        self.key_of(role).and_then(|key| self.nodes.get(key))
    }

    /// Mutable node holding a role
    pub fn node_mut(&mut self, role: Role) -> Option<&mut Node> {
        let key = self.key_of(role)?;
        self.nodes.get_mut(key)
    }

    /// Node by key
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Number of nodes
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over roles and nodes in construction order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &Node)> {
        self.order
            .iter()
            .filter_map(|(role, key)| self.nodes.get(*key).map(|node| (*role, node)))
    }

    /// Iterate over all nodes mutably (order unspecified)
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// Roles in construction order
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.order.iter().map(|(role, _)| *role)
    }

    // --- Object transform and visibility ---

    #[inline]
    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    #[inline]
    pub fn rotation(&self) -> Euler3 {
        self.transform.rotation
    }

    /// Add to the rotation about one axis
    pub fn rotate(&mut self, axis: Axis, delta: f32) {
        self.transform.rotate(axis, delta);
        self.dirty |= DirtyFlags::TRANSFORM;
    }

    /// Zero the rotation on all axes
    pub fn reset_rotation(&mut self) {
        self.transform.rotation = Euler3::ZERO;
        self.dirty |= DirtyFlags::TRANSFORM;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty |= DirtyFlags::ALL;
        }
    }

    // --- Dirty tracking ---

    /// True if the object or any node changed since the last clear
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty() || self.nodes.values().any(Node::is_dirty)
    }

    /// Clear dirty flags on the object and every node
    pub fn clear_all_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
        for node in self.nodes.values_mut() {
            node.clear_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmy4d_math::Quad;
    use crate::material::{ColorChannel, Material};
    use crate::node::{Layer, NodeKind};

    fn face(channel: ColorChannel) -> Node {
        Node::new(NodeKind::Face { quad: Quad::new(2.0) }, Material::channel(channel, 0.6))
    }

    #[test]
    fn test_new_object_is_hidden_and_empty() {
        let obj = SceneObject::new(View::Cube);
        assert!(!obj.is_visible());
        assert_eq!(obj.node_count(), 0);
        assert!(obj.rotation().is_zero());
    }

    #[test]
    fn test_lookup_by_role() {
        let mut obj = SceneObject::new(View::Tesseract);
        let cyan = Role::Face(ColorChannel::Cyan, Layer::Outer);
        let magenta = Role::Face(ColorChannel::Magenta, Layer::Inner);
        obj.add_node(cyan, face(ColorChannel::Cyan));
        obj.add_node(magenta, face(ColorChannel::Magenta));

        assert_eq!(obj.node(cyan).unwrap().material.color, ColorChannel::Cyan.rgb());
        assert_eq!(obj.node(magenta).unwrap().material.color, ColorChannel::Magenta.rgb());
        assert!(obj.node(Role::Connector(0)).is_none());
    }

    #[test]
    fn test_iteration_follows_construction_order() {
        let mut obj = SceneObject::new(View::Cube);
        let roles = [
            Role::Face(ColorChannel::Yellow, Layer::Outer),
            Role::Face(ColorChannel::Cyan, Layer::Outer),
            Role::Face(ColorChannel::Magenta, Layer::Outer),
        ];
        for role in roles {
            if let Role::Face(channel, _) = role {
                obj.add_node(role, face(channel));
            }
        }
        let seen: Vec<Role> = obj.iter().map(|(role, _)| role).collect();
        assert_eq!(seen, roles);
    }

    #[test]
    fn test_add_node_replaces_role() {
        let mut obj = SceneObject::new(View::Cube);
        let role = Role::Face(ColorChannel::Cyan, Layer::Outer);
        let first = obj.add_node(role, face(ColorChannel::Cyan));
        let second = obj.add_node(role, face(ColorChannel::Yellow));

        assert_ne!(first, second);
        assert_eq!(obj.node_count(), 1);
        assert!(obj.get(first).is_none());
        assert_eq!(obj.node(role).unwrap().material.color, ColorChannel::Yellow.rgb());
    }

    #[test]
    fn test_rotation_and_reset() {
        let mut obj = SceneObject::new(View::Cube);
        obj.rotate(Axis::X, 0.5);
        obj.rotate(Axis::Y, 0.25);
        assert_eq!(obj.rotation(), Euler3::new(0.5, 0.25, 0.0));
        obj.reset_rotation();
        assert!(obj.rotation().is_zero());
    }

    #[test]
    fn test_dirty_tracking() {
        let mut obj = SceneObject::new(View::Cube);
        obj.add_node(Role::Face(ColorChannel::Cyan, Layer::Outer), face(ColorChannel::Cyan));
        assert!(obj.is_dirty());

        obj.clear_all_dirty();
        assert!(!obj.is_dirty());

        obj.rotate(Axis::Z, 0.1);
        assert!(obj.is_dirty());
        obj.clear_all_dirty();

        obj.node_mut(Role::Face(ColorChannel::Cyan, Layer::Outer))
            .unwrap()
            .set_wireframe(true);
        assert!(obj.is_dirty());
    }
}

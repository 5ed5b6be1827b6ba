//! Arena-backed scene graph.
//!
//! Nodes are never removed; a `NodeId` stays valid for the lifetime of the
//! graph that issued it.

use glam::Mat4;

use super::transform::Transform;
use crate::error::SceneError;

/// Index of a node inside a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Which eye(s) render a node or camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderMask(u8);

impl RenderMask {
    pub const LEFT: Self = Self(0b01);
    pub const RIGHT: Self = Self(0b10);
    pub const BOTH: Self = Self(0b11);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::BOTH.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for RenderMask {
    fn default() -> Self {
        Self::BOTH
    }
}

impl std::ops::BitOr for RenderMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Renderable payload attached to a node. Asset names only.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    /// Mesh loaded from a file with a texture applied.
    Mesh { mesh: String, texture: String },
    /// Flat `width x height` quad showing a texture.
    Quad { width: f32, height: f32, texture: String },
    /// Flat quad playing a video source.
    Video { width: f32, height: f32, source: String },
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub renderable: Option<Renderable>,
    pub render_mask: RenderMask,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node with an identity transform.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.into(),
            transform: Transform::IDENTITY,
            renderable: None,
            render_mask: RenderMask::BOTH,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Add a detached node carrying a renderable.
    pub fn add_renderable(&mut self, name: impl Into<String>, renderable: Renderable) -> NodeId {
        let id = self.add_node(name);
        self.nodes[id.0].renderable = Some(renderable);
        id
    }

    /// Attach `child` under `parent`, detaching it from any previous parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.get(parent)?;
        self.get(child)?;

        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(SceneError::CycleDetected { parent, child });
            }
            cursor = self.nodes[id.0].parent;
        }

        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    pub fn get(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.nodes.get(id.0).ok_or(SceneError::NodeNotFound(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes.get_mut(id.0).ok_or(SceneError::NodeNotFound(id))
    }

    pub fn transform(&self, id: NodeId) -> Result<&Transform, SceneError> {
        self.get(id).map(|n| &n.transform)
    }

    pub fn transform_mut(&mut self, id: NodeId) -> Result<&mut Transform, SceneError> {
        self.get_mut(id).map(|n| &mut n.transform)
    }

    /// Model matrix of a node, composed through all of its ancestors.
    pub fn world_matrix(&self, id: NodeId) -> Result<Mat4, SceneError> {
        let mut matrix = self.get(id)?.transform.matrix();
        let mut cursor = self.nodes[id.0].parent;
        while let Some(parent) = cursor {
            let node = &self.nodes[parent.0];
            matrix = node.transform.matrix() * matrix;
            cursor = node.parent;
        }
        Ok(matrix)
    }

    /// Nodes without a parent, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId(i))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

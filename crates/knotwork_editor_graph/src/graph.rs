// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes.

use crate::node::{Node, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Graph name
    pub name: String,
    /// Nodes in the graph, in insertion order
    nodes: IndexMap<NodeId, Node>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
        }
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.nodes.swap_remove(&node_id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph contains no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node from the graph
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Serialize the graph to a RON string
    pub fn to_ron(&self) -> Result<String, GraphFormatError> {
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        Ok(ron)
    }

    /// Deserialize a graph from a RON string
    pub fn from_ron(source: &str) -> Result<Self, GraphFormatError> {
        Ok(ron::from_str(source)?)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Error when encoding or decoding a graph
#[derive(Debug, thiserror::Error)]
pub enum GraphFormatError {
    /// Serialization failed
    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] ron::Error),

    /// Deserialization failed
    #[error("failed to parse graph: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

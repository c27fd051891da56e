use crate::index::{AdjacencyGraph, MAX_PATH_DEPTH};
use posture_core::error::{ErrorCode, PostureError};
use posture_core::model::{Edge, Node, NodeId, Position, SecurityStatus, Tier};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("node already present: {0}")]
    DuplicateNode(NodeId),
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("edge {from} -> {to} references a node outside the diagram")]
    DanglingEdge { from: NodeId, to: NodeId },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PostureError for DiagramError {
    fn error_code(&self) -> ErrorCode {
        match self {
            DiagramError::NodeNotFound(_) => ErrorCode::NotFound,
            DiagramError::DuplicateNode(_) | DiagramError::DanglingEdge { .. } => {
                ErrorCode::InvalidArgument
            }
            DiagramError::Serialization(_) => ErrorCode::Internal,
        }
    }
}

/// Nodes and directed edges of one diagram. Every edge endpoint is a node in
/// the diagram; removing a node removes its edges in the same call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn component_of(&self, id: &NodeId) -> Option<&str> {
        self.node(id).map(|node| node.component_id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert_node(&mut self, node: Node) -> Result<(), DiagramError> {
        if self.contains(&node.id) {
            return Err(DiagramError::DuplicateNode(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Result<(), DiagramError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| &node.id == id)
            .ok_or_else(|| DiagramError::NodeNotFound(id.clone()))?;
        node.position = position;
        Ok(())
    }

    /// Inserts `source -> target`, or re-classifies it when the pair is
    /// already connected.
    pub fn upsert_edge(
        &mut self,
        source: &NodeId,
        target: &NodeId,
        risk: SecurityStatus,
    ) -> Result<&Edge, DiagramError> {
        self.ensure_endpoints(source, target)?;

        let index = match self
            .edges
            .iter()
            .position(|edge| &edge.source == source && &edge.target == target)
        {
            Some(index) => {
                debug!("Re-classified edge {} -> {} as {}", source, target, risk);
                self.edges[index].reclassify(risk);
                index
            }
            None => {
                self.edges.push(Edge::new(source.clone(), target.clone(), risk));
                self.edges.len() - 1
            }
        };
        Ok(&self.edges[index])
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<(Node, Vec<Edge>), DiagramError> {
        let index = self
            .nodes
            .iter()
            .position(|node| &node.id == id)
            .ok_or_else(|| DiagramError::NodeNotFound(id.clone()))?;

        let (removed_edges, kept_edges): (Vec<Edge>, Vec<Edge>) =
            std::mem::take(&mut self.edges)
                .into_iter()
                .partition(|edge| edge.touches(id));
        self.edges = kept_edges;
        let node = self.nodes.remove(index);
        debug!("Removed node {} and {} incident edge(s)", id, removed_edges.len());
        Ok((node, removed_edges))
    }

    /// Marks the given nodes as connected with `status`. The node list is
    /// rebuilt and swapped in as a whole.
    pub fn mark_connected(&mut self, ids: &[&NodeId], status: SecurityStatus) {
        let updated = self
            .nodes
            .iter()
            .cloned()
            .map(|mut node| {
                if ids.contains(&&node.id) {
                    node.connection.connected = true;
                    node.connection.status = status;
                }
                node
            })
            .collect();
        self.nodes = updated;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Distinct component type ids placed in the diagram.
    pub fn component_ids(&self) -> BTreeSet<&str> {
        self.nodes
            .iter()
            .map(|node| node.component_id.as_str())
            .collect()
    }

    pub fn tiers(&self) -> BTreeSet<Tier> {
        self.nodes.iter().map(|node| node.tier).collect()
    }

    pub fn adjacency(&self) -> AdjacencyGraph {
        AdjacencyGraph::from_edges(&self.edges)
    }

    /// All simple directed paths `source -> target` within the depth bound.
    pub fn paths_between(&self, source: &NodeId, target: &NodeId) -> Vec<Vec<NodeId>> {
        self.adjacency().all_simple_paths(source, target, MAX_PATH_DEPTH)
    }

    fn ensure_endpoints(&self, source: &NodeId, target: &NodeId) -> Result<(), DiagramError> {
        if self.contains(source) && self.contains(target) {
            Ok(())
        } else {
            Err(DiagramError::DanglingEdge {
                from: source.clone(),
                to: target.clone(),
            })
        }
    }
}

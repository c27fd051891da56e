//! JSON export of a diagram. Field names follow the canvas node/edge shape so
//! a future importer can read the document back unchanged.

use crate::store::{Diagram, DiagramError};
use posture_core::catalog::{self, ComponentType};
use posture_core::config::DisplayConfig;
use posture_core::model::{ConnectionState, Edge, Node, NodeId, Position, Tier};
use serde::{Deserialize, Serialize};

/// Canvas renderer key every exported node carries.
pub const NODE_KIND: &str = "customNode";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub category: String,
    pub tier: Tier,
    pub description: String,
    pub benefits: Vec<String>,
}

impl From<&ComponentType> for ComponentRecord {
    fn from(component: &ComponentType) -> Self {
        Self {
            id: component.id.to_string(),
            name: component.name.to_string(),
            short_name: component.short_name.to_string(),
            category: component.category.to_string(),
            tier: component.tier,
            description: component.description.to_string(),
            benefits: component.benefits.iter().map(|b| b.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRecord>,
    pub dark_mode: bool,
    pub connections: ConnectionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedEdgeStyle {
    pub stroke: String,
    pub stroke_width: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedEdge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub animated: bool,
    pub style: ExportedEdgeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedComponent {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub nodes: Vec<ExportedNode>,
    pub edges: Vec<ExportedEdge>,
    pub components: Vec<ExportedComponent>,
}

impl ExportDocument {
    pub fn from_diagram(diagram: &Diagram, display: &DisplayConfig) -> Self {
        let nodes = diagram
            .nodes()
            .iter()
            .map(|node| export_node(node, display))
            .collect();
        let edges = diagram.edges().iter().map(export_edge).collect();
        let components = diagram
            .nodes()
            .iter()
            .map(|node| ExportedComponent {
                id: node.id.clone(),
                kind: NODE_KIND.to_string(),
                position: node.position,
                component: component_record(node),
            })
            .collect();

        Self {
            nodes,
            edges,
            components,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, DiagramError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn component_record(node: &Node) -> Option<ComponentRecord> {
    catalog::component(&node.component_id).map(ComponentRecord::from)
}

fn export_node(node: &Node, display: &DisplayConfig) -> ExportedNode {
    ExportedNode {
        id: node.id.clone(),
        kind: NODE_KIND.to_string(),
        position: node.position,
        data: NodeData {
            component: component_record(node),
            dark_mode: display.dark_mode,
            connections: node.connection,
        },
    }
}

fn export_edge(edge: &Edge) -> ExportedEdge {
    ExportedEdge {
        id: edge.id.clone(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        animated: edge.style.animated,
        style: ExportedEdgeStyle {
            stroke: edge.style.stroke.clone(),
            stroke_width: edge.style.stroke_width,
        },
    }
}

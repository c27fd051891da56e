use crate::catalog::ComponentType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Architectural layer a component type belongs to, in stack order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Infrastructure Layer")]
    Infrastructure,
    #[serde(rename = "Application & Software Layer")]
    Application,
    #[serde(rename = "Security Controls Layer")]
    SecurityControls,
    #[serde(rename = "Human & Governance Layer")]
    HumanGovernance,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Infrastructure,
        Tier::Application,
        Tier::SecurityControls,
        Tier::HumanGovernance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Infrastructure => "Infrastructure Layer",
            Tier::Application => "Application & Software Layer",
            Tier::SecurityControls => "Security Controls Layer",
            Tier::HumanGovernance => "Human & Governance Layer",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk classification of a connection, also used as the status of the nodes
/// it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityStatus {
    Secure,
    Warning,
    Error,
    Offline,
}

impl SecurityStatus {
    fn rank(self) -> u8 {
        match self {
            SecurityStatus::Secure => 0,
            SecurityStatus::Warning => 1,
            SecurityStatus::Error => 2,
            SecurityStatus::Offline => 3,
        }
    }

    /// The more secure of the two; ties keep `self`.
    pub fn best(self, other: SecurityStatus) -> SecurityStatus {
        if other.rank() < self.rank() {
            other
        } else {
            self
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SecurityStatus::Secure => "secure",
            SecurityStatus::Warning => "warning",
            SecurityStatus::Error => "error",
            SecurityStatus::Offline => "offline",
        }
    }

    /// Stroke colour used when drawing an edge with this classification.
    pub fn stroke(self) -> &'static str {
        match self {
            SecurityStatus::Secure => "#22c55e",
            SecurityStatus::Warning => "#facc15",
            SecurityStatus::Error => "#ef4444",
            SecurityStatus::Offline => "#6b7280",
        }
    }
}

impl fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a placed node. Rendered as `{component_id}-{token}`, but the
/// component type is always read from [`Node::component_id`], never parsed
/// back out of the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(component_id: &str, token: u64) -> Self {
        Self(format!("{}-{}", component_id, token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub connected: bool,
    pub status: SecurityStatus,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self {
            connected: false,
            status: SecurityStatus::Offline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub component_id: String,
    pub tier: Tier,
    pub position: Position,
    pub connection: ConnectionState,
}

impl Node {
    pub fn new(id: NodeId, component: &ComponentType, position: Position) -> Self {
        Self {
            id,
            component_id: component.id.to_string(),
            tier: component.tier,
            position,
            connection: ConnectionState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: u8,
    pub animated: bool,
}

impl EdgeStyle {
    pub const STROKE_WIDTH: u8 = 2;

    pub fn for_risk(risk: SecurityStatus) -> Self {
        Self {
            stroke: risk.stroke().to_string(),
            stroke_width: Self::STROKE_WIDTH,
            animated: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub risk: SecurityStatus,
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, risk: SecurityStatus) -> Self {
        Self {
            id: Self::edge_id(&source, &target),
            source,
            target,
            risk,
            style: EdgeStyle::for_risk(risk),
        }
    }

    pub fn edge_id(source: &NodeId, target: &NodeId) -> String {
        format!("e-{}-{}", source, target)
    }

    pub fn reclassify(&mut self, risk: SecurityStatus) {
        self.risk = risk;
        self.style = EdgeStyle::for_risk(risk);
    }

    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_best_prefers_secure_then_warning() {
        use SecurityStatus::*;
        assert_eq!(Warning.best(Secure), Secure);
        assert_eq!(Error.best(Warning), Warning);
        assert_eq!(Warning.best(Error), Warning);
        assert_eq!(Offline.best(Error), Error);
    }

    #[test]
    fn test_node_id_keeps_instances_distinct() {
        let a = NodeId::new("email-security", 1);
        let b = NodeId::new("email-security", 2);
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "email-security-1");
    }

    #[test]
    fn test_new_node_starts_offline() {
        let firewall = catalog::component("firewall").unwrap();
        let node = Node::new(NodeId::new("firewall", 7), firewall, Position::new(1.0, 2.0));
        assert_eq!(node.component_id, "firewall");
        assert_eq!(node.tier, Tier::Infrastructure);
        assert!(!node.connection.connected);
        assert_eq!(node.connection.status, SecurityStatus::Offline);
    }

    #[test]
    fn test_edge_style_tracks_risk() {
        let mut edge = Edge::new("waf-1".into(), "webapp-2".into(), SecurityStatus::Secure);
        assert_eq!(edge.id, "e-waf-1-webapp-2");
        assert_eq!(edge.style.stroke, "#22c55e");
        assert_eq!(edge.style.stroke_width, 2);

        edge.reclassify(SecurityStatus::Warning);
        assert_eq!(edge.style.stroke, "#facc15");
    }

    #[test]
    fn test_statuses_serialize_lowercase() {
        let json = serde_json::to_string(&SecurityStatus::Offline).unwrap();
        assert_eq!(json, "\"offline\"");
        let tier = serde_json::to_string(&Tier::HumanGovernance).unwrap();
        assert_eq!(tier, "\"Human & Governance Layer\"");
    }
}

//! Built-in starter architectures.

use posture_core::model::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateNode {
    pub component_id: &'static str,
    pub position: Position,
    /// Component ids this node connects to, in drawing order.
    pub connections: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub nodes: &'static [TemplateNode],
}

impl Template {
    /// `(source, target)` component pairs in drawing order. Pairs naming a
    /// component the template does not place are dropped.
    pub fn connections(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.connections
                .iter()
                .filter(move |target| self.places(target))
                .map(move |target| (node.component_id, *target))
        })
    }

    pub fn places(&self, component_id: &str) -> bool {
        self.nodes
            .iter()
            .any(|node| node.component_id == component_id)
    }
}

pub fn all() -> &'static [Template] {
    TEMPLATES
}

pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|template| template.id == id)
}

const fn node(
    component_id: &'static str,
    x: f64,
    y: f64,
    connections: &'static [&'static str],
) -> TemplateNode {
    TemplateNode {
        component_id,
        position: Position::new(x, y),
        connections,
    }
}

static TEMPLATES: &[Template] = &[
    Template {
        id: "small-startup",
        name: "Small Startup",
        description: "Cloud-native, minimal security controls",
        nodes: &[
            node("firewall", 250.0, 50.0, &[]),
            node("waf", 400.0, 150.0, &["firewall"]),
            node("webapp", 250.0, 150.0, &["waf"]),
            node("api", 250.0, 250.0, &["webapp"]),
            node("database", 250.0, 350.0, &["api"]),
            node("iam", 100.0, 150.0, &["webapp"]),
            node("mfa", 100.0, 250.0, &["iam"]),
        ],
    },
    Template {
        id: "mid-size",
        name: "Mid-size Business",
        description: "Hybrid infrastructure, maturing security",
        nodes: &[
            node("firewall", 250.0, 50.0, &[]),
            node("router", 250.0, 150.0, &["firewall"]),
            node("switch", 250.0, 250.0, &["router"]),
            node("waf", 400.0, 250.0, &["firewall"]),
            node("server", 150.0, 350.0, &["switch"]),
            node("webapp", 400.0, 350.0, &["waf"]),
            node("api", 400.0, 450.0, &["webapp"]),
            node("database", 250.0, 450.0, &["api", "server"]),
            node("iam", 550.0, 150.0, &["firewall"]),
            node("mfa", 550.0, 250.0, &["iam"]),
            node("endpoint", 150.0, 450.0, &["switch"]),
            node("siem", 550.0, 350.0, &["firewall", "waf"]),
            node("ids", 550.0, 450.0, &["switch", "firewall"]),
        ],
    },
    Template {
        id: "enterprise",
        name: "Enterprise",
        description: "Complex infrastructure, advanced security",
        nodes: &[
            node("firewall", 300.0, 50.0, &[]),
            node("router", 300.0, 150.0, &["firewall"]),
            node("switch", 300.0, 250.0, &["router"]),
            node("waf", 450.0, 250.0, &["firewall"]),
            node("server", 150.0, 350.0, &["switch"]),
            node("storage", 150.0, 450.0, &["server"]),
            node("webapp", 450.0, 350.0, &["waf"]),
            node("api", 450.0, 450.0, &["webapp"]),
            node("database", 300.0, 550.0, &["api", "server"]),
            node("iam", 600.0, 150.0, &["firewall"]),
            node("pam", 600.0, 250.0, &["iam"]),
            node("mfa", 600.0, 350.0, &["iam"]),
            node("siem", 750.0, 250.0, &["firewall", "waf"]),
            node("soar", 750.0, 350.0, &["siem"]),
            node("dlp", 450.0, 550.0, &["database"]),
            node("edr", 150.0, 550.0, &["server", "endpoint"]),
            node("ids", 750.0, 450.0, &["switch", "firewall"]),
            node("encryption", 300.0, 650.0, &["database", "storage"]),
        ],
    },
    Template {
        id: "healthcare",
        name: "Healthcare",
        description: "HIPAA-focused, patient data protection",
        nodes: &[
            node("firewall", 300.0, 50.0, &[]),
            node("router", 300.0, 150.0, &["firewall"]),
            node("switch", 300.0, 250.0, &["router"]),
            node("waf", 450.0, 250.0, &["firewall"]),
            node("server", 150.0, 350.0, &["switch"]),
            node("webapp", 450.0, 350.0, &["waf"]),
            node("api", 450.0, 450.0, &["webapp"]),
            node("database", 300.0, 450.0, &["api", "server"]),
            node("iam", 600.0, 150.0, &["firewall"]),
            node("pam", 600.0, 250.0, &["iam"]),
            node("mfa", 600.0, 350.0, &["iam"]),
            node("dlp", 450.0, 550.0, &["database"]),
            node("encryption", 150.0, 450.0, &["database"]),
            node("siem", 750.0, 350.0, &["firewall", "waf"]),
            node("ids", 750.0, 450.0, &["switch", "firewall"]),
        ],
    },];

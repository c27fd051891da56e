//! Per-component connection rules.
//!
//! A rule is plain data: an ordered list of clauses and a default. The first
//! clause whose target list matches (empty = any target) and whose path
//! requirement holds (any one of the listed components somewhere on the path;
//! empty = unconditional) decides the classification. Otherwise the default
//! applies.

use posture_core::model::SecurityStatus;

use SecurityStatus::{Secure, Warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleClause {
    pub targets: &'static [&'static str],
    pub requires_on_path: &'static [&'static str],
    pub risk: SecurityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionRule {
    pub source: &'static str,
    pub clauses: &'static [RuleClause],
    pub default: SecurityStatus,
}

impl RuleClause {
    fn matches(&self, target: &str, path: &[&str]) -> bool {
        let target_matches = self.targets.is_empty() || self.targets.contains(&target);
        let path_satisfied = self.requires_on_path.is_empty()
            || self
                .requires_on_path
                .iter()
                .any(|required| path.contains(required));
        target_matches && path_satisfied
    }
}

impl ConnectionRule {
    /// Classifies a connection to `target`, where `path` is the sequence of
    /// component types the connection traverses.
    pub fn classify(&self, target: &str, path: &[&str]) -> SecurityStatus {
        self.clauses
            .iter()
            .find(|clause| clause.matches(target, path))
            .map(|clause| clause.risk)
            .unwrap_or(self.default)
    }
}

pub fn rule_for(component_id: &str) -> Option<&'static ConnectionRule> {
    CONNECTION_RULES
        .iter()
        .find(|rule| rule.source == component_id)
}

pub fn all() -> &'static [ConnectionRule] {
    CONNECTION_RULES
}

const ANY: &[&str] = &[];

const fn to(targets: &'static [&'static str], risk: SecurityStatus) -> RuleClause {
    RuleClause {
        targets,
        requires_on_path: ANY,
        risk,
    }
}

const fn via(
    targets: &'static [&'static str],
    requires_on_path: &'static [&'static str],
    risk: SecurityStatus,
) -> RuleClause {
    RuleClause {
        targets,
        requires_on_path,
        risk,
    }
}

const fn rule(source: &'static str, clauses: &'static [RuleClause]) -> ConnectionRule {
    ConnectionRule {
        source,
        clauses,
        default: Warning,
    }
}

static CONNECTION_RULES: &[ConnectionRule] = &[
    // Infrastructure
    rule(
        "firewall",
        &[
            // web traffic should pass a WAF first
            to(&["webapp", "api"], Warning),
            to(&["router", "switch", "waf"], Secure),
        ],
    ),
    rule(
        "router",
        &[
            to(&["firewall", "switch"], Secure),
            to(&["server"], Warning),
        ],
    ),
    rule("switch", &[to(&["server", "endpoint", "wap"], Secure)]),
    rule(
        "server",
        &[
            to(&["database", "storage"], Secure),
            to(&["webapp", "api"], Warning),
        ],
    ),
    rule("wap", &[to(&["switch", "firewall"], Secure)]),
    rule(
        "endpoint",
        &[to(&["wap"], Warning), to(&["switch"], Secure)],
    ),
    // Application
    rule(
        "webapp",
        &[
            to(&["api"], Secure),
            via(&["database"], &["waf"], Secure),
            to(&["waf"], Secure),
        ],
    ),
    rule(
        "api",
        &[via(&["database", "storage"], &["waf", "firewall"], Secure)],
    ),
    rule(
        "database",
        &[
            to(&["storage"], Secure),
            via(ANY, &["waf", "firewall"], Secure),
        ],
    ),
    rule("storage", &[via(ANY, &["encryption"], Secure)]),
    rule(
        "microservices",
        &[via(&["api", "database"], &["waf"], Secure)],
    ),
    // Security controls
    rule("waf", &[to(&["webapp", "api", "database"], Secure)]),
    rule("iam", &[to(ANY, Secure)]),
    rule("dlp", &[to(ANY, Secure)]),
    rule("ids", &[to(ANY, Secure)]),
    rule("siem", &[to(ANY, Secure)]),
    rule("edr", &[to(ANY, Secure)]),
    rule("encryption", &[to(ANY, Secure)]),
];

//! Connection risk evaluation.
//!
//! A connection is judged by the paths that already join its endpoints. When
//! there are none, the source component's static rule decides. The verdict is
//! advisory: every connection is accepted.

use crate::rules;
use diagram::Diagram;
use posture_core::model::{NodeId, SecurityStatus};
use serde::Serialize;
use tracing::debug;

pub const NO_RULE_MESSAGE: &str = "No specific security rules defined for this connection";
pub const UNRESOLVED_MESSAGE: &str = "Connection endpoint is not part of the diagram";
pub const SECURE_PATH_MESSAGE: &str = "Secure path exists through security controls";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentBasis {
    /// An endpoint id does not resolve to a node.
    Unresolved,
    /// The source component has no rule.
    NoRule,
    /// Judged over the existing paths between the endpoints.
    PathAnalysis { paths: usize },
    /// No path yet; the source component's rule applied.
    StaticRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionAssessment {
    pub valid: bool,
    pub risk: SecurityStatus,
    pub rationale: String,
    pub basis: AssessmentBasis,
}

impl ConnectionAssessment {
    fn new(risk: SecurityStatus, rationale: impl Into<String>, basis: AssessmentBasis) -> Self {
        Self {
            valid: true,
            risk,
            rationale: rationale.into(),
            basis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathVerdict {
    pub status: SecurityStatus,
    pub message: &'static str,
}

/// Scores one path from the component types along it.
pub fn assess_path(component_path: &[&str]) -> PathVerdict {
    let has = |component: &str| component_path.contains(&component);

    if has("database") && !has("waf") && !has("firewall") {
        return PathVerdict {
            status: SecurityStatus::Warning,
            message: "Database access without proper security controls (WAF/Firewall)",
        };
    }

    if (has("webapp") || has("api")) && !has("iam") {
        return PathVerdict {
            status: SecurityStatus::Warning,
            message: "Application access without proper authentication controls",
        };
    }

    PathVerdict {
        status: SecurityStatus::Secure,
        message: "Path includes necessary security controls",
    }
}

pub fn evaluate_connection(
    diagram: &Diagram,
    source: &NodeId,
    target: &NodeId,
) -> ConnectionAssessment {
    let (Some(source_type), Some(target_type)) =
        (diagram.component_of(source), diagram.component_of(target))
    else {
        debug!("Unresolved endpoint for {} -> {}", source, target);
        return ConnectionAssessment::new(
            SecurityStatus::Warning,
            UNRESOLVED_MESSAGE,
            AssessmentBasis::Unresolved,
        );
    };

    let Some(rule) = rules::rule_for(source_type) else {
        debug!("No rule for source component {}", source_type);
        return ConnectionAssessment::new(
            SecurityStatus::Warning,
            NO_RULE_MESSAGE,
            AssessmentBasis::NoRule,
        );
    };

    let paths = diagram.paths_between(source, target);
    if let Some(best) = best_path_verdict(diagram, &paths) {
        debug!(
            "{} -> {} judged over {} path(s): {}",
            source,
            target,
            paths.len(),
            best.status
        );
        let basis = AssessmentBasis::PathAnalysis { paths: paths.len() };
        let rationale = if best.status == SecurityStatus::Secure {
            SECURE_PATH_MESSAGE
        } else {
            best.message
        };
        return ConnectionAssessment::new(best.status, rationale, basis);
    }

    let risk = rule.classify(target_type, &[source_type, target_type]);
    debug!(
        "{} -> {} has no existing path, {} rule gives {}",
        source, target, source_type, risk
    );
    ConnectionAssessment::new(
        risk,
        static_rationale(source_type, target_type, risk),
        AssessmentBasis::StaticRule,
    )
}

/// The most secure verdict over all paths; ties keep the earliest path.
fn best_path_verdict(diagram: &Diagram, paths: &[Vec<NodeId>]) -> Option<PathVerdict> {
    paths
        .iter()
        .map(|path| {
            let component_path: Vec<&str> = path
                .iter()
                .filter_map(|id| diagram.component_of(id))
                .collect();
            assess_path(&component_path)
        })
        .reduce(|best, current| {
            if best.status.best(current.status) != best.status {
                current
            } else {
                best
            }
        })
}

fn static_rationale(source: &str, target: &str, risk: SecurityStatus) -> String {
    match risk {
        SecurityStatus::Secure => format!(
            "Secure connection from {} to {} following security best practices",
            source, target
        ),
        SecurityStatus::Warning => format!(
            "Connection from {} to {} may need additional security controls",
            source, target
        ),
        SecurityStatus::Error => format!(
            "Insecure connection from {} to {} - consider adding security controls",
            source, target
        ),
        SecurityStatus::Offline => "Connection status unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_database_needs_perimeter() {
        let verdict = assess_path(&["api", "database"]);
        assert_eq!(verdict.status, SecurityStatus::Warning);
        assert!(verdict.message.starts_with("Database access"));

        let verdict = assess_path(&["firewall", "database"]);
        assert_eq!(verdict.status, SecurityStatus::Secure);
    }

    #[test]
    fn test_path_application_needs_identity() {
        let verdict = assess_path(&["waf", "webapp"]);
        assert_eq!(verdict.status, SecurityStatus::Warning);
        assert!(verdict.message.starts_with("Application access"));

        assert_eq!(
            assess_path(&["iam", "waf", "webapp", "database"]).status,
            SecurityStatus::Secure
        );
    }

    #[test]
    fn test_path_database_check_first() {
        let verdict = assess_path(&["webapp", "database"]);
        assert!(verdict.message.starts_with("Database access"));
    }

    #[test]
    fn test_static_rationale() {
        let text = static_rationale("firewall", "webapp", SecurityStatus::Warning);
        assert_eq!(
            text,
            "Connection from firewall to webapp may need additional security controls"
        );
    }
}

//! Fixed checklist of security capabilities a posture is expected to cover.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Contribution of one gap of this severity to the gap penalty.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Low => 10,
            Severity::Medium => 25,
            Severity::High => 50,
            Severity::Critical => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    /// Component type whose absence opens the gap.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub recommendation: &'static str,
}

static CHECKLIST: &[Gap] = &[
    Gap {
        id: "firewall",
        name: "Missing Perimeter Security",
        description: "No firewall or perimeter security detected",
        severity: Severity::High,
        recommendation: "Add a Next-Gen Firewall to protect your network perimeter",
    },
    Gap {
        id: "iam",
        name: "Missing Identity Management",
        description: "No identity and access management solution detected",
        severity: Severity::High,
        recommendation: "Add an IAM solution to manage user identities and access",
    },
    Gap {
        id: "mfa",
        name: "Missing Multi-Factor Authentication",
        description: "No MFA solution detected",
        severity: Severity::Medium,
        recommendation: "Implement MFA to strengthen authentication security",
    },
    Gap {
        id: "siem",
        name: "Missing Security Monitoring",
        description: "No SIEM or monitoring solution detected",
        severity: Severity::High,
        recommendation: "Add a SIEM solution for comprehensive security monitoring",
    },
    Gap {
        id: "edr",
        name: "Missing Endpoint Protection",
        description: "No endpoint detection and response solution detected",
        severity: Severity::Medium,
        recommendation: "Implement EDR to protect endpoints from threats",
    },
    Gap {
        id: "dlp",
        name: "Missing Data Protection",
        description: "No data loss prevention solution detected",
        severity: Severity::Medium,
        recommendation: "Add DLP to prevent data exfiltration",
    },
    Gap {
        id: "waf",
        name: "Missing Web Application Protection",
        description: "No web application firewall detected",
        severity: Severity::High,
        recommendation: "Implement a WAF to protect web applications from attacks",
    },
    Gap {
        id: "awareness",
        name: "Missing Security Awareness",
        description: "No security awareness training program detected",
        severity: Severity::Medium,
        recommendation: "Implement security awareness training for all employees",
    },
];

pub fn checklist() -> &'static [Gap] {
    CHECKLIST
}

/// Checklist entries whose component is absent, in checklist order.
pub fn detect_gaps(present: &BTreeSet<&str>) -> Vec<Gap> {
    CHECKLIST
        .iter()
        .filter(|gap| !present.contains(gap.id))
        .copied()
        .collect()
}

/// Sum of gap weights divided by ten, capped at 80.
pub fn penalty(gaps: &[Gap]) -> f64 {
    let total: u32 = gaps.iter().map(|gap| gap.severity.weight()).sum();
    (f64::from(total) / 10.0).min(80.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_empty_posture() {
        let gaps = detect_gaps(&BTreeSet::new());
        assert_eq!(gaps.len(), 8);
        assert_eq!(gaps[0].id, "firewall");
        assert_eq!(gaps[7].id, "awareness");
        // 4 high + 4 medium = 300, /10 = 30
        assert_eq!(penalty(&gaps), 30.0);
    }

    #[test]
    fn test_gaps_closed_by_components() {
        let present: BTreeSet<&str> = ["firewall", "waf", "webapp"].into_iter().collect();
        let gaps = detect_gaps(&present);
        assert_eq!(gaps.len(), 6);
        assert!(gaps.iter().all(|gap| gap.id != "firewall" && gap.id != "waf"));
        assert_eq!(penalty(&gaps), 20.0);
    }

    #[test]
    fn test_gap_penalty_cap() {
        let critical = Gap {
            severity: Severity::Critical,
            ..CHECKLIST[0]
        };
        let gaps = vec![critical; 10];
        assert_eq!(penalty(&gaps), 80.0);
    }
}

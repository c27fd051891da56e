use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Framework {
    #[serde(rename = "HIPAA")]
    Hipaa,
    #[serde(rename = "PCI-DSS")]
    PciDss,
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "NIST-CSF")]
    NistCsf,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::Hipaa,
        Framework::PciDss,
        Framework::Gdpr,
        Framework::NistCsf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Framework::Hipaa => "HIPAA",
            Framework::PciDss => "PCI-DSS",
            Framework::Gdpr => "GDPR",
            Framework::NistCsf => "NIST-CSF",
        }
    }

    /// Component types the framework expects. Some ids (`privacy`) have no
    /// catalog entry and can never be satisfied.
    pub fn required(self) -> &'static [&'static str] {
        match self {
            Framework::Hipaa => &["dlp", "iam", "audit", "encryption", "mfa", "firewall"],
            Framework::PciDss => &["firewall", "iam", "mfa", "dlp", "waf", "encryption", "ids"],
            Framework::Gdpr => &["dlp", "privacy", "audit", "iam", "encryption"],
            Framework::NistCsf => &[
                "firewall",
                "iam",
                "mfa",
                "siem",
                "edr",
                "dlp",
                "ids",
                "awareness",
                "policy",
            ],
        }
    }

    pub fn readiness(self, present: &BTreeSet<&str>) -> u8 {
        percentage(self.required(), present)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceScore {
    pub framework: Framework,
    pub percentage: u8,
}

/// Readiness for every framework, in [`Framework::ALL`] order.
pub fn readiness(present: &BTreeSet<&str>) -> Vec<ComplianceScore> {
    Framework::ALL
        .iter()
        .map(|&framework| ComplianceScore {
            framework,
            percentage: framework.readiness(present),
        })
        .collect()
}

fn percentage(required: &[&str], present: &BTreeSet<&str>) -> u8 {
    if required.is_empty() {
        return 0;
    }
    let met = required.iter().filter(|id| present.contains(*id)).count();
    (met as f64 / required.len() as f64 * 100.0).round() as u8
}

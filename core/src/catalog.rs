//! Static catalog of the component types a diagram can be built from.

use crate::error::{ErrorCode, PostureError};
use crate::model::Tier;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentType {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub category: &'static str,
    pub tier: Tier,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown component type: {0}")]
    UnknownComponent(String),
}

impl PostureError for CatalogError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

pub fn all() -> &'static [ComponentType] {
    COMPONENTS
}

pub fn component(id: &str) -> Option<&'static ComponentType> {
    COMPONENTS.iter().find(|component| component.id == id)
}

pub fn require(id: &str) -> Result<&'static ComponentType, CatalogError> {
    component(id).ok_or_else(|| CatalogError::UnknownComponent(id.to_string()))
}

pub fn by_tier(tier: Tier) -> impl Iterator<Item = &'static ComponentType> {
    COMPONENTS.iter().filter(move |component| component.tier == tier)
}

static COMPONENTS: &[ComponentType] = &[
    ComponentType {
        id: "firewall",
        name: "Next-Gen Firewall",
        short_name: "NGFW",
        category: "Network Security",
        tier: Tier::Infrastructure,
        description: "Advanced firewall with deep packet inspection and threat prevention",
        benefits: &["Application-aware security", "Intrusion prevention", "SSL/TLS inspection"],
    },
    ComponentType {
        id: "router",
        name: "Enterprise Router",
        short_name: "Router",
        category: "Network Infrastructure",
        tier: Tier::Infrastructure,
        description: "Core routing infrastructure with security features",
        benefits: &["Secure routing protocols", "Traffic segmentation", "QoS enforcement"],
    },
    ComponentType {
        id: "switch",
        name: "Layer 3 Switch",
        short_name: "L3 Switch",
        category: "Network Infrastructure",
        tier: Tier::Infrastructure,
        description: "Advanced switching with routing capabilities",
        benefits: &["VLAN segmentation", "Access control lists", "Port security"],
    },
    ComponentType {
        id: "wap",
        name: "Wireless Access Point",
        short_name: "WAP",
        category: "Network Infrastructure",
        tier: Tier::Infrastructure,
        description: "Enterprise wireless access point with security features",
        benefits: &["WPA3 encryption", "Client isolation", "Rogue AP detection"],
    },
    ComponentType {
        id: "loadbalancer",
        name: "Load Balancer",
        short_name: "LB",
        category: "Network Infrastructure",
        tier: Tier::Infrastructure,
        description: "Distributes network traffic across multiple servers",
        benefits: &["Traffic distribution", "High availability", "SSL offloading"],
    },
    ComponentType {
        id: "vpn",
        name: "VPN Gateway",
        short_name: "VPN",
        category: "Network Infrastructure",
        tier: Tier::Infrastructure,
        description: "Secure remote access to corporate resources",
        benefits: &["Encrypted tunneling", "Remote access", "Site-to-site connectivity"],
    },
    ComponentType {
        id: "server",
        name: "Enterprise Server",
        short_name: "Server",
        category: "Infrastructure",
        tier: Tier::Infrastructure,
        description: "Secure server infrastructure",
        benefits: &["Hardened configuration", "Resource isolation", "Security baseline"],
    },
    ComponentType {
        id: "storage",
        name: "Secure Storage",
        short_name: "Storage",
        category: "Infrastructure",
        tier: Tier::Infrastructure,
        description: "Enterprise storage with security controls",
        benefits: &["Data encryption", "Access auditing", "Secure backup"],
    },
    ComponentType {
        id: "endpoint",
        name: "Endpoint Device",
        short_name: "Endpoint",
        category: "Endpoint",
        tier: Tier::Infrastructure,
        description: "End-user computing devices with security controls",
        benefits: &["Device encryption", "Secure boot", "Anti-malware"],
    },
    ComponentType {
        id: "mobiledm",
        name: "Mobile Device Management",
        short_name: "MDM",
        category: "Endpoint",
        tier: Tier::Infrastructure,
        description: "Management platform for mobile devices",
        benefits: &["Device enrollment", "Policy enforcement", "Remote wipe"],
    },
    ComponentType {
        id: "webapp",
        name: "Web Application",
        short_name: "Web App",
        category: "Application",
        tier: Tier::Application,
        description: "Customer-facing or internal web application",
        benefits: &["Input validation", "Authentication", "Session management"],
    },
    ComponentType {
        id: "api",
        name: "API Gateway",
        short_name: "API",
        category: "Application",
        tier: Tier::Application,
        description: "Managed API gateway for service integration",
        benefits: &["Rate limiting", "Authentication", "Request validation"],
    },
    ComponentType {
        id: "microservices",
        name: "Microservices",
        short_name: "Micro",
        category: "Application",
        tier: Tier::Application,
        description: "Distributed service architecture",
        benefits: &["Service isolation", "Scalability", "Independent deployment"],
    },
    ComponentType {
        id: "serverless",
        name: "Serverless Functions",
        short_name: "FaaS",
        category: "Application",
        tier: Tier::Application,
        description: "Event-driven compute service",
        benefits: &["Auto-scaling", "Event-driven", "Reduced attack surface"],
    },
    ComponentType {
        id: "database",
        name: "Database",
        short_name: "DB",
        category: "Data Storage",
        tier: Tier::Application,
        description: "Secure database for application data",
        benefits: &["Encryption at rest", "Access controls", "Audit logging"],
    },
    ComponentType {
        id: "datawarehouse",
        name: "Data Warehouse",
        short_name: "DW",
        category: "Data Storage",
        tier: Tier::Application,
        description: "Enterprise data warehouse for analytics",
        benefits: &["Data governance", "Access controls", "Encryption"],
    },
    ComponentType {
        id: "cicd",
        name: "CI/CD Pipeline",
        short_name: "CI/CD",
        category: "DevOps",
        tier: Tier::Application,
        description: "Continuous integration and deployment pipeline",
        benefits: &["Secure builds", "Dependency scanning", "Image signing"],
    },
    ComponentType {
        id: "sast",
        name: "Static Application Security Testing",
        short_name: "SAST",
        category: "DevSecOps",
        tier: Tier::Application,
        description: "Static code analysis for security vulnerabilities",
        benefits: &["Code scanning", "Vulnerability detection", "Early remediation"],
    },
    ComponentType {
        id: "dast",
        name: "Dynamic Application Security Testing",
        short_name: "DAST",
        category: "DevSecOps",
        tier: Tier::Application,
        description: "Dynamic testing of running applications",
        benefits: &["Runtime analysis", "Attack simulation", "Vulnerability detection"],
    },
    ComponentType {
        id: "containers",
        name: "Container Platform",
        short_name: "Containers",
        category: "Infrastructure",
        tier: Tier::Application,
        description: "Container orchestration platform",
        benefits: &["Isolation", "Immutable infrastructure", "Security scanning"],
    },
    ComponentType {
        id: "ids",
        name: "Intrusion Detection System",
        short_name: "IDS",
        category: "Security Monitoring",
        tier: Tier::SecurityControls,
        description: "Monitors network traffic for suspicious activity",
        benefits: &["Real-time threat detection", "Network behavior analysis", "Compliance monitoring"],
    },
    ComponentType {
        id: "ips",
        name: "Intrusion Prevention System",
        short_name: "IPS",
        category: "Security Monitoring",
        tier: Tier::SecurityControls,
        description: "Actively blocks detected threats",
        benefits: &["Automated threat blocking", "Real-time protection", "Policy enforcement"],
    },
    ComponentType {
        id: "waf",
        name: "Web Application Firewall",
        short_name: "WAF",
        category: "Application Security",
        tier: Tier::SecurityControls,
        description: "Protects web applications from attacks",
        benefits: &["OWASP top 10 protection", "Bot protection", "API security"],
    },
    ComponentType {
        id: "apifirewall",
        name: "API Security Gateway",
        short_name: "API Sec",
        category: "Application Security",
        tier: Tier::SecurityControls,
        description: "Protects APIs from security threats",
        benefits: &["Schema validation", "Rate limiting", "Token validation"],
    },
    ComponentType {
        id: "dlp",
        name: "Data Loss Prevention",
        short_name: "DLP",
        category: "Data Security",
        tier: Tier::SecurityControls,
        description: "Prevents unauthorized data exfiltration",
        benefits: &["Content inspection", "Policy enforcement", "Data classification"],
    },
    ComponentType {
        id: "encryption",
        name: "Encryption Service",
        short_name: "Encrypt",
        category: "Data Security",
        tier: Tier::SecurityControls,
        description: "Enterprise encryption platform",
        benefits: &["Data protection", "Key management", "Compliance enablement"],
    },
    ComponentType {
        id: "casb",
        name: "Cloud Access Security Broker",
        short_name: "CASB",
        category: "Cloud Security",
        tier: Tier::SecurityControls,
        description: "Secures cloud service usage",
        benefits: &["Visibility", "Compliance", "Threat protection"],
    },
    ComponentType {
        id: "iam",
        name: "Identity & Access Management",
        short_name: "IAM",
        category: "Access Control",
        tier: Tier::SecurityControls,
        description: "Centralized identity management platform",
        benefits: &["Single sign-on", "Role-based access", "User lifecycle management"],
    },
    ComponentType {
        id: "pam",
        name: "Privileged Access Management",
        short_name: "PAM",
        category: "Access Control",
        tier: Tier::SecurityControls,
        description: "Manages privileged account access",
        benefits: &["Password vaulting", "Session recording", "Just-in-time access"],
    },
    ComponentType {
        id: "mfa",
        name: "Multi-Factor Authentication",
        short_name: "MFA",
        category: "Authentication",
        tier: Tier::SecurityControls,
        description: "Additional authentication factors",
        benefits: &["Biometric authentication", "Hardware tokens", "Push notifications"],
    },
    ComponentType {
        id: "passwordmgr",
        name: "Password Manager",
        short_name: "PassMgr",
        category: "Authentication",
        tier: Tier::SecurityControls,
        description: "Secure password storage and management",
        benefits: &["Strong password generation", "Secure storage", "Password sharing"],
    },
    ComponentType {
        id: "siem",
        name: "Security Information & Event Management",
        short_name: "SIEM",
        category: "Security Monitoring",
        tier: Tier::SecurityControls,
        description: "Centralized security monitoring platform",
        benefits: &["Log aggregation", "Correlation analysis", "Threat hunting"],
    },
    ComponentType {
        id: "soar",
        name: "Security Orchestration & Response",
        short_name: "SOAR",
        category: "Incident Response",
        tier: Tier::SecurityControls,
        description: "Automated security response platform",
        benefits: &["Incident playbooks", "Automated response", "Case management"],
    },
    ComponentType {
        id: "edr",
        name: "Endpoint Detection & Response",
        short_name: "EDR",
        category: "Endpoint Security",
        tier: Tier::SecurityControls,
        description: "Advanced endpoint protection platform",
        benefits: &["Behavior monitoring", "Threat hunting", "Incident response"],
    },
    ComponentType {
        id: "threatintel",
        name: "Threat Intelligence Platform",
        short_name: "TIP",
        category: "Security Intelligence",
        tier: Tier::SecurityControls,
        description: "Collects and analyzes threat intelligence",
        benefits: &["Indicator management", "Threat correlation", "Intelligence sharing"],
    },
    ComponentType {
        id: "email-security",
        name: "Email Security Gateway",
        short_name: "Email Sec",
        category: "Communication Security",
        tier: Tier::SecurityControls,
        description: "Protects against email-based threats",
        benefits: &["Phishing protection", "Malware scanning", "Data loss prevention"],
    },
    ComponentType {
        id: "awareness",
        name: "Security Awareness Training",
        short_name: "Training",
        category: "User Awareness",
        tier: Tier::HumanGovernance,
        description: "Security awareness and training program",
        benefits: &["Phishing awareness", "Password hygiene", "Social engineering defense"],
    },
    ComponentType {
        id: "policy",
        name: "Security Policies",
        short_name: "Policies",
        category: "Governance",
        tier: Tier::HumanGovernance,
        description: "Security policies and procedures",
        benefits: &["Clear guidelines", "Compliance alignment", "Risk management"],
    },
    ComponentType {
        id: "accessreview",
        name: "Access Reviews",
        short_name: "Reviews",
        category: "Governance",
        tier: Tier::HumanGovernance,
        description: "Regular access control reviews",
        benefits: &["Least privilege", "Separation of duties", "Regulatory compliance"],
    },
    ComponentType {
        id: "audit",
        name: "Security Audits",
        short_name: "Audits",
        category: "Governance",
        tier: Tier::HumanGovernance,
        description: "Regular security audits and assessments",
        benefits: &["Gap identification", "Control validation", "Continuous improvement"],
    },
    ComponentType {
        id: "grc",
        name: "GRC Platform",
        short_name: "GRC",
        category: "Governance",
        tier: Tier::HumanGovernance,
        description: "Governance, Risk, and Compliance management",
        benefits: &["Policy management", "Risk assessment", "Compliance tracking"],
    },
    ComponentType {
        id: "bcdr",
        name: "Business Continuity & Disaster Recovery",
        short_name: "BCDR",
        category: "Resilience",
        tier: Tier::HumanGovernance,
        description: "Ensures business operations can continue during disruptions",
        benefits: &["Business impact analysis", "Recovery planning", "Regular testing"],
    },
    ComponentType {
        id: "vendor",
        name: "Third-Party Risk Management",
        short_name: "TPRM",
        category: "Supply Chain",
        tier: Tier::HumanGovernance,
        description: "Manages risks from third-party vendors",
        benefits: &["Vendor assessment", "Continuous monitoring", "Risk-based approach"],
    },
    ComponentType {
        id: "incident",
        name: "Incident Response Program",
        short_name: "IR",
        category: "Response",
        tier: Tier::HumanGovernance,
        description: "Structured approach to handle security incidents",
        benefits: &["Defined playbooks", "Regular training", "Post-incident analysis"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = all().iter().map(|component| component.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_catalog_tier_counts() {
        assert_eq!(by_tier(Tier::Infrastructure).count(), 10);
        assert_eq!(by_tier(Tier::Application).count(), 10);
        assert_eq!(by_tier(Tier::SecurityControls).count(), 16);
        assert_eq!(by_tier(Tier::HumanGovernance).count(), 8);
    }

    #[test]
    fn test_catalog_lookup() {
        let waf = component("waf").unwrap();
        assert_eq!(waf.name, "Web Application Firewall");
        assert_eq!(waf.tier, Tier::SecurityControls);
        assert!(component("privacy").is_none());
        assert_eq!(
            require("privacy"),
            Err(CatalogError::UnknownComponent("privacy".to_string()))
        );
    }
}

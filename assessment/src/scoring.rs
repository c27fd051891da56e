//! Whole-diagram risk score.
//!
//! The score starts at 100 (maximum risk). Tier coverage and connectivity
//! lower it, missing checklist controls raise it again, and the result is
//! clamped to `[0, 100]` and rounded. Node positions never influence it.

use crate::compliance::{self, ComplianceScore, Framework};
use crate::gaps::{self, Gap};
use diagram::Diagram;
use serde::Serialize;
use std::fmt;
use tracing::debug;

const TIER_WEIGHT: usize = 15;
const MAX_TIER_REDUCTION: u32 = 60;
const CONNECTIVITY_WEIGHT: f64 = 50.0;
const MAX_CONNECTIVITY_SCORE: u32 = 100;
const MAX_CONNECTIVITY_REDUCTION: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classifies the unrounded total, so 24.5 is still Low even though it
    /// displays as 25.
    pub fn from_total(total: f64) -> Self {
        if total < 25.0 {
            RiskLevel::Low
        } else if total < 50.0 {
            RiskLevel::Medium
        } else if total < 75.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    /// Display colour class for the level.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "text-green-500",
            RiskLevel::Medium => "text-yellow-500",
            RiskLevel::High => "text-orange-500",
            RiskLevel::Critical => "text-red-500",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every factor that went into the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub tiers: usize,
    pub tier_reduction: u32,
    pub connectivity_score: u32,
    pub connectivity_reduction: u32,
    pub gap_penalty: f64,
    /// Unrounded, clamped total.
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    /// Display colour class of `level`.
    pub color: &'static str,
    pub gaps: Vec<Gap>,
    pub compliance: Vec<ComplianceScore>,
    pub breakdown: ScoreBreakdown,
}

impl RiskAssessment {
    pub fn compliance_for(&self, framework: Framework) -> u8 {
        self.compliance
            .iter()
            .find(|score| score.framework == framework)
            .map(|score| score.percentage)
            .unwrap_or(0)
    }
}

pub fn assess(diagram: &Diagram) -> RiskAssessment {
    let present = diagram.component_ids();

    let tiers = diagram.tiers().len();
    let tier_reduction = ((tiers * TIER_WEIGHT) as u32).min(MAX_TIER_REDUCTION);

    let connectivity_score = connectivity_score(diagram.node_count(), diagram.edge_count());
    let connectivity_reduction = connectivity_score.min(MAX_CONNECTIVITY_REDUCTION);

    let gaps = gaps::detect_gaps(&present);
    let gap_penalty = gaps::penalty(&gaps);

    let total = (100.0 - f64::from(tier_reduction) - f64::from(connectivity_reduction)
        + gap_penalty)
        .clamp(0.0, 100.0);
    let score = total.round() as u8;
    let level = RiskLevel::from_total(total);

    debug!(
        "Assessed {} node(s): score {} ({}), {} gap(s)",
        diagram.node_count(),
        score,
        level,
        gaps.len()
    );

    RiskAssessment {
        score,
        level,
        color: level.color(),
        gaps,
        compliance: compliance::readiness(&present),
        breakdown: ScoreBreakdown {
            tiers,
            tier_reduction,
            connectivity_score,
            connectivity_reduction,
            gap_penalty,
            total,
        },
    }
}

/// `round(nodes / edges * 50)`, capped at 100; zero without edges.
fn connectivity_score(nodes: usize, edges: usize) -> u32 {
    if edges == 0 {
        return 0;
    }
    let ratio = nodes as f64 / edges as f64;
    ((ratio * CONNECTIVITY_WEIGHT).round() as u32).min(MAX_CONNECTIVITY_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_total(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(24.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(25.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_total(49.5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_total(50.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_total(74.5), RiskLevel::High);
        assert_eq!(RiskLevel::from_total(75.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_total(100.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::Critical.color(), "text-red-500");
    }

    #[test]
    fn test_connectivity_score_bounds() {
        assert_eq!(connectivity_score(5, 0), 0);
        assert_eq!(connectivity_score(2, 1), 100);
        assert_eq!(connectivity_score(10, 1), 100);
        assert_eq!(connectivity_score(3, 4), 38);
        assert_eq!(connectivity_score(1, 10), 5);
    }

    #[test]
    fn test_empty_diagram_is_critical() {
        let result = assess(&Diagram::new());
        assert_eq!(result.score, 100);
        assert_eq!(result.level, RiskLevel::Critical);
        assert_eq!(result.color, "text-red-500");
        assert_eq!(result.gaps.len(), 8);
        assert_eq!(result.breakdown.tiers, 0);
        assert_eq!(result.breakdown.gap_penalty, 30.0);
        assert_eq!(result.breakdown.total, 100.0);
        assert_eq!(result.compliance_for(Framework::Hipaa), 0);
    }
}

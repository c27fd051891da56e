pub mod compliance;
pub mod evaluator;
pub mod gaps;
pub mod rules;
pub mod scoring;

pub use compliance::{ComplianceScore, Framework};
pub use evaluator::{evaluate_connection, AssessmentBasis, ConnectionAssessment};
pub use gaps::{Gap, Severity};
pub use scoring::{assess, RiskAssessment, RiskLevel, ScoreBreakdown};

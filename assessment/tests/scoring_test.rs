use assessment::{assess, Framework, RiskLevel, Severity};
use diagram::Diagram;
use posture_core::catalog;
use posture_core::model::{Node, NodeId, Position, SecurityStatus};

fn diagram_of(component_ids: &[&str]) -> (Diagram, Vec<NodeId>) {
    let mut diagram = Diagram::new();
    let mut ids = Vec::new();
    for (token, component_id) in component_ids.iter().enumerate() {
        let id = NodeId::new(component_id, token as u64 + 1);
        let position = Position::new(token as f64 * 100.0, 50.0);
        diagram
            .insert_node(Node::new(
                id.clone(),
                catalog::component(component_id).unwrap(),
                position,
            ))
            .unwrap();
        ids.push(id);
    }
    (diagram, ids)
}

const CHECKLIST: [&str; 8] = [
    "firewall", "iam", "mfa", "siem", "edr", "dlp", "waf", "awareness",
];

#[test]
fn test_empty_diagram_baseline() {
    let result = assess(&Diagram::new());
    assert_eq!(result.score, 100);
    assert_eq!(result.level, RiskLevel::Critical);
    assert_eq!(result.gaps.len(), 8);
    assert_eq!(result.compliance.len(), 4);
    assert!(result.compliance.iter().all(|c| c.percentage == 0));
}

#[test]
fn test_full_checklist_without_edges_is_high() {
    let (diagram, _) = diagram_of(&CHECKLIST);
    let result = assess(&diagram);

    assert!(result.gaps.is_empty());
    assert_eq!(result.breakdown.tiers, 3);
    assert_eq!(result.breakdown.tier_reduction, 45);
    assert_eq!(result.breakdown.connectivity_reduction, 0);
    assert_eq!(result.score, 55);
    assert_eq!(result.level, RiskLevel::High);
}

#[test]
fn test_two_tiers_reduce_by_thirty() {
    let (diagram, _) = diagram_of(&["router", "webapp"]);
    let result = assess(&diagram);
    assert_eq!(result.breakdown.tiers, 2);
    assert_eq!(result.breakdown.tier_reduction, 30);
}

#[test]
fn test_connectivity_lowers_the_score() {
    let (mut diagram, ids) = diagram_of(&CHECKLIST);
    diagram
        .upsert_edge(&ids[0], &ids[6], SecurityStatus::Secure)
        .unwrap();
    let result = assess(&diagram);

    // 8 nodes / 1 edge -> connectivity score 100, reduction capped at 20
    assert_eq!(result.breakdown.connectivity_score, 100);
    assert_eq!(result.breakdown.connectivity_reduction, 20);
    assert_eq!(result.score, 35);
    assert_eq!(result.level, RiskLevel::Medium);
}

#[test]
fn test_gap_order_and_severity() {
    let (diagram, _) = diagram_of(&["firewall", "waf"]);
    let result = assess(&diagram);
    let ids: Vec<&str> = result.gaps.iter().map(|gap| gap.id).collect();
    assert_eq!(ids, ["iam", "mfa", "siem", "edr", "dlp", "awareness"]);
    assert_eq!(result.gaps[0].severity, Severity::High);
    assert_eq!(result.gaps[0].name, "Missing Identity Management");
    assert_eq!(result.gaps[1].severity, Severity::Medium);
}

#[test]
fn test_compliance_percentages() {
    let (diagram, _) = diagram_of(&["dlp", "iam", "audit", "encryption", "mfa", "firewall"]);
    let result = assess(&diagram);
    assert_eq!(result.compliance_for(Framework::Hipaa), 100);
    // firewall, iam, mfa, dlp, encryption of 7
    assert_eq!(result.compliance_for(Framework::PciDss), 71);
    // dlp, audit, iam, encryption of 5
    assert_eq!(result.compliance_for(Framework::Gdpr), 80);
    // firewall, iam, mfa, dlp of 9
    assert_eq!(result.compliance_for(Framework::NistCsf), 44);
}

#[test]
fn test_score_ignores_positions_and_is_repeatable() {
    let (mut diagram, ids) = diagram_of(&["firewall", "waf", "webapp", "database"]);
    diagram
        .upsert_edge(&ids[0], &ids[1], SecurityStatus::Secure)
        .unwrap();
    let first = assess(&diagram);
    assert_eq!(first, assess(&diagram));

    for (step, id) in ids.iter().enumerate() {
        diagram
            .move_node(id, Position::new(-500.0 * step as f64, 9999.0))
            .unwrap();
    }
    assert_eq!(assess(&diagram), first);
}

#[test]
fn test_score_stays_in_bounds() {
    let catalog_ids: Vec<&str> = catalog::all().iter().map(|c| c.id).collect();
    let (mut diagram, ids) = diagram_of(&catalog_ids);
    for pair in ids.windows(2) {
        diagram
            .upsert_edge(&pair[0], &pair[1], SecurityStatus::Warning)
            .unwrap();
    }
    let result = assess(&diagram);
    assert!(result.score <= 100);
    // 4 tiers -> 60, 44 nodes / 43 edges -> 51 -> 20, no gaps
    assert_eq!(result.score, 20);
    assert_eq!(result.level, RiskLevel::Low);
}

#[test]
fn test_level_uses_unrounded_total() {
    let (mut diagram, ids) = diagram_of(&[
        "firewall", "iam", "mfa", "siem", "edr", "dlp", "waf", "webapp", "policy",
    ]);
    let mut edges = 0;
    'outer: for source in &ids {
        for target in &ids {
            if edges == 25 {
                break 'outer;
            }
            if source != target {
                diagram
                    .upsert_edge(source, target, SecurityStatus::Secure)
                    .unwrap();
                edges += 1;
            }
        }
    }
    assert_eq!(diagram.edge_count(), 25);
    let result = assess(&diagram);

    // 4 tiers -> 60, 9 nodes / 25 edges -> 18, awareness missing -> 2.5
    assert_eq!(result.breakdown.tier_reduction, 60);
    assert_eq!(result.breakdown.connectivity_reduction, 18);
    assert_eq!(result.breakdown.gap_penalty, 2.5);
    assert_eq!(result.breakdown.total, 24.5);
    assert_eq!(result.score, 25);
    assert_eq!(result.level, RiskLevel::Low);
    assert_eq!(result.color, "text-green-500");
}

#[test]
fn test_assessment_serializes_color_with_level() {
    let (diagram, _) = diagram_of(&CHECKLIST);
    let json = serde_json::to_value(assess(&diagram)).unwrap();
    assert_eq!(json["level"], "High");
    assert_eq!(json["color"], "text-orange-500");
    assert_eq!(json["score"], 55);
}

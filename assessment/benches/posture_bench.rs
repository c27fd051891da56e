use assessment::{assess, evaluate_connection};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diagram::Diagram;
use posture_core::catalog;
use posture_core::model::{Node, NodeId, Position, SecurityStatus};

const LAYERS: [&[&str]; 4] = [
    &["firewall", "router"],
    &["waf", "iam"],
    &["webapp", "api"],
    &["database", "storage"],
];

/// Every node links to every node of the next layer.
fn layered_diagram() -> (Diagram, NodeId, NodeId) {
    let mut diagram = Diagram::new();
    let mut token = 0;
    let mut previous: Vec<NodeId> = Vec::new();
    let mut first = None;
    let mut last = None;

    for (depth, layer) in LAYERS.iter().enumerate() {
        let mut current = Vec::new();
        for (column, component_id) in layer.iter().enumerate() {
            token += 1;
            let id = NodeId::new(component_id, token);
            let position = Position::new(column as f64 * 150.0, depth as f64 * 120.0);
            diagram
                .insert_node(Node::new(
                    id.clone(),
                    catalog::component(component_id).unwrap(),
                    position,
                ))
                .unwrap();
            for source in &previous {
                diagram
                    .upsert_edge(source, &id, SecurityStatus::Secure)
                    .unwrap();
            }
            current.push(id);
        }
        first.get_or_insert_with(|| current[0].clone());
        last = Some(current[0].clone());
        previous = current;
    }

    (diagram, first.unwrap(), last.unwrap())
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (diagram, source, target) = layered_diagram();

    c.bench_function("paths_between layered", |b| {
        b.iter(|| diagram.paths_between(black_box(&source), black_box(&target)))
    });
    c.bench_function("evaluate_connection layered", |b| {
        b.iter(|| evaluate_connection(black_box(&diagram), &source, &target))
    });
    c.bench_function("assess layered", |b| b.iter(|| assess(black_box(&diagram))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

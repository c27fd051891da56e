use crate::error::WorkbenchError;
use assessment::{evaluate_connection, ConnectionAssessment, RiskAssessment};
use diagram::{template, Diagram, ExportDocument, Template};
use posture_core::catalog;
use posture_core::config::AppConfig;
use posture_core::model::{Edge, Node, NodeId, Position};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// An editing session over one diagram.
///
/// Node ids are `{component}-{token}` where the token comes from a counter
/// that only ever grows, so ids stay unique across deletes and clears.
#[derive(Debug)]
pub struct Workbench {
    diagram: Diagram,
    next_token: u64,
    config: AppConfig,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Workbench {
    pub fn new(config: AppConfig) -> Self {
        Self {
            diagram: Diagram::new(),
            next_token: 1,
            config,
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn add_node(
        &mut self,
        component_id: &str,
        position: Position,
    ) -> Result<NodeId, WorkbenchError> {
        let component = catalog::require(component_id).map_err(|err| {
            warn!("Rejected node: {}", err);
            WorkbenchError::from(err)
        })?;

        let id = NodeId::new(component.id, self.next_token);
        self.next_token += 1;
        self.diagram
            .insert_node(Node::new(id.clone(), component, position))?;

        info!("Added node {} at ({}, {})", id, position.x, position.y);
        Ok(id)
    }

    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Result<(), WorkbenchError> {
        self.ensure_node(id)?;
        self.diagram.move_node(id, position)?;
        Ok(())
    }

    /// Classifies and draws `source -> target`. Both endpoints take the
    /// connection's status. Connecting an already connected pair
    /// re-classifies the existing edge.
    pub fn connect(
        &mut self,
        source: &NodeId,
        target: &NodeId,
    ) -> Result<ConnectionAssessment, WorkbenchError> {
        self.ensure_node(source)?;
        self.ensure_node(target)?;

        let assessment = evaluate_connection(&self.diagram, source, target);
        self.diagram.upsert_edge(source, target, assessment.risk)?;
        self.diagram
            .mark_connected(&[source, target], assessment.risk);

        info!(
            "Connected {} -> {}: {} ({})",
            source, target, assessment.risk, assessment.rationale
        );
        Ok(assessment)
    }

    /// Evaluates a connection without drawing it.
    pub fn preview_connection(
        &self,
        source: &NodeId,
        target: &NodeId,
    ) -> Result<ConnectionAssessment, WorkbenchError> {
        self.ensure_node(source)?;
        self.ensure_node(target)?;
        Ok(evaluate_connection(&self.diagram, source, target))
    }

    /// Removes the node and every edge touching it.
    pub fn delete_node(&mut self, id: &NodeId) -> Result<(Node, Vec<Edge>), WorkbenchError> {
        self.ensure_node(id)?;
        let (node, edges) = self.diagram.remove_node(id)?;
        info!("Deleted node {} with {} edge(s)", id, edges.len());
        Ok((node, edges))
    }

    pub fn clear(&mut self) {
        self.diagram.clear();
        info!("Cleared diagram");
    }

    /// Replaces the diagram with a built-in template, drawing its
    /// connections through [`Workbench::connect`] in listing order.
    pub fn load_template(&mut self, template_id: &str) -> Result<&'static Template, WorkbenchError> {
        let template = template::find(template_id).ok_or_else(|| {
            warn!("Rejected unknown template {}", template_id);
            WorkbenchError::UnknownTemplate(template_id.to_string())
        })?;

        self.clear();

        let mut placed: HashMap<&str, NodeId> = HashMap::new();
        for entry in template.nodes {
            let id = self.add_node(entry.component_id, entry.position)?;
            placed.entry(entry.component_id).or_insert(id);
        }

        for (source, target) in template.connections() {
            if let (Some(source), Some(target)) = (placed.get(source), placed.get(target)) {
                self.connect(source, target)?;
            }
        }

        info!(
            "Loaded template {}: {} node(s), {} edge(s)",
            template.id,
            self.diagram.node_count(),
            self.diagram.edge_count()
        );
        Ok(template)
    }

    pub fn assess(&self) -> RiskAssessment {
        assessment::assess(&self.diagram)
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument::from_diagram(&self.diagram, &self.config.display)
    }

    pub fn export_json(&self) -> Result<String, WorkbenchError> {
        Ok(self.export().to_json(self.config.export.pretty)?)
    }

    /// Writes the export document to `dir` under the configured file name.
    pub fn write_export(&self, dir: impl AsRef<Path>) -> Result<PathBuf, WorkbenchError> {
        let path = dir.as_ref().join(&self.config.export.file_name);
        std::fs::write(&path, self.export_json()?)?;
        info!("Exported diagram to {}", path.display());
        Ok(path)
    }

    fn ensure_node(&self, id: &NodeId) -> Result<(), WorkbenchError> {
        if self.diagram.contains(id) {
            Ok(())
        } else {
            warn!("Unknown node {}", id);
            Err(WorkbenchError::NodeNotFound(id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posture_core::model::SecurityStatus;

    #[test]
    fn test_tokens_survive_clear() {
        let mut bench = Workbench::default();
        let first = bench.add_node("iam", Position::default()).unwrap();
        bench.clear();
        let second = bench.add_node("iam", Position::default()).unwrap();
        assert_eq!(first.as_str(), "iam-1");
        assert_eq!(second.as_str(), "iam-2");
    }

    #[test]
    fn test_preview_leaves_diagram_alone() {
        let mut bench = Workbench::default();
        let waf = bench.add_node("waf", Position::default()).unwrap();
        let webapp = bench.add_node("webapp", Position::default()).unwrap();

        let preview = bench.preview_connection(&waf, &webapp).unwrap();
        assert_eq!(preview.risk, SecurityStatus::Secure);
        assert_eq!(bench.diagram().edge_count(), 0);
        assert!(!bench.diagram().node(&waf).unwrap().connection.connected);
    }
}

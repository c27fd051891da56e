use posture_core::model::{Edge, NodeId};
use std::collections::{HashMap, HashSet};

/// Longest path, counted in nodes including both endpoints, that path search
/// will report.
pub const MAX_PATH_DEPTH: usize = 10;

/// Directed adjacency list keyed by node id. Neighbours keep edge insertion
/// order, so path enumeration is deterministic.
pub struct AdjacencyGraph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge.source.clone(), edge.target.clone());
        }
        graph
    }

    /// Parallel edges collapse into one.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        let targets = self.adjacency.entry(source).or_default();
        if !targets.contains(&target) {
            targets.push(target);
        }
    }

    pub fn neighbors(&self, id: &NodeId) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every simple directed path from `start` to `end` holding at most
    /// `max_depth` nodes. The visited set is scoped to the current branch, so
    /// a node may appear on several paths but never twice on one. When
    /// `start == end` the single path `[start]` is returned.
    pub fn all_simple_paths(
        &self,
        start: &NodeId,
        end: &NodeId,
        max_depth: usize,
    ) -> Vec<Vec<NodeId>> {
        let mut paths = Vec::new();
        let mut path = vec![start];
        let mut visited = HashSet::from([start]);
        self.walk(start, end, max_depth, &mut path, &mut visited, &mut paths);
        paths
    }

    fn walk<'a>(
        &'a self,
        current: &'a NodeId,
        end: &NodeId,
        max_depth: usize,
        path: &mut Vec<&'a NodeId>,
        visited: &mut HashSet<&'a NodeId>,
        paths: &mut Vec<Vec<NodeId>>,
    ) {
        if path.len() > max_depth {
            return;
        }
        if current == end {
            paths.push(path.iter().map(|id| (*id).clone()).collect());
            return;
        }

        for next in self.neighbors(current) {
            if !visited.insert(next) {
                continue;
            }
            path.push(next);
            self.walk(next, end, max_depth, path, visited, paths);
            path.pop();
            visited.remove(next);
        }
    }
}

impl Default for AdjacencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> NodeId {
        NodeId::from(raw)
    }

    fn chain(len: usize) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for i in 0..len {
            graph.add_edge(id(&format!("n-{}", i)), id(&format!("n-{}", i + 1)));
        }
        graph
    }

    #[test]
    fn test_graph_neighbors() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(id("a"), id("b"));
        graph.add_edge(id("a"), id("c"));
        graph.add_edge(id("a"), id("b"));

        assert_eq!(graph.neighbors(&id("a")), &[id("b"), id("c")]);
        assert!(graph.neighbors(&id("z")).is_empty());
    }

    #[test]
    fn test_graph_diamond_paths() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(id("a"), id("b"));
        graph.add_edge(id("a"), id("c"));
        graph.add_edge(id("b"), id("d"));
        graph.add_edge(id("c"), id("d"));

        let paths = graph.all_simple_paths(&id("a"), &id("d"), MAX_PATH_DEPTH);
        assert_eq!(
            paths,
            vec![
                vec![id("a"), id("b"), id("d")],
                vec![id("a"), id("c"), id("d")],
            ]
        );
    }

    #[test]
    fn test_graph_cycle_paths() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(id("a"), id("b"));
        graph.add_edge(id("b"), id("a"));
        graph.add_edge(id("b"), id("c"));
        graph.add_edge(id("c"), id("b"));
        graph.add_edge(id("c"), id("d"));

        let paths = graph.all_simple_paths(&id("a"), &id("d"), MAX_PATH_DEPTH);
        assert_eq!(paths, vec![vec![id("a"), id("b"), id("c"), id("d")]]);
    }

    #[test]
    fn test_graph_depth_bound() {
        // 9 hops = 10 nodes: reported.
        let graph = chain(9);
        assert_eq!(graph.all_simple_paths(&id("n-0"), &id("n-9"), MAX_PATH_DEPTH).len(), 1);

        // 10 hops = 11 nodes: cut.
        let graph = chain(10);
        assert!(graph
            .all_simple_paths(&id("n-0"), &id("n-10"), MAX_PATH_DEPTH)
            .is_empty());
    }

    #[test]
    fn test_graph_trivial_path() {
        let graph = AdjacencyGraph::new();
        let paths = graph.all_simple_paths(&id("a"), &id("a"), MAX_PATH_DEPTH);
        assert_eq!(paths, vec![vec![id("a")]]);
    }

    #[test]
    fn test_graph_direction() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(id("a"), id("b"));
        assert!(graph.all_simple_paths(&id("b"), &id("a"), MAX_PATH_DEPTH).is_empty());
    }
}

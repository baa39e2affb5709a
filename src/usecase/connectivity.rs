use crate::domain::error::{validate_vertex, GraphError};
use crate::domain::traits::UndirectedGraph;
use crate::usecase::traversal::depth_first;

/// Vertices reachable from a single source, computed once at construction.
#[derive(Debug, Clone)]
pub struct ConnectivityMarker {
    source: usize,
    marked: Vec<bool>,
    count: usize,
}

impl ConnectivityMarker {
    /// Runs one DFS from `source`. Time is proportional to `V + E`.
    pub fn new<G>(graph: &G, source: usize) -> Result<Self, GraphError>
    where
        G: UndirectedGraph + ?Sized,
    {
        let mut count = 0usize;
        let marked = depth_first(graph, source, |_, _| count += 1)?;

        tracing::debug!(source, reached = count, "connectivity marked");

        Ok(Self {
            source,
            marked,
            count,
        })
    }

    pub fn is_marked(&self, v: usize) -> Result<bool, GraphError> {
        validate_vertex(v, self.marked.len())?;
        Ok(self.marked[v])
    }

    /// Number of vertices reachable from the source, the source included.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.marked.len()
    }

    pub fn is_connected(&self) -> bool {
        self.count == self.marked.len()
    }

    /// Reachable vertices in ascending order.
    pub fn marked_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| m.then_some(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::Graph;

    fn graph_from(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::new(n);
        for &(v, w) in edges {
            g.add_edge(v, w).expect("edge");
        }
        g
    }

    #[test]
    fn marks_only_the_source_component() {
        let g = graph_from(5, &[(0, 1), (1, 2), (3, 4)]);
        let cc = ConnectivityMarker::new(&g, 0).expect("marker");

        assert_eq!(cc.count(), 3);
        assert_eq!(cc.is_marked(2), Ok(true));
        assert_eq!(cc.is_marked(3), Ok(false));
        assert_eq!(cc.marked_vertices().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(!cc.is_connected());
    }

    #[test]
    fn single_vertex_graph_is_connected() {
        let g = Graph::new(1);
        let cc = ConnectivityMarker::new(&g, 0).expect("marker");

        assert_eq!(cc.count(), 1);
        assert_eq!(cc.is_marked(0), Ok(true));
        assert!(cc.is_connected());
    }

    #[test]
    fn cycles_and_self_loops_are_counted_once() {
        let g = graph_from(3, &[(0, 1), (1, 2), (2, 0), (1, 1), (0, 1)]);
        let cc = ConnectivityMarker::new(&g, 1).expect("marker");
        assert_eq!(cc.count(), 3);
    }

    #[test]
    fn invalid_vertices_are_rejected() {
        let g = graph_from(2, &[(0, 1)]);
        assert!(matches!(
            ConnectivityMarker::new(&g, 2),
            Err(GraphError::InvalidVertex { vertex: 2, .. })
        ));

        let cc = ConnectivityMarker::new(&g, 0).expect("marker");
        assert!(cc.is_marked(2).is_err());

        let empty = Graph::new(0);
        assert!(ConnectivityMarker::new(&empty, 0).is_err());
    }
}

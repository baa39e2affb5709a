use crate::domain::error::{validate_vertex, GraphError};
use crate::domain::traits::UndirectedGraph;
use crate::usecase::traversal::depth_first;

/// DFS parent pointers from a single source.
///
/// `edge_to[w]` is the vertex `w` was first discovered from; it is `None`
/// for the source and for every unreachable vertex. Paths are valid simple
/// paths, not necessarily shortest ones.
#[derive(Debug, Clone)]
pub struct PathFinder {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
}

impl PathFinder {
    pub fn new<G>(graph: &G, source: usize) -> Result<Self, GraphError>
    where
        G: UndirectedGraph + ?Sized,
    {
        let mut edge_to = vec![None; graph.vertex_count()];
        let marked = depth_first(graph, source, |parent, w| edge_to[w] = parent)?;

        tracing::debug!(source, vertices = marked.len(), "dfs paths built");

        Ok(Self {
            source,
            marked,
            edge_to,
        })
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool, GraphError> {
        validate_vertex(v, self.marked.len())?;
        Ok(self.marked[v])
    }

    /// Vertices from the source to `v` inclusive, or `None` when `v` is
    /// unreachable.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>, GraphError> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }

        let mut path = vec![v];
        let mut x = v;
        while let Some(parent) = self.edge_to[x] {
            path.push(parent);
            x = parent;
        }
        path.reverse();

        Ok(Some(path))
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.marked.len()
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
    fn path_to_source_is_singleton() {
        let g = graph_from(3, &[(0, 1), (1, 2)]);
        let p = PathFinder::new(&g, 1).expect("paths");
        assert_eq!(p.path_to(1), Ok(Some(vec![1])));
    }

    #[test]
    fn path_follows_discovery_parents() {
        let g = graph_from(5, &[(0, 1), (1, 2), (3, 4)]);
        let p = PathFinder::new(&g, 0).expect("paths");

        assert_eq!(p.path_to(2), Ok(Some(vec![0, 1, 2])));
        assert_eq!(p.has_path_to(3), Ok(false));
        assert_eq!(p.path_to(3), Ok(None));
    }

    #[test]
    fn insertion_order_picks_the_deeper_path() {
        // adj[0] = [1, 2]; DFS reaches 2 through 1 first.
        let g = graph_from(3, &[(0, 1), (0, 2), (1, 2)]);
        let p = PathFinder::new(&g, 0).expect("paths");
        assert_eq!(p.path_to(2), Ok(Some(vec![0, 1, 2])));
    }

    #[test]
    fn invalid_vertices_are_rejected() {
        let g = graph_from(2, &[(0, 1)]);
        assert!(PathFinder::new(&g, 5).is_err());

        let p = PathFinder::new(&g, 0).expect("paths");
        assert_eq!(
            p.path_to(2),
            Err(GraphError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert!(p.has_path_to(9).is_err());
    }
}

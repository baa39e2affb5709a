use crate::domain::error::{validate_vertex, GraphError};
use crate::domain::traits::UndirectedGraph;

/// Depth-first walk from `source` over an explicit stack of
/// `(vertex, next_neighbor_index)` frames.
///
/// `visit(parent, w)` fires once per reachable vertex, in the same order a
/// recursive DFS would discover them; `parent` is `None` only for `source`.
/// Returns the visited mask, sized to `graph.vertex_count()`.
pub fn depth_first<G, F>(graph: &G, source: usize, mut visit: F) -> Result<Vec<bool>, GraphError>
where
    G: UndirectedGraph + ?Sized,
    F: FnMut(Option<usize>, usize),
{
    let n = graph.vertex_count();
    validate_vertex(source, n)?;

    let mut marked = vec![false; n];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    marked[source] = true;
    visit(None, source);
    stack.push((source, 0));

    while let Some((v, next_i)) = stack.pop() {
        let adj = graph.neighbors(v);
        if next_i >= adj.len() {
            continue;
        }

        let w = adj[next_i];
        stack.push((v, next_i + 1));
        if !marked[w] {
            marked[w] = true;
            visit(Some(v), w);
            stack.push((w, 0));
        }
    }

    Ok(marked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::Graph;

    fn recursive_order(g: &Graph, v: usize, marked: &mut [bool], out: &mut Vec<usize>) {
        marked[v] = true;
        out.push(v);
        for &w in g.neighbors(v) {
            if !marked[w] {
                recursive_order(g, w, marked, out);
            }
        }
    }

    fn tiny_cg() -> Graph {
        let mut g = Graph::new(6);
        for (v, w) in [(0, 5), (2, 4), (2, 3), (1, 2), (0, 1), (3, 4), (3, 5), (0, 2)] {
            g.add_edge(v, w).expect("edge");
        }
        g
    }

    #[test]
    fn discovery_order_matches_recursive_dfs() {
        let g = tiny_cg();

        let mut expected = Vec::new();
        recursive_order(&g, 0, &mut vec![false; 6], &mut expected);

        let mut seen = Vec::new();
        depth_first(&g, 0, |_, w| seen.push(w)).expect("dfs");

        assert_eq!(seen, expected);
    }

    #[test]
    fn parent_is_none_only_for_source() {
        let g = tiny_cg();
        let mut parents = Vec::new();
        depth_first(&g, 3, |p, w| parents.push((p, w))).expect("dfs");

        assert_eq!(parents[0], (None, 3));
        assert!(parents[1..].iter().all(|(p, _)| p.is_some()));
        assert_eq!(parents.len(), 6);
    }

    #[test]
    fn rejects_invalid_source_before_visiting() {
        let g = Graph::new(2);
        let mut calls = 0;
        let err = depth_first(&g, 2, |_, _| calls += 1).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn long_path_does_not_exhaust_the_call_stack() {
        let n = 200_000;
        let mut g = Graph::new(n);
        for v in 1..n {
            g.add_edge(v - 1, v).expect("edge");
        }

        let marked = depth_first(&g, 0, |_, _| {}).expect("dfs");
        assert!(marked.iter().all(|&m| m));
    }
}

/// Read-only view of an undirected graph, the only thing traversals consume.
///
/// Every edge `(u, w)` must show up in both `neighbors(u)` and `neighbors(w)`.
/// `neighbors` is only called with `v < vertex_count()`.
pub trait UndirectedGraph {
    fn vertex_count(&self) -> usize;

    fn neighbors(&self, v: usize) -> &[usize];
}

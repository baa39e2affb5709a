use crate::domain::error::{validate_vertex, GraphError};
use crate::domain::traits::UndirectedGraph;
use std::fmt;

/// Adjacency-list storage for an undirected graph over vertices `0..V`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Adds the undirected edge `v-w`. Self-loops land twice in `adj[v]`.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), GraphError> {
        let n = self.adj.len();
        validate_vertex(v, n)?;
        validate_vertex(w, n)?;
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.edge_count += 1;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn degree(&self, v: usize) -> Result<usize, GraphError> {
        validate_vertex(v, self.adj.len())?;
        Ok(self.adj[v].len())
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }
}

impl UndirectedGraph for Graph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count)?;
        for (v, outs) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for w in outs {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

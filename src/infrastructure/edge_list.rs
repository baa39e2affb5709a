//! Text edge-list reader.
//!
//! Format: whitespace-separated integers `V E v0 w0 v1 w1 ...` with exactly
//! `E` pairs. Line breaks carry no meaning.

use crate::domain::error::vertex_from_signed;
use crate::domain::graph::Graph;
use anyhow::{anyhow, bail, Context, Result};
use tokio::fs;

pub fn parse_edge_list(raw: &str) -> Result<Graph> {
    let mut tokens = Tokens::new(raw);

    let vertex_count = tokens.next_count("vertex count")?;
    let edge_count = tokens.next_count("edge count")?;

    let mut graph = Graph::new(vertex_count);
    for i in 0..edge_count {
        let v = tokens.next_int(&format!("edge {i} first endpoint"))?;
        let w = tokens.next_int(&format!("edge {i} second endpoint"))?;
        let v = vertex_from_signed(v, vertex_count).with_context(|| format!("edge {i}"))?;
        let w = vertex_from_signed(w, vertex_count).with_context(|| format!("edge {i}"))?;
        graph.add_edge(v, w)?;
    }

    if let Some(extra) = tokens.inner.next() {
        bail!("unexpected trailing token {extra:?} after {edge_count} edges");
    }

    Ok(graph)
}

pub async fn read_edge_list_file(path: &str) -> Result<Graph> {
    let raw = fs::read_to_string(path).await?;
    parse_edge_list(&raw).with_context(|| format!("parsing edge list: {path}"))
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            inner: raw.split_whitespace(),
        }
    }

    fn next_int(&mut self, what: &str) -> Result<i64> {
        let tok = self
            .inner
            .next()
            .ok_or_else(|| anyhow!("unexpected end of input: missing {what}"))?;
        tok.parse::<i64>()
            .with_context(|| format!("{what} is not an integer: {tok:?}"))
    }

    fn next_count(&mut self, what: &str) -> Result<usize> {
        let n = self.next_int(what)?;
        usize::try_from(n).map_err(|_| anyhow!("{what} must be non-negative, got {n}"))
    }
}

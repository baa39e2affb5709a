use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectivityReport {
    pub source: usize,
    pub vertex_count: usize,
    pub marked: Vec<usize>,
    pub count: usize,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub target: usize,
    /// `None` when `target` is not connected to the source.
    pub path: Option<Vec<usize>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathsReport {
    pub source: usize,
    pub vertex_count: usize,
    pub paths: Vec<PathEntry>,
}

impl PathsReport {
    pub fn reachable(&self) -> usize {
        self.paths.iter().filter(|e| e.path.is_some()).count()
    }
}

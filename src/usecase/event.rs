use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        vertices: usize,
        edges: usize,
    },

    TraversalFinished {
        source: usize,
        reached: usize,
    },

    PathResolved {
        target: usize,
        length: usize,
    },

    Unreachable {
        target: usize,
    },
}

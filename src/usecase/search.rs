use crate::domain::graph::Graph;
use crate::usecase::connectivity::ConnectivityMarker;
use crate::usecase::event::AppEvent;
use crate::usecase::paths::PathFinder;
use crate::usecase::report::{ConnectivityReport, PathEntry, PathsReport};
use anyhow::Result;
use tokio::sync::mpsc;

/// Marks everything reachable from `source` and summarizes it.
pub async fn search_connected(
    graph: &Graph,
    source: usize,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<ConnectivityReport> {
    emit_graph_loaded(&sink, graph).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "dfs".into(),
        },
    )
    .await;
    let marker = ConnectivityMarker::new(graph, source)?;
    emit(
        &sink,
        AppEvent::TraversalFinished {
            source,
            reached: marker.count(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "dfs".into(),
        },
    )
    .await;

    tracing::info!(
        source,
        reached = marker.count(),
        vertices = graph.vertex_count(),
        "connectivity search finished"
    );

    Ok(ConnectivityReport {
        source,
        vertex_count: marker.vertex_count(),
        marked: marker.marked_vertices().collect(),
        count: marker.count(),
        connected: marker.is_connected(),
    })
}

/// Builds DFS parent pointers from `source` and resolves a path to every vertex.
pub async fn search_paths(
    graph: &Graph,
    source: usize,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<PathsReport> {
    emit_graph_loaded(&sink, graph).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "dfs".into(),
        },
    )
    .await;
    let finder = PathFinder::new(graph, source)?;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "dfs".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "resolve_paths".into(),
        },
    )
    .await;
    let mut paths = Vec::with_capacity(finder.vertex_count());
    for target in 0..finder.vertex_count() {
        let path = finder.path_to(target)?;
        let ev = match path.as_ref() {
            Some(p) => AppEvent::PathResolved {
                target,
                length: p.len() - 1,
            },
            None => AppEvent::Unreachable { target },
        };
        emit(&sink, ev).await;
        paths.push(PathEntry { target, path });
    }
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "resolve_paths".into(),
        },
    )
    .await;

    let report = PathsReport {
        source,
        vertex_count: finder.vertex_count(),
        paths,
    };
    tracing::info!(
        source,
        reachable = report.reachable(),
        vertices = report.vertex_count,
        "path search finished"
    );

    Ok(report)
}

async fn emit_graph_loaded(sink: &Option<mpsc::Sender<AppEvent>>, graph: &Graph) {
    emit(
        sink,
        AppEvent::GraphLoaded {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        },
    )
    .await;
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}

use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded { vertices, edges } => {
            json!({"type":"graph_loaded","vertices":vertices,"edges":edges})
        }
        AppEvent::TraversalFinished { source, reached } => {
            json!({"type":"traversal_finished","source":source,"reached":reached})
        }
        AppEvent::PathResolved { target, length } => {
            json!({"type":"path_resolved","target":target,"length":length})
        }
        AppEvent::Unreachable { target } => json!({"type":"unreachable","target":target}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}

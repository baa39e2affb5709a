use crate::domain::error::vertex_from_signed;
use crate::domain::graph::Graph;
use crate::infrastructure::edge_list::read_edge_list_file;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::usecase::event::AppEvent;
use crate::usecase::report::{ConnectivityReport, PathsReport};
use crate::usecase::search::{search_connected, search_paths};
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Search(opts) => {
            let graph = load_graph(&opts.input).await?;
            let source = resolve_source(&graph, opts.source)?;

            let (sink, printer) = event_sink(opts.emit_events);
            let report = search_connected(&graph, source, sink).await?;
            if let Some(handle) = printer {
                handle.await.ok();
            }

            if opts.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_connectivity(&report));
            }

            eprintln!(
                "summary: source={} reached={} vertices={}",
                report.source, report.count, report.vertex_count
            );
            Ok(())
        }

        Cli::Paths(opts) => {
            let graph = load_graph(&opts.input).await?;
            let source = resolve_source(&graph, opts.source)?;

            let (sink, printer) = event_sink(opts.emit_events);
            let report = search_paths(&graph, source, sink).await?;
            if let Some(handle) = printer {
                handle.await.ok();
            }

            if opts.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_paths(&report));
            }

            eprintln!(
                "summary: source={} reachable={} vertices={}",
                report.source,
                report.reachable(),
                report.vertex_count
            );
            Ok(())
        }

        Cli::Show { input } => {
            let graph = load_graph(&input).await?;
            print!("{graph}");
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct SearchOpts {
    input: String,
    source: i64,
    emit_events: bool,
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Cli {
    Search(SearchOpts),
    Paths(SearchOpts),
    Show { input: String },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> search --in <edges.txt> --source <s> [--emit-events] [--json]
        // <bin> paths  --in <edges.txt> --source <s> [--emit-events] [--json]
        // <bin> show   --in <edges.txt>
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "search" => Ok(Cli::Search(Self::parse_search(args)?)),
            "paths" => Ok(Cli::Paths(Self::parse_search(args)?)),
            "show" => Self::parse_show(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_search(args: &[String]) -> Result<SearchOpts> {
        let mut input: Option<String> = None;
        let mut source: Option<String> = None;
        let mut emit_events = false;
        let mut json = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-s" | "--source" => {
                    i += 1;
                    source = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--json" => {
                    json = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        let source = source.ok_or_else(|| anyhow!(format!("missing --source\n\n{}", usage())))?;
        let source = source
            .parse::<i64>()
            .with_context(|| format!("--source is not an integer: {source:?}"))?;

        Ok(SearchOpts {
            input,
            source,
            emit_events,
            json,
        })
    }

    fn parse_show(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::Show { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph-dfs-paths search --in/--input <edges.txt> --source <s> [--emit-events] [--json]\n  graph-dfs-paths paths --in/--input <edges.txt> --source <s> [--emit-events] [--json]\n  graph-dfs-paths show --in/--input <edges.txt>\n\nInput:\n  Whitespace-separated integers: vertex count, edge count, then one `v w` pair per edge.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout before the result; summary goes to stderr."
}

async fn load_graph(input: &str) -> Result<Graph> {
    let graph = read_edge_list_file(input)
        .await
        .with_context(|| format!("reading edge list: {input}"))?;
    tracing::info!(
        input,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

fn resolve_source(graph: &Graph, raw: i64) -> Result<usize> {
    vertex_from_signed(raw, graph.vertex_count()).context("invalid --source")
}

fn event_sink(enabled: bool) -> (Option<mpsc::Sender<AppEvent>>, Option<JoinHandle<()>>) {
    if !enabled {
        return (None, None);
    }
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    (Some(tx), Some(spawn_ndjson_printer(rx)))
}

fn render_connectivity(report: &ConnectivityReport) -> String {
    let marked: Vec<String> = report.marked.iter().map(|v| v.to_string()).collect();
    let verdict = if report.connected {
        "connected"
    } else {
        "NOT connected"
    };
    format!("{}\n{verdict}\n", marked.join(" "))
}

fn render_paths(report: &PathsReport) -> String {
    let mut out = String::new();
    for entry in report.paths.iter() {
        let line = match entry.path.as_ref() {
            Some(path) => {
                let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                hops.join("-")
            }
            None => "not connected".to_string(),
        };
        out.push_str(&format!("{} to {}: {line}\n", report.source, entry.target));
    }
    out
}

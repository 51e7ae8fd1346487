//! Driver binary: run the orientation command against a model file, the way
//! the hosted add-in would run it against a live structure.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

use orient::api::*;

mod model_file;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Wireframe bar orientation driver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Orient the bars of a model file and write the angles as CSV
    Run {
        #[arg(long)]
        model: String,
        #[arg(long)]
        out: String,
        /// Comma-separated bar ids; overrides the file's selection
        #[arg(long)]
        select: Option<String>,
    },
    /// Validate model integrity and print a JSON summary
    Check {
        #[arg(long)]
        model: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { model, out, select } => run(model, out, select),
        Action::Check { model } => check(model),
        Action::Report => report(),
    }
}

fn run(model_path: String, out: String, select: Option<String>) -> Result<()> {
    tracing::info!(model = %model_path, out = %out, "run");
    let (nodes, bars, mut selection) = model_file::load(Path::new(&model_path))?;
    if let Some(spec) = select {
        selection = parse_selection(&spec)?;
    }

    let mut host = MemoryHost::new(nodes, bars);
    host.selection = selection;
    let mut session = Session::new(GeomCfg::default());
    session.connect(host)?;
    let report = session.run(CMD_ORIENT)?;
    let host = session
        .disconnect()
        .context("session lost its host after the run")?;

    write_angles_csv(Path::new(&out), &report)?;
    provenance::write_sidecar(
        &out,
        serde_json::json!({
            "model": model_path,
            "bars": host.bars.len(),
            "selection": host.selection.len(),
            "oriented": report.angles.len(),
            "skipped": {
                "zero_length": report.skipped.zero_length,
                "vertical": report.skipped.vertical,
                "no_reference": report.skipped.no_reference,
            },
        }),
    )?;
    tracing::info!(
        oriented = report.angles.len(),
        skipped = report.skipped.total(),
        refreshes = host.refreshes,
        "run complete"
    );
    Ok(())
}

fn check(model_path: String) -> Result<()> {
    let (nodes, bars, selection) = model_file::load(Path::new(&model_path))?;
    let model = Model::new(nodes, bars)?;
    let graph = build_graph(&model, GeomCfg::default())?;
    let zero_length = graph.vectors.iter().filter(|v| v.is_none()).count();
    let obj = serde_json::json!({
        "nodes": model.nodes().len(),
        "bars": model.bars().len(),
        "selection": selection.len(),
        "zero_length": zero_length,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "tool": format!("orient-cli {}", orient::VERSION),
        "code_rev": provenance::current_git_rev(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn parse_selection(spec: &str) -> Result<Vec<BarId>> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map(BarId)
                .with_context(|| format!("invalid bar id in --select: {s:?}"))
        })
        .collect()
}

fn write_angles_csv(path: &Path, report: &RunReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let ids: Vec<u32> = report.angles.iter().map(|&(b, _)| b.0).collect();
    let degs: Vec<f64> = report.angles.iter().map(|&(_, a)| a).collect();
    let mut df = df!("bar" => ids, "angle_deg" => degs)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating results file {}", path.display()))?;
    CsvWriter::new(file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selection_accepts_lists_and_rejects_garbage() {
        assert_eq!(
            parse_selection("1, 2,3").unwrap(),
            vec![BarId(1), BarId(2), BarId(3)]
        );
        assert!(parse_selection("").unwrap().is_empty());
        assert!(parse_selection("1,x").is_err());
    }

    #[test]
    fn angles_csv_round_trips_through_polars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("angles.csv");
        let report = RunReport {
            angles: vec![(BarId(1), 0.0), (BarId(4), -32.5)],
            skipped: SkipCounts::default(),
        };
        write_angles_csv(&path, &report).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("bar,angle_deg"));
        assert_eq!(lines.next(), Some("1,0.0"));
        assert_eq!(lines.next(), Some("4,-32.5"));
    }
}

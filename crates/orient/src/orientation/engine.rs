//! One pass over a working set of bars.

use tracing::debug;

use crate::geom3::{is_vertical, GeomCfg};
use crate::model::{BarId, Model};

use super::build::build_graph;
use super::solve::{frame_angle_deg, most_orthogonal};
use super::types::{Graph, OrientError, RunReport};

/// Convenience: build the graph and run over `selection` in one call.
pub fn orient_model(
    model: &Model,
    selection: &[BarId],
    cfg: GeomCfg,
) -> Result<RunReport, OrientError> {
    let graph = build_graph(model, cfg)?;
    orient_bars(model, &graph, selection, cfg)
}

/// Compute angles for `selection` (empty = every bar, model order) against a
/// prebuilt graph. `graph` must come from `build_graph` on this `model`.
///
/// Bars are processed in working-set order; results are independent of each
/// other, so order only affects the order of `RunReport::angles`. A
/// selection naming an unknown bar id is fatal, like a missing node: the
/// working set no longer describes this model.
pub fn orient_bars(
    model: &Model,
    graph: &Graph,
    selection: &[BarId],
    cfg: GeomCfg,
) -> Result<RunReport, OrientError> {
    let all: Vec<BarId>;
    let working: &[BarId] = if selection.is_empty() {
        all = model.bars().iter().map(|b| b.id).collect();
        &all
    } else {
        selection
    };

    let mut report = RunReport::default();
    for &bar_id in working {
        let slot = model
            .bar_slot(bar_id)
            .ok_or(OrientError::UnknownBar { bar: bar_id })?;
        let Some(w) = graph.vectors[slot] else {
            report.skipped.zero_length += 1;
            continue;
        };
        let u = w.normalize();
        if is_vertical(u, cfg.eps_parallel) {
            report.skipped.vertical += 1;
            continue;
        }
        let start = model.bars()[slot].start;
        let start_slot = model.node_slot(start).ok_or(OrientError::MissingNode {
            bar: bar_id,
            node: start,
        })?;
        let Some(v) = most_orthogonal(u, &graph.adj[start_slot], cfg) else {
            report.skipped.no_reference += 1;
            continue;
        };
        report.angles.push((bar_id, frame_angle_deg(u, v)));
    }
    debug!(
        bars = working.len(),
        oriented = report.angles.len(),
        skipped = report.skipped.total(),
        "orientation pass complete"
    );
    Ok(report)
}

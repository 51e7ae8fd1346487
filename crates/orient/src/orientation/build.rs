//! Graph construction: per-bar vectors and per-node incident lists.

use crate::geom3::GeomCfg;
use crate::model::Model;

use super::types::{Graph, OrientError};

/// Build the per-run graph from the full model (never just the working set:
/// a bar outside the selection is still a valid reference for its
/// neighbors).
///
/// Every bar appends its raw direction vector to both endpoints' lists, in
/// bar order. A bar referencing an absent node id aborts the build — an
/// adjacency missing one member would silently bias every selection around
/// it.
pub fn build_graph(model: &Model, cfg: GeomCfg) -> Result<Graph, OrientError> {
    let mut vectors = Vec::with_capacity(model.bars().len());
    let mut adj = vec![Vec::new(); model.nodes().len()];
    for bar in model.bars() {
        let s = model
            .node_slot(bar.start)
            .ok_or(OrientError::MissingNode {
                bar: bar.id,
                node: bar.start,
            })?;
        let e = model.node_slot(bar.end).ok_or(OrientError::MissingNode {
            bar: bar.id,
            node: bar.end,
        })?;
        let w = model.nodes()[e].pos - model.nodes()[s].pos;
        adj[s].push(w);
        adj[e].push(w);
        vectors.push((w.norm() > cfg.eps_len).then_some(w));
    }
    Ok(Graph { vectors, adj })
}

//! JSON model files for the driver: nodes, bars, optional selection.
//!
//! The core stays serde-free; these records exist only at the file boundary
//! and convert into the snapshot types on load.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use orient::model::{Bar, BarId, Node, NodeId};
use orient::Point3;

#[derive(Debug, Deserialize)]
struct NodeRec {
    id: u32,
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Deserialize)]
struct BarRec {
    id: u32,
    start: u32,
    end: u32,
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    nodes: Vec<NodeRec>,
    bars: Vec<BarRec>,
    /// Bar ids to process; empty or absent means "all bars".
    #[serde(default)]
    selection: Vec<u32>,
}

/// Load `(nodes, bars, selection)` from a model JSON file.
pub fn load(path: &Path) -> Result<(Vec<Node>, Vec<Bar>, Vec<BarId>)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading model file {}", path.display()))?;
    let file: ModelFile =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    let nodes = file
        .nodes
        .into_iter()
        .map(|n| Node {
            id: NodeId(n.id),
            pos: Point3::new(n.x, n.y, n.z),
        })
        .collect();
    let bars = file
        .bars
        .into_iter()
        .map(|b| Bar {
            id: BarId(b.id),
            start: NodeId(b.start),
            end: NodeId(b.end),
        })
        .collect();
    let selection = file.selection.into_iter().map(BarId).collect();
    Ok((nodes, bars, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_parses_nodes_bars_and_selection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(
            &path,
            r#"{
                "nodes": [
                    {"id": 1, "x": 0.0, "y": 0.0, "z": 0.0},
                    {"id": 2, "x": 10.0, "y": 0.0, "z": 0.0}
                ],
                "bars": [{"id": 5, "start": 1, "end": 2}],
                "selection": [5]
            }"#,
        )
        .unwrap();
        let (nodes, bars, selection) = load(&path).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].pos, Point3::new(10.0, 0.0, 0.0));
        assert_eq!(bars[0].id, BarId(5));
        assert_eq!(selection, vec![BarId(5)]);
    }

    #[test]
    fn selection_defaults_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, r#"{"nodes": [], "bars": []}"#).unwrap();
        let (_, _, selection) = load(&path).unwrap();
        assert!(selection.is_empty());
    }
}

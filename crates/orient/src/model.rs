//! Immutable node/bar snapshot of a wireframe structural model.
//!
//! Purpose
//! - Hold the geometry exactly as enumerated by the host, with id→slot
//!   indices so the orientation pass can use dense per-slot storage.
//! - The snapshot never changes during a run; computed angles are returned
//!   as values and applied by the session layer, never written here.

use std::collections::HashMap;
use std::fmt;

use nalgebra::Point3;
use thiserror::Error;

/// Identifier types for clarity. Ids come from the host and need not be
/// dense or ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BarId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl fmt::Display for BarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled 3-D point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub pos: Point3<f64>,
}

/// A directed linear member between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub id: BarId,
    pub start: NodeId,
    pub end: NodeId,
}

/// Snapshot construction errors: ids must be unique within their kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),
    #[error("duplicate bar id {0}")]
    DuplicateBar(BarId),
}

/// Read-only model snapshot with id→slot indices.
///
/// Iteration order is insertion order; the orientation pass relies on it for
/// its first-wins tie rule and for the default working set.
#[derive(Clone, Debug, Default)]
pub struct Model {
    nodes: Vec<Node>,
    bars: Vec<Bar>,
    node_slots: HashMap<NodeId, usize>,
    bar_slots: HashMap<BarId, usize>,
}

impl Model {
    pub fn new(nodes: Vec<Node>, bars: Vec<Bar>) -> Result<Self, ModelError> {
        let mut node_slots = HashMap::with_capacity(nodes.len());
        for (slot, node) in nodes.iter().enumerate() {
            if node_slots.insert(node.id, slot).is_some() {
                return Err(ModelError::DuplicateNode(node.id));
            }
        }
        let mut bar_slots = HashMap::with_capacity(bars.len());
        for (slot, bar) in bars.iter().enumerate() {
            if bar_slots.insert(bar.id, slot).is_some() {
                return Err(ModelError::DuplicateBar(bar.id));
            }
        }
        Ok(Self {
            nodes,
            bars,
            node_slots,
            bar_slots,
        })
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    #[inline]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }
    #[inline]
    pub fn node_slot(&self, id: NodeId) -> Option<usize> {
        self.node_slots.get(&id).copied()
    }
    #[inline]
    pub fn bar_slot(&self, id: BarId) -> Option<usize> {
        self.bar_slots.get(&id).copied()
    }
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_slot(id).map(|s| &self.nodes[s])
    }
    #[inline]
    pub fn bar(&self, id: BarId) -> Option<&Bar> {
        self.bar_slot(id).map(|s| &self.bars[s])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u32) -> Node {
        Node {
            id: NodeId(id),
            pos: Point3::origin(),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Model::new(vec![node(1), node(1)], vec![]).unwrap_err();
        assert_eq!(err, ModelError::DuplicateNode(NodeId(1)));

        let bars = vec![
            Bar {
                id: BarId(7),
                start: NodeId(1),
                end: NodeId(2),
            },
            Bar {
                id: BarId(7),
                start: NodeId(2),
                end: NodeId(1),
            },
        ];
        let err = Model::new(vec![node(1), node(2)], bars).unwrap_err();
        assert_eq!(err, ModelError::DuplicateBar(BarId(7)));
    }

    #[test]
    fn slots_resolve_in_insertion_order() {
        // Sparse, unordered ids are fine; slots follow insertion order.
        let model = Model::new(
            vec![node(30), node(10), node(20)],
            vec![Bar {
                id: BarId(5),
                start: NodeId(10),
                end: NodeId(30),
            }],
        )
        .unwrap();
        assert_eq!(model.node_slot(NodeId(30)), Some(0));
        assert_eq!(model.node_slot(NodeId(10)), Some(1));
        assert_eq!(model.node_slot(NodeId(99)), None);
        assert_eq!(model.bar(BarId(5)).unwrap().end, NodeId(30));
        assert_eq!(model.nodes()[0].id, NodeId(30));
    }
}

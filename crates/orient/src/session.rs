//! Host boundary: two-state handshake, command table, write-back.
//!
//! Purpose
//! - Mirror the shape of a hosted add-in: a session connects to the hosting
//!   structural-analysis environment, exposes an installable command list,
//!   and a command run reads the current selection, computes the angles,
//!   writes them back one bar at a time, and asks for a single redraw.
//! - The engine is reachable only through a connected session, so "never
//!   compute while disconnected" is a state check here rather than a
//!   convention callers must remember.

use std::collections::HashMap;

use thiserror::Error;
use tracing::info;

use crate::geom3::GeomCfg;
use crate::model::{Bar, BarId, Model, ModelError, Node};
use crate::orientation::{orient_model, OrientError, RunReport};

/// Installable command identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CommandId(pub i32);

/// One entry of the command table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
    pub label: &'static str,
}

/// Orient the current selection (or everything when nothing is selected).
pub const CMD_ORIENT: CommandId = CommandId(1);

const COMMANDS: &[Command] = &[Command {
    id: CMD_ORIENT,
    label: "Orient grid elements",
}];

/// What the hosting environment provides to a session.
///
/// Enumerations are snapshots: the host must not mutate geometry while a
/// command runs. Write-backs arrive only after the whole pass succeeded.
pub trait Host {
    fn nodes(&self) -> Vec<Node>;
    fn bars(&self) -> Vec<Bar>;
    /// Current bar selection; empty means "work on all bars".
    fn selection(&self) -> Vec<BarId>;
    /// Persist one computed angle (degrees) onto the host's bar object.
    fn write_angle(&mut self, bar: BarId, degrees: f64);
    /// Redraw dependent views; called once per successful run.
    fn refresh(&mut self);
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no host connected")]
    NotConnected,
    #[error("a host is already connected")]
    AlreadyConnected,
    #[error("unknown command id {0}")]
    UnknownCommand(i32),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Orient(#[from] OrientError),
}

/// Connect → run commands → disconnect.
#[derive(Debug)]
pub struct Session<H: Host> {
    host: Option<H>,
    cfg: GeomCfg,
}

impl<H: Host> Session<H> {
    pub fn new(cfg: GeomCfg) -> Self {
        Self { host: None, cfg }
    }

    /// The command table the host should install.
    pub fn commands(&self) -> &'static [Command] {
        COMMANDS
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.host.is_some()
    }

    pub fn connect(&mut self, host: H) -> Result<(), SessionError> {
        if self.host.is_some() {
            return Err(SessionError::AlreadyConnected);
        }
        self.host = Some(host);
        Ok(())
    }

    /// Detach and return the host, if any.
    pub fn disconnect(&mut self) -> Option<H> {
        self.host.take()
    }

    /// Execute a command against the connected host.
    ///
    /// For `CMD_ORIENT`: snapshot nodes and bars, compute angles for the
    /// current selection, write every angle back, then request one redraw.
    /// Fatal integrity errors write nothing back.
    pub fn run(&mut self, cmd: CommandId) -> Result<RunReport, SessionError> {
        let host = self.host.as_mut().ok_or(SessionError::NotConnected)?;
        if cmd != CMD_ORIENT {
            return Err(SessionError::UnknownCommand(cmd.0));
        }
        let model = Model::new(host.nodes(), host.bars())?;
        let report = orient_model(&model, &host.selection(), self.cfg)?;
        for &(bar, degrees) in &report.angles {
            host.write_angle(bar, degrees);
        }
        host.refresh();
        info!(
            oriented = report.angles.len(),
            skipped = report.skipped.total(),
            "orient command applied"
        );
        Ok(report)
    }
}

/// In-memory host for drivers and tests. Records write-backs and refreshes.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    pub nodes: Vec<Node>,
    pub bars: Vec<Bar>,
    pub selection: Vec<BarId>,
    pub angles: HashMap<BarId, f64>,
    pub refreshes: usize,
}

impl MemoryHost {
    pub fn new(nodes: Vec<Node>, bars: Vec<Bar>) -> Self {
        Self {
            nodes,
            bars,
            ..Self::default()
        }
    }
}

impl Host for MemoryHost {
    fn nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }
    fn bars(&self) -> Vec<Bar> {
        self.bars.clone()
    }
    fn selection(&self) -> Vec<BarId> {
        self.selection.clone()
    }
    fn write_angle(&mut self, bar: BarId, degrees: f64) {
        self.angles.insert(bar, degrees);
    }
    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}

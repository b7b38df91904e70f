//! Combinational netlist model with per-node stuck-at overrides.
//!
//! A [`Circuit`] owns a set of named nodes, each either a primary input or a
//! gate computing a pure function of earlier nodes. The input state is
//! programmed as one packed integer, and any node's output can be forced to
//! a constant for fault analysis. Sweeping and classifying live in the
//! `saft-sim` crate; this crate is the passive model.

pub mod circuit;
pub mod example_circuits;
mod node;
pub mod ops;

pub use circuit::{Circuit, NetError};
pub use node::{Drive, GateFn, Node, NodeId, NodeKind, RawNodeIdx};

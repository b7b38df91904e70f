//! Single stuck-at fault campaigns.

use std::fmt;

use rayon::prelude::*;
use saft_net::{Circuit, NodeId};

use crate::sweep::{Signature, full_sweep};

/// Identifies one simulated drive configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaultLabel {
    /// No fault injected.
    FaultFree,
    /// The named node stuck at a constant.
    Stuck {
        /// Faulted node name.
        node: String,
        /// Forced output value.
        value: bool,
    },
}

impl fmt::Display for FaultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultLabel::FaultFree => f.write_str("<fault-free>"),
            FaultLabel::Stuck { node, value } => write!(f, "{node}{}", u8::from(*value)),
        }
    }
}

/// One campaign entry: a drive configuration and the signature it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaultRecord {
    /// Which configuration was simulated.
    pub label: FaultLabel,
    /// Sweep signature under that configuration.
    pub signature: Signature,
}

/// Iterator producing the campaign one record at a time.
///
/// Yields the fault-free record first, then the stuck-at-0 and stuck-at-1
/// records for every non-input node in registration order. Each fault is
/// injected right before its sweep and cleared right after it, so the
/// circuit is fault-free between items — including when the iterator is
/// dropped mid-campaign.
#[derive(Debug)]
pub struct FaultCampaign<'c> {
    circuit: &'c mut Circuit,
    targets: Vec<NodeId>,
    cursor: usize,
}

impl<'c> FaultCampaign<'c> {
    /// Starts a campaign over all non-input nodes of `circuit`.
    pub fn new(circuit: &'c mut Circuit) -> Self {
        let targets = circuit.gate_ids().collect();
        Self {
            circuit,
            targets,
            cursor: 0,
        }
    }

    fn total(&self) -> usize {
        1 + 2 * self.targets.len()
    }
}

impl Iterator for FaultCampaign<'_> {
    type Item = FaultRecord;

    fn next(&mut self) -> Option<FaultRecord> {
        if self.cursor >= self.total() {
            return None;
        }
        let record = if self.cursor == 0 {
            FaultRecord {
                label: FaultLabel::FaultFree,
                signature: full_sweep(self.circuit),
            }
        } else {
            let target = self.targets[(self.cursor - 1) / 2];
            let value = (self.cursor - 1) % 2 == 1;
            let node = self.circuit.node(target).name().to_owned();
            log::debug!("injecting stuck-at-{} on `{node}`", u8::from(value));
            self.circuit.inject_stuck_at(target, value);
            let signature = full_sweep(self.circuit);
            self.circuit.clear_fault_at(target);
            FaultRecord {
                label: FaultLabel::Stuck { node, value },
                signature,
            }
        };
        self.cursor += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total() - self.cursor;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FaultCampaign<'_> {}

/// Runs the whole campaign, collecting `2 × (nodes − inputs) + 1` records.
pub fn run_full_campaign(circuit: &mut Circuit) -> Vec<FaultRecord> {
    let records: Vec<FaultRecord> = FaultCampaign::new(circuit).collect();
    log::info!(
        "campaign finished: {} records over {} states",
        records.len(),
        circuit.num_states()
    );
    records
}

/// Parallel variant of [`run_full_campaign`].
///
/// Every fault is evaluated on its own clone of the circuit, so drive
/// state is never shared, and records are collected in the fixed fault
/// order — the output is bit-identical to the sequential campaign.
pub fn run_full_campaign_par(circuit: &Circuit) -> Vec<FaultRecord> {
    let faults: Vec<(NodeId, bool)> = circuit
        .gate_ids()
        .flat_map(|id| [(id, false), (id, true)])
        .collect();

    let mut fault_free = circuit.clone();
    let mut records = vec![FaultRecord {
        label: FaultLabel::FaultFree,
        signature: full_sweep(&mut fault_free),
    }];

    let faulted: Vec<FaultRecord> = faults
        .par_iter()
        .map(|&(id, value)| {
            let mut faulted = circuit.clone();
            faulted.inject_stuck_at(id, value);
            let signature = full_sweep(&mut faulted);
            FaultRecord {
                label: FaultLabel::Stuck {
                    node: faulted.node(id).name().to_owned(),
                    value,
                },
                signature,
            }
        })
        .collect();
    records.extend(faulted);

    log::info!("parallel campaign finished: {} records", records.len());
    records
}

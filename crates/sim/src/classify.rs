//! Signature grouping into equivalence classes.

use indexmap::IndexMap;

use crate::campaign::{FaultLabel, FaultRecord};
use crate::sweep::Signature;

/// A set of drive configurations sharing one signature.
#[derive(Clone, Debug)]
pub struct EquivClass {
    /// The shared signature.
    pub signature: Signature,
    /// Labels whose sweeps produced it, in record order.
    pub members: Vec<FaultLabel>,
    /// State indices where this signature differs from the fault-free one.
    ///
    /// Any of these input vectors detects every fault in the class; empty
    /// for the fault-free class.
    pub detecting_states: Vec<u64>,
}

/// Campaign records partitioned by exact signature equality.
#[derive(Clone, Debug)]
pub struct Classification {
    classes: Vec<EquivClass>,
    fault_free: usize,
}

impl Classification {
    /// All classes, in first-seen signature order.
    pub fn classes(&self) -> &[EquivClass] {
        &self.classes
    }

    /// The class whose signature matches the fault-free sweep.
    pub fn fault_free_class(&self) -> &EquivClass {
        &self.classes[self.fault_free]
    }

    /// Faults indistinguishable from the fault-free circuit.
    ///
    /// No input vector detects these.
    pub fn redundant_faults(&self) -> impl Iterator<Item = &FaultLabel> {
        self.fault_free_class()
            .members
            .iter()
            .filter(|label| **label != FaultLabel::FaultFree)
    }

    /// Classes of two or more mutually indistinguishable faults, excluding
    /// the fault-free class.
    pub fn equivalent_classes(&self) -> impl Iterator<Item = &EquivClass> {
        self.classes
            .iter()
            .enumerate()
            .filter(move |(index, class)| *index != self.fault_free && class.members.len() > 1)
            .map(|(_, class)| class)
    }
}

/// Groups campaign records by exact signature equality, first-seen order.
///
/// # Panics
///
/// If the records lack the fault-free baseline, or signatures differ in
/// length — defects in the producing campaign, not user input.
pub fn classify(records: &[FaultRecord]) -> Classification {
    let baseline = records
        .iter()
        .find(|record| record.label == FaultLabel::FaultFree)
        .expect("campaign records are missing the fault-free baseline");

    let mut groups: IndexMap<&Signature, Vec<FaultLabel>> = IndexMap::new();
    for record in records {
        assert_eq!(
            record.signature.len(),
            baseline.signature.len(),
            "signature length differs for `{}`",
            record.label
        );
        groups
            .entry(&record.signature)
            .or_default()
            .push(record.label.clone());
    }

    let mut classes = Vec::with_capacity(groups.len());
    let mut fault_free = None;
    for (index, (signature, members)) in groups.into_iter().enumerate() {
        if *signature == baseline.signature {
            fault_free = Some(index);
        }
        let mut detecting_states = Vec::new();
        for state in 0..signature.len() {
            if signature[state] != baseline.signature[state] {
                detecting_states.push(state as u64);
            }
        }
        classes.push(EquivClass {
            signature: signature.to_owned(),
            members,
            detecting_states,
        });
    }

    Classification {
        classes,
        fault_free: fault_free.expect("fault-free baseline lost its own class"),
    }
}

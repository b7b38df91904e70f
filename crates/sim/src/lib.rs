//! Exhaustive simulation drivers over a `saft-net` circuit.
//!
//! A sweep walks all `2^k` input states and collects the primary-output
//! sequence (the *signature*). A fault campaign repeats the sweep under
//! every single stuck-at fault, classification partitions the resulting
//! signatures into equivalence classes, and the truth table arranges the
//! records for external consumers such as a two-level logic minimizer.

pub mod campaign;
pub mod classify;
pub mod minimize;
pub mod sweep;
pub mod table;

pub use campaign::{
    FaultCampaign, FaultLabel, FaultRecord, run_full_campaign, run_full_campaign_par,
};
pub use classify::{Classification, EquivClass, classify};
pub use minimize::{FormulaMinimizer, MinimizedFormula};
pub use sweep::{Signature, full_sweep};
pub use table::TruthTable;

//! Text rendering for the fault table and the equivalence report.
//!
//! Test vectors and PLA rows share one convention: input values left to
//! right in declared input order (state bit 0 leftmost).

use std::io::{self, Write};

use saft_sim::{Classification, TruthTable};

/// Writes the `N`-plus-labels fault table, one row per input state.
pub fn write_table(w: &mut impl Write, table: &TruthTable) -> io::Result<()> {
    let names: Vec<&str> = table.input_names().collect();
    writeln!(
        w,
        "Inputs: {} (state bit 0 = {})",
        names.join(" "),
        names.first().unwrap_or(&"-")
    )?;

    let labels: Vec<&str> = table.labels().collect();
    let index_width = table
        .num_rows()
        .saturating_sub(1)
        .to_string()
        .len()
        .max(1);
    write!(w, "{:>index_width$}", "N")?;
    for label in &labels {
        write!(w, " {label}")?;
    }
    writeln!(w)?;

    for state in 0..table.num_rows() {
        write!(w, "{state:>index_width$}")?;
        let bits = table.output_bits(state);
        for (label, bit) in labels.iter().zip(bits.chars()) {
            write!(w, " {bit:>width$}", width = label.len())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes the redundant-fault line and one block per equivalence class.
pub fn write_classification(
    w: &mut impl Write,
    table: &TruthTable,
    classification: &Classification,
) -> io::Result<()> {
    let redundant: Vec<String> = classification
        .redundant_faults()
        .map(|label| label.to_string())
        .collect();
    if redundant.is_empty() {
        writeln!(w, "Redundant faults: none")?;
    } else {
        writeln!(w, "Redundant faults: {}", redundant.join(" "))?;
    }

    for class in classification.equivalent_classes() {
        let members: Vec<String> = class.members.iter().map(|m| m.to_string()).collect();
        writeln!(w, "Equivalence class: {}", members.join(" "))?;
        let vectors: Vec<String> = class
            .detecting_states
            .iter()
            .map(|state| table.input_bits(*state as usize))
            .collect();
        writeln!(w, "Test vectors: {}", vectors.join(" "))?;
    }
    Ok(())
}

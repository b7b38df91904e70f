//! Truth-table assembly for the minimizer and report layers.

use std::io::{self, Write};

use saft_net::Circuit;

use crate::campaign::FaultRecord;
use crate::sweep::Signature;

/// Campaign results arranged as a `2^k`-row truth table.
///
/// Columns are the campaign labels in record order; rows are input states
/// in sweep order. Both orders are fixed so external consumers (a
/// two-level minimizer, a report printer) see the same table the campaign
/// produced.
#[derive(Clone, Debug)]
pub struct TruthTable {
    input_names: Vec<String>,
    labels: Vec<String>,
    columns: Vec<Signature>,
}

impl TruthTable {
    /// Assembles the table from a circuit and its campaign records.
    ///
    /// # Panics
    ///
    /// If a record's signature length does not match the circuit's state
    /// count.
    pub fn new(circuit: &Circuit, records: &[FaultRecord]) -> Self {
        let input_names = circuit
            .input_ids()
            .iter()
            .map(|id| circuit.node(*id).name().to_owned())
            .collect();

        let mut labels = Vec::with_capacity(records.len());
        let mut columns = Vec::with_capacity(records.len());
        for record in records {
            assert_eq!(
                record.signature.len() as u64,
                circuit.num_states(),
                "signature length differs for `{}`",
                record.label
            );
            labels.push(record.label.to_string());
            columns.push(record.signature.clone());
        }

        Self {
            input_names,
            labels,
            columns,
        }
    }

    /// Primary input count.
    pub fn num_inputs(&self) -> usize {
        self.input_names.len()
    }

    /// Row count, `2^k`.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    /// Input names in declared order.
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.input_names.iter().map(String::as_str)
    }

    /// Column labels in campaign order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Input-vector characters for `state`: declared input order, left to
    /// right (bit 0 leftmost).
    pub fn input_bits(&self, state: usize) -> String {
        (0..self.num_inputs())
            .map(|bit| if (state >> bit) & 1 == 1 { '1' } else { '0' })
            .collect()
    }

    /// Concatenated output bits for `state`, one per label in column order.
    pub fn output_bits(&self, state: usize) -> String {
        self.columns
            .iter()
            .map(|column| if column[state] { '1' } else { '0' })
            .collect()
    }

    /// Writes the table as PLA text, the input format of two-level
    /// minimizers in the Espresso family.
    pub fn write_pla(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, ".i {}", self.num_inputs())?;
        writeln!(w, ".o {}", self.labels.len())?;
        writeln!(w, ".ilb {}", self.input_names.join(" "))?;
        writeln!(w, ".ob {}", self.labels.join(" "))?;
        writeln!(w, ".p {}", self.num_rows())?;
        for state in 0..self.num_rows() {
            writeln!(w, "{} {}", self.input_bits(state), self.output_bits(state))?;
        }
        writeln!(w, ".e")
    }

    /// [`write_pla`](TruthTable::write_pla) into a `String`.
    pub fn to_pla(&self) -> String {
        let mut buf = Vec::new();
        self.write_pla(&mut buf).expect("writing to a Vec is infallible");
        String::from_utf8(buf).expect("PLA text is ASCII")
    }
}

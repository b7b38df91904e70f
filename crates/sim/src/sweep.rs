//! Exhaustive input-state sweeps.

use bitvec::vec::BitVec;
use saft_net::Circuit;

/// Primary-output values across one exhaustive sweep, state 0 first.
///
/// Two sweeps under the same drive configuration produce equal signatures;
/// equivalence classification relies on this.
pub type Signature = BitVec;

/// Evaluates the primary output for every input state in ascending order.
///
/// Exactly `2^k` evaluations are collected; the final advance wraps the
/// circuit back to state 0.
pub fn full_sweep(circuit: &mut Circuit) -> Signature {
    let states = circuit.num_states();
    let mut signature = Signature::with_capacity(states as usize);
    circuit.set_input_state(0);
    for _ in 0..states {
        signature.push(circuit.evaluate_output());
        circuit.advance_input_state();
    }
    signature
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;
    use saft_net::{Circuit, ops};

    fn and_circuit() -> Circuit {
        let mut circuit = Circuit::new(["a", "b"]).unwrap();
        circuit.add_gate("q", &["a", "b"], ops::and).unwrap();
        circuit
    }

    #[test]
    fn and_signature_matches_enumeration_order() {
        // states 0..4 are (a,b) = (0,0), (1,0), (0,1), (1,1)
        let mut circuit = and_circuit();
        assert_eq!(full_sweep(&mut circuit), bitvec![0, 0, 0, 1]);
    }

    #[test]
    fn sweeps_are_deterministic() {
        let mut circuit = and_circuit();
        let first = full_sweep(&mut circuit);
        let second = full_sweep(&mut circuit);
        assert_eq!(first, second);
    }

    #[test]
    fn sweep_length_is_the_state_count() {
        let mut circuit = Circuit::new(["a", "b", "c"]).unwrap();
        circuit.add_gate("q", &["a", "b", "c"], ops::xor).unwrap();
        assert_eq!(full_sweep(&mut circuit).len(), 8);
    }

    #[test]
    fn sweep_wraps_back_to_state_zero() {
        let mut circuit = and_circuit();
        full_sweep(&mut circuit);
        assert_eq!(circuit.input_state(), 0);
    }
}

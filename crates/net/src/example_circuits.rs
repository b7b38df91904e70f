//! Example circuit definitions for testing and demonstration.

use crate::circuit::Circuit;
use crate::node::GateFn;
use crate::ops;

/// Builds the 5-input reference netlist used by the CLI and benches.
///
/// ```text
/// q = AND(b, d)    g = NAND(c, d)
/// k = AND(a, q)    l = NAND(q, g)
/// m = NAND(k, g)   n = AND(l, e)
/// p = AND(k, n)    z = OR(m, p)     (primary output)
/// ```
///
/// The fanout of `q`, `g`, and `k` reconverges at `z`, which is what makes
/// the netlist's fault classes non-trivial.
pub fn build_reconvergent_circuit() -> Circuit {
    let mut circuit = Circuit::new(["a", "b", "c", "d", "e"]).expect("input names are distinct");

    let gates: [(&str, [&str; 2], GateFn); 8] = [
        ("q", ["b", "d"], ops::and),
        ("g", ["c", "d"], ops::nand),
        ("k", ["a", "q"], ops::and),
        ("l", ["q", "g"], ops::nand),
        ("m", ["k", "g"], ops::nand),
        ("n", ["l", "e"], ops::and),
        ("p", ["k", "n"], ops::and),
        ("z", ["m", "p"], ops::or),
    ];
    for (name, inputs, op) in gates {
        circuit
            .add_gate(name, &inputs, op)
            .expect("reference wiring is valid");
    }

    circuit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_netlist_shape() {
        let circuit = build_reconvergent_circuit();
        assert_eq!(circuit.num_inputs(), 5);
        assert_eq!(circuit.num_nodes(), 13);
        assert_eq!(circuit.num_states(), 32);

        let z = circuit.node_id("z").unwrap();
        assert_eq!(circuit.output(), Some(z));
    }

    #[test]
    fn reference_netlist_spot_checks() {
        let mut circuit = build_reconvergent_circuit();

        // all inputs low: q=0 g=1 k=0 l=1 m=1 n=e=0 p=0, z = m OR p = 1
        circuit.set_input_state(0);
        assert!(circuit.evaluate_output());

        // all inputs high: q=1 g=0 k=1 l=1 m=1 n=1 p=1, z = 1
        circuit.set_input_state(31);
        assert!(circuit.evaluate_output());
    }
}

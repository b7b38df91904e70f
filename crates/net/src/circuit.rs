//! Circuit container: construction, input-state programming, evaluation,
//! and stuck-at fault injection.

use indexmap::IndexMap;
use thiserror::Error;

use crate::node::{Drive, GateFn, Node, NodeId, NodeKind};

/// Errors surfaced while building or reconfiguring a circuit.
///
/// Structural errors abort the offending element and leave the circuit
/// otherwise usable. Evaluation and fault injection over a well-formed
/// circuit never fail.
#[derive(Debug, Error)]
pub enum NetError {
    /// A node with this name is already registered.
    #[error("node `{0}` is already defined")]
    DuplicateName(String),

    /// A gate referenced an input name that is not registered yet.
    #[error("gate `{gate}` references undefined input `{input}`")]
    UndefinedInput {
        /// The gate being added.
        gate: String,
        /// The missing input name.
        input: String,
    },

    /// The named node does not exist.
    #[error("node `{0}` is not defined")]
    UndefinedNode(String),
}

/// A combinational logic network.
///
/// Owns all nodes. Primary inputs keep their declared order: bit `i` of the
/// packed input state drives the `i`-th declared input. The primary output
/// is an explicit field — adding a gate designates that gate, and
/// [`set_output`](Circuit::set_output) overrides the designation.
#[derive(Clone, Debug)]
pub struct Circuit {
    nodes: Vec<Node>,
    ids: IndexMap<String, NodeId>,
    inputs: Vec<NodeId>,
    output: Option<NodeId>,
    state: u64,
}

impl Circuit {
    /// Creates a circuit with the given primary inputs, all at signal 0.
    pub fn new<S: Into<String>>(
        input_names: impl IntoIterator<Item = S>,
    ) -> Result<Self, NetError> {
        let mut circuit = Self {
            nodes: Vec::new(),
            ids: IndexMap::new(),
            inputs: Vec::new(),
            output: None,
            state: 0,
        };
        for name in input_names {
            circuit.add_primary_input(name)?;
        }
        Ok(circuit)
    }

    /// Registers a primary input with signal 0, appended to the input order.
    pub fn add_primary_input(&mut self, name: impl Into<String>) -> Result<NodeId, NetError> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(NetError::DuplicateName(name));
        }
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::input(name.clone()));
        self.ids.insert(name, id);
        self.inputs.push(id);
        Ok(id)
    }

    /// Registers a gate computing `op` over the named inputs.
    ///
    /// Every input must already be registered; on error nothing is added.
    /// The new gate becomes the primary output until a later `add_gate` or
    /// [`set_output`](Circuit::set_output) call designates another node.
    pub fn add_gate(
        &mut self,
        name: impl Into<String>,
        inputs: &[&str],
        op: GateFn,
    ) -> Result<NodeId, NetError> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(NetError::DuplicateName(name));
        }
        let mut resolved = Vec::with_capacity(inputs.len());
        for input in inputs {
            match self.ids.get(*input) {
                Some(id) => resolved.push(*id),
                None => {
                    return Err(NetError::UndefinedInput {
                        gate: name,
                        input: (*input).to_owned(),
                    });
                }
            }
        }
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::gate(name.clone(), op, resolved));
        self.ids.insert(name, id);
        self.output = Some(id);
        Ok(id)
    }

    /// Explicitly designates the primary output.
    pub fn set_output(&mut self, name: &str) -> Result<NodeId, NetError> {
        let id = self
            .node_id(name)
            .ok_or_else(|| NetError::UndefinedNode(name.to_owned()))?;
        self.output = Some(id);
        Ok(id)
    }

    /// The current primary output, if any node has been designated.
    pub fn output(&self) -> Option<NodeId> {
        self.output
    }

    /// Looks up a node id by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Whether a node with this name is registered.
    pub fn is_defined(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// The node behind an id.
    ///
    /// # Panics
    ///
    /// If `id` did not come from this circuit.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[usize::from(id)]
    }

    /// All nodes with their ids, in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from(i), node))
    }

    /// Ids of all non-input nodes, in registration order.
    pub fn gate_ids(&self) -> impl Iterator<Item = NodeId> {
        self.nodes()
            .filter(|(_, node)| !node.is_input())
            .map(|(id, _)| id)
    }

    /// Total node count.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Primary input count.
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Ids of the primary inputs, in declared order.
    pub fn input_ids(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Number of distinct input states, `2^k` for `k` primary inputs.
    ///
    /// # Panics
    ///
    /// With 64 or more primary inputs the state count does not fit in
    /// `u64`; exhaustive enumeration stops being meaningful long before
    /// that anyway.
    pub fn num_states(&self) -> u64 {
        let k = self.inputs.len();
        assert!(k < 64, "{k} primary inputs exceed the u64 state space");
        1u64 << k
    }

    fn state_mask(&self) -> u64 {
        match self.inputs.len() {
            k if k >= 64 => u64::MAX,
            k => (1u64 << k) - 1,
        }
    }

    /// Programs all primary inputs from one packed state number.
    ///
    /// Bit `i` (least significant first) drives the `i`-th declared input.
    /// Values outside `0..2^k` are normalized modulo `2^k`, matching the
    /// cyclic advance order.
    pub fn set_input_state(&mut self, n: u64) {
        self.state = n & self.state_mask();
        for bit in 0..self.inputs.len() {
            let id = self.inputs[bit];
            let value = (self.state >> bit) & 1 == 1;
            self.nodes[usize::from(id)].set_signal(value);
        }
    }

    /// The currently programmed input state.
    pub fn input_state(&self) -> u64 {
        self.state
    }

    /// Steps to the next input state, wrapping back to 0 after `2^k - 1`.
    pub fn advance_input_state(&mut self) {
        self.set_input_state(self.state.wrapping_add(1));
    }

    /// Evaluates the primary output under the current inputs and drives.
    ///
    /// One forward pass in registration order; ids are topological, so
    /// every gate's inputs are computed before the gate itself, and each
    /// node is computed exactly once per call.
    ///
    /// # Panics
    ///
    /// If no primary output has been designated.
    pub fn evaluate_output(&self) -> bool {
        let output = self.output.expect("circuit has no primary output");
        let mut values: Vec<bool> = Vec::with_capacity(self.nodes.len());
        let mut args = Vec::new();
        for node in &self.nodes {
            let value = match node.drive() {
                Drive::Stuck(forced) => forced,
                Drive::Free => match node.kind() {
                    NodeKind::Input { signal } => *signal,
                    NodeKind::Gate { op, inputs } => {
                        args.clear();
                        args.extend(inputs.iter().map(|id| values[usize::from(*id)]));
                        op(&args)
                    }
                },
            };
            values.push(value);
        }
        values[usize::from(output)]
    }

    /// Forces the node's output to `value` for subsequent evaluations.
    ///
    /// Replaces any previously injected fault on the node.
    pub fn inject_stuck_at(&mut self, id: NodeId, value: bool) {
        self.nodes[usize::from(id)].set_drive(Drive::Stuck(value));
    }

    /// [`inject_stuck_at`](Circuit::inject_stuck_at) by node name.
    pub fn inject_stuck(&mut self, name: &str, value: bool) -> Result<(), NetError> {
        let id = self
            .node_id(name)
            .ok_or_else(|| NetError::UndefinedNode(name.to_owned()))?;
        self.inject_stuck_at(id, value);
        Ok(())
    }

    /// Returns the node to its fault-free function.
    ///
    /// A no-op when the node is already fault-free.
    pub fn clear_fault_at(&mut self, id: NodeId) {
        self.nodes[usize::from(id)].set_drive(Drive::Free);
    }

    /// [`clear_fault_at`](Circuit::clear_fault_at) by node name.
    pub fn clear_fault(&mut self, name: &str) -> Result<(), NetError> {
        let id = self
            .node_id(name)
            .ok_or_else(|| NetError::UndefinedNode(name.to_owned()))?;
        self.clear_fault_at(id);
        Ok(())
    }
}

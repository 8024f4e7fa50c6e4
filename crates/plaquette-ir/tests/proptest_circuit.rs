//! Property-based tests for moment placement.
//!
//! Random gate sequences over a small grid must keep operations on each wire
//! in append order, and every moment must act on disjoint qubits.

use plaquette_ir::{Circuit, GridQubit, Operation, StandardGate};
use proptest::prelude::*;

const SIDE: i32 = 3;

fn arb_qubit() -> impl Strategy<Value = GridQubit> {
    (0..SIDE, 0..SIDE).prop_map(|(r, c)| GridQubit::grid(r, c))
}

/// A single- or two-qubit gate; two-qubit gates on equal qubits are skipped.
fn arb_operation() -> impl Strategy<Value = Option<Operation>> {
    prop_oneof![
        arb_qubit().prop_map(|q| Some(Operation::single_qubit_gate(StandardGate::H, q))),
        arb_qubit().prop_map(|q| Some(Operation::reset(q))),
        (arb_qubit(), arb_qubit()).prop_map(|(a, b)| {
            (a != b).then(|| Operation::two_qubit_gate(StandardGate::CX, a, b))
        }),
    ]
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    prop::collection::vec(arb_operation(), 0..40).prop_map(|ops| {
        let mut circuit = Circuit::new("random");
        circuit.extend(ops.into_iter().flatten()).unwrap();
        circuit
    })
}

proptest! {
    #[test]
    fn wire_order_is_preserved(circuit in arb_circuit()) {
        let ops: Vec<_> = circuit.operations().collect();
        let placement = circuit.placement();
        for i in 0..ops.len() {
            for j in (i + 1)..ops.len() {
                let shared = ops[i].qubits.iter().any(|q| ops[j].acts_on(q));
                if shared {
                    prop_assert!(placement[i] < placement[j]);
                }
            }
        }
    }

    #[test]
    fn moments_act_on_disjoint_qubits(circuit in arb_circuit()) {
        let moments = circuit.moments();
        prop_assert_eq!(moments.len(), circuit.depth());
        let total: usize = moments.iter().map(|m| m.len()).sum();
        prop_assert_eq!(total, circuit.num_operations());

        for moment in &moments {
            prop_assert!(!moment.is_empty());
            let mut seen = Vec::new();
            for op in moment.operations() {
                for q in &op.qubits {
                    prop_assert!(!seen.contains(q));
                    seen.push(*q);
                }
            }
        }
    }

    #[test]
    fn placement_is_earliest(circuit in arb_circuit()) {
        // Each operation sits right after the latest earlier operation on its wires.
        let ops: Vec<_> = circuit.operations().collect();
        let placement = circuit.placement();
        for (j, op) in ops.iter().enumerate() {
            let expected = (0..j)
                .filter(|&i| op.qubits.iter().any(|q| ops[i].acts_on(q)))
                .map(|i| placement[i] + 1)
                .max()
                .unwrap_or(0);
            prop_assert_eq!(placement[j], expected);
        }
    }

    #[test]
    fn json_reload_keeps_placement(circuit in arb_circuit()) {
        let restored = Circuit::from_json(&circuit.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored.placement(), circuit.placement());
    }
}

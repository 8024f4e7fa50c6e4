//! Property-based tests over random patches.
//!
//! Layouts are random subsets of a small lattice: data qubits on integer
//! points, ancillas on the half-integer points between them.

use plaquette_ir::{GridQubit, StandardGate};
use plaquette_surface::{PatchEncoder, PatchLayout, StabilizerGenerator};
use proptest::prelude::*;

const SIDE: i32 = 4;

fn data_sites() -> Vec<GridQubit> {
    (0..SIDE)
        .flat_map(|r| (0..SIDE).map(move |c| GridQubit::grid(r, c)))
        .collect()
}

fn ancilla_sites() -> Vec<GridQubit> {
    (0..SIDE)
        .flat_map(|r| {
            (0..SIDE).map(move |c| {
                GridQubit::new(f64::from(r) + 0.5, f64::from(c) + 0.5).unwrap()
            })
        })
        .collect()
}

/// A layout with at least one ancilla.
fn arb_layout() -> impl Strategy<Value = PatchLayout> {
    let data = prop::sample::subsequence(data_sites(), 0..=data_sites().len());
    let ancillas = prop::sample::subsequence(ancilla_sites(), 1..=ancilla_sites().len());
    (data, ancillas).prop_map(|(d, a)| PatchLayout::new(d, a).unwrap())
}

proptest! {
    #[test]
    fn neighbors_sit_on_diagonals(layout in arb_layout()) {
        for ancilla in layout.ancilla_qubits() {
            let neighbors = layout.neighbors(ancilla).unwrap();
            prop_assert!(neighbors.len() <= 4);
            for n in &neighbors {
                prop_assert!(layout.contains(n));
                prop_assert_eq!((n.row() - ancilla.row()).abs(), 0.5);
                prop_assert_eq!((n.col() - ancilla.col()).abs(), 0.5);
            }
        }
    }

    #[test]
    fn cycle_phase_counts(layout in arb_layout()) {
        let generator = StabilizerGenerator::new(layout.clone());
        let support: usize = generator
            .stabilizers()
            .unwrap()
            .iter()
            .map(|s| s.weight())
            .sum();
        let circuit = generator.create_stabilizer_cycle().unwrap();
        let ancillas = layout.ancilla_qubits().len();

        prop_assert_eq!(circuit.count_ops("h"), 2 * ancillas);
        prop_assert_eq!(circuit.count_ops("cx"), 2 * support);
        prop_assert_eq!(circuit.count_ops("measure"), 1);
        prop_assert_eq!(circuit.num_operations(), 2 * ancillas + 2 * support + 1);

        let last = circuit.operations().last().unwrap();
        prop_assert_eq!(last.qubits.as_slice(), layout.ancilla_qubits());
        prop_assert!(circuit
            .operations()
            .filter(|op| op.as_gate() == Some(StandardGate::CX))
            .all(|op| layout.contains(&op.qubits[0]) && layout.contains(&op.qubits[1])));
    }

    #[test]
    fn generation_is_deterministic(layout in arb_layout()) {
        let encoder = PatchEncoder::new(layout.clone());
        prop_assert_eq!(
            encoder.create_logical_zero_circuit().unwrap(),
            encoder.create_logical_zero_circuit().unwrap()
        );

        let generator = StabilizerGenerator::new(layout);
        prop_assert_eq!(
            generator.create_stabilizer_cycle().unwrap().to_string(),
            generator.create_stabilizer_cycle().unwrap().to_string()
        );
    }

    #[test]
    fn encoding_resets_every_data_qubit_once(layout in arb_layout()) {
        let circuit = PatchEncoder::new(layout.clone())
            .create_logical_zero_circuit()
            .unwrap();
        prop_assert_eq!(circuit.count_ops("reset"), layout.data_qubits().len());
        prop_assert_eq!(circuit.depth(), usize::from(!layout.data_qubits().is_empty()));
    }
}

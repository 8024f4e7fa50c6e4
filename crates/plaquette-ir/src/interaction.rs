//! Two-qubit interaction graph of a circuit.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;

use crate::circuit::Circuit;
use crate::qubit::GridQubit;

/// Undirected graph of which qubit pairs a circuit couples.
///
/// Nodes are every qubit the circuit touches; an edge's weight counts the
/// two-qubit gates applied between its endpoints, regardless of direction.
#[derive(Debug, Clone)]
pub struct InteractionGraph {
    graph: UnGraph<GridQubit, u32>,
    nodes: FxHashMap<GridQubit, NodeIndex>,
}

impl InteractionGraph {
    /// Build the interaction graph of `circuit`.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut graph = UnGraph::default();
        let mut nodes = FxHashMap::default();
        for qubit in circuit.all_qubits() {
            nodes.insert(qubit, graph.add_node(qubit));
        }

        for op in circuit.operations().filter(|op| op.is_gate()) {
            let [a, b] = op.qubits.as_slice() else {
                continue;
            };
            let (na, nb) = (nodes[a], nodes[b]);
            match graph.find_edge(na, nb) {
                Some(edge) => graph[edge] += 1,
                None => {
                    graph.add_edge(na, nb, 1);
                }
            }
        }

        Self { graph, nodes }
    }

    /// Number of qubits in the graph.
    pub fn num_qubits(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct coupled pairs.
    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of two-qubit gates between `a` and `b` (0 if never coupled).
    pub fn weight(&self, a: &GridQubit, b: &GridQubit) -> u32 {
        let (Some(&na), Some(&nb)) = (self.nodes.get(a), self.nodes.get(b)) else {
            return 0;
        };
        self.graph
            .find_edge(na, nb)
            .map_or(0, |edge| self.graph[edge])
    }

    /// Qubits coupled to `qubit`, in row-major order.
    pub fn neighbors(&self, qubit: &GridQubit) -> Vec<GridQubit> {
        let Some(&node) = self.nodes.get(qubit) else {
            return vec![];
        };
        let mut out: Vec<_> = self
            .graph
            .neighbors(node)
            .map(|n| self.graph[n])
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Every coupled pair with its gate count, endpoints in row-major order.
    pub fn edges(&self) -> Vec<(GridQubit, GridQubit, u32)> {
        let mut out: Vec<_> = self
            .graph
            .edge_references()
            .map(|e| {
                let (a, b) = (self.graph[e.source()], self.graph[e.target()]);
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                (lo, hi, *e.weight())
            })
            .collect();
        out.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
        out
    }

    /// Largest separation `max(|Δrow|, |Δcol|)` across all coupled pairs.
    ///
    /// A nearest-neighbour surface-code cycle has locality `0.5`.
    pub fn max_locality(&self) -> f64 {
        self.edges()
            .iter()
            .map(|(a, b, _)| (a.row() - b.row()).abs().max((a.col() - b.col()).abs()))
            .fold(0.0, f64::max)
    }
}

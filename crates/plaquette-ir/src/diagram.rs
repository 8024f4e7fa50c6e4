//! Text diagram rendering.
//!
//! One horizontal wire per qubit (row-major order) and at least one column
//! per moment. A moment whose operations overlap vertically is split over
//! several columns. Multi-qubit operations are joined by vertical
//! connectors drawn on the spacer rows between wires:
//!
//! ```text
//! q(0, 0): ───@────────────
//!             │
//! q(0, 1): ───X───M('m')───
//! ```

use rustc_hash::FxHashMap;

use crate::circuit::Circuit;
use crate::moment::Moment;
use crate::operation::{Operation, OperationKind};
use crate::qubit::GridQubit;

const WIRE: char = '─';
const CONNECTOR: char = '│';
const CROSSING: &str = "┼";
const PAD: usize = 3;

/// One drawn column: part or all of a moment.
///
/// Operations sharing a column never overlap in row span, so each connector
/// belongs to exactly one operation.
struct Column {
    /// Symbol per wire, if the column draws anything on it.
    cells: Vec<Option<String>>,
    /// Whether a connector runs through the spacer below each wire.
    links: Vec<bool>,
    /// Inclusive row spans already drawn.
    spans: Vec<(usize, usize)>,
}

impl Column {
    fn new(num_wires: usize) -> Self {
        Self {
            cells: vec![None; num_wires],
            links: vec![false; num_wires.saturating_sub(1)],
            spans: Vec::new(),
        }
    }

    fn fits(&self, lo: usize, hi: usize) -> bool {
        self.spans.iter().all(|&(a, b)| hi < a || b < lo)
    }

    fn place(&mut self, rows: &[usize], syms: &[String], lo: usize, hi: usize) {
        for (&row, sym) in rows.iter().zip(syms) {
            self.cells[row] = Some(sym.clone());
        }
        if hi > lo {
            for link in &mut self.links[lo..hi] {
                *link = true;
            }
            for cell in &mut self.cells[lo + 1..hi] {
                if cell.is_none() {
                    *cell = Some(CROSSING.to_string());
                }
            }
        }
        self.spans.push((lo, hi));
    }

    fn width(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(1)
    }
}

fn symbols(op: &Operation) -> Vec<String> {
    match &op.kind {
        OperationKind::Gate(gate) => gate
            .wire_symbols()
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        OperationKind::Reset => vec!["R".to_string()],
        OperationKind::Measure { key } => (0..op.qubits.len())
            .map(|i| {
                if i == 0 {
                    format!("M('{key}')")
                } else {
                    "M".to_string()
                }
            })
            .collect(),
    }
}

/// Lay out one moment, opening a new column whenever an operation's row
/// span overlaps one already drawn in the current column.
fn layout_moment(moment: &Moment<'_>, row_of: &FxHashMap<GridQubit, usize>) -> Vec<Column> {
    let num_wires = row_of.len();
    let mut columns = vec![Column::new(num_wires)];

    for op in moment.operations() {
        let rows: Vec<usize> = op.qubits.iter().map(|q| row_of[q]).collect();
        let (Some(&lo), Some(&hi)) = (rows.iter().min(), rows.iter().max()) else {
            continue;
        };
        if !columns.last().is_some_and(|c| c.fits(lo, hi)) {
            columns.push(Column::new(num_wires));
        }
        if let Some(column) = columns.last_mut() {
            column.place(&rows, &symbols(op), lo, hi);
        }
    }
    columns
}

/// Render `circuit` as a text diagram. An empty circuit renders as `""`.
///
/// Operations on no qubits have no wire to sit on and are not drawn.
pub(crate) fn render(circuit: &Circuit) -> String {
    let wires = circuit.all_qubits();
    if wires.is_empty() {
        return String::new();
    }
    let row_of: FxHashMap<_, _> = wires.iter().enumerate().map(|(i, q)| (*q, i)).collect();

    let columns: Vec<(Column, usize)> = circuit
        .moments()
        .iter()
        .flat_map(|moment| layout_moment(moment, &row_of))
        .filter(|column| !column.spans.is_empty())
        .map(|column| {
            let width = column.width();
            (column, width)
        })
        .collect();

    let labels: Vec<String> = wires.iter().map(|q| format!("{q}: ")).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(wires.len() * 2);
    for (row, label) in labels.iter().enumerate() {
        let mut line = format!("{label:<label_width$}");
        for (column, width) in &columns {
            push_repeat(&mut line, WIRE, PAD);
            let cell = column.cells[row].as_deref().unwrap_or("");
            line.push_str(cell);
            push_repeat(&mut line, WIRE, width - cell.chars().count());
        }
        push_repeat(&mut line, WIRE, PAD);
        lines.push(line);

        if row + 1 < wires.len() {
            let mut spacer = " ".repeat(label_width);
            for (column, width) in &columns {
                push_repeat(&mut spacer, ' ', PAD);
                spacer.push(if column.links[row] { CONNECTOR } else { ' ' });
                push_repeat(&mut spacer, ' ', width - 1);
            }
            lines.push(spacer.trim_end().to_string());
        }
    }

    lines.join("\n")
}

fn push_repeat(line: &mut String, ch: char, n: usize) {
    line.extend(std::iter::repeat_n(ch, n));
}

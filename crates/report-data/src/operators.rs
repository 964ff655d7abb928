//! Per-operator cumulative time by state.

use std::collections::HashMap;

use chrono::TimeDelta;
use report_core::session::Session;
use report_core::states::OperatorState;
use tracing::warn;

/// Cumulative durations for one operator, one cell per known state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTotals {
    totals: [TimeDelta; 5],
}

impl StateTotals {
    fn new() -> Self {
        Self {
            totals: [TimeDelta::zero(); 5],
        }
    }

    /// Cumulative duration for `state`.
    pub fn get(&self, state: OperatorState) -> TimeDelta {
        self.totals[state as usize]
    }

    fn add(&mut self, state: OperatorState, amount: TimeDelta) {
        let idx = state as usize;
        self.totals[idx] = self.totals[idx] + amount;
    }
}

impl Default for StateTotals {
    fn default() -> Self {
        Self::new()
    }
}

/// One operator's row in the state table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRow {
    pub operator: String,
    pub totals: StateTotals,
}

/// Per-operator state totals, ordered by first appearance in the input.
///
/// The report iterates operators in the order they were first seen, so the
/// table keeps an explicit row order next to its lookup index.
#[derive(Debug, Clone, Default)]
pub struct OperatorTotals {
    rows: Vec<OperatorRow>,
    index: HashMap<String, usize>,
}

impl OperatorTotals {
    /// Rows in first-seen order.
    pub fn rows(&self) -> &[OperatorRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row for `operator`, created with all states at zero on first
    /// encounter.
    fn row_mut(&mut self, operator: &str) -> &mut OperatorRow {
        let idx = match self.index.get(operator) {
            Some(&idx) => idx,
            None => {
                self.rows.push(OperatorRow {
                    operator: operator.to_string(),
                    totals: StateTotals::new(),
                });
                let idx = self.rows.len() - 1;
                self.index.insert(operator.to_string(), idx);
                idx
            }
        };
        &mut self.rows[idx]
    }
}

/// Sum session durations per operator per known state.
///
/// An operator appears in the table (all zeros) as soon as any of its
/// sessions is seen, even if the state is unrecognised. Sessions with an
/// unknown state label are logged and excluded from the totals.
pub fn aggregate_operator_states(sessions: &[Session]) -> OperatorTotals {
    let mut table = OperatorTotals::default();

    for session in sessions {
        let row = table.row_mut(&session.operator);
        match OperatorState::from_label(&session.state) {
            Some(state) => row.totals.add(state, session.duration),
            None => warn!(
                "Unknown state '{}' for operator '{}'",
                session.state, session.operator,
            ),
        }
    }

    table
}

// ── Tests ─────────────────────────────────────────────────────────────────────

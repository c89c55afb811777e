use tracing::debug;

use crate::modules::ledger::models::{LedgerRow, LedgerSettings, RowId, Totals};

/// Ordered collection of line-item rows with their derived amounts
///
/// A ledger is owned by exactly one form and always holds at least one row.
/// Mutations recompute the touched row before returning; aggregates are a
/// fresh fold over every row on each read.
#[derive(Debug, Clone)]
pub struct Ledger<R: LedgerRow> {
    rows: Vec<R>,
    settings: LedgerSettings,
}

impl<R: LedgerRow> Ledger<R> {
    /// Create a ledger holding one empty row
    pub fn new(settings: LedgerSettings) -> Self {
        let mut ledger = Self {
            rows: Vec::new(),
            settings,
        };
        let row = ledger.blank_row();
        ledger.rows.push(row);
        ledger
    }

    fn blank_row(&self) -> R {
        let mut row = R::blank(RowId::new(), &self.settings);
        row.recompute();
        row
    }

    /// Append an empty row and return its id
    pub fn add_row(&mut self) -> RowId {
        let row = self.blank_row();
        let id = row.id();
        self.rows.push(row);

        debug!(row_id = %id, rows = self.rows.len(), "Ledger row added");
        id
    }

    /// Remove the row with `id`
    ///
    /// Returns `false` without touching the ledger when `id` is the only
    /// remaining row or is not present.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if self.rows.len() <= 1 {
            debug!(row_id = %id, "Ignoring removal of the last ledger row");
            return false;
        }

        let Some(index) = self.position(id) else {
            debug!(row_id = %id, "Ignoring removal of unknown ledger row");
            return false;
        };

        self.rows.remove(index);
        debug!(row_id = %id, rows = self.rows.len(), "Ledger row removed");
        true
    }

    /// Store `value` in `field` of the row with `id`
    ///
    /// The raw value is kept verbatim; if `field` feeds the arithmetic the
    /// row's derived amounts are recomputed before this returns.
    pub fn update_row(&mut self, id: RowId, field: R::Field, value: impl Into<String>) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) else {
            debug!(row_id = %id, %field, "Ignoring update of unknown ledger row");
            return false;
        };

        row.set(field, value.into());
        if R::triggers_recompute(field) {
            row.recompute();
        }

        debug!(row_id = %id, %field, "Ledger row updated");
        true
    }

    /// Subtotal, tax and grand total over all rows
    pub fn aggregate(&self) -> Totals {
        self.rows.iter().map(R::amounts).collect()
    }

    /// Discard every row and start over with one empty row
    pub fn reset(&mut self) {
        self.rows.clear();
        let row = self.blank_row();
        self.rows.push(row);
        debug!("Ledger reset");
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Id of the first row, which always exists
    pub fn first_id(&self) -> RowId {
        self.rows[0].id()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Owned copy of the rows, for handing to a submission payload
    pub fn snapshot(&self) -> Vec<R> {
        self.rows.clone()
    }

    fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}

impl<R: LedgerRow> Default for Ledger<R> {
    fn default() -> Self {
        Self::new(LedgerSettings::default())
    }
}

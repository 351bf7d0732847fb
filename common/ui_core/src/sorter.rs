/// Row 0 holds the column headers and never moves.
pub const FIRST_DATA_ROW: usize = 1;

/// An ordered, mutable run of table rows.
///
/// Indices cover every row of the table, header row included.
pub trait SortableRows {
    fn row_count(&self) -> usize;

    /// Content of the `column`-th data cell of `row`, `None` when the row is
    /// shorter than that.
    fn cell_content(&self, row: usize, column: usize) -> Option<String>;

    /// Moves row `row + 1` in front of row `row`.
    fn swap_with_next(&mut self, row: usize) -> Result<(), SortError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn out_of_order(self, left: &CellKey, right: &CellKey) -> bool {
        match self {
            Self::Ascending => left.compare(right) == Ordering::Greater,
            Self::Descending => left.compare(right) == Ordering::Less,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOutcome {
    pub direction: Direction,
    pub swaps: usize,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SortError {
    #[error("Row {row} has no cell at column {column}")]
    MissingCell { row: usize, column: usize },

    #[error("Failed to move row {row}: {reason}")]
    Reorder { row: usize, reason: String },
}

/// Sorts the data rows by `column`.
///
/// Every call starts ascending. When the column is already ascending it is
/// flipped to descending instead, so repeated calls toggle the order.
///
/// Each pass stops at the first out-of-order pair, swaps it, and starts over
/// from the top. Callers watching the rows see one adjacent move per swap.
pub fn sort_rows<R>(rows: &mut R, column: usize) -> Result<SortOutcome, SortError>
where
    R: SortableRows + ?Sized,
{
    let contents = (FIRST_DATA_ROW..rows.row_count())
        .map(|row| {
            rows.cell_content(row, column)
                .ok_or(SortError::MissingCell { row, column })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // mirrors the data rows, index 0 is FIRST_DATA_ROW
    let mut keys = column_keys(contents);
    let mut direction = Direction::Ascending;
    let mut swaps = 0;

    loop {
        match first_violation(&keys, direction) {
            Some(at) => {
                rows.swap_with_next(at + FIRST_DATA_ROW)?;
                keys.swap(at, at + 1);
                swaps += 1;
            }
            None if swaps == 0 && direction == Direction::Ascending => {
                direction = Direction::Descending;
            }
            None => break,
        }
    }

    Ok(SortOutcome { direction, swaps })
}

fn first_violation(keys: &[CellKey], direction: Direction) -> Option<usize> {
    keys.windows(2)
        .position(|pair| direction.out_of_order(&pair[0], &pair[1]))
}

// plain row-major tables, first row is the header
impl<S: AsRef<str>> SortableRows for Vec<Vec<S>> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn cell_content(&self, row: usize, column: usize) -> Option<String> {
        self.get(row)?
            .get(column)
            .map(|cell| cell.as_ref().to_owned())
    }

    fn swap_with_next(&mut self, row: usize) -> Result<(), SortError> {
        if row + 1 >= self.len() {
            return Err(SortError::Reorder {
                row,
                reason: "no row after it".into(),
            });
        }
        self.swap(row, row + 1);
        Ok(())
    }
}

use crate::compare::{column_keys, CellKey};
use std::cmp::Ordering;

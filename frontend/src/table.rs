// Click-to-sort for plain HTML tables.
//
// Rows are snapshotted once per sort and moved in the document one adjacent
// swap at a time, so the page sees the same sequence of moves the sorter
// makes.

/// The rows of one table, read and reordered through the DOM.
pub struct DomRows {
    rows: Vec<Element>,
}

impl DomRows {
    pub fn of(table: &HtmlTableElement) -> Self {
        Self {
            rows: dom::table_rows(table),
        }
    }
}

impl SortableRows for DomRows {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    // only TD cells count, header cells are skipped
    fn cell_content(&self, row: usize, column: usize) -> Option<String> {
        let cells = self.rows.get(row)?.get_elements_by_tag_name("TD");
        let cell = cells.item(u32::try_from(column).ok()?)?;
        Some(cell.inner_html())
    }

    fn swap_with_next(&mut self, row: usize) -> Result<(), SortError> {
        let reorder = |reason: String| SortError::Reorder { row, reason };

        let (current, next) = match (self.rows.get(row), self.rows.get(row + 1)) {
            (Some(current), Some(next)) => (current, next),
            _ => return Err(reorder("no row after it".into())),
        };
        let parent = current
            .parent_node()
            .ok_or_else(|| reorder("row is detached".into()))?;

        let current: &Node = current;
        parent
            .insert_before(next, Some(current))
            .map_err(|error| reorder(format!("{:?}", error)))?;

        self.rows.swap(row, row + 1);
        Ok(())
    }
}

/// Sorts the table's body rows by the `column`-th data cell, toggling
/// between ascending and descending on repeated calls.
///
/// An unknown table is ignored.
#[wasm_bindgen(js_name = sortTable)]
pub fn sort_table(table_id: &str, column: usize) {
    let Some(table) = dom::table_by_id(table_id) else {
        console::warn!(format!("sortTable: table #{} not found", table_id));
        return;
    };

    match sort_rows(&mut DomRows::of(&table), column) {
        Ok(outcome) => console::log!(format!(
            "sortTable: #{} column {} {:?} after {} swaps",
            table_id, column, outcome.direction, outcome.swaps
        )),
        Err(error) => console::warn!(format!("sortTable: #{}: {}", table_id, error)),
    }
}

/// Click listeners on a table's header cells. Dropping (or `free`ing) it
/// unbinds them.
#[wasm_bindgen]
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct SortHeaders {
    table_id: String,
    #[derivative(Debug = "ignore")]
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl SortHeaders {
    #[wasm_bindgen(getter, js_name = tableId)]
    pub fn table_id(&self) -> String {
        self.table_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> usize {
        self.listeners.len()
    }
}

/// Makes every cell of the first row sort its column when clicked.
#[wasm_bindgen(js_name = bindSortHeaders)]
pub fn bind_sort_headers(table_id: &str) -> Result<SortHeaders, JsValue> {
    Ok(bind_headers(table_id)?)
}

fn bind_headers(table_id: &str) -> FrontendResult<SortHeaders> {
    let table = dom::table_by_id(table_id).ok_or_else(|| FrontendError::TableNotFound {
        id: table_id.to_owned(),
    })?;

    let header_cells = table
        .rows()
        .item(0)
        .map(|header| dom::collect(&header.children()))
        .unwrap_or_default();

    let listeners = header_cells
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            let table_id = table_id.to_owned();
            EventListener::new(cell, "click", move |_event| sort_table(&table_id, column))
        })
        .collect::<Vec<_>>();

    console::log!(format!(
        "bindSortHeaders: #{} has {} sortable columns",
        table_id,
        listeners.len()
    ));

    Ok(SortHeaders {
        table_id: table_id.to_owned(),
        listeners,
    })
}

use crate::dom;
use crate::error::{FrontendError, FrontendResult};
use gloo_console as console;
use gloo_events::EventListener;
use ui_core::{sort_rows, SortError, SortableRows};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlTableElement, Node};

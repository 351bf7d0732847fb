pub fn element_by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

pub fn table_by_id(id: &str) -> Option<HtmlTableElement> {
    element_by_id(id)?.dyn_into::<HtmlTableElement>().ok()
}

// rows of a table in document order, thead rows first
pub fn table_rows(table: &HtmlTableElement) -> Vec<Element> {
    collect(&table.rows())
}

pub fn collect(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCollection, HtmlTableElement};

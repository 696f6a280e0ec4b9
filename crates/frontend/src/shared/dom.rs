//! Small `web_sys` helpers. Missing window/document is treated as "nothing
//! to do" rather than an error.

use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|doc| doc.query_selector(selector).ok().flatten())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn viewport_width() -> u32 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|v| v.max(0.0) as u32)
        .unwrap_or(0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// `search` with `name` set to `value`; every other parameter is kept.
fn merge_query(search: &str, name: &str, value: &str) -> String {
    let mut params = parse_query(search);
    params.insert(name.to_string(), value.to_string());
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Reads a query-string parameter of the current URL.
pub fn query_param(name: &str) -> Option<String> {
    parse_query(&current_search()).remove(name)
}

/// Sets `name=value` in the current URL's query without a navigation.
pub fn replace_query_param(name: &str, value: &str) {
    let current = current_search();
    let new_search = merge_query(&current, name, value);
    if current == new_search {
        return;
    }

    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&new_search),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_query_keeps_other_params() {
        assert_eq!(
            merge_query("?utm_source=mail&tab=Overview", "tab", "Apply"),
            "?tab=Apply&utm_source=mail"
        );
    }

    #[test]
    fn test_merge_query_on_empty_search() {
        assert_eq!(merge_query("", "tab", "Overview"), "?tab=Overview");
    }

    #[test]
    fn test_parse_query_ignores_leading_question_mark() {
        let params = parse_query("?tab=Apply&ref=jobs");
        assert_eq!(params.get("tab").map(String::as_str), Some("Apply"));
        assert_eq!(params.get("ref").map(String::as_str), Some("jobs"));
    }
}

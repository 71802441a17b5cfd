use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::catalog::ElementRecord;

/// Attribute that marks an element as a hook for automated tests.
const TEST_ID_ATTR: &str = "data-test-id";

/// Only values with this prefix are cataloged. Other test-id families
/// (unit-test markers and the like) share the attribute but are not
/// end-to-end hooks.
const E2E_PREFIX: &str = "e2e-";

/// Map from element id → text of the first `<label for="...">` naming it.
type LabelIndex = HashMap<String, String>;

/// Scan an HTML document for e2e test hooks, in document order.
///
/// Malformed markup is absorbed by the lenient parser; non-HTML input
/// yields an empty catalog rather than an error.
pub fn scan(html: &str) -> Vec<ElementRecord> {
    debug!(html_len = html.len(), "scanning document");
    let document = Html::parse_document(html);
    let labels = build_label_index(&document);

    let selector =
        Selector::parse(&format!("[{TEST_ID_ATTR}]")).expect("valid selector");
    let mut records = Vec::new();
    for element in document.select(&selector) {
        if let Some(test_id) = element.value().attr(TEST_ID_ATTR) {
            if !test_id.is_empty() && test_id.starts_with(E2E_PREFIX) {
                records.push(build_record(test_id, element, &labels));
            }
        }
    }

    debug!(
        records = records.len(),
        labels = labels.len(),
        "scan complete"
    );
    records
}

fn build_record(test_id: &str, element: ElementRef, labels: &LabelIndex) -> ElementRecord {
    let text = collect_text(element);

    let label = element
        .value()
        .attr("id")
        .filter(|id| !id.is_empty())
        .and_then(|id| labels.get(id))
        .filter(|text| !text.is_empty())
        .cloned();

    ElementRecord {
        test_id: test_id.to_string(),
        tag: element.value().name.local.as_ref().to_string(),
        input_type: non_empty_attr(element, "type"),
        text: Some(text).filter(|t| !t.is_empty()),
        aria_label: non_empty_attr(element, "aria-label"),
        placeholder: non_empty_attr(element, "placeholder"),
        label,
    }
}

fn non_empty_attr(element: ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Text content of an element: each descendant fragment stripped,
/// whitespace-only fragments dropped, the rest concatenated.
fn collect_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Pre-scan the document for `<label for="id">` elements and collect a map
/// of element id → label text. Labels may live anywhere in the document,
/// not just near their control. The first label per id claims it, empty
/// text included; later duplicates never win.
fn build_label_index(document: &Html) -> LabelIndex {
    let selector = Selector::parse("label[for]").expect("valid selector");
    let mut index = LabelIndex::new();
    for label in document.select(&selector) {
        if let Some(for_id) = label.value().attr("for") {
            index
                .entry(for_id.to_string())
                .or_insert_with(|| collect_text(label));
        }
    }
    index
}

use serde::Serialize;

/// One cataloged element, keyed by its test identifier.
///
/// Field declaration order is the serialized field order. Optional fields
/// are dropped from output entirely when their source attribute or text is
/// missing or empty; consumers never see null or empty-string placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    /// Value of the test-identifier attribute.
    pub test_id: String,
    /// Lower-cased tag name, per the parser's normalization.
    pub tag: String,
    /// The `type` attribute, mostly meaningful on inputs and buttons.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Collected text content of the element and its descendants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Text of the first `<label for="...">` naming this element's id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(test_id: &str, tag: &str) -> ElementRecord {
        ElementRecord {
            test_id: test_id.into(),
            tag: tag.into(),
            input_type: None,
            text: None,
            aria_label: None,
            placeholder: None,
            label: None,
        }
    }

    #[test]
    fn absent_fields_do_not_serialize() {
        let json = serde_json::to_string(&record("e2e-save", "button")).unwrap();
        assert_eq!(json, r#"{"test_id":"e2e-save","tag":"button"}"#);
    }

    #[test]
    fn type_attribute_keeps_its_html_name() {
        let mut rec = record("e2e-save", "input");
        rec.input_type = Some("submit".into());
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""type":"submit""#));
        assert!(!json.contains("input_type"));
    }

    #[test]
    fn field_order_is_fixed() {
        let rec = ElementRecord {
            test_id: "e2e-email".into(),
            tag: "input".into(),
            input_type: Some("email".into()),
            text: Some("x".into()),
            aria_label: Some("Email".into()),
            placeholder: Some("you@example.com".into()),
            label: Some("Email address".into()),
        };
        let json = serde_json::to_string(&rec).unwrap();
        let keys: Vec<usize> = [
            "\"test_id\"",
            "\"tag\"",
            "\"type\"",
            "\"text\"",
            "\"aria_label\"",
            "\"placeholder\"",
            "\"label\"",
        ]
        .iter()
        .map(|k| json.find(k).unwrap())
        .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted, "fields out of declared order: {json}");
    }

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let json = serde_json::to_string_pretty(&vec![record("e2e-save", "button")]).unwrap();
        assert!(json.contains("  {\n    \"test_id\": \"e2e-save\""), "{json}");
    }

    #[test]
    fn empty_catalog_serializes_to_empty_array() {
        let records: Vec<ElementRecord> = Vec::new();
        assert_eq!(serde_json::to_string_pretty(&records).unwrap(), "[]");
    }
}

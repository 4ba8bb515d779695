//! Tolerant extraction of interface identity from NetBox webhook payloads.
//!
//! NetBox webhook bodies have changed shape across releases and event
//! configurations. Instead of pinning one schema, extraction treats each
//! known shape as an evidence source and consults them in priority order:
//!
//! 1. `data`: the current object in modern payloads
//! 2. `post`: the after state, nested under `data` or at the top level
//! 3. `object`: older/custom payload shape
//!
//! A source only fills fields that are still absent; once a field is filled,
//! later sources never override it. Missing keys, wrong types, and empty
//! objects are treated as "no evidence here", never as errors.

use serde_json::{Map, Value};

/// Fields pulled out of a webhook payload. Either may be absent; an
/// incomplete result is a valid outcome, not an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InterfaceUpdate {
    /// Catalyst Center interface UUID from `custom_fields.catalyst_interface_uuid`
    pub interface_uuid: Option<String>,

    /// Interface description; an empty string is a legitimate value
    pub description: Option<String>,
}

impl InterfaceUpdate {
    /// Fill any still-absent field from one object-shaped evidence source.
    ///
    /// Non-string values count as absent. The UUID lives inside a nested
    /// `custom_fields` object, which must itself be a non-empty object.
    fn fill_from(&mut self, source: &Map<String, Value>) {
        if self.description.is_none() {
            self.description = source
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string);
        }
        if self.interface_uuid.is_none() {
            self.interface_uuid = non_empty_object(source.get("custom_fields"))
                .and_then(|cf| cf.get("catalyst_interface_uuid"))
                .and_then(Value::as_str)
                .map(str::to_string);
        }
    }
}

/// View a value as a non-empty JSON object; anything else is no evidence.
fn non_empty_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object).filter(|m| !m.is_empty())
}

/// Extract the interface UUID and description from a decoded webhook body.
pub fn extract_interface_update(payload: &Value) -> InterfaceUpdate {
    let mut update = InterfaceUpdate::default();

    // 1) Common modern shape: `data` is the current object
    let data = non_empty_object(payload.get("data"));
    if let Some(data) = data {
        update.fill_from(data);
    }

    // 2) Some payloads carry a `post` (after state), nested under `data`
    //    or at the top level. The nested one wins when both are present.
    let post = data
        .and_then(|d| non_empty_object(d.get("post")))
        .or_else(|| non_empty_object(payload.get("post")));
    if let Some(post) = post {
        update.fill_from(post);
    }

    // 3) Rare older/custom shape: top-level `object`
    if let Some(object) = non_empty_object(payload.get("object")) {
        update.fill_from(object);
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_data() {
        let payload = json!({
            "data": {
                "description": "uplink to core-1",
                "custom_fields": { "catalyst_interface_uuid": "abc-123" }
            }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("uplink to core-1"));
        assert_eq!(update.interface_uuid.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_data_wins_over_post_and_object() {
        let payload = json!({
            "data": {
                "description": "A",
                "custom_fields": { "catalyst_interface_uuid": "uuid-a" },
                "post": {
                    "description": "B",
                    "custom_fields": { "catalyst_interface_uuid": "uuid-b" }
                }
            },
            "object": {
                "description": "C",
                "custom_fields": { "catalyst_interface_uuid": "uuid-c" }
            }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("A"));
        assert_eq!(update.interface_uuid.as_deref(), Some("uuid-a"));
    }

    #[test]
    fn test_post_nested_under_data() {
        let payload = json!({
            "data": {
                "post": {
                    "description": "after state",
                    "custom_fields": { "catalyst_interface_uuid": "post-uuid" }
                }
            }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("after state"));
        assert_eq!(update.interface_uuid.as_deref(), Some("post-uuid"));
    }

    #[test]
    fn test_post_top_level_when_data_absent() {
        let payload = json!({
            "post": {
                "description": "top-level post",
                "custom_fields": { "catalyst_interface_uuid": "tl-uuid" }
            }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("top-level post"));
        assert_eq!(update.interface_uuid.as_deref(), Some("tl-uuid"));
    }

    #[test]
    fn test_nested_post_wins_over_top_level() {
        let payload = json!({
            "data": {
                "post": { "description": "nested" }
            },
            "post": { "description": "top-level" }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("nested"));
    }

    #[test]
    fn test_empty_nested_post_falls_back_to_top_level() {
        let payload = json!({
            "data": { "id": 7, "post": {} },
            "post": { "description": "top-level" }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("top-level"));
    }

    #[test]
    fn test_object_fills_missing_fields_only() {
        let payload = json!({
            "data": { "description": "from data" },
            "object": {
                "description": "from object",
                "custom_fields": { "catalyst_interface_uuid": "obj-uuid" }
            }
        });

        let update = extract_interface_update(&payload);

        // description was already filled; only the uuid comes from `object`
        assert_eq!(update.description.as_deref(), Some("from data"));
        assert_eq!(update.interface_uuid.as_deref(), Some("obj-uuid"));
    }

    #[test]
    fn test_no_evidence_anywhere() {
        let update = extract_interface_update(&json!({ "event": "updated" }));

        assert_eq!(update, InterfaceUpdate::default());
    }

    #[test]
    fn test_wrong_types_are_skipped() {
        let payload = json!({
            "data": "not an object",
            "post": 42,
            "object": ["also", "wrong"]
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update, InterfaceUpdate::default());
    }

    #[test]
    fn test_empty_objects_are_skipped() {
        let payload = json!({ "data": {}, "post": {}, "object": {} });

        let update = extract_interface_update(&payload);

        assert_eq!(update, InterfaceUpdate::default());
    }

    #[test]
    fn test_non_string_fields_count_as_absent() {
        let payload = json!({
            "data": {
                "description": 42,
                "custom_fields": { "catalyst_interface_uuid": null }
            },
            "object": {
                "description": "fallback",
                "custom_fields": { "catalyst_interface_uuid": "obj-uuid" }
            }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("fallback"));
        assert_eq!(update.interface_uuid.as_deref(), Some("obj-uuid"));
    }

    #[test]
    fn test_custom_fields_wrong_type() {
        let payload = json!({
            "data": {
                "description": "desc",
                "custom_fields": "oops"
            }
        });

        let update = extract_interface_update(&payload);

        assert_eq!(update.description.as_deref(), Some("desc"));
        assert!(update.interface_uuid.is_none());
    }

    #[test]
    fn test_non_object_payload() {
        assert_eq!(extract_interface_update(&json!(null)), InterfaceUpdate::default());
        assert_eq!(extract_interface_update(&json!([1, 2])), InterfaceUpdate::default());
        assert_eq!(extract_interface_update(&json!("text")), InterfaceUpdate::default());
    }

    #[test]
    fn test_empty_description_is_kept() {
        let payload = json!({
            "data": {
                "description": "",
                "custom_fields": { "catalyst_interface_uuid": "abc" }
            },
            "object": { "description": "later" }
        });

        let update = extract_interface_update(&payload);

        // An empty description is a real value (it clears the field) and
        // blocks later sources.
        assert_eq!(update.description.as_deref(), Some(""));
        assert_eq!(update.interface_uuid.as_deref(), Some("abc"));
    }
}

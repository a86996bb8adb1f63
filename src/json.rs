use crate::Error;
use crate::Listing;

/// Serializes `listing` as JSON.
///
/// Sizes and timestamps are emitted as raw numbers, unlike the HTML page
/// which formats both for display. A missing parent is written as `null`.
pub fn render_json(listing: &Listing) -> Result<String, Error> {
    serde_json::to_string(listing).map_err(|e| Error::Serialization {
        what: "listing".into(),
        how: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serde_json::json;

    use super::*;
    use crate::Entry;
    use crate::TestRoot;
    use crate::build_listing;

    #[test]
    fn field_names_and_raw_values() {
        let listing = Listing {
            parent: None,
            directories: vec![],
            files: vec![Entry {
                name: "stdout".into(),
                url: "/jobs/1/stdout".into(),
                size: 1536,
                last_modified: 784_111_777_000,
            }],
        };
        let value: Value = serde_json::from_str(&render_json(&listing).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "parent": null,
                "directories": [],
                "files": [{
                    "name": "stdout",
                    "url": "/jobs/1/stdout",
                    "size": 1536,
                    "lastModified": 784_111_777_000_i64,
                }],
            })
        );
    }

    #[tokio::test]
    async fn parses_back_to_built_listing() {
        let root = TestRoot::new().unwrap();
        let listing = build_listing(root.dir(), "http://host/files/served/", true)
            .await
            .unwrap();
        let parsed: Listing = serde_json::from_str(&render_json(&listing).unwrap()).unwrap();
        assert_eq!(parsed, listing);
        assert!(parsed.parent.is_some());
        assert_eq!(parsed.files.len(), 4);
    }
}

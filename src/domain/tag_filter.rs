use crate::domain::entity::media::{MediaEntry, MetadataDocument};

/// Narrow a listing to entries carrying every requested tag.
///
/// Zero requested tags returns the listing unchanged. Tag comparison is exact
/// string equality; entries without a metadata record have an empty tag list.
pub fn filter_by_tags(
    entries: Vec<MediaEntry>,
    requested: &[String],
    metadata: &MetadataDocument,
) -> Vec<MediaEntry> {
    if requested.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| {
            let item_tags = metadata.tags_for(&entry.title);
            requested.iter().all(|tag| item_tags.contains(tag))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> MetadataDocument {
        serde_json::from_str(
            r#"{
                "tags": {"sunset": {}, "beach": {}, "night": {}},
                "items": {
                    "a.jpg": {"tags": ["sunset"]},
                    "b.jpg": {"tags": ["sunset", "beach"]},
                    "c.jpg": {"tags": []}
                }
            }"#,
        )
        .unwrap()
    }

    fn entries(titles: &[&str]) -> Vec<MediaEntry> {
        titles
            .iter()
            .map(|t| MediaEntry::from_file_name(t.to_string(), "/api/pictures"))
            .collect()
    }

    fn titles(entries: &[MediaEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn no_tags_returns_all_unchanged() {
        let input = entries(&["b.jpg", "a.jpg", "c.jpg"]);
        let expected = input.clone();
        let result = filter_by_tags(input, &[], &metadata());
        assert_eq!(result, expected);
    }

    #[test]
    fn single_tag_keeps_matching_entries() {
        let result = filter_by_tags(
            entries(&["a.jpg", "b.jpg", "c.jpg"]),
            &["sunset".to_string()],
            &metadata(),
        );
        assert_eq!(titles(&result), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn multiple_tags_require_superset() {
        let result = filter_by_tags(
            entries(&["a.jpg", "b.jpg", "c.jpg"]),
            &["sunset".to_string(), "beach".to_string()],
            &metadata(),
        );
        assert_eq!(titles(&result), vec!["b.jpg"]);
    }

    #[test]
    fn request_order_does_not_matter() {
        let result = filter_by_tags(
            entries(&["a.jpg", "b.jpg"]),
            &["beach".to_string(), "sunset".to_string()],
            &metadata(),
        );
        assert_eq!(titles(&result), vec!["b.jpg"]);
    }

    #[test]
    fn unknown_entry_defaults_to_empty_tag_list() {
        let result = filter_by_tags(
            entries(&["unlisted.jpg"]),
            &["sunset".to_string()],
            &metadata(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let result = filter_by_tags(
            entries(&["a.jpg"]),
            &["Sunset".to_string()],
            &metadata(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn unsatisfiable_tag_set_yields_empty() {
        let result = filter_by_tags(
            entries(&["a.jpg", "b.jpg", "c.jpg"]),
            &["sunset".to_string(), "night".to_string()],
            &metadata(),
        );
        assert!(result.is_empty());
    }
}

use super::FormatError;
use crate::models::FileStructure;

/// Serialize a structure tree to pretty-printed JSON (2-space indent)
pub fn to_json(structure: &FileStructure) -> Result<String, FormatError> {
    serde_json::to_string_pretty(structure).map_err(FormatError::from)
}

/// Serialize a structure tree to compact JSON
#[allow(dead_code)]
pub fn to_json_compact(structure: &FileStructure) -> Result<String, FormatError> {
    serde_json::to_string(structure).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sample_structure() -> FileStructure {
        let mut nested = IndexMap::new();
        nested.insert(
            "docs".to_string(),
            FileStructure::Files(vec!["a.md".to_string(), "b.md".to_string()]),
        );
        FileStructure::Nested(nested)
    }

    #[test]
    fn test_to_json_pretty_indents_two_spaces() {
        let json = to_json(&sample_structure()).unwrap();
        assert!(json.contains("\"docs\""));
        assert!(json.contains("\n  \"docs\": [\n    \"a.md\","));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json_compact(&sample_structure()).unwrap();
        assert_eq!(json, r#"{"docs":["a.md","b.md"]}"#);
    }
}

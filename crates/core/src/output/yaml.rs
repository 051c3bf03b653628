use super::FormatError;
use crate::models::FileStructure;

/// Serialize a structure tree to YAML
pub fn to_yaml(structure: &FileStructure) -> Result<String, FormatError> {
    serde_yaml::to_string(structure).map_err(FormatError::from)
}

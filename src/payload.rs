use crate::error::MonoError;
use std::collections::BTreeMap;

/// Serialize a flat string mapping into a JSON request body.
///
/// Keys come out sorted, so equal mappings always produce equal bytes.
pub fn encode_payload(fields: &BTreeMap<&str, &str>) -> Result<Vec<u8>, MonoError> {
    serde_json::to_vec(fields).map_err(MonoError::Encoding)
}

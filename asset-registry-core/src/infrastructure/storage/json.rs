//! JSON document helpers over a [`RecordStore`]
//!
//! Output is indented with four spaces, keeps struct field order and ends with a
//! newline so version-controlled diffs stay minimal.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::repositories::RecordStore;
use crate::shared::constants::JSON_INDENT;
use crate::shared::error::RegistryError;

/// Load and decode the document at `path`.
///
/// Both a missing file and a malformed document are `NotFoundOrUnreadable`.
pub fn read_json<T: DeserializeOwned>(store: &dyn RecordStore, path: &Path) -> Result<T, RegistryError> {
    let bytes = store.read(path)?;
    serde_json::from_slice(&bytes).map_err(|e| RegistryError::not_found_or_unreadable(path, e))
}

/// Encode `value` in the registry's on-disk format
pub fn prepare_json_data<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}

/// Encode and persist `value` at `path`, replacing any existing document
pub fn write_json<T: Serialize>(store: &dyn RecordStore, path: &Path, value: &T) -> Result<(), RegistryError> {
    let data = prepare_json_data(value).map_err(|e| RegistryError::write_failure(path, e))?;
    store.write(path, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::record_store::memory::MemoryStore;
    use crate::domain::Version;

    #[test]
    fn test_prepare_json_data_format() {
        let data = prepare_json_data(&serde_json::json!({ "version": { "major": 1 } })).unwrap();
        let text = String::from_utf8(data).unwrap();

        assert_eq!(text, "{\n    \"version\": {\n        \"major\": 1\n    }\n}\n");
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        let path = Path::new("blockchains/ethereum/tokenlist.json");

        write_json(&store, path, &Version { major: 7 }).unwrap();
        let version: Version = read_json(&store, path).unwrap();

        assert_eq!(version.major, 7);
        assert_eq!(store.writes().len(), 1);
    }

    #[test]
    fn test_read_malformed_document() {
        let store = MemoryStore::new();
        let path = Path::new("info.json");
        store.insert(path, "{ not json");

        let err = read_json::<Version>(&store, path).unwrap_err();
        assert!(matches!(err, RegistryError::NotFoundOrUnreadable { .. }));
    }
}

//! Generic structured-file reader/writer backing the persistent stores.
//!
//! Plain serde_json over a whole file. The stores rewrite the full document
//! on every mutation, so there is no append path and no partial-write
//! recovery beyond "corrupt loads as empty" at the call sites.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub(crate) fn read<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/data.json");

        let mut value = HashMap::new();
        value.insert("key".to_string(), vec![1, 2, 3]);

        write(&path, &value).unwrap();
        let back: HashMap<String, Vec<i32>> = read(&path).unwrap();
        assert_eq!(value, back);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read::<Vec<i32>>(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn test_read_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = read::<Vec<i32>>(&path).unwrap_err();
        assert!(!err.is_missing_file());
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}

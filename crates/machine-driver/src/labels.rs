//! `key=value` label parsing

use crate::error::{FlagError, Result};
use std::collections::BTreeMap;

/// Parse a list of `key=value` entries into a map
///
/// Entries are split on the first `=`, so values may contain `=` themselves.
/// A repeated key keeps the value of its last occurrence.
pub fn parse_labels(flag: &str, entries: &[String]) -> Result<BTreeMap<String, String>> {
    let mut labels = BTreeMap::new();
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| FlagError::MalformedLabel {
                flag: flag.to_string(),
                entry: entry.clone(),
            })?;
        labels.insert(key.to_string(), value.to_string());
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simple_label() {
        let labels = parse_labels("server-label", &entries(&["env=prod"])).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels["env"], "prod");
    }

    #[test]
    fn test_split_on_first_equals() {
        let labels = parse_labels("server-label", &entries(&["a=b=c"])).unwrap();
        assert_eq!(labels["a"], "b=c");
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_labels("server-label", &entries(&["env=prod", "env"])).unwrap_err();
        match err {
            FlagError::MalformedLabel { flag, entry } => {
                assert_eq!(flag, "server-label");
                assert_eq!(entry, "env");
            }
            other => panic!("Expected MalformedLabel error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let labels = parse_labels("key-label", &entries(&["env=dev", "env=prod"])).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels["env"], "prod");
    }

    #[test]
    fn test_empty_value_and_empty_list() {
        let labels = parse_labels("key-label", &entries(&["managed="])).unwrap();
        assert_eq!(labels["managed"], "");

        assert!(parse_labels("key-label", &[]).unwrap().is_empty());
    }
}

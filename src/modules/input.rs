use std::collections::BTreeMap;

use serde_json::Value;

use crate::modules::errors::ReconError;


/**
 * input.rs reads the JSON test-case shape: a reserved "keys" entry carrying
 * the required root count k, and numbered entries each holding a base and a
 * digit string. Only field presence is validated here; digit validity is the
 * decoder's concern.
 */

// one root before decoding, immutable once parsed
#[derive(PartialEq, Debug, Clone)]
pub struct EncodedRoot {
    pub base: u32,
    pub digits: String,
}

// id -> encoded root; BTreeMap gives ascending-id iteration order
pub type RootSet = BTreeMap<u32, EncodedRoot>;

#[derive(PartialEq, Debug, Clone)]
pub struct TestCase {
    pub k: usize,
    pub roots: RootSet,
}

// parse the raw JSON blob into a test case
pub fn parse_input(json: &str) -> Result<TestCase, ReconError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ReconError::MalformedInput(format!("invalid json: {}", e)))?;
    let obj = value
        .as_object()
        .ok_or_else(|| ReconError::MalformedInput("top level is not an object".to_string()))?;

    let keys = obj
        .get("keys")
        .ok_or_else(|| ReconError::MalformedInput("missing \"keys\" entry".to_string()))?;
    let k = read_uint(keys.get("k"), "k")? as usize;

    let mut roots = RootSet::new();
    for (key, entry) in obj {
        // the reserved "keys" entry is not a root
        if key == "keys" { continue; }

        let id: u32 = key.parse().map_err(|_| {
            ReconError::MalformedInput(format!("entry key \"{}\" is not a numeric identifier", key))
        })?;

        let fields = entry.as_object().ok_or_else(|| {
            ReconError::MalformedInput(format!("entry {} is not an object", id))
        })?;

        // bases past u32 range collapse to u32::MAX and fail radix validation
        let base = read_uint(fields.get("base"), "base")?
            .try_into()
            .unwrap_or(u32::MAX);
        let digits = fields
            .get("value")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ReconError::MalformedInput(format!("entry {} is missing a string \"value\"", id))
            })?
            .to_string();

        roots.insert(id, EncodedRoot { base, digits });
    }

    Ok(TestCase { k, roots })
}

// accept a non-negative integer field arriving as a number or numeric string
fn read_uint(field: Option<&Value>, name: &str) -> Result<u64, ReconError> {
    let field = field
        .ok_or_else(|| ReconError::MalformedInput(format!("missing \"{}\" field", name)))?;

    match field {
        Value::Number(n) => n.as_u64().ok_or_else(|| {
            ReconError::MalformedInput(format!("\"{}\" is not a non-negative integer", name))
        }),
        Value::String(s) => s.parse().map_err(|_| {
            ReconError::MalformedInput(format!("\"{}\" is not a non-negative integer", name))
        }),
        _ => Err(ReconError::MalformedInput(format!(
            "\"{}\" is not a non-negative integer", name
        ))),
    }
}

// tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let json = r#"{
            "keys": {"n": 3, "k": 3},
            "1": {"base": "10", "value": "4"},
            "2": {"base": "2", "value": "111"},
            "3": {"base": "10", "value": "12"}
        }"#;

        let case = parse_input(json).unwrap();
        assert_eq!(case.k, 3);
        assert_eq!(case.roots.len(), 3);
        assert_eq!(
            case.roots[&2],
            EncodedRoot { base: 2, digits: "111".to_string() }
        );
    }

    #[test]
    fn test_base_as_number_or_string() {
        // the source data quotes some fields and not others
        let json = r#"{
            "keys": {"n": 2, "k": 2},
            "1": {"base": 16, "value": "ff"},
            "2": {"base": "8", "value": "777"}
        }"#;

        let case = parse_input(json).unwrap();
        assert_eq!(case.roots[&1].base, 16);
        assert_eq!(case.roots[&2].base, 8);
    }

    #[test]
    fn test_ids_iterate_ascending() {
        let json = r#"{
            "keys": {"n": 3, "k": 2},
            "10": {"base": "10", "value": "1"},
            "2": {"base": "10", "value": "2"},
            "7": {"base": "10", "value": "3"}
        }"#;

        let case = parse_input(json).unwrap();
        let ids: Vec<u32> = case.roots.keys().copied().collect();
        assert_eq!(ids, vec![2, 7, 10]);
    }

    #[test]
    fn test_missing_keys_entry() {
        let json = r#"{"1": {"base": "10", "value": "4"}}"#;
        assert!(matches!(
            parse_input(json),
            Err(ReconError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_missing_k_field() {
        let json = r#"{"keys": {"n": 1}, "1": {"base": "10", "value": "4"}}"#;
        assert!(matches!(
            parse_input(json),
            Err(ReconError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_entry_missing_base_or_value() {
        let json = r#"{"keys": {"n": 1, "k": 1}, "1": {"value": "4"}}"#;
        assert!(matches!(
            parse_input(json),
            Err(ReconError::MalformedInput(_))
        ));

        let json = r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "10"}}"#;
        assert!(matches!(
            parse_input(json),
            Err(ReconError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_non_numeric_entry_key() {
        let json = r#"{"keys": {"n": 1, "k": 1}, "first": {"base": "10", "value": "4"}}"#;
        assert!(matches!(
            parse_input(json),
            Err(ReconError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_input("not json at all"),
            Err(ReconError::MalformedInput(_))
        ));
    }
}

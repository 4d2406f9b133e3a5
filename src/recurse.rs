//! Recursive routines over strings and JSON value trees.

use serde_json::Value;

/// Reverse a string recursively
///
/// Operates on `char` boundaries, so multi-byte text reverses cleanly.
///
/// # Example
///
/// ```rust
/// use weir::recurse::reverse_str;
///
/// assert_eq!(reverse_str("weir"), "riew");
/// assert_eq!(reverse_str(""), "");
/// ```
pub fn reverse_str(s: &str) -> String {
    match s.chars().next() {
        None => String::new(),
        Some(first) => {
            let mut reversed = reverse_str(&s[first.len_utf8()..]);
            reversed.push(first);
            reversed
        }
    }
}

/// Whether every leaf of a JSON value tree is the same value
///
/// Objects and arrays are walked recursively; null, booleans, numbers,
/// and strings are leaves. A tree with no leaves (an empty object or
/// array) matches vacuously. A bare leaf matches trivially.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use weir::recurse::leaves_match;
///
/// assert!(leaves_match(&json!({"a": 1, "b": {"c": 1, "d": [1, 1]}})));
/// assert!(!leaves_match(&json!({"a": 1, "b": 2})));
/// ```
pub fn leaves_match(value: &Value) -> bool {
    let mut leaves = Vec::new();
    collect_leaves(value, &mut leaves);
    match leaves.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|leaf| leaf == first),
    }
}

fn collect_leaves<'a>(value: &'a Value, leaves: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            for child in map.values() {
                collect_leaves(child, leaves);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_leaves(child, leaves);
            }
        }
        leaf => leaves.push(leaf),
    }
}

/// Flatten arbitrarily nested JSON arrays into a flat vector of values
///
/// Depth-first, preserving order. Non-array values (objects included)
/// are kept whole as leaves.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use weir::recurse::flatten;
///
/// let flat = flatten(&json!([1, [2], [3, [[4]]]]));
/// assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4)]);
/// ```
pub fn flatten(value: &Value) -> Vec<Value> {
    let mut flat = Vec::new();
    flatten_into(value, &mut flat);
    flat
}

fn flatten_into(value: &Value, flat: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for child in items {
                flatten_into(child, flat);
            }
        }
        leaf => flat.push(leaf.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reverse_str() {
        assert_eq!(reverse_str("abc"), "cba");
        assert_eq!(reverse_str("a"), "a");
        assert_eq!(reverse_str(""), "");
    }

    #[test]
    fn test_reverse_str_multibyte() {
        assert_eq!(reverse_str("día"), "aíd");
    }

    #[test]
    fn test_leaves_match_flat_object() {
        assert!(leaves_match(&json!({"a": 1, "b": 1})));
        assert!(!leaves_match(&json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_leaves_match_nested() {
        assert!(leaves_match(&json!({"a": "x", "b": {"c": "x"}, "d": ["x", "x"]})));
        assert!(!leaves_match(&json!({"a": "x", "b": {"c": "y"}})));
    }

    #[test]
    fn test_leaves_match_distinguishes_types() {
        // 1 and "1" are different leaves
        assert!(!leaves_match(&json!({"a": 1, "b": "1"})));
    }

    #[test]
    fn test_leaves_match_edge_cases() {
        assert!(leaves_match(&json!({})), "no leaves matches vacuously");
        assert!(leaves_match(&json!([])));
        assert!(leaves_match(&json!(42)), "a bare leaf matches trivially");
    }

    #[test]
    fn test_flatten_nested() {
        let flat = flatten(&json!([1, [2], [3, [[4]]]]));
        assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn test_flatten_empty_and_scalar() {
        assert!(flatten(&json!([])).is_empty());
        assert_eq!(flatten(&json!(5)), vec![json!(5)]);
    }

    #[test]
    fn test_flatten_keeps_objects_whole() {
        let flat = flatten(&json!([{"a": 1}, [{"b": 2}]]));
        assert_eq!(flat, vec![json!({"a": 1}), json!({"b": 2})]);
    }
}

use crate::error::{Result, WeirError};
use serde::Serialize;

/// Derive the store key for an argument value.
///
/// The key is the canonical JSON text of the full argument value, so the
/// equivalence relation is: two argument values map to the same entry iff
/// their JSON serializations are byte-identical. In particular:
///
/// - Numeric and string arguments never collide: `4` keys as `4`,
///   `"4"` keys as `"\"4\""`.
/// - Argument order is significant: `(2, 3)` keys as `[2,3]`,
///   `(3, 2)` as `[3,2]`.
/// - Structurally equal values of the same shape always collide.
///
/// Values that JSON cannot represent (`f64::NAN`, maps with non-string
/// keys) fail here; the memoizer treats that as "cannot memoize this
/// call" and invokes the callback directly.
///
/// # Examples
///
/// ```rust
/// use weir::derive_key;
///
/// let ordered = derive_key(&(2, 3)).unwrap();
/// let swapped = derive_key(&(3, 2)).unwrap();
/// assert_ne!(ordered, swapped);
///
/// assert_ne!(derive_key(&4).unwrap(), derive_key(&"4").unwrap());
/// ```
pub fn derive_key<A: Serialize + ?Sized>(args: &A) -> Result<String> {
    serde_json::to_string(args).map_err(|e| WeirError::key(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equal_values_share_a_key() {
        assert_eq!(derive_key(&(2, 3)).unwrap(), derive_key(&(2, 3)).unwrap());
        assert_eq!(derive_key(&"abc").unwrap(), derive_key(&"abc").unwrap());
    }

    #[test]
    fn test_argument_order_is_significant() {
        assert_ne!(derive_key(&(2, 3)).unwrap(), derive_key(&(3, 2)).unwrap());
    }

    #[test]
    fn test_numbers_and_strings_do_not_collide() {
        assert_eq!(derive_key(&4).unwrap(), "4");
        assert_eq!(derive_key(&"4").unwrap(), "\"4\"");
    }

    #[test]
    fn test_nan_is_not_keyable() {
        let err = derive_key(&f64::NAN).unwrap_err();
        assert!(matches!(err, WeirError::Key(_)));
    }

    #[test]
    fn test_non_string_map_keys_are_not_keyable() {
        let mut map = HashMap::new();
        map.insert((1, 2), "value");
        assert!(derive_key(&map).is_err());
    }
}

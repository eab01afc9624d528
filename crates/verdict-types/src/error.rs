//! Error types for building runtime values.

use thiserror::Error;

use crate::types::TypeDesc;

/// Errors raised while constructing sequences, maps and keys.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// A sequence item does not conform to the declared element type.
    #[error("element {index} has type {found}, expected {expected}")]
    ElementType {
        expected: TypeDesc,
        found: TypeDesc,
        index: usize,
    },

    /// A map key does not conform to the declared key type.
    #[error("map key has type {found}, expected {expected}")]
    KeyType { expected: TypeDesc, found: TypeDesc },

    /// A map value does not conform to the declared value type.
    #[error("map value has type {found}, expected {expected}")]
    ValueType { expected: TypeDesc, found: TypeDesc },

    /// A value of this type cannot be used as a map key.
    #[error("values of type {0} are not hashable")]
    UnhashableKey(TypeDesc),
}

/// Result type for value construction.
pub type ValueResult<T> = Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ValueError::ElementType {
            expected: TypeDesc::Int,
            found: TypeDesc::Str,
            index: 2,
        };
        assert_eq!(err.to_string(), "element 2 has type string, expected int");

        let err = ValueError::UnhashableKey(TypeDesc::seq(TypeDesc::Int));
        assert_eq!(err.to_string(), "values of type seq<int> are not hashable");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValueError>();
    }
}

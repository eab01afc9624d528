//! Hashable projection of runtime values.
//!
//! Maps and multiset counting need their entries to be usable as keys.
//! Scalars, times, durations and records built only from those project to a
//! [`Key`]; sequences, maps and ordered containers do not.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::value::{Record, Value};

/// Totally ordered float wrapper used inside keys.
///
/// `-0.0` is normalised to `0.0` so both zeros address the same entry.
#[derive(Clone, Copy, Debug)]
pub struct FloatKey(f64);

impl FloatKey {
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatKey {}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Key form of a hashable value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    Unit,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(FloatKey),
    Str(String),
    Time(DateTime<Utc>),
    Duration(Duration),
    Struct(String, Vec<(String, Key)>),
}

impl Key {
    /// Whether any float inside this key is NaN.
    ///
    /// NaN never compares equal to itself, so entries keyed by NaN can never
    /// be matched against another collection.
    pub fn has_nan(&self) -> bool {
        match self {
            Self::Float(f) => f.get().is_nan(),
            Self::Struct(_, fields) => fields.iter().any(|(_, k)| k.has_nan()),
            _ => false,
        }
    }

    /// Converts the key back into the value it was projected from.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Unit => Value::Unit,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Int(*i),
            Self::UInt(u) => Value::UInt(*u),
            Self::Float(f) => Value::Float(f.get()),
            Self::Str(s) => Value::Str(s.clone()),
            Self::Time(t) => Value::Time(*t),
            Self::Duration(d) => Value::Duration(*d),
            Self::Struct(name, fields) => Value::Struct(Record::new(
                name.clone(),
                fields
                    .iter()
                    .map(|(field, key)| (field.clone(), key.to_value()))
                    .collect(),
            )),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl Value {
    /// Projects this value to a [`Key`], or `None` when it is not hashable.
    pub fn to_key(&self) -> Option<Key> {
        let key = match self {
            Value::Unit => Key::Unit,
            Value::Bool(b) => Key::Bool(*b),
            Value::Int(i) => Key::Int(*i),
            Value::UInt(u) => Key::UInt(*u),
            Value::Float(f) => Key::Float(FloatKey::new(*f)),
            Value::Str(s) => Key::Str(s.clone()),
            Value::Time(t) => Key::Time(*t),
            Value::Duration(d) => Key::Duration(*d),
            Value::Struct(record) => {
                let fields = record
                    .fields()
                    .iter()
                    .map(|(name, v)| v.to_key().map(|k| (name.clone(), k)))
                    .collect::<Option<Vec<_>>>()?;
                Key::Struct(record.name().to_string(), fields)
            }
            Value::Seq(_) | Value::Map(_) | Value::Ordered(_) => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_share_a_key() {
        assert_eq!(FloatKey::new(0.0), FloatKey::new(-0.0));
        assert!(FloatKey::new(1.0) < FloatKey::new(2.0));
    }

    #[test]
    fn nan_is_detected() {
        assert!(Value::Float(f64::NAN).to_key().unwrap().has_nan());
        let rec = Value::Struct(Record::new(
            "P",
            vec![("x".into(), Value::Int(1)), ("y".into(), Value::Float(f64::NAN))],
        ));
        assert!(rec.to_key().unwrap().has_nan());
        assert!(!Value::Float(1.5).to_key().unwrap().has_nan());
    }

    #[test]
    fn collections_are_not_keys() {
        let seq = Value::seq_of(vec![1i64, 2]);
        assert!(seq.to_key().is_none());
        let rec = Value::Struct(Record::new("Wrapper", vec![("inner".into(), seq)]));
        assert!(rec.to_key().is_none());
    }

    #[test]
    fn key_round_trips_to_value() {
        let rec = Value::Struct(Record::new(
            "Point",
            vec![("x".into(), Value::Int(1)), ("y".into(), Value::Int(2))],
        ));
        let key = rec.to_key().unwrap();
        assert_eq!(key.to_value(), rec);
        assert_eq!(Key::Str("a".into()).to_string(), "\"a\"");
    }
}

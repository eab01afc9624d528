//! Runtime-typed values handed to checkers.
//!
//! [`Value`] is a closed set of shapes. Collections carry their declared
//! element types so that checkers can compare types exactly, and equality on
//! `Value` is deep structural equality.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::error::{ValueError, ValueResult};
use crate::key::Key;
use crate::ordered::{OrderedContainer, OrderedValue};
use crate::types::{Kind, TypeDesc};

// ── Value ───────────────────────────────────────────────────────────────

/// A dynamically typed value.
#[derive(Clone, Debug)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Time(DateTime<Utc>),
    Duration(Duration),
    Seq(Sequence),
    Map(Mapping),
    Struct(Record),
    Ordered(OrderedValue),
}

impl Value {
    /// Builds a sequence, checking every item against `elem`.
    pub fn seq(elem: TypeDesc, items: Vec<Value>) -> ValueResult<Value> {
        Sequence::new(elem, items).map(Value::Seq)
    }

    /// Builds a sequence from natively typed items.
    pub fn seq_of<T>(items: impl IntoIterator<Item = T>) -> Value
    where
        T: Typed + Into<Value>,
    {
        Value::Seq(Sequence {
            elem: T::type_desc(),
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Builds a map from natively typed entries.
    pub fn map_of<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> ValueResult<Value>
    where
        K: Typed + Into<Value>,
        V: Typed + Into<Value>,
    {
        Mapping::from_entries(
            K::type_desc(),
            V::type_desc(),
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        )
        .map(Value::Map)
    }

    /// Wraps an ordered container.
    pub fn ordered<C: OrderedContainer + 'static>(container: C) -> Value {
        Value::Ordered(OrderedValue::new(container))
    }

    /// Exact runtime type of this value.
    pub fn type_desc(&self) -> TypeDesc {
        match self {
            Value::Unit => TypeDesc::Unit,
            Value::Bool(_) => TypeDesc::Bool,
            Value::Int(_) => TypeDesc::Int,
            Value::UInt(_) => TypeDesc::UInt,
            Value::Float(_) => TypeDesc::Float,
            Value::Str(_) => TypeDesc::Str,
            Value::Time(_) => TypeDesc::Time,
            Value::Duration(_) => TypeDesc::Duration,
            Value::Seq(s) => TypeDesc::seq(s.elem.clone()),
            Value::Map(m) => TypeDesc::map(m.key.clone(), m.value.clone()),
            Value::Struct(r) => TypeDesc::Struct(r.name.clone()),
            Value::Ordered(o) => TypeDesc::Ordered(o.container().type_name().to_string()),
        }
    }

    /// Runtime shape of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Unit => Kind::Unit,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::String,
            Value::Time(_) => Kind::Time,
            Value::Duration(_) => Kind::Duration,
            Value::Seq(_) => Kind::Sequence,
            Value::Map(_) => Kind::Map,
            Value::Struct(_) => Kind::Struct,
            Value::Ordered(_) => Kind::Ordered,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&Sequence> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_ordered(&self) -> Option<&dyn OrderedContainer> {
        match self {
            Value::Ordered(o) => Some(o.container()),
            _ => None,
        }
    }

    /// Converts decoded JSON into a value.
    ///
    /// Arrays and objects get the common type of their items as element type,
    /// falling back to `Any` when items differ or the collection is empty.
    pub fn from_json(json: &serde_json::Value) -> Value {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Unit,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    n.as_f64().map(Value::Float).unwrap_or(Value::Unit)
                }
            }
            Json::String(s) => Value::Str(s.clone()),
            Json::Array(items) => {
                let items: Vec<Value> = items.iter().map(Value::from_json).collect();
                Value::Seq(Sequence {
                    elem: common_type(&items),
                    items,
                })
            }
            Json::Object(fields) => {
                let values: Vec<Value> = fields.values().map(Value::from_json).collect();
                let value_type = common_type(&values);
                let entries = fields
                    .keys()
                    .cloned()
                    .zip(values)
                    .map(|(k, v)| (Key::Str(k), v))
                    .collect();
                Value::Map(Mapping {
                    key: TypeDesc::Str,
                    value: value_type,
                    entries,
                    unmatched: Vec::new(),
                })
            }
        }
    }
}

fn common_type(items: &[Value]) -> TypeDesc {
    let mut types = items.iter().map(Value::type_desc);
    match types.next() {
        Some(first) if types.all(|t| t == first) => first,
        _ => TypeDesc::Any,
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(&json)
    }
}

/// Deep structural equality.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            (Value::Ordered(a), Value::Ordered(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Duration(d) => write!(f, "{}", d),
            Value::Seq(s) => {
                write!(f, "[")?;
                for (idx, item) in s.items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in m.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Struct(r) => {
                write!(f, "{} {{ ", r.name)?;
                for (idx, (name, value)) in r.fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, " }}")
            }
            Value::Ordered(o) => write!(f, "{}", o),
        }
    }
}

// ── Sequence ────────────────────────────────────────────────────────────

/// Homogeneous sequence with a declared element type.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    elem: TypeDesc,
    items: Vec<Value>,
}

impl Sequence {
    /// Creates a sequence, rejecting items that `elem` does not admit.
    pub fn new(elem: TypeDesc, items: Vec<Value>) -> ValueResult<Self> {
        for (index, item) in items.iter().enumerate() {
            let found = item.type_desc();
            if !elem.admits(&found) {
                return Err(ValueError::ElementType {
                    expected: elem,
                    found,
                    index,
                });
            }
        }
        Ok(Self { elem, items })
    }

    pub fn elem_type(&self) -> &TypeDesc {
        &self.elem
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

// ── Mapping ─────────────────────────────────────────────────────────────

/// Associative map with declared key and value types.
///
/// Entries whose key contains NaN can never be looked up again: each insert
/// adds a new entry, and a map holding one is unequal to every map.
#[derive(Clone, Debug)]
pub struct Mapping {
    key: TypeDesc,
    value: TypeDesc,
    entries: BTreeMap<Key, Value>,
    unmatched: Vec<(Key, Value)>,
}

impl Mapping {
    /// Creates an empty map. The key type must be hashable.
    pub fn new(key: TypeDesc, value: TypeDesc) -> ValueResult<Self> {
        if !key.is_hashable() {
            return Err(ValueError::UnhashableKey(key));
        }
        Ok(Self {
            key,
            value,
            entries: BTreeMap::new(),
            unmatched: Vec::new(),
        })
    }

    /// Creates a map and inserts every entry.
    pub fn from_entries(
        key: TypeDesc,
        value: TypeDesc,
        entries: impl IntoIterator<Item = (Value, Value)>,
    ) -> ValueResult<Self> {
        let mut map = Self::new(key, value)?;
        for (k, v) in entries {
            map.insert(k, v)?;
        }
        Ok(map)
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: Value, value: Value) -> ValueResult<Option<Value>> {
        let key_type = key.type_desc();
        if !self.key.admits(&key_type) {
            return Err(ValueError::KeyType {
                expected: self.key.clone(),
                found: key_type,
            });
        }
        let value_type = value.type_desc();
        if !self.value.admits(&value_type) {
            return Err(ValueError::ValueType {
                expected: self.value.clone(),
                found: value_type,
            });
        }
        let key = key.to_key().ok_or(ValueError::UnhashableKey(key_type))?;
        if key.has_nan() {
            self.unmatched.push((key, value));
            return Ok(None);
        }
        Ok(self.entries.insert(key, value))
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        key.to_key()
            .filter(|k| !k.has_nan())
            .and_then(|k| self.entries.get(&k))
    }

    pub fn key_type(&self) -> &TypeDesc {
        &self.key
    }

    pub fn value_type(&self) -> &TypeDesc {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.entries.len() + self.unmatched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.unmatched.is_empty()
    }

    /// Entries in key order, followed by NaN-keyed entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries
            .iter()
            .chain(self.unmatched.iter().map(|(k, v)| (k, v)))
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.unmatched.is_empty()
            && other.unmatched.is_empty()
            && self.key == other.key
            && self.value == other.value
            && self.entries == other.entries
    }
}

// ── Record ──────────────────────────────────────────────────────────────

/// Named struct value with ordered fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(name: impl Into<String>, fields: Vec<(String, Value)>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

// ── Native Conversions ──────────────────────────────────────────────────

/// Native Rust types with a fixed runtime [`TypeDesc`].
pub trait Typed {
    fn type_desc() -> TypeDesc;
}

macro_rules! typed_scalar {
    ($variant:ident, $desc:ident, $cast:ty: $($t:ty),+) => {
        $(
            impl Typed for $t {
                fn type_desc() -> TypeDesc {
                    TypeDesc::$desc
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $cast)
                }
            }
        )+
    };
}

typed_scalar!(Int, Int, i64: i8, i16, i32, i64);
typed_scalar!(UInt, UInt, u64: u8, u16, u32, u64);
typed_scalar!(Float, Float, f64: f32, f64);

impl Typed for bool {
    fn type_desc() -> TypeDesc {
        TypeDesc::Bool
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl Typed for () {
    fn type_desc() -> TypeDesc {
        TypeDesc::Unit
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl Typed for String {
    fn type_desc() -> TypeDesc {
        TypeDesc::Str
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl Typed for &str {
    fn type_desc() -> TypeDesc {
        TypeDesc::Str
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl Typed for DateTime<Utc> {
    fn type_desc() -> TypeDesc {
        TypeDesc::Time
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Time(v)
    }
}

impl Typed for Duration {
    fn type_desc() -> TypeDesc {
        TypeDesc::Duration
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(v)
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::seq(T::type_desc())
    }
}

impl<T: Typed + Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::seq_of(items)
    }
}

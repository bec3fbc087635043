//! The normalized value model.
//!
//! Both XMP properties and Exif fields end up as a [`Value`]. Every leaf of
//! a `Value` is a [`Scalar`].

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// A normalized metadata value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(Scalar),

    /// An `rdf:Seq`. Document order is kept.
    OrderedList(Vec<Value>),

    /// An `rdf:Bag`. Order carries no meaning, but document order is kept
    /// anyway, so repeated parses compare equal.
    UnorderedSet(Vec<Value>),

    /// An `rdf:Alt`, where each entry may carry an `xml:lang` qualifier.
    Alternatives(Vec<Alternative>),

    /// A structured record, keyed by local name.
    Record(Vec<RecordField>),
}

/// One entry in a [`Value::Alternatives`].
#[derive(Clone, Debug, PartialEq)]
pub struct Alternative {
    /// The entry's `xml:lang`, if any.
    pub lang: Option<String>,
    pub value: Value,
}

/// One field of a [`Value::Record`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordField {
    pub namespace: String,
    pub prefix: String,
    pub name: String,

    pub value: Value,
}

/// The language qualifier marking an alternative as the default.
pub const DEFAULT_LANG: &str = "x-default";

impl Value {
    /// Shorthand for a text scalar.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Text(s.into()))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self.as_scalar()? {
            Scalar::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.as_scalar()? {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Grabs a number, widening integers into floats.
    pub fn as_real(&self) -> Option<f64> {
        match self.as_scalar()? {
            Scalar::Real(r) => Some(*r),
            Scalar::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self.as_scalar()? {
            Scalar::DateTime(ts) => Some(ts),
            _ => None,
        }
    }

    /// The entries of an ordered list or unordered set.
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::OrderedList(items) | Value::UnorderedSet(items) => Some(items),
            _ => None,
        }
    }

    /// Picks the default alternative: the `x-default` entry, else the first.
    ///
    /// Other values return themselves, which lets callers treat a plain
    /// scalar and a language alternative the same way.
    ///
    /// ```
    /// use photometa_types::value::{Alternative, Value};
    ///
    /// let alt = Value::Alternatives(vec![
    ///     Alternative { lang: Some("de".into()), value: Value::text("Hallo") },
    ///     Alternative { lang: Some("x-default".into()), value: Value::text("Hello") },
    /// ]);
    /// assert_eq!(alt.default_alternative().and_then(Value::as_text), Some("Hello"));
    /// ```
    pub fn default_alternative(&self) -> Option<&Value> {
        match self {
            Value::Alternatives(list) => list
                .iter()
                .find(|alt| alt.lang.as_deref() == Some(DEFAULT_LANG))
                .or_else(|| list.first())
                .map(|alt| &alt.value),
            other => Some(other),
        }
    }

    /// Finds the alternative for the given language.
    pub fn alternative(&self, lang: &str) -> Option<&Value> {
        match self {
            Value::Alternatives(list) => list
                .iter()
                .find(|alt| alt.lang.as_deref() == Some(lang))
                .map(|alt| &alt.value),
            _ => None,
        }
    }

    /// Finds a record's field by local name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|f| f.name == name).map(|f| &f.value),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),

            Value::OrderedList(items) | Value::UnorderedSet(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }

            Value::Alternatives(_) => match self.default_alternative() {
                Some(chosen) => write!(f, "{chosen}"),
                None => Ok(()),
            },

            Value::Record(fields) => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A leaf value.
#[derive(Clone, Debug)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    DateTime(Timestamp),

    /// Binary data that isn't text, like a maker note.
    Bytes(Vec<u8>),
}

// `Real` compares NaN as equal to NaN. undefined rationals decode to NaN, and
// two parses of the same input should still compare equal.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Integer(a), Scalar::Integer(b)) => a == b,
            (Scalar::Real(a), Scalar::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Boolean(a), Scalar::Boolean(b)) => a == b,
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a == b,
            (Scalar::Bytes(a), Scalar::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Scalar::Text(t) => f.write_str(t),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Real(r) => write!(f, "{r}"),
            Scalar::Boolean(true) => f.write_str("True"),
            Scalar::Boolean(false) => f.write_str("False"),
            Scalar::DateTime(ts) => write!(f, "{ts}"),
            Scalar::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// A date and time, with an offset from UTC when the source gave one.
///
/// Exif dates are local time with no zone, so `offset` is often `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub local: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl Timestamp {
    pub const fn new(local: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self { local, offset }
    }

    /// Returns the same timestamp with the given offset attached.
    pub const fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            local: self.local,
            offset: Some(offset),
        }
    }

    /// Returns the zoned date-time, if the offset is known.
    pub fn to_fixed(&self) -> Option<DateTime<FixedOffset>> {
        self.local.and_local_timezone(self.offset?).single()
    }

    /// Converts to UTC, if the offset is known.
    ///
    /// ```
    /// use chrono::{FixedOffset, NaiveDate};
    /// use photometa_types::value::Timestamp;
    ///
    /// let local = NaiveDate::from_ymd_opt(2024, 5, 1)
    ///     .unwrap()
    ///     .and_hms_opt(12, 0, 0)
    ///     .unwrap();
    ///
    /// let ts = Timestamp::new(local, FixedOffset::east_opt(2 * 3600));
    /// assert_eq!(ts.to_utc().unwrap().to_rfc3339(), "2024-05-01T10:00:00+00:00");
    ///
    /// assert_eq!(Timestamp::new(local, None).to_utc(), None);
    /// ```
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.to_fixed().map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(local: NaiveDateTime) -> Self {
        Self::new(local, None)
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        match self.offset {
            Some(offset) => write!(f, "{offset}"),
            None => Ok(()),
        }
    }
}

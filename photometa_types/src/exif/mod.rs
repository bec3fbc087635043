use std::collections::BTreeMap;

use crate::exif::{
    ifd::IfdGroup,
    primitives::{Rational, SRational},
    tags::KnownTag,
};

pub mod ifd;
pub mod primitives;
pub mod tags;

/// One raw Exif dictionary, as handed over by an image decoder.
///
/// Maps each tag ID to its undecoded value. Sub-IFDs (Exif, GPS, interop)
/// appear as [`RawExifValue::Ifd`] under their pointer tag.
///
/// A `BTreeMap` keeps iteration in tag-ID order, so resolving the same
/// dictionary twice always yields the same field order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawExifIfd(pub BTreeMap<u16, RawExifValue>);

impl RawExifIfd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a tag's raw value.
    pub fn insert(&mut self, tag_id: u16, value: RawExifValue) -> Option<RawExifValue> {
        self.0.insert(tag_id, value)
    }

    pub fn get(&self, tag_id: u16) -> Option<&RawExifValue> {
        self.0.get(&tag_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &RawExifValue)> {
        self.0.iter().map(|(tag, value)| (*tag, value))
    }
}

impl FromIterator<(u16, RawExifValue)> for RawExifIfd {
    fn from_iter<T: IntoIterator<Item = (u16, RawExifValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An undecoded Exif value.
///
/// These mirror the shapes decoders commonly produce: integers (for `BYTE`,
/// `SHORT`, `LONG` and `SLONG`), byte strings (for `ASCII` and `UNDEFINED`),
/// rationals, and nested dictionaries.
#[derive(Clone, Debug, PartialEq)]
pub enum RawExifValue {
    Integer(i64),
    IntegerList(Vec<i64>),
    Float(f64),

    /// Raw bytes. Used for `ASCII` strings (usually NUL-terminated) and
    /// opaque `UNDEFINED` blobs alike.
    Bytes(Vec<u8>),

    /// Text the decoder already turned into a string.
    Text(String),

    Rational(Rational),
    SRational(SRational),

    /// A list of rationals, like the degree/minute/second triplet of a GPS
    /// coordinate.
    RationalList(Vec<Rational>),
    SRationalList(Vec<SRational>),

    /// A nested IFD, like the GPS IFD.
    Ifd(RawExifIfd),
}

/// A tag might be known by the resolver, but others may not be.
#[repr(C)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum FieldTag {
    Known(KnownTag),
    Unknown(u16),
}

impl FieldTag {
    /// Looks up a tag ID within the given group.
    pub fn resolve(group: IfdGroup, tag_id: u16) -> Self {
        KnownTag::try_from((group, tag_id))
            .map(FieldTag::Known)
            .unwrap_or(FieldTag::Unknown(tag_id))
    }

    /// The tag's field name.
    ///
    /// Unknown tags get a synthetic name. See [`synthetic_tag_name`].
    pub fn name(&self) -> String {
        match self {
            FieldTag::Known(known) => known.tag_name().into(),
            FieldTag::Unknown(raw) => synthetic_tag_name(*raw),
        }
    }

    pub fn tag_id(&self) -> u16 {
        match self {
            FieldTag::Known(known) => known.tag_id(),
            FieldTag::Unknown(raw) => *raw,
        }
    }
}

impl core::fmt::Display for FieldTag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            FieldTag::Known(known_tag) => {
                write!(
                    f,
                    "known field with name: `{}` and tag ID: `{}`",
                    known_tag.tag_name(),
                    known_tag.tag_id()
                )
            }
            FieldTag::Unknown(raw_tag) => write!(f, "unknown field with tag ID: `{raw_tag}`"),
        }
    }
}

/// Creates the field name used for tags missing from the tag tables.
///
/// ```
/// use photometa_types::exif::synthetic_tag_name;
///
/// assert_eq!(synthetic_tag_name(0xC4A5), "Tag0xC4A5");
/// assert_eq!(synthetic_tag_name(7), "Tag0x0007");
/// ```
pub fn synthetic_tag_name(tag_id: u16) -> String {
    format!("Tag0x{tag_id:04X}")
}

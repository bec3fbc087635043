use std::{
    num::{ParseFloatError, ParseIntError},
    sync::Arc,
};

/// This is an error that happened while we were parsing XMP.
#[derive(Clone, Debug)]
pub enum XmpError {
    /// `xmltree` failed to parse the XML.
    XmlParseError(
        // note: `Arc` allows us to impl `Clone`
        Arc<xmltree::ParseError>,
    ),

    /// The packet wasn't valid UTF-8.
    NotUtf8,

    /// Initial XML scanning failed - no `rdf:RDF` element was found.
    NoRdfElement,
}

impl core::fmt::Display for XmpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            XmpError::XmlParseError(e) => {
                write!(f, "Encountered error while parsing XML. err: {e}")
            }

            XmpError::NotUtf8 => f.write_str("The XMP packet wasn't in UTF-8 format."),

            XmpError::NoRdfElement => {
                f.write_str("The XML is missing the `rdf:RDF` element, which is required.")
            }
        }
    }
}

impl core::error::Error for XmpError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            XmpError::XmlParseError(e) => Some(e.as_ref()),
            XmpError::NotUtf8 | XmpError::NoRdfElement => None,
        }
    }
}

impl From<xmltree::ParseError> for XmpError {
    fn from(value: xmltree::ParseError) -> Self {
        XmpError::XmlParseError(value.into())
    }
}

/// This error occurred while typing a primitive.
///
/// We use it for better diagnostics. These are always converted into a
/// fallback `Text` value with `.inspect_err(log::warn!(/* ... */))`, so the
/// user keeps the raw text instead of losing the property.
#[derive(Clone, Debug, PartialEq)]
pub enum XmpParsingError {
    /// We were told to parse out a Boolean, but it wasn't `True` or `False`.
    /// The contained value is what we got.
    PrimitiveUnknownBool(String),

    /// We were told to parse out an Integer, but it failed to parse
    /// correctly. Contained value is what we got and the `core` parsing error.
    PrimitiveIntegerParseFail(String, ParseIntError),

    /// We were told to parse out a float (Real), but didn't parse right.
    PrimitiveRealParseFail(String, ParseFloatError),

    /// The text wasn't an ISO 8601 date.
    PrimitiveDateParseFail(String),

    /// The text wasn't a `n/d` rational, or a plain number.
    PrimitiveRationalParseFail(String),

    /// The text wasn't a `DDD,MM,SSk` or `DDD,MM.mmk` coordinate.
    PrimitiveGpsCoordinateParseFail(String),
}

impl core::fmt::Display for XmpParsingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            XmpParsingError::PrimitiveUnknownBool(got) => write!(
                f,
                "Asked to parse out a Boolean, but the stored value wasn't \
                    an expected answer. \
                Instead, it was: `{got}`",
            ),
            XmpParsingError::PrimitiveIntegerParseFail(got, parse_int_err) => write!(
                f,
                "Asked to parse out an Integer, but the stored value wasn't right. \
                    - got: `{got}`, \
                    - err: {parse_int_err}",
            ),
            XmpParsingError::PrimitiveRealParseFail(got, parse_float_err) => write!(
                f,
                "Asked to parse out a Real, but the stored value wasn't right. \
                    - got: `{got}`, \
                    - err: {parse_float_err}",
            ),
            XmpParsingError::PrimitiveDateParseFail(got) => {
                write!(f, "Asked to parse out a Date, but got: `{got}`")
            }
            XmpParsingError::PrimitiveRationalParseFail(got) => {
                write!(f, "Asked to parse out a Rational, but got: `{got}`")
            }
            XmpParsingError::PrimitiveGpsCoordinateParseFail(got) => {
                write!(f, "Asked to parse out a GPS coordinate, but got: `{got}`")
            }
        }
    }
}

impl core::error::Error for XmpParsingError {}

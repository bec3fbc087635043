//! This is the "data" side of XMP.
//!
//! Holds well-known namespace URIs and the table saying how to type simple
//! properties. Parsing itself lives in `photometa`.

use crate::value::Value;

pub mod parse_table;

/// A property parsed from the XMP.
///
/// Contains identifiers and a value.
#[derive(Clone, Debug, PartialEq)]
pub struct XmpElement {
    pub namespace: String,
    pub prefix: String,
    pub name: String,

    pub value: Value,
}

/// Namespace URIs that the parser or the capture-date resolver refers to.
pub mod ns {
    /// The RDF namespace. Its elements are syntax, not properties.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// The XML namespace, home of `xml:lang`.
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

    /// The `x:xmpmeta` wrapper namespace.
    pub const X: &str = "adobe:ns:meta/";

    /// XMP Basic (`xmp`).
    pub const XMP: &str = "http://ns.adobe.com/xap/1.0/";

    /// XMP Rights Management (`xmpRights`).
    pub const XMP_RIGHTS: &str = "http://ns.adobe.com/xap/1.0/rights/";

    /// XMP Media Management (`xmpMM`).
    pub const XMP_MM: &str = "http://ns.adobe.com/xap/1.0/mm/";

    /// Dublin Core (`dc`).
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";

    /// Photoshop (`photoshop`).
    pub const PHOTOSHOP: &str = "http://ns.adobe.com/photoshop/1.0/";

    /// Exif properties written as XMP (`exif`).
    pub const EXIF: &str = "http://ns.adobe.com/exif/1.0/";

    /// Exif 2.3+ properties written as XMP (`exifEX`).
    pub const EXIF_EX: &str = "http://cipa.jp/exif/1.0/";

    /// TIFF properties written as XMP (`tiff`).
    pub const TIFF: &str = "http://ns.adobe.com/tiff/1.0/";

    /// Exif auxiliary (`aux`).
    pub const AUX: &str = "http://ns.adobe.com/exif/1.0/aux/";

    /// IPTC Core (`Iptc4xmpCore`).
    pub const IPTC_CORE: &str = "http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/";

    /// Camera Raw settings (`crs`).
    pub const CRS: &str = "http://ns.adobe.com/camera-raw-settings/1.0/";
}

/// How a simple XMP property's text is typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XmpPrimitiveKind {
    Text,
    Integer,
    Real,

    /// `True` or `False`.
    Boolean,

    /// An ISO 8601 date, possibly partial, like `2024` or `2024-05-01T10:00`.
    Date,

    /// A rational written as `n/d`, like `28/10`. Decodes to a real.
    Rational,

    /// A coordinate written as `DDD,MM,SSk` or `DDD,MM.mmk`, where `k` is a
    /// hemisphere letter. Decodes to signed decimal degrees.
    GpsCoordinate,
}

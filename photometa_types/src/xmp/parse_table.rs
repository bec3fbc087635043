use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::xmp::{XmpPrimitiveKind as Prim, ns};

/// A pair of a property's namespace URL and its element name.
///
/// Ex: ("http://ns.adobe.com/xap/1.0/", "CreateDate") for `xmp:CreateDate`
#[derive(Hash, PartialEq, Eq)]
pub struct XmpNamespaceNamePair(pub (&'static str, &'static str));

// this impl allows us to search the hashmap with borrowed expressions for any
// lifetime 'a.
//
// `HashMap<K, V, _>::get` takes `&Q where K: Borrow<Q>`, so this lets a
// `(&'a str, &'a str)` built from parsed XML look up a `'static` key.
impl<'a> core::borrow::Borrow<(&'a str, &'a str)> for XmpNamespaceNamePair {
    fn borrow(&self) -> &(&'a str, &'a str) {
        &self.0
    }
}

/// Looks up how to type the given property.
///
/// Properties missing from the table are text.
///
/// ```
/// use photometa_types::xmp::{XmpPrimitiveKind, ns, parse_table::primitive_kind};
///
/// assert_eq!(primitive_kind(ns::XMP, "CreateDate"), XmpPrimitiveKind::Date);
/// assert_eq!(primitive_kind(ns::XMP, "Nickname"), XmpPrimitiveKind::Text);
/// assert_eq!(primitive_kind("urn:whatever", "CreateDate"), XmpPrimitiveKind::Text);
/// ```
pub fn primitive_kind(namespace: &str, name: &str) -> Prim {
    XMP_PARSING_MAP
        .get(&(namespace, name))
        .copied()
        .unwrap_or(Prim::Text)
}

/// A map, (key, value), where:
///
/// - `key` is the namespace URL + name pair
/// - `value` is how to type a simple value under that key
///
/// Array entries are typed by their property, so `dc:date` types each of its
/// `rdf:li` items as a date.
pub static XMP_PARSING_MAP: LazyLock<FxHashMap<XmpNamespaceNamePair, Prim>> =
    LazyLock::new(|| {
        let mut m: FxHashMap<XmpNamespaceNamePair, Prim> = FxHashMap::default();
        map(&mut m);
        m
    });

/// Adds all (key, value) pairs to the currently empty map.
fn map(m: &mut FxHashMap<XmpNamespaceNamePair, Prim>) {
    use XmpNamespaceNamePair as P;

    // helper lambda to make things slightly shorter :D
    let mut i = |namespace: &'static str, names: &[&'static str], value: Prim| {
        for name in names {
            m.insert(P((namespace, *name)), value);
        }
    };

    /*
     * Adobe XMP Basic namespace
     */
    i(
        ns::XMP,
        &["CreateDate", "MetadataDate", "ModifyDate"],
        Prim::Date,
    );
    i(ns::XMP, &["Rating"], Prim::Real);

    /*
     * XMP Rights Management namespace
     */
    i(ns::XMP_RIGHTS, &["Marked"], Prim::Boolean);

    /*
     * Dublin Core namespace
     */
    i(ns::DC, &["date"], Prim::Date);

    /*
     * Photoshop namespace
     */
    i(ns::PHOTOSHOP, &["DateCreated"], Prim::Date);
    i(ns::PHOTOSHOP, &["ColorMode", "Urgency"], Prim::Integer);

    /*
     * TIFF namespace
     */
    i(
        ns::TIFF,
        &[
            "ImageWidth",
            "ImageLength",
            "BitsPerSample",
            "Compression",
            "PhotometricInterpretation",
            "Orientation",
            "SamplesPerPixel",
            "PlanarConfiguration",
            "YCbCrPositioning",
            "ResolutionUnit",
        ],
        Prim::Integer,
    );
    i(ns::TIFF, &["XResolution", "YResolution"], Prim::Rational);
    i(ns::TIFF, &["DateTime"], Prim::Date);

    /*
     * Exif namespace
     */
    i(
        ns::EXIF,
        &["DateTimeOriginal", "DateTimeDigitized", "GPSTimeStamp"],
        Prim::Date,
    );
    i(
        ns::EXIF,
        &[
            "ExposureTime",
            "FNumber",
            "ShutterSpeedValue",
            "ApertureValue",
            "BrightnessValue",
            "ExposureBiasValue",
            "MaxApertureValue",
            "SubjectDistance",
            "FocalLength",
            "FocalPlaneXResolution",
            "FocalPlaneYResolution",
            "DigitalZoomRatio",
            "GPSAltitude",
            "GPSDOP",
            "GPSSpeed",
            "GPSTrack",
            "GPSImgDirection",
            "GPSDestBearing",
            "GPSDestDistance",
            "CompressedBitsPerPixel",
            "ExposureIndex",
            "FlashEnergy",
        ],
        Prim::Rational,
    );
    i(
        ns::EXIF,
        &[
            "ExposureProgram",
            "MeteringMode",
            "LightSource",
            "FocalPlaneResolutionUnit",
            "SensingMethod",
            "FileSource",
            "SceneType",
            "CustomRendered",
            "ExposureMode",
            "WhiteBalance",
            "FocalLengthIn35mmFilm",
            "SceneCaptureType",
            "GainControl",
            "Contrast",
            "Saturation",
            "Sharpness",
            "SubjectDistanceRange",
            "ColorSpace",
            "PixelXDimension",
            "PixelYDimension",
            "GPSAltitudeRef",
            "GPSDifferential",
        ],
        Prim::Integer,
    );
    i(
        ns::EXIF,
        &["GPSLatitude", "GPSLongitude", "GPSDestLatitude", "GPSDestLongitude"],
        Prim::GpsCoordinate,
    );

    /*
     * Exif 2.3+ namespace
     */
    i(
        ns::EXIF_EX,
        &[
            "PhotographicSensitivity",
            "SensitivityType",
            "StandardOutputSensitivity",
            "RecommendedExposureIndex",
            "ISOSpeed",
        ],
        Prim::Integer,
    );
    i(ns::EXIF_EX, &["Gamma"], Prim::Rational);

    /*
     * Exif auxiliary namespace
     */
    i(ns::AUX, &["ImageNumber", "LensID"], Prim::Integer);
    i(ns::AUX, &["ApproximateFocusDistance"], Prim::Rational);

    /*
     * Camera Raw settings: a few well-typed ones
     */
    i(ns::CRS, &["AutoLateralCA", "AlreadyApplied", "HasCrop", "HasSettings"], Prim::Boolean);
    i(ns::CRS, &["Exposure2012", "Contrast2012", "Highlights2012", "Shadows2012"], Prim::Real);
}

#[cfg(test)]
mod tests {
    use super::{XMP_PARSING_MAP, primitive_kind};
    use crate::xmp::{XmpPrimitiveKind as Prim, ns};

    #[test]
    fn table_keys_are_namespaced() {
        assert_eq!(primitive_kind(ns::EXIF, "FNumber"), Prim::Rational);
        assert_eq!(primitive_kind(ns::TIFF, "FNumber"), Prim::Text);
        assert_eq!(primitive_kind(ns::EXIF, "GPSLatitude"), Prim::GpsCoordinate);
        assert_eq!(primitive_kind(ns::PHOTOSHOP, "DateCreated"), Prim::Date);
    }

    #[test]
    fn table_is_populated_once() {
        let len = XMP_PARSING_MAP.len();
        assert!(len > 50);
        assert_eq!(XMP_PARSING_MAP.len(), len);
    }
}

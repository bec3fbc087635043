//! Exif is a media metadata format primarily used by cameras.
//!
//! Unlike XMP, it's a binary format of numbered tags. Image decoders hand us
//! those tags as a dictionary of tag ID to raw value, with the Exif, GPS, and
//! interoperability sub-IFDs nested under their pointer tags.
//!
//! This module names each tag and decodes its value. Tags missing from the
//! tables are kept under a synthetic name, so proprietary extensions are
//! still provided for folks who need them.

pub use photometa_types::exif::{
    FieldTag, RawExifIfd, RawExifValue, ifd::IfdGroup, primitives::*, synthetic_tag_name,
};

use photometa_types::{
    exif::tags::{GpsIfdTag, KnownTag},
    value::{Scalar, Value},
};

pub use self::value::gps_decimal_degrees;

pub mod error;
mod value;

/// One named, decoded Exif field.
#[derive(Clone, Debug, PartialEq)]
pub struct ExifField {
    pub tag: FieldTag,
    pub name: String,
    pub value: Value,
}

/// Exif metadata, resolved into named fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedExif {
    /// IFD 0 plus the flattened Exif and interoperability sub-IFDs.
    ///
    /// Only unknown nested IFDs stay records, under their pointer tag.
    pub fields: Vec<ExifField>,

    /// The GPS IFD, if the image has one.
    pub gps: Option<Vec<ExifField>>,
}

impl ResolvedExif {
    /// Names and decodes every tag in the given root IFD.
    pub fn new(ifd0: &RawExifIfd) -> Self {
        let mut resolved = ResolvedExif::default();
        let fields = resolve_group(ifd0, IfdGroup::_0, &mut resolved.gps);
        resolved.fields = fields;

        log::trace!(
            "Resolved `{}` Exif fields and `{}` GPS fields.",
            resolved.fields.len(),
            resolved.gps.as_ref().map_or(0, Vec::len)
        );
        resolved
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.gps.is_none()
    }

    /// Finds a field (not a GPS field) by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Finds a GPS field by name.
    pub fn gps_field(&self, name: &str) -> Option<&Value> {
        self.gps
            .as_ref()?
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }
}

/// Resolves every entry of one IFD.
///
/// The Exif and interoperability sub-IFDs are flattened into the returned
/// list. The GPS IFD goes into `gps`.
fn resolve_group(
    ifd: &RawExifIfd,
    group: IfdGroup,
    gps: &mut Option<Vec<ExifField>>,
) -> Vec<ExifField> {
    let mut fields: Vec<ExifField> = Vec::with_capacity(ifd.len());

    for (tag_id, raw) in ifd.iter() {
        let tag: FieldTag = resolve_tag(group, tag_id);

        // nested IFDs are whole groups, not values
        if let RawExifValue::Ifd(sub) = raw {
            match group.sub_ifd(tag_id) {
                Some(IfdGroup::Exif) => {
                    log::debug!("Flattening the Exif sub-IFD (`{}` entries).", sub.len());
                    fields.extend(resolve_group(sub, IfdGroup::Exif, gps));
                }

                Some(IfdGroup::Gps) => {
                    log::debug!("Resolving the GPS IFD (`{}` entries).", sub.len());
                    let mut gps_fields = resolve_group(sub, IfdGroup::Gps, &mut None);
                    apply_gps_references(&mut gps_fields);
                    *gps = Some(gps_fields);
                }

                Some(sub_group) => {
                    log::debug!("Flattening the `{sub_group:?}` IFD (`{}` entries).", sub.len());
                    fields.extend(resolve_group(sub, sub_group, &mut None));
                }

                // some decoders nest maker notes or vendor IFDs. keep them in
                // the same group, as a record
                None => {
                    log::debug!("Tag `{tag}` holds an unknown nested IFD. Keeping it as a record.");
                    let sub_fields = resolve_group(sub, group, &mut None);
                    fields.push(record_field(tag, sub_fields));
                }
            }
            continue;
        }

        if group.sub_ifd(tag_id).is_some() {
            log::debug!("Pointer tag `{tag}` wasn't resolved by the decoder. Keeping its offset.");
        }

        let value: Value = value::decode_field(&tag, raw);
        log::trace!("Resolved {tag} => `{value}`");
        fields.push(ExifField {
            name: tag.name(),
            tag,
            value,
        });
    }

    fields
}

/// Names a tag ID within its group.
///
/// Some decoders hoist the Exif sub-IFD's tags into IFD 0. Those are
/// looked up in the Exif table when IFD 0's table doesn't know them.
fn resolve_tag(group: IfdGroup, tag_id: u16) -> FieldTag {
    match (group, FieldTag::resolve(group, tag_id)) {
        (IfdGroup::_0, FieldTag::Unknown(_)) => FieldTag::resolve(IfdGroup::Exif, tag_id),
        (_, tag) => tag,
    }
}

/// Wraps a resolved sub-IFD as a record field.
fn record_field(tag: FieldTag, sub_fields: Vec<ExifField>) -> ExifField {
    ExifField {
        name: tag.name(),
        tag,
        value: Value::Record(
            sub_fields
                .into_iter()
                .map(|f| photometa_types::value::RecordField {
                    namespace: crate::model::EXIF_NAMESPACE.into(),
                    prefix: crate::model::EXIF_PREFIX.into(),
                    name: f.name,
                    value: f.value,
                })
                .collect(),
        ),
    }
}

/// Applies hemisphere and altitude references to their values.
///
/// Coordinates are stored unsigned, with the sign in a separate `*Ref` tag.
fn apply_gps_references(fields: &mut [ExifField]) {
    const PAIRS: [(GpsIfdTag, GpsIfdTag); 4] = [
        (GpsIfdTag::GPSLatitude, GpsIfdTag::GPSLatitudeRef),
        (GpsIfdTag::GPSLongitude, GpsIfdTag::GPSLongitudeRef),
        (GpsIfdTag::GPSDestLatitude, GpsIfdTag::GPSDestLatitudeRef),
        (GpsIfdTag::GPSDestLongitude, GpsIfdTag::GPSDestLongitudeRef),
    ];

    let find = |fields: &[ExifField], wanted: GpsIfdTag| -> Option<Value> {
        fields
            .iter()
            .find(|f| f.tag == FieldTag::Known(KnownTag::GpsIfdTag(wanted)))
            .map(|f| f.value.clone())
    };

    for (coordinate, reference) in PAIRS {
        let Some(reference) = find(fields, reference) else {
            continue;
        };

        let negative: bool = matches!(
            reference.as_text().map(str::trim),
            Some("S" | "W" | "s" | "w")
        );
        if negative {
            negate(fields, coordinate);
        }
    }

    // altitude ref 1 means "below sea level"
    let below_sea_level: bool = match find(fields, GpsIfdTag::GPSAltitudeRef) {
        Some(Value::Scalar(Scalar::Integer(1))) => true,
        Some(Value::Scalar(Scalar::Bytes(b))) => b.first() == Some(&1),
        _ => false,
    };
    if below_sea_level {
        negate(fields, GpsIfdTag::GPSAltitude);
    }
}

fn negate(fields: &mut [ExifField], wanted: GpsIfdTag) {
    let Some(field) = fields
        .iter_mut()
        .find(|f| f.tag == FieldTag::Known(KnownTag::GpsIfdTag(wanted)))
    else {
        return;
    };

    match &mut field.value {
        Value::Scalar(Scalar::Real(r)) => *r = -r.abs(),
        other => log::warn!(
            "Can't apply a reference to `{}`, as it isn't a number. value: `{other}`",
            field.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use photometa_types::{
        exif::{RawExifIfd, RawExifValue, primitives::Rational},
        value::{Scalar, Value},
    };

    use super::ResolvedExif;
    use crate::util::logger;

    fn dms(d: u32, m: u32, s: u32) -> RawExifValue {
        RawExifValue::RationalList(vec![
            Rational::new(d, 1),
            Rational::new(m, 1),
            Rational::new(s, 1),
        ])
    }

    #[test]
    fn sub_ifds_are_flattened() {
        logger();

        let interop: RawExifIfd = [(1, RawExifValue::Text("R98".into()))].into_iter().collect();
        let exif_ifd: RawExifIfd = [
            (33437, RawExifValue::Rational(Rational::new(28, 10))),
            (40965, RawExifValue::Ifd(interop)),
        ]
        .into_iter()
        .collect();
        let ifd0: RawExifIfd = [
            (271, RawExifValue::Bytes(b"Canon\0".to_vec())),
            (34665, RawExifValue::Ifd(exif_ifd)),
        ]
        .into_iter()
        .collect();

        let resolved = ResolvedExif::new(&ifd0);
        assert_eq!(resolved.field("Make"), Some(&Value::text("Canon")));
        assert_eq!(
            resolved.field("FNumber"),
            Some(&Value::Scalar(Scalar::Real(2.8)))
        );
        assert_eq!(
            resolved.field("InteroperabilityIndex"),
            Some(&Value::text("R98"))
        );
        assert!(resolved.field("InteropOffset").is_none());
        assert!(resolved.field("ExifOffset").is_none());
        assert!(
            resolved
                .fields
                .iter()
                .all(|f| !matches!(f.value, Value::Record(_)))
        );
        assert!(resolved.gps.is_none());
    }

    #[test]
    fn gps_references_sign_values() {
        logger();

        let gps: RawExifIfd = [
            (1, RawExifValue::Text("S".into())),
            (2, dms(33, 52, 4)),
            (3, RawExifValue::Bytes(b"W\0".to_vec())),
            (4, dms(151, 12, 26)),
            (5, RawExifValue::Integer(1)),
            (6, RawExifValue::Rational(Rational::new(125, 10))),
        ]
        .into_iter()
        .collect();
        let ifd0: RawExifIfd = [(34853, RawExifValue::Ifd(gps))].into_iter().collect();

        let resolved = ResolvedExif::new(&ifd0);

        let lat = resolved
            .gps_field("GPSLatitude")
            .and_then(Value::as_real)
            .expect("latitude should be a number");
        assert!((lat + 33.867778).abs() < 1e-5);

        let lon = resolved
            .gps_field("GPSLongitude")
            .and_then(Value::as_real)
            .expect("longitude should be a number");
        assert!(lon < -151.0);

        assert_eq!(
            resolved.gps_field("GPSAltitude"),
            Some(&Value::Scalar(Scalar::Real(-12.5)))
        );
    }

    #[test]
    fn unknown_tags_get_synthetic_names() {
        logger();

        let ifd0: RawExifIfd = [(0xABCD, RawExifValue::Integer(7))].into_iter().collect();
        let resolved = ResolvedExif::new(&ifd0);
        assert_eq!(
            resolved.field("Tag0xABCD"),
            Some(&Value::Scalar(Scalar::Integer(7)))
        );
    }

    /// Some decoders merge the Exif sub-IFD right into IFD 0.
    #[test]
    fn hoisted_exif_tags_are_still_named() {
        logger();

        let ifd0: RawExifIfd = [(36867, RawExifValue::Text("2019:04:01 12:00:00".into()))]
            .into_iter()
            .collect();
        let resolved = ResolvedExif::new(&ifd0);
        assert!(
            resolved
                .field("DateTimeOriginal")
                .and_then(Value::as_timestamp)
                .is_some()
        );
    }

    #[test]
    fn resolving_is_deterministic() {
        logger();

        let ifd0: RawExifIfd = [
            (274, RawExifValue::Integer(6)),
            (256, RawExifValue::Integer(4000)),
            (257, RawExifValue::Integer(3000)),
        ]
        .into_iter()
        .collect();

        let names: Vec<String> = ResolvedExif::new(&ifd0)
            .fields
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["ImageWidth", "ImageLength", "Orientation"]);
        assert_eq!(ResolvedExif::new(&ifd0), ResolvedExif::new(&ifd0));
    }
}

//! Lookups over the merged model.

use photometa_types::{
    value::{Scalar, Timestamp, Value},
    xmp::ns,
};

use crate::{
    date::{parse_any, parse_offset},
    model::{EXIF_NAMESPACE, MetadataModel, NamespaceEntry},
};

/// One place the capture date might be stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaptureDateCandidate {
    /// The namespace URI to look in.
    ///
    /// URIs are used instead of prefixes, so packets with unusual prefixes
    /// still resolve.
    pub namespace: &'static str,

    /// The property's local name.
    pub name: &'static str,

    /// A property in the same namespace holding the offset from UTC, for
    /// dates that don't carry their own.
    pub offset_name: Option<&'static str>,
}

impl CaptureDateCandidate {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self {
            namespace,
            name,
            offset_name: None,
        }
    }

    pub const fn with_offset(self, offset_name: &'static str) -> Self {
        Self {
            offset_name: Some(offset_name),
            ..self
        }
    }
}

/// Where [`MetadataModel::capture_date`] looks, from most to least trusted.
pub const CAPTURE_DATE_CANDIDATES: &[CaptureDateCandidate] = &[
    CaptureDateCandidate::new(EXIF_NAMESPACE, "DateTimeOriginal").with_offset("OffsetTimeOriginal"),
    CaptureDateCandidate::new(EXIF_NAMESPACE, "DateTimeDigitized")
        .with_offset("OffsetTimeDigitized"),
    CaptureDateCandidate::new(ns::XMP, "CreateDate"),
    CaptureDateCandidate::new(ns::PHOTOSHOP, "DateCreated"),
    CaptureDateCandidate::new(ns::EXIF, "DateTimeOriginal"),
    CaptureDateCandidate::new(EXIF_NAMESPACE, "DateTime").with_offset("OffsetTime"),
];

impl MetadataModel {
    /// Finds a value by namespace and local name.
    ///
    /// - `Some(prefix_or_uri)`: looks only in that namespace. If no namespace
    ///   has that prefix or URI, nothing is found.
    /// - `None`: checks every namespace in model order, returning the first
    ///   match.
    ///
    /// Names are matched exactly, including case.
    pub fn search(&self, prefix_or_uri: Option<&str>, local_name: &str) -> Option<&Value> {
        match prefix_or_uri {
            Some(key) => {
                let Some(entry) = self.namespace(key) else {
                    log::trace!("No namespace matches `{key}`.");
                    return None;
                };
                entry.get(local_name)
            }

            None => self.namespaces().iter().find_map(|n| n.get(local_name)),
        }
    }

    /// Finds when the image was taken, using [`CAPTURE_DATE_CANDIDATES`].
    pub fn capture_date(&self) -> Option<Timestamp> {
        self.capture_date_from(CAPTURE_DATE_CANDIDATES)
    }

    /// Finds when the image was taken, checking the given candidates in
    /// order.
    ///
    /// The first candidate that's present and holds a readable date wins.
    pub fn capture_date_from(&self, candidates: &[CaptureDateCandidate]) -> Option<Timestamp> {
        candidates.iter().find_map(|candidate| {
            self.namespaces()
                .iter()
                .filter(|entry| entry.uri() == candidate.namespace)
                .find_map(|entry| read_candidate(entry, candidate))
        })
    }
}

fn read_candidate(entry: &NamespaceEntry, candidate: &CaptureDateCandidate) -> Option<Timestamp> {
    let value: &Value = entry.get(candidate.name)?;

    let timestamp: Timestamp = match value.default_alternative()?.as_scalar()? {
        Scalar::DateTime(ts) => *ts,
        Scalar::Text(text) => match parse_any(text) {
            Some(ts) => ts,
            None => {
                log::warn!(
                    "`{}:{}` isn't a readable date. Trying the next candidate. value: `{text}`",
                    entry.prefix(),
                    candidate.name
                );
                return None;
            }
        },
        other => {
            log::warn!(
                "`{}:{}` isn't a date. Trying the next candidate. value: `{other}`",
                entry.prefix(),
                candidate.name
            );
            return None;
        }
    };

    if timestamp.offset.is_some() {
        return Some(timestamp);
    }

    let offset = candidate
        .offset_name
        .and_then(|name| entry.get(name))
        .and_then(Value::as_text)
        .and_then(parse_offset);

    Some(match offset {
        Some(offset) => timestamp.with_offset(offset),
        None => timestamp,
    })
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use photometa_types::{
        exif::{RawExifIfd, RawExifValue},
        value::Value,
        xmp::{XmpElement, ns},
    };

    use super::CaptureDateCandidate;
    use crate::{exif::ResolvedExif, model::MetadataModel, util::logger};

    fn element(prefix: &str, namespace: &str, name: &str, value: Value) -> XmpElement {
        XmpElement {
            namespace: namespace.into(),
            prefix: prefix.into(),
            name: name.into(),
            value,
        }
    }

    fn sample() -> MetadataModel {
        let xmp = [
            element("xmp", ns::XMP, "CreateDate", Value::text("2020-01-01")),
            element("photoshop", ns::PHOTOSHOP, "CreateDate", Value::text("1999-12-31")),
            element("photoshop", ns::PHOTOSHOP, "City", Value::text("Oslo")),
        ];
        let exif: RawExifIfd = [(271, RawExifValue::Text("Fujifilm".into()))]
            .into_iter()
            .collect();

        MetadataModel::merge(&xmp, Some(&ResolvedExif::new(&exif)))
    }

    #[test]
    fn search_without_namespace_takes_the_first_match() {
        logger();

        let model = sample();
        assert_eq!(
            model.search(None, "CreateDate"),
            Some(&Value::text("2020-01-01"))
        );
        assert_eq!(model.search(None, "Make"), Some(&Value::text("Fujifilm")));
        assert_eq!(model.search(None, "Nope"), None);
    }

    #[test]
    fn search_with_namespace_doesnt_fall_back() {
        logger();

        let model = sample();
        assert_eq!(
            model.search(Some("photoshop"), "CreateDate"),
            Some(&Value::text("1999-12-31"))
        );
        assert_eq!(model.search(Some(ns::PHOTOSHOP), "City"), Some(&Value::text("Oslo")));
        assert_eq!(model.search(Some("xmp"), "City"), None);
        assert_eq!(model.search(Some("unknown"), "City"), None);
    }

    #[test]
    fn search_is_case_sensitive() {
        logger();
        assert_eq!(sample().search(Some("photoshop"), "city"), None);
    }

    #[test]
    fn exif_offsets_are_attached() {
        logger();

        let exif_ifd: RawExifIfd = [
            (36867, RawExifValue::Text("2022:08:09 18:00:00".into())),
            (36881, RawExifValue::Text("+09:00".into())),
        ]
        .into_iter()
        .collect();
        let ifd0: RawExifIfd = [(34665, RawExifValue::Ifd(exif_ifd))].into_iter().collect();

        let model = MetadataModel::merge(&[], Some(&ResolvedExif::new(&ifd0)));
        let date = model.capture_date().expect("should find a date");
        assert_eq!(date.offset, FixedOffset::east_opt(9 * 3600));
        assert_eq!(
            date.to_utc().map(|utc| utc.to_rfc3339()),
            Some("2022-08-09T09:00:00+00:00".into())
        );
    }

    #[test]
    fn unreadable_candidates_are_skipped() {
        logger();

        let xmp = [
            element("xmp", ns::XMP, "CreateDate", Value::text("sometime")),
            element("photoshop", ns::PHOTOSHOP, "DateCreated", Value::text("2001-02-03")),
        ];
        let model = MetadataModel::merge(&xmp, None);
        assert_eq!(
            model.capture_date().map(|ts| ts.to_string()),
            Some("2001-02-03T00:00:00".into())
        );
    }

    #[test]
    fn custom_candidates() {
        logger();

        let xmp = [
            element("xmp", ns::XMP, "CreateDate", Value::text("2020-01-01")),
            element("xmp", ns::XMP, "ModifyDate", Value::text("2021-06-01")),
        ];
        let model = MetadataModel::merge(&xmp, None);

        let modified_first = [
            CaptureDateCandidate::new(ns::XMP, "ModifyDate"),
            CaptureDateCandidate::new(ns::XMP, "CreateDate"),
        ];
        assert_eq!(
            model.capture_date_from(&modified_first).map(|ts| ts.to_string()),
            Some("2021-06-01T00:00:00".into())
        );
        assert_eq!(model.capture_date_from(&[]), None);
    }

    /// XMP namespaces are matched by URI, not prefix.
    #[test]
    fn odd_prefixes_still_resolve() {
        logger();

        let xmp = [element("xap", ns::XMP, "CreateDate", Value::text("2018-03-04T05:06"))];
        let model = MetadataModel::merge(&xmp, None);
        assert_eq!(
            model.capture_date().map(|ts| ts.to_string()),
            Some("2018-03-04T05:06:00".into())
        );
    }
}

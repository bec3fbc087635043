//! The merged metadata model.
//!
//! XMP properties and Exif fields end up side by side here, each filed
//! under a namespace prefix.

use rustc_hash::{FxHashMap, FxHashSet};

use photometa_types::{
    value::{RecordField, Value},
    xmp::XmpElement,
};

use crate::exif::{ExifField, ResolvedExif};

/// The prefix Exif fields are filed under.
pub const EXIF_PREFIX: &str = "exif";

/// The prefix GPS fields are filed under.
pub const GPS_PREFIX: &str = "gps";

/// The namespace URI for Exif fields.
///
/// Exif has no namespaces of its own, so this one is made up. It's distinct
/// from XMP's `http://ns.adobe.com/exif/1.0/`.
pub const EXIF_NAMESPACE: &str = "urn:photometa:exif";

/// The namespace URI for GPS fields.
pub const GPS_NAMESPACE: &str = "urn:photometa:exif:gps";

/// Prefixes that XMP namespaces can't keep.
pub const RESERVED_PREFIXES: [&str; 2] = [EXIF_PREFIX, GPS_PREFIX];

/// The name of the record holding all GPS fields in the Exif namespace.
pub const GPS_RECORD_NAME: &str = "GPSInfo";

/// Where a namespace's values came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamespaceSource {
    Xmp,
    Exif,
    Gps,
}

/// One namespace, holding its values by local name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamespaceEntry {
    prefix: String,
    uri: String,
    source: NamespaceSource,

    // values in insertion order, plus an index by name
    values: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl NamespaceEntry {
    fn new(prefix: String, uri: String, source: NamespaceSource) -> Self {
        Self {
            prefix,
            uri,
            source,
            values: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn source(&self) -> NamespaceSource {
        self.source
    }

    /// Grabs the value stored under `local_name`.
    pub fn get(&self, local_name: &str) -> Option<&Value> {
        self.index.get(local_name).map(|i| &self.values[*i].1)
    }

    /// Iterates over `(local_name, value)`, in the order names first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stores a value. A repeated name replaces the earlier value, but keeps
    /// its position.
    fn insert(&mut self, name: String, value: Value) {
        match self.index.get(&name) {
            Some(i) => {
                log::debug!(
                    "`{}:{name}` appeared more than once. Keeping the last value.",
                    self.prefix
                );
                self.values[*i].1 = value;
            }
            None => {
                self.index.insert(name.clone(), self.values.len());
                self.values.push((name, value));
            }
        }
    }
}

/// All metadata for one image, by namespace.
///
/// Namespaces are ordered: XMP namespaces in the order the packet first uses
/// them, then Exif, then GPS.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataModel {
    namespaces: Vec<NamespaceEntry>,
    by_prefix: FxHashMap<String, usize>,
}

impl MetadataModel {
    /// Combines parsed XMP and resolved Exif into one model.
    ///
    /// Each `(prefix, URI)` pair in the packet gets its own namespace. Two
    /// kinds of prefix are renamed, both in first-use order:
    ///
    /// - prefixes colliding with [`RESERVED_PREFIXES`] become `<prefix>_xmp`,
    ///   then `<prefix>_xmp2`, `<prefix>_xmp3`, and so on.
    /// - a prefix rebound to another URI keeps its name for the first URI.
    ///   Later URIs become `<prefix>_2`, `<prefix>_3`, and so on.
    pub fn merge(xmp: &[XmpElement], exif: Option<&ResolvedExif>) -> Self {
        let mut model = MetadataModel::default();

        let prefixes: FxHashMap<(&str, &str), String> = assign_prefixes(xmp);
        for element in xmp {
            let prefix: &str = prefixes
                .get(&(element.prefix.as_str(), element.namespace.as_str()))
                .map(String::as_str)
                .unwrap_or(element.prefix.as_str());

            model
                .entry(prefix, &element.namespace, NamespaceSource::Xmp)
                .insert(element.name.clone(), element.value.clone());
        }

        if let Some(exif) = exif {
            model.add_exif(exif);
        }

        model
    }

    fn add_exif(&mut self, exif: &ResolvedExif) {
        if exif.is_empty() {
            return;
        }

        let exif_entry = self.entry(EXIF_PREFIX, EXIF_NAMESPACE, NamespaceSource::Exif);
        for field in &exif.fields {
            exif_entry.insert(field.name.clone(), field.value.clone());
        }

        let Some(gps) = exif.gps.as_ref() else {
            return;
        };

        exif_entry.insert(GPS_RECORD_NAME.into(), gps_record(gps));

        let gps_entry = self.entry(GPS_PREFIX, GPS_NAMESPACE, NamespaceSource::Gps);
        for field in gps {
            gps_entry.insert(field.name.clone(), field.value.clone());
        }
    }

    /// Grabs the entry for `prefix`, making it if needed.
    fn entry(&mut self, prefix: &str, uri: &str, source: NamespaceSource) -> &mut NamespaceEntry {
        let i: usize = match self.by_prefix.get(prefix) {
            Some(i) => *i,
            None => {
                log::trace!("Adding namespace `{prefix}` => `{uri}`.");
                self.namespaces
                    .push(NamespaceEntry::new(prefix.into(), uri.into(), source));
                self.by_prefix.insert(prefix.into(), self.namespaces.len() - 1);
                self.namespaces.len() - 1
            }
        };

        &mut self.namespaces[i]
    }

    /// All namespaces, in model order.
    pub fn namespaces(&self) -> &[NamespaceEntry] {
        &self.namespaces
    }

    /// Finds a namespace by its prefix, or else by its URI.
    ///
    /// When several prefixes share a URI, the first in model order wins.
    pub fn namespace(&self, prefix_or_uri: &str) -> Option<&NamespaceEntry> {
        match self.by_prefix.get(prefix_or_uri) {
            Some(i) => Some(&self.namespaces[*i]),
            None => self.namespaces.iter().find(|n| n.uri == prefix_or_uri),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Picks a unique model prefix for each `(prefix, URI)` pair in the packet.
fn assign_prefixes(xmp: &[XmpElement]) -> FxHashMap<(&str, &str), String> {
    let used: FxHashSet<&str> = xmp.iter().map(|e| e.prefix.as_str()).collect();
    let mut taken: FxHashSet<String> = FxHashSet::default();
    let mut assigned: FxHashMap<(&str, &str), String> = FxHashMap::default();

    // go in first-use order, so the same packet always gets the same names
    for element in xmp {
        let pair: (&str, &str) = (element.prefix.as_str(), element.namespace.as_str());
        if assigned.contains_key(&pair) {
            continue;
        }

        let (prefix, uri) = pair;
        let reserved: bool = RESERVED_PREFIXES.contains(&prefix);
        if !reserved && !taken.contains(prefix) {
            taken.insert(prefix.into());
            assigned.insert(pair, prefix.into());
            continue;
        }

        let renamed: String = (1_u32..)
            .map(|n| match (reserved, n) {
                (true, 1) => format!("{prefix}_xmp"),
                (true, n) => format!("{prefix}_xmp{n}"),
                (false, n) => format!("{prefix}_{}", n + 1),
            })
            .find(|candidate| {
                !used.contains(candidate.as_str())
                    && !RESERVED_PREFIXES.contains(&candidate.as_str())
                    && !taken.contains(candidate)
            })
            .unwrap_or_else(|| format!("{prefix}_xmp"));

        match reserved {
            true => log::debug!("XMP prefix `{prefix}` is reserved. Renaming it to `{renamed}`."),
            false => log::debug!(
                "XMP prefix `{prefix}` was rebound to `{uri}`. Filing that URI under `{renamed}`."
            ),
        }
        taken.insert(renamed.clone());
        assigned.insert(pair, renamed);
    }

    assigned
}

/// Bundles the GPS fields into one record.
fn gps_record(gps: &[ExifField]) -> Value {
    Value::Record(
        gps.iter()
            .map(|f| RecordField {
                namespace: GPS_NAMESPACE.into(),
                prefix: GPS_PREFIX.into(),
                name: f.name.clone(),
                value: f.value.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use photometa_types::{
        exif::{RawExifIfd, RawExifValue},
        value::Value,
        xmp::XmpElement,
    };

    use super::{MetadataModel, NamespaceSource};
    use crate::{exif::ResolvedExif, util::logger};

    fn element(prefix: &str, namespace: &str, name: &str, value: &str) -> XmpElement {
        XmpElement {
            namespace: namespace.into(),
            prefix: prefix.into(),
            name: name.into(),
            value: Value::text(value),
        }
    }

    #[test]
    fn namespaces_keep_first_use_order() {
        logger();

        let xmp = [
            element("xmp", "http://ns.adobe.com/xap/1.0/", "CreatorTool", "GIMP"),
            element("dc", "http://purl.org/dc/elements/1.1/", "format", "image/png"),
            element("xmp", "http://ns.adobe.com/xap/1.0/", "Label", "Red"),
        ];
        let exif: RawExifIfd = [(271, RawExifValue::Text("Nikon".into()))].into_iter().collect();

        let model = MetadataModel::merge(&xmp, Some(&ResolvedExif::new(&exif)));
        let prefixes: Vec<&str> = model.namespaces().iter().map(|n| n.prefix()).collect();
        assert_eq!(prefixes, ["xmp", "dc", "exif"]);
        assert_eq!(
            model.namespace("exif").map(|n| n.source()),
            Some(NamespaceSource::Exif)
        );
    }

    #[test]
    fn duplicate_properties_keep_the_last_value() {
        logger();

        let xmp = [
            element("ns", "ns:test/", "Thing", "first"),
            element("ns", "ns:test/", "Thing", "second"),
        ];
        let model = MetadataModel::merge(&xmp, None);
        let entry = model.namespace("ns").expect("namespace should exist");
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get("Thing"), Some(&Value::text("second")));
    }

    #[test]
    fn reserved_prefixes_are_renamed() {
        logger();

        let xmp = [
            element("exif", "http://ns.adobe.com/exif/1.0/", "FNumber", "4"),
            element("exif_xmp", "urn:already:taken", "Other", "x"),
            element("gps", "urn:some:gps", "Fix", "3d"),
        ];
        let exif: RawExifIfd = [(271, RawExifValue::Text("Nikon".into()))].into_iter().collect();

        let model = MetadataModel::merge(&xmp, Some(&ResolvedExif::new(&exif)));

        assert_eq!(
            model.namespace("exif_xmp2").map(|n| n.uri()),
            Some("http://ns.adobe.com/exif/1.0/")
        );
        assert_eq!(
            model.namespace("exif_xmp").map(|n| n.uri()),
            Some("urn:already:taken")
        );
        assert_eq!(model.namespace("gps_xmp").map(|n| n.uri()), Some("urn:some:gps"));
        assert_eq!(
            model.namespace("exif").map(|n| n.source()),
            Some(NamespaceSource::Exif)
        );

        // the XMP namespace is still reachable by URI
        assert_eq!(
            model
                .namespace("http://ns.adobe.com/exif/1.0/")
                .map(|n| n.prefix()),
            Some("exif_xmp2")
        );
    }

    #[test]
    fn rebound_prefixes_get_their_own_namespace() {
        logger();

        let xmp = [
            element("ns", "urn:a/", "One", "1"),
            element("ns", "urn:b/", "Two", "2"),
            element("ns_2", "urn:c/", "Three", "3"),
            element("ns", "urn:a/", "Four", "4"),
        ];
        let model = MetadataModel::merge(&xmp, None);

        let layout: Vec<(&str, &str, usize)> = model
            .namespaces()
            .iter()
            .map(|n| (n.prefix(), n.uri(), n.len()))
            .collect();
        assert_eq!(
            layout,
            [("ns", "urn:a/", 2), ("ns_3", "urn:b/", 1), ("ns_2", "urn:c/", 1)]
        );

        assert_eq!(
            model.namespace("urn:b/").and_then(|n| n.get("Two")),
            Some(&Value::text("2"))
        );
        assert_eq!(model.namespace("urn:a/").and_then(|n| n.get("Two")), None);
    }

    #[test]
    fn gps_is_a_namespace_and_a_record() {
        logger();

        let gps: RawExifIfd = [(18, RawExifValue::Text("WGS-84".into()))].into_iter().collect();
        let ifd0: RawExifIfd = [(34853, RawExifValue::Ifd(gps))].into_iter().collect();

        let model = MetadataModel::merge(&[], Some(&ResolvedExif::new(&ifd0)));

        assert_eq!(
            model.namespace("gps").and_then(|n| n.get("GPSMapDatum")),
            Some(&Value::text("WGS-84"))
        );
        assert_eq!(
            model
                .namespace("exif")
                .and_then(|n| n.get("GPSInfo"))
                .and_then(|r| r.field("GPSMapDatum")),
            Some(&Value::text("WGS-84"))
        );
    }

    #[test]
    fn nothing_in_means_nothing_out() {
        logger();

        assert!(MetadataModel::merge(&[], None).is_empty());
        assert!(MetadataModel::merge(&[], Some(&ResolvedExif::default())).is_empty());
    }
}

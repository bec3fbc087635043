//! # `photometa`
//!
//! Normalizes the metadata embedded in photos into one queryable model.
//!
//! Images tend to carry their metadata twice: once as an XMP packet (XML),
//! and again as Exif (binary tags). This library reads both, names and
//! types every value, then files them under namespaces so you can ask for
//! `dc:subject` or `exif:FNumber` without caring where it came from.
//!
//! Decoding the image container itself isn't done here. Hand over the raw
//! XMP packet and the Exif dictionary your image decoder produced, through
//! a [`MetadataSource`], and you'll get a [`Metadata`] back.
//!
//! ```
//! use photometa::{DecodedImage, Metadata};
//!
//! let image = DecodedImage::new()
//!     .with_filename("beach.jpg")
//!     .with_xmp(br#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
//!         <rdf:Description xmlns:xmp="http://ns.adobe.com/xap/1.0/"
//!             xmp:CreateDate="2023-08-19T17:42:00"/>
//!     </rdf:RDF>"#.to_vec());
//!
//! let metadata = Metadata::new(&image);
//! assert_eq!(metadata.filename(), Some("beach.jpg"));
//! assert_eq!(
//!     metadata.image_info(),
//!     "Date Created: Saturday, August 19, 2023"
//! );
//! ```
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

use photometa_types::{
    exif::RawExifIfd,
    value::{Timestamp, Value},
    xmp::{XmpElement, ns},
};

use crate::{exif::ResolvedExif, model::MetadataModel, xmp::Xmp};

pub mod date;
pub mod exif;
pub mod model;
pub mod search;
pub mod xmp;

/// Re-exports of the value model from `photometa_types`.
pub mod value {
    pub use photometa_types::value::*;
}

/// Something that holds an image's raw metadata.
///
/// Usually, that's an image decoder. Both sources are optional: an image
/// with neither just has an empty model.
pub trait MetadataSource {
    /// The raw XMP packet, if the image has one.
    fn xmp_packet(&self) -> Option<&[u8]>;

    /// The root Exif IFD, with sub-IFDs nested under their pointer tags.
    fn exif(&self) -> Option<&RawExifIfd>;

    /// The image's file name.
    fn filename(&self) -> Option<&str> {
        None
    }
}

/// An owned [`MetadataSource`], for decoders that hand over their metadata
/// as plain values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedImage {
    pub xmp: Option<Vec<u8>>,
    pub exif: Option<RawExifIfd>,
    pub filename: Option<String>,
}

impl DecodedImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_xmp(mut self, packet: impl Into<Vec<u8>>) -> Self {
        self.xmp = Some(packet.into());
        self
    }

    pub fn with_exif(mut self, ifd0: RawExifIfd) -> Self {
        self.exif = Some(ifd0);
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

impl MetadataSource for DecodedImage {
    fn xmp_packet(&self) -> Option<&[u8]> {
        self.xmp.as_deref()
    }

    fn exif(&self) -> Option<&RawExifIfd> {
        self.exif.as_ref()
    }

    fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }
}

/// An image's metadata, merged into one model.
///
/// The model is built once, in [`Metadata::new`], and never changes after.
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    filename: Option<String>,
    model: MetadataModel,
}

impl Metadata {
    /// Reads all metadata from the given source.
    ///
    /// This never fails. A broken XMP packet is logged and left out, but the
    /// Exif is still used (and the other way around).
    pub fn new(source: &impl MetadataSource) -> Self {
        let xmp: Vec<XmpElement> = source.xmp_packet().map(parse_packet).unwrap_or_default();
        let exif: Option<ResolvedExif> = source.exif().map(ResolvedExif::new);

        let model = MetadataModel::merge(&xmp, exif.as_ref());
        log::debug!(
            "Built metadata model with `{}` namespaces.",
            model.namespaces().len()
        );

        Self {
            filename: source.filename().map(Into::into),
            model,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn model(&self) -> &MetadataModel {
        &self.model
    }

    /// See [`MetadataModel::search`].
    pub fn search(&self, prefix_or_uri: Option<&str>, local_name: &str) -> Option<&Value> {
        self.model.search(prefix_or_uri, local_name)
    }

    /// See [`MetadataModel::capture_date`].
    pub fn capture_date(&self) -> Option<Timestamp> {
        self.model.capture_date()
    }

    /// Summarizes the image in a few human-readable lines.
    ///
    /// Lines are only included when there's something to say:
    ///
    /// ```text
    /// Date Created: Saturday, August 19, 2023
    /// Description: Sunset over the bay
    /// Keywords: beach, sunset
    /// Location: Santa Cruz, California
    /// ```
    pub fn image_info(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if let Some(date) = self.capture_date() {
            lines.push(format!("Date Created: {}", date.local.format("%A, %B %d, %Y")));
        }

        let description: Option<String> = self
            .search(Some(ns::DC), "description")
            .and_then(Value::default_alternative)
            .map(ToString::to_string)
            .filter(|d| !d.trim().is_empty());
        if let Some(description) = description {
            lines.push(format!("Description: {description}"));
        }

        let keywords: Vec<String> = match self.search(Some(ns::DC), "subject") {
            Some(subject) => match subject.items() {
                Some(items) => items.iter().map(ToString::to_string).collect(),
                None => vec![subject.to_string()],
            },
            None => Vec::new(),
        };
        let keywords: Vec<String> = keywords.into_iter().filter(|k| !k.trim().is_empty()).collect();
        if !keywords.is_empty() {
            lines.push(format!("Keywords: {}", keywords.join(", ")));
        }

        let location: Vec<String> = [
            (ns::IPTC_CORE, "Location"),
            (ns::PHOTOSHOP, "City"),
            (ns::PHOTOSHOP, "State"),
        ]
        .into_iter()
        .filter_map(|(namespace, name)| self.search(Some(namespace), name))
        .map(ToString::to_string)
        .filter(|part| !part.trim().is_empty())
        .collect();
        if !location.is_empty() {
            lines.push(format!("Location: {}", location.join(", ")));
        }

        lines.join("\n")
    }
}

/// Parses a raw packet, logging and dropping it if it's broken.
fn parse_packet(packet: &[u8]) -> Vec<XmpElement> {
    Xmp::from_bytes(packet)
        .and_then(|xmp| xmp.parse())
        .map(xmp::XmpDocument::into_values)
        .inspect_err(|e| log::error!("Dropping the XMP packet, as it couldn't be parsed. err: {e}"))
        .unwrap_or_default()
}

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use photometa_types::exif::{RawExifIfd, RawExifValue};

    use super::{DecodedImage, Metadata};
    use crate::util::logger;

    #[test]
    fn metadata_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Metadata>();
    }

    #[test]
    fn nothing_in_gives_an_empty_model() {
        logger();

        let metadata = Metadata::new(&DecodedImage::new());
        assert!(metadata.model().is_empty());
        assert_eq!(metadata.filename(), None);
        assert_eq!(metadata.capture_date(), None);
        assert_eq!(metadata.image_info(), "");
    }

    /// Empty values say nothing, so they get no line.
    #[test]
    fn image_info_skips_empty_values() {
        logger();

        let image = DecodedImage::new().with_xmp(
            br#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
            <rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/"
                xmlns:photoshop="http://ns.adobe.com/photoshop/1.0/"
                photoshop:City="" photoshop:State="Oregon">
                <dc:description>
                    <rdf:Alt>
                        <rdf:li xml:lang="x-default"></rdf:li>
                    </rdf:Alt>
                </dc:description>
                <dc:subject>
                    <rdf:Bag/>
                </dc:subject>
            </rdf:Description>
        </rdf:RDF>"#
                .to_vec(),
        );

        assert_eq!(Metadata::new(&image).image_info(), "Location: Oregon");
    }

    #[test]
    fn broken_xmp_keeps_exif() {
        logger();

        let exif: RawExifIfd = [(272, RawExifValue::Text("X100V".into()))].into_iter().collect();
        let image = DecodedImage::new()
            .with_xmp(b"<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"><rdf:RDF".to_vec())
            .with_exif(exif);

        let metadata = Metadata::new(&image);
        assert_eq!(metadata.model().namespaces().len(), 1);
        assert_eq!(
            metadata.search(Some("exif"), "Model").and_then(|v| v.as_text()),
            Some("X100V")
        );
    }
}

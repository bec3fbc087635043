use photometa::{
    DecodedImage, Metadata, MetadataSource,
    exif::{RawExifIfd, RawExifValue, Rational},
    model::{EXIF_NAMESPACE, NamespaceSource},
    value::Value,
};

fn logger() {
    _ = env_logger::builder()
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

const PACKET: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:xmp="http://ns.adobe.com/xap/1.0/"
        xmlns:photoshop="http://ns.adobe.com/photoshop/1.0/"
        xmlns:Iptc4xmpCore="http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/"
        xmlns:dc="http://purl.org/dc/elements/1.1/">
      <xmp:CreateDate>2021-07-04T12:00:00</xmp:CreateDate>
      <photoshop:CreateDate>1990-01-01</photoshop:CreateDate>
      <photoshop:City>Santa Cruz</photoshop:City>
      <photoshop:State>California</photoshop:State>
      <Iptc4xmpCore:Location>Natural Bridges</Iptc4xmpCore:Location>
      <dc:description>
        <rdf:Alt>
          <rdf:li xml:lang="x-default">Sunset over the bay</rdf:li>
        </rdf:Alt>
      </dc:description>
      <dc:subject>
        <rdf:Bag>
          <rdf:li>beach</rdf:li>
          <rdf:li>sunset</rdf:li>
        </rdf:Bag>
      </dc:subject>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

fn exif() -> RawExifIfd {
    let exif_ifd: RawExifIfd = [
        (33437, RawExifValue::Rational(Rational::new(1, 2))),
        (36867, RawExifValue::Text("2021:07:03 19:30:00".into())),
    ]
    .into_iter()
    .collect();

    [
        (271, RawExifValue::Text("Canon".into())),
        (306, RawExifValue::Text("2021:07:05 08:00:00".into())),
        (34665, RawExifValue::Ifd(exif_ifd)),
    ]
    .into_iter()
    .collect()
}

fn image() -> DecodedImage {
    DecodedImage::new()
        .with_filename("IMG_0042.CR3")
        .with_xmp(PACKET.as_bytes())
        .with_exif(exif())
}

#[test]
fn xmp_namespaces_come_before_exif() {
    logger();

    let metadata = Metadata::new(&image());
    let namespaces: Vec<(&str, NamespaceSource)> = metadata
        .model()
        .namespaces()
        .iter()
        .map(|n| (n.prefix(), n.source()))
        .collect();

    assert_eq!(
        namespaces,
        [
            ("xmp", NamespaceSource::Xmp),
            ("photoshop", NamespaceSource::Xmp),
            ("Iptc4xmpCore", NamespaceSource::Xmp),
            ("dc", NamespaceSource::Xmp),
            ("exif", NamespaceSource::Exif),
        ]
    );
}

#[test]
fn search_prefers_the_first_namespace() {
    logger();

    let metadata = Metadata::new(&image());
    assert_eq!(
        metadata
            .search(None, "CreateDate")
            .and_then(Value::as_timestamp)
            .map(ToString::to_string),
        Some("2021-07-04T12:00:00".into())
    );
    assert_eq!(
        metadata.search(Some("photoshop"), "CreateDate"),
        Some(&Value::text("1990-01-01"))
    );
    assert_eq!(
        metadata.search(Some(EXIF_NAMESPACE), "FNumber").and_then(Value::as_real),
        Some(0.5)
    );
    assert_eq!(metadata.search(Some("nope"), "Make"), None);
}

#[test]
fn every_xmp_property_is_searchable() {
    logger();

    let metadata = Metadata::new(&image());
    for (prefix, name) in [
        ("xmp", "CreateDate"),
        ("photoshop", "CreateDate"),
        ("photoshop", "City"),
        ("photoshop", "State"),
        ("Iptc4xmpCore", "Location"),
        ("dc", "description"),
        ("dc", "subject"),
    ] {
        assert!(
            metadata.search(Some(prefix), name).is_some(),
            "`{prefix}:{name}` should be found"
        );
    }
}

#[test]
fn exif_capture_date_wins() {
    logger();

    let metadata = Metadata::new(&image());
    assert_eq!(
        metadata.capture_date().map(|ts| ts.to_string()),
        Some("2021-07-03T19:30:00".into())
    );

    // without Exif, the XMP date is used
    let xmp_only = Metadata::new(&DecodedImage::new().with_xmp(PACKET.as_bytes()));
    assert_eq!(
        xmp_only.capture_date().map(|ts| ts.to_string()),
        Some("2021-07-04T12:00:00".into())
    );
}

/// `xmp` is bound to a custom URI first, then to XMP Basic in a subtree.
#[test]
fn capture_date_survives_rebound_prefixes() {
    logger();

    let packet = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
        <rdf:Description xmlns:xmp="urn:custom/" xmp:Label="mine"/>
        <rdf:Description xmlns:xmp="http://ns.adobe.com/xap/1.0/">
            <xmp:CreateDate>2019-11-02T10:00:00</xmp:CreateDate>
        </rdf:Description>
    </rdf:RDF>"#;

    let metadata = Metadata::new(&DecodedImage::new().with_xmp(packet.as_bytes()));
    assert_eq!(
        metadata.capture_date().map(|ts| ts.to_string()),
        Some("2019-11-02T10:00:00".into())
    );
    assert_eq!(metadata.search(Some("xmp"), "Label"), Some(&Value::text("mine")));
}

#[test]
fn truncated_packet_keeps_exif() {
    logger();

    let truncated: &[u8] = &PACKET.as_bytes()[..PACKET.len() / 2];
    let metadata = Metadata::new(&DecodedImage::new().with_xmp(truncated).with_exif(exif()));

    assert!(
        metadata
            .model()
            .namespaces()
            .iter()
            .all(|n| n.source() != NamespaceSource::Xmp)
    );
    assert_eq!(metadata.search(Some("exif"), "Make"), Some(&Value::text("Canon")));
    assert_eq!(
        metadata.capture_date().map(|ts| ts.to_string()),
        Some("2021-07-03T19:30:00".into())
    );
}

#[test]
fn image_info_summary() {
    logger();

    let metadata = Metadata::new(&image());
    assert_eq!(metadata.filename(), Some("IMG_0042.CR3"));
    assert_eq!(
        metadata.image_info(),
        "Date Created: Saturday, July 03, 2021\n\
        Description: Sunset over the bay\n\
        Keywords: beach, sunset\n\
        Location: Natural Bridges, Santa Cruz, California"
    );
}

#[test]
fn building_twice_is_identical() {
    logger();
    assert_eq!(Metadata::new(&image()), Metadata::new(&image()));
}

/// Decoders can implement the trait themselves, borrowing their buffers.
#[test]
fn custom_sources() {
    logger();

    struct Borrowed<'a> {
        packet: &'a [u8],
    }

    impl MetadataSource for Borrowed<'_> {
        fn xmp_packet(&self) -> Option<&[u8]> {
            Some(self.packet)
        }

        fn exif(&self) -> Option<&RawExifIfd> {
            None
        }
    }

    let metadata = Metadata::new(&Borrowed {
        packet: PACKET.as_bytes(),
    });
    assert_eq!(metadata.filename(), None);
    assert_eq!(
        metadata.search(Some("photoshop"), "City"),
        Some(&Value::text("Santa Cruz"))
    );
}

//! Implements an XMP parser.
//!
//! This module provides functionality to parse XMP (Extensible Metadata
//! Platform) data. XMP is, as the name implies, extensible, so the parser
//! doesn't need to know a namespace to read it. Every property is read
//! generically, using heuristics to find its shape (text, array,
//! alternatives, or struct).
//!
//! In the `photometa_types` crate, there's a table saying how to type the
//! simple values of well-known properties, like `xmp:CreateDate` being a
//! date. Properties missing from the table stay text.
//!
//! If you're looking to type additional properties, please visit the
//! `photometa_types` crate before touching anything here.

use std::collections::BTreeSet;

use photometa_types::xmp::{XmpElement, ns, parse_table::primitive_kind};
use xmltree::{AttributeName, Element};

use crate::xmp::{
    error::XmpError,
    heuristics::{XmpElementHeuristicsExt as _, is_field_attribute},
    value::{XmpElementExt as _, prims::parse_primitive_or_text},
};

pub mod error;
mod heuristics;
mod value;

/// Re-exports of the XMP types from `photometa_types`.
pub mod types {
    pub use photometa_types::xmp::{XmpElement, XmpPrimitiveKind, ns};
}

/// A namespace declared somewhere in the packet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct XmpNamespace {
    pub prefix: String,
    pub uri: String,
}

/// A parsed XMP document.
#[derive(Clone, Debug, PartialEq)]
pub struct XmpDocument {
    elements: Vec<XmpElement>,
    namespaces: Vec<XmpNamespace>,
}

impl XmpDocument {
    /// Returns the XMP properties in this document, in document order.
    ///
    /// For each `rdf:Description`, attribute properties come before element
    /// properties.
    pub fn values_ref(&self) -> &[XmpElement] {
        &self.elements
    }

    /// Returns every namespace declaration in the packet, in document order.
    ///
    /// A prefix may appear twice if a subtree rebinds it to another URI.
    pub fn namespaces(&self) -> &[XmpNamespace] {
        &self.namespaces
    }

    /// Takes the properties out of the document.
    pub fn into_values(self) -> Vec<XmpElement> {
        self.elements
    }
}

/// An XMP parser.
#[derive(Clone, Debug)]
pub struct Xmp {
    document: Element,
}

/// Some writers put a byte-order mark in front of the packet.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl Xmp {
    /// Parses the given raw XML string.
    pub fn new(raw_xml: &str) -> Result<Self, XmpError> {
        let raw_xml = raw_xml.trim_start_matches('\u{FEFF}');

        // grab the document from XML
        let document: Element = Element::parse(raw_xml.as_bytes())
            .inspect_err(|e| log::error!("Failed to parse XMP as XML! err: {e}"))?;

        // save it in the struct for use in the parsing stage
        Ok(Self { document })
    }

    /// Parses an XMP packet from raw bytes.
    ///
    /// The packet must be UTF-8. A leading byte-order mark and trailing NUL
    /// padding are removed first.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, XmpError> {
        let raw: &[u8] = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
        let end: usize = raw.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);

        let s: &str = core::str::from_utf8(&raw[..end]).map_err(|e| {
            log::error!("XMP was not in UTF-8 format! err: {e}");
            XmpError::NotUtf8
        })?;

        Self::new(s)
    }

    /// Returns the underlying XML document.
    pub fn document(&self) -> &Element {
        &self.document
    }

    /// Parses the XMP document and returns a collection of XMP values.
    pub fn parse(&self) -> Result<XmpDocument, XmpError> {
        parse_xmp(self.document())
    }
}

/// Parses the XMP document.
fn parse_xmp(document: &Element) -> Result<XmpDocument, XmpError> {
    // the `rdf:RDF` element is usually the root, or inside `x:xmpmeta`.
    // some writers wrap it further, so search the whole tree
    let rdf: &Element = find_rdf(document).ok_or_else(|| {
        log::error!("Couldn't find an `rdf:RDF` element in the document.");
        XmpError::NoRdfElement
    })?;

    if !core::ptr::eq(rdf, document) {
        match document.is_x_xmpmeta() {
            true => log::debug!("Found `rdf:RDF` inside `x:xmpmeta`."),
            false => log::debug!(
                "Found `rdf:RDF` nested under unexpected root `{}`.",
                document.name
            ),
        }
    }

    // the `rdf:RDF` element should contain "one or more" `rdf:Description`
    // elements. we're fine with zero, though - that's just an empty packet
    let mut elements: Vec<XmpElement> = Vec::new();
    for description in rdf.child_elements() {
        if !description.is_rdf_description() {
            log::warn!(
                "Skipping `{}` inside `rdf:RDF`. Only `rdf:Description` is supported.",
                description.name
            );
            continue;
        }

        // parse the attributes of the `rdf:Description` element.
        //
        // this also ignores `rdf:about`, which is an informational marker w/o
        // data
        elements.extend(field_attributes(description).map(|(key, value)| {
            log::debug!("Parsing attribute `{key}` with value `{value}`.");
            parse_attribute(key, value)
        }));

        // now, parse the sub-elements of the `rdf:Description` element
        elements.extend(description.child_elements().flat_map(parse_element));
    }

    Ok(XmpDocument {
        elements,
        namespaces: collect_namespaces(document),
    })
}

/// Finds the first `rdf:RDF` element, depth-first.
fn find_rdf(element: &Element) -> Option<&Element> {
    if element.is_rdf("RDF") {
        return Some(element);
    }

    element.child_elements().find_map(find_rdf)
}

trait XmpMetaExt {
    fn is_x_xmpmeta(&self) -> bool;
}

impl XmpMetaExt for Element {
    fn is_x_xmpmeta(&self) -> bool {
        self.name == "xmpmeta" && self.namespace.as_deref() == Some(ns::X)
    }
}

/// Parses an element's attribute into an `XmpElement`.
///
/// As an attribute, this can only be a "simple, unqualified property", so
/// it's always a primitive.
fn parse_attribute(key: &AttributeName, value: &str) -> XmpElement {
    let namespace: &str = key.namespace_ref().unwrap_or_default();

    XmpElement {
        namespace: namespace.into(),
        prefix: key.prefix.clone().unwrap_or_else(|| namespace.into()),
        name: key.local_name.clone(),
        value: photometa_types::value::Value::Scalar(parse_primitive_or_text(
            value.into(),
            &primitive_kind(namespace, &key.local_name),
        )),
    }
}

/// Parses an individual XMP property element into an `XmpElement`.
fn parse_element(element: &Element) -> Option<XmpElement> {
    log::trace!("Parsing element `{}`.", element.name);

    // a namespace is required for a property.
    //
    // let's ensure this `Element` has one!
    let Some(namespace) = element.namespace.as_deref() else {
        log::warn!(
            "Element `{name}` has no namespace. Cannot continue parsing as a property.",
            name = element.name
        );
        return None;
    };

    // RDF syntax isn't a property
    if namespace == ns::RDF {
        log::trace!("Skipping RDF syntax element `rdf:{}`.", element.name);
        return None;
    }

    Some(XmpElement {
        namespace: namespace.into(),
        prefix: element_prefix(element),
        name: element.name.clone(),
        value: element.value_generic((namespace, element.name.as_str())),
    })
}

/// Finds the prefix to file an element under.
///
/// Elements in a default (unprefixed) namespace take any prefix declared for
/// the same URI. When there isn't one, the URI itself is the prefix.
pub(crate) fn element_prefix(element: &Element) -> String {
    if let Some(prefix) = element.prefix.as_ref().filter(|p| !p.is_empty()) {
        return prefix.clone();
    }

    let Some(namespace) = element.namespace.as_deref() else {
        return String::new();
    };

    let declared: Option<String> = element.namespaces.as_ref().and_then(|scope| {
        scope
            .0
            .iter()
            .find(|(prefix, uri)| is_declared_prefix(prefix, uri) && uri.as_str() == namespace)
            .map(|(prefix, _)| prefix.clone())
    });

    declared.unwrap_or_else(|| {
        log::debug!("No prefix is declared for `{namespace}`. Using the URI as its prefix.");
        namespace.into()
    })
}

/// Grabs the value-carrying attributes of an element.
///
/// Attributes aren't ordered in XML, so these are sorted by namespace and
/// name. That keeps repeated parses identical.
pub(crate) fn field_attributes(element: &Element) -> impl Iterator<Item = (&AttributeName, &str)> {
    let mut attrs: Vec<(&AttributeName, &str)> = element
        .attributes
        .iter()
        .filter(|(key, _)| {
            let keep = is_field_attribute(key);
            if !keep {
                log::trace!("Attribute `{key}` isn't a property. Skipping...");
            }
            keep
        })
        .map(|(key, value)| (key, value.as_str()))
        .collect();

    attrs.sort_by(|(a, _), (b, _)| {
        (a.namespace_ref(), a.local_name.as_str()).cmp(&(b.namespace_ref(), b.local_name.as_str()))
    });

    attrs.into_iter()
}

/// Grabs all namespace declarations in the document, in document order.
fn collect_namespaces(root: &Element) -> Vec<XmpNamespace> {
    fn walk(element: &Element, seen: &mut BTreeSet<(String, String)>, out: &mut Vec<XmpNamespace>) {
        if let Some(scope) = element.namespaces.as_ref() {
            for (prefix, uri) in scope.0.iter() {
                if !is_declared_prefix(prefix, uri) {
                    continue;
                }

                if seen.insert((prefix.clone(), uri.clone())) {
                    out.push(XmpNamespace {
                        prefix: prefix.clone(),
                        uri: uri.clone(),
                    });
                }
            }
        }

        for child in element.child_elements() {
            walk(child, seen, out);
        }
    }

    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    walk(root, &mut seen, &mut out);
    out
}

/// Whether a scope entry is a real declaration, rather than one of XML's
/// built-in bindings or a default namespace.
fn is_declared_prefix(prefix: &str, uri: &str) -> bool {
    !prefix.is_empty() && prefix != "xml" && prefix != "xmlns" && !uri.is_empty()
}

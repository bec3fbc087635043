//! This module assists in guessing the shape of an XML element.
//!
//! XMP isn't self-describing, so we look at an element's attributes and
//! children to decide whether it holds text, a container, or a struct.

use photometa_types::xmp::ns::{RDF as RDF_NAMESPACE, XML as XML_NAMESPACE};
use xmltree::{AttributeName, Element};

pub trait XmpElementHeuristicsExt {
    fn is_struct(&self) -> bool;
    fn is_rdf_description(&self) -> bool;
    fn is_rdf(&self, name: &str) -> bool;
    fn has_collection(&self) -> Option<(&Element, CollectionKind)>;
    fn rdf_attribute(&self, name: &str) -> Option<&str>;
    fn child_elements(&self) -> impl Iterator<Item = &Element>;
}

impl XmpElementHeuristicsExt for Element {
    fn is_rdf(&self, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(RDF_NAMESPACE)
    }

    fn is_rdf_description(&self) -> bool {
        self.is_rdf("Description")
    }

    /// Determines whether or not `self` is a struct.
    fn is_struct(&self) -> bool {
        // if we have the `rdf:parseType="Resource"`, we must be a struct.
        if self.rdf_attribute("parseType") == Some("Resource") {
            return true;
        }

        // if any of our children are `rdf:Description`, we carry fields and
        // must be a struct
        if self.child_elements().any(|c| c.is_rdf_description()) {
            return true;
        }

        // named child elements that aren't RDF syntax are fields
        if self
            .child_elements()
            .any(|c| c.namespace.as_deref() != Some(RDF_NAMESPACE))
        {
            return true;
        }

        // if we have fields and no sub-elements, we're considered a struct
        if self.child_elements().next().is_none() // we have no sub-elements
            && self.attributes.keys().any(is_field_attribute)
        {
            return true;
        }

        false
    }

    fn has_collection(&self) -> Option<(&Element, CollectionKind)> {
        self.child_elements()
            .filter(|c| c.namespace.as_deref() == Some(RDF_NAMESPACE))
            .find_map(|c| match c.name.as_str() {
                "Alt" => Some((c, CollectionKind::Alternatives)),
                "Bag" => Some((c, CollectionKind::Unordered)),
                "Seq" => Some((c, CollectionKind::Ordered)),
                _ => None,
            })
    }

    /// Grabs the value of an attribute in the RDF namespace.
    fn rdf_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| {
                key.local_name == name && key.namespace_ref().is_some_and(|ns| ns == RDF_NAMESPACE)
            })
            .map(|(_, value)| value.as_str())
    }

    fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().flat_map(|c| c.as_element())
    }
}

/// Whether an attribute carries a value, rather than RDF or XML syntax.
///
/// Unqualified attributes don't belong to any namespace, so they can't be
/// properties either.
pub fn is_field_attribute(key: &AttributeName) -> bool {
    match key.namespace_ref() {
        Some(ns) => ns != RDF_NAMESPACE && ns != XML_NAMESPACE,
        None => false,
    }
}

/// Whether an attribute is the `xml:lang` qualifier.
pub fn is_lang_attribute(key: &AttributeName) -> bool {
    key.local_name == "lang"
        && (key.prefix.as_deref() == Some("xml") || key.namespace_ref() == Some(XML_NAMESPACE))
}

/// The kind of collection we've detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    Alternatives,
    Unordered,
    Ordered,
}

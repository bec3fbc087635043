use photometa_types::{
    value::Value,
    xmp::parse_table::primitive_kind,
};
use xmltree::Element;

use crate::xmp::{
    heuristics::{CollectionKind, XmpElementHeuristicsExt as _},
    value::{
        arrays::{value_alternatives, value_array},
        prims::parse_primitive_or_text,
        structs::value_struct,
    },
};

pub mod arrays;
pub mod prims;
pub mod structs;

/// The `(namespace, name)` of a property, used to type its simple values.
pub type PropertyKey<'a> = (&'a str, &'a str);

pub trait XmpElementExt {
    /// Grabs a `Value` from an element, guessing its shape from its
    /// attributes and children.
    ///
    /// Simple values are typed according to `key`. For a property, that's its
    /// own namespace and name. For an `rdf:li`, it's the enclosing property's.
    fn value_generic(&self, key: PropertyKey<'_>) -> Value;

    /// The element's text, typed according to `key`.
    fn value_text(&self, key: PropertyKey<'_>) -> Value;
}

impl XmpElementExt for Element {
    fn value_generic(&self, key: PropertyKey<'_>) -> Value {
        log::trace!("Parsing element: `{}`", self.name);

        // this is a generic element parser. it's infallible, determining the
        // metadata's inner types using basic heuristics in this order:
        //
        // - elements pointing elsewhere with `rdf:resource` become the URI.
        // - elements without inner elements or attributes become a typed
        //   primitive. with no inner text, they'll wrap an empty string.
        // - elements that look like structs become records.
        // - elements with inner collections become the matching array type.
        // - anything else becomes its text.

        // 1. a reference to another resource. the URI is the value
        if let Some(uri) = self.rdf_attribute("resource") {
            log::trace!("Element `{}` refers to resource `{uri}`.", self.name);
            return Value::text(uri);
        }

        // 2. if we have no children and no attributes, try to parse ourself as
        // a primitive
        if self.child_elements().next().is_none() && self.attributes.is_empty() {
            return self.value_text(key);
        }

        // 3. if we're a struct, we can parse ourself recursively
        if self.is_struct() {
            return value_struct(self);
        }

        // 4. check for various collection types
        if let Some((collection, kind)) = self.has_collection() {
            return match kind {
                CollectionKind::Alternatives => value_alternatives(collection, key),
                CollectionKind::Unordered => value_array(collection, key, false),
                CollectionKind::Ordered => value_array(collection, key, true),
            };
        }

        // 5. we're out of ideas, so use whatever text we have
        log::trace!(
            "We don't have other useful info, so attempting to \
            parse `{}` as text...",
            self.name
        );
        self.value_text(key)
    }

    fn value_text(&self, (namespace, name): PropertyKey<'_>) -> Value {
        let text: String = self.get_text().map(|t| t.into_owned()).unwrap_or_default();
        Value::Scalar(parse_primitive_or_text(text, &primitive_kind(namespace, name)))
    }
}

use photometa_types::value::{Alternative, Value};
use xmltree::Element;

use crate::xmp::{
    heuristics::{XmpElementHeuristicsExt as _, is_lang_attribute},
    value::{PropertyKey, XmpElementExt as _},
};

/// Parses a collection's value as a list of alternatives.
///
/// These are generally represented by `rdf:Alt`, with each inner `rdf:li`
/// storing one possible display value.
///
/// Alternative collections usually look like the following:
///
/// ```xml
/// <ns:element>
///     <rdf:Alt>
///         <rdf:li xml:lang="x-default">XMP - Extensible Metadata Platform</rdf:li>
///         <rdf:li xml:lang="en-us">XMP - Extensible Metadata Platform</rdf:li>
///         <rdf:li xml:lang="fr-fr">XMP - Une Platforme Extensible pour les Métadonnées</rdf:li>
///         <rdf:li xml:lang="it-it">XMP - Piattaforma Estendibile di Metadata</rdf:li>
///     </rdf:Alt>
/// </ns:element>
/// ```
///
/// Every entry is kept, along with its `xml:lang` tag. Picking one (usually
/// `x-default`) is left to [`Value::default_alternative`].
pub fn value_alternatives(alt: &Element, key: PropertyKey<'_>) -> Value {
    let list = list_items(alt)
        .map(|li| {
            let lang: Option<String> = li
                .attributes
                .iter()
                .find(|(attr_key, _)| is_lang_attribute(attr_key))
                .map(|(_, lang)| lang.clone());

            if lang.is_none() {
                log::trace!("`rdf:li` in `rdf:Alt` has no `xml:lang` tag.");
            }

            Alternative {
                lang,
                value: li.value_generic(key),
            }
        })
        .collect();

    Value::Alternatives(list)
}

/// Parses a collection's value as an array of XMP values.
///
/// `ordered` is `true` for `rdf:Seq`, `false` for `rdf:Bag`.
///
/// An array will look like the following:
///
/// ```xml
/// <ns:element>
///      <rdf:Bag>
///          <rdf:li>oswald</rdf:li>
///          <rdf:li>miranda</rdf:li>
///          <rdf:li>natalie</rdf:li>
///          <rdf:li>izzy</rdf:li>
///          <rdf:li> ... </rdf:li>
///      </rdf:Bag>
/// </ns:element>
/// ```
pub fn value_array(collection: &Element, key: PropertyKey<'_>, ordered: bool) -> Value {
    let items: Vec<Value> = list_items(collection)
        .map(|li| li.value_generic(key))
        .collect();

    match ordered {
        true => Value::OrderedList(items),
        false => Value::UnorderedSet(items),
    }
}

/// Grabs each `rdf:li` inside a collection, in document order.
fn list_items(collection: &Element) -> impl Iterator<Item = &Element> {
    collection.child_elements().filter(|maybe_li| {
        let is_li = maybe_li.is_rdf("li");
        if !is_li {
            log::warn!(
                "sub-element of `rdf:{}` was expected to be `rdf:li`. \
                    Skipping element `{}`...",
                collection.name,
                maybe_li.name
            );
        }
        is_li
    })
}

use photometa_types::value::{RecordField, Value};
use xmltree::Element;

use crate::xmp::{
    element_prefix, field_attributes,
    heuristics::XmpElementHeuristicsExt as _,
    value::{XmpElementExt as _, prims::parse_primitive_or_text},
};

/// Parses an element as a struct with fields.
///
/// Each field is parsed recursively. Fields come from, in order:
///
/// - the element's own attributes (shorthand form),
/// - an inner `rdf:Description`'s attributes, if there is one,
/// - child elements of the inner `rdf:Description`, or, for
///   `rdf:parseType="Resource"` and plain nested form, of the element itself.
pub fn value_struct(element: &Element) -> Value {
    log::trace!("Parsing struct `{}`...", element.name);

    let mut fields: Vec<RecordField> = attribute_fields(element).collect();

    // find where the fields are stored
    let container: &Element = match element.child_elements().find(|c| c.is_rdf_description()) {
        Some(description) => {
            fields.extend(attribute_fields(description));
            description
        }
        None => element,
    };

    fields.extend(
        container
            .child_elements()
            .filter(|c| {
                if c.is_rdf_description() {
                    log::warn!(
                        "Struct `{}` has more than one `rdf:Description`. Skipping extras...",
                        element.name
                    );
                    return false;
                }
                true
            })
            .map(|c| {
                log::trace!(
                    "Parsing inner field `{inner_field_name}` on struct `{struct_name}`...",
                    inner_field_name = &c.name,
                    struct_name = &element.name
                );

                let namespace: &str = c.namespace.as_deref().unwrap_or_default();
                RecordField {
                    namespace: namespace.into(),
                    prefix: element_prefix(c),
                    name: c.name.clone(),
                    value: c.value_generic((namespace, c.name.as_str())),
                }
            }),
    );

    Value::Record(fields)
}

/// Makes a field for each value-carrying attribute on `element`.
fn attribute_fields(element: &Element) -> impl Iterator<Item = RecordField> + '_ {
    field_attributes(element).map(|(key, value)| {
        let namespace: &str = key.namespace_ref().unwrap_or_default();
        RecordField {
            namespace: namespace.into(),
            prefix: key.prefix.clone().unwrap_or_else(|| namespace.into()),
            name: key.local_name.clone(),
            value: Value::Scalar(parse_primitive_or_text(
                value.to_owned(),
                &photometa_types::xmp::parse_table::primitive_kind(namespace, &key.local_name),
            )),
        }
    })
}

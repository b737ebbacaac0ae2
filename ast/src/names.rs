//! Shape identifier → declaration name mapping.
//!
//! Deterministic conversions from IRIs and blank-node labels to the names
//! object types and properties carry downstream.

use shapec_shapes::Identifier;

/// Extracts the local name from a full IRI (after the last `/` or `#`).
pub fn local_name(iri: &str) -> &str {
    let after_slash = iri.rsplit('/').next().unwrap_or(iri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}

fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        // Split before an uppercase letter that follows a lowercase letter or digit.
        if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        prev = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a label into a PascalCase type name.
pub fn to_pascal_case(s: &str) -> String {
    let name: String = words(s).iter().map(|w| capitalize(w)).collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Converts a label into a camelCase property name.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some('_') => pascal,
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}

/// Default name of an object type declared by the node shape `identifier`.
///
/// IRIs use their local name with a trailing `Shape` dropped
/// (`ex:PersonShape` → `Person`). Blank nodes get a name derived from their
/// label so the result is stable for a given parse.
pub fn object_type_name(identifier: &Identifier) -> String {
    match identifier {
        Identifier::Iri(iri) => {
            let name = to_pascal_case(local_name(iri));
            match name.strip_suffix("Shape") {
                Some(stem) if !stem.is_empty() => stem.to_owned(),
                _ => name,
            }
        }
        Identifier::BlankNode(label) => format!("Anonymous{}", to_pascal_case(label)),
    }
}

/// Default name of a property whose path predicate is `predicate`.
pub fn property_name(predicate: &str) -> String {
    to_camel_case(local_name(predicate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_extraction() {
        assert_eq!(local_name("http://example.com/shapes/Person"), "Person");
        assert_eq!(
            local_name("http://www.w3.org/2001/XMLSchema#string"),
            "string"
        );
    }

    #[test]
    fn case_conversion() {
        assert_eq!(to_pascal_case("postal-address"), "PostalAddress");
        assert_eq!(to_pascal_case("givenName"), "GivenName");
        assert_eq!(to_camel_case("GivenName"), "givenName");
        assert_eq!(to_camel_case("date_of_birth"), "dateOfBirth");
        assert_eq!(to_pascal_case("3d"), "_3d");
    }

    #[test]
    fn object_type_names() {
        assert_eq!(
            object_type_name(&Identifier::iri("http://example.com/PersonShape")),
            "Person"
        );
        assert_eq!(
            object_type_name(&Identifier::iri("http://example.com/Shape")),
            "Shape"
        );
        assert_eq!(
            object_type_name(&Identifier::blank_node("b0")),
            "AnonymousB0"
        );
    }
}

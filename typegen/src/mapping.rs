//! Datatype → literal type mapping tables.
//!
//! Deterministic mappings from XSD and RDF datatype IRIs to the specialized
//! literal type that represents their values.

use shapec_shapes::model::iris::*;

/// The specialized representation a literal datatype maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatatypeClass {
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:date`.
    Date,
    /// `xsd:dateTime`.
    DateTime,
    /// An XSD number whose values are integers.
    Integer,
    /// An XSD number whose values are decimals or floats.
    Float,
    /// A datatype whose lexical form is the value.
    String,
    /// `rdf:langString`: kept as a generic literal.
    LangString,
    /// Anything else.
    Unrecognized,
}

/// XSD datatypes whose values are integers.
pub const INTEGER_DATATYPES: [&str; 13] = [
    XSD_BYTE,
    XSD_INT,
    XSD_INTEGER,
    XSD_LONG,
    XSD_NEGATIVE_INTEGER,
    XSD_NON_NEGATIVE_INTEGER,
    XSD_NON_POSITIVE_INTEGER,
    XSD_POSITIVE_INTEGER,
    XSD_SHORT,
    XSD_UNSIGNED_BYTE,
    XSD_UNSIGNED_INT,
    XSD_UNSIGNED_LONG,
    XSD_UNSIGNED_SHORT,
];

/// XSD datatypes whose values are floating point.
pub const FLOAT_DATATYPES: [&str; 3] = [XSD_DECIMAL, XSD_DOUBLE, XSD_FLOAT];

/// Datatypes represented by their lexical form.
pub const STRING_DATATYPES: [&str; 3] = [XSD_ANY_URI, XSD_STRING, RDF_HTML];

/// Maps a datatype IRI to its literal class.
pub fn classify(datatype: &str) -> DatatypeClass {
    match datatype {
        XSD_BOOLEAN => DatatypeClass::Boolean,
        XSD_DATE => DatatypeClass::Date,
        XSD_DATETIME => DatatypeClass::DateTime,
        RDF_LANG_STRING => DatatypeClass::LangString,
        dt if INTEGER_DATATYPES.contains(&dt) => DatatypeClass::Integer,
        dt if FLOAT_DATATYPES.contains(&dt) => DatatypeClass::Float,
        dt if STRING_DATATYPES.contains(&dt) => DatatypeClass::String,
        _ => DatatypeClass::Unrecognized,
    }
}

//! Literal type specialization.
//!
//! A literal description is classified by the set of distinct datatypes it
//! mentions: its fixed `sh:datatype`, and the datatypes of its default,
//! `sh:hasValue` and `sh:in` values. Exactly one recognized datatype yields
//! a specialized type with coerced values; anything else yields a generic
//! literal type. Only an unrecognized or ambiguous datatype set is logged.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use shapec_ast::LiteralDescription;
use shapec_shapes::model::iris::XSD_DECIMAL;
use shapec_shapes::{Literal, Term};
use tracing::warn;

use crate::mapping::{classify, DatatypeClass};
use crate::types::{GenericLiteralType, LiteralType, Number, NumberKind, NumberType, Type};

/// Classifies `description` into a specialized or generic literal type.
pub fn specialize(description: &LiteralDescription) -> Type {
    let datatypes = datatypes(description);
    let mut iter = datatypes.iter();
    let (Some(datatype), None) = (iter.next(), iter.next()) else {
        if datatypes.len() > 1 {
            warn!(
                datatypes = ?datatypes,
                "literal mixes datatypes; using a generic literal type"
            );
        }
        return generic(description, datatypes);
    };

    match classify(datatype) {
        DatatypeClass::Boolean => Type::Boolean(coerce(description, datatype, boolean)),
        DatatypeClass::Date => Type::Date(coerce(description, datatype, date)),
        DatatypeClass::DateTime => Type::DateTime(coerce(description, datatype, date_time)),
        DatatypeClass::Integer => Type::Number(NumberType {
            kind: NumberKind::Integer,
            literal: coerce(description, datatype, |l| {
                let lexical = l.lexical_form.trim();
                integer(l).map(Number::Integer).or_else(|| {
                    if is_integer_lexical(lexical) {
                        lexical.parse().ok().map(Number::Float)
                    } else {
                        None
                    }
                })
            }),
        }),
        DatatypeClass::Float => Type::Number(NumberType {
            kind: NumberKind::Float,
            literal: if datatype == XSD_DECIMAL {
                coerce(description, datatype, |l| decimal(l).map(Number::Float))
            } else {
                coerce(description, datatype, |l| float(l).map(Number::Float))
            },
        }),
        DatatypeClass::String => {
            Type::String(coerce(description, datatype, |l| Some(l.lexical_form.clone())))
        }
        DatatypeClass::LangString => generic(description, datatypes),
        DatatypeClass::Unrecognized => {
            warn!(
                datatype = %datatype,
                "unrecognized literal datatype; using a generic literal type"
            );
            generic(description, datatypes)
        }
    }
}

fn literals(terms: &[Term]) -> impl Iterator<Item = &Literal> {
    terms.iter().filter_map(Term::as_literal)
}

fn datatypes(description: &LiteralDescription) -> BTreeSet<String> {
    description
        .datatype
        .iter()
        .cloned()
        .chain(
            description
                .default_value
                .iter()
                .filter_map(Term::as_literal)
                .chain(literals(&description.has_values))
                .chain(literals(&description.in_))
                .map(|literal| literal.datatype.clone()),
        )
        .collect()
}

fn coerce<T>(
    description: &LiteralDescription,
    datatype: &str,
    value: impl Fn(&Literal) -> Option<T>,
) -> LiteralType<T> {
    LiteralType {
        datatype: datatype.to_owned(),
        default_value: description
            .default_value
            .as_ref()
            .and_then(Term::as_literal)
            .and_then(&value),
        has_values: literals(&description.has_values).filter_map(&value).collect(),
        in_: literals(&description.in_).filter_map(&value).collect(),
    }
}

fn generic(description: &LiteralDescription, datatypes: BTreeSet<String>) -> Type {
    Type::Literal(GenericLiteralType {
        datatypes,
        default_value: description
            .default_value
            .as_ref()
            .and_then(Term::as_literal)
            .cloned(),
        has_values: literals(&description.has_values).cloned().collect(),
        in_: literals(&description.in_).cloned().collect(),
        language_in: description.language_in.clone(),
    })
}

/// `xsd:boolean` lexical space: `true`, `false`, `1`, `0`.
pub fn boolean(literal: &Literal) -> Option<bool> {
    match literal.lexical_form.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parses an integer lexical form. Integers outside the `i128` range are
/// `None`; [`specialize`] keeps those as approximate floats.
pub fn integer(literal: &Literal) -> Option<i128> {
    let lexical = literal.lexical_form.trim();
    if !is_integer_lexical(lexical) {
        return None;
    }
    lexical.parse().ok()
}

/// Parses an `xsd:decimal` lexical form. No exponent, no special values.
pub fn decimal(literal: &Literal) -> Option<f64> {
    let lexical = literal.lexical_form.trim();
    if !is_decimal_lexical(lexical) {
        return None;
    }
    lexical.parse().ok()
}

/// Parses an `xsd:double` or `xsd:float` lexical form, including `INF`,
/// `-INF` and `NaN`.
pub fn float(literal: &Literal) -> Option<f64> {
    match literal.lexical_form.trim() {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        lexical => {
            let mantissa = match lexical.split_once(['e', 'E']) {
                Some((mantissa, exponent)) => {
                    if !is_integer_lexical(exponent) {
                        return None;
                    }
                    mantissa
                }
                None => lexical,
            };
            if !is_decimal_lexical(mantissa) {
                return None;
            }
            lexical.parse().ok()
        }
    }
}

fn unsigned(lexical: &str) -> &str {
    lexical
        .strip_prefix(['+', '-'])
        .unwrap_or(lexical)
}

fn is_digits(lexical: &str) -> bool {
    lexical.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?[0-9]+`
fn is_integer_lexical(lexical: &str) -> bool {
    let digits = unsigned(lexical);
    !digits.is_empty() && is_digits(digits)
}

/// `[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)`
fn is_decimal_lexical(lexical: &str) -> bool {
    let (whole, fraction) = match unsigned(lexical).split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned(lexical), ""),
    };
    !(whole.is_empty() && fraction.is_empty()) && is_digits(whole) && is_digits(fraction)
}

/// Parses an `xsd:date`, ignoring any timezone suffix.
pub fn date(literal: &Literal) -> Option<NaiveDate> {
    let lexical = literal.lexical_form.trim();
    NaiveDate::parse_from_str(lexical, "%Y-%m-%d").ok().or_else(|| {
        lexical
            .get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
    })
}

/// Parses an `xsd:dateTime`. Values without an offset are taken as UTC.
pub fn date_time(literal: &Literal) -> Option<DateTime<FixedOffset>> {
    let lexical = literal.lexical_form.trim();
    DateTime::parse_from_rfc3339(lexical).ok().or_else(|| {
        NaiveDateTime::parse_from_str(lexical, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use shapec_shapes::model::iris::*;

    fn typed(lexical: &str, datatype: &str) -> Term {
        Term::Literal(Literal::typed(lexical, datatype))
    }

    fn fixed(datatype: &str) -> LiteralDescription {
        LiteralDescription {
            datatype: Some(datatype.to_owned()),
            ..LiteralDescription::default()
        }
    }

    #[test]
    fn classification_table() {
        let cases: [(LiteralDescription, &str); 7] = [
            (fixed(XSD_BOOLEAN), "Boolean"),
            (fixed(XSD_DATE), "Date"),
            (fixed(XSD_INTEGER), "Number"),
            (fixed(XSD_STRING), "String"),
            (
                LiteralDescription {
                    datatype: Some(XSD_STRING.to_owned()),
                    in_: vec![typed("1", XSD_INTEGER)],
                    ..LiteralDescription::default()
                },
                "Literal",
            ),
            (LiteralDescription::default(), "Literal"),
            (fixed(RDF_LANG_STRING), "Literal"),
        ];
        for (description, expected) in cases {
            assert_eq!(specialize(&description).kind(), expected, "{description:?}");
        }
    }

    #[test]
    fn integer_family_coerces_to_integers() {
        let description = LiteralDescription {
            datatype: Some(XSD_NON_NEGATIVE_INTEGER.to_owned()),
            default_value: Some(typed("7", XSD_NON_NEGATIVE_INTEGER)),
            in_: vec![
                typed("1", XSD_NON_NEGATIVE_INTEGER),
                typed("2", XSD_NON_NEGATIVE_INTEGER),
            ],
            ..LiteralDescription::default()
        };
        let Type::Number(number) = specialize(&description) else {
            panic!("expected a number type");
        };
        assert_eq!(number.kind, NumberKind::Integer);
        assert_eq!(number.literal.default_value, Some(Number::Integer(7)));
        assert_eq!(
            number.literal.in_,
            vec![Number::Integer(1), Number::Integer(2)]
        );
    }

    #[test]
    fn integers_beyond_i64_are_kept() {
        let description = LiteralDescription {
            datatype: Some(XSD_UNSIGNED_LONG.to_owned()),
            in_: vec![
                typed("18446744073709551615", XSD_UNSIGNED_LONG),
                typed("1", XSD_UNSIGNED_LONG),
                typed("lots", XSD_UNSIGNED_LONG),
                typed("1000000000000000000000000000000000000000000", XSD_UNSIGNED_LONG),
            ],
            ..LiteralDescription::default()
        };
        let Type::Number(number) = specialize(&description) else {
            panic!("expected a number type");
        };
        assert_eq!(
            number.literal.in_,
            vec![
                Number::Integer(18_446_744_073_709_551_615),
                Number::Integer(1),
                Number::Float(1e42),
            ]
        );
    }

    #[test]
    fn float_lexical_forms_follow_xsd() {
        let double = |lexical: &str| float(&Literal::typed(lexical, XSD_DOUBLE));
        assert_eq!(double("-1.5E3"), Some(-1500.0));
        assert_eq!(double(".5"), Some(0.5));
        assert_eq!(double("INF"), Some(f64::INFINITY));
        assert!(double("NaN").unwrap().is_nan());
        for rejected in ["inf", "infinity", "nan", "Infinity", "1e", "e5", ".", "0x10"] {
            assert_eq!(double(rejected), None, "{rejected}");
        }

        let dec = |lexical: &str| decimal(&Literal::typed(lexical, XSD_DECIMAL));
        assert_eq!(dec("+12.50"), Some(12.5));
        assert_eq!(dec("3."), Some(3.0));
        for rejected in ["INF", "NaN", "1e3", "inf", ""] {
            assert_eq!(dec(rejected), None, "{rejected}");
        }
        assert_eq!(integer(&Literal::typed("+42", XSD_INTEGER)), Some(42));
        assert_eq!(integer(&Literal::typed("4.2", XSD_INTEGER)), None);
    }

    #[test]
    fn non_coercible_values_are_dropped() {
        let description = LiteralDescription {
            datatype: Some(XSD_BOOLEAN.to_owned()),
            has_values: vec![typed("maybe", XSD_BOOLEAN), typed("1", XSD_BOOLEAN)],
            default_value: Some(typed("yes", XSD_BOOLEAN)),
            ..LiteralDescription::default()
        };
        let Type::Boolean(boolean) = specialize(&description) else {
            panic!("expected a boolean type");
        };
        assert_eq!(boolean.default_value, None);
        assert_eq!(boolean.has_values, vec![true]);
    }

    #[test]
    fn datatype_can_come_from_values_alone() {
        let description = LiteralDescription {
            in_: vec![typed("1.5", XSD_DOUBLE), typed("INF", XSD_DOUBLE)],
            ..LiteralDescription::default()
        };
        let Type::Number(number) = specialize(&description) else {
            panic!("expected a number type");
        };
        assert_eq!(number.kind, NumberKind::Float);
        assert_eq!(
            number.literal.in_,
            vec![Number::Float(1.5), Number::Float(f64::INFINITY)]
        );
    }

    #[test]
    fn calendar_values() {
        assert_eq!(
            date(&Literal::typed("2024-02-29Z", XSD_DATE)),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(date(&Literal::typed("2023-02-29", XSD_DATE)), None);

        let offset = date_time(&Literal::typed("2024-01-01T10:00:00+02:00", XSD_DATETIME)).unwrap();
        assert_eq!(offset.offset().local_minus_utc(), 2 * 3600);
        let naive = date_time(&Literal::typed("2024-01-01T10:00:00", XSD_DATETIME)).unwrap();
        assert_eq!(naive.offset().local_minus_utc(), 0);
    }

    #[test]
    fn strings_keep_lexical_form() {
        let description = LiteralDescription {
            datatype: Some(XSD_ANY_URI.to_owned()),
            default_value: Some(typed("http://example.com/", XSD_ANY_URI)),
            ..LiteralDescription::default()
        };
        let Type::String(string) = specialize(&description) else {
            panic!("expected a string type");
        };
        assert_eq!(string.default_value.as_deref(), Some("http://example.com/"));
    }

    #[test]
    fn lang_strings_keep_their_values() {
        let description = LiteralDescription {
            in_: vec![Term::Literal(Literal::lang_string("chat", "fr"))],
            language_in: vec!["fr".to_owned()],
            ..LiteralDescription::default()
        };
        let Type::Literal(literal) = specialize(&description) else {
            panic!("expected a generic literal type");
        };
        assert_eq!(literal.in_.len(), 1);
        assert_eq!(literal.language_in, vec!["fr".to_owned()]);
        assert!(literal.datatypes.contains(RDF_LANG_STRING));
    }
}

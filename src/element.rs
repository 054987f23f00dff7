use std::fmt::Display;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// A single value living on one of the typed stacks.
///
/// The union is closed: every operation that reads an element matches on it
/// exhaustively, and there is no implicit coercion between variants.
/// Converting between kinds is always an explicit stack operation.
///
/// Serialized as a bare JSON value. Non-finite floats, which JSON numbers
/// cannot hold, are written as the strings `"inf"`, `"-inf"` and `"nan"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// The kinds of stacks the interpreter knows how to build.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    Integer,
    Float,
    Boolean,
}

impl ElementKind {
    /// Name of the stack holding elements of this kind.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Parses a literal token into an element of this kind.
    ///
    /// The lexical shape has already been checked by the parser, so this only
    /// fails when the value is out of range (`99999999999999999999`).
    pub fn parse_literal(&self, token: &str) -> Option<Element> {
        match self {
            ElementKind::Integer => token.parse::<i64>().ok().map(Element::Integer),
            ElementKind::Float => token
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Element::Float),
            ElementKind::Boolean => match token {
                "true" => Some(Element::Boolean(true)),
                "false" => Some(Element::Boolean(false)),
                _ => None,
            },
        }
    }

    /// `e` as an element of this kind. Integers widen to floats, since a
    /// JSON `1` on a float stack means `1.0`. Anything else must already
    /// have this kind.
    pub fn adopt(&self, e: Element) -> Option<Element> {
        match (self, e) {
            (ElementKind::Float, Element::Integer(i)) => Some(Element::Float(i as f64)),
            _ if e.kind() == *self => Some(e),
            _ => None,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Integer(_) => ElementKind::Integer,
            Element::Float(_) => ElementKind::Float,
            Element::Boolean(_) => ElementKind::Boolean,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Integer(i) => write!(f, "{}", i),
            Element::Float(x) => write!(f, "{:?}", x),
            Element::Boolean(b) => write!(f, "{}", b),
        }
    }
}

fn non_finite_name(x: f64) -> &'static str {
    if x.is_nan() {
        "nan"
    } else if x > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Element::Integer(i) => serializer.serialize_i64(i),
            Element::Float(x) if x.is_finite() => serializer.serialize_f64(x),
            Element::Float(x) => serializer.serialize_str(non_finite_name(x)),
            Element::Boolean(b) => serializer.serialize_bool(b),
        }
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ElementVisitor;

        impl<'de> Visitor<'de> for ElementVisitor {
            type Value = Element;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an integer, a float, a boolean, \"inf\", \"-inf\" or \"nan\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Element, E> {
                Ok(Element::Boolean(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Element, E> {
                Ok(Element::Integer(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Element, E> {
                i64::try_from(v)
                    .map(Element::Integer)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Element, E> {
                Ok(Element::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Element, E> {
                match v {
                    "inf" => Ok(Element::Float(f64::INFINITY)),
                    "-inf" => Ok(Element::Float(f64::NEG_INFINITY)),
                    "nan" => Ok(Element::Float(f64::NAN)),
                    _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(ElementVisitor)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Integer(value)
    }
}
impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float(value)
    }
}
impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Boolean(value)
    }
}

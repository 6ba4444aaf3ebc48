//! Flat record view of a [`SourceUnit`].
//!
//! Keys are snake_case accessor names (`get_class_name`, `is_final`, ...)
//! and stay stable for consumers comparing against stored output.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::EMPTY_LIST_MARKER;
use crate::unit::SourceUnit;

/// One value of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// A string fact.
    Text(String),
    /// A count.
    Count(usize),
    /// A classification.
    Flag(bool),
    /// An ordered list of strings.
    List(Vec<String>),
}

/// Renders the value the way the text view shows it: lists comma-joined
/// (or `[]`), flags as `0`/`1`.
impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Count(count) => write!(f, "{count}"),
            Self::Flag(flag) => write!(f, "{}", u8::from(*flag)),
            Self::List(items) if items.is_empty() => f.write_str(EMPTY_LIST_MARKER),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Reads one record value from a unit.
pub type Accessor = fn(&SourceUnit) -> RecordValue;

fn text(value: &str) -> RecordValue {
    RecordValue::Text(value.to_owned())
}

fn list(values: &[String]) -> RecordValue {
    RecordValue::List(values.to_vec())
}

/// Record keys and their accessors, sorted by key.
pub static FIELDS: [(&str, Accessor); 25] = [
    ("get_class_name", |u| text(u.class_name())),
    ("get_class_type", |u| text(u.class_type())),
    ("get_constants", |u| list(u.constants())),
    ("get_enum_cases", |u| list(u.enum_cases())),
    ("get_extends", |u| text(u.extends())),
    ("get_full_class_name", |u| text(u.full_class_name())),
    ("get_implements", |u| list(u.implements())),
    ("get_imports", |u| list(u.imports())),
    ("get_lines_count", |u| RecordValue::Count(u.lines_count())),
    ("get_methods", |u| list(u.methods())),
    ("get_namespace", |u| text(u.namespace())),
    ("get_properties", |u| list(u.properties())),
    ("get_qualified_name", |u| RecordValue::Text(u.qualified_name())),
    ("has_abstract_methods", |u| RecordValue::Flag(u.has_abstract_methods())),
    ("has_constructor", |u| RecordValue::Flag(u.has_constructor())),
    ("is_abstract", |u| RecordValue::Flag(u.is_abstract())),
    ("is_atypical_class", |u| RecordValue::Flag(u.is_atypical_class())),
    ("is_class", |u| RecordValue::Flag(u.is_class())),
    ("is_enum", |u| RecordValue::Flag(u.is_enum())),
    ("is_explicit_abstract", |u| RecordValue::Flag(u.is_explicit_abstract())),
    ("is_final", |u| RecordValue::Flag(u.is_final())),
    ("is_implicit_abstract", |u| RecordValue::Flag(u.is_implicit_abstract())),
    ("is_interface", |u| RecordValue::Flag(u.is_interface())),
    ("is_readonly", |u| RecordValue::Flag(u.is_readonly())),
    ("is_trait", |u| RecordValue::Flag(u.is_trait())),
];

impl SourceUnit {
    /// Every fact and query keyed by its record name, in key order.
    #[must_use]
    pub fn to_record(&self) -> BTreeMap<&'static str, RecordValue> {
        FIELDS
            .iter()
            .map(|(key, accessor)| (*key, accessor(self)))
            .collect()
    }

    /// The record as `key: value` lines, each newline-terminated.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_record()
            .iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect()
    }
}

impl fmt::Display for SourceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Initial contents for a run's stacks, by stack name, bottom first.
///
/// Serialized as a plain JSON object:
/// `{"integer": [1, 2], "float": [0.5, "inf"], "boolean": [true]}`.
/// Seeding reads each array as elements of the named stack's kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackState(pub BTreeMap<String, Vec<Element>>);

impl StackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with<I, E>(mut self, name: &str, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.insert(name, elements);
        self
    }

    pub fn insert<I, E>(&mut self, name: &str, elements: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.0
            .insert(name.to_owned(), elements.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, name: &str) -> Option<&[Element]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Element])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

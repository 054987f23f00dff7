use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A program as a sequence of raw tokens, before parsing.
///
/// This is the form random synthesis produces and external search drivers
/// mutate: tokens can be swapped, spliced or replaced one by one, then the
/// whole thing is handed to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Code(pub Vec<String>);

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, token: String) {
        self.0.push(token);
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Code(text.split_whitespace().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for Code {
    fn from(tokens: Vec<String>) -> Self {
        Code(tokens)
    }
}

impl FromIterator<String> for Code {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Code(iter.into_iter().collect())
    }
}

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::log_debug;

/// Pseudo stack name under which the cursor verbs are called.
pub const CURSOR: &str = "cursor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// Push the token as a literal onto the stack of that kind.
    Literal(ElementKind),
    /// Call `function` on the stack named `stack`.
    Call { stack: String, function: String },
    /// Run a cursor verb.
    Cursor(String),
    /// Skipped without counting against the instruction budget.
    Noop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    /// The source token, kept for reproducing and debugging programs.
    pub token: String,
    /// Free for external drivers that want to weight instructions by how
    /// often they ran. The interpreter never reads or writes it.
    pub runs: u64,
}

impl Instruction {
    pub fn new(kind: InstructionKind, token: &str) -> Self {
        Instruction {
            kind,
            token: token.to_owned(),
            runs: 0,
        }
    }

    pub fn noop() -> Self {
        Self::new(InstructionKind::Noop, "")
    }
}

/// A parsed program. Shared and read-only once parsed.
pub type InstructionSet = Rc<[Instruction]>;

/// Tokenizer and registry of the `stack.function` symbols that are legal in
/// program text.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    functions: BTreeMap<String, BTreeSet<String>>,
    symbols: Vec<String>,
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `-?[0-9]+`
fn is_integer_shape(token: &str) -> bool {
    is_digits(token.strip_prefix('-').unwrap_or(token))
}

/// `-?[0-9]+\.[0-9]+`
fn is_float_shape(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    unsigned
        .split_once('.')
        .is_some_and(|(int, frac)| is_digits(int) && is_digits(frac))
}

/// Splits `stack.function`. The stack part is `[A-Za-z0-9_]+`, the function
/// part is anything non-empty without a dot.
fn split_call(token: &str) -> Option<(&str, &str)> {
    let (stack, function) = token.split_once('.')?;
    let stack_ok = !stack.is_empty()
        && stack
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    let function_ok = !function.is_empty() && !function.contains('.');
    (stack_ok && function_ok).then_some((stack, function))
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `stack.function` legal in program text. Registering the same
    /// pair twice has no further effect.
    pub fn register_function(&mut self, stack: &str, function: &str) {
        let added = self
            .functions
            .entry(stack.to_owned())
            .or_default()
            .insert(function.to_owned());
        if added {
            self.symbols.push(format!("{}.{}", stack, function));
        }
    }

    pub fn is_registered(&self, stack: &str, function: &str) -> bool {
        self.functions
            .get(stack)
            .is_some_and(|functions| functions.contains(function))
    }

    /// Every registered symbol, in registration order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Classifies a single token. `None` means the token is dropped.
    pub fn parse_item(&self, token: &str) -> Option<Instruction> {
        let kind = if token == "true" || token == "false" {
            InstructionKind::Literal(ElementKind::Boolean)
        } else if is_integer_shape(token) {
            InstructionKind::Literal(ElementKind::Integer)
        } else if is_float_shape(token) {
            InstructionKind::Literal(ElementKind::Float)
        } else {
            let (stack, function) = split_call(token)?;
            if stack == CURSOR {
                InstructionKind::Cursor(function.to_owned())
            } else if self.is_registered(stack, function) {
                InstructionKind::Call {
                    stack: stack.to_owned(),
                    function: function.to_owned(),
                }
            } else {
                return None;
            }
        };
        Some(Instruction::new(kind, token))
    }

    pub fn parse_tokens<'t, I>(&self, tokens: I) -> InstructionSet
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut dropped = 0usize;
        let instructions: Vec<Instruction> = tokens
            .into_iter()
            .filter_map(|token| {
                let parsed = self.parse_item(token);
                if parsed.is_none() {
                    dropped += 1;
                }
                parsed
            })
            .collect();
        if dropped > 0 {
            log_debug!("Parser dropped {} unrecognized token(s)", dropped);
        }
        instructions.into()
    }

    /// Splits `code` on whitespace and parses every token.
    pub fn parse(&self, code: &str) -> InstructionSet {
        self.parse_tokens(code.split_whitespace())
    }
}

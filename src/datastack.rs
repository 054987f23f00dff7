use std::collections::BTreeMap;
use std::fmt;

use crate::element::{Element, ElementKind};
use crate::stack::Stack;

mod boolean;
mod common;
mod context;
mod float;
mod integer;

#[cfg(test)]
mod tests;

pub use boolean::BooleanOp;
pub use common::CommonOp;
pub use context::OpContext;
pub use float::FloatOp;
pub use integer::IntegerOp;

/// An operation callable as `<stack>.<name>`.
///
/// Operations receive an [`OpContext`] giving access to the stack they were
/// called on, every other stack of the run, and the interpreter's randomness.
#[derive(Clone, Copy)]
pub struct Operation(pub fn(&mut OpContext<'_>));

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Operation")
    }
}

/// Operation name to operation. Ordered, so symbol registration and random
/// program synthesis are reproducible.
pub type OperationTable = BTreeMap<String, Operation>;

/// Typed storage behind a [`DataStack`].
#[derive(Debug, Clone, PartialEq)]
pub enum Store {
    Integer(Stack<i64>),
    Float(Stack<f64>),
    Boolean(Stack<bool>),
}

macro_rules! each_store {
    ($store:expr, $s:ident => $body:expr) => {
        match $store {
            Store::Integer($s) => $body,
            Store::Float($s) => $body,
            Store::Boolean($s) => $body,
        }
    };
}

fn shove_top<T: Clone>(s: &mut Stack<T>, idx: i64) {
    let Some(top) = s.pop() else {
        return;
    };
    if s.can_shove(idx) {
        s.shove(top, idx);
    } else {
        s.push(top);
    }
}

impl Store {
    pub fn empty(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Integer => Store::Integer(Stack::default()),
            ElementKind::Float => Store::Float(Stack::default()),
            ElementKind::Boolean => Store::Boolean(Stack::default()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Store::Integer(_) => ElementKind::Integer,
            Store::Float(_) => ElementKind::Float,
            Store::Boolean(_) => ElementKind::Boolean,
        }
    }

    pub fn size(&self) -> usize {
        each_store!(self, s => s.size())
    }

    /// Pushes `e` if it has this store's kind. Returns whether it was pushed.
    pub fn push(&mut self, e: Element) -> bool {
        match (self, e) {
            (Store::Integer(s), Element::Integer(v)) => s.push(v),
            (Store::Float(s), Element::Float(v)) => s.push(v),
            (Store::Boolean(s), Element::Boolean(v)) => s.push(v),
            _ => return false,
        }
        true
    }

    pub fn peek(&self) -> Option<Element> {
        each_store!(self, s => s.peek().map(|&v| Element::from(v)))
    }

    pub fn pop(&mut self) -> Option<Element> {
        each_store!(self, s => s.pop().map(Element::from))
    }

    pub fn swap(&mut self) {
        each_store!(self, s => s.swap())
    }

    pub fn rotate(&mut self) {
        each_store!(self, s => s.rotate())
    }

    pub fn dup(&mut self) {
        each_store!(self, s => s.dup())
    }

    pub fn flush(&mut self) {
        each_store!(self, s => s.flush())
    }

    pub fn yank(&mut self, idx: i64) {
        each_store!(self, s => s.yank(idx))
    }

    pub fn yank_dup(&mut self, idx: i64) {
        each_store!(self, s => s.yank_dup(idx))
    }

    /// Pops the top and shoves it back at depth `idx` of what remains.
    /// Out of range leaves the stack as it was.
    pub fn shove_top(&mut self, idx: i64) {
        each_store!(self, s => shove_top(s, idx))
    }

    pub fn elements(&self) -> Vec<Element> {
        each_store!(self, s => s.elements().iter().map(|&v| Element::from(v)).collect())
    }
}

/// A named stack's payload: typed storage, the operations callable on it and
/// the literal parser of its kind.
#[derive(Clone)]
pub struct DataStack {
    store: Store,
    operations: OperationTable,
}

impl fmt::Debug for DataStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStack")
            .field("store", &self.store)
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The full operation table of a stack kind: the common operations plus the
/// kind-specific ones.
pub fn operations_for(kind: ElementKind) -> OperationTable {
    let mut table = common::table();
    match kind {
        ElementKind::Integer => table.extend(integer::table()),
        ElementKind::Float => table.extend(float::table()),
        ElementKind::Boolean => table.extend(boolean::table()),
    }
    table
}

impl DataStack {
    /// An empty stack of `kind` with its standard operations.
    pub fn new(kind: ElementKind) -> Self {
        DataStack {
            store: Store::empty(kind),
            operations: operations_for(kind),
        }
    }

    /// A stack of `kind` pre-filled with `elements`, bottom first. Elements of
    /// another kind are skipped.
    pub fn with_elements<I>(kind: ElementKind, elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        let mut ds = Self::new(kind);
        for e in elements {
            ds.push(e);
        }
        ds
    }

    /// A stack of `kind` with a custom table. The common operations are always
    /// added, entries of `operations` with the same name win.
    pub fn with_operations(kind: ElementKind, operations: OperationTable) -> Self {
        let mut table = common::table();
        table.extend(operations);
        DataStack {
            store: Store::empty(kind),
            operations: table,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.store.kind()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn has(&self, n: usize) -> bool {
        n <= self.size()
    }

    pub fn lacks(&self, n: usize) -> bool {
        !self.has(n)
    }

    pub fn peek(&self) -> Option<Element> {
        self.store.peek()
    }

    pub fn pop(&mut self) -> Option<Element> {
        self.store.pop()
    }

    pub fn push(&mut self, e: Element) -> bool {
        self.store.push(e)
    }

    pub fn elements(&self) -> Vec<Element> {
        self.store.elements()
    }

    pub fn integers(&self) -> Option<&Stack<i64>> {
        match &self.store {
            Store::Integer(s) => Some(s),
            _ => None,
        }
    }

    pub fn integers_mut(&mut self) -> Option<&mut Stack<i64>> {
        match &mut self.store {
            Store::Integer(s) => Some(s),
            _ => None,
        }
    }

    pub fn floats(&self) -> Option<&Stack<f64>> {
        match &self.store {
            Store::Float(s) => Some(s),
            _ => None,
        }
    }

    pub fn floats_mut(&mut self) -> Option<&mut Stack<f64>> {
        match &mut self.store {
            Store::Float(s) => Some(s),
            _ => None,
        }
    }

    pub fn booleans(&self) -> Option<&Stack<bool>> {
        match &self.store {
            Store::Boolean(s) => Some(s),
            _ => None,
        }
    }

    pub fn booleans_mut(&mut self) -> Option<&mut Stack<bool>> {
        match &mut self.store {
            Store::Boolean(s) => Some(s),
            _ => None,
        }
    }

    /// Names of every operation callable on this stack, in order.
    pub fn functions(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    pub fn operation(&self, name: &str) -> Option<Operation> {
        self.operations.get(name).copied()
    }

    pub fn register_operation(&mut self, name: &str, operation: Operation) {
        self.operations.insert(name.to_owned(), operation);
    }

    /// Parses `token` as a literal of this stack's kind and pushes it.
    /// Unparseable tokens push nothing.
    pub fn push_literal(&mut self, token: &str) {
        if let Some(e) = self.kind().parse_literal(token) {
            self.push(e);
        }
    }
}

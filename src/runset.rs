use std::collections::BTreeMap;

use crate::datastack::{DataStack, OpContext};
use crate::element::{Element, ElementKind};
use crate::interpreter::RandomSource;
use crate::{log_debug, log_warn};

mod cursor;
mod state;

pub use cursor::{Cursor, CursorCommand, CursorCommands, CursorVerb, commands};
pub use state::StackState;

/// Everything a single run mutates: the named stacks, the cursor and the
/// instruction counter.
///
/// A `RunSet` is built fresh for every run and handed back to the caller once
/// the run is over.
#[derive(Debug, Clone)]
pub struct RunSet {
    data_stacks: BTreeMap<String, DataStack>,
    cursor: Cursor,
    cursor_commands: CursorCommands,
    instruction_count: u64,
}

impl Default for RunSet {
    /// Empty `integer`, `float` and `boolean` stacks.
    fn default() -> Self {
        Self::with_kinds(&[
            ElementKind::Integer,
            ElementKind::Float,
            ElementKind::Boolean,
        ])
    }
}

impl RunSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty stack per kind, named after the kind.
    pub fn with_kinds(kinds: &[ElementKind]) -> Self {
        let mut run = RunSet {
            data_stacks: BTreeMap::new(),
            cursor: Cursor::default(),
            cursor_commands: commands(),
            instruction_count: 0,
        };
        for &kind in kinds {
            run.register_stack(kind.name(), DataStack::new(kind));
        }
        run
    }

    /// Adds or replaces the stack called `name`.
    pub fn register_stack(&mut self, name: &str, stack: DataStack) {
        self.data_stacks.insert(name.to_owned(), stack);
    }

    pub fn stack(&self, name: &str) -> Option<&DataStack> {
        self.data_stacks.get(name)
    }

    pub fn stack_mut(&mut self, name: &str) -> Option<&mut DataStack> {
        self.data_stacks.get_mut(name)
    }

    /// Stacks in name order.
    pub fn data_stacks(&self) -> impl Iterator<Item = (&str, &DataStack)> {
        self.data_stacks.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True when `name` exists and holds at least `n` elements.
    pub fn ok(&self, name: &str, n: usize) -> bool {
        self.stack(name).is_some_and(|s| s.has(n))
    }

    pub fn bad(&self, name: &str, n: usize) -> bool {
        !self.ok(name, n)
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn cursor_command(&self, name: &str) -> Option<CursorCommand> {
        self.cursor_commands.get(name).copied()
    }

    pub fn cursor_commands(&self) -> &CursorCommands {
        &self.cursor_commands
    }

    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    pub fn increment_instruction_count(&mut self) {
        self.instruction_count += 1;
    }

    /// Runs `stack.function`. Unknown stacks and functions do nothing.
    pub fn call(&mut self, stack: &str, function: &str, rng: &mut dyn RandomSource) {
        let Some(op) = self.stack(stack).and_then(|s| s.operation(function)) else {
            return;
        };
        let mut ctx = OpContext::new(self, stack, rng);
        (op.0)(&mut ctx);
    }

    /// Runs the cursor verb `name`. Unknown verbs do nothing.
    pub fn call_cursor(&mut self, name: &str) {
        if let Some(command) = self.cursor_command(name) {
            (command.0)(self);
        }
    }

    /// Pushes a literal onto the stack named after its kind.
    pub fn push_literal(&mut self, kind: ElementKind, token: &str) {
        if let Some(s) = self.stack_mut(kind.name()) {
            s.push_literal(token);
        }
    }

    /// Pushes the elements of `state` onto the matching stacks, bottom first.
    /// Integers on a float stack become floats. Unknown stacks and elements
    /// of another kind are skipped.
    pub fn seed(&mut self, state: &StackState) {
        let mut applied = 0usize;
        for (name, elements) in state.iter() {
            let Some(stack) = self.stack_mut(name) else {
                log_warn!("Seed names unknown stack '{}', skipping", name);
                continue;
            };
            applied += 1;
            let kind = stack.kind();
            let rejected = elements
                .iter()
                .filter(|&&e| !kind.adopt(e).is_some_and(|e| stack.push(e)))
                .count();
            if rejected > 0 {
                log_warn!(
                    "Seed skipped {} element(s) not of kind {} on stack '{}'",
                    rejected,
                    kind,
                    name
                );
            }
        }
        log_debug!("Seeded {} stack(s)", applied);
    }

    /// Current contents of every stack.
    pub fn snapshot(&self) -> StackState {
        StackState(
            self.data_stacks
                .iter()
                .map(|(name, s)| (name.clone(), s.elements()))
                .collect(),
        )
    }

    /// Contents of `name`, bottom first.
    pub fn elements(&self, name: &str) -> Option<Vec<Element>> {
        self.stack(name).map(DataStack::elements)
    }
}

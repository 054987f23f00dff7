use std::collections::BTreeMap;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::element::ElementKind;
use crate::parser::{Instruction, InstructionSet};

use super::RunSet;

/// The program counter of a run.
///
/// `position` always stays within `0 ..= len`. Jumps do not move the cursor
/// immediately: they decide where the next [`Cursor::advance`] lands, so the
/// instruction that requested the jump keeps its position until it is done.
#[derive(Debug, Clone)]
pub struct Cursor {
    position: usize,
    instructions: InstructionSet,
    landing: Option<usize>,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor {
            position: 0,
            instructions: Vec::new().into(),
            landing: None,
        }
    }
}

impl Cursor {
    /// Installs a program and rewinds.
    pub fn load(&mut self, instructions: InstructionSet) {
        self.instructions = instructions;
        self.position = 0;
        self.landing = None;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn instructions(&self) -> &InstructionSet {
        &self.instructions
    }

    /// Number of instructions in the loaded program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.len()
    }

    pub fn current(&self) -> Option<&Instruction> {
        self.instructions.get(self.position)
    }

    /// Moves to the next instruction, or to the pending jump target.
    pub fn advance(&mut self) {
        self.position = match self.landing.take() {
            Some(target) => target,
            None => self.position + 1,
        }
        .min(self.len());
    }

    /// Steps over the next instruction.
    pub fn skip(&mut self) {
        self.position = (self.position + 1).min(self.len());
    }

    /// Makes the next advance land on `target`. Targets past the end are
    /// ignored.
    pub fn jump_to(&mut self, target: usize) {
        if target <= self.len() {
            self.landing = Some(target);
        }
    }

    /// Terminates the run.
    pub fn end(&mut self) {
        self.position = self.len();
        self.landing = Some(self.len());
    }
}

/// The fixed control-flow instructions, called as `cursor.<verb>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CursorVerb {
    SkipIf,
    End,
    EndIf,
    Goto,
    GotoIf,
}

#[derive(Clone, Copy)]
pub struct CursorCommand(pub fn(&mut RunSet));

impl std::fmt::Debug for CursorCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CursorCommand")
    }
}

pub type CursorCommands = BTreeMap<&'static str, CursorCommand>;

impl CursorVerb {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn command(self) -> CursorCommand {
        match self {
            CursorVerb::SkipIf => CursorCommand(skip_if),
            CursorVerb::End => CursorCommand(end),
            CursorVerb::EndIf => CursorCommand(end_if),
            CursorVerb::Goto => CursorCommand(goto),
            CursorVerb::GotoIf => CursorCommand(goto_if),
        }
    }
}

pub fn commands() -> CursorCommands {
    CursorVerb::iter().map(|v| (v.name(), v.command())).collect()
}

fn pop_boolean(r: &mut RunSet) -> Option<bool> {
    r.stack_mut(ElementKind::Boolean.name())?.booleans_mut()?.pop()
}

fn pop_integer(r: &mut RunSet) -> Option<i64> {
    r.stack_mut(ElementKind::Integer.name())?.integers_mut()?.pop()
}

fn skip_if(r: &mut RunSet) {
    if pop_boolean(r) == Some(true) {
        r.cursor_mut().skip();
    }
}

fn end(r: &mut RunSet) {
    r.cursor_mut().end();
}

fn end_if(r: &mut RunSet) {
    if pop_boolean(r) == Some(true) {
        end(r);
    }
}

/// The target is consumed even when it is out of range.
fn goto(r: &mut RunSet) {
    let Some(target) = pop_integer(r) else {
        return;
    };
    if let Ok(target) = usize::try_from(target) {
        r.cursor_mut().jump_to(target);
    }
}

/// The boolean is consumed whatever its value.
fn goto_if(r: &mut RunSet) {
    if pop_boolean(r) == Some(true) {
        goto(r);
    }
}

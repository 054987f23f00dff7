//! A small virtual machine for a typed, stack-based instruction language.
//!
//! Programs are whitespace-separated tokens. Literals are pushed onto the
//! stack of their kind, `stack.function` calls an operation of a named stack,
//! and `cursor.<verb>` steers the program counter. Whatever the program text,
//! a run never fails: instructions that cannot apply do nothing, and a fuse
//! bounds the number of instructions executed.
//!
//! ```no_run
//! use pushvm::{Interpreter, Options};
//!
//! let mut interpreter = Interpreter::new(Options::default());
//! let run = interpreter.run("5 8 integer.+");
//! assert_eq!(run.instruction_count(), 3);
//! ```

pub mod code;
pub mod config;
pub mod datastack;
pub mod element;
pub mod interpreter;
pub mod log;
pub mod logger;
pub mod parser;
pub mod runset;
pub mod stack;

pub use code::Code;
pub use config::{Options, Validate};
pub use datastack::{DataStack, OpContext, Operation, OperationTable};
pub use element::{Element, ElementKind};
pub use interpreter::{Interpreter, RandomSource};
pub use parser::{Instruction, InstructionKind, InstructionSet, Parser};
pub use runset::{Cursor, CursorVerb, RunSet, StackState};
pub use stack::Stack;

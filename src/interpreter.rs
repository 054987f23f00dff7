use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::code::Code;
use crate::config::{Options, Validate};
use crate::element::ElementKind;
use crate::log_debug;
use crate::parser::{CURSOR, InstructionKind, InstructionSet, Parser};
use crate::runset::{RunSet, StackState};

mod random;

#[cfg(test)]
mod tests;

pub use random::{RAND_INT_RANGE, RandomSource};

/// Parses programs and runs them against a fresh [`RunSet`].
///
/// The parser is configured once, from the operation tables of the stacks
/// named in [`Options::stacks`] and the cursor verbs. The random source is
/// the only state carried from one run to the next.
pub struct Interpreter {
    rng: Box<dyn RandomSource>,
    parser: Parser,
    options: Options,
}

impl Interpreter {
    /// Seeded from `options.seed` if set, from OS entropy otherwise.
    pub fn new(options: Options) -> Self {
        match options.seed {
            Some(seed) => Self::seeded(options, seed),
            None => {
                let rng = ChaCha20Rng::from_rng(&mut rand::rng());
                Self::with_rng(options, Box::new(rng))
            }
        }
    }

    /// Same seed, same options: same programs and same `rand` draws.
    pub fn seeded(options: Options, seed: u64) -> Self {
        Self::with_rng(options, Box::new(ChaCha20Rng::seed_from_u64(seed)))
    }

    pub fn with_rng(mut options: Options, rng: Box<dyn RandomSource>) -> Self {
        options.validate();
        let parser = Self::setup_parser(&RunSet::with_kinds(&options.stacks));
        Interpreter {
            rng,
            parser,
            options,
        }
    }

    /// Registers every operation of every stack, in name order, then the
    /// cursor verbs.
    fn setup_parser(run: &RunSet) -> Parser {
        let mut parser = Parser::new();
        for (name, stack) in run.data_stacks() {
            for function in stack.functions() {
                parser.register_function(name, function);
            }
        }
        for verb in run.cursor_commands().keys() {
            parser.register_function(CURSOR, verb);
        }
        parser
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn run(&mut self, code: &str) -> RunSet {
        let instructions = self.parser.parse(code);
        self.execute(instructions, None)
    }

    pub fn run_code(&mut self, code: &Code) -> RunSet {
        let instructions = self.parser.parse_tokens(code.tokens());
        self.execute(instructions, None)
    }

    /// Runs `code` on stacks pre-filled from `state`.
    pub fn run_with_state(&mut self, code: &str, state: &StackState) -> RunSet {
        let instructions = self.parser.parse(code);
        self.execute(instructions, Some(state))
    }

    /// Runs an already parsed program.
    pub fn execute(&mut self, instructions: InstructionSet, state: Option<&StackState>) -> RunSet {
        let mut run = RunSet::with_kinds(&self.options.stacks);
        if let Some(state) = state {
            run.seed(state);
        }
        run.cursor_mut().load(instructions.clone());
        log_debug!("Running {} instruction(s)", instructions.len());

        while let Some(instruction) = instructions.get(run.cursor().position()) {
            match &instruction.kind {
                InstructionKind::Noop => {
                    run.cursor_mut().advance();
                    continue;
                }
                InstructionKind::Literal(kind) => run.push_literal(*kind, &instruction.token),
                InstructionKind::Cursor(verb) => run.call_cursor(verb),
                InstructionKind::Call { stack, function } => {
                    run.call(stack, function, &mut *self.rng)
                }
            }

            run.cursor_mut().advance();
            run.increment_instruction_count();
            if run.instruction_count() > self.options.max_instructions {
                log_debug!(
                    "Fuse tripped after {} instruction(s) at position {}",
                    run.instruction_count(),
                    run.cursor().position()
                );
                break;
            }
        }

        log_debug!("Run finished after {} instruction(s)", run.instruction_count());
        run
    }

    /// Uniform over `0 .. RAND_INT_RANGE`.
    pub fn rand_int(&mut self) -> i64 {
        self.rng.rand_int()
    }

    /// Uniform over `[0, 1)`.
    pub fn rand_float(&mut self) -> f64 {
        self.rng.rand_float()
    }

    /// A literal of one of the configured kinds, or a registered symbol.
    pub fn random_instruction(&mut self) -> String {
        if self.rand_float() < self.options.literal_probability {
            return self.random_any_literal();
        }
        match self.random_symbol() {
            Some(symbol) => symbol,
            None => self.random_any_literal(),
        }
    }

    fn random_any_literal(&mut self) -> String {
        let kinds = &self.options.stacks;
        let kind = match kinds.len() {
            0 => ElementKind::Integer,
            n => kinds[self.rng.int_below(n)],
        };
        self.random_literal(kind)
    }

    /// Renders a random literal: `-?[0-9]` for integers, `-?0.dddddd` for
    /// floats, `true` or `false` for booleans.
    pub fn random_literal(&mut self, kind: ElementKind) -> String {
        match kind {
            ElementKind::Integer => {
                let sign = self.random_sign();
                format!("{}{}", sign, self.rand_int())
            }
            ElementKind::Float => {
                let sign = self.random_sign();
                let micros = ((self.rand_float() * 1e6) as u32).min(999_999);
                format!("{}0.{:06}", sign, micros)
            }
            ElementKind::Boolean => {
                if self.rand_float() > 0.5 {
                    "true".to_owned()
                } else {
                    "false".to_owned()
                }
            }
        }
    }

    fn random_sign(&mut self) -> &'static str {
        if self.rand_float() > 0.5 { "-" } else { "" }
    }

    /// A registered `stack.function` or `cursor.verb`. `None` only when
    /// nothing is registered.
    pub fn random_symbol(&mut self) -> Option<String> {
        let count = self.parser.symbols().len();
        if count == 0 {
            return None;
        }
        let idx = self.rng.int_below(count);
        self.parser.symbols().get(idx).cloned()
    }

    pub fn random_code(&mut self, length: usize) -> Code {
        (0..length).map(|_| self.random_instruction()).collect()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

use std::collections::VecDeque;

use crate::config::Options;
use crate::datastack::DataStack;
use crate::interpreter::{Interpreter, RandomSource};
use crate::runset::RunSet;

mod cursor;
mod run;

/// Replays fixed draws. Runs out into zeros.
pub struct Scripted {
    ints: VecDeque<usize>,
    floats: VecDeque<f64>,
}

impl Scripted {
    pub fn new(ints: &[usize], floats: &[f64]) -> Self {
        Scripted {
            ints: ints.iter().copied().collect(),
            floats: floats.iter().copied().collect(),
        }
    }
}

impl RandomSource for Scripted {
    fn int_below(&mut self, n: usize) -> usize {
        self.ints.pop_front().unwrap_or(0) % n
    }

    fn unit_float(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(0.0)
    }
}

pub fn interpreter() -> Interpreter {
    Interpreter::seeded(Options::default(), 1)
}

pub fn run_program(code: &str) -> RunSet {
    interpreter().run(code)
}

pub fn integers(run: &RunSet) -> Vec<i64> {
    run.stack("integer")
        .and_then(DataStack::integers)
        .map(|s| s.elements().to_vec())
        .unwrap_or_default()
}

pub fn floats(run: &RunSet) -> Vec<f64> {
    run.stack("float")
        .and_then(DataStack::floats)
        .map(|s| s.elements().to_vec())
        .unwrap_or_default()
}

pub fn booleans(run: &RunSet) -> Vec<bool> {
    run.stack("boolean")
        .and_then(DataStack::booleans)
        .map(|s| s.elements().to_vec())
        .unwrap_or_default()
}

use crate::element::ElementKind;
use crate::interpreter::RandomSource;
use crate::runset::RunSet;
use crate::stack::Stack;

use super::DataStack;

/// What an operation sees while it runs: the stack it was called on, the rest
/// of the run's stacks, and the interpreter's randomness.
///
/// Every accessor returns an `Option`. A missing stack, or a stack of the wrong
/// kind, is treated exactly like a stack that is too short: the operation
/// returns without touching anything.
pub struct OpContext<'a> {
    run: &'a mut RunSet,
    target: &'a str,
    rng: &'a mut dyn RandomSource,
}

impl<'a> OpContext<'a> {
    pub fn new(run: &'a mut RunSet, target: &'a str, rng: &'a mut dyn RandomSource) -> Self {
        OpContext { run, target, rng }
    }

    /// Name of the stack the operation was called on.
    pub fn target_name(&self) -> &str {
        self.target
    }

    pub fn target(&mut self) -> Option<&mut DataStack> {
        let name = self.target;
        self.run.stack_mut(name)
    }

    pub fn stack(&mut self, name: &str) -> Option<&mut DataStack> {
        self.run.stack_mut(name)
    }

    pub fn run(&mut self) -> &mut RunSet {
        self.run
    }

    pub fn ok(&self, name: &str, n: usize) -> bool {
        self.run.ok(name, n)
    }

    pub fn bad(&self, name: &str, n: usize) -> bool {
        self.run.bad(name, n)
    }

    pub fn target_integers(&mut self) -> Option<&mut Stack<i64>> {
        self.target()?.integers_mut()
    }

    pub fn target_floats(&mut self) -> Option<&mut Stack<f64>> {
        self.target()?.floats_mut()
    }

    pub fn target_booleans(&mut self) -> Option<&mut Stack<bool>> {
        self.target()?.booleans_mut()
    }

    /// The run's `integer` stack, where index operands and depths live.
    pub fn integers(&mut self) -> Option<&mut Stack<i64>> {
        self.stack(ElementKind::Integer.name())?.integers_mut()
    }

    pub fn floats(&mut self) -> Option<&mut Stack<f64>> {
        self.stack(ElementKind::Float.name())?.floats_mut()
    }

    /// The run's `boolean` stack, where comparisons write their results.
    pub fn booleans(&mut self) -> Option<&mut Stack<bool>> {
        self.stack(ElementKind::Boolean.name())?.booleans_mut()
    }

    pub fn rand_int(&mut self) -> i64 {
        self.rng.rand_int()
    }

    pub fn rand_float(&mut self) -> f64 {
        self.rng.rand_float()
    }
}

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::datastack::DataStack;
use crate::runset::{RunSet, StackState};

mod common;

/// A run with the three standard stacks, seeded from `state`.
pub fn run_set(state: StackState) -> RunSet {
    let mut run = RunSet::new();
    run.seed(&state);
    run
}

pub fn call(run: &mut RunSet, stack: &str, function: &str) {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    run.call(stack, function, &mut rng);
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

/// Before and after contents of the three standard stacks around a single
/// call.
pub struct Case {
    pub ints: (Vec<i64>, Vec<i64>),
    pub floats: (Vec<f64>, Vec<f64>),
    pub bools: (Vec<bool>, Vec<bool>),
}

impl Case {
    pub fn new() -> Self {
        Case {
            ints: (vec![], vec![]),
            floats: (vec![], vec![]),
            bools: (vec![], vec![]),
        }
    }

    pub fn ints(mut self, before: &[i64], after: &[i64]) -> Self {
        self.ints = (before.to_vec(), after.to_vec());
        self
    }

    pub fn floats(mut self, before: &[f64], after: &[f64]) -> Self {
        self.floats = (before.to_vec(), after.to_vec());
        self
    }

    pub fn bools(mut self, before: &[bool], after: &[bool]) -> Self {
        self.bools = (before.to_vec(), after.to_vec());
        self
    }

    /// Calls `stack.function` and checks every stack.
    pub fn check(self, stack: &str, function: &str) {
        let mut run = run_set(
            StackState::new()
                .with("integer", self.ints.0.clone())
                .with("float", self.floats.0.clone())
                .with("boolean", self.bools.0.clone()),
        );
        call(&mut run, stack, function);
        let what = format!("{}.{}", stack, function);
        assert_eq!(integers(&run), self.ints.1, "{}: integer stack", what);
        assert_eq!(floats(&run), self.floats.1, "{}: float stack", what);
        assert_eq!(booleans(&run), self.bools.1, "{}: boolean stack", what);
    }
}

#[test]
fn unknown_functions_and_stacks_do_nothing() {
    let mut run = run_set(StackState::new().with("integer", [1i64, 2]));
    call(&mut run, "integer", "sqrt");
    call(&mut run, "string", "+");
    assert_eq!(integers(&run), [1, 2]);
}

#[test]
fn functions_list_common_and_kind_operations() {
    let ds = DataStack::new(crate::element::ElementKind::Boolean);
    let functions: Vec<&str> = ds.functions().collect();
    assert_eq!(
        functions,
        [
            "=", "and", "dup", "flush", "fromfloat", "frominteger", "not", "or", "pop",
            "rotate", "shove", "stackdepth", "swap", "xor", "yank", "yankdup"
        ]
    );
}

#[test]
fn custom_operations_override_and_extend() {
    use crate::datastack::{OperationTable, Operation};
    use crate::element::ElementKind;

    let mut table = OperationTable::new();
    table.insert(
        "answer".to_owned(),
        Operation(|ctx| {
            if let Some(s) = ctx.target_integers() {
                s.push(42);
            }
        }),
    );
    let mut run = RunSet::new();
    run.register_stack("foo", DataStack::with_operations(ElementKind::Integer, table));
    call(&mut run, "foo", "answer");
    call(&mut run, "foo", "dup");
    assert_eq!(
        run.stack("foo").and_then(DataStack::integers).map(|s| s.elements().to_vec()),
        Some(vec![42, 42])
    );
    assert!(run.stack("foo").and_then(|s| s.operation("+")).is_none());
}

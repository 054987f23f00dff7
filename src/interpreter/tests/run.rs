use std::rc::Rc;

use super::{Scripted, booleans, floats, integers, interpreter, run_program};
use crate::code::Code;
use crate::config::Options;
use crate::element::ElementKind;
use crate::interpreter::Interpreter;
use crate::parser::Instruction;
use crate::runset::StackState;

#[test]
fn adds_two_literals() {
    let run = run_program("5 8 integer.+");
    assert_eq!(integers(&run), [13]);
    assert_eq!(run.instruction_count(), 3);
}

#[test]
fn literals_land_on_their_own_stacks() {
    let run = run_program("1 2.5 true -3 -0.25 false");
    assert_eq!(integers(&run), [1, -3]);
    assert_eq!(floats(&run), [2.5, -0.25]);
    assert_eq!(booleans(&run), [true, false]);
}

#[test]
fn unregistered_tokens_never_run() {
    let run = run_program("5 8 integer.sqrt string.+ float. 2");
    assert_eq!(integers(&run), [5, 8, 2]);
    assert_eq!(run.instruction_count(), 3);
}

#[test]
fn comparison_crosses_stacks() {
    let run = run_program("1 2 6 2 integer.>");
    assert_eq!(integers(&run), [1, 2]);
    assert_eq!(booleans(&run), [true]);
}

#[test]
fn conversions_chain() {
    let run = run_program("7.9 integer.fromfloat float.frominteger 0 boolean.frominteger");
    assert_eq!(integers(&run), Vec::<i64>::new());
    assert_eq!(floats(&run), [7.0]);
    assert_eq!(booleans(&run), [false]);
}

#[test]
fn out_of_range_literal_pushes_nothing() {
    let run = run_program("99999999999999999999 1");
    assert_eq!(integers(&run), [1]);
    assert_eq!(run.instruction_count(), 2);
}

#[test]
fn fuse_stops_after_max_plus_one() {
    let options = Options {
        max_instructions: 3,
        ..Options::default()
    };
    let mut interpreter = Interpreter::seeded(options, 0);
    let run = interpreter.run("1 2 3 4 5 6");
    assert_eq!(integers(&run), [1, 2, 3, 4]);
    assert_eq!(run.instruction_count(), 4);
}

#[test]
fn noops_are_free() {
    let mut interpreter = interpreter();
    let instructions: Rc<[Instruction]> = vec![
        Instruction::noop(),
        interpreter.parser().parse_item("4").unwrap(),
        Instruction::noop(),
        Instruction::noop(),
        interpreter.parser().parse_item("integer.dup").unwrap(),
    ]
    .into();
    let run = interpreter.execute(instructions, None);
    assert_eq!(integers(&run), [4, 4]);
    assert_eq!(run.instruction_count(), 2);
}

#[test]
fn run_with_state_seeds_before_the_first_instruction() {
    let state = StackState::from_json(r#"{"integer": [5], "boolean": [true]}"#).unwrap();
    let run = interpreter().run_with_state("8 integer.+ boolean.not", &state);
    assert_eq!(integers(&run), [13]);
    assert_eq!(booleans(&run), [false]);
}

#[test]
fn snapshot_feeds_the_next_run() {
    let mut interpreter = interpreter();
    let first = interpreter.run("2 3 integer.*");
    let second = interpreter.run_with_state("integer.dup integer.+", &first.snapshot());
    assert_eq!(integers(&second), [12]);
}

#[test]
fn run_code_matches_run() {
    let text = "1 true cursor.skipif 2 3";
    let code = Code::from(text);
    assert_eq!(
        interpreter().run_code(&code).snapshot(),
        interpreter().run(text).snapshot()
    );
}

#[test]
fn only_configured_stacks_exist() {
    let options = Options {
        stacks: vec![ElementKind::Integer],
        ..Options::default()
    };
    let mut interpreter = Interpreter::seeded(options, 0);
    let run = interpreter.run("1 2 integer.< 2.0 true integer.+");
    assert_eq!(integers(&run), [3]);
    assert!(run.stack("boolean").is_none());
    assert!(run.stack("float").is_none());
    assert_eq!(run.instruction_count(), 6);
}

#[test]
fn rand_operations_draw_from_the_source() {
    let rng = Scripted::new(&[7], &[0.25]);
    let mut interpreter = Interpreter::with_rng(Options::default(), Box::new(rng));
    let run = interpreter.run("integer.rand float.rand");
    assert_eq!(integers(&run), [7]);
    assert_eq!(floats(&run), [0.25]);
}

#[test]
fn rand_draws_are_in_range() {
    let mut interpreter = interpreter();
    for _ in 0..100 {
        assert!((0..10).contains(&interpreter.rand_int()));
        assert!((0.0..1.0).contains(&interpreter.rand_float()));
    }
}

#[test]
fn parser_knows_every_operation_and_verb() {
    let interpreter = interpreter();
    let symbols = interpreter.parser().symbols();
    assert_eq!(symbols.first().map(String::as_str), Some("boolean.="));
    assert_eq!(
        &symbols[symbols.len() - 5..],
        ["cursor.end", "cursor.endif", "cursor.goto", "cursor.gotoif", "cursor.skipif"]
    );
    // 16 boolean, 25 float, 22 integer operations.
    assert_eq!(symbols.len(), 16 + 25 + 22 + 5);
    assert!(interpreter.parser().is_registered("float", "tan"));
    assert!(!interpreter.parser().is_registered("integer", "tan"));
}

#[test]
fn overflowed_float_run_resumes_from_json() {
    let squarings = " float.dup float.*".repeat(9);
    let mut interpreter = interpreter();
    let first = interpreter.run(&format!("9.0 9.0 float.*{}", squarings));
    assert_eq!(floats(&first), [f64::INFINITY]);

    let text = first.snapshot().to_json().unwrap();
    let state = StackState::from_json(&text).unwrap();
    let resumed = interpreter.run_with_state("1.0 float.+", &state);
    assert_eq!(floats(&resumed), [f64::INFINITY]);
}

#[test]
fn json_integers_seed_float_stacks() {
    let state = StackState::from_json(r#"{"float": [1]}"#).unwrap();
    let run = interpreter().run_with_state("0.5 float.+", &state);
    assert_eq!(floats(&run), [1.5]);
}

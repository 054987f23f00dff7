use super::{booleans, floats, integers, run_program};

fn check(code: &str, ints: &[i64], bools: &[bool], floats_after: &[f64]) {
    let run = run_program(code);
    assert_eq!(integers(&run), ints, "integer stack after `{}`", code);
    assert_eq!(booleans(&run), bools, "boolean stack after `{}`", code);
    assert_eq!(floats(&run), floats_after, "float stack after `{}`", code);
}

#[test]
fn skipif() {
    check("1 true cursor.skipif 2 3", &[1, 3], &[], &[]);
    check("1 false cursor.skipif 2 3", &[1, 2, 3], &[], &[]);
    check("1 cursor.skipif 2 3", &[1, 2, 3], &[], &[]);
}

#[test]
fn skipif_as_last_instruction() {
    check("1 true cursor.skipif", &[1], &[], &[]);
}

#[test]
fn end() {
    check("1 cursor.end 2 3 4", &[1], &[], &[]);
}

#[test]
fn endif() {
    check("1 true cursor.endif 2 3 4", &[1], &[], &[]);
    check("1 false cursor.endif 2 3 4", &[1, 2, 3, 4], &[], &[]);
    check("1 cursor.endif 2 3 4", &[1, 2, 3, 4], &[], &[]);
}

#[test]
fn goto() {
    check("3 cursor.goto 2 1 8", &[1, 8], &[], &[]);
    check("3.0 cursor.goto 2 1 8", &[2, 1, 8], &[], &[3.0]);
    check("-3 cursor.goto 2 1 8", &[2, 1, 8], &[], &[]);
    check("10 cursor.goto 2 1 8", &[2, 1, 8], &[], &[]);
}

#[test]
fn goto_the_end_terminates() {
    // Five instructions: landing on 5 is past the last one.
    check("5 cursor.goto 2 1 8", &[], &[], &[]);
    check("6 cursor.goto 2 1 8", &[2, 1, 8], &[], &[]);
}

#[test]
fn goto_lands_exactly_on_the_target() {
    for target in 0..5i64 {
        let code = format!("{} cursor.goto 10 11 12 13 14 15", target + 2);
        let run = run_program(&code);
        let expected: Vec<i64> = (10 + target..=15).collect();
        assert_eq!(integers(&run), expected, "{}", code);
    }
}

#[test]
fn gotoif() {
    check("true 4 cursor.gotoif 2 1 8", &[1, 8], &[], &[]);
    check("false 4 cursor.gotoif 2 1 8", &[4, 2, 1, 8], &[], &[]);
    check("3.0 4 cursor.gotoif 2 1 8", &[4, 2, 1, 8], &[], &[3.0]);
}

#[test]
fn gotoif_without_target_still_pops_the_boolean() {
    check("true cursor.gotoif 2", &[2], &[], &[]);
}

#[test]
fn unknown_verbs_do_nothing_but_count() {
    let run = run_program("1 cursor.jump 2");
    assert_eq!(integers(&run), [1, 2]);
    assert_eq!(run.instruction_count(), 3);
}

#[test]
fn backward_goto_loops_until_the_fuse() {
    let run = run_program("0 cursor.goto");
    assert_eq!(run.instruction_count(), 101);
    assert!(integers(&run).len() <= 1);
}

use super::{Case, call, floats, integers, run_set};
use crate::runset::StackState;

fn floats_with_index(function: &str, idx: &[i64], before: &[f64], after: &[f64]) {
    Case::new()
        .ints(idx, &[])
        .floats(before, after)
        .check("float", function);
}

#[test]
fn pop_swap_dup_flush() {
    Case::new().floats(&[1.0, 2.0], &[1.0]).check("float", "pop");
    Case::new().floats(&[1.0, 2.0], &[2.0, 1.0]).check("float", "swap");
    Case::new().floats(&[1.0, 2.0], &[1.0, 2.0, 2.0]).check("float", "dup");
    Case::new().floats(&[1.0, 2.0], &[]).check("float", "flush");
}

#[test]
fn rotate_brings_the_third_to_the_top() {
    Case::new()
        .bools(&[true, false, true, true], &[true, true, true, false])
        .check("boolean", "rotate");
    Case::new()
        .ints(&[1, 2, 3, 4], &[1, 3, 4, 2])
        .check("integer", "rotate");
}

#[test]
fn short_stacks_are_left_alone() {
    Case::new().floats(&[1.0], &[1.0]).check("float", "swap");
    Case::new().floats(&[1.0, 2.0], &[1.0, 2.0]).check("float", "rotate");
    for function in ["pop", "swap", "rotate", "dup", "flush"] {
        Case::new().check("float", function);
    }
}

#[test]
fn yank() {
    floats_with_index("yank", &[2], &[1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 4.0, 2.0]);
    floats_with_index("yank", &[3], &[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 1.0]);
}

#[test]
fn yank_out_of_range_still_consumes_the_index() {
    floats_with_index("yank", &[0], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
    floats_with_index("yank", &[3], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
    floats_with_index("yank", &[-1], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
    floats_with_index("yank", &[i64::MIN], &[1.0], &[1.0]);
}

#[test]
fn yank_dup() {
    floats_with_index("yankdup", &[2], &[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0, 2.0]);
    floats_with_index("yankdup", &[0], &[1.0, 2.0], &[1.0, 2.0, 2.0]);
    floats_with_index("yankdup", &[2], &[1.0, 2.0], &[1.0, 2.0]);
}

#[test]
fn yank_and_yank_dup_agree_on_the_top() {
    for idx in 1i64..4 {
        let before = [1.0, 2.0, 3.0, 4.0];
        let mut yanked = run_set(
            StackState::new()
                .with("integer", [idx])
                .with("float", before),
        );
        let mut copied = yanked.clone();
        call(&mut yanked, "float", "yank");
        call(&mut copied, "float", "yankdup");
        assert_eq!(floats(&yanked).last(), floats(&copied).last());
        assert_eq!(floats(&yanked).len(), 4);
        assert_eq!(floats(&copied).len(), 5);
    }
}

#[test]
fn shove_moves_the_top_down() {
    floats_with_index("shove", &[0], &[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 4.0, 3.0]);
    floats_with_index("shove", &[2], &[1.0, 2.0, 3.0, 4.0], &[4.0, 1.0, 2.0, 3.0]);
}

#[test]
fn shove_out_of_range_keeps_the_top() {
    floats_with_index("shove", &[3], &[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0]);
    floats_with_index("shove", &[-1], &[1.0, 2.0], &[1.0, 2.0]);
    floats_with_index("shove", &[0], &[1.0], &[1.0]);
}

#[test]
fn index_operations_need_an_integer() {
    for function in ["yank", "yankdup", "shove"] {
        Case::new()
            .floats(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])
            .check("float", function);
    }
}

#[test]
fn index_operations_on_the_integer_stack_pop_the_index_first() {
    // [1, 2, 3] remain once the index 2 is popped.
    Case::new()
        .ints(&[1, 2, 3, 2], &[2, 3, 1])
        .check("integer", "yank");
    Case::new()
        .ints(&[1, 2, 3, 0], &[1, 3, 2])
        .check("integer", "shove");
}

#[test]
fn stack_depth_pushes_onto_integers() {
    Case::new()
        .floats(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])
        .ints(&[9], &[9, 3])
        .check("float", "stackdepth");
    Case::new().ints(&[5, 5], &[5, 5, 2]).check("integer", "stackdepth");
}

#[test]
fn index_operations_on_a_missing_stack_consume_nothing() {
    let mut run = run_set(StackState::new().with("integer", [1i64]));
    call(&mut run, "string", "yank");
    assert_eq!(integers(&run), [1]);
}

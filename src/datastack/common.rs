use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::{OpContext, Operation, OperationTable};

/// Operations available on every stack, whatever its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CommonOp {
    Pop,
    Swap,
    Rotate,
    Dup,
    Flush,
    Shove,
    Yank,
    YankDup,
    StackDepth,
}

impl CommonOp {
    pub fn operation(self) -> Operation {
        match self {
            CommonOp::Pop => Operation(pop),
            CommonOp::Swap => Operation(swap),
            CommonOp::Rotate => Operation(rotate),
            CommonOp::Dup => Operation(dup),
            CommonOp::Flush => Operation(flush),
            CommonOp::Shove => Operation(shove),
            CommonOp::Yank => Operation(yank),
            CommonOp::YankDup => Operation(yank_dup),
            CommonOp::StackDepth => Operation(stack_depth),
        }
    }
}

pub fn table() -> OperationTable {
    CommonOp::iter()
        .map(|op| (<&str>::from(op).to_owned(), op.operation()))
        .collect()
}

fn pop(ctx: &mut OpContext) {
    if let Some(s) = ctx.target() {
        s.pop();
    }
}

fn swap(ctx: &mut OpContext) {
    if let Some(s) = ctx.target() {
        s.store_mut().swap();
    }
}

fn rotate(ctx: &mut OpContext) {
    if let Some(s) = ctx.target() {
        s.store_mut().rotate();
    }
}

fn dup(ctx: &mut OpContext) {
    if let Some(s) = ctx.target() {
        s.store_mut().dup();
    }
}

fn flush(ctx: &mut OpContext) {
    if let Some(s) = ctx.target() {
        s.store_mut().flush();
    }
}

/// Pops the depth operand off the integer stack. Nothing is consumed when the
/// target stack does not exist.
fn index_operand(ctx: &mut OpContext) -> Option<i64> {
    ctx.target()?;
    ctx.integers()?.pop()
}

// Index operands are consumed even when they turn out to be out of range.

fn shove(ctx: &mut OpContext) {
    let Some(idx) = index_operand(ctx) else {
        return;
    };
    if let Some(s) = ctx.target() {
        s.store_mut().shove_top(idx);
    }
}

fn yank(ctx: &mut OpContext) {
    let Some(idx) = index_operand(ctx) else {
        return;
    };
    if let Some(s) = ctx.target() {
        s.store_mut().yank(idx);
    }
}

fn yank_dup(ctx: &mut OpContext) {
    let Some(idx) = index_operand(ctx) else {
        return;
    };
    if let Some(s) = ctx.target() {
        s.store_mut().yank_dup(idx);
    }
}

fn stack_depth(ctx: &mut OpContext) {
    let Some(depth) = ctx.target().map(|s| s.size()) else {
        return;
    };
    if let Some(ints) = ctx.integers() {
        ints.push(depth as i64);
    }
}

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::stack::Stack;

use super::{OpContext, Operation, OperationTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BooleanOp {
    #[strum(serialize = "=")]
    Eq,
    And,
    Or,
    Xor,
    Not,
    FromInteger,
    FromFloat,
}

impl BooleanOp {
    pub fn operation(self) -> Operation {
        match self {
            BooleanOp::Eq => Operation(|ctx| logic(ctx, |a, b| a == b)),
            BooleanOp::And => Operation(|ctx| logic(ctx, |a, b| a && b)),
            BooleanOp::Or => Operation(|ctx| logic(ctx, |a, b| a || b)),
            BooleanOp::Xor => Operation(|ctx| logic(ctx, |a, b| a != b)),
            BooleanOp::Not => Operation(not),
            BooleanOp::FromInteger => Operation(from_integer),
            BooleanOp::FromFloat => Operation(from_float),
        }
    }
}

pub fn table() -> OperationTable {
    BooleanOp::iter()
        .map(|op| (<&str>::from(op).to_owned(), op.operation()))
        .collect()
}

fn logic(ctx: &mut OpContext, f: fn(bool, bool) -> bool) {
    let Some(s) = ctx.target_booleans() else {
        return;
    };
    if let Some((a, b)) = s.pop_pair() {
        s.push(f(a, b));
    }
}

fn not(ctx: &mut OpContext) {
    let Some(s) = ctx.target_booleans() else {
        return;
    };
    if let Some(a) = s.pop() {
        s.push(!a);
    }
}

fn from_integer(ctx: &mut OpContext) {
    if ctx.target_booleans().is_none() {
        return;
    }
    let Some(i) = ctx.integers().and_then(Stack::pop) else {
        return;
    };
    if let Some(s) = ctx.target_booleans() {
        s.push(i != 0);
    }
}

fn from_float(ctx: &mut OpContext) {
    if ctx.target_booleans().is_none() {
        return;
    }
    let Some(f) = ctx.floats().and_then(Stack::pop) else {
        return;
    };
    if let Some(s) = ctx.target_booleans() {
        s.push(f != 0.0);
    }
}

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::stack::Stack;

use super::{OpContext, Operation, OperationTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum IntegerOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "%")]
    Rem,
    Min,
    Max,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "=")]
    Eq,
    FromBoolean,
    FromFloat,
    Rand,
}

impl IntegerOp {
    pub fn operation(self) -> Operation {
        match self {
            IntegerOp::Add => Operation(|ctx| arithmetic(ctx, i64::wrapping_add)),
            IntegerOp::Sub => Operation(|ctx| arithmetic(ctx, i64::wrapping_sub)),
            IntegerOp::Mul => Operation(|ctx| arithmetic(ctx, i64::wrapping_mul)),
            IntegerOp::Div => Operation(|ctx| division(ctx, i64::wrapping_div)),
            IntegerOp::Rem => Operation(|ctx| division(ctx, i64::wrapping_rem)),
            IntegerOp::Min => Operation(|ctx| arithmetic(ctx, i64::min)),
            IntegerOp::Max => Operation(|ctx| arithmetic(ctx, i64::max)),
            IntegerOp::Lt => Operation(|ctx| comparison(ctx, |a, b| a < b)),
            IntegerOp::Gt => Operation(|ctx| comparison(ctx, |a, b| a > b)),
            IntegerOp::Eq => Operation(|ctx| comparison(ctx, |a, b| a == b)),
            IntegerOp::FromBoolean => Operation(from_boolean),
            IntegerOp::FromFloat => Operation(from_float),
            IntegerOp::Rand => Operation(rand),
        }
    }
}

pub fn table() -> OperationTable {
    IntegerOp::iter()
        .map(|op| (<&str>::from(op).to_owned(), op.operation()))
        .collect()
}

// Binary operations take `a` as the second element and `b` as the top:
// `[a, b]` becomes `[a op b]`.

fn arithmetic(ctx: &mut OpContext, f: fn(i64, i64) -> i64) {
    let Some(s) = ctx.target_integers() else {
        return;
    };
    if let Some((a, b)) = s.pop_pair() {
        s.push(f(a, b));
    }
}

/// Like `arithmetic`, but a zero divisor leaves both operands in place.
fn division(ctx: &mut OpContext, f: fn(i64, i64) -> i64) {
    let Some(s) = ctx.target_integers() else {
        return;
    };
    if s.lacks(2) || s.peek() == Some(&0) {
        return;
    }
    if let Some((a, b)) = s.pop_pair() {
        s.push(f(a, b));
    }
}

fn comparison(ctx: &mut OpContext, f: fn(i64, i64) -> bool) {
    if ctx.booleans().is_none() {
        return;
    }
    let Some((a, b)) = ctx.target_integers().and_then(Stack::pop_pair) else {
        return;
    };
    if let Some(bools) = ctx.booleans() {
        bools.push(f(a, b));
    }
}

fn from_boolean(ctx: &mut OpContext) {
    if ctx.target_integers().is_none() {
        return;
    }
    let Some(b) = ctx.booleans().and_then(Stack::pop) else {
        return;
    };
    if let Some(s) = ctx.target_integers() {
        s.push(i64::from(b));
    }
}

/// Truncates toward zero, saturating at the integer bounds.
fn from_float(ctx: &mut OpContext) {
    if ctx.target_integers().is_none() {
        return;
    }
    let Some(f) = ctx.floats().and_then(Stack::pop) else {
        return;
    };
    if let Some(s) = ctx.target_integers() {
        s.push(f as i64);
    }
}

fn rand(ctx: &mut OpContext) {
    let value = ctx.rand_int();
    if let Some(s) = ctx.target_integers() {
        s.push(value);
    }
}

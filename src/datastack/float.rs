use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::stack::Stack;

use super::{OpContext, Operation, OperationTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FloatOp {
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
    Sin,
    Cos,
    Tan,
    FromBoolean,
    FromInteger,
    Rand,
}

impl FloatOp {
    pub fn operation(self) -> Operation {
        match self {
            FloatOp::Add => Operation(|ctx| arithmetic(ctx, |a, b| a + b)),
            FloatOp::Sub => Operation(|ctx| arithmetic(ctx, |a, b| a - b)),
            FloatOp::Mul => Operation(|ctx| arithmetic(ctx, |a, b| a * b)),
            FloatOp::Div => Operation(|ctx| division(ctx, |a, b| a / b)),
            FloatOp::Rem => Operation(|ctx| division(ctx, |a, b| a % b)),
            FloatOp::Min => Operation(|ctx| arithmetic(ctx, f64::min)),
            FloatOp::Max => Operation(|ctx| arithmetic(ctx, f64::max)),
            FloatOp::Lt => Operation(|ctx| comparison(ctx, |a, b| a < b)),
            FloatOp::Gt => Operation(|ctx| comparison(ctx, |a, b| a > b)),
            FloatOp::Eq => Operation(|ctx| comparison(ctx, |a, b| a == b)),
            FloatOp::Sin => Operation(|ctx| unary(ctx, f64::sin)),
            FloatOp::Cos => Operation(|ctx| unary(ctx, f64::cos)),
            FloatOp::Tan => Operation(|ctx| unary(ctx, f64::tan)),
            FloatOp::FromBoolean => Operation(from_boolean),
            FloatOp::FromInteger => Operation(from_integer),
            FloatOp::Rand => Operation(rand),
        }
    }
}

pub fn table() -> OperationTable {
    FloatOp::iter()
        .map(|op| (<&str>::from(op).to_owned(), op.operation()))
        .collect()
}

fn unary(ctx: &mut OpContext, f: fn(f64) -> f64) {
    let Some(s) = ctx.target_floats() else {
        return;
    };
    if let Some(a) = s.pop() {
        s.push(f(a));
    }
}

fn arithmetic(ctx: &mut OpContext, f: fn(f64, f64) -> f64) {
    let Some(s) = ctx.target_floats() else {
        return;
    };
    if let Some((a, b)) = s.pop_pair() {
        s.push(f(a, b));
    }
}

fn division(ctx: &mut OpContext, f: fn(f64, f64) -> f64) {
    let Some(s) = ctx.target_floats() else {
        return;
    };
    if s.lacks(2) || s.peek() == Some(&0.0) {
        return;
    }
    if let Some((a, b)) = s.pop_pair() {
        s.push(f(a, b));
    }
}

fn comparison(ctx: &mut OpContext, f: fn(f64, f64) -> bool) {
    if ctx.booleans().is_none() {
        return;
    }
    let Some((a, b)) = ctx.target_floats().and_then(Stack::pop_pair) else {
        return;
    };
    if let Some(bools) = ctx.booleans() {
        bools.push(f(a, b));
    }
}

fn from_boolean(ctx: &mut OpContext) {
    if ctx.target_floats().is_none() {
        return;
    }
    let Some(b) = ctx.booleans().and_then(Stack::pop) else {
        return;
    };
    if let Some(s) = ctx.target_floats() {
        s.push(if b { 1.0 } else { 0.0 });
    }
}

fn from_integer(ctx: &mut OpContext) {
    if ctx.target_floats().is_none() {
        return;
    }
    let Some(i) = ctx.integers().and_then(Stack::pop) else {
        return;
    };
    if let Some(s) = ctx.target_floats() {
        s.push(i as f64);
    }
}

fn rand(ctx: &mut OpContext) {
    let value = ctx.rand_float();
    if let Some(s) = ctx.target_floats() {
        s.push(value);
    }
}

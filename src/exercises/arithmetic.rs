//! Two calculators: `calc` works on integers taken from its arguments,
//! `arith` prompts for two doubles and an operator.

use crate::builtin::BuiltinCommand;
use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::display::general;
use crate::env::Environment;
use crate::interpreter::Factory;
use crate::io_adapters::Console;
use crate::parser::atoi;
use argh::FromArgs;
use std::io::Write;
use thiserror::Error;

/// Number of arguments `calc` expects: `operand operator operand`.
pub const CALC_ARG_COUNT: usize = 3;

pub const CALC_USAGE: &str = "ERROR: This program expects 3 arguments: e.g. calc 4 + 5";

pub const INVALID_OPERATOR: &str = "Invalid Operator: Error performing the calculator command";

/// Exit code of a `calc` invocation with the wrong number of arguments.
pub const USAGE_EXIT_CODE: ExitCode = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("You cannot divide by zero.")]
    DivideByZero,
}

/// Integer arithmetic. Only division is guarded; the other operators wrap on
/// overflow.
pub fn evaluate(lhs: i32, op: Operator, rhs: i32) -> Result<i32, CalcError> {
    match op {
        Operator::Add => Ok(lhs.wrapping_add(rhs)),
        Operator::Subtract => Ok(lhs.wrapping_sub(rhs)),
        Operator::Multiply => Ok(lhs.wrapping_mul(rhs)),
        Operator::Divide if rhs == 0 => Err(CalcError::DivideByZero),
        Operator::Divide => Ok(lhs.wrapping_div(rhs)),
    }
}

/// Floating point arithmetic. Division by zero follows IEEE 754.
pub fn evaluate_real(lhs: f64, op: Operator, rhs: f64) -> f64 {
    match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => lhs / rhs,
    }
}

/// `calc <a> <op> <b>` over integer operands.
///
/// The arguments are taken raw rather than through `argh`: `-` and negative
/// operands would otherwise be read as flags.
pub struct Calc {
    lhs: i32,
    symbol: Option<char>,
    rhs: i32,
}

impl Calc {
    pub fn new(lhs: i32, symbol: Option<char>, rhs: i32) -> Self {
        Self { lhs, symbol, rhs }
    }
}

/// `calc` invoked with the wrong number of arguments.
struct CalcUsage;

impl CommandFactory for Factory<Calc> {
    fn describe(&self) -> (&'static str, &'static str) {
        ("calc", "integer calculator: calc <a> <+|-|*|/> <b>")
    }

    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        if name != "calc" {
            return None;
        }
        if args.len() != CALC_ARG_COUNT {
            return Some(Box::new(CalcUsage));
        }
        Some(Box::new(Calc::new(
            atoi(args[0]),
            args[1].chars().next(),
            atoi(args[2]),
        )))
    }
}

impl ExecutableCommand for Calc {
    fn execute(
        self: Box<Self>,
        console: &mut Console<'_>,
        _env: &mut Environment,
    ) -> anyhow::Result<ExitCode> {
        let Some(op) = self.symbol.and_then(Operator::from_symbol) else {
            writeln!(console, "{}", INVALID_OPERATOR)?;
            return Ok(0);
        };
        match evaluate(self.lhs, op, self.rhs) {
            Ok(result) => writeln!(console, "Output: {}", result)?,
            Err(e) => writeln!(console, "{}", e)?,
        }
        Ok(0)
    }
}

impl ExecutableCommand for CalcUsage {
    fn execute(
        self: Box<Self>,
        console: &mut Console<'_>,
        _env: &mut Environment,
    ) -> anyhow::Result<ExitCode> {
        writeln!(console, "{}", CALC_USAGE)?;
        Ok(USAGE_EXIT_CODE)
    }
}

#[derive(FromArgs)]
/// Read two numbers and an operator, then print the result.
pub struct Arith {}

impl BuiltinCommand for Arith {
    fn name() -> &'static str {
        "arith"
    }

    fn summary() -> &'static str {
        "floating point calculator with prompts"
    }

    fn execute(
        self,
        console: &mut Console<'_>,
        _env: &mut Environment,
    ) -> anyhow::Result<ExitCode> {
        let lhs = console.read_double("Enter a double value: ")?;
        let rhs = console.read_double("Enter a double value: ")?;
        let symbol = console.read_char("Enter +, -, *, or /: ")?;

        // An unknown symbol is silently ignored.
        if let Some(op) = Operator::from_symbol(symbol) {
            writeln!(
                console,
                "{} {} {} is {}",
                general(lhs),
                op.symbol(),
                general(rhs),
                general(evaluate_real(lhs, op, rhs))
            )?;
        }
        Ok(0)
    }
}

//! Small integer exercises: parity, character codes, quantity phrases,
//! ordering a pair and integer wrap-around.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;

pub fn is_even(num: i32) -> bool {
    num % 2 == 0
}

/// Describe a quantity in words.
pub fn quantity_phrase(quantity: i32) -> &'static str {
    match quantity {
        i32::MIN..=-1 => "negative",
        0 => "no",
        1 => "single",
        2 => "a couple of",
        3 => "a few",
        _ => "many",
    }
}

pub fn apples_pluralized(quantity: i32) -> &'static str {
    if quantity == 1 { "apple" } else { "apples" }
}

/// Put the smaller value in `x` and the larger in `y`.
pub fn sort2(x: &mut i32, y: &mut i32) {
    if *x > *y {
        std::mem::swap(x, y);
    }
}

#[derive(FromArgs)]
/// Read a number and say whether it is even or odd.
pub struct Even {}

impl BuiltinCommand for Even {
    fn name() -> &'static str {
        "even"
    }

    fn summary() -> &'static str {
        "say whether a number is even or odd"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let num = console.read_int("Please enter a number: ")?;
        let parity = if is_even(num) { "even" } else { "odd" };
        writeln!(console, "{} is {}.", num, parity)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Read a character and print its character code.
pub struct Ascii {}

impl BuiltinCommand for Ascii {
    fn name() -> &'static str {
        "ascii"
    }

    fn summary() -> &'static str {
        "print the code of a character"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let input = console.read_char("Enter a single character: ")?;
        writeln!(
            console,
            "You entered '{}', which has ASCII code {}",
            input,
            u32::from(input)
        )?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Describe Mary's apples, then yours.
pub struct Apples {}

impl BuiltinCommand for Apples {
    fn name() -> &'static str {
        "apples"
    }

    fn summary() -> &'static str {
        "describe a number of apples in words"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        const MARY_APPLES: i32 = 3;
        writeln!(
            console,
            "Mary has {} {}.",
            quantity_phrase(MARY_APPLES),
            apples_pluralized(MARY_APPLES)
        )?;

        let count = console.read_int("How many apples do you have? ")?;
        writeln!(
            console,
            "You have {} {}.",
            quantity_phrase(count),
            apples_pluralized(count)
        )?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Order two integers in place and show them before and after.
pub struct Sort2 {}

impl BuiltinCommand for Sort2 {
    fn name() -> &'static str {
        "sort2"
    }

    fn summary() -> &'static str {
        "order a pair of integers in place"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let mut x = 7;
        let mut y = 5;
        writeln!(console, "{} {}", x, y)?;

        // swap needed
        sort2(&mut x, &mut y);
        writeln!(console, "{} {}", x, y)?;

        // already ordered
        sort2(&mut x, &mut y);
        writeln!(console, "{} {}", x, y)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Show what adding one to the largest 32-bit integer does.
pub struct Overflow {}

impl BuiltinCommand for Overflow {
    fn name() -> &'static str {
        "overflow"
    }

    fn summary() -> &'static str {
        "wrap the largest 32-bit integer around"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let x = i32::MAX;
        writeln!(console, "{}", x)?;
        writeln!(console, "{}", x.wrapping_add(1))?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::test_support::{run_builtin, test_env};

    #[test]
    fn test_is_even() {
        assert!(is_even(0));
        assert!(is_even(-4));
        assert!(!is_even(7));
        assert!(!is_even(-3));
    }

    #[test]
    fn test_quantity_phrase_ladder() {
        assert_eq!(quantity_phrase(-1), "negative");
        assert_eq!(quantity_phrase(i32::MIN), "negative");
        assert_eq!(quantity_phrase(0), "no");
        assert_eq!(quantity_phrase(1), "single");
        assert_eq!(quantity_phrase(2), "a couple of");
        assert_eq!(quantity_phrase(3), "a few");
        assert_eq!(quantity_phrase(4), "many");
        assert_eq!(quantity_phrase(1000), "many");
    }

    #[test]
    fn test_apples_pluralized() {
        assert_eq!(apples_pluralized(1), "apple");
        assert_eq!(apples_pluralized(0), "apples");
        assert_eq!(apples_pluralized(2), "apples");
    }

    #[test]
    fn test_sort2() {
        let (mut x, mut y) = (7, 5);
        sort2(&mut x, &mut y);
        assert_eq!((x, y), (5, 7));
        sort2(&mut x, &mut y);
        assert_eq!((x, y), (5, 7));
    }

    #[test]
    fn test_even_exercise() {
        let mut env = test_env();
        let (_, out) = run_builtin(Even {}, "-3\n", &mut env);
        assert_eq!(out, "Please enter a number: -3 is odd.\n");
    }

    #[test]
    fn test_ascii_exercise() {
        let mut env = test_env();
        let (_, out) = run_builtin(Ascii {}, " a\n", &mut env);
        assert_eq!(
            out,
            "Enter a single character: You entered 'a', which has ASCII code 97\n"
        );
    }

    #[test]
    fn test_apples_exercise() {
        let mut env = test_env();
        let (_, out) = run_builtin(Apples {}, "1\n", &mut env);
        assert_eq!(
            out,
            "Mary has a few apples.\nHow many apples do you have? You have single apple.\n"
        );
    }

    #[test]
    fn test_sort2_exercise() {
        let mut env = test_env();
        let (_, out) = run_builtin(Sort2 {}, "", &mut env);
        assert_eq!(out, "7 5\n5 7\n5 7\n");
    }

    #[test]
    fn test_overflow_exercise() {
        let mut env = test_env();
        let (_, out) = run_builtin(Overflow {}, "", &mut env);
        assert_eq!(out, "2147483647\n-2147483648\n");
    }
}

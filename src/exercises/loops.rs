//! Counting loops: fizzbuzz variants, even numbers and running sums.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;

/// Line printed for `i` by classic fizzbuzz.
pub fn fizzbuzz_line(i: i32) -> String {
    match (i % 3 == 0, i % 5 == 0) {
        (true, true) => "fizzbuzz".to_string(),
        (true, false) => "fizz".to_string(),
        (false, true) => "buzz".to_string(),
        (false, false) => i.to_string(),
    }
}

/// Line printed for `i` when fizz, buzz and pop (multiples of 7) concatenate.
pub fn fizzbuzzpop_line(i: i32) -> String {
    let mut line = String::new();
    for (divisor, word) in [(3, "fizz"), (5, "buzz"), (7, "pop")] {
        if i % divisor == 0 {
            line.push_str(word);
        }
    }
    if line.is_empty() {
        line = i.to_string();
    }
    line
}

/// Sum of `1..=value`; zero for anything below 1.
pub fn sum_to(value: i32) -> i32 {
    (1..=value).fold(0i32, |acc, i| acc.wrapping_add(i))
}

#[derive(FromArgs)]
/// Print fizz, buzz or fizzbuzz for each number up to a limit.
pub struct FizzBuzz {
    #[argh(option, default = "15")]
    /// last number to print (default 15).
    pub count_to: i32,
}

impl BuiltinCommand for FizzBuzz {
    fn name() -> &'static str {
        "fizzbuzz"
    }

    fn summary() -> &'static str {
        "classic fizzbuzz"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        for i in 1..=self.count_to {
            writeln!(console, "{}", fizzbuzz_line(i))?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print fizz, buzz and pop (for multiples of 7) for each number up to a limit.
pub struct FizzBuzzPop {
    #[argh(option, default = "150")]
    /// last number to print (default 150).
    pub count_to: i32,
}

impl BuiltinCommand for FizzBuzzPop {
    fn name() -> &'static str {
        "fizzbuzzpop"
    }

    fn summary() -> &'static str {
        "fizzbuzz with pop for multiples of seven"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        writeln!(console, "Fizz Buzz Pop")?;
        for i in 1..=self.count_to {
            writeln!(console, "{}", fizzbuzzpop_line(i))?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print the even numbers up to 20 two ways, then a running sum.
pub struct Loops {
    #[argh(option, default = "5")]
    /// upper bound passed to sumTo (default 5).
    pub sum_to: i32,
}

impl BuiltinCommand for Loops {
    fn name() -> &'static str {
        "loops"
    }

    fn summary() -> &'static str {
        "for-loop practice: even numbers and sumTo"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        const LIMIT: i32 = 20;

        for i in (1..=LIMIT).filter(|i| i % 2 == 0) {
            writeln!(console, "{}", i)?;
        }
        writeln!(console)?;

        // The stepped version starts at 1, so it prints the odd numbers.
        for i in (1..=LIMIT).step_by(2) {
            writeln!(console, "{}", i)?;
        }
        writeln!(console)?;

        writeln!(console, "Passing {} to sumTo.", self.sum_to)?;
        writeln!(console, "SumTo Result: {}", sum_to(self.sum_to))?;
        Ok(0)
    }
}

//! Primality: the trial-division tester with its start-up self-test, and the
//! single-digit lookup version.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;
use tracing::debug;

/// Cases checked every time the `prime` exercise starts, in any build profile.
pub const SELF_TEST: [(i32, bool); 17] = [
    (0, false),
    (1, false),
    (2, true),
    (3, true),
    (4, false),
    (5, true),
    (7, true),
    (9, false),
    (11, true),
    (13, true),
    (15, false),
    (16, false),
    (17, true),
    (19, true),
    (97, true),
    (99, false),
    (13417, true),
];

/// Trial division by odd candidates up to the square root, after handling
/// everything below 3 and the even numbers.
pub fn is_prime(x: i32) -> bool {
    if x <= 1 {
        return false;
    }
    if x == 2 {
        return true;
    }
    if x % 2 == 0 {
        return false;
    }
    // i64 so `test * test` cannot overflow near i32::MAX.
    let x = i64::from(x);
    let mut test: i64 = 3;
    while test * test <= x {
        if x % test == 0 {
            return false;
        }
        test += 2;
    }
    true
}

/// Primality for the digits 0 to 9 only.
pub fn is_single_digit_prime(x: i32) -> bool {
    matches!(x, 2 | 3 | 5 | 7)
}

/// Run [`SELF_TEST`], panicking on the first mismatch.
pub fn run_self_test() {
    for (input, expected) in SELF_TEST {
        assert_eq!(
            is_prime(input),
            expected,
            "is_prime({}) should be {}",
            input,
            expected
        );
    }
    debug!(cases = SELF_TEST.len(), "primality self-test passed");
}

#[derive(FromArgs)]
/// Check the trial-division primality test against a fixed table.
pub struct Prime {
    #[argh(option)]
    /// also report whether this number is prime.
    pub check: Option<i32>,
}

impl BuiltinCommand for Prime {
    fn name() -> &'static str {
        "prime"
    }

    fn summary() -> &'static str {
        "self-test the trial-division primality check"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        run_self_test();
        writeln!(console, "Success!")?;
        if let Some(n) = self.check {
            let verdict = if is_prime(n) { "is" } else { "is not" };
            writeln!(console, "{} {} prime.", n, verdict)?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Read a digit and say whether it is prime.
pub struct EasyPrime {}

impl BuiltinCommand for EasyPrime {
    fn name() -> &'static str {
        "easy-prime"
    }

    fn summary() -> &'static str {
        "say whether a digit between 0 and 9 is prime"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let input = console.read_int("Enter a number between 0 and 9 (inclusive):")?;

        if !(0..=9).contains(&input) {
            writeln!(console, "The input was invalid.")?;
        } else if is_single_digit_prime(input) {
            writeln!(console, "The input is prime.")?;
        } else {
            writeln!(console, "The input is not prime.")?;
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::test_support::{run_builtin, test_env};

    fn naive_is_prime(x: i32) -> bool {
        x > 1 && (2..x).all(|d| x % d != 0)
    }

    #[test]
    fn test_is_prime_matches_naive_definition() {
        for x in 0..=20000 {
            assert_eq!(is_prime(x), naive_is_prime(x), "mismatch at {}", x);
        }
    }

    #[test]
    fn test_is_prime_known_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(is_prime(13417));
        assert!(!is_prime(-7));
        assert!(is_prime(i32::MAX));
    }

    #[test]
    fn test_self_test_passes() {
        run_self_test();
    }

    #[test]
    fn test_prime_exercise_reports_success() {
        let mut env = test_env();
        let (res, out) = run_builtin(Prime { check: Some(91) }, "", &mut env);
        assert_eq!(res.unwrap(), 0);
        assert_eq!(out, "Success!\n91 is not prime.\n");
    }

    #[test]
    fn test_single_digit_primes() {
        let primes: Vec<i32> = (0..=9).filter(|&x| is_single_digit_prime(x)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_easy_prime_messages() {
        let cases = [
            ("7\n", "The input is prime.\n"),
            ("8\n", "The input is not prime.\n"),
            ("10\n", "The input was invalid.\n"),
            ("-1\n", "The input was invalid.\n"),
            ("oops\n", "The input is not prime.\n"),
        ];
        for (input, expected) in cases {
            let mut env = test_env();
            let (res, out) = run_builtin(EasyPrime {}, input, &mut env);
            assert_eq!(res.unwrap(), 0);
            assert_eq!(
                out,
                format!("Enter a number between 0 and 9 (inclusive):{}", expected)
            );
        }
    }
}

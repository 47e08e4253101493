//! Temperature conversion tables.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::{Result, ensure};
use argh::FromArgs;
use std::io::Write;

pub fn fahrenheit_to_celsius(fahr: f32) -> f32 {
    ((5.0 / 9.0) * (f64::from(fahr) - 32.0)) as f32
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    ((9.0 / 5.0) * f64::from(celsius) + 32.0) as f32
}

/// Longest table the exercises will print.
pub const MAX_TABLE_ROWS: usize = 10_000;

/// `(input, converted)` pairs from `lower` up to and including `upper`.
///
/// Row `i` starts at `lower + i * step`. Fails when the bounds or the step are
/// not finite, the step is not positive, or the table would be longer than
/// [`MAX_TABLE_ROWS`].
pub fn conversion_table(
    lower: f32,
    upper: f32,
    step: f32,
    convert: fn(f32) -> f32,
) -> Result<Vec<(f32, f32)>> {
    ensure!(
        lower.is_finite() && upper.is_finite(),
        "bounds must be finite, got {} and {}",
        lower,
        upper
    );
    ensure!(
        step.is_finite() && step > 0.0,
        "step must be positive, got {}",
        step
    );
    let mut rows = Vec::new();
    loop {
        let value = lower + rows.len() as f32 * step;
        if value > upper {
            break;
        }
        ensure!(
            rows.len() < MAX_TABLE_ROWS,
            "table from {} to {} by {} has more than {} rows",
            lower,
            upper,
            step,
            MAX_TABLE_ROWS
        );
        rows.push((value, convert(value)));
    }
    Ok(rows)
}

#[derive(FromArgs)]
/// Print a Fahrenheit to Celsius table.
pub struct FahrTable {
    #[argh(option, default = "0.0")]
    /// first Fahrenheit value (default 0).
    pub lower: f32,
    #[argh(option, default = "300.0")]
    /// last Fahrenheit value (default 300).
    pub upper: f32,
    #[argh(option, default = "20.0")]
    /// distance between rows (default 20).
    pub step: f32,
}

impl BuiltinCommand for FahrTable {
    fn name() -> &'static str {
        "fahr-table"
    }

    fn summary() -> &'static str {
        "Fahrenheit to Celsius table"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let rows = conversion_table(self.lower, self.upper, self.step, fahrenheit_to_celsius)?;
        writeln!(console, "{:>3} {:>6}", "Fahr", "Celcius")?;
        for (fahr, celsius) in rows {
            writeln!(console, "{:3.0}  {:6.1}", fahr, celsius)?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print a Celsius to Fahrenheit table.
pub struct CelsiusTable {
    #[argh(option, default = "0.0")]
    /// first Celsius value (default 0).
    pub lower: f32,
    #[argh(option, default = "300.0")]
    /// last Celsius value (default 300).
    pub upper: f32,
    #[argh(option, default = "20.0")]
    /// distance between rows (default 20).
    pub step: f32,
}

impl BuiltinCommand for CelsiusTable {
    fn name() -> &'static str {
        "celsius-table"
    }

    fn summary() -> &'static str {
        "Celsius to Fahrenheit table"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let rows = conversion_table(self.lower, self.upper, self.step, celsius_to_fahrenheit)?;
        writeln!(console, "{:>3} {:>6}", "Celcius", "Fahr")?;
        for (celsius, fahr) in rows {
            writeln!(console, "{:3.1}  {:6.1}", celsius, fahr)?;
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::test_support::{run_builtin, test_env};

    #[test]
    fn test_conversions() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_conversion_table_bounds() {
        let rows = conversion_table(0.0, 300.0, 20.0, fahrenheit_to_celsius).unwrap();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows.first().map(|r| r.0), Some(0.0));
        assert_eq!(rows.last().map(|r| r.0), Some(300.0));
    }

    #[test]
    fn test_conversion_table_rejects_non_positive_step() {
        assert!(conversion_table(0.0, 300.0, 0.0, fahrenheit_to_celsius).is_err());
        assert!(conversion_table(0.0, 300.0, -5.0, celsius_to_fahrenheit).is_err());
    }

    #[test]
    fn test_conversion_table_tiny_step_is_rejected() {
        // 256 + 1e-5 rounds back to 256 in f32.
        assert_eq!(256.0f32 + 0.00001f32, 256.0f32);
        let err = conversion_table(0.0, 300.0, 0.00001, fahrenheit_to_celsius).unwrap_err();
        assert!(err.to_string().contains("more than 10000 rows"));
    }

    #[test]
    fn test_conversion_table_rejects_non_finite_values() {
        assert!(conversion_table(0.0, f32::INFINITY, 20.0, fahrenheit_to_celsius).is_err());
        assert!(conversion_table(f32::NAN, 300.0, 20.0, fahrenheit_to_celsius).is_err());
        assert!(conversion_table(0.0, 300.0, f32::INFINITY, fahrenheit_to_celsius).is_err());
        assert!(conversion_table(0.0, 300.0, f32::NAN, fahrenheit_to_celsius).is_err());
    }

    #[test]
    fn test_conversion_table_at_row_limit() {
        let rows = conversion_table(0.0, 9999.0, 1.0, celsius_to_fahrenheit).unwrap();
        assert_eq!(rows.len(), MAX_TABLE_ROWS);
        assert_eq!(rows.last().map(|r| r.0), Some(9999.0));
    }

    #[test]
    fn test_upper_below_lower_gives_empty_table() {
        let rows = conversion_table(10.0, 0.0, 1.0, celsius_to_fahrenheit).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_fahr_table_output() {
        let mut env = test_env();
        let cmd = FahrTable {
            lower: 0.0,
            upper: 300.0,
            step: 20.0,
        };
        let (res, out) = run_builtin(cmd, "", &mut env);
        assert_eq!(res.unwrap(), 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "Fahr Celcius");
        assert_eq!(lines[1], "  0   -17.8");
        assert_eq!(lines[3], " 40     4.4");
        assert_eq!(lines[16], "300   148.9");
    }

    #[test]
    fn test_celsius_table_output() {
        let mut env = test_env();
        let cmd = CelsiusTable {
            lower: 0.0,
            upper: 300.0,
            step: 20.0,
        };
        let (_, out) = run_builtin(cmd, "", &mut env);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Celcius   Fahr");
        assert_eq!(lines[1], "0.0    32.0");
        assert_eq!(lines[2], "20.0    68.0");
        assert_eq!(lines[16], "300.0   572.0");
    }

    #[test]
    fn test_table_with_bad_step_reports_error() {
        let mut env = test_env();
        let cmd = FahrTable {
            lower: 0.0,
            upper: 10.0,
            step: 0.0,
        };
        let (res, out) = run_builtin(cmd, "", &mut env);
        assert!(res.is_err());
        assert!(out.is_empty());
    }
}

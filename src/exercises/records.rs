//! Plain aggregates: fractions and ad revenue.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::display::general;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;
use std::ops::Mul;

/// A numerator over a denominator. The denominator is not checked for zero
/// and products are never reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i32,
    pub denominator: i32,
}

impl Default for Fraction {
    fn default() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }
}

impl Fraction {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator.wrapping_mul(other.numerator),
            denominator: self.denominator.wrapping_mul(other.denominator),
        }
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        self.multiply(&rhs)
    }
}

/// Earnings from a batch of watched ads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdRevenue {
    pub ads_watched: i32,
    pub percent_clicked: f64,
    pub earnings: f64,
}

impl AdRevenue {
    pub fn new(ads_watched: i32, percent_clicked: f64, earnings: f64) -> Self {
        Self {
            ads_watched,
            percent_clicked,
            earnings,
        }
    }

    pub fn total(&self) -> f64 {
        f64::from(self.ads_watched) * self.percent_clicked * self.earnings
    }
}

fn read_fraction(console: &mut Console<'_>) -> Result<Fraction> {
    let mut fraction = Fraction::default();
    fraction.numerator = console.read_int("Enter a value for the numerator: ")?;
    fraction.denominator = console.read_int("Enter a value for the denominator: ")?;
    Ok(fraction)
}

#[derive(FromArgs)]
/// Read two fractions and print their product.
pub struct Fractions {}

impl BuiltinCommand for Fractions {
    fn name() -> &'static str {
        "fractions"
    }

    fn summary() -> &'static str {
        "multiply two fractions"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let first = read_fraction(console)?;
        let second = read_fraction(console)?;
        let product = first.multiply(&second);
        writeln!(
            console,
            "Your fractions multiplied together: {}/{}",
            product.numerator, product.denominator
        )?;
        Ok(0)
    }
}

fn write_revenue(console: &mut Console<'_>, revenue: &AdRevenue) -> Result<()> {
    writeln!(console, "Ads Watched: {}", revenue.ads_watched)?;
    writeln!(console, "Percentage Clicked: {}", general(revenue.percent_clicked))?;
    writeln!(console, "Earnings per click: {}", general(revenue.earnings))?;
    writeln!(console, "Total Earnings: {}", general(revenue.total()))?;
    Ok(())
}

#[derive(FromArgs)]
/// Print two ad revenue records and their total earnings.
pub struct AdRevenueReport {}

impl BuiltinCommand for AdRevenueReport {
    fn name() -> &'static str {
        "ad-revenue"
    }

    fn summary() -> &'static str {
        "total the earnings of two ad revenue records"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        write_revenue(console, &AdRevenue::new(1000, 0.14, 0.003))?;
        writeln!(console)?;
        write_revenue(console, &AdRevenue::new(100, 0.2, 1.003))?;
        Ok(0)
    }
}

//! A ball dropped from a tower with no initial velocity.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::display::general;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;

/// Gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.8;

/// Seconds after release that the exercise reports on.
pub const REPORT_SECONDS: std::ops::RangeInclusive<i32> = 0..=5;

/// Height above the ground after `seconds`, never below zero.
pub fn ball_height(tower_height: f64, seconds: i32) -> f64 {
    let t = f64::from(seconds);
    let fallen = GRAVITY * (t * t) / 2.0;
    (tower_height - fallen).max(0.0)
}

/// Report line for one point in time.
pub fn height_line(tower_height: f64, seconds: i32) -> String {
    let height = ball_height(tower_height, seconds);
    if height <= 0.0 {
        format!("At {} seconds, the ball is on the ground.", seconds)
    } else {
        format!(
            "At {} seconds, the ball is at height: {} meters",
            seconds,
            general(height)
        )
    }
}

#[derive(FromArgs)]
/// Read a tower height and print how high a dropped ball is each second.
pub struct Tower {}

impl BuiltinCommand for Tower {
    fn name() -> &'static str {
        "tower"
    }

    fn summary() -> &'static str {
        "height of a ball dropped from a tower"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let tower_height = console.read_double("Please enter the height of the tower: ")?;
        for seconds in REPORT_SECONDS {
            writeln!(console, "{}", height_line(tower_height, seconds))?;
        }
        Ok(0)
    }
}

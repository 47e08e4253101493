//! Small interactive console exercises behind one launcher.
//!
//! Every exercise follows the same shape: prompt for a few values, parse them,
//! compute something with a pure function and print a human readable report.
//! Exercises are independent commands created by name, either from the
//! process arguments or from an interactive menu.
//!
//! The main entry point is [`Launcher`]. Input goes through [`Console`], which
//! reads whitespace-separated values the way stream extraction does: a token
//! that is not a number reads as zero unless [`InputMode::Strict`] is
//! selected. The compute functions of each exercise are public under
//! [`exercises`].

mod builtin;
pub mod command;
pub mod display;
pub mod env;
pub mod exercises;
mod interpreter;
mod io_adapters;
pub mod logging;
pub mod parser;

pub use interpreter::{Launcher, UnknownExercise};
pub use io_adapters::{Console, InputError, InputMode};

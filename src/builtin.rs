use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::env::{Environment, parse_switch};
use crate::interpreter::Factory;
use crate::io_adapters::{Console, InputMode};
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Commands known to the launcher at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
/// in-process against a [`Console`]. Every exercise is a builtin, as are the
/// session commands of the menu.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "hilow" or "help".
    fn name() -> &'static str;

    /// One line shown next to the name by `help`.
    fn summary() -> &'static str;

    /// Executes the command.
    ///
    /// Return value should follow shell conventions: 0 for success, non-zero for error.
    fn execute(self, console: &mut Console<'_>, env: &mut Environment) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        console: &mut Console<'_>,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        match <T as BuiltinCommand>::execute(*self, console, env) {
            Ok(x) => Ok(x),
            Err(e) => {
                writeln!(console, "{}", e)?;
                Ok(1)
            }
        }
    }
}

struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        console: &mut Console<'_>,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        writeln!(console, "{}", self.output.trim_end())?;
        Ok(if self.is_error { 1 } else { 0 })
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn describe(&self) -> (&'static str, &'static str) {
        (T::name(), T::summary())
    }

    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// List every exercise and session command.
pub struct Help {}

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn summary() -> &'static str {
        "list the available exercises"
    }

    fn execute(self, console: &mut Console<'_>, env: &mut Environment) -> Result<ExitCode> {
        let width = env
            .catalogue
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, summary) in &env.catalogue {
            writeln!(console, "  {:<width$}  {}", name, summary)?;
        }
        writeln!(console, "Run `<name> --help` for the options of a single exercise.")?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Show or change how malformed numeric input is handled.
/// Lenient reads treat it as zero; strict reads stop the exercise.
pub struct Strict {
    #[argh(positional)]
    /// on or off; prints the current setting when omitted.
    pub state: Option<String>,
}

impl BuiltinCommand for Strict {
    fn name() -> &'static str {
        "strict"
    }

    fn summary() -> &'static str {
        "show or set strict input handling (on|off)"
    }

    fn execute(self, console: &mut Console<'_>, env: &mut Environment) -> Result<ExitCode> {
        if let Some(state) = &self.state {
            let strict = parse_switch(state)
                .ok_or_else(|| anyhow::anyhow!("strict: expected on or off, got {:?}", state))?;
            env.set_input_mode(InputMode::from_strict(strict));
        }
        let label = match env.input_mode() {
            InputMode::Strict => "on",
            InputMode::Lenient => "off",
        };
        writeln!(console, "strict input: {}", label)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Leave the exercise menu.
pub struct Exit {
    #[argh(positional, greedy)]
    /// ignored
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn summary() -> &'static str {
        "leave the menu"
    }

    fn execute(self, _console: &mut Console<'_>, env: &mut Environment) -> Result<ExitCode> {
        env.should_exit = true;
        Ok(0)
    }
}

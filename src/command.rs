use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// The command-line calculator's usage error reports `-1`, which the
/// operating system surfaces as `255`.
pub type ExitCode = i32;

/// Object-safe trait for anything the launcher can run: exercises and
/// session commands alike.
///
/// This is implemented by built-ins via a blanket impl and directly by
/// commands that parse their own raw arguments.
pub trait ExecutableCommand {
    /// Runs the command against the given console.
    fn execute(self: Box<Self>, console: &mut Console<'_>, env: &mut Environment)
    -> Result<ExitCode>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    /// Name and one-line summary, used by the `help` listing.
    fn describe(&self) -> (&'static str, &'static str);

    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(
        &self,
        env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>>;
}

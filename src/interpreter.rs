use crate::command::{CommandFactory, ExitCode};
use crate::env::Environment;
use crate::io_adapters::Console;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// No registered command has the requested name.
#[derive(Debug, Error)]
#[error("exercise not found: {0}")]
pub struct UnknownExercise(pub String);

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate: builtins (exercises and
/// session commands) and the raw-argument calculator.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Runs exercises by name, one at a time or from an interactive menu.
///
/// The launcher maintains an [`Environment`] and a list of [`CommandFactory`]
/// objects that are queried to create commands by name. See [`Default`] for
/// the commands included out of the box.
///
/// Example
/// ```
/// use console_exercises::Launcher;
/// let mut launcher = Launcher::default();
/// let mut input = std::io::Cursor::new("");
/// let mut output = Vec::new();
/// let code = launcher.run_with("calc", &["4", "+", "5"], &mut input, &mut output).unwrap();
/// assert_eq!(code, 0);
/// assert_eq!(output, b"Output: 9\n");
/// ```
pub struct Launcher {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Launcher {
    /// Create a launcher with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self::with_env(Environment::new(), commands)
    }

    /// Create a launcher over an existing environment.
    pub fn with_env(mut env: Environment, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        env.catalogue = commands.iter().map(|factory| factory.describe()).collect();
        Self { env, commands }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run a single command on the process's standard streams.
    ///
    /// Returns the command's exit code. An unknown name fails with
    /// [`UnknownExercise`]; any other error comes from the command itself.
    pub fn run(&mut self, name: &str, args: &[&str]) -> anyhow::Result<ExitCode> {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        self.run_with(name, args, &mut input, &mut output)
    }

    /// Run a single command against the given streams.
    pub fn run_with(
        &mut self,
        name: &str,
        args: &[&str],
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(&self.env, name, args) {
                debug!(command = name, ?args, "dispatching");
                let mut console = Console::new(input, output, self.env.input_mode());
                let code = cmd.execute(&mut console, &mut self.env)?;
                debug!(command = name, code, "finished");
                return Ok(code);
            }
        }
        Err(UnknownExercise(name.to_string()).into())
    }

    /// Run one menu line: a command name followed by its arguments.
    ///
    /// Blank lines do nothing and yield `None`.
    pub fn run_line(
        &mut self,
        line: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<Option<ExitCode>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        self.run_with(name, args, input, output).map(Some)
    }

    /// Interactive menu: read a line, run it, repeat until `exit`, Ctrl-C or end of input.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("Console exercises. Type `help` for the list, `exit` to leave.");
        info!(commands = self.commands.len(), "menu started");

        while !self.env.should_exit {
            match rl.readline("exercise> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    let stdin = std::io::stdin();
                    let mut input = stdin.lock();
                    let mut output = std::io::stdout();
                    match self.run_line(&line, &mut input, &mut output) {
                        Ok(Some(code)) if code != 0 => println!("[exit {}]", code),
                        Ok(_) => {}
                        Err(err) => println!("{}", err),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Launcher {
    /// Create a launcher with every exercise and the menu's session commands:
    /// `help`, `strict` and `exit`.
    fn default() -> Self {
        use crate::builtin::{Exit, Help, Strict};
        let mut commands: Vec<Box<dyn CommandFactory>> = vec![
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Strict>::default()),
            Box::new(Factory::<Exit>::default()),
        ];
        commands.extend(crate::exercises::factories());
        Self::new(commands)
    }
}

use crate::io_adapters::InputMode;
use std::collections::HashMap;
use std::env as stdenv;

/// Variable that switches malformed-input handling to [`InputMode::Strict`]
/// when set to `1`, `true` or `on`.
pub const STRICT_INPUT_VAR: &str = "EXERCISES_STRICT_INPUT";

/// Session state shared by every command the launcher runs.
///
/// The environment contains:
/// - `vars`: the process variables captured when the session started.
/// - `input_mode`: how consoles created for later commands treat malformed input.
/// - `catalogue`: name and summary of every registered command, for `help`.
/// - `should_exit`: a flag that the menu loop checks to know when to terminate.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Key-value store of environment variables.
    pub vars: HashMap<String, String>,
    /// Malformed-input policy for consoles created from now on.
    pub input_mode: InputMode,
    /// Registered commands as `(name, summary)` pairs.
    pub catalogue: Vec<(&'static str, &'static str)>,
    /// When set to true, indicates that an interactive loop should exit.
    pub should_exit: bool,
}

impl Environment {
    /// Capture the current process state into a new `Environment` instance.
    ///
    /// The input mode starts as [`InputMode::Lenient`] unless
    /// [`STRICT_INPUT_VAR`] asks for strict reads.
    pub fn new() -> Self {
        let mut env = Self {
            vars: stdenv::vars().collect(),
            input_mode: InputMode::default(),
            catalogue: Vec::new(),
            should_exit: false,
        };
        env.input_mode = env.configured_input_mode();
        env
    }

    /// Value of a variable captured at start-up.
    pub fn get_var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Input mode asked for by [`STRICT_INPUT_VAR`]; lenient when it is unset
    /// or not an on/off value.
    fn configured_input_mode(&self) -> InputMode {
        self.get_var(STRICT_INPUT_VAR)
            .and_then(parse_switch)
            .map(InputMode::from_strict)
            .unwrap_or_default()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret an on/off style value. Returns `None` for anything else.
pub(crate) fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

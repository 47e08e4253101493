//! Exercises that combine names and ages.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;

/// A name with an age, as read from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn is_older_than(&self, other: &Person) -> bool {
        self.age > other.age
    }
}

/// Sentence naming the older of the two. Equal ages name the second person.
pub fn older_sentence(first: &Person, second: &Person) -> String {
    let (older, younger) = if first.is_older_than(second) {
        (first, second)
    } else {
        (second, first)
    };
    format!(
        "{} (age {}) is older than {} (age {}).",
        older.name, older.age, younger.name, younger.age
    )
}

/// Age plus the length of the name in bytes.
pub fn age_plus_name_length(age: i32, name: &str) -> i32 {
    let length = i32::try_from(name.len()).unwrap_or(i32::MAX);
    age.wrapping_add(length)
}

#[derive(FromArgs)]
/// Read a name and an age and add the name's length to the age.
pub struct NameAge {}

impl BuiltinCommand for NameAge {
    fn name() -> &'static str {
        "name-age"
    }

    fn summary() -> &'static str {
        "add the length of your name to your age"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let name = console.read_line("Please enter your name: ")?;
        let age = console.read_int("Please enter your age: ")?;
        writeln!(
            console,
            "Your age + name length is {}",
            age_plus_name_length(age, &name)
        )?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Read the names and ages of two people and print who is older.
pub struct Older {}

fn read_person(console: &mut Console<'_>, num: u32) -> Result<Person> {
    let name = console.read_line(&format!("Enter the name of the person #{}: ", num))?;
    let age = console.read_int(&format!("Enter the age of {}: ", name))?;
    Ok(Person { name, age })
}

impl BuiltinCommand for Older {
    fn name() -> &'static str {
        "older"
    }

    fn summary() -> &'static str {
        "compare the ages of two people"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        let first = read_person(console, 1)?;
        let second = read_person(console, 2)?;
        writeln!(console, "{}", older_sentence(&first, &second))?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::test_support::{run_builtin, test_env};

    fn person(name: &str, age: i32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn test_older_sentence() {
        let john = person("John Bacon", 37);
        let david = person("David Jenkins", 44);
        let expected = "David Jenkins (age 44) is older than John Bacon (age 37).";
        assert_eq!(older_sentence(&john, &david), expected);
        assert_eq!(older_sentence(&david, &john), expected);
    }

    #[test]
    fn test_older_sentence_equal_ages_names_second() {
        let a = person("A", 30);
        let b = person("B", 30);
        assert_eq!(older_sentence(&a, &b), "B (age 30) is older than A (age 30).");
    }

    #[test]
    fn test_age_plus_name_length() {
        assert_eq!(age_plus_name_length(30, "Alex"), 34);
        assert_eq!(age_plus_name_length(0, ""), 0);
    }

    #[test]
    fn test_name_age_exercise() {
        let mut env = test_env();
        let (res, out) = run_builtin(NameAge {}, "John Smith\n20\n", &mut env);
        assert_eq!(res.unwrap(), 0);
        assert_eq!(
            out,
            "Please enter your name: Please enter your age: Your age + name length is 30\n"
        );
    }

    #[test]
    fn test_older_exercise() {
        let mut env = test_env();
        let input = "John Bacon\n37\nDavid Jenkins\n44\n";
        let (res, out) = run_builtin(Older {}, input, &mut env);
        assert_eq!(res.unwrap(), 0);
        assert_eq!(
            out,
            "Enter the name of the person #1: Enter the age of John Bacon: \
             Enter the name of the person #2: Enter the age of David Jenkins: \
             David Jenkins (age 44) is older than John Bacon (age 37).\n"
        );
    }
}

use console_exercises::{Launcher, UnknownExercise, logging};

/// Exit status when the requested exercise does not exist.
const NOT_FOUND: i32 = 127;
/// Exit status when an exercise fails outside its own error handling.
const FAILURE: i32 = 1;

fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut launcher = Launcher::default();

    let Some((name, rest)) = args.split_first() else {
        launcher.repl()?;
        return Ok(());
    };

    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    match launcher.run(name, &rest) {
        Ok(code) => std::process::exit(code),
        Err(err) if err.is::<UnknownExercise>() => {
            eprintln!("{}", err);
            eprintln!("Run without arguments and type `help` to list the exercises.");
            std::process::exit(NOT_FOUND)
        }
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(FAILURE)
        }
    }
}

//! Hi-lo: guess a secret number between 1 and 100 in at most seven tries.

use crate::builtin::BuiltinCommand;
use crate::command::ExitCode;
use crate::env::Environment;
use crate::io_adapters::Console;
use anyhow::Result;
use argh::FromArgs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::io::Write;
use std::ops::RangeInclusive;
use tracing::debug;

/// Guesses allowed per game.
pub const MAX_GUESSES: u32 = 7;

/// Range the secret is drawn from, inclusive on both ends.
pub const SECRET_RANGE: RangeInclusive<i32> = 1..=100;

/// Where each game's secret comes from.
pub trait SecretSource {
    /// Draw a value uniformly from `range`.
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32;
}

/// [`SecretSource`] backed by a `rand` generator.
pub struct RandomSecret<R>(pub R);

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.0.random_range(range)
    }
}

/// How a guess compares to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooHigh,
    TooLow,
}

pub fn judge(guess: i32, secret: i32) -> Verdict {
    match guess.cmp(&secret) {
        Ordering::Equal => Verdict::Correct,
        Ordering::Greater => Verdict::TooHigh,
        Ordering::Less => Verdict::TooLow,
    }
}

/// States of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// A new game is about to start.
    Playing,
    /// Waiting for guess number `attempt` (1-based).
    Guessing { attempt: u32, secret: i32 },
    Won,
    Lost { secret: i32 },
    /// Asking whether to play again.
    Replay,
    Finished,
}

/// Run games until the player answers `n` to the replay prompt.
pub fn play(console: &mut Console<'_>, source: &mut dyn SecretSource) -> Result<()> {
    let mut state = GameState::Playing;
    loop {
        debug!(?state, "hilow");
        state = match state {
            GameState::Playing => {
                let secret = source.draw(SECRET_RANGE);
                writeln!(
                    console,
                    "Let's play a game. I'm thinking of a number between {} and {}. \
                     You have {} tries to guess what it is.",
                    SECRET_RANGE.start(),
                    SECRET_RANGE.end(),
                    MAX_GUESSES
                )?;
                GameState::Guessing { attempt: 1, secret }
            }
            GameState::Guessing { attempt, secret } if attempt > MAX_GUESSES => {
                GameState::Lost { secret }
            }
            GameState::Guessing { attempt, secret } => {
                let guess = console.read_int(&format!("Guess #{}: ", attempt))?;
                match judge(guess, secret) {
                    Verdict::Correct => {
                        writeln!(console, "Correct! You win!")?;
                        GameState::Won
                    }
                    Verdict::TooHigh => {
                        writeln!(console, "Your guess is too high.")?;
                        GameState::Guessing {
                            attempt: attempt + 1,
                            secret,
                        }
                    }
                    Verdict::TooLow => {
                        writeln!(console, "Your guess is too low.")?;
                        GameState::Guessing {
                            attempt: attempt + 1,
                            secret,
                        }
                    }
                }
            }
            GameState::Won => GameState::Replay,
            GameState::Lost { secret } => {
                writeln!(console, "Sorry, you lose. The correct number was {}.", secret)?;
                GameState::Replay
            }
            GameState::Replay => {
                let answer = console.read_char("Would you like to play again (y/n)? ")?;
                if answer == 'n' {
                    GameState::Finished
                } else {
                    GameState::Playing
                }
            }
            GameState::Finished => {
                writeln!(console, "Thanks you for playing.")?;
                return Ok(());
            }
        };
    }
}

#[derive(FromArgs)]
/// Guess a number between 1 and 100 in seven tries.
pub struct HiLow {
    #[argh(option)]
    /// seed for the secret numbers, for reproducible games.
    pub seed: Option<u64>,
}

impl BuiltinCommand for HiLow {
    fn name() -> &'static str {
        "hilow"
    }

    fn summary() -> &'static str {
        "number guessing game"
    }

    fn execute(self, console: &mut Console<'_>, _env: &mut Environment) -> Result<ExitCode> {
        match self.seed {
            Some(seed) => play(console, &mut RandomSecret(StdRng::seed_from_u64(seed)))?,
            None => play(console, &mut RandomSecret(rand::rng()))?,
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::test_support::{run_builtin, test_env};
    use crate::io_adapters::InputMode;
    use std::collections::VecDeque;
    use std::io::Cursor;

    /// Hands out fixed secrets in order.
    struct Scripted(VecDeque<i32>);

    impl SecretSource for Scripted {
        fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
            let secret = self.0.pop_front().expect("enough scripted secrets");
            assert!(range.contains(&secret));
            secret
        }
    }

    fn play_scripted(secrets: &[i32], input: &str) -> (Result<()>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut source = Scripted(secrets.iter().copied().collect());
        let result = {
            let mut console = Console::new(&mut reader, &mut out, InputMode::Lenient);
            play(&mut console, &mut source)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_judge() {
        assert_eq!(judge(50, 50), Verdict::Correct);
        assert_eq!(judge(60, 50), Verdict::TooHigh);
        assert_eq!(judge(40, 50), Verdict::TooLow);
    }

    #[test]
    fn test_seven_wrong_guesses_lose_once_then_quit() {
        let (res, out) = play_scripted(&[42], "1 2 3 99 98 97 50\nn\n");
        res.unwrap();
        assert_eq!(out.matches("Sorry, you lose. The correct number was 42.").count(), 1);
        assert_eq!(out.matches("Guess #").count(), 7);
        assert!(!out.contains("Guess #8"));
        assert_eq!(out.matches("Would you like to play again (y/n)? ").count(), 1);
        assert!(out.ends_with("Would you like to play again (y/n)? Thanks you for playing.\n"));
    }

    #[test]
    fn test_win_transcript() {
        let (res, out) = play_scripted(&[30], "50\n20\n30\nn\n");
        res.unwrap();
        assert_eq!(
            out,
            "Let's play a game. I'm thinking of a number between 1 and 100. \
             You have 7 tries to guess what it is.\n\
             Guess #1: Your guess is too high.\n\
             Guess #2: Your guess is too low.\n\
             Guess #3: Correct! You win!\n\
             Would you like to play again (y/n)? Thanks you for playing.\n"
        );
    }

    #[test]
    fn test_replay_draws_new_secret_and_resets_attempts() {
        let (res, out) = play_scripted(&[10, 20], "10\ny\n5\n20\nn\n");
        res.unwrap();
        assert_eq!(out.matches("Let's play a game.").count(), 2);
        assert_eq!(out.matches("Correct! You win!").count(), 2);
        assert_eq!(out.matches("Guess #1: ").count(), 2);
        assert!(out.contains("Guess #2: Correct! You win!"));
    }

    #[test]
    fn test_any_answer_but_n_replays() {
        let (res, out) = play_scripted(&[1, 2], "1\nN\n2\nn\n");
        res.unwrap();
        assert_eq!(out.matches("Let's play a game.").count(), 2);
    }

    #[test]
    fn test_closed_input_ends_the_game_with_error() {
        let (res, out) = play_scripted(&[42], "1\n");
        assert!(res.is_err());
        assert!(out.ends_with("Guess #2: "));
    }

    #[test]
    fn test_seeded_games_repeat() {
        let mut first = RandomSecret(StdRng::seed_from_u64(7));
        let mut second = RandomSecret(StdRng::seed_from_u64(7));
        for _ in 0..20 {
            let a = first.draw(SECRET_RANGE);
            assert!(SECRET_RANGE.contains(&a));
            assert_eq!(a, second.draw(SECRET_RANGE));
        }
    }

    #[test]
    fn test_hilow_exercise_runs_with_seed() {
        let mut env = test_env();
        // 0 is never a secret, so every game is lost.
        let input = "0 0 0 0 0 0 0\nn\n";
        let (res, out) = run_builtin(HiLow { seed: Some(1) }, input, &mut env);
        assert_eq!(res.unwrap(), 0);
        assert_eq!(out.matches("Sorry, you lose.").count(), 1);
        assert!(out.ends_with("Thanks you for playing.\n"));
    }
}

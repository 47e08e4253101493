//! The exercise catalogue.
//!
//! Each exercise is an independent command: it prompts through a
//! [`Console`](crate::Console), computes with the pure functions of its module
//! and reports on the same console. None of them calls another.

pub mod arithmetic;
pub mod guessing;
pub mod loops;
pub mod numbers;
pub mod people;
pub mod primes;
pub mod records;
pub mod temperature;
pub mod tower;

use crate::command::CommandFactory;
use crate::interpreter::Factory;

/// Factories for every exercise, in the order `help` lists them.
pub(crate) fn factories() -> Vec<Box<dyn CommandFactory>> {
    use arithmetic::{Arith, Calc};
    use guessing::HiLow;
    use loops::{FizzBuzz, FizzBuzzPop, Loops};
    use numbers::{Apples, Ascii, Even, Overflow, Sort2};
    use people::{NameAge, Older};
    use primes::{EasyPrime, Prime};
    use records::{AdRevenueReport, Fractions};
    use temperature::{CelsiusTable, FahrTable};
    use tower::Tower;

    vec![
        Box::new(Factory::<Calc>::default()),
        Box::new(Factory::<Arith>::default()),
        Box::new(Factory::<Prime>::default()),
        Box::new(Factory::<EasyPrime>::default()),
        Box::new(Factory::<Even>::default()),
        Box::new(Factory::<NameAge>::default()),
        Box::new(Factory::<Ascii>::default()),
        Box::new(Factory::<Older>::default()),
        Box::new(Factory::<Tower>::default()),
        Box::new(Factory::<Apples>::default()),
        Box::new(Factory::<Fractions>::default()),
        Box::new(Factory::<AdRevenueReport>::default()),
        Box::new(Factory::<Sort2>::default()),
        Box::new(Factory::<Overflow>::default()),
        Box::new(Factory::<FizzBuzz>::default()),
        Box::new(Factory::<FizzBuzzPop>::default()),
        Box::new(Factory::<Loops>::default()),
        Box::new(Factory::<FahrTable>::default()),
        Box::new(Factory::<CelsiusTable>::default()),
        Box::new(Factory::<HiLow>::default()),
    ]
}

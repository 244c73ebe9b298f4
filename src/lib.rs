pub mod autoflip;
pub mod chart;
pub mod prompt;
pub mod tracker;

use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// One of the two mutually exclusive results of a single trial.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Heads,
    Tails,
}

impl Outcome {
    /// The one-character form used by history displays.
    pub fn as_char(self) -> char {
        match self {
            Outcome::Heads => 'H',
            Outcome::Tails => 'T',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Heads => write!(f, "heads"),
            Outcome::Tails => write!(f, "tails"),
        }
    }
}

/// Draw one outcome uniformly at random, with probability 1/2 for each side.
impl Distribution<Outcome> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        if rng.gen::<bool>() {
            Outcome::Heads
        } else {
            Outcome::Tails
        }
    }
}

/// A snapshot of the running counts and their share of the total.
/// The percentages are zero on an empty tracker; they are never computed by
/// dividing by a zero total.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub heads: u64,
    pub tails: u64,
    pub total: u64,
    pub heads_pct: f64,
    pub tails_pct: f64,
}

#[test]
fn test_outcome_labels() {
    assert_eq!(Outcome::Heads.as_char(), 'H');
    assert_eq!(Outcome::Tails.as_char(), 'T');
    assert_eq!(Outcome::Heads.to_string(), "heads");
    assert_eq!(Outcome::Tails.to_string(), "tails");
}

#[test]
fn test_outcome_draw_is_two_sided() {
    use rand::rngs::mock::StepRng;

    // A source that always yields zero bits can only produce one label, and
    // an all-ones source the other.
    let mut zeros = StepRng::new(0, 0);
    let mut ones = StepRng::new(u64::MAX, 0);
    for _ in 0..100 {
        assert_eq!(zeros.gen::<Outcome>(), Outcome::Tails);
        assert_eq!(ones.gen::<Outcome>(), Outcome::Heads);
    }
}

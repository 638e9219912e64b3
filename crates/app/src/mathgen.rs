//! Arithmetic question generation for encounters. The engine only says what
//! kind of problem an encounter wants; the actual numbers are rolled here,
//! on the presentation side, from the app's seeded rng.

use game_core::ProblemSpec;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub const OPTION_COUNT: usize = 4;

/// Distractors are rolled within this distance of the right answer.
const DISTRACTOR_SPREAD: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    /// The right answer plus three distinct distractors, shuffled.
    pub options: Vec<i32>,
    pub answer: i32,
}

impl Question {
    pub fn is_correct(&self, picked: usize) -> bool {
        self.options.get(picked).is_some_and(|&option| option == self.answer)
    }
}

/// Roll a question for the given problem kind. Enemy and boss questions
/// scale their operand range with dungeon depth.
pub fn generate(rng: &mut ChaCha8Rng, problem: &ProblemSpec) -> Question {
    let max = match *problem {
        ProblemSpec::BasicArithmetic { max } => max.max(1),
        ProblemSpec::Leveled { level, boss } => {
            let base = 10 * u32::from(level.max(1));
            if boss { base * 2 } else { base }
        }
    } as i32;

    let (prompt, answer) = roll_problem(rng, max);
    let options = roll_options(rng, answer);
    Question { prompt, options, answer }
}

fn roll_problem(rng: &mut ChaCha8Rng, max: i32) -> (String, i32) {
    match roll(rng, 4) {
        0 => {
            let a = roll(rng, max) + 1;
            let b = roll(rng, max) + 1;
            (format!("{a} + {b} = ?"), a + b)
        }
        1 => {
            // Roll the answer first so the difference never goes negative.
            let answer = roll(rng, max) + 1;
            let b = roll(rng, answer) + 1;
            (format!("{} - {b} = ?", answer + b), answer)
        }
        2 => {
            let a = roll(rng, max) + 1;
            let b = roll(rng, max) + 1;
            (format!("{a} * {b} = ?"), a * b)
        }
        _ => {
            // Build the dividend from divisor * quotient, capped at `max`.
            let b = roll(rng, max) + 1;
            let mut quotient = roll(rng, max) + 1;
            if b * quotient > max {
                quotient = (max / b).max(1);
            }
            (format!("{} / {b} = ?", b * quotient), quotient)
        }
    }
}

fn roll_options(rng: &mut ChaCha8Rng, answer: i32) -> Vec<i32> {
    let mut options = vec![answer];
    while options.len() < OPTION_COUNT {
        let mut offset = roll(rng, DISTRACTOR_SPREAD * 2) - DISTRACTOR_SPREAD;
        if offset == 0 {
            offset = 1;
        }
        let wrong = (answer + offset).max(0);
        if !options.contains(&wrong) {
            options.push(wrong);
        }
    }
    shuffle(rng, &mut options);
    options
}

fn roll(rng: &mut ChaCha8Rng, bound: i32) -> i32 {
    (rng.next_u64() % bound.max(1) as u64) as i32
}

fn shuffle(rng: &mut ChaCha8Rng, values: &mut [i32]) {
    for i in (1..values.len()).rev() {
        let j = rng.next_u64() as usize % (i + 1);
        values.swap(i, j);
    }
}

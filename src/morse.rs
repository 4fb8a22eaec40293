//! Morse code scheduling
//!
//! Turns text into a sequence of on/off steps measured in units (one unit is
//! the length of a dot). The caller decides what "on" means and how long a
//! unit lasts.
//!
//! Timing: a dot is on for 1 unit, a dash for 3, each followed by 1 unit off.
//! A letter ends with 3 more units off, a space is 7 units off. Characters
//! without a code hold the indicator off for a letter gap.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

use Symbol::{Dash, Dot};

/// Sent after the pause for a line break
const END_OF_LINE: &[Symbol] = &[Dot, Dash, Dot, Dash, Dot, Dash];

const SYMBOL_GAP: u32 = 1;
const LETTER_GAP: u32 = 3;
const WORD_GAP: u32 = 7;

/// One step of the schedule: indicator state held for `units`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub lit: bool,
    pub units: u32,
}

impl Step {
    const fn on(units: u32) -> Self {
        Self { lit: true, units }
    }

    const fn off(units: u32) -> Self {
        Self { lit: false, units }
    }

    pub fn duration(&self, unit: Duration) -> Duration {
        unit * self.units
    }
}

/// Code for a character, case-insensitive; `None` if it has no code
pub fn symbols_for(c: char) -> Option<&'static [Symbol]> {
    let symbols: &'static [Symbol] = match c.to_ascii_lowercase() {
        'a' => &[Dot, Dash],
        'b' => &[Dash, Dot, Dot, Dot],
        'c' => &[Dash, Dot, Dash, Dot],
        'd' => &[Dash, Dot, Dot],
        'e' => &[Dot],
        'f' => &[Dot, Dot, Dash, Dot],
        'g' => &[Dash, Dash, Dot],
        'h' => &[Dot, Dot, Dot, Dot],
        'i' => &[Dot, Dot],
        'j' => &[Dot, Dash, Dash, Dash],
        'k' => &[Dash, Dot, Dash],
        'l' => &[Dot, Dash, Dot, Dot],
        'm' => &[Dash, Dash],
        'n' => &[Dash, Dot],
        'o' => &[Dash, Dash, Dash],
        'p' => &[Dot, Dash, Dash, Dot],
        'q' => &[Dash, Dash, Dot, Dash],
        'r' => &[Dot, Dash, Dot],
        's' => &[Dot, Dot, Dot],
        't' => &[Dash],
        'u' => &[Dot, Dot, Dash],
        'v' => &[Dot, Dot, Dot, Dash],
        'w' => &[Dot, Dash, Dash],
        'x' => &[Dash, Dot, Dot, Dash],
        'y' => &[Dash, Dot, Dash, Dash],
        'z' => &[Dash, Dash, Dot, Dot],
        '0' => &[Dash, Dash, Dash, Dash, Dash],
        '1' => &[Dot, Dash, Dash, Dash, Dash],
        '2' => &[Dot, Dot, Dash, Dash, Dash],
        '3' => &[Dot, Dot, Dot, Dash, Dash],
        '4' => &[Dot, Dot, Dot, Dot, Dash],
        '5' => &[Dot, Dot, Dot, Dot, Dot],
        '6' => &[Dash, Dot, Dot, Dot, Dot],
        '7' => &[Dash, Dash, Dot, Dot, Dot],
        '8' => &[Dash, Dash, Dash, Dot, Dot],
        '9' => &[Dash, Dash, Dash, Dash, Dot],
        '.' => &[Dot, Dash, Dot, Dash, Dot, Dash],
        ',' => &[Dash, Dash, Dot, Dot, Dash, Dash],
        '?' => &[Dot, Dot, Dash, Dash, Dot, Dot],
        _ => return None,
    };
    Some(symbols)
}

fn push_letter(steps: &mut Vec<Step>, symbols: &[Symbol]) {
    for symbol in symbols {
        let on = match symbol {
            Dot => 1,
            Dash => 3,
        };
        steps.push(Step::on(on));
        steps.push(Step::off(SYMBOL_GAP));
    }
    steps.push(Step::off(LETTER_GAP));
}

/// Steps for one character; a character without a code is a letter gap
pub fn schedule_char(c: char) -> Vec<Step> {
    let mut steps = Vec::new();
    match c {
        ' ' => steps.push(Step::off(WORD_GAP)),
        '\n' => {
            steps.push(Step::off(WORD_GAP));
            push_letter(&mut steps, END_OF_LINE);
        }
        _ => {
            match symbols_for(c) {
                Some(symbols) => push_letter(&mut steps, symbols),
                None => steps.push(Step::off(LETTER_GAP)),
            }
        }
    }
    steps
}

/// Steps for a whole text
pub fn schedule(text: &str) -> Vec<Step> {
    text.chars().flat_map(schedule_char).collect()
}

/// Total length of a schedule in units
pub fn total_units(steps: &[Step]) -> u32 {
    steps.iter().map(|s| s.units).sum()
}

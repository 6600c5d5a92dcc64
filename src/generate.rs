//! Password generation
//!
//! A quarter of the characters are digits, another quarter symbols (when
//! symbols are wanted), and the rest letters of either case. Characters may
//! repeat.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::consts::{ALPHA_LOWER, ALPHA_UPPER, DIGITS, SPECIAL};

pub fn generate_chars_from_set<R, V>(rng: &mut R, set: V, len: usize) -> Vec<char>
where
    R: Rng,
    V: AsRef<[char]>,
{
    let set = set.as_ref();
    if set.is_empty() {
        return Vec::new();
    }

    (0..len).map(|_| set[rng.gen_range(0..set.len())]).collect()
}

/// Generates a password of `length` characters. `symbols` is the set symbols
/// are drawn from, or `None` for a password without any; an empty set falls
/// back to the default one.
pub fn password<R>(rng: &mut R, length: usize, symbols: Option<&str>) -> String
where
    R: Rng,
{
    let num_digits = length / 4;
    let num_symbols = if symbols.is_some() { length / 4 } else { 0 };
    let num_letters = length - num_digits - num_symbols;

    let digits: Vec<char> = DIGITS.iter().copied().map(char::from).collect();
    let letters: Vec<char> = [ALPHA_LOWER, ALPHA_UPPER]
        .concat()
        .into_iter()
        .map(char::from)
        .collect();
    let symbols: Vec<char> = match symbols {
        Some(set) if !set.is_empty() => set.chars().collect(),
        _ => SPECIAL.chars().collect(),
    };

    let mut password = generate_chars_from_set(rng, &letters, num_letters);
    password.extend(generate_chars_from_set(rng, &digits, num_digits));
    password.extend(generate_chars_from_set(rng, &symbols, num_symbols));
    password.shuffle(rng);

    password.into_iter().collect()
}

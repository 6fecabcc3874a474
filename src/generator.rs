//! Strong password generation.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

// Alphabets exclude the ambiguous characters I, O, l, 0 and 1.
const UPPER: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijkmnopqrstuvwxyz";
const DIGITS: &str = "23456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?";

fn pick_into<R: Rng>(out: &mut Vec<char>, alphabet: &[char], n: usize, rng: &mut R) {
    for _ in 0..n {
        out.push(alphabet[rng.random_range(0..alphabet.len())]);
    }
}

/// Generates a 16-character password satisfying every strength criterion:
/// 3 uppercase, 5 lowercase, 2 digits and 2 symbols, plus 4 characters from
/// the combined alphabet, shuffled.
pub fn generate_strong_password() -> SecretString {
    let upper: Vec<char> = UPPER.chars().collect();
    let lower: Vec<char> = LOWER.chars().collect();
    let digits: Vec<char> = DIGITS.chars().collect();
    let symbols: Vec<char> = SYMBOLS.chars().collect();
    let combined: Vec<char> = [UPPER, LOWER, DIGITS, SYMBOLS].concat().chars().collect();

    let mut rng = rand::rng();
    let mut candidate: Vec<char> = Vec::with_capacity(16);
    pick_into(&mut candidate, &upper, 3, &mut rng);
    pick_into(&mut candidate, &lower, 5, &mut rng);
    pick_into(&mut candidate, &digits, 2, &mut rng);
    pick_into(&mut candidate, &symbols, 2, &mut rng);
    pick_into(&mut candidate, &combined, 4, &mut rng);
    candidate.shuffle(&mut rng);

    SecretString::new(candidate.into_iter().collect::<String>().into())
}

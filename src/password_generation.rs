//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{GenerateErrorRepr, GenerationConfig, Secret};

static LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
static NUMBERS: &str = "0123456789";
static SYMBOLS: &str = "!@#$%^&*(){}[]=<>,.?/:;~`|";

/// The set of characters each position of a password is drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alphabet {
    /// `0-9` only.
    Digits,
    /// `a-z`, `A-Z` and `0-9`.
    Alphanumeric,
    /// [`Alphabet::Alphanumeric`] plus the symbols `` !@#$%^&*(){}[]=<>,.?/:;~`| ``.
    AlphanumericSymbols,
}

impl Alphabet {
    /// Pick the alphabet for a pair of flags. `numbers_only` takes precedence over
    /// `include_symbols` when both are set.
    pub fn select(include_symbols: bool, numbers_only: bool) -> Alphabet {
        if numbers_only {
            Alphabet::Digits
        } else if include_symbols {
            Alphabet::AlphanumericSymbols
        } else {
            Alphabet::Alphanumeric
        }
    }

    pub fn chars(self) -> Vec<char> {
        let mut abc = Vec::new();
        match self {
            Alphabet::Digits => abc.extend(NUMBERS.chars()),
            Alphabet::Alphanumeric => {
                abc.extend(LETTERS.chars());
                abc.extend(NUMBERS.chars());
            }
            Alphabet::AlphanumericSymbols => {
                abc.extend(LETTERS.chars());
                abc.extend(NUMBERS.chars());
                abc.extend(SYMBOLS.chars());
            }
        }
        abc
    }

    pub fn contains(self, ch: char) -> bool {
        match self {
            Alphabet::Digits => NUMBERS.contains(ch),
            Alphabet::Alphanumeric => LETTERS.contains(ch) || NUMBERS.contains(ch),
            Alphabet::AlphanumericSymbols => {
                LETTERS.contains(ch) || NUMBERS.contains(ch) || SYMBOLS.contains(ch)
            }
        }
    }
}

impl From<&GenerationConfig> for Alphabet {
    fn from(config: &GenerationConfig) -> Alphabet {
        Alphabet::select(config.include_symbols, config.numbers_only)
    }
}

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// These are ugly, hard to remember passwords, but perfect if you're just copying them somewhere.
/// Each position is an independent draw, so there is no guarantee that any particular class of
/// character shows up.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_random_password<R>(
    rng: &mut R,
    alphabet: &[char],
    len: usize,
) -> Result<Secret, crate::GenerateError>
where
    R: Rng + CryptoRng,
{
    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        let ch = alphabet
            .choose(rng)
            .ok_or(GenerateErrorRepr::EmptyAlphabet)?;
        secret.push(*ch);
    }
    Ok(Secret::from(secret))
}

/// Generate a password for `config` from the given source of randomness.
pub fn generate_with<R>(
    rng: &mut R,
    config: &GenerationConfig,
) -> Result<Secret, crate::GenerateError>
where
    R: Rng + CryptoRng,
{
    let alphabet = Alphabet::from(config);
    tracing::debug!(?alphabet, length = config.length, "generating password");
    generate_random_password(rng, &alphabet.chars(), config.length)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(Alphabet::Digits.chars().len(), 10);
        assert_eq!(Alphabet::Alphanumeric.chars().len(), 62);
        assert_eq!(Alphabet::AlphanumericSymbols.chars().len(), 88);
    }

    #[test]
    fn numbers_only_wins() {
        assert_eq!(Alphabet::select(true, true), Alphabet::Digits);
        assert_eq!(Alphabet::select(false, true), Alphabet::Digits);
        assert_eq!(Alphabet::select(true, false), Alphabet::AlphanumericSymbols);
        assert_eq!(Alphabet::select(false, false), Alphabet::Alphanumeric);
    }

    #[test]
    fn contains_agrees_with_chars() {
        for alphabet in [
            Alphabet::Digits,
            Alphabet::Alphanumeric,
            Alphabet::AlphanumericSymbols,
        ] {
            let chars = alphabet.chars();
            for ch in (0u8..128).map(char::from) {
                assert_eq!(alphabet.contains(ch), chars.contains(&ch), "{alphabet:?} {ch:?}");
            }
        }
    }

    #[test]
    fn random_password_from_custom_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let secret = generate_random_password(&mut rng, &['x', 'y'], 32).unwrap();
        assert_eq!(secret.as_str().len(), 32);
        assert!(secret.as_str().chars().all(|c| c == 'x' || c == 'y'));
    }

    #[test]
    fn empty_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_random_password(&mut rng, &[], 0)
            .unwrap()
            .as_str()
            .is_empty());
        let err = generate_random_password(&mut rng, &[], 1).unwrap_err();
        assert!(!err.is_invalid_length());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = GenerationConfig {
            length: 16,
            include_symbols: true,
            numbers_only: false,
        };
        let a = generate_with(&mut StdRng::seed_from_u64(42), &config).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(42), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn config_generation_samples_the_selected_alphabet() {
        let config = GenerationConfig {
            length: 64,
            include_symbols: false,
            numbers_only: false,
        };
        let mut seeded = StdRng::seed_from_u64(9);
        let from_config = generate_with(&mut seeded, &config).unwrap();
        let mut seeded = StdRng::seed_from_u64(9);
        let direct =
            generate_random_password(&mut seeded, &Alphabet::Alphanumeric.chars(), 64).unwrap();
        assert_eq!(from_config, direct);
    }
}

use rand::{CryptoRng, Rng};

use crate::{GenerateError, GenerationConfig, Secret, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

/// What a password generator screen holds between interactions: the length control, the two
/// character-set toggles and the last password produced.
///
/// Turning one toggle on turns the other off, so a config built from this state never has both
/// flags set.
#[derive(Debug)]
pub struct GeneratorState {
    length: usize,
    include_symbols: bool,
    numbers_only: bool,
    password: Secret,
}

impl Default for GeneratorState {
    fn default() -> Self {
        GeneratorState {
            length: DEFAULT_LENGTH,
            include_symbols: true,
            numbers_only: false,
            password: Secret::default(),
        }
    }
}

impl GeneratorState {
    pub fn new() -> GeneratorState {
        GeneratorState::default()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the length, clamped to `MIN_LENGTH..=MAX_LENGTH`. Returns the length actually set.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self.length
    }

    pub fn include_symbols(&self) -> bool {
        self.include_symbols
    }

    pub fn set_include_symbols(&mut self, on: bool) {
        self.include_symbols = on;
        if on {
            self.numbers_only = false;
        }
    }

    pub fn toggle_include_symbols(&mut self) {
        self.set_include_symbols(!self.include_symbols);
    }

    pub fn numbers_only(&self) -> bool {
        self.numbers_only
    }

    pub fn set_numbers_only(&mut self, on: bool) {
        self.numbers_only = on;
        if on {
            self.include_symbols = false;
        }
    }

    pub fn toggle_numbers_only(&mut self) {
        self.set_numbers_only(!self.numbers_only);
    }

    /// A fresh config reflecting the current controls.
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.length,
            include_symbols: self.include_symbols,
            numbers_only: self.numbers_only,
        }
    }

    /// The most recently generated password; empty until the first generation.
    pub fn password(&self) -> &Secret {
        &self.password
    }

    /// Replace the held password with a newly generated one.
    pub fn generate(&mut self) -> Result<&Secret, GenerateError> {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R>(&mut self, rng: &mut R) -> Result<&Secret, GenerateError>
    where
        R: Rng + CryptoRng,
    {
        self.password = crate::password_generation::generate_with(rng, &self.config())?;
        Ok(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn initial_state() {
        let state = GeneratorState::new();
        assert_eq!(state.length(), 8);
        assert!(state.include_symbols());
        assert!(!state.numbers_only());
        assert!(state.password().is_empty());
    }

    #[test]
    fn length_is_clamped() {
        let mut state = GeneratorState::new();
        assert_eq!(state.set_length(0), 1);
        assert_eq!(state.set_length(21), 20);
        assert_eq!(state.set_length(12), 12);
        assert_eq!(state.config().length, 12);
    }

    #[test]
    fn toggles_are_mutually_exclusive() {
        let mut state = GeneratorState::new();
        state.set_numbers_only(true);
        assert!(state.numbers_only());
        assert!(!state.include_symbols());

        state.set_include_symbols(true);
        assert!(state.include_symbols());
        assert!(!state.numbers_only());

        state.toggle_numbers_only();
        assert!(state.numbers_only());
        assert!(!state.include_symbols());
    }

    #[test]
    fn turning_a_toggle_off_leaves_the_other_alone() {
        let mut state = GeneratorState::new();
        state.set_include_symbols(false);
        assert!(!state.include_symbols());
        assert!(!state.numbers_only());

        state.set_numbers_only(true);
        state.set_numbers_only(false);
        assert!(!state.numbers_only());
        assert!(!state.include_symbols());
    }

    #[test]
    fn generate_replaces_password() {
        let mut state = GeneratorState::new();
        state.set_numbers_only(true);
        state.set_length(20);
        let mut rng = StdRng::seed_from_u64(1);
        let first = state.generate_with(&mut rng).unwrap().clone();
        assert_eq!(first.len(), 20);
        assert!(first.as_str().chars().all(|c| c.is_ascii_digit()));
        assert_eq!(state.password(), &first);

        state.set_length(3);
        state.generate().unwrap();
        assert_eq!(state.password().len(), 3);
    }
}

use serde::{Deserialize, Serialize};

pub mod password_generation;
mod state;

pub use password_generation::Alphabet;
pub use state::GeneratorState;

/// The shortest length the interactive length control allows.
pub const MIN_LENGTH: usize = 1;
/// The longest length the interactive length control allows.
pub const MAX_LENGTH: usize = 20;
/// Length used when nothing else was asked for.
pub const DEFAULT_LENGTH: usize = 8;

/// The knobs governing a single password generation.
///
/// `include_symbols` and `numbers_only` are meant to be mutually exclusive (see
/// [`GeneratorState`]), but nothing here enforces it: if both are set, `numbers_only` wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_symbols: bool,
    pub numbers_only: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            length: DEFAULT_LENGTH,
            include_symbols: true,
            numbers_only: false,
        }
    }
}

impl GenerationConfig {
    /// Build a config from a possibly negative length, as received from a caller that has not
    /// validated it.
    pub fn try_new(
        length: i64,
        include_symbols: bool,
        numbers_only: bool,
    ) -> Result<GenerationConfig, GenerateError> {
        if length < 0 {
            return Err(GenerateErrorRepr::NegativeLength(length).into());
        }
        let length =
            usize::try_from(length).map_err(|_| GenerateErrorRepr::LengthTooLarge(length))?;
        Ok(GenerationConfig {
            length,
            include_symbols,
            numbers_only,
        })
    }

    /// Generate a password for this config using the thread-local RNG.
    pub fn generate(&self) -> Result<Secret, GenerateError> {
        password_generation::generate_with(&mut rand::thread_rng(), self)
    }

    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from(self)
    }
}

/// Generate a password of `length` characters.
///
/// A length of zero produces an empty password; a negative length is rejected.
pub fn generate_password(
    length: i64,
    include_symbols: bool,
    numbers_only: bool,
) -> Result<Secret, GenerateError> {
    GenerationConfig::try_new(length, include_symbols, numbers_only)?.generate()
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GenerateError(GenerateErrorRepr);

impl GenerateError {
    /// Whether the error was caused by a length the generator cannot produce.
    pub fn is_invalid_length(&self) -> bool {
        matches!(
            self.0,
            GenerateErrorRepr::NegativeLength(_) | GenerateErrorRepr::LengthTooLarge(_)
        )
    }
}

impl From<GenerateErrorRepr> for GenerateError {
    fn from(err: GenerateErrorRepr) -> GenerateError {
        GenerateError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GenerateErrorRepr {
    #[error("invalid password length {0}: must not be negative")]
    NegativeLength(i64),
    #[error("invalid password length {0}: too large for this platform")]
    LengthTooLarge(i64),
    #[error("cannot draw characters from an empty alphabet")]
    EmptyAlphabet,
}

/// A generated password. Its `Debug` output never shows the contents.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the password.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

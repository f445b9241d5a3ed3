//! Utility for generating random passwords.
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{zxcvbn, Entropy};

use crate::{csprng, Error, Result, ALPHABET, MIN_LENGTH};

/// Number of random bytes requested from the source at a time.
const CHUNK_SIZE: usize = 64;

/// Upper bound on up front allocation for requested sizes.
const PREALLOCATE_LIMIT: usize = CHUNK_SIZE * 4;

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Generate a password of the given length using the
/// operating system random source.
pub fn generate(length: usize) -> Result<PasswordResult> {
    PasswordGen::new(length).one()
}

/// Generated password result.
#[derive(Debug)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
}

impl PasswordResult {
    /// Compute the entropy for the password.
    pub fn entropy(&self) -> Entropy {
        measure_entropy(self.password.expose_secret(), &[])
    }
}

/// Options for password generation.
#[derive(Debug, Clone)]
pub struct PasswordGen {
    length: usize,
}

impl PasswordGen {
    /// Create a new password generator.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate a random password.
    pub fn one(&self) -> Result<PasswordResult> {
        self.one_with_rng(&mut csprng())
    }

    /// Generate a random password drawing from the given source.
    pub fn one_with_rng<R>(&self, rng: &mut R) -> Result<PasswordResult>
    where
        R: RngCore + CryptoRng,
    {
        if self.length < MIN_LENGTH {
            tracing::debug!(
                length = %self.length,
                minimum = %MIN_LENGTH,
                "generator::invalid_length"
            );
            return Err(Error::InvalidLength {
                length: self.length,
                minimum: MIN_LENGTH,
            });
        }

        tracing::debug!(length = %self.length, "generator::one");
        let password = sample(rng, ALPHABET.as_bytes(), self.length)
            .inspect_err(|error| {
                tracing::warn!(error = %error, "generator::random_source");
            })?;
        Ok(PasswordResult {
            password: SecretString::from(password),
        })
    }

    /// Generate multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        self.many_with_rng(count, &mut csprng())
    }

    /// Generate multiple passwords drawing from the given source.
    pub fn many_with_rng<R>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<PasswordResult>>
    where
        R: RngCore + CryptoRng,
    {
        tracing::debug!(count = %count, "generator::many");
        let mut results = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
        for _ in 0..count {
            results.push(self.one_with_rng(rng)?);
        }
        Ok(results)
    }
}

/// Draw `length` characters uniformly from `characters`.
///
/// Bytes at or above the largest multiple of the character
/// count that fits in a byte are discarded so that every
/// index is equally likely.
fn sample<R>(
    rng: &mut R,
    characters: &[u8],
    length: usize,
) -> std::result::Result<String, rand::Error>
where
    R: RngCore + CryptoRng,
{
    debug_assert!(!characters.is_empty() && characters.len() <= 256);
    let count = characters.len();
    let zone = 256 - (256 % count);

    let mut password = String::with_capacity(length.min(PREALLOCATE_LIMIT));
    let mut buffer = [0u8; CHUNK_SIZE];
    while password.len() < length {
        rng.try_fill_bytes(&mut buffer)?;
        for byte in buffer.iter().map(|b| *b as usize) {
            if byte >= zone {
                continue;
            }
            password.push(characters[byte % count] as char);
            if password.len() == length {
                break;
            }
        }
    }
    buffer.fill(0);
    Ok(password)
}

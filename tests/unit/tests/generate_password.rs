use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use secrecy::ExposeSecret;
use vp_password::{generate, Error, PasswordGen, ALPHABET, MIN_LENGTH};
use vp_unit_tests::{ExhaustedRng, FailingRng};

#[test]
fn generate_rejects_short_lengths() {
    for length in 0..MIN_LENGTH {
        match generate(length) {
            Err(Error::InvalidLength { length: requested, minimum }) => {
                assert_eq!(length, requested);
                assert_eq!(MIN_LENGTH, minimum);
            }
            other => panic!("expected invalid length, got {:?}", other),
        }
    }
}

#[test]
fn generate_length_message() {
    let err = generate(3).unwrap_err();
    assert_eq!(
        "Password length must be at least 8 characters",
        err.to_string()
    );
}

#[test]
fn generate_exact_length_from_alphabet() -> Result<()> {
    for length in [8, 9, 16, 64, 65, 200] {
        let result = generate(length)?;
        let password = result.password.expose_secret();
        assert_eq!(length, password.chars().count());
        assert!(password.chars().all(|c| ALPHABET.contains(c)));
    }
    Ok(())
}

#[test]
fn generate_random_source_failure() {
    let result = PasswordGen::new(16).one_with_rng(&mut FailingRng);
    assert!(matches!(result, Err(Error::RandomSource(_))));
}

#[test]
fn generate_no_partial_password() {
    // enough bytes for one chunk but not for the full password
    let mut rng = ExhaustedRng::new(64);
    let result = PasswordGen::new(100).one_with_rng(&mut rng);
    assert!(matches!(result, Err(Error::RandomSource(_))));
}

#[test]
fn generate_huge_length_fails_without_allocating() {
    let result = PasswordGen::new(usize::MAX).one_with_rng(&mut FailingRng);
    assert!(matches!(result, Err(Error::RandomSource(_))));
}

#[test]
fn generate_huge_count_fails_without_allocating() {
    let result = PasswordGen::new(16).many_with_rng(usize::MAX, &mut FailingRng);
    assert!(matches!(result, Err(Error::RandomSource(_))));
}

#[test]
fn generate_many_stops_on_failure() {
    let mut rng = ExhaustedRng::new(128);
    let result = PasswordGen::new(32).many_with_rng(5, &mut rng);
    assert!(result.is_err());
}

#[test]
fn generate_uniform_distribution() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x7670);
    let generator = PasswordGen::new(64);
    let mut counts = [0u64; 128];
    let mut total = 0u64;
    for result in generator.many_with_rng(2_000, &mut rng)? {
        for byte in result.password.expose_secret().bytes() {
            counts[byte as usize] += 1;
            total += 1;
        }
    }

    let categories = ALPHABET.len() as f64;
    let expected = total as f64 / categories;
    let chi_squared: f64 = ALPHABET
        .bytes()
        .map(|byte| {
            let observed = counts[byte as usize] as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();

    // 71 degrees of freedom, the 0.99999 quantile is ~134
    assert!(
        chi_squared < 134.0,
        "chi-squared statistic too large: {}",
        chi_squared
    );
    for byte in ALPHABET.bytes() {
        assert!(counts[byte as usize] > 0);
    }
    Ok(())
}

#[test]
fn generate_outputs_differ() -> Result<()> {
    let first = generate(32)?;
    let second = generate(32)?;
    assert_ne!(
        first.password.expose_secret(),
        second.password.expose_secret()
    );
    Ok(())
}

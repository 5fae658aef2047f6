//! Password generation.

use zeroize::Zeroize;

use super::Password;
use super::config::{Configuration, MAX_LENGTH, MIN_LENGTH};
use crate::error::{Error, Result};
use crate::rand::SecureRandomSource;

/// Generate one password for `config`.
///
/// Fails with `InvalidConfiguration` on an empty pool or an out-of-range
/// length; never returns a short or empty password.
pub fn generate<R>(config: &Configuration, rng: &mut R) -> Result<Password>
where
    R: SecureRandomSource + ?Sized,
{
    config.validate()?;
    let pool = config.pool();
    log::debug!(
        "generating length={} pool={} source={}",
        config.length,
        pool.len(),
        rng.name()
    );
    generate_from_pool(&pool, config.length, rng)
}

/// Generate `count` independent passwords with the same configuration.
pub fn generate_batch<R>(config: &Configuration, count: usize, rng: &mut R) -> Result<Vec<Password>>
where
    R: SecureRandomSource + ?Sized,
{
    config.validate()?;
    let pool = config.pool();
    log::debug!(
        "generating {count} passwords length={} pool={}",
        config.length,
        pool.len()
    );
    (0..count)
        .map(|_| generate_from_pool(&pool, config.length, rng))
        .collect()
}

/// Draw `length` values and map each to `pool[value % pool.len()]`.
///
/// Modulo reduction is slightly biased toward the low indices when the pool
/// size does not divide 2^32. For pools under 100 characters the excess
/// probability per character is below 2.5e-8, which is accepted here.
pub fn generate_from_pool<R>(pool: &[char], length: usize, rng: &mut R) -> Result<Password>
where
    R: SecureRandomSource + ?Sized,
{
    if pool.is_empty() {
        return Err(Error::InvalidConfiguration("character pool is empty".into()));
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(Error::InvalidConfiguration(format!(
            "length {length} is outside {MIN_LENGTH}..={MAX_LENGTH}"
        )));
    }

    let mut draws = vec![0u32; length];
    rng.fill_u32(&mut draws);
    let pass = Password::from_chars(draws.iter().map(|&v| pick(pool, v)));
    draws.zeroize();
    Ok(pass)
}

#[inline]
fn pick(pool: &[char], value: u32) -> char {
    pool[value as usize % pool.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{CharClass, ClassSet, LOWERCASE, NUMBERS};
    use crate::pass::strength::Strength;
    use crate::rand::OsSource;
    use crate::rand::testing::SequenceSource;

    #[test]
    fn length_matches_for_every_valid_length() {
        let mut rng = OsSource;
        for length in 1..=50 {
            let config = Configuration::new(length, ClassSet::all()).unwrap();
            let pass = generate(&config, &mut rng).unwrap();
            assert_eq!(pass.len(), length);
        }
    }

    #[test]
    fn characters_come_from_enabled_pool() {
        let mut rng = OsSource;
        let class_sets = [
            ClassSet::only(CharClass::Uppercase),
            ClassSet::only(CharClass::Symbols),
            [CharClass::Lowercase, CharClass::Numbers].into_iter().collect(),
            ClassSet::all(),
        ];
        for classes in class_sets {
            let config = Configuration::new(50, classes).unwrap();
            let pool = config.pool();
            for _ in 0..20 {
                let pass = generate(&config, &mut rng).unwrap();
                assert!(pass.as_str().chars().all(|c| pool.contains(&c)));
            }
        }
    }

    #[test]
    fn empty_pool_fails() {
        let config = Configuration {
            length: 12,
            classes: ClassSet::empty(),
        };
        let err = generate(&config, &mut OsSource).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = generate_from_pool(&[], 12, &mut OsSource).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn out_of_range_length_fails() {
        for length in [0, 51] {
            let config = Configuration {
                length,
                classes: ClassSet::all(),
            };
            assert!(generate(&config, &mut OsSource).is_err());
        }
    }

    #[test]
    fn pool_generation_rejects_lengths_outside_range() {
        let digits: Vec<char> = NUMBERS.chars().collect();
        for length in [0, MAX_LENGTH + 1, 5000] {
            let err = generate_from_pool(&digits, length, &mut OsSource).unwrap_err();
            assert!(err.is_invalid_configuration(), "length {length}");
        }
        let pass = generate_from_pool(&digits, MAX_LENGTH, &mut OsSource).unwrap();
        assert_eq!(pass.len(), MAX_LENGTH);
    }

    #[test]
    fn values_are_reduced_modulo_pool_size() {
        let pool: Vec<char> = NUMBERS.chars().collect();
        let mut rng = SequenceSource::new(vec![0, 9, 10, 23, u32::MAX]);
        let pass = generate_from_pool(&pool, 5, &mut rng).unwrap();
        // u32::MAX % 10 == 5
        assert_eq!(pass.as_str(), "09035");
    }

    #[test]
    fn numbers_only_example() {
        let config = Configuration::new(8, ClassSet::only(CharClass::Numbers)).unwrap();
        let pass = generate(&config, &mut OsSource).unwrap();
        assert_eq!(pass.len(), 8);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_digit()));
        assert_eq!(pass.strength(), Strength::Good);
    }

    #[test]
    fn repeated_calls_are_independent() {
        let config = Configuration::new(32, ClassSet::all()).unwrap();
        let a = generate(&config, &mut OsSource).unwrap();
        let b = generate(&config, &mut OsSource).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn batch_produces_count_passwords() {
        let config = Configuration::new(10, ClassSet::all()).unwrap();
        let batch = generate_batch(&config, 5, &mut OsSource).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 10));

        let bad = Configuration { length: 0, ..config };
        assert!(generate_batch(&bad, 5, &mut OsSource).is_err());
    }

    #[test]
    fn single_class_draws_are_roughly_uniform() {
        const N: usize = 26_000;
        let config = Configuration::new(1, ClassSet::only(CharClass::Lowercase)).unwrap();
        let mut counts = [0usize; 26];
        let mut rng = OsSource;
        for _ in 0..N {
            let pass = generate(&config, &mut rng).unwrap();
            let c = pass.as_str().chars().next().unwrap();
            let idx = LOWERCASE.find(c).unwrap();
            counts[idx] += 1;
        }

        // Expected 1000 per letter, sd ~31. Allow a wide band.
        let expected = N / 26;
        for (i, &n) in counts.iter().enumerate() {
            assert!(
                n > expected * 80 / 100 && n < expected * 120 / 100,
                "letter {} drawn {n} times",
                &LOWERCASE[i..=i]
            );
        }
    }
}

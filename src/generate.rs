use crate::config::ResolvedRequirements;
use crate::entropy::{Entropy, SeedSource};
use crate::error::{Result, SiftIdError};

/// Grow `seed` into an ID of exactly `requirements.length()` characters.
///
/// The seed is filtered by the composition policy, then extended by digesting
/// the accumulated string and appending the filtered digest until it is long
/// enough. The result is truncated and case-mapped last.
///
/// Encoders are deterministic, so a round that contributes nothing would
/// repeat forever; that case returns [`SiftIdError::Exhausted`] instead.
pub fn fulfill(seed: &str, requirements: &ResolvedRequirements) -> Result<String> {
    let length = requirements.length();
    let composition = requirements.composition();

    let mut base = composition.apply(seed);
    let mut produced = base.chars().count();
    let mut rounds = 0;

    while produced < length {
        let extra = composition.apply(&requirements.encoder().digest(&base));
        rounds += 1;

        if extra.is_empty() {
            tracing::warn!(length, produced, rounds, ?composition, "digest contributed no characters");
            return Err(SiftIdError::Exhausted {
                length,
                produced,
                rounds,
            });
        }

        produced += extra.chars().count();
        base.push_str(&extra);
    }

    if rounds > 0 {
        tracing::debug!(length, rounds, "extended seed");
    }

    if let Some((cut, _)) = base.char_indices().nth(length) {
        base.truncate(cut);
    }

    Ok(requirements.case().apply(&base))
}

/// Deterministic ID: the same input and requirements always give the same ID.
///
/// The input is wrapped in the salt on both sides before digesting.
pub fn generate_static(input: &str, requirements: &ResolvedRequirements) -> Result<String> {
    let salt = requirements.salt();
    tracing::trace!(length = requirements.length(), salted = !salt.is_empty(), "static id");
    let seed = requirements.encoder().digest(&format!("{salt}{input}{salt}"));
    fulfill(&seed, requirements)
}

/// Random ID seeded from the process-wide [`Entropy`] source.
pub fn generate_random(requirements: &ResolvedRequirements) -> Result<String> {
    generate_random_from(Entropy::global(), requirements)
}

/// Random ID seeded from `source`. No salt is applied.
pub fn generate_random_from<S>(source: &S, requirements: &ResolvedRequirements) -> Result<String>
where
    S: SeedSource + ?Sized,
{
    tracing::trace!(length = requirements.length(), "random id");
    let seed = requirements.encoder().digest(&source.next_seed());
    fulfill(&seed, requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Requirements;
    use crate::policy::{CasePolicy, Composition};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn identity() -> Requirements {
        Requirements::new()
            .omit_salt()
            .encoder(|s: &str| s.to_string())
    }

    struct FixedSeed(&'static str);

    impl SeedSource for FixedSeed {
        fn next_seed(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_fulfill_repeats_identity_digest() {
        let requirements = identity().length(7).resolve();
        // "abc" -> "abcabc" -> "abcabcabcabc" -> truncated
        assert_eq!(fulfill("abc", &requirements).unwrap(), "abcabca");
    }

    #[test]
    fn test_fulfill_truncates_without_extension() {
        let requirements = identity().length(3).resolve();
        assert_eq!(fulfill("abcdef", &requirements).unwrap(), "abc");
    }

    #[test]
    fn test_fulfill_exact_length_seed() {
        let requirements = identity().length(6).resolve();
        assert_eq!(fulfill("abcdef", &requirements).unwrap(), "abcdef");
    }

    #[test]
    fn test_fulfill_digests_accumulated_string() {
        let requirements = Requirements::new()
            .omit_salt()
            .length(10)
            .encoder(|s: &str| format!("{}", s.len()))
            .resolve();
        // "ab" -> "ab2" -> "ab23" -> "ab234" -> ... each round digests the whole base
        assert_eq!(fulfill("ab", &requirements).unwrap(), "ab23456789");
    }

    #[test]
    fn test_fulfill_filters_every_fragment() {
        let requirements = identity()
            .length(6)
            .composition(Composition::AlphaOnly)
            .resolve();
        assert_eq!(fulfill("a1-b2", &requirements).unwrap(), "ababab");
    }

    #[test]
    fn test_fulfill_case_applied_after_truncation() {
        let requirements = identity()
            .length(5)
            .case(CasePolicy::UpperOnly)
            .resolve();
        assert_eq!(fulfill("xY", &requirements).unwrap(), "XYXYX");
    }

    #[test]
    fn test_fulfill_counts_characters_not_bytes() {
        let requirements = identity().length(4).resolve();
        let id = fulfill("éß", &requirements).unwrap();
        assert_eq!(id, "éßéß");
        assert_eq!(id.chars().count(), 4);
    }

    #[test]
    fn test_fulfill_stalls_when_filter_strips_everything() {
        let requirements = identity()
            .length(8)
            .composition(Composition::NumericOnly)
            .resolve();
        assert_eq!(
            fulfill("abc", &requirements),
            Err(SiftIdError::Exhausted {
                length: 8,
                produced: 0,
                rounds: 1,
            })
        );
    }

    #[test]
    fn test_fulfill_stalls_after_partial_progress() {
        let requirements = identity()
            .length(8)
            .composition(Composition::NumericOnly)
            .encoder(|s: &str| if s.len() < 4 { format!("{}1", s) } else { String::from("x") })
            .resolve();
        // "12" -> "12121" (len 5) -> digest "x" filtered to ""
        assert_eq!(
            fulfill("12", &requirements),
            Err(SiftIdError::Exhausted {
                length: 8,
                produced: 5,
                rounds: 2,
            })
        );
    }

    #[test]
    fn test_static_wraps_input_in_salt() {
        let requirements = Requirements::new()
            .salt("x")
            .length(12)
            .encoder(|s: &str| s.to_string())
            .resolve();
        assert_eq!(
            generate_static("abc", &requirements).unwrap(),
            "xabcxxabcxxa"
        );
    }

    #[test]
    fn test_static_is_deterministic() {
        let requirements = Requirements::new().length(40).resolve();
        let a = generate_static("some key", &requirements).unwrap();
        let b = generate_static("some key", &requirements).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
    }

    #[test]
    fn test_static_differs_by_input() {
        let requirements = Requirements::new().resolve();
        assert_ne!(
            generate_static("key1", &requirements).unwrap(),
            generate_static("key2", &requirements).unwrap()
        );
    }

    #[test]
    fn test_static_long_numeric_id() {
        let requirements = Requirements::new()
            .length(500)
            .composition(Composition::NumericOnly)
            .resolve();
        let id = generate_static("long", &requirements).unwrap();
        assert_eq!(id.len(), 500);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_random_from_fixed_source_is_unsalted() {
        let requirements = Requirements::new()
            .salt("ignored")
            .length(8)
            .encoder(|s: &str| s.to_string())
            .resolve();
        assert_eq!(
            generate_random_from(&FixedSeed("seed"), &requirements).unwrap(),
            "seedseed"
        );
    }

    #[test]
    fn test_random_uses_each_seed_once() {
        struct Counting(AtomicU32);

        impl SeedSource for Counting {
            fn next_seed(&self) -> String {
                self.0.fetch_add(1, Ordering::SeqCst).to_string()
            }
        }

        let source = Counting(AtomicU32::new(0));
        let requirements = Requirements::new().length(16).resolve();
        let ids: HashSet<String> = (0..50)
            .map(|_| generate_random_from(&source, &requirements).unwrap())
            .collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(source.0.load(Ordering::SeqCst), 50);
    }

    #[test]
    fn test_random_global_source() {
        let requirements = Requirements::new().length(100).resolve();
        let a = generate_random(&requirements).unwrap();
        let b = generate_random(&requirements).unwrap();
        assert_eq!(a.len(), 100);
        assert_eq!(b.len(), 100);
        assert_ne!(a, b);
    }
}

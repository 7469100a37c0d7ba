//! Note identifier generation.
//!
//! # Responsibility
//! - Produce opaque, probabilistically unique note ids.
//! - Prefer OS-backed random UUIDs; degrade to a timestamp composite when
//!   the OS random source is unavailable.
//!
//! # Invariants
//! - Returned ids are never empty.
//! - No uniqueness guarantee across clock rollback for the fallback form.

use log::warn;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Builder;

/// Id generation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random v4 UUID from the OS random source.
    #[default]
    Uuid,
    /// Epoch milliseconds followed by a random fraction.
    TimestampRandom,
}

/// Generates a new id with the default strategy.
pub fn new_id() -> String {
    generate_id(IdStrategy::default())
}

/// Generates a new id with the given strategy.
///
/// `IdStrategy::Uuid` falls back to `IdStrategy::TimestampRandom` when the
/// OS random source fails.
pub fn generate_id(strategy: IdStrategy) -> String {
    match strategy {
        IdStrategy::Uuid => match random_uuid() {
            Some(id) => id,
            None => {
                warn!("event=id_generate module=id status=fallback strategy=timestamp_random");
                timestamp_random_id()
            }
        },
        IdStrategy::TimestampRandom => timestamp_random_id(),
    }
}

fn random_uuid() -> Option<String> {
    let mut bytes = [0_u8; 16];
    OsRng.try_fill_bytes(&mut bytes).ok()?;
    Some(Builder::from_random_bytes(bytes).into_uuid().to_string())
}

fn timestamp_random_id() -> String {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    // Seeded from the clock so this path never touches the OS random source.
    let seed = since_epoch.as_nanos() as u64 ^ u64::from(std::process::id());
    let mut rng = StdRng::seed_from_u64(seed);
    let fraction: f64 = rng.gen();
    format!("{}{}", since_epoch.as_millis(), fraction)
}

#[cfg(test)]
mod tests {
    use super::{generate_id, new_id, IdStrategy};
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn default_strategy_yields_v4_uuid() {
        let id = new_id();
        let parsed = Uuid::parse_str(&id).expect("default id should be a uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn timestamp_random_starts_with_millis_and_has_fraction() {
        let id = generate_id(IdStrategy::TimestampRandom);
        let (millis, fraction) = id.split_once("0.").expect("fraction part should exist");
        assert!(!millis.is_empty());
        assert!(millis.chars().all(|ch| ch.is_ascii_digit()));
        assert!(fraction.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn uuid_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..256).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 256);
    }
}

//! Synthetic record generation

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::model::Record;
use crate::model::Status;

const FIRST_NAMES: &[&str] = &[
    "Amelia", "Arlo", "Beatrix", "Bodhi", "Cora", "Dax", "Elena", "Ezra", "Freya", "Gideon",
    "Hazel", "Idris", "Juno", "Kai", "Lena", "Milo", "Nadia", "Orion", "Petra", "Quinn",
    "Rosa", "Silas", "Talia", "Umar", "Vera", "Wren", "Xavi", "Yara", "Zane", "Ines",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Barros", "Castillo", "Dunn", "Eriksen", "Fischer", "Garza", "Holt", "Ibarra",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov", "Quigley",
    "Rossi", "Sato", "Tanaka", "Ueda", "Vargas", "Weber", "Xu", "Yilmaz", "Zhou", "Novak",
    "Silva", "Hughes", "Keller",
];

/// Generates `size` random records.
///
/// With a seed the output is reproducible; without one the generator is
/// seeded from the operating system.
pub fn generate(size: usize, seed: Option<u64>) -> Vec<Record> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with(&mut rng, size)
}

fn generate_with<R: Rng>(rng: &mut R, size: usize) -> Vec<Record> {
    (0..size).map(|_| random_record(rng)).collect()
}

fn random_record<R: Rng>(rng: &mut R) -> Record {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];

    Record::new(first, last)
        .with_age(rng.random_range(0..30))
        .with_visits(rng.random_range(0..100))
        .with_progress(rng.random_range(0..100))
        .with_status(random_status(rng.random::<f64>()))
}

fn random_status(chance: f64) -> Status {
    if chance > 0.66 {
        Status::Relationship
    } else if chance > 0.33 {
        Status::Complicated
    } else {
        Status::Single
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(generate(100, Some(42)), generate(100, Some(42)));
        assert_ne!(generate(100, Some(1)), generate(100, Some(2)));
    }

    #[test]
    fn test_field_ranges() {
        for record in generate(500, Some(9)) {
            assert!(record.age() < 30);
            assert!(record.visits() < 100);
            assert!(record.progress() < 100);
            assert!(record.url().starts_with("https://"));
        }
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(random_status(0.9), Status::Relationship);
        assert_eq!(random_status(0.5), Status::Complicated);
        assert_eq!(random_status(0.33), Status::Single);
    }

    #[test]
    fn test_every_status_appears() {
        let records = generate(300, Some(3));
        for status in Status::ALL {
            assert!(records.iter().any(|r| r.status() == status));
        }
    }
}

//! Baseline catalog records loaded at startup.

use crate::Plant;

fn plant(name: &str, kind: &str, price: f64, family: Option<&str>) -> Plant {
    Plant {
        name: name.to_owned(),
        kind: kind.to_owned(),
        price,
        family: family.map(str::to_owned),
    }
}

/// The records every fresh deployment starts with.
///
/// Names are pre-uppercased: bulk seeding bypasses the create path and
/// applies no normalization of its own.
#[must_use]
pub fn baseline_plants() -> Vec<Plant> {
    vec![
        plant("MONSTERA", "Houseplant", 29.99, Some("Araceae")),
        plant("FICUS", "Houseplant", 24.50, Some("Moraceae")),
        plant("PEACE LILY", "Houseplant", 16.25, Some("Araceae")),
        plant("TULIP", "Flower", 4.75, Some("Liliaceae")),
        plant("BASIL", "Herb", 3.25, Some("Lamiaceae")),
        plant("LAVENDER", "Herb", 6.50, Some("Lamiaceae")),
        plant("ALOE VERA", "Succulent", 12.00, Some("Asphodelaceae")),
        plant("SNAKE PLANT", "Succulent", 18.99, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_names_are_pre_normalized() {
        for p in baseline_plants() {
            assert_eq!(p.name, p.name.to_uppercase(), "seed name not uppercase: {}", p.name);
        }
    }

    #[test]
    fn baseline_names_are_unique() {
        let plants = baseline_plants();
        let mut names: Vec<_> = plants.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), plants.len());
    }
}

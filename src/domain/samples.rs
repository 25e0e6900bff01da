// Preview data for empty installs, demos and tests.

use crate::domain::{BrewMethod, Coffee, Rating, Shot, Stars};

/// (name, roaster, price, origin, raw rating)
/// Raw rating 6 is the legacy "not rated yet" value.
const SAMPLE_COFFEES: [(&str, &str, f64, &str, i64); 10] = [
    ("Ethiopian Yirgacheffe", "Blue Bottle Coffee", 18.99, "Ethiopia", 6),
    ("Colombian Supremo", "Stumptown Coffee Roasters", 16.50, "Colombia", 4),
    ("Sumatra Mandheling", "Intelligentsia Coffee", 19.99, "Sumatra", 4),
    ("Kenya AA", "Counter Culture Coffee", 21.00, "Kenya", 5),
    ("Guatemala Antigua", "Verve Coffee Roasters", 17.50, "Guatemala", 4),
    ("Costa Rica Tarrazu", "Heart Coffee Roasters", 20.00, "Costa Rica", 5),
    ("Brazil Santos", "Ritual Coffee Roasters", 15.99, "Brazil", 3),
    ("Mexico Chiapas", "Four Barrel Coffee", 16.99, "Mexico", 4),
    ("Honduras SHG", "Sightglass Coffee", 18.50, "Honduras", 4),
    ("Rwanda Nyungwe", "Equator Coffees", 22.00, "Rwanda", 5),
];

pub fn sample_coffees() -> Vec<Coffee> {
    SAMPLE_COFFEES
        .iter()
        .map(|&(name, roaster, price, origin, rating)| {
            Coffee::new(
                name.to_string(),
                roaster.to_string(),
                BrewMethod::Espresso,
                price,
                origin.to_string(),
                Rating::from_raw(rating),
            )
        })
        .collect()
}

/// An unassigned 18g in / 36g out / 30s shot
pub fn sample_shot() -> Shot {
    Shot::new(
        BrewMethod::Espresso,
        18.0,
        36.0,
        30.0,
        Stars::new(4).unwrap_or_default(),
        "This was a good shot".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_coffee, validate_shot};

    #[test]
    fn test_samples_are_valid() {
        let coffees = sample_coffees();
        assert_eq!(coffees.len(), 10);
        for coffee in &coffees {
            validate_coffee(coffee).unwrap();
        }
        validate_shot(&sample_shot()).unwrap();
    }

    #[test]
    fn test_first_sample_is_unrated() {
        let coffees = sample_coffees();
        assert_eq!(coffees[0].rating, Rating::Unrated);
        assert_eq!(coffees[3].rating.stars(), 5);
    }
}

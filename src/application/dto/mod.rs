// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)
// - All display formatting (scores, prices, units) happens here

use serde::{Deserialize, Serialize};

use crate::domain::{BrewMethod, Coffee, Shot};

/// Shown when there are no coffees yet
pub const EMPTY_STATE_MESSAGE: &str = "No coffees yet! add some";

/// Picker label before a coffee is chosen
pub const SELECT_COFFEE_LABEL: &str = "Select a coffee";

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a measurement without trailing zeros: 18 → "18", 12.50 → "12.5"
pub fn format_measure(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a price in the given ISO 4217 currency
pub fn format_price(price: f64, currency_code: &str) -> String {
    let symbol = match currency_code {
        "GBP" => Some("£"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "JPY" => Some("¥"),
        _ => None,
    };
    match symbol {
        Some(symbol) => format!("{}{:.2}", symbol, price),
        None => format!("{} {:.2}", currency_code, price),
    }
}

// ============================================================================
// COFFEE DTOs
// ============================================================================

/// One tile of the coffee grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeListItemDto {
    pub id: String,
    pub name: String,
    pub roaster_name: String,
    /// "4/5" or "Not rated"
    pub score: String,
}

impl From<&Coffee> for CoffeeListItemDto {
    fn from(coffee: &Coffee) -> Self {
        Self {
            id: coffee.id.to_string(),
            name: coffee.name.clone(),
            roaster_name: coffee.roaster_name.clone(),
            score: coffee.rating.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeListDto {
    pub items: Vec<CoffeeListItemDto>,
    pub is_empty: bool,
    /// Set only when `is_empty`
    pub empty_message: Option<String>,
}

impl CoffeeListDto {
    pub fn from_coffees(coffees: &[Coffee]) -> Self {
        let items: Vec<CoffeeListItemDto> = coffees.iter().map(CoffeeListItemDto::from).collect();
        let is_empty = items.is_empty();
        Self {
            items,
            is_empty,
            empty_message: is_empty.then(|| EMPTY_STATE_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeDetailDto {
    pub id: String,
    pub name: String,
    pub roaster_name: String,
    pub origin: String,
    pub brew_method: String,
    pub price: f64,
    pub price_label: String,
    /// Filled stars, 0 when unrated
    pub rating_stars: u8,
    pub rating_label: String,
    pub shots: Vec<ShotSummaryDto>,
}

impl CoffeeDetailDto {
    pub fn new(coffee: &Coffee, shots: &[Shot], currency_code: &str) -> Self {
        Self {
            id: coffee.id.to_string(),
            name: coffee.name.clone(),
            roaster_name: coffee.roaster_name.clone(),
            origin: coffee.origin.clone(),
            brew_method: coffee.brew_method.display_name().to_string(),
            price: coffee.price,
            price_label: format_price(coffee.price, currency_code),
            rating_stars: coffee.rating.stars(),
            rating_label: coffee.rating.to_string(),
            shots: shots.iter().map(ShotSummaryDto::from).collect(),
        }
    }
}

// ============================================================================
// SHOT DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotSummaryDto {
    pub id: String,
    pub brew_method: String,
    /// "18g"
    pub grams_in: String,
    /// "36g"
    pub grams_out: String,
    /// "30s"
    pub time: String,
    pub rating: u8,
    pub notes: String,
    pub created_at: String,
}

impl From<&Shot> for ShotSummaryDto {
    fn from(shot: &Shot) -> Self {
        Self {
            id: shot.id.to_string(),
            brew_method: shot.brew_method.display_name().to_string(),
            grams_in: format!("{}g", format_measure(shot.grams_in)),
            grams_out: format!("{}g", format_measure(shot.grams_out)),
            time: format!("{}s", format_measure(shot.time_seconds)),
            rating: shot.rating.value(),
            notes: shot.notes.clone(),
            created_at: shot.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeOptionDto {
    pub id: String,
    pub name: String,
}

/// Coffee selector on the log-a-shot screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeePickerDto {
    pub label: String,
    pub options: Vec<CoffeeOptionDto>,
    pub is_empty: bool,
}

impl CoffeePickerDto {
    pub fn new(coffees: &[Coffee], selected: Option<&Coffee>) -> Self {
        Self {
            label: selected.map_or_else(|| SELECT_COFFEE_LABEL.to_string(), |c| c.name.clone()),
            options: coffees
                .iter()
                .map(|c| CoffeeOptionDto {
                    id: c.id.to_string(),
                    name: c.name.clone(),
                })
                .collect(),
            is_empty: coffees.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewMethodOptionDto {
    pub key: String,
    pub label: String,
}

pub fn brew_method_options() -> Vec<BrewMethodOptionDto> {
    BrewMethod::ALL
        .iter()
        .map(|m| BrewMethodOptionDto {
            key: m.storage_key().to_string(),
            label: m.display_name().to_string(),
        })
        .collect()
}

// ============================================================================
// RESPONSE DTOs
// ============================================================================

/// Successful command result plus the confirmation to flash to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
    pub notice: Option<String>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            notice: None,
        }
    }

    pub fn with_notice(data: T, notice: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            notice: Some(notice.into()),
        }
    }
}

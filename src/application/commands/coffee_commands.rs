// src/application/commands/coffee_commands.rs
//
// Coffee Command Handlers
//
// RULES:
// - Accept forms or raw ids
// - Call services
// - Return DTOs
// - Never contain business logic

use uuid::Uuid;

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::{Rating, Stars};
use crate::forms::CoffeeForm;

pub const COFFEE_ADDED_NOTICE: &str = "Successfully added coffee";
pub const COFFEE_DELETED_NOTICE: &str = "Successfully deleted coffee";

pub(crate) fn parse_coffee_id(coffee_id: &str) -> Result<Uuid, ErrorResponse> {
    Uuid::parse_str(coffee_id.trim())
        .map_err(|e| ErrorResponse::validation(format!("Invalid coffee id: {}", e)))
}

/// Submit the add-coffee form and store the result.
///
/// A validation failure leaves the form as typed; on success the form is
/// already reset when this returns.
pub fn add_coffee(
    state: &AppState,
    form: &mut CoffeeForm,
) -> Result<SuccessResponse<CoffeeListItemDto>, ErrorResponse> {
    let coffee = form.submit()?;

    let stored = state.coffee_service.add_coffee(coffee).to_error_response()?;

    Ok(SuccessResponse::with_notice(
        CoffeeListItemDto::from(&stored),
        COFFEE_ADDED_NOTICE,
    ))
}

/// All coffees in name order, from the live list
pub fn list_coffees(state: &AppState) -> CoffeeListDto {
    CoffeeListDto::from_coffees(&state.coffee_list.snapshot())
}

/// A coffee with its shots, oldest shot first
pub fn get_coffee_detail(
    state: &AppState,
    coffee_id: &str,
) -> Result<CoffeeDetailDto, ErrorResponse> {
    let id = parse_coffee_id(coffee_id)?;

    let coffee = state
        .coffee_service
        .get_coffee(id)
        .to_error_response()?
        .ok_or_else(|| ErrorResponse::not_found("Coffee"))?;

    let shots = state.shot_service.list_shots(id).to_error_response()?;

    Ok(CoffeeDetailDto::new(
        &coffee,
        &shots,
        &state.config.currency_code,
    ))
}

/// Set a coffee's rating. `0` clears it, `1..=5` sets that many stars.
pub fn rate_coffee(
    state: &AppState,
    coffee_id: &str,
    stars: u8,
) -> Result<CoffeeListItemDto, ErrorResponse> {
    let id = parse_coffee_id(coffee_id)?;

    let rating = match stars {
        0 => Rating::Unrated,
        n => Rating::Rated(
            Stars::new(n).map_err(|e| ErrorResponse::validation(e.to_string()))?,
        ),
    };

    state
        .coffee_service
        .rate_coffee(id, rating)
        .to_error_response()?;

    state
        .coffee_list
        .find(id)
        .map(|c| CoffeeListItemDto::from(&c))
        .ok_or_else(|| ErrorResponse::not_found("Coffee"))
}

/// Delete a coffee along with its shots
pub fn delete_coffee(
    state: &AppState,
    coffee_id: &str,
) -> Result<SuccessResponse<String>, ErrorResponse> {
    let id = parse_coffee_id(coffee_id)?;

    state.coffee_service.delete_coffee(id).to_error_response()?;

    Ok(SuccessResponse::with_notice(id.to_string(), COFFEE_DELETED_NOTICE))
}

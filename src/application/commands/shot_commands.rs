// src/application/commands/shot_commands.rs
//
// Shot Command Handlers

use crate::application::{
    commands::coffee_commands::parse_coffee_id,
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::Coffee;
use crate::forms::ShotForm;

pub const SHOT_LOGGED_NOTICE: &str = "Successfully logged a shot";

fn selected_coffee(
    state: &AppState,
    selected_coffee_id: Option<&str>,
) -> Result<Option<Coffee>, ErrorResponse> {
    match selected_coffee_id {
        None => Ok(None),
        Some(raw) => {
            let id = parse_coffee_id(raw)?;
            state
                .coffee_list
                .find(id)
                .map(Some)
                .ok_or_else(|| ErrorResponse::not_found("Coffee"))
        }
    }
}

/// Submit the log-a-shot form against the selected coffee.
///
/// Without a selection the form reports `noCoffeeSelected`; the form resets
/// once it validates, even if storing the shot then fails.
pub fn log_shot(
    state: &AppState,
    form: &mut ShotForm,
    selected_coffee_id: Option<&str>,
) -> Result<SuccessResponse<ShotSummaryDto>, ErrorResponse> {
    let coffee = selected_coffee(state, selected_coffee_id)?;
    let shot = form.submit(coffee.as_ref())?;

    let owner = shot
        .coffee_id
        .ok_or_else(|| ErrorResponse::validation("Shot has no coffee"))?;
    let stored = state.shot_service.log_shot(shot, owner).to_error_response()?;

    Ok(SuccessResponse::with_notice(
        ShotSummaryDto::from(&stored),
        SHOT_LOGGED_NOTICE,
    ))
}

/// Coffee selector for the log-a-shot screen
pub fn coffee_picker(
    state: &AppState,
    selected_coffee_id: Option<&str>,
) -> Result<CoffeePickerDto, ErrorResponse> {
    let selected = selected_coffee(state, selected_coffee_id)?;
    Ok(CoffeePickerDto::new(
        &state.coffee_list.snapshot(),
        selected.as_ref(),
    ))
}

pub fn brew_methods() -> Vec<BrewMethodOptionDto> {
    brew_method_options()
}

use axum::{extract::State, Json};

use crate::{
    model::item::{EnhanceItemDto, EnhanceResultDto},
    server::{
        error::AppError, middleware::auth::AccountId, service::enhance::EnhanceService,
        state::AppState,
    },
};

/// Attempt to enhance an item.
///
/// # Returns
/// - `200 OK` - Outcome; on failure the item was destroyed
/// - `400 Bad Request` - Item not enhanceable, at max level or not enough money
/// - `404 Not Found` - Item not found
pub async fn enhance_item(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<EnhanceItemDto>,
) -> Result<Json<EnhanceResultDto>, AppError> {
    let result = EnhanceService::new(&state.db, &state.catalog)
        .enhance(account_id, payload.item_id)
        .await?;

    Ok(Json(result.into_dto()))
}

use axum::{extract::State, Json};

use crate::{
    model::purchase::{PurchaseDto, PurchaseResultDto},
    server::{
        error::AppError, middleware::auth::AccountId, service::purchase::PurchaseService,
        state::AppState,
    },
};

/// Redeem an in-app purchase receipt.
///
/// The receipt is trusted as verified by the store platform upstream.
///
/// # Returns
/// - `200 OK` - Id of the mail carrying the product's items
/// - `404 Not Found` - Unknown product
/// - `409 Conflict` - Receipt already redeemed
pub async fn purchase(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<PurchaseDto>,
) -> Result<Json<PurchaseResultDto>, AppError> {
    let mail_id = PurchaseService::new(&state.db, &state.catalog)
        .redeem(account_id, &payload.receipt_id, payload.product_code)
        .await?;

    Ok(Json(PurchaseResultDto {
        receipt_id: payload.receipt_id,
        mail_id,
    }))
}

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::{
    model::mail::{MailDto, MailIdDto, ReceivedItemsDto},
    server::{
        error::AppError, middleware::auth::AccountId, model::item::RewardItem,
        service::mail::MailService, state::AppState,
    },
};

/// Open a mail and mark it read.
///
/// # Returns
/// - `200 OK` - Mail body and attachments
/// - `404 Not Found` - Mail not found, deleted or owned by another account
pub async fn read_mail(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<MailIdDto>,
) -> Result<Json<MailDto>, AppError> {
    let mail = MailService::new(&state.db, &state.catalog)
        .read(account_id, payload.mail_id)
        .await?;

    Ok(Json(mail.into_dto()))
}

/// Receive every attachment of a mail.
///
/// # Returns
/// - `200 OK` - Items granted by this request
/// - `404 Not Found` - Mail not found
/// - `409 Conflict` - Attachments already received
/// - `410 Gone` - Mail expired
pub async fn receive_mail_items(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<MailIdDto>,
) -> Result<Json<ReceivedItemsDto>, AppError> {
    let items = MailService::new(&state.db, &state.catalog)
        .receive_items(account_id, payload.mail_id, Utc::now())
        .await?;

    Ok(Json(ReceivedItemsDto {
        mail_id: payload.mail_id,
        items: items.into_iter().map(RewardItem::into_dto).collect(),
    }))
}

/// Delete a mail.
///
/// # Returns
/// - `204 No Content` - Mail deleted
/// - `404 Not Found` - Mail not found
pub async fn delete_mail(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<MailIdDto>,
) -> Result<StatusCode, AppError> {
    MailService::new(&state.db, &state.catalog)
        .delete(account_id, payload.mail_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    model::dungeon::{
        ClearResultDto, ClearStageDto, KillEnemyDto, ObtainItemDto, ProgressDto, SelectStageDto,
        StageDto, StageQuotaDto,
    },
    server::{
        error::AppError,
        middleware::auth::AccountId,
        model::dungeon::{progress_dto, stage_quota_dto, StageEntry},
        service::dungeon::DungeonService,
        state::AppState,
    },
};

fn service(state: &AppState) -> DungeonService<'_> {
    DungeonService::new(
        &state.db,
        &state.catalog,
        state.store.as_ref(),
        state.run_ttl,
    )
}

/// List every stage with its unlock state and the account's best record.
///
/// # Returns
/// - `200 OK` - Stages in ascending code order
pub async fn list_stages(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<Json<Vec<StageDto>>, AppError> {
    let stages = service(&state).list_stages(account_id).await?;

    Ok(Json(stages.into_iter().map(StageEntry::into_dto).collect()))
}

/// Start a run of a stage.
///
/// # Returns
/// - `200 OK` - Item and enemy quotas of the stage
/// - `403 Forbidden` - Previous stage not cleared
/// - `404 Not Found` - Unknown stage or account
/// - `409 Conflict` - A stale run existed and was discarded, select again
/// - `503 Service Unavailable` - Run state store unreachable
pub async fn select_stage(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<SelectStageDto>,
) -> Result<Json<StageQuotaDto>, AppError> {
    let stage = service(&state)
        .select_stage(account_id, payload.stage_code)
        .await?;

    Ok(Json(stage_quota_dto(stage)))
}

/// Record an enemy kill in the active run.
///
/// # Returns
/// - `200 OK` - Updated kill count
/// - `400 Bad Request` - Enemy not part of the stage
/// - `409 Conflict` - No active run
/// - `422 Unprocessable Entity` - More kills than the stage has enemies
pub async fn kill_enemy(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<KillEnemyDto>,
) -> Result<Json<ProgressDto>, AppError> {
    let progress = service(&state)
        .kill_enemy(account_id, payload.enemy_code)
        .await?;

    Ok(Json(progress_dto(payload.enemy_code, progress)))
}

/// Record items obtained in the active run.
///
/// # Returns
/// - `200 OK` - Updated obtained count
/// - `400 Bad Request` - Item does not drop in the stage or count below 1
/// - `409 Conflict` - No active run
/// - `422 Unprocessable Entity` - More items than the stage drops
pub async fn obtain_item(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<ObtainItemDto>,
) -> Result<Json<ProgressDto>, AppError> {
    let progress = service(&state)
        .obtain_item(account_id, payload.item_code, payload.count)
        .await?;

    Ok(Json(progress_dto(payload.item_code, progress)))
}

/// Clear the active run and settle its rewards.
///
/// # Returns
/// - `200 OK` - Granted items, experience and level after settlement
/// - `400 Bad Request` - Run incomplete, wrong stage or invalid rank/time
/// - `409 Conflict` - No active run
/// - `500 Internal Server Error` - Settlement failed, nothing granted, run kept for retry
pub async fn clear_stage(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Json(payload): Json<ClearStageDto>,
) -> Result<Json<ClearResultDto>, AppError> {
    let result = service(&state)
        .clear_stage(
            account_id,
            payload.stage_code,
            payload.rank,
            payload.clear_time_ms,
        )
        .await?;

    Ok(Json(result.into_dto()))
}

/// Abandon the active run without rewards.
///
/// # Returns
/// - `204 No Content` - Run removed, or no run existed
pub async fn abort_stage(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<StatusCode, AppError> {
    service(&state).abort_stage(account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

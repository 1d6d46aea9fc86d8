use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        account::{create_account, get_account},
        attendance::check_in,
        dungeon::{abort_stage, clear_stage, kill_enemy, list_stages, obtain_item, select_stage},
        item::enhance_item,
        mail::{delete_mail, read_mail, receive_mail_items},
        purchase::purchase,
    },
    middleware::lock::lock_account,
    state::AppState,
};

/// Builds the API router.
///
/// Every route runs behind the request lock middleware, which reads the account id
/// header, holds the account's lock for the whole request and releases it afterwards.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/account", post(create_account).get(get_account))
        .route("/api/dungeon/stages", get(list_stages))
        .route("/api/dungeon/select", post(select_stage))
        .route("/api/dungeon/kill", post(kill_enemy))
        .route("/api/dungeon/obtain", post(obtain_item))
        .route("/api/dungeon/clear", post(clear_stage))
        .route("/api/dungeon/abort", post(abort_stage))
        .route("/api/mail/read", post(read_mail))
        .route("/api/mail/receive", post(receive_mail_items))
        .route("/api/mail/delete", post(delete_mail))
        .route("/api/attendance", post(check_in))
        .route("/api/purchase", post(purchase))
        .route("/api/item/enhance", post(enhance_item))
        .layer(from_fn_with_state(state.lock.clone(), lock_account))
        .with_state(state)
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique account ids in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an account together with its attendance row.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((account, attendance))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_account_with_attendance(
    db: &DatabaseConnection,
) -> Result<(entity::account_progress::Model, entity::attendance::Model), DbErr> {
    let account = crate::factory::account::create_account(db).await?;
    let attendance =
        crate::factory::attendance::create_attendance(db, account.account_id, 0, None).await?;

    Ok((account, attendance))
}

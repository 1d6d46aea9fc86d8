use super::*;

/// Tests creating and recording a check-in.
///
/// Verifies that a fresh row has no check-in and that recording stores streak and time.
///
/// Expected: Ok with streak 1 and a last check-in time
#[tokio::test]
async fn records_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = AttendanceRepository::new(db);
    let attendance = repo.create(account.account_id).await?;
    assert_eq!(attendance.streak, 0);
    assert!(attendance.last_attended_at.is_none());

    let now = Utc::now();
    repo.record(attendance, 1, now).await?;

    let stored = repo.find(account.account_id).await?.unwrap();
    assert_eq!(stored.streak, 1);
    assert!(stored.last_attended_at.is_some());

    Ok(())
}

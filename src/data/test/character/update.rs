use super::*;

/// Tests that an update overwrites guild, level, resets and last_seen.
///
/// Expected: Ok with the new observation stored
#[tokio::test]
async fn updates_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::character::CharacterFactory::new(db)
        .name("DarkLord")
        .guild("Legion")
        .last_level(100)
        .last_resets(1)
        .last_seen(Utc::now() - Duration::hours(3))
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let param = observation("DarkLord", "Phoenix", 210, 2);
    let updated = repo.update(existing.id, &param).await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.guild, "Phoenix");
    assert_eq!(updated.last_level, 210);
    assert_eq!(updated.last_resets, 2);
    assert!(updated.last_seen > existing.last_seen);

    let stored = repo.find_by_name("DarkLord").await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests that the stored spelling follows the newest observation.
///
/// Expected: Ok with name replaced
#[tokio::test]
async fn replaces_name_spelling() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::character::CharacterFactory::new(db)
        .name("darklord")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let updated = repo
        .update(existing.id, &observation("DarkLord", "Legion", 10, 0))
        .await?;

    assert_eq!(updated.name, "DarkLord");

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo
        .update(9999, &observation("Ghost", "Legion", 10, 0))
        .await;

    assert!(result.is_err());

    Ok(())
}

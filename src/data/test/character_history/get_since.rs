use super::*;

/// Tests that entries come back oldest first regardless of insertion order.
///
/// Expected: Ok with entries sorted by recorded_at ascending
#[tokio::test]
async fn returns_entries_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let now = Utc::now();

    for (level, hours_ago) in [(30, 1), (10, 5), (20, 3)] {
        factory::character_history::CharacterHistoryFactory::new(db, character.id)
            .level(level)
            .recorded_at(now - Duration::hours(hours_ago))
            .build()
            .await?;
    }

    let repo = CharacterHistoryRepository::new(db);
    let entries = repo
        .get_since(character.id, now - Duration::days(1))
        .await?;

    let levels: Vec<u32> = entries.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![10, 20, 30]);

    Ok(())
}

/// Tests that entries older than the window are excluded.
///
/// Expected: Ok with only the entries inside the 30 day window
#[tokio::test]
async fn excludes_entries_outside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let now = Utc::now();

    factory::character_history::CharacterHistoryFactory::new(db, character.id)
        .level(5)
        .recorded_at(now - Duration::days(45))
        .build()
        .await?;
    factory::character_history::CharacterHistoryFactory::new(db, character.id)
        .level(50)
        .recorded_at(now - Duration::days(2))
        .build()
        .await?;

    let repo = CharacterHistoryRepository::new(db);
    let entries = repo.get_recent_days(character.id, 30).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, 50);

    Ok(())
}

/// Tests that entries of other characters are excluded.
///
/// Expected: Ok with only the requested character's entries
#[tokio::test]
async fn excludes_other_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_character(db).await?;
    let second = factory::create_character(db).await?;
    factory::create_history_entry(db, first.id).await?;
    factory::create_history_entry(db, second.id).await?;
    factory::create_history_entry(db, second.id).await?;

    let repo = CharacterHistoryRepository::new(db);
    let entries = repo.get_recent_days(first.id, 30).await?;

    assert_eq!(entries.len(), 1);
    assert!(entries.iter().all(|e| e.character_id == first.id));

    Ok(())
}

/// Tests a character with no history.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let repo = CharacterHistoryRepository::new(db);
    let entries = repo.get_recent_days(character.id, 30).await?;

    assert!(entries.is_empty());

    Ok(())
}

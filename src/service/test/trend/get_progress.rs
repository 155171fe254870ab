use super::*;
use crate::service::trend::RECENT_ENTRY_LIMIT;

/// Tests the progress view of a character with a long history.
///
/// Expected: Some with statistics and only the newest entries, newest first
#[tokio::test]
async fn returns_stats_and_latest_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::CharacterFactory::new(db)
        .name("ElfQueen")
        .build()
        .await?;
    let start = Utc::now() - Duration::days(3);
    factory::helpers::create_history_series(
        db,
        character.id,
        start,
        &[(100, 1, 0), (120, 1, 4), (140, 1, 8), (160, 1, 12), (180, 1, 16), (200, 1, 20), (220, 1, 24)],
    )
    .await?;

    let progress = TrendService::new(db)
        .get_progress("elfqueen")
        .await?
        .unwrap();

    assert_eq!(progress.character.id, character.id);
    assert_eq!(progress.stats.unwrap().sample_count, 7);
    assert_eq!(progress.recent.len(), RECENT_ENTRY_LIMIT as usize);
    assert_eq!(progress.recent[0].level, 220);
    assert_eq!(progress.recent[4].level, 140);

    Ok(())
}

/// Tests the progress view of a character observed only once.
///
/// Expected: Some without statistics
#[tokio::test]
async fn omits_stats_with_single_observation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::CharacterFactory::new(db)
        .name("Summoner")
        .build()
        .await?;
    factory::create_history_entry(db, character.id).await?;

    let progress = TrendService::new(db).get_progress("Summoner").await?.unwrap();

    assert!(progress.stats.is_none());
    assert_eq!(progress.recent.len(), 1);

    Ok(())
}

/// Tests the progress view of a name that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(TrendService::new(db).get_progress("Nobody").await?.is_none());

    Ok(())
}

/// Tests that surrounding whitespace and non-ASCII letter case do not hide a stored character.
///
/// Expected: Ok(Some) for the padded, differently cased name
#[tokio::test]
async fn finds_character_by_trimmed_folded_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .name("Ébano")
        .build()
        .await?;

    let progress = TrendService::new(db).get_progress(" éBANO ").await?;

    assert_eq!(progress.map(|p| p.character.name), Some("Ébano".to_string()));

    Ok(())
}

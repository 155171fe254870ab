use super::*;
use crate::{data::character::CharacterRepository, model::character::RecordObservationParam};

fn observation(name: &str, guild: &str, level: u32, resets: u32) -> RecordObservationParam {
    RecordObservationParam {
        name: name.to_string(),
        guild: guild.to_string(),
        level,
        resets,
        observed_at: Utc::now(),
    }
}

/// Tests recording the first observation of a character.
///
/// Expected: Ok with the character created and one history entry matching it
#[tokio::test]
async fn creates_character_and_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lookup, _) = ranking_lookup(StubRankingSource::new());
    let service = CharacterService::new(db, &lookup);

    let character = service
        .record_observation(observation("ElfQueen", "Phoenix", 385, 9))
        .await?;

    let stored = CharacterRepository::new(db)
        .find_by_name("ElfQueen")
        .await?
        .unwrap();
    assert_eq!(stored, character);
    assert_eq!(stored.guild, "Phoenix");
    assert_eq!(stored.last_level, 385);
    assert_eq!(stored.last_resets, 9);

    let history = entity::prelude::CharacterHistory::find().all(db).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].character_id, character.id);
    assert_eq!(history[0].level, 385);
    assert_eq!(history[0].resets, 9);
    assert_eq!(history[0].recorded_at, character.last_seen);

    Ok(())
}

/// Tests that a name differing only in letter case updates the existing row.
///
/// Expected: Ok with one character row and the new spelling stored
#[tokio::test]
async fn updates_existing_character_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::character::CharacterFactory::new(db)
        .name("darklord")
        .guild("Legion")
        .last_level(100)
        .build()
        .await?;

    let (lookup, _) = ranking_lookup(StubRankingSource::new());
    let service = CharacterService::new(db, &lookup);

    let character = service
        .record_observation(observation("DarkLord", "Hydra", 150, 1))
        .await?;

    assert_eq!(character.id, existing.id);
    assert_eq!(character.name, "DarkLord");
    assert_eq!(entity::prelude::Character::find().count(db).await?, 1);

    Ok(())
}

/// Tests that each observation appends a history entry.
///
/// Expected: Ok with history length equal to observations recorded
#[tokio::test]
async fn appends_history_for_every_observation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lookup, _) = ranking_lookup(StubRankingSource::new());
    let service = CharacterService::new(db, &lookup);

    for level in [10, 20, 30] {
        service
            .record_observation(observation("Summoner", "Legion", level, 0))
            .await?;
    }

    assert_eq!(entity::prelude::Character::find().count(db).await?, 1);
    assert_eq!(
        entity::prelude::CharacterHistory::find().count(db).await?,
        3
    );

    Ok(())
}

/// Tests re-recording a name with non-ASCII capitals under a different letter case.
///
/// Expected: Ok with one character row, the latest level and two history entries
#[tokio::test]
async fn refreshes_non_ascii_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lookup, _) = ranking_lookup(StubRankingSource::new());
    let service = CharacterService::new(db, &lookup);

    let first = service
        .record_observation(observation("Ébano", "Legion", 10, 0))
        .await?;
    let second = service
        .record_observation(observation("ÉBANO", "Legion", 20, 0))
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.last_level, 20);
    assert_eq!(entity::prelude::Character::find().count(db).await?, 1);
    assert_eq!(
        entity::prelude::CharacterHistory::find().count(db).await?,
        2
    );

    Ok(())
}

/// Tests that a failed history insert rolls the character write back.
///
/// Expected: Err with no character row left behind
#[tokio::test]
async fn rolls_back_when_history_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lookup, _) = ranking_lookup(StubRankingSource::new());
    let service = CharacterService::new(db, &lookup);

    let result = service
        .record_observation(observation("ElfQueen", "Phoenix", 385, 9))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Character::find().count(db).await?, 0);

    Ok(())
}

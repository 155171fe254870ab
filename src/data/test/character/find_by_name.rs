use super::*;

/// Tests finding a character stored under the exact name.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .name("DarkLord")
        .guild("Legion")
        .last_level(350)
        .last_resets(4)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let character = repo.find_by_name("DarkLord").await?.unwrap();

    assert_eq!(character.name, "DarkLord");
    assert_eq!(character.guild, "Legion");
    assert_eq!(character.last_level, 350);
    assert_eq!(character.last_resets, 4);

    Ok(())
}

/// Tests querying a name that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo.find_by_name("Nobody").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a row with a negative level is rejected instead of passed along.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_malformed_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .name("Broken")
        .last_level(-3)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let result = repo.find_by_name("Broken").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests that lookup ignores letter case in both directions.
///
/// Expected: Ok(Some) for lower, upper and mixed case queries
#[tokio::test]
async fn matches_any_letter_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .name("DarkLord")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);

    for query in ["darklord", "DARKLORD", "dArKlOrD"] {
        let character = repo.find_by_name(query).await?;
        assert_eq!(character.map(|c| c.name), Some("DarkLord".to_string()));
    }

    Ok(())
}

/// Tests that a prefix does not match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_partial_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .name("DarkLord")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let result = repo.find_by_name("dark").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that capitals outside ASCII are folded too.
///
/// Expected: Ok(Some) for the differently cased query
#[tokio::test]
async fn matches_non_ascii_letter_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .name("Ébano")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let character = repo.find_by_name("éBANO").await?;

    assert_eq!(character.map(|c| c.name), Some("Ébano".to_string()));

    Ok(())
}

/// Tests that surrounding whitespace is ignored.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn ignores_surrounding_whitespace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .name("DarkLord")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);

    assert!(repo.find_by_name("  DarkLord ").await?.is_some());

    Ok(())
}

use super::*;

/// Tests that a fetched school carries the number of its students.
///
/// Expected: Ok(Some) with total_student matching the enrolled students
#[tokio::test]
async fn returns_school_with_student_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _) = factory::helpers::create_full_school(db, 3).await?;
    factory::school::create_school(db).await?;

    let repo = SchoolRepository::new(db);
    let found = repo.get_by_id(school.id).await?.unwrap();

    assert_eq!(found.id, school.id);
    assert_eq!(found.total_student, 3);

    Ok(())
}

/// Tests fetching a school that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());
    assert!(repo.find_locked(999).await?.is_none());

    Ok(())
}

/// Tests the locking read used by capacity checks.
///
/// The lock clause is dropped on SQLite, so the read behaves like `get_by_id`.
///
/// Expected: Ok(Some) with the student count
#[tokio::test]
async fn find_locked_returns_school_with_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _) = factory::helpers::create_student_with_school(db).await?;

    let repo = SchoolRepository::new(db);
    let locked = repo.find_locked(school.id).await?.unwrap();

    assert_eq!(locked.total_student, 1);

    Ok(())
}

/// Tests looking a school up by its exact name.
///
/// Expected: Ok(Some) for a known name, Ok(None) otherwise
#[tokio::test]
async fn finds_school_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::school::SchoolFactory::new(db)
        .name("St. Joseph School")
        .build()
        .await?;

    let repo = SchoolRepository::new(db);

    let found = repo.find_by_name("St. Joseph School").await?.unwrap();
    assert_eq!(found.id, school.id);
    assert!(repo.find_by_name("St. Joseph").await?.is_none());

    Ok(())
}

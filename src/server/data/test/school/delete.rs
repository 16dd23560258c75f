use super::*;

/// Tests that deleting a school removes its students.
///
/// Expected: Ok(true) and no students left for the school
#[tokio::test]
async fn deletes_school_and_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _) = factory::helpers::create_full_school(db, 3).await?;
    let (other, _) = factory::helpers::create_student_with_school(db).await?;

    let repo = SchoolRepository::new(db);
    assert!(repo.delete(school.id).await?);

    assert!(entity::prelude::School::find_by_id(school.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);
    assert_eq!(repo.count_students(other.id).await?, 1);

    Ok(())
}

/// Tests deleting a school that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}

use super::*;

/// Tests that the flat scope sees every student.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_student_in_all_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_school(db).await?;

    let repo = StudentRepository::new(db);
    let found = repo.get_in_scope(StudentScope::All, student.id).await?.unwrap();

    assert_eq!(found.id, student.id);
    assert_eq!(found.first_name, student.first_name);

    Ok(())
}

/// Tests that a school scope hides students of other schools.
///
/// Expected: Ok(Some) for the owning school, Ok(None) for another school
#[tokio::test]
async fn hides_student_of_other_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, student) = factory::helpers::create_student_with_school(db).await?;
    let other = factory::create_school(db).await?;

    let repo = StudentRepository::new(db);

    assert!(repo
        .get_in_scope(StudentScope::School(school.id), student.id)
        .await?
        .is_some());
    assert!(repo
        .get_in_scope(StudentScope::School(other.id), student.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests the exact name lookup used when seeding.
///
/// Expected: true only for an exact first and last name pair
#[tokio::test]
async fn detects_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    factory::student::StudentFactory::new(db, school.id)
        .first_name("Ayesha")
        .last_name("Siddika")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.exists_with_name("Ayesha", "Siddika").await?);
    assert!(!repo.exists_with_name("Ayesha", "Karim").await?);

    Ok(())
}

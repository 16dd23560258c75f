use super::*;

/// Tests deleting a student within and outside its school scope.
///
/// Expected: Ok(false) for another school's scope, Ok(true) for its own
#[tokio::test]
async fn deletes_only_in_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, student) = factory::helpers::create_student_with_school(db).await?;
    let other = factory::create_school(db).await?;

    let repo = StudentRepository::new(db);

    assert!(!repo.delete(StudentScope::School(other.id), student.id).await?);
    assert!(repo.delete(StudentScope::School(school.id), student.id).await?);
    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(!repo.delete(StudentScope::All, 3).await?);

    Ok(())
}

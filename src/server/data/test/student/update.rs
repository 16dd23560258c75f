use super::*;

fn update(id: i32) -> UpdateStudentParams {
    UpdateStudentParams {
        id,
        school_id: None,
        first_name: None,
        last_name: None,
        age: None,
        nationality: None,
        address: None,
    }
}

/// Tests that a partial update leaves other fields and the student_id untouched.
///
/// Expected: Ok with only last_name changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, student) = factory::helpers::create_student_with_school(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParams {
            last_name: Some("Rahman".to_string()),
            ..update(student.id)
        })
        .await?;

    assert_eq!(updated.last_name, "Rahman");
    assert_eq!(updated.first_name, student.first_name);
    assert_eq!(updated.school_id, school.id);
    assert_eq!(updated.student_id.to_string(), student.student_id);

    Ok(())
}

/// Tests moving a student to another school.
///
/// Expected: Ok with the new school_id
#[tokio::test]
async fn moves_student_to_other_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_school(db).await?;
    let other = factory::create_school(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParams {
            school_id: Some(other.id),
            age: Some(Decimal::new(7, 0)),
            ..update(student.id)
        })
        .await?;

    assert_eq!(updated.school_id, other.id);
    assert_eq!(updated.age, Some(Decimal::new(700, 2)));

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.update(update(11)).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

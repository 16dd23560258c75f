use super::*;

fn params(school_id: i32) -> CreateStudentParams {
    CreateStudentParams {
        school_id,
        first_name: "Hasan".to_string(),
        last_name: "Mahmud".to_string(),
        age: Some(Decimal::new(105, 1)),
        nationality: "Bangladeshi".to_string(),
        address: String::new(),
    }
}

/// Tests creating a student.
///
/// Verifies that a student_id is generated and the age is stored in hundredths.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.create(params(school.id)).await?;

    assert_eq!(student.school_id, school.id);
    assert_eq!(student.student_id.get_version_num(), 4);
    assert_eq!(student.age, Some(Decimal::new(1050, 2)));

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.age_hundredths, Some(1050));
    assert_eq!(stored.student_id, student.student_id.to_string());

    Ok(())
}

/// Tests that every created student gets a distinct student_id.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn generates_unique_student_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let repo = StudentRepository::new(db);
    let first = repo.create(params(school.id)).await?;
    let second = repo.create(params(school.id)).await?;

    assert_ne!(first.student_id, second.student_id);

    Ok(())
}

/// Tests creating a student for a school that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.create(params(404)).await;

    assert!(result.is_err());

    Ok(())
}

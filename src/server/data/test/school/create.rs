use super::*;

/// Tests creating a school.
///
/// Verifies that the repository stores every field and reports an empty enrolment.
///
/// Expected: Ok with school created
#[tokio::test]
async fn creates_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);
    let school = repo
        .create(CreateSchoolParams {
            name: "Green Herald School".to_string(),
            max_students: 12,
            city: "Dhaka".to_string(),
            country: "Bangladesh".to_string(),
            address: "Mohammadpur".to_string(),
        })
        .await?;

    assert_eq!(school.name, "Green Herald School");
    assert_eq!(school.max_students, 12);
    assert_eq!(school.address, "Mohammadpur");
    assert_eq!(school.total_student, 0);

    let stored = entity::prelude::School::find_by_id(school.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

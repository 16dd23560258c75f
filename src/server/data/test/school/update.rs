use super::*;

fn update(id: i32) -> UpdateSchoolParams {
    UpdateSchoolParams {
        id,
        name: None,
        max_students: None,
        city: None,
        country: None,
        address: None,
    }
}

/// Tests that only the provided fields change.
///
/// Expected: Ok with max_students updated and other fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::school::SchoolFactory::new(db)
        .name("Ideal Boys School")
        .build()
        .await?;

    let repo = SchoolRepository::new(db);
    let updated = repo
        .update(UpdateSchoolParams {
            max_students: Some(7),
            ..update(school.id)
        })
        .await?;

    assert_eq!(updated.max_students, 7);
    assert_eq!(updated.name, "Ideal Boys School");
    assert_eq!(updated.city, school.city);

    Ok(())
}

/// Tests an update carrying no fields.
///
/// Expected: Ok with the school unchanged
#[tokio::test]
async fn empty_update_returns_school_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _) = factory::helpers::create_student_with_school(db).await?;

    let repo = SchoolRepository::new(db);
    let updated = repo.update(update(school.id)).await?;

    assert_eq!(updated.name, school.name);
    assert_eq!(updated.total_student, 1);

    Ok(())
}

/// Tests updating a school that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);
    let result = repo.update(update(42)).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

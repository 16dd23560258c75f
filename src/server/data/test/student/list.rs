use super::*;

fn params(search: Option<&str>, ordering: Option<&str>) -> ListParams<StudentOrderField> {
    ListParams::new(search.map(str::to_string), ordering, 0, 10)
}

/// Tests that a school scope only lists that school's students.
///
/// Expected: Ok with the scoped students and an empty list for an unknown school
#[tokio::test]
async fn lists_students_in_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _) = factory::helpers::create_full_school(db, 2).await?;
    factory::helpers::create_student_with_school(db).await?;

    let repo = StudentRepository::new(db);

    let (all, total) = repo.list(StudentScope::All, &params(None, None)).await?;
    assert_eq!(total, 3);
    assert_eq!(all.len(), 3);

    let (scoped, total) = repo
        .list(StudentScope::School(school.id), &params(None, None))
        .await?;
    assert_eq!(total, 2);
    assert!(scoped.iter().all(|s| s.school_id == school.id));

    let (none, total) = repo
        .list(StudentScope::School(9999), &params(None, None))
        .await?;
    assert_eq!(total, 0);
    assert!(none.is_empty());

    Ok(())
}

/// Tests searching first and last names.
///
/// Expected: Ok with only matching students
#[tokio::test]
async fn searches_first_and_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    factory::student::StudentFactory::new(db, school.id)
        .first_name("Tanvir")
        .last_name("Ahmed")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, school.id)
        .first_name("Nusrat")
        .last_name("Tanvira")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, school.id)
        .first_name("Rafi")
        .last_name("Karim")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let (students, total) = repo.list(StudentScope::All, &params(Some("tanvir"), None)).await?;

    assert_eq!(total, 2);
    let first_names: Vec<&str> = students.iter().map(|s| s.first_name.as_str()).collect();
    assert_eq!(first_names, vec!["Tanvir", "Nusrat"]);

    Ok(())
}

/// Tests ordering on a column of the related school.
///
/// Expected: Ok with students sorted by school name descending
#[tokio::test]
async fn orders_by_school_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alpha = factory::school::SchoolFactory::new(db)
        .name("Alpha School")
        .build()
        .await?;
    let zeta = factory::school::SchoolFactory::new(db)
        .name("Zeta School")
        .build()
        .await?;
    let in_alpha = factory::create_student(db, alpha.id).await?;
    let in_zeta = factory::create_student(db, zeta.id).await?;

    let repo = StudentRepository::new(db);
    let (students, _) = repo
        .list(StudentScope::All, &params(None, Some("-school__name")))
        .await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![in_zeta.id, in_alpha.id]);

    Ok(())
}

/// Tests ordering by age.
///
/// Expected: Ok with students sorted by age ascending
#[tokio::test]
async fn orders_by_age() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let older = factory::student::StudentFactory::new(db, school.id)
        .age_hundredths(Some(1200))
        .build()
        .await?;
    let younger = factory::student::StudentFactory::new(db, school.id)
        .age_hundredths(Some(650))
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let (students, _) = repo.list(StudentScope::All, &params(None, Some("age"))).await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![younger.id, older.id]);

    Ok(())
}

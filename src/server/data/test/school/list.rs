use super::*;

fn params(search: Option<&str>, ordering: Option<&str>, page: u64, entries: u64) -> ListParams<SchoolOrderField> {
    ListParams::new(search.map(str::to_string), ordering, page, entries)
}

/// Tests pagination totals and page contents.
///
/// Expected: Ok with the requested slice and the full count
#[tokio::test]
async fn paginates_schools() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::school::create_school(db).await?;
    }

    let repo = SchoolRepository::new(db);

    let (first, total) = repo.list(&params(None, None, 0, 2)).await?;
    assert_eq!(total, 5);
    assert_eq!(first.len(), 2);

    let (last, _) = repo.list(&params(None, None, 2, 2)).await?;
    assert_eq!(last.len(), 1);
    assert!(first[0].id < first[1].id);

    Ok(())
}

/// Tests that search matches name, city or country case-insensitively.
///
/// Expected: Ok with only matching schools
#[tokio::test]
async fn searches_name_city_and_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let herald = factory::school::SchoolFactory::new(db)
        .name("Green Herald School")
        .build()
        .await?;
    let kolkata = factory::school::SchoolFactory::new(db)
        .name("St. Francis School")
        .city("Kolkata")
        .country("India")
        .build()
        .await?;

    let repo = SchoolRepository::new(db);

    let (by_name, total) = repo.list(&params(Some("herald"), None, 0, 10)).await?;
    assert_eq!(total, 1);
    assert_eq!(by_name[0].id, herald.id);

    let (by_city, _) = repo.list(&params(Some("KOLK"), None, 0, 10)).await?;
    assert_eq!(by_city.len(), 1);
    assert_eq!(by_city[0].id, kolkata.id);

    let (by_country, _) = repo.list(&params(Some("india"), None, 0, 10)).await?;
    assert_eq!(by_country.len(), 1);

    Ok(())
}

/// Tests descending ordering with the id tiebreaker.
///
/// Expected: Ok with schools sorted by max_students descending, ties by id
#[tokio::test]
async fn orders_by_requested_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let small = factory::school::SchoolFactory::new(db).max_students(5).build().await?;
    let big_a = factory::school::SchoolFactory::new(db).max_students(15).build().await?;
    let big_b = factory::school::SchoolFactory::new(db).max_students(15).build().await?;

    let repo = SchoolRepository::new(db);
    let (schools, _) = repo
        .list(&params(None, Some("-max_students,unknown"), 0, 10))
        .await?;

    let ids: Vec<i32> = schools.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![big_a.id, big_b.id, small.id]);

    Ok(())
}

/// Tests that listed schools carry their student counts.
///
/// Expected: Ok with total_student per school
#[tokio::test]
async fn includes_student_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (full, _) = factory::helpers::create_full_school(db, 2).await?;
    let empty = factory::school::create_school(db).await?;

    let repo = SchoolRepository::new(db);
    let (schools, _) = repo.list(&params(None, Some("id"), 0, 10)).await?;

    assert_eq!(schools[0].id, full.id);
    assert_eq!(schools[0].total_student, 2);
    assert_eq!(schools[1].id, empty.id);
    assert_eq!(schools[1].total_student, 0);

    Ok(())
}

/// Tests that `%` and `_` in a search are matched literally.
///
/// Expected: Ok with only the school whose name contains the character
#[tokio::test]
async fn search_wildcards_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let percent = factory::school::SchoolFactory::new(db)
        .name("100% Green School")
        .build()
        .await?;
    factory::school::SchoolFactory::new(db)
        .name("Ideal School")
        .build()
        .await?;

    let repo = SchoolRepository::new(db);

    let (found, total) = repo.list(&params(Some("%"), None, 0, 10)).await?;
    assert_eq!(total, 1);
    assert_eq!(found[0].id, percent.id);

    let (_, total) = repo.list(&params(Some("_"), None, 0, 10)).await?;
    assert_eq!(total, 0);

    Ok(())
}

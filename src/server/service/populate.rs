//! Demo data population.
//!
//! Seeds the database with students spread over a fixed set of schools. Schools are
//! created on first use. Students that would exceed a school's limit are skipped, so the
//! number of students created is usually lower than the number of iterations.

use rand::{seq::IndexedRandom, Rng};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{school::SchoolRepository, student::StudentRepository},
    error::AppError,
    model::{
        school::{CreateSchoolParams, School},
        student::{CreateStudentParams, StudentScope},
    },
    service::{school::SchoolService, student::StudentService},
};

pub const SCHOOL_NAMES: [&str; 6] = [
    "St. Gregory's School",
    "St. Joseph School",
    "Scholastica School",
    "Green Herald School",
    "St. Francis School",
    "Ideal Boys School",
];

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Amelia", "Ayesha", "Daniel", "Farhan", "Grace", "Hasan", "Isabel", "Karim",
    "Liam", "Maya", "Nadia", "Noah", "Olivia", "Rafi", "Sara", "Tanvir", "Zara",
];

const LAST_NAMES: &[&str] = &[
    "Ahmed", "Brown", "Chowdhury", "Das", "Garcia", "Hossain", "Islam", "Khan", "Martin",
    "Nguyen", "Rahman", "Roy", "Silva", "Smith", "Tanaka", "Wilson",
];

/// City and country pairs used for school locations.
const LOCATIONS: &[(&str, &str)] = &[
    ("Dhaka", "Bangladesh"),
    ("Chittagong", "Bangladesh"),
    ("Kolkata", "India"),
    ("Kuala Lumpur", "Malaysia"),
    ("Singapore", "Singapore"),
    ("Bangkok", "Thailand"),
    ("Manila", "Philippines"),
    ("Jakarta", "Indonesia"),
];

const NATIONALITIES: &[&str] = &[
    "Bangladesh", "India", "Malaysia", "Singapore", "Thailand", "Philippines", "Indonesia",
    "Japan", "Vietnam",
];

const STREETS: &[&str] = &[
    "Lake Road", "Station Road", "Temple Street", "Park Avenue", "Mirpur Road", "Hill View",
];

/// Outcome of a population run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub created: u32,
    /// Students left out because their school was full or the name already existed.
    pub skipped: u32,
}

/// One planned iteration: the school to use and the student to enroll.
#[derive(Debug, Clone)]
struct SeedEntry {
    /// Used only if no school with this name exists yet.
    school: CreateSchoolParams,
    first_name: String,
    last_name: String,
    age: Decimal,
    nationality: String,
    address: String,
}

pub struct PopulateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PopulateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs `iterations` rounds of school lookup and student creation.
    ///
    /// # Returns
    /// - `Ok(PopulateSummary)`: Counts of created and skipped students
    /// - `Err(AppError)`: A database error other than a capacity rejection
    pub async fn populate(&self, iterations: u32) -> Result<PopulateSummary, AppError> {
        let plan = plan(&mut rand::rng(), iterations);
        let mut summary = PopulateSummary::default();

        for entry in plan {
            let school = self.get_or_create_school(entry.school).await?;

            if StudentRepository::new(self.db)
                .exists_with_name(&entry.first_name, &entry.last_name)
                .await?
            {
                summary.skipped += 1;
                continue;
            }

            let params = CreateStudentParams {
                school_id: school.id,
                first_name: entry.first_name,
                last_name: entry.last_name,
                age: Some(entry.age),
                nationality: entry.nationality,
                address: entry.address,
            };

            match StudentService::new(self.db)
                .create(StudentScope::All, params)
                .await
            {
                Ok(_) => summary.created += 1,
                Err(AppError::CapacityErr(err)) => {
                    tracing::warn!("Skipping seeded student: {}", err);
                    summary.skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(
            "Populated {} students ({} skipped)",
            summary.created,
            summary.skipped
        );

        Ok(summary)
    }

    async fn get_or_create_school(&self, params: CreateSchoolParams) -> Result<School, AppError> {
        if let Some(school) = SchoolRepository::new(self.db)
            .find_by_name(&params.name)
            .await?
        {
            return Ok(school);
        }

        SchoolService::new(self.db).create(params).await
    }
}

/// Draws every random value up front.
fn plan<R: Rng>(rng: &mut R, iterations: u32) -> Vec<SeedEntry> {
    (0..iterations).map(|_| seed_entry(rng)).collect()
}

fn seed_entry<R: Rng>(rng: &mut R) -> SeedEntry {
    let name = SCHOOL_NAMES.choose(rng).copied().unwrap_or(SCHOOL_NAMES[0]);
    let (city, country) = LOCATIONS.choose(rng).copied().unwrap_or(LOCATIONS[0]);

    SeedEntry {
        school: CreateSchoolParams {
            name: name.to_string(),
            max_students: rng.random_range(5..=20),
            city: city.to_string(),
            country: country.to_string(),
            address: address(rng, city),
        },
        first_name: pick(rng, FIRST_NAMES),
        last_name: pick(rng, LAST_NAMES),
        // Tenths of a year between 4.0 and 15.5
        age: Decimal::new(rng.random_range(40..=155), 1),
        nationality: pick(rng, NATIONALITIES),
        address: address(rng, city),
    }
}

fn pick<R: Rng>(rng: &mut R, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

fn address<R: Rng>(rng: &mut R, city: &str) -> String {
    format!(
        "{} {}, {}",
        rng.random_range(1..=250),
        pick(rng, STREETS),
        city
    )
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{self, school::SchoolRepository},
    error::AppError,
    model::{
        query::{ListParams, Paginated},
        school::{CreateSchoolParams, School, SchoolOrderField, UpdateSchoolParams},
    },
};

pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of schools
    pub async fn list(
        &self,
        params: ListParams<SchoolOrderField>,
    ) -> Result<Paginated<School>, AppError> {
        let repo = SchoolRepository::new(self.db);

        let (schools, total) = repo.list(&params).await?;

        Ok(Paginated::new(schools, total, params.page, params.per_page))
    }

    /// Gets a specific school by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<School>, AppError> {
        let repo = SchoolRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a new school
    pub async fn create(&self, params: CreateSchoolParams) -> Result<School, AppError> {
        let repo = SchoolRepository::new(self.db);

        let school = repo.create(params).await?;

        tracing::info!("Created school {} ({})", school.id, school.name);

        Ok(school)
    }

    /// Updates a school.
    ///
    /// Lowering `max_students` below the current enrolment is rejected. The check and the
    /// write share a transaction holding the school row lock.
    ///
    /// # Returns
    /// - `Ok(Some(School))`: The updated school
    /// - `Ok(None)`: No school with that ID
    /// - `Err(AppError::CapacityErr)`: The new limit is below the current enrolment
    pub async fn update(&self, params: UpdateSchoolParams) -> Result<Option<School>, AppError> {
        let txn = data::begin_write(self.db).await?;
        let repo = SchoolRepository::new(&txn);

        let Some(school) = repo.find_locked(params.id).await? else {
            return Ok(None);
        };

        if let Some(new_max) = params.max_students {
            if let Err(err) = school.ensure_can_resize_to(new_max) {
                tracing::info!(
                    "Rejected limit {} for school {} with {} students",
                    new_max,
                    school.id,
                    school.total_student
                );
                return Err(err.into());
            }
        }

        let school = repo.update(params).await?;
        txn.commit().await?;

        Ok(Some(school))
    }

    /// Deletes a school and its students
    ///
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = data::begin_write(self.db).await?;

        let deleted = SchoolRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted school {}", id);
        }

        Ok(deleted)
    }
}

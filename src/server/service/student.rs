use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{self, school::SchoolRepository, student::StudentRepository},
    error::{validation::ValidationError, AppError},
    model::{
        query::{ListParams, Paginated},
        school::School,
        student::{
            CreateStudentParams, Student, StudentOrderField, StudentScope, UpdateStudentParams,
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the students visible in `scope`
    pub async fn list(
        &self,
        scope: StudentScope,
        params: ListParams<StudentOrderField>,
    ) -> Result<Paginated<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        let (students, total) = repo.list(scope, &params).await?;

        Ok(Paginated::new(students, total, params.page, params.per_page))
    }

    /// Gets a student by ID if it is visible in `scope`
    pub async fn get_by_id(
        &self,
        scope: StudentScope,
        id: i32,
    ) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_in_scope(scope, id).await?)
    }

    /// Enrolls a new student.
    ///
    /// The target school is read with a row lock and must have room for one more student.
    ///
    /// # Arguments
    /// - `scope`: `StudentScope::School` when called from a nested route, in which case a
    ///   missing parent school is reported as not found
    /// - `params`: Validated student fields
    ///
    /// # Returns
    /// - `Ok(Student)`: The created student
    /// - `Err(AppError::CapacityErr)`: The school is full
    /// - `Err(AppError::ValidationErr)`: The school does not exist (flat route)
    /// - `Err(AppError::NotFound)`: The parent school does not exist (nested route)
    pub async fn create(
        &self,
        scope: StudentScope,
        params: CreateStudentParams,
    ) -> Result<Student, AppError> {
        let txn = data::begin_write(self.db).await?;

        let school = match lock_school(&txn, params.school_id).await {
            Err(AppError::ValidationErr(_)) if scope.school_id().is_some() => {
                return Err(AppError::NotFound("School not found".to_string()));
            }
            result => result?,
        };
        admit(&school)?;

        let student = StudentRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Enrolled {} ({}) in school {}",
            student.full_name(),
            student.student_id,
            school.name
        );

        Ok(student)
    }

    /// Updates a student visible in `scope`.
    ///
    /// Moving the student to a different school runs the capacity check against the
    /// target school. Updates that keep the current school skip it.
    ///
    /// # Returns
    /// - `Ok(Some(Student))`: The updated student
    /// - `Ok(None)`: No such student in scope
    /// - `Err(AppError::CapacityErr)`: The target school is full
    pub async fn update(
        &self,
        scope: StudentScope,
        params: UpdateStudentParams,
    ) -> Result<Option<Student>, AppError> {
        let txn = data::begin_write(self.db).await?;
        let repo = StudentRepository::new(&txn);

        let Some(current) = repo.get_in_scope(scope, params.id).await? else {
            return Ok(None);
        };

        if let Some(target) = params.school_id {
            if target != current.school_id {
                let school = lock_school(&txn, target).await?;
                admit(&school)?;

                tracing::info!(
                    "Moving {} from school {} to {}",
                    current.full_name(),
                    current.school_id,
                    school.name
                );
            }
        }

        let student = repo.update(params).await?;
        txn.commit().await?;

        Ok(Some(student))
    }

    /// Deletes a student visible in `scope`
    ///
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, scope: StudentScope, id: i32) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.delete(scope, id).await?)
    }
}

/// Reads the school a student is about to join, holding its row lock.
///
/// A missing school is a field error on `school`.
async fn lock_school<C: ConnectionTrait>(db: &C, school_id: i32) -> Result<School, AppError> {
    SchoolRepository::new(db)
        .find_locked(school_id)
        .await?
        .ok_or_else(|| {
            ValidationError::single(
                "school",
                format!("Invalid pk \"{}\" - object does not exist.", school_id),
            )
            .into()
        })
}

fn admit(school: &School) -> Result<(), AppError> {
    school.ensure_can_admit().map_err(|err| {
        tracing::info!(
            "School {} is full ({}/{})",
            school.id,
            school.total_student,
            school.max_students
        );
        err.into()
    })
}

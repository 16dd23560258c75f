use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use super::substring_pattern;
use crate::server::model::{
    query::ListParams,
    student::{
        age_to_hundredths, CreateStudentParams, Student, StudentOrderField, StudentScope,
        UpdateStudentParams,
    },
};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student with a freshly generated `student_id`
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            school_id: ActiveValue::Set(params.school_id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            student_id: ActiveValue::Set(Uuid::new_v4().to_string()),
            age_hundredths: ActiveValue::Set(params.age.and_then(age_to_hundredths)),
            nationality: ActiveValue::Set(params.nationality),
            address: ActiveValue::Set(params.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Student::from_entity(student)
    }

    /// Gets a student by ID if it is visible in `scope`
    pub async fn get_in_scope(
        &self,
        scope: StudentScope,
        id: i32,
    ) -> Result<Option<Student>, DbErr> {
        let mut query = entity::prelude::Student::find_by_id(id);
        if let Some(school_id) = scope.school_id() {
            query = query.filter(entity::student::Column::SchoolId.eq(school_id));
        }

        query.one(self.db).await?.map(Student::from_entity).transpose()
    }

    /// Checks whether a student with exactly this first and last name exists
    pub async fn exists_with_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::FirstName.eq(first_name))
            .filter(entity::student::Column::LastName.eq(last_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of students visible in `scope` matching the search, in the requested order
    ///
    /// # Returns
    /// - `Ok((students, total))`: The page and the number of matching students
    pub async fn list(
        &self,
        scope: StudentScope,
        params: &ListParams<StudentOrderField>,
    ) -> Result<(Vec<Student>, u64), DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(school_id) = scope.school_id() {
            query = query.filter(entity::student::Column::SchoolId.eq(school_id));
        }

        if let Some(search) = &params.search {
            query = query.filter(
                Condition::any()
                    .add(entity::student::Column::FirstName.like(substring_pattern(search)))
                    .add(entity::student::Column::LastName.like(substring_pattern(search))),
            );
        }

        if params.ordering.iter().any(|o| o.field.is_school_field()) {
            query = query.join(JoinType::InnerJoin, entity::student::Relation::School.def());
        }

        for order in &params.ordering {
            let direction = if order.descending {
                Order::Desc
            } else {
                Order::Asc
            };
            query = match order.field {
                StudentOrderField::Id => query.order_by(entity::student::Column::Id, direction),
                StudentOrderField::FirstName => {
                    query.order_by(entity::student::Column::FirstName, direction)
                }
                StudentOrderField::LastName => {
                    query.order_by(entity::student::Column::LastName, direction)
                }
                StudentOrderField::Age => {
                    query.order_by(entity::student::Column::AgeHundredths, direction)
                }
                StudentOrderField::Nationality => {
                    query.order_by(entity::student::Column::Nationality, direction)
                }
                StudentOrderField::SchoolName => {
                    query.order_by(entity::school::Column::Name, direction)
                }
                StudentOrderField::SchoolCity => {
                    query.order_by(entity::school::Column::City, direction)
                }
                StudentOrderField::SchoolCountry => {
                    query.order_by(entity::school::Column::Country, direction)
                }
            };
        }
        query = query.order_by_asc(entity::student::Column::Id);

        let paginator = query.paginate(self.db, params.per_page);
        let total = paginator.num_items().await?;
        let students = paginator
            .fetch_page(params.page)
            .await?
            .into_iter()
            .map(Student::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((students, total))
    }

    /// Applies the fields present in `params` to an existing student.
    ///
    /// `student_id` is never touched.
    ///
    /// # Returns
    /// - `Ok(Student)`: The student after the update
    /// - `Err(DbErr::RecordNotFound)`: No student with that ID
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::student::ActiveModel = student.clone().into();
        if let Some(school_id) = params.school_id {
            active_model.school_id = ActiveValue::Set(school_id);
        }
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(age) = params.age {
            active_model.age_hundredths = ActiveValue::Set(age_to_hundredths(age));
        }
        if let Some(nationality) = params.nationality {
            active_model.nationality = ActiveValue::Set(nationality);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }

        let student = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            student
        };

        Student::from_entity(student)
    }

    /// Deletes a student if it is visible in `scope`
    ///
    /// # Returns
    /// - `Ok(true)`: The student was deleted
    /// - `Ok(false)`: No such student in scope
    pub async fn delete(&self, scope: StudentScope, id: i32) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Student::delete_many()
            .filter(entity::student::Column::Id.eq(id));
        if let Some(school_id) = scope.school_id() {
            query = query.filter(entity::student::Column::SchoolId.eq(school_id));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

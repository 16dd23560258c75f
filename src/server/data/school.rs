use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::substring_pattern;
use crate::server::model::{
    query::ListParams,
    school::{CreateSchoolParams, School, SchoolOrderField, UpdateSchoolParams},
};

pub struct SchoolRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SchoolRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new school. A fresh school has no students.
    pub async fn create(&self, params: CreateSchoolParams) -> Result<School, DbErr> {
        let school = entity::school::ActiveModel {
            name: ActiveValue::Set(params.name),
            max_students: ActiveValue::Set(params.max_students),
            city: ActiveValue::Set(params.city),
            country: ActiveValue::Set(params.country),
            address: ActiveValue::Set(params.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(School::from_entity(school, 0))
    }

    /// Gets a school by ID together with its student count
    pub async fn get_by_id(&self, id: i32) -> Result<Option<School>, DbErr> {
        let Some(school) = entity::prelude::School::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let total_student = self.count_students(school.id).await?;

        Ok(Some(School::from_entity(school, total_student)))
    }

    /// Gets a school by ID with an exclusive row lock held until the surrounding
    /// transaction ends.
    ///
    /// Backends without row locks (SQLite) drop the lock clause; their transactions are
    /// already serialized by the database write lock.
    pub async fn find_locked(&self, id: i32) -> Result<Option<School>, DbErr> {
        let Some(school) = entity::prelude::School::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let total_student = self.count_students(school.id).await?;

        Ok(Some(School::from_entity(school, total_student)))
    }

    /// Gets the first school with exactly the given name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<School>, DbErr> {
        let Some(school) = entity::prelude::School::find()
            .filter(entity::school::Column::Name.eq(name))
            .order_by_asc(entity::school::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let total_student = self.count_students(school.id).await?;

        Ok(Some(School::from_entity(school, total_student)))
    }

    /// Gets a page of schools matching the search, in the requested order
    ///
    /// # Returns
    /// - `Ok((schools, total))`: The page and the number of matching schools
    pub async fn list(
        &self,
        params: &ListParams<SchoolOrderField>,
    ) -> Result<(Vec<School>, u64), DbErr> {
        let mut query = entity::prelude::School::find();

        if let Some(search) = &params.search {
            query = query.filter(
                Condition::any()
                    .add(entity::school::Column::Name.like(substring_pattern(search)))
                    .add(entity::school::Column::City.like(substring_pattern(search)))
                    .add(entity::school::Column::Country.like(substring_pattern(search))),
            );
        }

        for order in &params.ordering {
            let direction = if order.descending {
                Order::Desc
            } else {
                Order::Asc
            };
            query = query.order_by(order_column(order.field), direction);
        }
        query = query.order_by_asc(entity::school::Column::Id);

        let paginator = query.paginate(self.db, params.per_page);
        let total = paginator.num_items().await?;
        let schools = paginator.fetch_page(params.page).await?;

        let mut results = Vec::with_capacity(schools.len());
        for school in schools {
            let total_student = self.count_students(school.id).await?;
            results.push(School::from_entity(school, total_student));
        }

        Ok((results, total))
    }

    /// Applies the fields present in `params` to an existing school
    ///
    /// # Returns
    /// - `Ok(School)`: The school after the update
    /// - `Err(DbErr::RecordNotFound)`: No school with that ID
    pub async fn update(&self, params: UpdateSchoolParams) -> Result<School, DbErr> {
        let school = entity::prelude::School::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "School with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::school::ActiveModel = school.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(max_students) = params.max_students {
            active_model.max_students = ActiveValue::Set(max_students);
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(country) = params.country {
            active_model.country = ActiveValue::Set(country);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }

        let school = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            school
        };

        let total_student = self.count_students(school.id).await?;

        Ok(School::from_entity(school, total_student))
    }

    /// Deletes a school and its students
    ///
    /// # Returns
    /// - `Ok(true)`: The school was deleted
    /// - `Ok(false)`: No school with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Student::delete_many()
            .filter(entity::student::Column::SchoolId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::School::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the students enrolled in a school
    pub async fn count_students(&self, school_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::SchoolId.eq(school_id))
            .count(self.db)
            .await
    }
}

fn order_column(field: SchoolOrderField) -> entity::school::Column {
    match field {
        SchoolOrderField::Id => entity::school::Column::Id,
        SchoolOrderField::Name => entity::school::Column::Name,
        SchoolOrderField::MaxStudents => entity::school::Column::MaxStudents,
        SchoolOrderField::City => entity::school::Column::City,
        SchoolOrderField::Country => entity::school::Column::Country,
    }
}

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct UserFieldRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserFieldRepository<'a, C> {
    /// Creates a new instance of [`UserFieldRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Id of the custom profile field with the given name
    pub async fn get_field_id(&self, name: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::UserField::find()
            .select_only()
            .column(entity::user_field::Column::Id)
            .filter(entity::user_field::Column::Name.eq(name))
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Owners and values of a field, skipping the values of the given pilots
    ///
    /// Ordered by pilot id. Values are returned as stored, callers normalise them.
    pub async fn get_values_excluding_users(
        &self,
        field_id: i32,
        excluded_user_ids: Vec<i32>,
    ) -> Result<Vec<(i32, String)>, DbErr> {
        let mut select = entity::prelude::UserFieldValue::find()
            .select_only()
            .column(entity::user_field_value::Column::UserId)
            .column(entity::user_field_value::Column::Value)
            .filter(entity::user_field_value::Column::UserFieldId.eq(field_id))
            .filter(entity::user_field_value::Column::Value.is_not_null())
            .order_by_asc(entity::user_field_value::Column::UserId);

        if !excluded_user_ids.is_empty() {
            select = select
                .filter(entity::user_field_value::Column::UserId.is_not_in(excluded_user_ids));
        }

        select.into_tuple::<(i32, String)>().all(self.db).await
    }
}

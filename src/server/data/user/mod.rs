pub mod user_field;

use entity::sea_orm_active_enums::UserState;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

/// Online network a pilot can link to their account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkedNetwork {
    Vatsim,
    Ivao,
}

impl LinkedNetwork {
    fn column(&self) -> entity::user::Column {
        match self {
            Self::Vatsim => entity::user::Column::VatsimId,
            Self::Ivao => entity::user::Column::IvaoId,
        }
    }
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// First pilot whose account is linked to the given network id
    pub async fn get_by_network_id(
        &self,
        network: LinkedNetwork,
        network_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(network.column().eq(network_id))
            .one(self.db)
            .await
    }

    /// Linked network ids of every active pilot
    pub async fn get_active_network_ids(
        &self,
        network: LinkedNetwork,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(network.column())
            .filter(entity::user::Column::State.eq(UserState::Active))
            .filter(network.column().is_not_null())
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Ids of every pilot that is not active (pending, on leave, suspended...)
    pub async fn get_inactive_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::State.ne(UserState::Active))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Whether the pilot holds at least one role
    pub async fn has_roles(&self, user_id: i32) -> Result<bool, DbErr> {
        let roles = entity::prelude::RoleUser::find()
            .filter(entity::role_user::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(roles > 0)
    }

    pub async fn get_by_ids(&self, user_ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await
    }
}

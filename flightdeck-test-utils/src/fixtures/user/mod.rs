//! Pilot fixture utilities.
//!
//! Inserts pilots along with their custom profile field values, roles, rank subfleets and
//! type ratings.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, user_id: i32, name: &str) -> Result<UserModel, TestError> {
        self.insert_user_with(factory::user(user_id, name)).await
    }

    pub async fn insert_user_with(&self, user: UserModel) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                id: ActiveValue::Set(user.id),
                name: ActiveValue::Set(user.name),
                airline_id: ActiveValue::Set(user.airline_id),
                rank_id: ActiveValue::Set(user.rank_id),
                curr_airport_id: ActiveValue::Set(user.curr_airport_id),
                home_airport_id: ActiveValue::Set(user.home_airport_id),
                vatsim_id: ActiveValue::Set(user.vatsim_id),
                ivao_id: ActiveValue::Set(user.ivao_id),
                state: ActiveValue::Set(user.state),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_user_field(
        &self,
        field_id: i32,
        name: &str,
    ) -> Result<entity::user_field::Model, TestError> {
        Ok(
            entity::prelude::UserField::insert(entity::user_field::ActiveModel {
                id: ActiveValue::Set(field_id),
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Stores a pilot's value for a custom profile field, the pilot must already exist
    pub async fn insert_user_field_value(
        &self,
        field_id: i32,
        user_id: i32,
        value: Option<&str>,
    ) -> Result<entity::user_field_value::Model, TestError> {
        Ok(entity::prelude::UserFieldValue::insert(
            entity::user_field_value::ActiveModel {
                user_field_id: ActiveValue::Set(field_id),
                user_id: ActiveValue::Set(user_id),
                value: ActiveValue::Set(value.map(str::to_string)),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_role(&self, user_id: i32, role_id: i32) -> Result<(), TestError> {
        entity::prelude::RoleUser::insert(entity::role_user::ActiveModel {
            role_id: ActiveValue::Set(role_id),
            user_id: ActiveValue::Set(user_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Allows a rank to fly a subfleet
    pub async fn insert_rank_subfleet(
        &self,
        rank_id: i32,
        subfleet_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::RankSubfleet::insert(entity::rank_subfleet::ActiveModel {
            rank_id: ActiveValue::Set(rank_id),
            subfleet_id: ActiveValue::Set(subfleet_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Grants a type rating to a pilot and links it to the given subfleets
    pub async fn insert_typerating(
        &self,
        user_id: i32,
        typerating_id: i32,
        subfleet_ids: Vec<i32>,
    ) -> Result<(), TestError> {
        entity::prelude::TyperatingUser::insert(entity::typerating_user::ActiveModel {
            typerating_id: ActiveValue::Set(typerating_id),
            user_id: ActiveValue::Set(user_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        for subfleet_id in subfleet_ids {
            entity::prelude::TyperatingSubfleet::insert(
                entity::typerating_subfleet::ActiveModel {
                    typerating_id: ActiveValue::Set(typerating_id),
                    subfleet_id: ActiveValue::Set(subfleet_id),
                },
            )
            .exec_without_returning(&self.setup.db)
            .await?;
        }

        Ok(())
    }
}

//! Factory functions for generating pilot models.

use entity::sea_orm_active_enums::UserState;

use crate::model::UserModel;

/// Create an active pilot of airline 1 without rank, airports or network links.
pub fn user(user_id: i32, name: &str) -> UserModel {
    UserModel {
        id: user_id,
        name: name.to_string(),
        airline_id: 1,
        rank_id: None,
        curr_airport_id: None,
        home_airport_id: None,
        vatsim_id: None,
        ivao_id: None,
        state: UserState::Active,
    }
}

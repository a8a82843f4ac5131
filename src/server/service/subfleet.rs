//! Aircraft authorization.
//!
//! Pilots may be limited to the subfleets of their rank, of their type ratings, or both.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{setting::SettingRepository, subfleet::SubfleetRepository},
    error::Error,
    model::db::UserModel,
};

pub const RESTRICT_TO_RANK_SETTING: &str = "pireps.restrict_aircraft_to_rank";
pub const RESTRICT_TO_TYPERATING_SETTING: &str = "pireps.restrict_aircraft_to_typerating";

/// Which aircraft restrictions are switched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubfleetRestriction {
    pub rank: bool,
    pub typerating: bool,
}

impl SubfleetRestriction {
    pub fn is_restricted(&self) -> bool {
        self.rank || self.typerating
    }
}

pub struct SubfleetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubfleetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the restriction flags; rank restriction is on unless disabled.
    pub async fn get_restriction(&self) -> Result<SubfleetRestriction, Error> {
        let setting_repo = SettingRepository::new(self.db);

        Ok(SubfleetRestriction {
            rank: setting_repo
                .get_bool(RESTRICT_TO_RANK_SETTING, true)
                .await?,
            typerating: setting_repo
                .get_bool(RESTRICT_TO_TYPERATING_SETTING, false)
                .await?,
        })
    }

    /// Subfleets a pilot may fly under the given restriction.
    ///
    /// # Returns
    /// - `Ok(None)` - No restriction applies, every subfleet is allowed
    /// - `Ok(Some(ids))` - Allowed subfleet ids; empty for anonymous viewers and pilots without
    ///   a rank when ranks are enforced
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_allowable_subfleets(
        &self,
        viewer: Option<&UserModel>,
        restriction: SubfleetRestriction,
    ) -> Result<Option<HashSet<i32>>, Error> {
        if !restriction.is_restricted() {
            return Ok(None);
        }

        let Some(viewer) = viewer else {
            return Ok(Some(HashSet::new()));
        };

        let subfleet_repo = SubfleetRepository::new(self.db);

        let by_rank = match (restriction.rank, viewer.rank_id) {
            (false, _) => None,
            (true, Some(rank_id)) => Some(
                subfleet_repo
                    .get_ids_for_rank(rank_id)
                    .await?
                    .into_iter()
                    .collect::<HashSet<i32>>(),
            ),
            (true, None) => Some(HashSet::new()),
        };

        let by_typerating = if restriction.typerating {
            Some(
                subfleet_repo
                    .get_ids_for_typeratings(viewer.id)
                    .await?
                    .into_iter()
                    .collect::<HashSet<i32>>(),
            )
        } else {
            None
        };

        let allowed = match (by_rank, by_typerating) {
            (Some(rank), Some(typerating)) => rank.intersection(&typerating).copied().collect(),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => HashSet::new(),
        };

        Ok(Some(allowed))
    }
}

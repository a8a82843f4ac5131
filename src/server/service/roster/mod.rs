//! Online network roster.
//!
//! Matches the pilots connected to VATSIM or IVAO against the airline's pilots and keeps those
//! flying for the airline, either under an airline callsign or with a PIREP in progress.

pub mod network;
pub mod pilot;

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::roster::{ActivePirepDto, RosterEntryDto, RosterViewModel},
    server::{
        config::ServiceOptions,
        data::{
            aircraft::AircraftRepository,
            airline::AirlineRepository,
            pirep::PirepRepository,
            setting::SettingRepository,
            snapshot::NetworkSnapshotRepository,
            user::{user_field::UserFieldRepository, UserRepository},
        },
        error::Error,
        model::db::{PirepModel, UserModel},
        service::{
            feed::NetworkFeedService,
            roster::{
                network::Network,
                pilot::{parse_pilots, NetworkPilot},
            },
        },
        util::{name::private_name, time::is_stale},
    },
};

/// Seconds a snapshot is served before it is downloaded again.
pub const DEFAULT_REFRESH_SECONDS: i64 = 180;
/// Shorter intervals are ignored in favour of the default.
pub const MIN_REFRESH_SECONDS: i64 = 15;

pub const IVAO_VA_ICAO_SETTING: &str = "gen_ivao_icao";
/// Remarks code looked for when the airline has not configured its IVAO VA code
pub const DEFAULT_IVAO_VA_CODE: &str = "DSPHBSC";

pub const FEED_UNAVAILABLE_ERROR: &str = "Online network data is currently unavailable";

/// Which roster to build and how fresh it has to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRequest {
    pub network: Network,
    /// Custom profile field holding the network ids, overrides the site setting
    pub field_name: Option<String>,
    pub refresh_seconds: Option<i64>,
}

impl RosterRequest {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            field_name: None,
            refresh_seconds: None,
        }
    }

    pub fn refresh_interval(&self) -> i64 {
        match self.refresh_seconds {
            Some(seconds) if seconds > MIN_REFRESH_SECONDS => seconds,
            _ => DEFAULT_REFRESH_SECONDS,
        }
    }
}

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    options: &'a ServiceOptions,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        options: &'a ServiceOptions,
    ) -> Self {
        Self {
            db,
            http_client,
            options,
        }
    }

    /// Builds the roster of the airline's pilots online on a network.
    ///
    /// The cached snapshot of the network is downloaded again when it is missing or older than
    /// the refresh interval. A failed download is not an error: the previous snapshot is used
    /// if there is one, and the roster carries an error message either way. The next call
    /// tries again.
    ///
    /// # Arguments
    /// - `request` - Network, id field and refresh interval
    /// - `viewer_id` - Pilot id of the logged in viewer, if any
    ///
    /// # Returns
    /// - `Ok(RosterViewModel)` - Pilots flying for the airline, at most one entry per network id
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn build_roster(
        &self,
        request: RosterRequest,
        viewer_id: Option<i32>,
    ) -> Result<RosterViewModel, Error> {
        let network = request.network;
        let now = Utc::now();

        let checks = match viewer_id {
            Some(user_id) => UserRepository::new(self.db).has_roles(user_id).await?,
            None => false,
        };

        let mut roster = RosterViewModel {
            network: network.name().to_string(),
            pilots: Vec::new(),
            error: None,
            checks,
            downloaded_at: None,
        };

        let mut snapshot = NetworkSnapshotRepository::new(self.db)
            .get_latest(network.name())
            .await?;

        let needs_refresh = match &snapshot {
            Some(snapshot) => is_stale(
                snapshot.updated_at,
                now.naive_utc(),
                request.refresh_interval(),
            ),
            None => true,
        };

        if needs_refresh {
            let feed_service = NetworkFeedService::new(self.db, self.http_client, self.options);

            match feed_service.download(network).await {
                Ok(fresh) => snapshot = Some(fresh),
                Err(Error::DbErr(e)) => return Err(Error::DbErr(e)),
                Err(e) => {
                    tracing::warn!("Failed to refresh {} feed: {}", network.name(), e);

                    roster.error = Some(FEED_UNAVAILABLE_ERROR.to_string());
                }
            }
        }

        let Some(snapshot) = snapshot else {
            return Ok(roster);
        };
        roster.downloaded_at = Some(snapshot.updated_at);

        let pilots = match parse_pilots(network, &snapshot.pilots, now) {
            Ok(pilots) => pilots,
            Err(e) => {
                tracing::warn!("Unreadable {} snapshot: {}", network.name(), e);

                roster.error = Some(FEED_UNAVAILABLE_ERROR.to_string());
                return Ok(roster);
            }
        };

        let field_name = self.get_field_name(&request).await?;
        let field_id = UserFieldRepository::new(self.db)
            .get_field_id(&field_name)
            .await?;
        let field_owners = self.get_field_owners(field_id).await?;
        let mut relevant_ids: HashSet<String> = field_owners.keys().cloned().collect();
        relevant_ids.extend(
            UserRepository::new(self.db)
                .get_active_network_ids(network.linked())
                .await?,
        );
        let airline_codes: HashSet<String> = AirlineRepository::new(self.db)
            .get_active_icao_codes()
            .await?
            .into_iter()
            .collect();
        let va_code = match network {
            Network::Ivao => Some(self.get_ivao_va_code().await?),
            Network::Vatsim => None,
        };

        let mut seen = HashSet::new();

        for pilot in pilots {
            if !relevant_ids.contains(&pilot.network_id) || !seen.insert(pilot.network_id.clone())
            {
                continue;
            }

            let user = self
                .find_user(network, &field_owners, &pilot.network_id)
                .await?;
            let pirep = match &user {
                Some(user) => {
                    PirepRepository::new(self.db)
                        .get_latest_in_progress(user.id)
                        .await?
                }
                None => None,
            };
            let airline = pilot
                .callsign
                .get(..3)
                .is_some_and(|prefix| airline_codes.contains(prefix));

            // Pilots neither under an airline callsign nor flying a PIREP are not ours
            if !airline && pirep.is_none() {
                continue;
            }

            let pirep = match pirep {
                Some(pirep) => Some(self.active_pirep(pirep).await?),
                None => None,
            };

            roster
                .pilots
                .push(roster_entry(pilot, user, pirep, airline, va_code.as_deref()));
        }

        Ok(roster)
    }

    /// Name of the profile field holding network ids: request, then site setting, then the
    /// network's name.
    async fn get_field_name(&self, request: &RosterRequest) -> Result<String, Error> {
        if let Some(field_name) = request.field_name.as_ref().filter(|f| !f.trim().is_empty()) {
            return Ok(field_name.clone());
        }

        let setting = SettingRepository::new(self.db)
            .get(request.network.field_setting_key())
            .await?;

        Ok(setting.unwrap_or_else(|| request.network.name().to_string()))
    }

    async fn get_ivao_va_code(&self) -> Result<String, Error> {
        let icao = SettingRepository::new(self.db)
            .get(IVAO_VA_ICAO_SETTING)
            .await?;

        Ok(match icao {
            Some(icao) => format!("IVAOVA/{}", icao),
            None => DEFAULT_IVAO_VA_CODE.to_string(),
        })
    }

    /// Network ids entered in the profile field by pilots who are not inactive, trimmed, with
    /// the pilot who entered them. The lowest pilot id wins when a value was entered twice.
    async fn get_field_owners(
        &self,
        field_id: Option<i32>,
    ) -> Result<HashMap<String, i32>, Error> {
        let Some(field_id) = field_id else {
            return Ok(HashMap::new());
        };

        let inactive = UserRepository::new(self.db).get_inactive_ids().await?;
        let values = UserFieldRepository::new(self.db)
            .get_values_excluding_users(field_id, inactive)
            .await?;

        let mut owners = HashMap::new();
        for (user_id, value) in values {
            let value = value.trim();
            if !value.is_empty() {
                owners.entry(value.to_string()).or_insert(user_id);
            }
        }

        Ok(owners)
    }

    /// Pilot owning a network id, by account link first and profile field value second.
    async fn find_user(
        &self,
        network: Network,
        field_owners: &HashMap<String, i32>,
        network_id: &str,
    ) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo
            .get_by_network_id(network.linked(), network_id)
            .await?
        {
            return Ok(Some(user));
        }

        match field_owners.get(network_id) {
            Some(&user_id) => Ok(user_repo.get(user_id).await?),
            None => Ok(None),
        }
    }

    async fn active_pirep(&self, pirep: PirepModel) -> Result<ActivePirepDto, Error> {
        let airline_code = AirlineRepository::new(self.db)
            .get_by_ids_with_trashed(vec![pirep.airline_id])
            .await?
            .into_iter()
            .next()
            .map(|airline| airline.icao)
            .unwrap_or_default();

        let aircraft_registration = match pirep.aircraft_id {
            Some(aircraft_id) => AircraftRepository::new(self.db)
                .get_by_ids(vec![aircraft_id])
                .await?
                .into_iter()
                .next()
                .map(|aircraft| aircraft.registration),
            None => None,
        };

        Ok(ActivePirepDto {
            flight: format!("{}{}", airline_code, pirep.flight_number),
            id: pirep.id,
            dpt_airport_id: pirep.dpt_airport_id,
            arr_airport_id: pirep.arr_airport_id,
            aircraft_registration,
        })
    }
}

fn roster_entry(
    pilot: NetworkPilot,
    user: Option<UserModel>,
    pirep: Option<ActivePirepDto>,
    airline: bool,
    va_code: Option<&str>,
) -> RosterEntryDto {
    // IVAO pilots without a flight plan are not checked at all
    let vasys_check = match (va_code, &pilot.flight_plan) {
        (Some(code), Some(_)) => Some(
            pilot
                .remarks
                .as_deref()
                .is_some_and(|remarks| remarks.contains(code)),
        ),
        _ => None,
    };

    RosterEntryDto {
        user_id: user.as_ref().map(|u| u.id),
        name: user.as_ref().map(|u| u.name.clone()),
        name_private: user.as_ref().map(|u| private_name(&u.name)),
        network_id: pilot.network_id,
        callsign: pilot.callsign,
        server_name: pilot.server_name,
        online_minutes: pilot.online_minutes,
        pirep,
        airline,
        flight_plan: pilot.flight_plan,
        vasys_check,
    }
}

#[cfg(test)]
mod tests;

use serde_json::Value;

use crate::server::{data::user::LinkedNetwork, error::feed::FeedError};

/// Online flight simulation network a roster is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Vatsim,
    Ivao,
}

impl Network {
    /// Network picked by the `network` request parameter, IVAO unless VATSIM was asked for.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            Some(value) if value.trim().eq_ignore_ascii_case("vatsim") => Self::Vatsim,
            _ => Self::Ivao,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vatsim => "VATSIM",
            Self::Ivao => "IVAO",
        }
    }

    /// Setting naming the custom profile field pilots enter their network id in
    pub fn field_setting_key(&self) -> &'static str {
        match self {
            Self::Vatsim => "gen_vatsim_field",
            Self::Ivao => "gen_ivao_field",
        }
    }

    /// Account link column holding the network id
    pub fn linked(&self) -> LinkedNetwork {
        match self {
            Self::Vatsim => LinkedNetwork::Vatsim,
            Self::Ivao => LinkedNetwork::Ivao,
        }
    }

    /// Takes the pilot list out of a full network data feed.
    ///
    /// VATSIM publishes pilots at `pilots`, IVAO at `clients.pilots`. Everything else in the
    /// feed (controllers, servers, ATIS) is dropped.
    pub fn extract_pilots(&self, mut payload: Value) -> Result<Value, FeedError> {
        if !payload.is_object() {
            return Err(FeedError::UnexpectedPayload {
                network: self.name(),
                reason: "feed is not a JSON object".to_string(),
            });
        }

        let pilots = match self {
            Self::Vatsim => payload.get_mut("pilots"),
            Self::Ivao => payload
                .get_mut("clients")
                .and_then(|clients| clients.get_mut("pilots")),
        };

        match pilots.map(Value::take) {
            Some(pilots @ Value::Array(_)) => Ok(pilots),
            Some(_) => Err(FeedError::UnexpectedPayload {
                network: self.name(),
                reason: "pilot list is not an array".to_string(),
            }),
            None => Err(FeedError::MissingPilots(self.name())),
        }
    }
}

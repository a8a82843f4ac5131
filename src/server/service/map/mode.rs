use serde::{Deserialize, Serialize};

/// What a map shows, selected by the `source` query value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapMode {
    /// Whole schedule
    Generic,
    /// Schedule of one airline
    Airline(i32),
    /// The viewer's accepted PIREPs
    User,
    /// Where the fleet is parked
    Fleet,
    /// Flights departing or arriving at one airport
    Airport(String),
    /// The viewer's assigned flights for the current month
    Assignment,
    /// Every airport
    Aerodromes,
    /// The viewer's installed sceneries
    Scenery,
}

impl MapMode {
    /// Parses a `source` value.
    ///
    /// Empty and `0` select the generic map, other numbers an airline. Anything that is not a
    /// known keyword is taken as an airport id.
    pub fn parse(source: Option<&str>) -> Self {
        let source = source.map(str::trim).unwrap_or_default();

        if source.is_empty() {
            return Self::Generic;
        }

        if let Ok(airline_id) = source.parse::<i32>() {
            return match airline_id {
                0 => Self::Generic,
                id => Self::Airline(id),
            };
        }

        match source {
            "user" => Self::User,
            "fleet" => Self::Fleet,
            "aerodromes" => Self::Aerodromes,
            "assignment" => Self::Assignment,
            "scenery" => Self::Scenery,
            airport_id => Self::Airport(airport_id.to_string()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Airline(_) => "airline",
            Self::User => "user",
            Self::Fleet => "fleet",
            Self::Airport(_) => "airport",
            Self::Assignment => "assignment",
            Self::Aerodromes => "aerodromes",
            Self::Scenery => "scenery",
        }
    }

    /// Modes colouring city pairs by what the viewer already flew
    pub fn colours_flown_pairs(&self) -> bool {
        !matches!(self, Self::Fleet | Self::Assignment | Self::Aerodromes)
    }
}

#[cfg(test)]
mod tests {
    use super::MapMode;

    #[test]
    fn parses_keywords_and_numbers() {
        assert_eq!(MapMode::parse(None), MapMode::Generic);
        assert_eq!(MapMode::parse(Some("0")), MapMode::Generic);
        assert_eq!(MapMode::parse(Some("4")), MapMode::Airline(4));
        assert_eq!(MapMode::parse(Some("fleet")), MapMode::Fleet);
        assert_eq!(MapMode::parse(Some("scenery")), MapMode::Scenery);
    }

    #[test]
    fn unknown_source_is_an_airport() {
        assert_eq!(
            MapMode::parse(Some("EDDF")),
            MapMode::Airport("EDDF".to_string())
        );
        assert_eq!(
            MapMode::parse(Some("Fleet")),
            MapMode::Airport("Fleet".to_string())
        );
    }
}

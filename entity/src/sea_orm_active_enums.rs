use sea_orm::entity::prelude::*;

/// Lifecycle state of a pilot report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum PirepState {
    #[sea_orm(num_value = 0)]
    InProgress,
    #[sea_orm(num_value = 1)]
    Pending,
    #[sea_orm(num_value = 2)]
    Accepted,
    #[sea_orm(num_value = 3)]
    Cancelled,
    #[sea_orm(num_value = 4)]
    Deleted,
    #[sea_orm(num_value = 5)]
    Draft,
    #[sea_orm(num_value = 6)]
    Rejected,
    #[sea_orm(num_value = 7)]
    Paused,
}

impl PirepState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Cancelled => "cancelled",
            Self::Deleted => "deleted",
            Self::Draft => "draft",
            Self::Rejected => "rejected",
            Self::Paused => "paused",
        }
    }
}

/// Account state of a pilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum UserState {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    Active,
    #[sea_orm(num_value = 2)]
    Rejected,
    #[sea_orm(num_value = 3)]
    OnLeave,
    #[sea_orm(num_value = 4)]
    Suspended,
    #[sea_orm(num_value = 5)]
    Deleted,
}

/// Where an aircraft currently is in its flight cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AircraftState {
    #[sea_orm(num_value = 0)]
    Parked,
    #[sea_orm(num_value = 1)]
    InUse,
    #[sea_orm(num_value = 2)]
    InAir,
}

/// Operational status of an airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum AircraftStatus {
    #[sea_orm(string_value = "A")]
    Active,
    #[sea_orm(string_value = "S")]
    Stored,
    #[sea_orm(string_value = "R")]
    Retired,
    #[sea_orm(string_value = "C")]
    Scrapped,
    #[sea_orm(string_value = "W")]
    WrittenOff,
}

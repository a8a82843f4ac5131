use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "airlines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub icao: String,
    pub iata: Option<String>,
    pub name: String,
    pub active: bool,
    pub deleted_at: Option<DateTime>,
}

impl Model {
    /// Code shown in front of flight numbers: IATA when set, ICAO otherwise
    pub fn code(&self) -> &str {
        match self.iata.as_deref() {
            Some(iata) if !iata.trim().is_empty() => iata,
            _ => &self.icao,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

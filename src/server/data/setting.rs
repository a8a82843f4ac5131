use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

/// Settings are addressed with dotted keys (`pilots.restrict_to_company`) but stored with
/// underscores.
fn storage_key(key: &str) -> String {
    key.trim().replace('.', "_")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    /// Creates a new instance of [`SettingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Raw value of a setting, `None` when unset or empty
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let value = entity::prelude::Setting::find()
            .select_only()
            .column(entity::setting::Column::Value)
            .filter(entity::setting::Column::Id.eq(storage_key(key)))
            .into_tuple::<Option<String>>()
            .one(self.db)
            .await?;

        Ok(value.flatten().filter(|v| !v.trim().is_empty()))
    }

    /// Boolean setting, `default` when unset or unreadable
    pub async fn get_bool(&self, key: &str, default: bool) -> Result<bool, DbErr> {
        let value = self.get(key).await?;

        Ok(value.as_deref().and_then(parse_bool).unwrap_or(default))
    }
}

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::game::GameRefDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeveloperDto {
    pub name: String,
    pub games: Vec<GameRefDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameDevelopersDto {
    pub appid: i64,
    pub name: String,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub support_url: Option<String>,
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RenameDeveloperDto {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeleteDeveloperDto {
    pub name: String,
}

/// Case-insensitive substring search over developer names.
pub fn search_developers<'a>(developers: &'a [DeveloperDto], query: &str) -> Vec<&'a DeveloperDto> {
    let query = query.trim().to_lowercase();
    developers
        .iter()
        .filter(|d| query.is_empty() || d.name.to_lowercase().contains(&query))
        .collect()
}

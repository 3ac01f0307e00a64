use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MiscDetailsDto {
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub supported_languages: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MiscStatsDto {
    pub peak_ccu: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MiscCompaniesDto {
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MiscGameDto {
    pub appid: i64,
    pub name: String,
    pub details: MiscDetailsDto,
    pub stats: MiscStatsDto,
    pub companies: MiscCompaniesDto,
}

/// Insert-or-replace of a game's analytics metadata.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertMiscDto {
    pub appid: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub supported_languages: Vec<String>,
    pub peak_ccu: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateMiscDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_ccu: Option<i64>,
}

impl UpdateMiscDto {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

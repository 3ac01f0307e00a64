use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Maximum number of appids accepted by one batch request.
pub const MAX_BATCH_APPIDS: usize = 50;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BatchRequestDto {
    pub appids: Vec<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ScreenshotDto {
    pub id: i64,
    pub path_thumbnail: String,
    pub path_full: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TrailerDto {
    pub id: i64,
    pub name: String,
    pub thumbnail: String,
    pub webm: Option<String>,
    pub mp4: Option<String>,
}

/// Achievement schema entry merged with its global unlock percentage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AchievementDto {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub icon_gray: Option<String>,
    pub hidden: bool,
    pub percent: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AchievementSort {
    #[default]
    Rarity,
    Name,
}

impl AchievementSort {
    /// Rarest first, or display name A-Z.
    pub fn apply(&self, achievements: &mut [AchievementDto]) {
        match self {
            AchievementSort::Rarity => achievements.sort_by(|a, b| {
                let pa = a.percent.unwrap_or(f64::MAX);
                let pb = b.percent.unwrap_or(f64::MAX);
                pa.total_cmp(&pb)
            }),
            AchievementSort::Name => achievements.sort_by(|a, b| {
                a.display_name
                    .to_lowercase()
                    .cmp(&b.display_name.to_lowercase())
            }),
        }
    }
}

/// Badge class for an achievement's global unlock percentage.
pub fn rarity_class(percent: f64) -> &'static str {
    if percent <= 5.0 {
        "badge-warning"
    } else if percent <= 20.0 {
        "badge-primary"
    } else if percent <= 50.0 {
        "badge-success"
    } else {
        "badge-secondary"
    }
}

/// Resolves an achievement icon to an absolute URL.
pub fn achievement_icon_url(appid: i64, icon: &str) -> String {
    if icon.starts_with("http://") || icon.starts_with("https://") {
        icon.to_string()
    } else {
        format!(
            "https://steamcdn-a.akamaihd.net/steamcommunity/public/images/apps/{}/{}",
            appid, icon
        )
    }
}

/// Screenshots from an `appdetails` response for `appid`.
pub fn parse_screenshots(details: &Value, appid: i64) -> Vec<ScreenshotDto> {
    details[appid.to_string()]["data"]["screenshots"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|shot| {
            Some(ScreenshotDto {
                id: shot["id"].as_i64()?,
                path_thumbnail: shot["path_thumbnail"].as_str()?.to_string(),
                path_full: shot["path_full"].as_str()?.to_string(),
            })
        })
        .collect()
}

/// Trailers from an `appdetails` response for `appid`, keeping the largest encodings.
pub fn parse_trailers(details: &Value, appid: i64) -> Vec<TrailerDto> {
    details[appid.to_string()]["data"]["movies"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|movie| {
            let source = |format: &str| {
                movie[format]["max"]
                    .as_str()
                    .or_else(|| movie[format]["480"].as_str())
                    .map(String::from)
            };

            Some(TrailerDto {
                id: movie["id"].as_i64()?,
                name: movie["name"].as_str().unwrap_or_default().to_string(),
                thumbnail: movie["thumbnail"].as_str().unwrap_or_default().to_string(),
                webm: source("webm"),
                mp4: source("mp4"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(name: &str, percent: Option<f64>) -> AchievementDto {
        AchievementDto {
            name: name.to_string(),
            display_name: name.to_string(),
            description: None,
            icon: None,
            icon_gray: None,
            hidden: false,
            percent,
        }
    }

    #[test]
    fn parses_media_from_app_details() {
        let details = serde_json::json!({
            "10": {
                "success": true,
                "data": {
                    "screenshots": [
                        { "id": 0, "path_thumbnail": "thumb.jpg", "path_full": "full.jpg" },
                        { "id": 1 }
                    ],
                    "movies": [
                        {
                            "id": 256,
                            "name": "Trailer",
                            "thumbnail": "t.jpg",
                            "webm": { "480": "low.webm", "max": "high.webm" },
                            "mp4": { "480": "low.mp4" }
                        }
                    ]
                }
            }
        });

        let screenshots = parse_screenshots(&details, 10);
        assert_eq!(screenshots.len(), 1);
        assert_eq!(screenshots[0].path_full, "full.jpg");

        let trailers = parse_trailers(&details, 10);
        assert_eq!(trailers[0].webm.as_deref(), Some("high.webm"));
        assert_eq!(trailers[0].mp4.as_deref(), Some("low.mp4"));

        assert!(parse_screenshots(&details, 20).is_empty());
    }

    #[test]
    fn rarity_thresholds() {
        assert_eq!(rarity_class(5.0), "badge-warning");
        assert_eq!(rarity_class(12.0), "badge-primary");
        assert_eq!(rarity_class(50.0), "badge-success");
        assert_eq!(rarity_class(50.1), "badge-secondary");
    }

    #[test]
    fn icon_url_keeps_absolute_urls() {
        assert_eq!(
            achievement_icon_url(10, "abc.jpg"),
            "https://steamcdn-a.akamaihd.net/steamcommunity/public/images/apps/10/abc.jpg"
        );
        assert_eq!(
            achievement_icon_url(10, "https://cdn.example/x.jpg"),
            "https://cdn.example/x.jpg"
        );
    }

    #[test]
    fn rarity_sort_puts_unknown_last() {
        let mut list = vec![
            achievement("b", None),
            achievement("a", Some(40.0)),
            achievement("c", Some(2.5)),
        ];
        AchievementSort::Rarity.apply(&mut list);
        let names: Vec<_> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);

        AchievementSort::Name.apply(&mut list);
        let names: Vec<_> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}

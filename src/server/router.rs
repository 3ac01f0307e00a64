use std::net::IpAddr;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request,
    },
    routing::get,
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, SmartIpKeyExtractor},
    GovernorError, GovernorLayer,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        advanced::{self, ADVANCED_TAG},
        auth::{self, AUTH_TAG},
        dashboard::{self, DASHBOARD_TAG},
        developer::{self, DEVELOPER_TAG},
        game::{self, GAME_TAG},
        misc::{self, MISC_TAG},
        oauth,
        review::{self, REVIEW_TAG},
        steam::{self, STEAM_TAG},
    },
    state::AppState,
};

/// Requests replenished per second on the credential endpoints.
const AUTH_RATE_PER_SECOND: u64 = 2;
const AUTH_RATE_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(title = "Game Catalog API", description = "Steam game catalog with reviews"),
    modifiers(&SecurityAddon),
    tags(
        (name = GAME_TAG, description = "Catalog games"),
        (name = REVIEW_TAG, description = "User reviews"),
        (name = DEVELOPER_TAG, description = "Developer curation"),
        (name = MISC_TAG, description = "Supplementary game metadata"),
        (name = ADVANCED_TAG, description = "Rankings and multi-criteria search"),
        (name = DASHBOARD_TAG, description = "Home page statistics"),
        (name = ADMIN_TAG, description = "Audit log and moderation"),
        (name = AUTH_TAG, description = "Password accounts and bearer tokens"),
        (name = STEAM_TAG, description = "Cached Steam storefront and Web API proxy"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Client IP when one can be determined, otherwise a shared bucket.
#[derive(Clone)]
struct ClientIpKeyExtractor;

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = Option<IpAddr>;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        Ok(SmartIpKeyExtractor.extract(req).ok())
    }
}

pub fn router() -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(credential_routes())
        .routes(routes!(game::get_games, game::create_game))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        .routes(routes!(game::filter_games))
        .routes(routes!(game::get_stats))
        .routes(routes!(game::get_enriched_game))
        .routes(routes!(review::create_review, review::get_game_reviews))
        .routes(routes!(review::update_review, review::delete_review))
        .routes(routes!(review::get_reviewed_games))
        .routes(routes!(review::get_game_with_reviews))
        .routes(routes!(review::get_review_stats))
        .routes(routes!(review::get_filtered_reviews))
        .routes(routes!(review::get_recent_reviews))
        .routes(routes!(developer::get_developers))
        .routes(routes!(developer::get_game_developers))
        .routes(routes!(developer::rename_developer))
        .routes(routes!(developer::delete_developer))
        .routes(routes!(misc::get_misc_list, misc::upsert_misc))
        .routes(routes!(misc::get_misc, misc::update_misc, misc::clear_misc))
        .routes(routes!(advanced::get_top))
        .routes(routes!(advanced::get_sentiment))
        .routes(routes!(advanced::get_value))
        .routes(routes!(advanced::search))
        .routes(routes!(advanced::get_top_enriched))
        .routes(routes!(dashboard::get_dashboard_stats))
        .routes(routes!(admin::get_action_logs))
        .routes(routes!(admin::get_admin_reviews))
        .routes(routes!(auth::validate))
        .routes(routes!(auth::me))
        .routes(routes!(auth::admin_test))
        .routes(routes!(auth::session_token))
        .routes(routes!(steam::get_details))
        .routes(routes!(steam::get_screenshots))
        .routes(routes!(steam::get_trailers))
        .routes(routes!(steam::get_images))
        .routes(routes!(steam::get_achievements))
        .routes(routes!(steam::get_achievement_percentages))
        .routes(routes!(steam::get_merged_achievements))
        .routes(routes!(steam::search))
        .routes(routes!(steam::batch))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/api/auth/login", get(oauth::login))
        .route("/api/auth/callback", get(oauth::callback))
        .route("/api/auth/logout", get(oauth::logout))
        .merge(api_router)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
}

/// Login and registration, behind a per-client rate limit.
fn credential_routes() -> OpenApiRouter<AppState> {
    let routes = OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::register));

    let Some(config) = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(AUTH_RATE_PER_SECOND)
        .burst_size(AUTH_RATE_BURST)
        .finish()
    else {
        return routes;
    };

    routes.layer(GovernorLayer::new(config))
}

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginatedDto},
        review::{
            CreateReviewDto, FilteredReviewsDto, GameReviewsDto, GameWithReviewsDto,
            RecentReviewsDto, ReviewCreatedDto, ReviewDto, ReviewFilter, ReviewSort,
            ReviewStatsDto, UpdateReviewDto,
        },
    },
    server::{
        controller::RequestMeta,
        error::AppError,
        middleware::auth::AuthGuard,
        model::action_log::{LogAction, LogStatus},
        service::{
            action_log::ActionLogService,
            review::{ReviewActor, ReviewService},
        },
        state::AppState,
        util::pagination::{paginated, PageLinkBase, PageParams},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

const REVIEWS_COLLECTION: &str = "reviews";

/// Number of recent reviews returned when no limit is given.
const DEFAULT_RECENT_LIMIT: u64 = 6;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilteredReviewsQuery {
    /// `all`, `positive` or `negative`
    #[serde(default)]
    pub filter: ReviewFilter,
    /// `date`, `rating` or `username`
    #[serde(default)]
    pub sort: ReviewSort,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentReviewsQuery {
    /// Number of reviews, capped at 100
    pub limit: Option<u64>,
}

/// Post a review.
///
/// Signed-in authors are recorded from their token. Anonymous posts use the
/// submitted username or "Anonymous".
///
/// # Returns
/// - `201 Created` - Stored review and its game
/// - `400 Bad Request` - Missing comment or rating outside 0..=100
/// - `404 Not Found` - Unknown appid
#[utoipa::path(
    post,
    path = "/api/v1.0/games/{appid}/reviews",
    tag = REVIEW_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewCreatedDto),
        (status = 400, description = "Comment and rating are required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Path(appid): Path<i64>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &session, &state.token_service)
        .optional()
        .await?;
    let meta = RequestMeta::new(headers, method, uri);

    let author = user.as_ref().map(|u| (u.id, u.username.clone()));
    let (review, game) = ReviewService::new(&state.db)
        .create(appid, payload, author)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(user.as_ref()),
            LogAction::CreateReview,
            REVIEWS_COLLECTION,
            review.id,
            json!({ "appid": appid, "rating": review.rating }),
            LogStatus::Success,
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ReviewCreatedDto {
            message: "Review added successfully".to_string(),
            review: review.into_dto(),
            game,
        }),
    ))
}

/// All reviews of one game, newest first.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/{appid}/reviews",
    tag = REVIEW_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Game and its reviews", body = GameReviewsDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_reviews(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).get_for_game(appid).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Games that have at least one review, each with its reviews.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/reviews",
    tag = REVIEW_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of reviewed games", body = PaginatedDto<GameWithReviewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviewed_games(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let (games, total) = ReviewService::new(&state.db)
        .get_reviewed_games(&params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(paginated(games, &PageLinkBase::from_uri(&uri), &params, total)),
    ))
}

/// Full game detail with its reviews embedded.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/{appid}/with-reviews",
    tag = REVIEW_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Game detail with reviews", body = GameWithReviewsDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_with_reviews(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let game = ReviewService::new(&state.db).get_with_reviews(appid).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Edit a review.
///
/// # Access Control
/// - Review author or an admin
///
/// # Returns
/// - `200 OK` - Updated review
/// - `400 Bad Request` - Neither comment nor rating given
/// - `403 Forbidden` - Not the author and not an admin
/// - `404 Not Found` - No such review on this game
#[utoipa::path(
    put,
    path = "/api/v1.0/games/{appid}/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("appid" = i64, Path, description = "Steam appid"),
        ("id" = i32, Path, description = "Review id")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewDto),
        (status = 400, description = "Comment or rating required", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized to edit this review", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_review(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Path((appid, id)): Path<(i64, i32)>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &session, &state.token_service)
        .require(&[])
        .await?;
    let meta = RequestMeta::new(headers, method, uri);
    let details = serde_json::to_value(&payload)?;

    let actor = ReviewActor {
        user_id: user.id,
        is_admin: user.is_admin(),
    };
    let review = ReviewService::new(&state.db)
        .update(appid, id, payload, actor)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::UpdateReview,
            REVIEWS_COLLECTION,
            id,
            details,
            LogStatus::Success,
        )
        .await;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Delete a review.
///
/// # Access Control
/// - Review author or an admin
#[utoipa::path(
    delete,
    path = "/api/v1.0/games/{appid}/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("appid" = i64, Path, description = "Steam appid"),
        ("id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized to delete this review", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Path((appid, id)): Path<(i64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &session, &state.token_service)
        .require(&[])
        .await?;
    let meta = RequestMeta::new(headers, method, uri);

    let actor = ReviewActor {
        user_id: user.id,
        is_admin: user.is_admin(),
    };
    let review = ReviewService::new(&state.db)
        .delete(appid, id, actor)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::DeleteReview,
            REVIEWS_COLLECTION,
            id,
            json!({ "appid": appid, "username": review.username }),
            LogStatus::Success,
        )
        .await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Review deleted successfully")),
    ))
}

/// Review statistics of a game.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/{appid}/reviews/stats",
    tag = REVIEW_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Review statistics", body = ReviewStatsDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_stats(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let stats = ReviewService::new(&state.db).stats(appid).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Reviews of a game filtered by sentiment and sorted.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/{appid}/reviews/filtered",
    tag = REVIEW_TAG,
    params(
        ("appid" = i64, Path, description = "Steam appid"),
        FilteredReviewsQuery
    ),
    responses(
        (status = 200, description = "Filtered reviews", body = FilteredReviewsDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_filtered_reviews(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
    Query(query): Query<FilteredReviewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .filtered(appid, query.filter, query.sort)
        .await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Newest reviews across the catalog.
#[utoipa::path(
    get,
    path = "/api/v1.0/reviews/recent",
    tag = REVIEW_TAG,
    params(RecentReviewsQuery),
    responses(
        (status = 200, description = "Recent reviews", body = RecentReviewsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_reviews(
    State(state): State<AppState>,
    Query(query): Query<RecentReviewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .recent(query.limit.unwrap_or(DEFAULT_RECENT_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(reviews)))
}

//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto, POSITIVE_RATING_THRESHOLD},
    server::error::AppError,
};

/// Username stored on reviews posted without a bearer token and without a name.
pub const ANONYMOUS_USERNAME: &str = "Anonymous";

/// A user review of a catalog game.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub appid: i64,
    /// Display name, taken from the token when the author was signed in.
    pub username: String,
    pub comment: String,
    /// Score from 0 to 100.
    pub rating: i32,
    /// Id of the signed-in author, `None` for anonymous reviews.
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<i32>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            appid: entity.appid,
            username: entity.username,
            comment: entity.comment,
            rating: entity.rating,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            updated_by: entity.updated_by,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.rating >= POSITIVE_RATING_THRESHOLD
    }

    /// Whether `user_id` wrote this review.
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.created_by == Some(user_id)
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            appid: self.appid,
            username: self.username,
            comment: self.comment,
            rating: self.rating,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
        }
    }
}

fn valid_rating(rating: i32) -> bool {
    (0..=100).contains(&rating)
}

/// Parameters for inserting a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub appid: i64,
    pub username: String,
    pub comment: String,
    pub rating: i32,
    pub created_by: Option<i32>,
}

impl CreateReviewParams {
    /// Validates a review submission.
    ///
    /// # Arguments
    /// - `appid` - Game being reviewed
    /// - `dto` - Submitted comment, rating and optional display name
    /// - `author` - Id and username of the signed-in author, which take precedence over
    ///   the submitted name
    ///
    /// # Returns
    /// - `Ok(CreateReviewParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank comment or rating outside `0..=100`
    pub fn from_dto(
        appid: i64,
        dto: CreateReviewDto,
        author: Option<(i32, String)>,
    ) -> Result<Self, AppError> {
        let comment = dto.comment.trim().to_string();
        if comment.is_empty() || !valid_rating(dto.rating) {
            return Err(AppError::BadRequest(
                "Comment and rating are required".to_string(),
            ));
        }

        let (created_by, username) = match author {
            Some((id, username)) => (Some(id), username),
            None => (
                None,
                dto.username
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty())
                    .unwrap_or_else(|| ANONYMOUS_USERNAME.to_string()),
            ),
        };

        Ok(Self {
            appid,
            username,
            comment,
            rating: dto.rating,
            created_by,
        })
    }
}

/// Partial update of a review.
#[derive(Debug, Clone)]
pub struct UpdateReviewParams {
    pub comment: Option<String>,
    pub rating: Option<i32>,
    pub updated_by: i32,
}

impl UpdateReviewParams {
    /// Validates a review edit.
    ///
    /// # Returns
    /// - `Ok(UpdateReviewParams)` - At least one field to change
    /// - `Err(AppError::BadRequest)` - Neither field given, or a rating outside `0..=100`
    pub fn from_dto(dto: UpdateReviewDto, updated_by: i32) -> Result<Self, AppError> {
        let comment = dto
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if comment.is_none() && dto.rating.is_none() {
            return Err(AppError::BadRequest("Comment or rating required".to_string()));
        }
        if dto.rating.is_some_and(|r| !valid_rating(r)) {
            return Err(AppError::BadRequest(
                "Rating must be between 0 and 100".to_string(),
            ));
        }

        Ok(Self {
            comment,
            rating: dto.rating,
            updated_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(comment: &str, rating: i32, username: Option<&str>) -> CreateReviewDto {
        CreateReviewDto {
            comment: comment.to_string(),
            rating,
            username: username.map(String::from),
        }
    }

    #[test]
    fn create_requires_comment_and_rating_range() {
        assert!(CreateReviewParams::from_dto(10, dto(" ", 50, None), None).is_err());
        assert!(CreateReviewParams::from_dto(10, dto("ok", 101, None), None).is_err());
        assert!(CreateReviewParams::from_dto(10, dto("ok", -1, None), None).is_err());
    }

    #[test]
    fn create_prefers_token_author() {
        let params =
            CreateReviewParams::from_dto(10, dto("ok", 80, Some("bob")), Some((3, "alice".into())))
                .unwrap();
        assert_eq!(params.username, "alice");
        assert_eq!(params.created_by, Some(3));

        let params = CreateReviewParams::from_dto(10, dto("ok", 80, Some("bob")), None).unwrap();
        assert_eq!(params.username, "bob");
        assert_eq!(params.created_by, None);

        let params = CreateReviewParams::from_dto(10, dto("ok", 80, None), None).unwrap();
        assert_eq!(params.username, ANONYMOUS_USERNAME);
    }

    #[test]
    fn update_requires_a_field() {
        let result = UpdateReviewParams::from_dto(UpdateReviewDto::default(), 1);
        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Comment or rating required"));

        let params = UpdateReviewParams::from_dto(
            UpdateReviewDto {
                comment: None,
                rating: Some(0),
            },
            1,
        )
        .unwrap();
        assert_eq!(params.rating, Some(0));
    }
}

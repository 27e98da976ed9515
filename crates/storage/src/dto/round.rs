use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Round, RoundEnvironment, RoundStatus};

/// Request payload for registering a new round
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoundRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Course name must be between 1 and 255 characters"
    ))]
    pub course_name: String,

    #[validate(range(min = 1, max = 18, message = "A round has between 1 and 18 holes"))]
    pub hole_count: i16,

    #[serde(default)]
    pub environment: RoundEnvironment,

    #[validate(custom(function = "validate_par"))]
    pub par_per_hole: Option<Decimal>,

    #[serde(default)]
    pub is_public: bool,
}

/// Request payload for moving a round through its lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoundStatusRequest {
    pub status: RoundStatus,
}

/// Request payload for linking a finished scorecard to a shared post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachPublicationRequest {
    pub post_id: Uuid,
}

/// Response containing round details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoundResponse {
    pub round_id: Uuid,
    pub organizer_id: Uuid,
    pub course_name: String,
    pub hole_count: i16,
    pub environment: RoundEnvironment,
    pub par_per_hole: Option<Decimal>,
    pub status: RoundStatus,
    pub is_public: bool,
    pub published_post_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

// Validation helpers
fn validate_par(par: &Decimal) -> Result<(), validator::ValidationError> {
    if *par > Decimal::ZERO && *par <= Decimal::from(15) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_par"))
    }
}

impl From<Round> for RoundResponse {
    fn from(round: Round) -> Self {
        Self {
            round_id: round.round_id,
            organizer_id: round.organizer_id,
            course_name: round.course_name,
            hole_count: round.hole_count,
            environment: round.environment,
            par_per_hole: round.par_per_hole,
            status: round.status,
            is_public: round.is_public,
            published_post_id: round.published_post_id,
            created_at: round.created_at,
            updated_at: round.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hole_count: i16, par_per_hole: Option<Decimal>) -> CreateRoundRequest {
        CreateRoundRequest {
            course_name: "Old Links".to_string(),
            hole_count,
            environment: RoundEnvironment::Outdoor,
            par_per_hole,
            is_public: false,
        }
    }

    #[test]
    fn test_accepts_standard_round() {
        assert!(request(18, Some(Decimal::from(4))).validate().is_ok());
    }

    #[test]
    fn test_rejects_hole_count_out_of_bounds() {
        assert!(request(0, None).validate().is_err());
        assert!(request(19, None).validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_par() {
        assert!(request(9, Some(Decimal::ZERO)).validate().is_err());
        assert!(request(9, Some(Decimal::from(-4))).validate().is_err());
    }

    #[test]
    fn test_par_is_optional() {
        assert!(request(9, None).validate().is_ok());
    }
}

//! Weekly Plan Commands

use crate::error::ApiError;
use crate::models::{PlanRequest, Recommendation};
use super::post_json;

pub async fn generate_weekly_plan(args: &PlanRequest) -> Result<Recommendation, ApiError> {
    post_json("generate_weekly_plan", args).await
}

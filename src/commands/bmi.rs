//! BMI Commands

use crate::error::ApiError;
use crate::models::{BmiRequest, BmiResponse};
use super::post_json;

pub async fn calculate_bmi(args: &BmiRequest) -> Result<BmiResponse, ApiError> {
    post_json("calculate_bmi", args).await
}

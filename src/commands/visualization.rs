//! Visualization Commands

use crate::error::ApiError;
use crate::models::VisualizationData;
use super::get_json;

/// Chart data for the most recently generated plan
pub async fn get_visualizations_data() -> Result<VisualizationData, ApiError> {
    get_json("get_visualizations_data").await
}

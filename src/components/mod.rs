//! UI Components
//!
//! Leptos components making up the planner page.

mod tab_bar;
mod profile_form;
mod nutrition_summary;
mod weekly_plan_view;
mod recommendations_panel;
mod visualization_panel;
mod error_modal;
mod loading_overlay;

pub use tab_bar::{TabBar, TabPanel};
pub use profile_form::ProfileForm;
pub use nutrition_summary::NutritionSummary;
pub use weekly_plan_view::WeeklyPlanView;
pub use recommendations_panel::RecommendationsPanel;
pub use visualization_panel::VisualizationPanel;
pub use error_modal::ErrorModal;
pub use loading_overlay::LoadingOverlay;

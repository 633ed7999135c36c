//! Diet Planner App
//!
//! Root component: tab bar, the three tab panels, and the shared modal and overlay.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ErrorModal, LoadingOverlay, ProfileForm, RecommendationsPanel, TabBar, TabPanel, VisualizationPanel,
};
use crate::context::PageContext;
use crate::store::PlanState;
use crate::tabs::Tab;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(PageContext::new());
    provide_context(Store::new(PlanState::default()));

    view! {
        <div class="container">
            <header>
                <h1>"Diet Recommendation System"</h1>
                <p class="subtitle">"A weekly meal plan built around your body and your goals"</p>
            </header>

            <TabBar />

            <TabPanel tab=Tab::Profile>
                <ProfileForm />
            </TabPanel>
            <TabPanel tab=Tab::Recommendations>
                <RecommendationsPanel />
            </TabPanel>
            <TabPanel tab=Tab::Visualization>
                <VisualizationPanel />
            </TabPanel>
        </div>

        <LoadingOverlay />
        <ErrorModal />
    }
}

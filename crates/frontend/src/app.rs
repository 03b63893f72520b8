use crate::routes::routes::AppRoutes;
use crate::shared::config::resolve_page_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Page configuration is read once per load and shared via context
    provide_context(resolve_page_config());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}

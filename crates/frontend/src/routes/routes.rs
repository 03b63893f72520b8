use crate::domain::a001_component::ui::ComponentCategoryPage;
use contracts::enums::component_category::ComponentCategory;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="not-found">"Page introuvable"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let landing = format!("/composants/{}", ComponentCategory::Processor.slug());

    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=move || view! { <Redirect path=landing.clone() /> } />
                    <Route path=path!("/composants/:category") view=ComponentCategoryPage />
                </Routes>
            </main>
        </Router>
    }
}

//! Home page — landing route for authenticated users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Home page — greets the signed-in user.
/// Redirects to `/login` when the session holds no user. The journal
/// feed itself lives outside this slice.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.is_pending() && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let greeting = move || {
        session
            .get()
            .user
            .as_ref()
            .and_then(|u| u.display_name().map(str::to_owned))
            .map_or_else(
                || "Welcome back!".to_owned(),
                |name| format!("Welcome back, {name}!"),
            )
    };

    view! {
        <div class="home-page">
            <h1>"TravelStory"</h1>
            <p class="home-page__greeting">{greeting}</p>
        </div>
    }
}

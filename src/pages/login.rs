//! Sign-in page with email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_input::PasswordInput;
use crate::net::auth_client;
use crate::state::form::{self, AuthMode, FormFields};
use crate::state::session::{NavigationWatcher, SessionState};

/// Sign-in page.
///
/// Local validation errors and remote failure messages share one
/// inline error line; while a submission is pending the button is
/// replaced with a loading indicator. A successful sign-in is picked
/// up by the navigation watcher, which redirects home exactly once.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let validation_error = RwSignal::new(None::<String>);

    // Redirect home on authentication, once. Also catches visitors who
    // are already signed in.
    let watcher = StoredValue::new(NavigationWatcher::default());
    Effect::new(move || {
        let state = session.get();
        let mut w = watcher.get_value();
        if let Some(route) = w.observe(&state) {
            watcher.set_value(w);
            navigate(route, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let fields = FormFields {
            name: String::new(),
            email: email.get(),
            password: password.get(),
        };
        match form::validate(&fields, AuthMode::SignIn) {
            Ok(credentials) => {
                validation_error.set(None);
                auth_client::spawn_sign_in(session, credentials);
            }
            Err(err) => validation_error.set(Some(err.message().to_owned())),
        }
    };

    // Local validation first, then whatever the last attempt left in
    // the session.
    let error_text = move || {
        validation_error
            .get()
            .or_else(|| session.get().error_message)
    };

    let pending = move || session.get().is_pending();

    view! {
        <div class="auth-page auth-page--login">
            <div class="auth-card">
                <h2 class="auth-card__title">"Enter the world of travel stories"</h2>

                <form on:submit=on_submit>
                    <input
                        class="auth-card__input"
                        type="email"
                        placeholder="Your Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <PasswordInput value=password/>

                    <Show when=move || error_text().is_some()>
                        <p class="auth-card__error">{error_text}</p>
                    </Show>

                    <Show
                        when=move || !pending()
                        fallback=|| view! { <p class="auth-card__loading">"LOADING..."</p> }
                    >
                        <button class="auth-card__submit" type="submit">
                            "LOGIN"
                        </button>
                    </Show>

                    <p class="auth-card__switch">
                        "Not a member yet? "
                        <a href="/sign-up">"Join Now!"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

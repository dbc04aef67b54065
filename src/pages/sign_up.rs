//! Sign-up page with name/email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_input::PasswordInput;
use crate::net::auth_client;
use crate::state::form::{self, AuthMode, FormFields};
use crate::state::session::{NavigationWatcher, SessionState};

/// Sign-up page.
///
/// Registration establishes no session: on success the user lands on
/// `/login` to sign in with the new account. An already-authenticated
/// visitor is bounced home by the same watcher the login page uses.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let validation_error = RwSignal::new(None::<String>);

    let watcher = StoredValue::new(NavigationWatcher::default());
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            let mut w = watcher.get_value();
            if let Some(route) = w.observe(&state) {
                watcher.set_value(w);
                navigate(route, NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let fields = FormFields {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };
        match form::validate(&fields, AuthMode::SignUp) {
            Ok(credentials) => {
                validation_error.set(None);
                let navigate = navigate.clone();
                auth_client::spawn_sign_up(session, credentials, move || {
                    navigate("/login", NavigateOptions::default());
                });
            }
            Err(err) => validation_error.set(Some(err.message().to_owned())),
        }
    };

    let error_text = move || {
        validation_error
            .get()
            .or_else(|| session.get().error_message)
    };

    let pending = move || session.get().is_pending();

    view! {
        <div class="auth-page auth-page--sign-up">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create Your Account"</h2>

                <form on:submit=on_submit>
                    <input
                        class="auth-card__input"
                        type="text"
                        placeholder="Your Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />

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
                            "SIGN UP"
                        </button>
                    </Show>

                    <p class="auth-card__switch">
                        "Already have an account? "
                        <a href="/login">"Login Here"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

//! Password field with a show/hide toggle.

use leptos::prelude::*;

/// Password input bound to `value`, with a button that toggles the
/// field between masked and plain text.
#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(default = "Password")] placeholder: &'static str,
) -> impl IntoView {
    let show = RwSignal::new(false);

    view! {
        <div class="password-input">
            <input
                class="password-input__field"
                type=move || if show.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-input__toggle"
                on:click=move |_| show.update(|s| *s = !*s)
            >
                {move || if show.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}

//! Sign-up page with inline field errors and a live password checklist.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field errors come from the core validator and clear as each field is
//! edited. Registration does not sign the user in; on success the form resets
//! and links to the sign-in page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use careerconnect::config::ClientConfig;
use careerconnect::routes::AppRoute;
use careerconnect::types::UserType;
use careerconnect::validation::{PasswordRequirements, SignUpErrors, SignUpField, SignUpForm, validate_sign_up};
use leptos::prelude::*;

/// Checklist rows shown under the password field.
fn requirement_rows(reqs: PasswordRequirements) -> [(&'static str, bool); 5] {
    [
        ("At least 8 characters", reqs.length),
        ("One uppercase letter", reqs.uppercase),
        ("One lowercase letter", reqs.lowercase),
        ("One number", reqs.number),
        ("One special character", reqs.special),
    ]
}

fn parse_user_type(raw: &str) -> UserType {
    if raw == UserType::Employer.as_str() { UserType::Employer } else { UserType::JobSeeker }
}

/// Link to the sign-in page carrying the post-registration banner.
fn sign_in_after_registration() -> String {
    format!("{}?registered=true", AppRoute::SignIn.path())
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    let form = RwSignal::new(SignUpForm::default());
    let errors = RwSignal::new(SignUpErrors::default());
    let error = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let edit = move |field: SignUpField, apply: fn(&mut SignUpForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
            errors.update(|e| e.clear(field));
        }
    };
    let field_error = move |field: SignUpField| move || errors.with(|e| e.get(field)).unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        message.set(String::new());
        let current = form.get();
        if let Err(found) = validate_sign_up(&current) {
            errors.set(found);
            return;
        }
        busy.set(true);
        submit(&config, current, form, errors, error, message, busy);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__back" href=AppRoute::Home.path()>"Back to home"</a>
                <h1>"Create your account"</h1>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message auth-message--success">
                        {move || message.get()} " "
                        <a href=sign_in_after_registration()>"Sign in"</a>
                    </p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="full-name">"Full name"</label>
                    <input
                        id="full-name"
                        type="text"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=edit(SignUpField::FullName, |f, v| f.full_name = v)
                    />
                    <span class="field-error">{field_error(SignUpField::FullName)}</span>

                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=edit(SignUpField::Email, |f, v| f.email = v)
                    />
                    <span class="field-error">{field_error(SignUpField::Email)}</span>

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=edit(SignUpField::Password, |f, v| f.password = v)
                    />
                    <span class="field-error">{field_error(SignUpField::Password)}</span>
                    <ul class="password-checklist">
                        {move || {
                            let reqs = form.with(|f| PasswordRequirements::check(&f.password));
                            requirement_rows(reqs)
                                .into_iter()
                                .map(|(label, met)| {
                                    let class = if met { "password-checklist__item--met" } else { "password-checklist__item" };
                                    view! { <li class=class>{label}</li> }
                                })
                                .collect_view()
                        }}
                    </ul>

                    <label for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=edit(SignUpField::ConfirmPassword, |f, v| f.confirm_password = v)
                    />
                    <span class="field-error">{field_error(SignUpField::ConfirmPassword)}</span>

                    <label for="user-type">"I am a"</label>
                    <select
                        id="user-type"
                        prop:value=move || form.with(|f| f.user_type.as_str())
                        on:change=move |ev| form.update(|f| f.user_type = parse_user_type(&event_target_value(&ev)))
                    >
                        <option value=UserType::JobSeeker.as_str()>"Job seeker"</option>
                        <option value=UserType::Employer.as_str()>"Employer"</option>
                    </select>

                    <label class="auth-form__terms">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.agree_to_terms)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.agree_to_terms = checked);
                                errors.update(|e| e.clear(SignUpField::AgreeToTerms));
                            }
                        />
                        "I agree to the terms and conditions"
                    </label>
                    <span class="field-error">{field_error(SignUpField::AgreeToTerms)}</span>

                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=AppRoute::SignIn.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

fn submit(
    config: &ClientConfig,
    current: SignUpForm,
    form: RwSignal<SignUpForm>,
    errors: RwSignal<SignUpErrors>,
    error: RwSignal<String>,
    message: RwSignal<String>,
    busy: RwSignal<bool>,
) {
    #[cfg(feature = "csr")]
    {
        let resolver = crate::state::session::web_resolver(config);
        leptos::task::spawn_local(async move {
            match careerconnect::account::register(&resolver, &current).await {
                Ok(notice) => {
                    message.set(notice.to_owned());
                    form.set(SignUpForm::default());
                }
                Err(careerconnect::account::AccountError::InvalidFields(found)) => errors.set(found),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, current, form, errors, error, message);
        busy.set(false);
    }
}

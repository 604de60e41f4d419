//! Profile completion and editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards send signed-in users to `/complete-profile` when the backend has no
//! complete profile for them; `/profile/edit` renders the same form. Both
//! routes need only authentication, never a profile.
//!
//! DESIGN
//! ======
//! The form shape follows the account role read once at mount: job seekers
//! fill in personal details, skills and preferences, employers fill in company
//! and contact details. Submitting goes through the core `complete_profile`
//! flow, which validates the same fields the backend requires before it
//! reports a profile as complete.

#[cfg(test)]
#[path = "complete_profile_test.rs"]
mod complete_profile_test;

use careerconnect::config::ClientConfig;
use careerconnect::session::{Session, SessionContext};
use careerconnect::types::{EmployerProfile, JobSeekerProfile, ProfileUpdate, UserType};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionHandle, display_name};

pub const SKILL_OPTIONS: [&str; 25] = [
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "Flask",
    "SQL",
    "NoSQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Agile",
    "Scrum",
    "UI/UX Design",
    "Graphic Design",
    "Content Writing",
    "Digital Marketing",
    "SEO",
    "Social Media Marketing",
    "Customer Service",
    "Sales",
    "Business Development",
    "Accounting",
];

pub const JOB_TYPE_OPTIONS: [&str; 5] = ["Full-time", "Part-time", "Contract", "Freelance", "Internship"];

pub const WORK_LOCATION_OPTIONS: [&str; 3] = ["Remote", "On-site", "Hybrid"];

pub const INDUSTRY_OPTIONS: [&str; 10] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Education",
    "Retail",
    "Manufacturing",
    "Media",
    "Government",
    "Non-profit",
    "Consulting",
];

pub const COMPANY_SIZE_OPTIONS: [&str; 6] = [
    "1-10 employees",
    "11-50 employees",
    "51-200 employees",
    "201-500 employees",
    "501-1000 employees",
    "1001+ employees",
];

/// Wire value and label for each availability choice.
pub const AVAILABILITY_OPTIONS: [(&str, &str); 3] =
    [("immediately", "Immediately"), ("2weeks", "In 2 weeks"), ("1month", "In 1 month")];

/// Add `value` if missing, remove it if present.
fn toggle(choices: &mut Vec<String>, value: &str) {
    if let Some(index) = choices.iter().position(|c| c == value) {
        choices.remove(index);
    } else {
        choices.push(value.to_owned());
    }
}

/// Role the form is built for. Guards only render this page for a signed-in
/// user; a missing user falls back to the job seeker form.
fn form_role(session: &Session) -> UserType {
    session.user().map_or(UserType::JobSeeker, |u| u.user_type)
}

fn chip_class(selected: bool) -> &'static str {
    if selected { "chip chip--selected" } else { "chip" }
}

fn text_input<P>(
    profile: RwSignal<P>,
    id: &'static str,
    label: &'static str,
    read: fn(&P) -> String,
    write: fn(&mut P, String),
) -> impl IntoView
where
    P: Send + Sync + 'static,
{
    view! {
        <label for=id>{label}</label>
        <input
            id=id
            type="text"
            prop:value=move || profile.with(read)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                profile.update(|p| write(p, value));
            }
        />
    }
}

fn text_area<P>(
    profile: RwSignal<P>,
    id: &'static str,
    label: &'static str,
    read: fn(&P) -> String,
    write: fn(&mut P, String),
) -> impl IntoView
where
    P: Send + Sync + 'static,
{
    view! {
        <label for=id>{label}</label>
        <textarea
            id=id
            rows="4"
            prop:value=move || profile.with(read)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                profile.update(|p| write(p, value));
            }
        />
    }
}

fn choice_chips(
    profile: RwSignal<JobSeekerProfile>,
    options: &'static [&'static str],
    read: fn(&JobSeekerProfile) -> &[String],
    write: fn(&mut JobSeekerProfile) -> &mut Vec<String>,
) -> impl IntoView {
    let chips = options
        .iter()
        .map(|&option| {
            let selected = move || profile.with(|p| read(p).iter().any(|c| c == option));
            view! {
                <button
                    type="button"
                    class=move || chip_class(selected())
                    on:click=move |_| profile.update(|p| toggle(write(p), option))
                >
                    {option}
                </button>
            }
        })
        .collect_view();
    view! { <div class="chips">{chips}</div> }
}

fn job_seeker_fields(profile: RwSignal<JobSeekerProfile>) -> impl IntoView {
    view! {
        <fieldset class="profile-form__section">
            <legend>"About you"</legend>
            {text_input(profile, "title", "Professional title", |p| p.title.clone(), |p, v| p.title = v)}
            {text_input(profile, "phone", "Phone", |p| p.phone.clone(), |p, v| p.phone = v)}
            {text_input(profile, "location", "Location", |p| p.location.clone(), |p, v| p.location = v)}
            {text_area(profile, "bio", "Bio", |p| p.bio.clone(), |p, v| p.bio = v)}
        </fieldset>
        <fieldset class="profile-form__section">
            <legend>"Skills"</legend>
            {choice_chips(profile, &SKILL_OPTIONS, |p| p.skills.as_slice(), |p| &mut p.skills)}
        </fieldset>
        <fieldset class="profile-form__section">
            <legend>"Job preferences"</legend>
            <p>"Job types"</p>
            {choice_chips(profile, &JOB_TYPE_OPTIONS, |p| p.job_types.as_slice(), |p| &mut p.job_types)}
            <p>"Work locations"</p>
            {choice_chips(profile, &WORK_LOCATION_OPTIONS, |p| p.locations.as_slice(), |p| &mut p.locations)}
            <p>"Industries"</p>
            {choice_chips(profile, &INDUSTRY_OPTIONS, |p| p.industries.as_slice(), |p| &mut p.industries)}
            {text_input(profile, "min-salary", "Minimum salary", |p| p.min_salary.clone(), |p, v| p.min_salary = v)}
            <label for="availability">"Available to start"</label>
            <select
                id="availability"
                prop:value=move || profile.with(|p| p.availability.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    profile.update(|p| p.availability = value);
                }
            >
                {AVAILABILITY_OPTIONS
                    .iter()
                    .map(|&(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
        </fieldset>
    }
}

fn select_input(
    profile: RwSignal<EmployerProfile>,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
    read: fn(&EmployerProfile) -> String,
    write: fn(&mut EmployerProfile, String),
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <select
            id=id
            prop:value=move || profile.with(read)
            on:change=move |ev| {
                let value = event_target_value(&ev);
                profile.update(|p| write(p, value));
            }
        >
            <option value="">{placeholder}</option>
            {options.iter().map(|&option| view! { <option value=option>{option}</option> }).collect_view()}
        </select>
    }
}

fn employer_fields(profile: RwSignal<EmployerProfile>) -> impl IntoView {
    view! {
        <fieldset class="profile-form__section">
            <legend>"Company"</legend>
            {text_input(profile, "company-name", "Company name", |p| p.company_name.clone(), |p, v| p.company_name = v)}
            {select_input(
                profile,
                "industry",
                "Industry",
                "Select an industry",
                &INDUSTRY_OPTIONS,
                |p| p.industry.clone(),
                |p, v| p.industry = v,
            )}
            {select_input(
                profile,
                "company-size",
                "Company size",
                "Select company size",
                &COMPANY_SIZE_OPTIONS,
                |p| p.company_size.clone(),
                |p, v| p.company_size = v,
            )}
            {text_input(profile, "founded-year", "Founded", |p| p.founded_year.clone(), |p, v| p.founded_year = v)}
            {text_input(profile, "company-website", "Website", |p| p.company_website.clone(), |p, v| p.company_website = v)}
            {text_input(profile, "company-location", "Location", |p| p.company_location.clone(), |p, v| p.company_location = v)}
            {text_area(
                profile,
                "company-description",
                "About the company",
                |p| p.company_description.clone(),
                |p, v| p.company_description = v,
            )}
        </fieldset>
        <fieldset class="profile-form__section">
            <legend>"Contact"</legend>
            {text_input(profile, "contact-name", "Name", |p| p.contact_name.clone(), |p, v| p.contact_name = v)}
            {text_input(profile, "contact-title", "Job title", |p| p.contact_title.clone(), |p, v| p.contact_title = v)}
            {text_input(profile, "contact-email", "Email", |p| p.contact_email.clone(), |p, v| p.contact_email = v)}
            {text_input(profile, "contact-phone", "Phone", |p| p.contact_phone.clone(), |p, v| p.contact_phone = v)}
        </fieldset>
        <fieldset class="profile-form__section">
            <legend>"Social"</legend>
            {text_input(profile, "linkedin-url", "LinkedIn", |p| p.linkedin_url.clone(), |p, v| p.linkedin_url = v)}
            {text_input(profile, "twitter-url", "Twitter", |p| p.twitter_url.clone(), |p, v| p.twitter_url = v)}
            {text_input(profile, "facebook-url", "Facebook", |p| p.facebook_url.clone(), |p, v| p.facebook_url = v)}
        </fieldset>
    }
}

/// Role-specific profile form with submit handling.
#[component]
fn ProfileForm() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let role = form_role(&session.snapshot());
    let seeker = RwSignal::new(JobSeekerProfile::default());
    let employer = RwSignal::new(EmployerProfile::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let update = match role {
            UserType::JobSeeker => ProfileUpdate::JobSeeker(seeker.get()),
            UserType::Employer => ProfileUpdate::Employer(employer.get()),
        };
        submit(&config, update, error, busy, navigate.clone());
    };

    let fields = match role {
        UserType::JobSeeker => job_seeker_fields(seeker).into_any(),
        UserType::Employer => employer_fields(employer).into_any(),
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <Show when=move || !error.get().is_empty()>
                <p class="auth-message auth-message--error">{move || error.get()}</p>
            </Show>
            {fields}
            <button class="button button--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save profile" }}
            </button>
        </form>
    }
}

fn submit<F>(config: &ClientConfig, update: ProfileUpdate, error: RwSignal<String>, busy: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    {
        let resolver = crate::state::session::web_resolver(config);
        leptos::task::spawn_local(async move {
            match careerconnect::account::complete_profile(&resolver, &update).await {
                Ok(intent) => crate::util::auth::follow(&navigate, &intent),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, update, error, navigate);
        busy.set(false);
    }
}

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    view! {
        <section class="page complete-profile">
            <h1>"Complete your profile"</h1>
            <p>
                {move || display_name(&session.get()).unwrap_or_default()}
                ", finish your profile to unlock the dashboard, job posting and applications."
            </p>
            <ProfileForm/>
        </section>
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    view! {
        <section class="page complete-profile">
            <h1>"Edit profile"</h1>
            <ProfileForm/>
        </section>
    }
}

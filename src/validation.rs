//! Client-side form checks for sign-in, sign-up and profile completion.
//!
//! Failures are reported inline and never reach the backend. The profile
//! check requires exactly the fields the backend needs before it reports a
//! profile as complete, so a saved profile always clears the profile gate.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::types::{EmployerProfile, JobSeekerProfile, LoginRequest, ProfileUpdate, RegisterRequest, UserType};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_WEAK: &str = "Password does not meet requirements";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must agree to the terms and conditions";
pub const PROFILE_FIELDS_REQUIRED: &str = "Please fill in all required fields";
pub const SKILL_REQUIRED: &str = "Please add at least one skill";

const MIN_PASSWORD_CHARS: usize = 8;

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Check the sign-in form and build the login request.
///
/// # Errors
///
/// Returns the inline message to show when a field is missing or malformed.
pub fn validate_sign_in(form: &SignInForm) -> Result<LoginRequest, &'static str> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(LoginRequest { email: email.to_owned(), password: form.password.clone() })
}

/// Per-rule password policy status, shown as a live checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordRequirements {
    #[must_use]
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_CHARS,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number && self.special
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: UserType,
    pub agree_to_terms: bool,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            user_type: UserType::JobSeeker,
            agree_to_terms: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignUpField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    AgreeToTerms,
}

/// Inline sign-up errors keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    fields: BTreeMap<SignUpField, &'static str>,
}

impl SignUpErrors {
    #[must_use]
    pub fn get(&self, field: SignUpField) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Drop the error for `field` once the user edits it.
    pub fn clear(&mut self, field: SignUpField) {
        self.fields.remove(&field);
    }

    fn insert(&mut self, field: SignUpField, message: &'static str) {
        self.fields.insert(field, message);
    }
}

/// Check the sign-up form and build the registration request.
///
/// # Errors
///
/// Returns every failing field with its inline message.
pub fn validate_sign_up(form: &SignUpForm) -> Result<RegisterRequest, SignUpErrors> {
    let mut errors = SignUpErrors::default();
    let full_name = form.full_name.trim();
    let email = form.email.trim();

    if full_name.is_empty() {
        errors.insert(SignUpField::FullName, FULL_NAME_REQUIRED);
    }

    if email.is_empty() {
        errors.insert(SignUpField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(SignUpField::Email, INVALID_EMAIL);
    }

    if form.password.is_empty() {
        errors.insert(SignUpField::Password, PASSWORD_REQUIRED);
    } else if !PasswordRequirements::check(&form.password).is_satisfied() {
        errors.insert(SignUpField::Password, PASSWORD_WEAK);
    }

    if form.password != form.confirm_password {
        errors.insert(SignUpField::ConfirmPassword, PASSWORD_MISMATCH);
    }

    if !form.agree_to_terms {
        errors.insert(SignUpField::AgreeToTerms, TERMS_REQUIRED);
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        full_name: full_name.to_owned(),
        user_type: form.user_type,
    })
}

fn trimmed(value: &str) -> String {
    value.trim().to_owned()
}

fn trimmed_list(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_owned());
        }
    }
    out
}

fn clean_job_seeker(p: &JobSeekerProfile) -> JobSeekerProfile {
    JobSeekerProfile {
        title: trimmed(&p.title),
        phone: trimmed(&p.phone),
        location: trimmed(&p.location),
        bio: trimmed(&p.bio),
        skills: trimmed_list(&p.skills),
        job_types: trimmed_list(&p.job_types),
        locations: trimmed_list(&p.locations),
        industries: trimmed_list(&p.industries),
        min_salary: trimmed(&p.min_salary),
        availability: p.availability.clone(),
        remote_preference: p.remote_preference.clone(),
    }
}

fn clean_employer(p: &EmployerProfile) -> EmployerProfile {
    EmployerProfile {
        company_name: trimmed(&p.company_name),
        industry: trimmed(&p.industry),
        company_size: trimmed(&p.company_size),
        founded_year: trimmed(&p.founded_year),
        company_website: trimmed(&p.company_website),
        company_location: trimmed(&p.company_location),
        company_description: trimmed(&p.company_description),
        contact_name: trimmed(&p.contact_name),
        contact_title: trimmed(&p.contact_title),
        contact_email: trimmed(&p.contact_email),
        contact_phone: trimmed(&p.contact_phone),
        linkedin_url: trimmed(&p.linkedin_url),
        twitter_url: trimmed(&p.twitter_url),
        facebook_url: trimmed(&p.facebook_url),
    }
}

/// Check the profile form and build the trimmed update.
///
/// Job seekers need a title, phone, location, bio and at least one skill.
/// Employers need a company name, industry, location and description.
///
/// # Errors
///
/// Returns the inline message for the first missing requirement.
pub fn validate_profile(update: &ProfileUpdate) -> Result<ProfileUpdate, &'static str> {
    match update {
        ProfileUpdate::JobSeeker(p) => {
            let p = clean_job_seeker(p);
            if [&p.title, &p.phone, &p.location, &p.bio].iter().any(|f| f.is_empty()) {
                return Err(PROFILE_FIELDS_REQUIRED);
            }
            if p.skills.is_empty() {
                return Err(SKILL_REQUIRED);
            }
            Ok(ProfileUpdate::JobSeeker(p))
        }
        ProfileUpdate::Employer(p) => {
            let p = clean_employer(p);
            let required = [&p.company_name, &p.industry, &p.company_location, &p.company_description];
            if required.iter().any(|f| f.is_empty()) {
                return Err(PROFILE_FIELDS_REQUIRED);
            }
            if !p.contact_email.is_empty() && !is_valid_email(&p.contact_email) {
                return Err(INVALID_EMAIL);
            }
            Ok(ProfileUpdate::Employer(p))
        }
    }
}

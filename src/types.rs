//! Wire DTOs for the CareerConnect REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Extra fields the backend adds later are ignored on decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role chosen at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "jobSeeker")]
    JobSeeker,
    #[serde(rename = "employer")]
    Employer,
}

impl UserType {
    /// Wire spelling of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobSeeker => "jobSeeker",
            Self::Employer => "employer",
        }
    }
}

/// An authenticated user as returned by `/api/auth/status` and `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user identifier.
    pub id: i64,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Account role.
    pub user_type: UserType,
}

impl User {
    /// First character of the display name, used for the avatar badge.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.full_name.chars().next()
    }
}

/// Body of `GET /api/auth/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: UserType,
}

/// Success body of `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Error body shared by all backend endpoints: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Result of probing `GET /api/profile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileProbe {
    /// 2xx: the profile record exists.
    Present,
    /// 404: no profile (or an incomplete one) for this user.
    Absent,
}

/// Job seeker fields of `POST /api/profile`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobSeekerProfile {
    pub title: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub job_types: Vec<String>,
    pub locations: Vec<String>,
    pub industries: Vec<String>,
    pub min_salary: String,
    pub availability: String,
    pub remote_preference: String,
}

impl Default for JobSeekerProfile {
    fn default() -> Self {
        Self {
            title: String::new(),
            phone: String::new(),
            location: String::new(),
            bio: String::new(),
            skills: Vec::new(),
            job_types: Vec::new(),
            locations: Vec::new(),
            industries: Vec::new(),
            min_salary: String::new(),
            availability: "immediately".to_owned(),
            remote_preference: "hybrid".to_owned(),
        }
    }
}

/// Employer fields of `POST /api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployerProfile {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub founded_year: String,
    pub company_website: String,
    pub company_location: String,
    pub company_description: String,
    pub contact_name: String,
    pub contact_title: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub facebook_url: String,
}

/// Body of `POST /api/profile`.
///
/// The backend reads it as form fields, not JSON. List fields travel as
/// JSON-encoded arrays inside a single form value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileUpdate {
    JobSeeker(JobSeekerProfile),
    Employer(EmployerProfile),
}

impl ProfileUpdate {
    /// Empty profile for an account of `role`.
    #[must_use]
    pub fn for_role(role: UserType) -> Self {
        match role {
            UserType::JobSeeker => Self::JobSeeker(JobSeekerProfile::default()),
            UserType::Employer => Self::Employer(EmployerProfile::default()),
        }
    }

    #[must_use]
    pub fn user_type(&self) -> UserType {
        match self {
            Self::JobSeeker(_) => UserType::JobSeeker,
            Self::Employer(_) => UserType::Employer,
        }
    }

    /// Ordered `name=value` pairs for the form-encoded request body.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("userType", self.user_type().as_str().to_owned())];
        match self {
            Self::JobSeeker(p) => fields.extend([
                ("title", p.title.clone()),
                ("phone", p.phone.clone()),
                ("location", p.location.clone()),
                ("bio", p.bio.clone()),
                ("skills", json_list(&p.skills)),
                ("jobTypes", json_list(&p.job_types)),
                ("locations", json_list(&p.locations)),
                ("industries", json_list(&p.industries)),
                ("minSalary", p.min_salary.clone()),
                ("availability", p.availability.clone()),
                ("remotePreference", p.remote_preference.clone()),
            ]),
            Self::Employer(p) => fields.extend([
                ("companyName", p.company_name.clone()),
                ("industry", p.industry.clone()),
                ("companySize", p.company_size.clone()),
                ("foundedYear", p.founded_year.clone()),
                ("companyWebsite", p.company_website.clone()),
                ("companyLocation", p.company_location.clone()),
                ("companyDescription", p.company_description.clone()),
                ("contactName", p.contact_name.clone()),
                ("contactTitle", p.contact_title.clone()),
                ("contactEmail", p.contact_email.clone()),
                ("contactPhone", p.contact_phone.clone()),
                ("linkedinUrl", p.linkedin_url.clone()),
                ("twitterUrl", p.twitter_url.clone()),
                ("facebookUrl", p.facebook_url.clone()),
            ]),
        }
        fields
    }
}

fn json_list(items: &[String]) -> String {
    serde_json::Value::from(items.to_vec()).to_string()
}

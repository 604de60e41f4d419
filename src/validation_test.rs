use super::*;

fn valid_sign_up() -> SignUpForm {
    SignUpForm {
        full_name: " Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Engine#1843".to_owned(),
        confirm_password: "Engine#1843".to_owned(),
        user_type: UserType::Employer,
        agree_to_terms: true,
    }
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_accepts_common_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
}

#[test]
fn email_rejects_malformed_shapes() {
    for bad in ["", "plain", "@b.co", "a@", "a@b", "a@.co", "a@b.", "a b@c.de", "a@b@c.de"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// validate_sign_in
// =============================================================

#[test]
fn sign_in_requires_both_fields() {
    let form = SignInForm { email: "a@b.co".to_owned(), password: String::new() };
    assert_eq!(validate_sign_in(&form), Err(FILL_ALL_FIELDS));
    let form = SignInForm { email: "   ".to_owned(), password: "x".to_owned() };
    assert_eq!(validate_sign_in(&form), Err(FILL_ALL_FIELDS));
}

#[test]
fn sign_in_checks_email_shape() {
    let form = SignInForm { email: "nope".to_owned(), password: "secret".to_owned() };
    assert_eq!(validate_sign_in(&form), Err(INVALID_EMAIL));
}

#[test]
fn sign_in_builds_trimmed_request() {
    let form = SignInForm { email: "  a@b.co ".to_owned(), password: " pw ".to_owned() };
    let request = validate_sign_in(&form).unwrap();
    assert_eq!(request.email, "a@b.co");
    assert_eq!(request.password, " pw ");
}

// =============================================================
// PasswordRequirements
// =============================================================

#[test]
fn password_requirements_report_each_rule() {
    let reqs = PasswordRequirements::check("abc");
    assert_eq!(
        reqs,
        PasswordRequirements { length: false, uppercase: false, lowercase: true, number: false, special: false }
    );
    assert!(!reqs.is_satisfied());
}

#[test]
fn password_requirements_satisfied_by_strong_password() {
    assert!(PasswordRequirements::check("Engine#1843").is_satisfied());
}

#[test]
fn password_special_includes_space_and_non_ascii() {
    assert!(PasswordRequirements::check("a b").special);
    assert!(PasswordRequirements::check("café").special);
}

// =============================================================
// validate_sign_up
// =============================================================

#[test]
fn sign_up_valid_form_builds_request() {
    let request = validate_sign_up(&valid_sign_up()).unwrap();
    assert_eq!(request.full_name, "Ada Lovelace");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.user_type, UserType::Employer);
}

#[test]
fn sign_up_empty_form_reports_every_field() {
    let errors = validate_sign_up(&SignUpForm::default()).unwrap_err();
    assert_eq!(errors.get(SignUpField::FullName), Some(FULL_NAME_REQUIRED));
    assert_eq!(errors.get(SignUpField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(SignUpField::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(errors.get(SignUpField::ConfirmPassword), None);
    assert_eq!(errors.get(SignUpField::AgreeToTerms), Some(TERMS_REQUIRED));
    assert_eq!(errors.len(), 4);
}

#[test]
fn sign_up_weak_password_and_mismatch() {
    let mut form = valid_sign_up();
    form.password = "weakpass".to_owned();
    form.confirm_password = "weakpas".to_owned();
    let errors = validate_sign_up(&form).unwrap_err();
    assert_eq!(errors.get(SignUpField::Password), Some(PASSWORD_WEAK));
    assert_eq!(errors.get(SignUpField::ConfirmPassword), Some(PASSWORD_MISMATCH));
}

#[test]
fn sign_up_invalid_email() {
    let mut form = valid_sign_up();
    form.email = "ada@".to_owned();
    let errors = validate_sign_up(&form).unwrap_err();
    assert_eq!(errors.get(SignUpField::Email), Some(INVALID_EMAIL));
    assert_eq!(errors.len(), 1);
}

#[test]
fn sign_up_errors_clear_per_field() {
    let mut errors = validate_sign_up(&SignUpForm::default()).unwrap_err();
    errors.clear(SignUpField::FullName);
    assert_eq!(errors.get(SignUpField::FullName), None);
    assert_eq!(errors.len(), 3);
}

// =============================================================
// validate_profile
// =============================================================

fn seeker_profile() -> JobSeekerProfile {
    JobSeekerProfile {
        title: " Data analyst ".to_owned(),
        phone: "555-0100".to_owned(),
        location: "Leeds".to_owned(),
        bio: "Numbers person.".to_owned(),
        skills: vec!["SQL".to_owned(), " SQL ".to_owned(), String::new(), "Python".to_owned()],
        ..JobSeekerProfile::default()
    }
}

fn employer_profile() -> EmployerProfile {
    EmployerProfile {
        company_name: "Acme".to_owned(),
        industry: "Technology".to_owned(),
        company_location: "Remote".to_owned(),
        company_description: "We build things.".to_owned(),
        ..EmployerProfile::default()
    }
}

#[test]
fn profile_job_seeker_is_trimmed_and_deduplicated() {
    let Ok(ProfileUpdate::JobSeeker(p)) = validate_profile(&ProfileUpdate::JobSeeker(seeker_profile())) else {
        panic!("expected a valid job seeker profile");
    };
    assert_eq!(p.title, "Data analyst");
    assert_eq!(p.skills, vec!["SQL".to_owned(), "Python".to_owned()]);
}

#[test]
fn profile_job_seeker_requires_core_fields() {
    let blankers: [(&str, fn(&mut JobSeekerProfile)); 4] = [
        ("title", |p| p.title = "  ".to_owned()),
        ("phone", |p| p.phone.clear()),
        ("location", |p| p.location.clear()),
        ("bio", |p| p.bio.clear()),
    ];
    for (name, blank) in blankers {
        let mut p = seeker_profile();
        blank(&mut p);
        assert_eq!(
            validate_profile(&ProfileUpdate::JobSeeker(p)),
            Err(PROFILE_FIELDS_REQUIRED),
            "blank {name} should fail"
        );
    }
}

#[test]
fn profile_job_seeker_requires_a_skill() {
    let p = JobSeekerProfile { skills: vec!["   ".to_owned()], ..seeker_profile() };
    assert_eq!(validate_profile(&ProfileUpdate::JobSeeker(p)), Err(SKILL_REQUIRED));
}

#[test]
fn profile_employer_requires_company_fields() {
    assert!(validate_profile(&ProfileUpdate::Employer(employer_profile())).is_ok());

    let p = EmployerProfile { industry: " ".to_owned(), ..employer_profile() };
    assert_eq!(validate_profile(&ProfileUpdate::Employer(p)), Err(PROFILE_FIELDS_REQUIRED));
}

#[test]
fn profile_employer_contact_email_is_optional_but_checked() {
    let p = EmployerProfile { contact_email: "hr@acme".to_owned(), ..employer_profile() };
    assert_eq!(validate_profile(&ProfileUpdate::Employer(p)), Err(INVALID_EMAIL));

    let p = EmployerProfile { contact_email: "hr@acme.test".to_owned(), ..employer_profile() };
    assert!(validate_profile(&ProfileUpdate::Employer(p)).is_ok());
}

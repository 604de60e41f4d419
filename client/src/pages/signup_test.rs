use super::*;

#[test]
fn requirement_rows_follow_password_policy() {
    let rows = requirement_rows(PasswordRequirements::check("abcdefgh"));
    assert_eq!(rows[0], ("At least 8 characters", true));
    assert_eq!(rows[1], ("One uppercase letter", false));
    assert_eq!(rows[2], ("One lowercase letter", true));
    assert!(!rows[3].1);
    assert!(!rows[4].1);
}

#[test]
fn parse_user_type_defaults_to_job_seeker() {
    assert_eq!(parse_user_type("employer"), UserType::Employer);
    assert_eq!(parse_user_type("jobSeeker"), UserType::JobSeeker);
    assert_eq!(parse_user_type(""), UserType::JobSeeker);
}

#[test]
fn sign_in_link_carries_registered_flag() {
    assert_eq!(sign_in_after_registration(), "/signin?registered=true");
}

use super::*;

fn profile() -> MemberProfile {
    MemberProfile {
        user_id: 7,
        username: Some("ana".into()),
        email: Some("ana@example.com".into()),
        city: None,
        occupation: Some("  ".into()),
        social_platform: Some("Twitter".into()),
        social_url: None,
    }
}

#[test]
fn sections_list_personal_then_social() {
    let [personal, social] = profile_sections(&profile());
    assert_eq!(personal.0, "Personal Information");
    assert_eq!(personal.1[0], ("Username", "ana".to_owned()));
    assert_eq!(social.0, "Social Information");
    assert_eq!(social.1[0], ("Platform", "Twitter".to_owned()));
}

#[test]
fn blank_values_read_not_provided() {
    let [personal, social] = profile_sections(&profile());
    assert_eq!(personal.1[2], ("City", "Not provided".to_owned()));
    assert_eq!(personal.1[3], ("Occupation", "Not provided".to_owned()));
    assert_eq!(social.1[1], ("Profile URL", "Not provided".to_owned()));
}

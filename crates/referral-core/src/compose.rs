//! Referral-request email composer.

use crate::model::UserInfo;

pub const DEFAULT_TARGET_NAME: &str = "there";
pub const DEFAULT_TARGET_COMPANY: &str = "the company";
pub const DEFAULT_TARGET_ROLE: &str = "the role";
pub const DEFAULT_REASON: &str = "I'm passionate about this opportunity.";
pub const DEFAULT_YOUR_NAME: &str = "Your Name";

fn field_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

/// Render the referral email for `info`.
///
/// Pure and infallible: absent or empty fields are replaced by their
/// defaults, values are inserted verbatim.
#[must_use]
pub fn generate_referral_email(info: &UserInfo) -> String {
    let target_name = field_or(&info.target_name, DEFAULT_TARGET_NAME);
    let target_company = field_or(&info.target_company, DEFAULT_TARGET_COMPANY);
    let target_role = field_or(&info.target_role, DEFAULT_TARGET_ROLE);
    let reason = field_or(&info.reason, DEFAULT_REASON);
    let your_name = field_or(&info.your_name, DEFAULT_YOUR_NAME);

    format!(
        "
Subject: Request for Referral to {target_company}

Hi {target_name},

I hope you're doing well! I recently came across an exciting opportunity for a {target_role} role at {target_company} and immediately thought of reaching out to you.

Given your experience and connection with the company, I'd be incredibly grateful if you'd consider referring me for the role. {reason} is one of the main reasons I am interested in this role.

If you're open to it, I’d be happy to send over my resume and any other details you may need. Thanks in advance for considering this — I really appreciate your time and support.

Warm regards,\x20\x20
{your_name}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_scenario_contains_fields() {
        let email = generate_referral_email(&UserInfo::canned_scenario());
        for needle in [
            "Ravi",
            "Google",
            "Software Engineer",
            "Google's AI research and culture",
            "Pooja",
        ] {
            assert!(email.contains(needle), "missing {needle:?} in:\n{email}");
        }
        assert!(email.contains("Subject: Request for Referral to Google\n"));
        assert!(email.contains("Hi Ravi,\n"));
        assert!(email.ends_with("Warm regards,  \nPooja\n"));
    }

    #[test]
    fn test_all_defaults() {
        let email = generate_referral_email(&UserInfo::new());
        assert!(email.contains("Subject: Request for Referral to the company\n"));
        assert!(email.contains("Hi there,\n"));
        assert!(email.contains("opportunity for a the role role at the company"));
        assert!(email.contains("I'm passionate about this opportunity. is one of the main reasons"));
        assert!(email.ends_with("Warm regards,  \nYour Name\n"));
    }

    #[test]
    fn test_empty_field_is_defaulted() {
        let info = UserInfo::canned_scenario().with_target_name("");
        let email = generate_referral_email(&info);
        assert!(email.contains("Hi there,\n"));
    }

    #[test]
    fn test_single_missing_field_keeps_others() {
        let mut info = UserInfo::canned_scenario();
        info.target_role = None;
        let email = generate_referral_email(&info);
        assert!(email.contains("opportunity for a the role role at Google"));
        assert!(email.contains("Hi Ravi,"));
    }

    #[test]
    fn test_shared_context_not_rendered() {
        let with = UserInfo::canned_scenario();
        let mut without = with.clone();
        without.shared_context = None;
        assert_eq!(generate_referral_email(&with), generate_referral_email(&without));
        assert!(!generate_referral_email(&with).contains("GITAM"));
    }

    #[test]
    fn test_deterministic() {
        let info = UserInfo::canned_scenario();
        assert_eq!(generate_referral_email(&info), generate_referral_email(&info));
    }

    #[test]
    fn test_values_inserted_verbatim() {
        let info = UserInfo::new().with_target_company("{target_name} & <Co>\nLtd");
        let email = generate_referral_email(&info);
        assert!(email.contains("Referral to {target_name} & <Co>\nLtd"));
    }
}

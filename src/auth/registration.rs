use std::collections::HashMap;

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    EvUser,
    VehicleOwner,
    StationOwner,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::EvUser, UserRole::VehicleOwner, UserRole::StationOwner];

    pub fn title(self) -> &'static str {
        match self {
            UserRole::EvUser => "EV User",
            UserRole::VehicleOwner => "Vehicle Owner",
            UserRole::StationOwner => "Station Owner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            UserRole::EvUser => "Find charging stations and book slots",
            UserRole::VehicleOwner => "Manage your EV fleet and track usage",
            UserRole::StationOwner => "List and manage charging stations",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            UserRole::EvUser => "👤",
            UserRole::VehicleOwner => "🚗",
            UserRole::StationOwner => "🏢",
        }
    }
}

/// One named input of the registration form; error map keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Role,
    AgreeTerms,
}

pub type FieldErrors = HashMap<Field, String>;

/// The four steps of the signup flow. Success is terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    Role,
    Personal,
    Credentials,
    Success,
}

impl Stage {
    /// Next stage when the current one validates. Credentials hands off to the
    /// submit path instead, so it maps to itself here.
    pub fn next(self) -> Stage {
        match self {
            Stage::Role => Stage::Personal,
            Stage::Personal => Stage::Credentials,
            other => other,
        }
    }

    pub fn prev(self) -> Stage {
        match self {
            Stage::Personal => Stage::Role,
            Stage::Credentials => Stage::Personal,
            other => other,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            Stage::Role => 1,
            Stage::Personal => 2,
            Stage::Credentials => 3,
            Stage::Success => 4,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<UserRole>,
    pub agree_terms: bool,
}

/// local@domain.tld where each run is non-empty and whitespace-free.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, rest)) = email.split_once('@') else {
        return false;
    };
    let Some(dot) = rest.rfind('.') else {
        return false;
    };
    let (domain, tld) = (&rest[..dot], &rest[dot + 1..]);
    let run = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    run(local) && run(domain) && run(tld)
}

/// Optional leading `+`, then at least ten characters of digits, spaces and
/// hyphens.
pub fn is_valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    rest.len() >= 10 && rest.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

fn has_lowercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(s: &str) -> bool {
    s.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// 0-5 complexity score used only for the strength meter.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if has_lowercase(password) {
        score += 1;
    }
    if has_uppercase(password) {
        score += 1;
    }
    if has_digit(password) {
        score += 1;
    }
    if has_symbol(password) {
        score += 1;
    }
    score
}

pub fn strength_label(score: u8) -> Option<&'static str> {
    match score {
        1 => Some("Very Weak"),
        2 => Some("Weak"),
        3 => Some("Fair"),
        4 => Some("Good"),
        5 => Some("Strong"),
        _ => None,
    }
}

/// CSS tier for the filled meter segments.
pub fn strength_tier(score: u8) -> Option<&'static str> {
    match score {
        1 => Some("very-weak"),
        2 => Some("weak"),
        3 => Some("fair"),
        4 => Some("good"),
        5 => Some("strong"),
        _ => None,
    }
}

/// Runs every rule for `stage` against the form and returns all failures at
/// once. The result replaces the caller's error map in full.
pub fn validate_stage(stage: Stage, form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match stage {
        Stage::Role => {
            if form.role.is_none() {
                errors.insert(Field::Role, "Please select a role".to_string());
            }
        }
        Stage::Personal => {
            if form.full_name.trim().is_empty() {
                errors.insert(Field::FullName, "Full name is required".to_string());
            }
            if form.email.is_empty() {
                errors.insert(Field::Email, "Email is required".to_string());
            } else if !is_valid_email(&form.email) {
                errors.insert(Field::Email, "Please enter a valid email".to_string());
            }
            if form.phone.is_empty() {
                errors.insert(Field::Phone, "Phone number is required".to_string());
            } else if !is_valid_phone(&form.phone) {
                errors.insert(Field::Phone, "Please enter a valid phone number".to_string());
            }
        }
        Stage::Credentials => {
            if form.password.is_empty() {
                errors.insert(Field::Password, "Password is required".to_string());
            } else if form.password.chars().count() < 8 {
                errors.insert(
                    Field::Password,
                    "Password must be at least 8 characters".to_string(),
                );
            } else if !(has_lowercase(&form.password)
                && has_uppercase(&form.password)
                && has_digit(&form.password))
            {
                errors.insert(
                    Field::Password,
                    "Password must contain uppercase, lowercase, and number".to_string(),
                );
            }
            if form.password != form.confirm_password {
                errors.insert(Field::ConfirmPassword, "Passwords do not match".to_string());
            }
            if !form.agree_terms {
                errors.insert(Field::AgreeTerms, "You must agree to the terms".to_string());
            }
        }
        Stage::Success => {}
    }

    errors
}

/// Gate for the Continue button: advances only when the current stage
/// validates cleanly, otherwise stays put with the failures.
pub fn try_advance(stage: Stage, form: &RegistrationForm) -> (Stage, FieldErrors) {
    let errors = validate_stage(stage, form);
    let next = if errors.is_empty() { stage.next() } else { stage };
    (next, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_ok() -> RegistrationForm {
        RegistrationForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "+1 555-123-4567".to_string(),
            role: Some(UserRole::EvUser),
            ..RegistrationForm::default()
        }
    }

    #[test]
    fn role_unset_blocks_advance() {
        let form = RegistrationForm::default();
        let errors = validate_stage(Stage::Role, &form);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::Role));

        let (stage, _) = try_advance(Stage::Role, &form);
        assert_eq!(stage, Stage::Role);
    }

    #[test]
    fn any_role_advances_to_personal() {
        for role in UserRole::ALL {
            let form = RegistrationForm {
                role: Some(role),
                ..RegistrationForm::default()
            };
            let (stage, errors) = try_advance(Stage::Role, &form);
            assert!(errors.is_empty());
            assert_eq!(stage, Stage::Personal);
        }
    }

    #[test]
    fn personal_reports_all_failures_at_once() {
        let form = RegistrationForm {
            full_name: String::new(),
            email: "bad".to_string(),
            phone: "123".to_string(),
            ..RegistrationForm::default()
        };
        let errors = validate_stage(Stage::Personal, &form);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(&Field::FullName));
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Phone));
    }

    #[test]
    fn personal_passes_with_valid_fields() {
        assert!(validate_stage(Stage::Personal, &personal_ok()).is_empty());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let form = RegistrationForm {
            full_name: "   ".to_string(),
            ..personal_ok()
        };
        let errors = validate_stage(Stage::Personal, &form);
        assert_eq!(
            errors.get(&Field::FullName).map(String::as_str),
            Some("Full name is required")
        );
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("a@b.co.uk"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn phone_shape() {
        assert!(is_valid_phone("+1 555-123-4567"));
        assert!(is_valid_phone("0123456789"));
        assert!(is_valid_phone("012 345 67 89"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("12345abcde"));
        assert!(!is_valid_phone("+123456789"));
    }

    #[test]
    fn strength_scores() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 1);
        assert_eq!(password_strength("abcABC12"), 4);
        assert_eq!(password_strength("abcABC12!"), 5);
    }

    #[test]
    fn strength_labels_and_tiers() {
        assert_eq!(strength_label(0), None);
        assert_eq!(strength_label(1), Some("Very Weak"));
        assert_eq!(strength_label(5), Some("Strong"));
        assert_eq!(strength_tier(0), None);
        assert_eq!(strength_tier(3), Some("fair"));
        assert_eq!(strength_tier(6), None);
    }

    #[test]
    fn confirm_password_must_match_exactly() {
        let mut form = RegistrationForm {
            password: "Abcdefg1".to_string(),
            confirm_password: "Abcdefg2".to_string(),
            agree_terms: true,
            ..RegistrationForm::default()
        };
        let errors = validate_stage(Stage::Credentials, &form);
        assert!(errors.contains_key(&Field::ConfirmPassword));

        form.confirm_password = "Abcdefg1".to_string();
        let errors = validate_stage(Stage::Credentials, &form);
        assert!(!errors.contains_key(&Field::ConfirmPassword));
        assert!(errors.is_empty());
    }

    #[test]
    fn credentials_requires_terms() {
        let form = RegistrationForm {
            password: "Abcdefg1".to_string(),
            confirm_password: "Abcdefg1".to_string(),
            agree_terms: false,
            ..RegistrationForm::default()
        };
        let errors = validate_stage(Stage::Credentials, &form);
        assert_eq!(
            errors.get(&Field::AgreeTerms).map(String::as_str),
            Some("You must agree to the terms")
        );
    }

    #[test]
    fn weak_password_messages() {
        let mut form = RegistrationForm {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            agree_terms: true,
            ..RegistrationForm::default()
        };
        let errors = validate_stage(Stage::Credentials, &form);
        assert_eq!(
            errors.get(&Field::Password).map(String::as_str),
            Some("Password must be at least 8 characters")
        );

        form.password = "alllowercase1".to_string();
        form.confirm_password = form.password.clone();
        let errors = validate_stage(Stage::Credentials, &form);
        assert_eq!(
            errors.get(&Field::Password).map(String::as_str),
            Some("Password must contain uppercase, lowercase, and number")
        );
    }

    #[test]
    fn retreat_stops_at_role() {
        let mut stage = Stage::Credentials;
        for _ in 0..5 {
            stage = stage.prev();
        }
        assert_eq!(stage, Stage::Role);
    }

    #[test]
    fn success_is_terminal() {
        assert_eq!(Stage::Success.next(), Stage::Success);
        assert_eq!(Stage::Success.prev(), Stage::Success);
    }

    #[test]
    fn advance_does_not_skip_submit() {
        // Continue never reaches Success; only a successful submission does.
        let form = RegistrationForm {
            password: "Abcdefg1".to_string(),
            confirm_password: "Abcdefg1".to_string(),
            agree_terms: true,
            ..personal_ok()
        };
        let (stage, errors) = try_advance(Stage::Credentials, &form);
        assert!(errors.is_empty());
        assert_eq!(stage, Stage::Credentials);
    }

    #[test]
    fn happy_path_reaches_credentials() {
        let form = RegistrationForm {
            password: "Abcdefg1".to_string(),
            confirm_password: "Abcdefg1".to_string(),
            agree_terms: true,
            ..personal_ok()
        };
        let (stage, errors) = try_advance(Stage::Role, &form);
        assert!(errors.is_empty());
        let (stage, errors) = try_advance(stage, &form);
        assert!(errors.is_empty());
        assert_eq!(stage, Stage::Credentials);
        assert!(validate_stage(stage, &form).is_empty());
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::EvUser).unwrap(),
            "\"ev_user\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::StationOwner).unwrap(),
            "\"station_owner\""
        );
    }
}

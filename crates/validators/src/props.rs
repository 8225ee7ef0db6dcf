use models::{PropIssue, ValidationResult};

/// Check a required string prop: it must be supplied and non-blank.
/// Violations are recorded on the result; rendering is never affected.
pub fn require_string(
    component: &str,
    prop: &str,
    value: Option<&str>,
    result: &mut ValidationResult,
) {
    match value {
        None => {
            result.add_issue(PropIssue::new(
                component,
                prop,
                "is required but was not supplied".to_string(),
            ));
        }
        Some(s) if s.trim().is_empty() => {
            result.add_issue(PropIssue::new(
                component,
                prop,
                "is required but was blank".to_string(),
            ));
        }
        Some(_) => {}
    }
}

/// Check a label prop that has a default: it may be omitted by the
/// caller, but a supplied label must not be blank.
pub fn check_label(component: &str, prop: &str, value: &str, result: &mut ValidationResult) {
    if value.trim().is_empty() {
        result.add_issue(PropIssue::new(
            component,
            prop,
            "must not be blank".to_string(),
        ));
    }
}

/// The Toggle prop schema: `aria-label` is required with no default,
/// the two state labels fall back to defaults but must not be blanked
/// out by the caller.
pub fn validate_toggle_props(
    aria_label: Option<&str>,
    on: &str,
    off: &str,
    result: &mut ValidationResult,
) {
    require_string("Toggle", "aria-label", aria_label, result);
    check_label("Toggle", "on", on, result);
    check_label("Toggle", "off", off, result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_string_flags_missing_value() {
        let mut result = ValidationResult::new();
        require_string("Toggle", "aria-label", None, &mut result);
        assert!(!result.is_valid);
        assert_eq!(result.issues[0].prop, "aria-label");
        assert!(result.issues[0].message.contains("not supplied"));
    }

    #[test]
    fn require_string_flags_blank_value() {
        let mut result = ValidationResult::new();
        require_string("Toggle", "aria-label", Some("   "), &mut result);
        assert!(!result.is_valid);
        assert!(result.issues[0].message.contains("blank"));
    }

    #[test]
    fn require_string_accepts_real_value() {
        let mut result = ValidationResult::new();
        require_string("Toggle", "aria-label", Some("power switch"), &mut result);
        assert!(result.is_valid);
    }

    #[test]
    fn check_label_only_rejects_blank() {
        let mut result = ValidationResult::new();
        check_label("Toggle", "on", "enabled", &mut result);
        assert!(result.is_valid);
        check_label("Toggle", "off", "", &mut result);
        assert!(!result.is_valid);
        assert_eq!(result.issues[0].prop, "off");
    }

    #[test]
    fn toggle_schema_passes_with_full_props() {
        let mut result = ValidationResult::new();
        validate_toggle_props(Some("power switch"), "on", "off", &mut result);
        assert!(result.is_valid);
    }

    #[test]
    fn toggle_schema_collects_every_violation() {
        let mut result = ValidationResult::new();
        validate_toggle_props(None, "", "", &mut result);
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 3);
        let props: Vec<&str> = result.issues.iter().map(|i| i.prop.as_str()).collect();
        assert_eq!(props, vec!["aria-label", "on", "off"]);
    }
}

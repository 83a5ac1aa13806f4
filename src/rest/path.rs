//! URI template rendering for REST resources.
//!
//! Every resource context addresses exactly one remote resource through a
//! fixed URI template with named placeholders, e.g.
//! `Accounts/{account_sid}/Applications/{sid}.json`. A context renders its
//! template once at construction time by substituting its path solution:
//! the ordered set of identifiers that locate the resource.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::rest::render_template;
//!
//! let uri = render_template(
//!     "Accounts/{account_sid}/Applications/{sid}.json",
//!     &[("account_sid", "AC123"), ("sid", "AP456")],
//! );
//! assert_eq!(uri, "Accounts/AC123/Applications/AP456.json");
//! ```

/// Renders a URI template by substituting `{name}` placeholders.
///
/// Each `(name, value)` pair replaces every occurrence of `{name}` in the
/// template. Placeholders without a matching pair are left untouched so the
/// caller (or a test) can detect an incomplete solution with
/// [`has_unresolved_placeholders`].
#[must_use]
pub fn render_template(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        result = result.replace(&placeholder, value);
    }
    result
}

/// Returns `true` if the rendered URI still contains `{name}` placeholders.
#[must_use]
pub fn has_unresolved_placeholders(uri: &str) -> bool {
    uri.contains('{') || uri.contains('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_placeholder() {
        let uri = render_template("Accounts/{sid}.json", &[("sid", "AC123")]);
        assert_eq!(uri, "Accounts/AC123.json");
    }

    #[test]
    fn test_render_multiple_placeholders() {
        let uri = render_template(
            "Accounts/{account_sid}/Applications/{sid}.json",
            &[("account_sid", "AC123"), ("sid", "AP456")],
        );
        assert_eq!(uri, "Accounts/AC123/Applications/AP456.json");
        assert!(!has_unresolved_placeholders(&uri));
    }

    #[test]
    fn test_render_substitutes_each_placeholder_exactly_once() {
        let uri = render_template(
            "Accounts/{account_sid}/Applications/{sid}.json",
            &[("account_sid", "AC1"), ("sid", "AP2")],
        );
        assert_eq!(uri.matches("AC1").count(), 1);
        assert_eq!(uri.matches("AP2").count(), 1);
    }

    #[test]
    fn test_missing_param_leaves_placeholder() {
        let uri = render_template(
            "Accounts/{account_sid}/Applications/{sid}.json",
            &[("account_sid", "AC123")],
        );
        assert!(has_unresolved_placeholders(&uri));
        assert!(uri.contains("{sid}"));
    }

    #[test]
    fn test_unknown_param_is_ignored() {
        let uri = render_template("Accounts/{sid}.json", &[("sid", "AC1"), ("other", "X")]);
        assert_eq!(uri, "Accounts/AC1.json");
    }
}

//! Delete outcome: what the backend asks the page to do after a delete.

use serde::Serialize;
use serde_json::Value;

/// Body of a successful device or user delete.
///
/// Both fields are optional on the wire. A blank or non-JSON body means
/// "stay here": the delete itself already succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub redirect: bool,
    pub redirect_url: Option<String>,
}

impl DeleteOutcome {
    /// Read a response body leniently.
    ///
    /// `redirect` follows JavaScript truthiness, so `1` and `"yes"` count as
    /// a redirect request. `redirect_url` is only taken when it is a string.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };
        Self {
            redirect: map.get("redirect").is_some_and(is_truthy),
            redirect_url: map
                .get("redirect_url")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }

    /// Where to navigate, if the backend asked for a redirect.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        if self.redirect {
            self.redirect_url.as_deref()
        } else {
            None
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_target_when_redirect_requested() {
        let outcome =
            DeleteOutcome::parse(r#"{"redirect": true, "redirect_url": "http://pi.local/"}"#);
        assert_eq!(outcome.redirect_target(), Some("http://pi.local/"));
    }

    #[test]
    fn should_ignore_url_when_redirect_is_false() {
        let outcome =
            DeleteOutcome::parse(r#"{"redirect": false, "redirect_url": "http://pi.local/"}"#);
        assert_eq!(outcome.redirect_target(), None);
    }

    #[test]
    fn should_redirect_when_flag_is_truthy_number() {
        let outcome = DeleteOutcome::parse(r#"{"redirect": 1, "redirect_url": "/x"}"#);
        assert_eq!(outcome.redirect_target(), Some("/x"));
    }

    #[test]
    fn should_redirect_when_flag_is_non_empty_string() {
        let outcome = DeleteOutcome::parse(r#"{"redirect": "yes", "redirect_url": "/x"}"#);
        assert_eq!(outcome.redirect_target(), Some("/x"));
    }

    #[test]
    fn should_not_redirect_when_flag_is_falsy() {
        for flag in ["0", "\"\"", "null"] {
            let body = format!(r#"{{"redirect": {flag}, "redirect_url": "/x"}}"#);
            assert_eq!(DeleteOutcome::parse(&body).redirect_target(), None, "{flag}");
        }
    }

    #[test]
    fn should_ignore_url_when_not_a_string() {
        let outcome = DeleteOutcome::parse(r#"{"redirect": true, "redirect_url": 42}"#);
        assert!(outcome.redirect_target().is_none());
    }

    #[test]
    fn should_default_when_body_is_blank() {
        assert_eq!(DeleteOutcome::parse("  \n"), DeleteOutcome::default());
    }

    #[test]
    fn should_have_no_target_when_url_missing() {
        let outcome = DeleteOutcome::parse(r#"{"redirect": true}"#);
        assert!(outcome.redirect_target().is_none());
    }

    #[test]
    fn should_stay_when_body_is_not_json() {
        assert_eq!(DeleteOutcome::parse("<html>oops</html>"), DeleteOutcome::default());
        assert_eq!(DeleteOutcome::parse("deleted"), DeleteOutcome::default());
    }
}

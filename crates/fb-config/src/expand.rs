//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left alone. `field` names the config key in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("FB_TEST_OUTPUT_ROOT", "/srv/fizz");
        }
        let result = expand_env("${FB_TEST_OUTPUT_ROOT}/output", "paths.output_dir").unwrap();
        assert_eq!(result, "/srv/fizz/output");
        unsafe {
            std::env::remove_var("FB_TEST_OUTPUT_ROOT");
        }
    }

    #[test]
    fn test_expand_default_used_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("FB_TEST_UNSET_TEMPLATE");
        }
        let result =
            expand_env("${FB_TEST_UNSET_TEMPLATE:-template.html}", "paths.template").unwrap();
        assert_eq!(result, "template.html");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("FB_TEST_MISSING");
        }
        let err = expand_env("${FB_TEST_MISSING}", "paths.template").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FB_TEST_MISSING"));
        assert!(err.to_string().contains("paths.template"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("email/output", "f").unwrap(), "email/output");
        assert_eq!(expand_env("$HOME/x", "f").unwrap(), "$HOME/x");
    }
}

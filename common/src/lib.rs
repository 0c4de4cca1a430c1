//! Shared plumbing for the reporter and the placeholder server: environment
//! configuration, logging bootstrap and validation error formatting.

pub mod config;
pub mod logger;

use validator::ValidationErrors;

/// Flattens every field error message into a single `"; "`-separated line.
///
/// Fields are sorted by name so the output is stable across runs.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Credentials {
        #[validate(required(message = "token is required"))]
        token: Option<String>,
        #[validate(length(min = 1, message = "code must not be empty"))]
        code: String,
    }

    #[test]
    fn test_format_validation_errors_joins_messages() {
        let creds = Credentials {
            token: None,
            code: String::new(),
        };
        let errors = creds.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "code must not be empty; token is required"
        );
    }

    #[test]
    fn test_format_validation_errors_single_field() {
        let creds = Credentials {
            token: None,
            code: "abc".into(),
        };
        let errors = creds.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errors), "token is required");
    }
}

//! Unified error handling.
//!
//! Error variants are generated by a macro so that every variant carries a
//! stable error code and a type name next to its message.

use std::fmt;

/// Generates the error enum.
///
/// Produces:
/// - the enum definition
/// - `code()` returning the stable error code
/// - `error_type()` returning the type name
/// - `message()` returning the detail message
/// - a snake_case constructor per variant
macro_rules! define_kepswell_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum KepswellError {
            $($variant(String),)*
        }

        impl KepswellError {
            /// Stable error code
            pub fn code(&self) -> &'static str {
                match self {
                    $(KepswellError::$variant(_) => $code,)*
                }
            }

            /// Error type name
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(KepswellError::$variant(_) => $type_name,)*
                }
            }

            /// Error detail
            pub fn message(&self) -> &str {
                match self {
                    $(KepswellError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl KepswellError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        KepswellError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_kepswell_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    Authentication("E007", "Authentication Error"),
    Authorization("E008", "Authorization Error"),
    Conflict("E009", "Conflict"),
    NotConfigured("E010", "Not Configured"),
    NoData("E011", "No Data"),
    RankingInProgress("E012", "Ranking In Progress"),
}

impl KepswellError {
    /// Colored output for development logs
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Business precondition failures are never worth retrying.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            KepswellError::NotConfigured(_)
                | KepswellError::NoData(_)
                | KepswellError::Conflict(_)
                | KepswellError::RankingInProgress(_)
        )
    }
}

impl fmt::Display for KepswellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for KepswellError {}

impl From<sea_orm::DbErr> for KepswellError {
    fn from(err: sea_orm::DbErr) -> Self {
        KepswellError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for KepswellError {
    fn from(err: serde_json::Error) -> Self {
        KepswellError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KepswellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(KepswellError::database_config("test").code(), "E001");
        assert_eq!(KepswellError::validation("test").code(), "E004");
        assert_eq!(KepswellError::conflict("test").code(), "E009");
        assert_eq!(KepswellError::not_configured("test").code(), "E010");
        assert_eq!(KepswellError::no_data("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            KepswellError::ranking_in_progress("test").error_type(),
            "Ranking In Progress"
        );
        assert_eq!(
            KepswellError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = KepswellError::no_data("No appraisals for HOST_LIVE 0/2026");
        let formatted = err.format_simple();
        assert!(formatted.contains("No Data"));
        assert!(formatted.contains("HOST_LIVE"));
    }

    #[test]
    fn test_precondition_failures() {
        assert!(KepswellError::not_configured("x").is_precondition_failure());
        assert!(KepswellError::no_data("x").is_precondition_failure());
        assert!(!KepswellError::database_operation("x").is_precondition_failure());
    }
}

use std::process::ExitCode;

use thiserror::Error;

/// Exit code for usage, configuration and precondition failures
pub const EXIT_FATAL: u8 = 1;

/// Exit code for failures while preparing the MiXCR home or working directory
pub const EXIT_ENVIRONMENT: u8 = 2;

/// Exit code for a MiXCR invocation that could not start or did not succeed
pub const EXIT_UTILITY: u8 = 3;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} file at {:?} not found.", what, path)]
    FileNotFound {
        what: String,
        path: std::path::PathBuf,
    },

    #[error("File at {:?} is invalid{}.", path, Error::format_msg_as_detail(msg))]
    FileNotValid {
        path: std::path::PathBuf,
        msg: Option<String>,
    },

    #[error(
        "Utility '{}' failed on execute \'{}\'{}",
        utility,
        cmd,
        Error::format_msg_as_detail(msg)
    )]
    UtilityExecutionError {
        utility: String,
        cmd: String,
        msg: Option<String>,
    },

    #[error(
        "Failed trying to execute utility '{utility}'. Make sure the path is correct and you have execution permissions."
    )]
    UtilityNotExecutable { utility: String },

    #[error("Failed parsing {}{}", context, Error::format_msg_as_detail(msg))]
    ParseError {
        context: String,
        msg: Option<String>,
    },

    #[error("Failed to {} {:?}{}", action, path, Error::format_msg_as_detail(msg))]
    Environment {
        action: String,
        path: std::path::PathBuf,
        msg: Option<String>,
    },

    #[error("Could not determine the home directory of the current user")]
    HomeNotFound,
}

impl Error {
    #[cold]
    pub fn file_not_found<W: Into<String>, P: AsRef<std::path::Path>>(what: W, path: P) -> Self {
        Error::FileNotFound {
            what: what.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    #[cold]
    pub fn file_not_valid<P: AsRef<std::path::Path>, M: Into<String>>(
        path: P,
        msg: Option<M>,
    ) -> Self {
        Error::FileNotValid {
            path: path.as_ref().to_path_buf(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn utility_execution_error<U: Into<String>, C: Into<String>, M: Into<String>>(
        utility: U,
        cmd: C,
        msg: Option<M>,
    ) -> Self {
        Error::UtilityExecutionError {
            utility: utility.into(),
            cmd: cmd.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn utility_not_executable<U: Into<String>>(utility: U) -> Self {
        Error::UtilityNotExecutable {
            utility: utility.into(),
        }
    }

    #[cold]
    pub fn parse_error<C: Into<String>, M: Into<String>>(context: C, msg: Option<M>) -> Self {
        Error::ParseError {
            context: context.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn environment<A: Into<String>, P: AsRef<std::path::Path>>(
        action: A,
        path: P,
        source: &std::io::Error,
    ) -> Self {
        Error::Environment {
            action: action.into(),
            path: path.as_ref().to_path_buf(),
            msg: Some(source.to_string()),
        }
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }

    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::FileNotFound { .. }
            | Error::FileNotValid { .. }
            | Error::ParseError { .. }
            | Error::HomeNotFound => EXIT_FATAL,
            Error::Environment { .. } => EXIT_ENVIRONMENT,
            Error::UtilityExecutionError { .. } | Error::UtilityNotExecutable { .. } => {
                EXIT_UTILITY
            }
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(e: &Error) -> Self {
        ExitCode::from(e.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_tier() {
        assert_eq!(Error::file_not_found("Reads", "/no/such/read.fq").exit_code(), 1);
        assert_eq!(Error::parse_error("config", Some("bad")).exit_code(), 1);
        assert_eq!(Error::HomeNotFound.exit_code(), 1);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Error::environment("create directory", "/x", &io).exit_code(), 2);

        assert_eq!(Error::utility_not_executable("/opt/mixcr").exit_code(), 3);
        assert_eq!(
            Error::utility_execution_error("mixcr", "mixcr analyze", None::<String>).exit_code(),
            3
        );
    }

    #[test]
    fn test_message_names_path() {
        let e = Error::file_not_found("MiXCR", "/opt/missing/mixcr");
        let msg = e.to_string();
        assert!(msg.contains("/opt/missing/mixcr"));
        assert!(msg.starts_with("MiXCR"));
    }

    #[test]
    fn test_detail_formatting() {
        assert_eq!(Error::format_msg_as_detail(&None), "");
        assert_eq!(Error::format_msg_as_detail(&Some("x".into())), " (x)");
    }
}

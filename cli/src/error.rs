use gateway_client::{ConsoleError, RequestError};
use thiserror::Error;

/// Errors surfaced by `apigw` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Message(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<CliError>,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Prefix the error with what the command was doing
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Text printed after `Error:` when a command fails
    pub fn user_message(&self) -> String {
        match self {
            Self::Console(ConsoleError::Request(err)) | Self::Request(err) => describe_request(err),
            Self::Console(ConsoleError::ConfigNotFound { path }) => format!(
                "No configuration at {}. Run `apigw init` to create one",
                path.display()
            ),
            Self::Context { context, source } => format!("{context}: {}", source.user_message()),
            other => other.to_string(),
        }
    }
}

fn describe_request(err: &RequestError) -> String {
    match err.code {
        401 => "Login required. Log in and run the command again".to_string(),
        403 => format!("Permission denied: {}", err.message),
        0 => format!("Could not reach the management API: {}", err.message),
        code => format!("Request failed ({code}): {}", err.message),
    }
}

/// Attach command context to any error convertible into [`CliError`]
pub trait ResultExt<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let err: CliError = err.into();
            err.context(context())
        })
    }
}

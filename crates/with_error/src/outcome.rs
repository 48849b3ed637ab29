use crate::{Error, Messages};

/// The result of a wrapped computation: exactly one of `Success` or `Failure`.
///
/// `message` is whatever the caller supplied through [`Messages`] for the
/// variant that was produced.
#[derive(Debug)]
pub enum Outcome<T> {
    Success { data: T, message: Option<String> },
    Failure { error: Error, message: Option<String> },
}

impl<T> Outcome<T> {
    pub fn success(data: T, messages: &Messages) -> Self {
        Self::Success {
            data,
            message: messages.success_message.clone(),
        }
    }

    pub fn failure(error: Error, messages: &Messages) -> Self {
        Self::Failure {
            error,
            message: messages.error_message.clone(),
        }
    }

    pub(crate) fn settle(result: Result<T, Error>, messages: &Messages) -> Self {
        match result {
            Ok(data) => Self::success(data, messages),
            Err(error) => {
                log::debug!("computation failed: {error}");
                Self::failure(error, messages)
            }
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    pub fn into_error(self) -> Option<Error> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message.as_deref(),
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { error, .. } => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success { data, message } => Outcome::Success {
                data: f(data),
                message,
            },
            Self::Failure { error, message } => Outcome::Failure { error, message },
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Renders the outcome's message. Without a message, a failure renders its
/// error and a success renders `"success"`. This is display text only:
/// [`Outcome::message`] stays `None`.
impl<T> std::fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { message, .. } => f.write_str(message.as_deref().unwrap_or("success")),
            Self::Failure {
                message: Some(message),
                ..
            } => f.write_str(message),
            Self::Failure { error, .. } => write!(f, "{error}"),
        }
    }
}

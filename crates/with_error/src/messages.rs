/// Messages attached to the [`Outcome`](crate::Outcome) of a wrapped computation.
///
/// Either message may be left out. A missing message stays `None` on the
/// outcome.
#[non_exhaustive]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Messages {
    pub(crate) error_message: Option<String>,
    pub(crate) success_message: Option<String>,
}

impl Messages {
    pub const NONE: Self = Self {
        error_message: None,
        success_message: None,
    };

    pub const fn new() -> Self {
        Self::NONE
    }

    pub fn with_error_message(self, message: impl ToString) -> Self {
        Self {
            error_message: Some(message.to_string()),
            ..self
        }
    }

    pub fn with_success_message(self, message: impl ToString) -> Self {
        Self {
            success_message: Some(message.to_string()),
            ..self
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        for messages in [Messages::NONE, Messages::new(), Messages::default()] {
            assert_eq!(messages.error_message(), None);
            assert_eq!(messages.success_message(), None);
        }
    }

    #[test]
    fn messages_are_independent() {
        let messages = Messages::new().with_success_message("saved");
        assert_eq!(messages.success_message(), Some("saved"));
        assert_eq!(messages.error_message(), None);

        let messages = Messages::new().with_error_message("cannot save");
        assert_eq!(messages.success_message(), None);
        assert_eq!(messages.error_message(), Some("cannot save"));

        let messages = messages.with_success_message("saved");
        assert_eq!(messages.success_message(), Some("saved"));
        assert_eq!(messages.error_message(), Some("cannot save"));
    }

    #[test]
    fn empty_strings_are_kept() {
        let messages = Messages::new()
            .with_error_message("")
            .with_success_message("");
        assert_eq!(messages.error_message(), Some(""));
        assert_eq!(messages.success_message(), Some(""));
    }
}

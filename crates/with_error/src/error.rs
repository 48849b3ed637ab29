use std::any::Any;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The failure of a wrapped computation.
///
/// Whatever the computation failed with is normalized into this type: returned
/// errors are kept as they are (and can be recovered with
/// [`Error::downcast_ref`]), plain strings become a fresh error carrying that
/// string, and panic payloads become [`Error::Panicked`].
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    Raised { error: BoxError },
    Panicked { message: String },
}

impl Error {
    /// Normalizes an error returned by a computation.
    ///
    /// An `Error` produced by an inner wrap is unwrapped instead of being
    /// nested a second time.
    pub fn raised(error: impl Into<BoxError>) -> Self {
        let error: BoxError = error.into();
        match error.downcast::<Self>() {
            Ok(this) => *this,
            Err(error) => Self::Raised { error },
        }
    }

    /// Builds an error from any displayable value, e.g. a code a computation
    /// reports with `Err(404)`. The message is the value's `Display` text.
    pub fn thrown(value: impl std::fmt::Display) -> Self {
        Self::raised(value.to_string())
    }

    /// Normalizes the payload of a caught panic.
    ///
    /// Strings and primitive payloads (`panic_any(404)`) keep their text, any
    /// other payload is reported as `Box<dyn Any>`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(this) => return *this,
            Err(payload) => payload,
        };

        Self::Panicked {
            message: payload_message(&*payload).unwrap_or_else(|| String::from("Box<dyn Any>")),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Raised { error } => error.downcast_ref(),
            Self::Panicked { .. } => None,
        }
    }

    pub fn into_inner(self) -> Option<BoxError> {
        match self {
            Self::Raised { error } => Some(error),
            Self::Panicked { .. } => None,
        }
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<String> {
    macro_rules! to_string {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(value) = payload.downcast_ref::<$ty>() {
                    return Some(value.to_string());
                }
            )*
        };
    }

    to_string!(
        String, &'static str, Box<str>,
        i8, i16, i32, i64, i128, isize,
        u8, u16, u32, u64, u128, usize,
        f32, f64, bool, char,
    );

    None
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raised { error } => write!(f, "{error}"),
            Self::Panicked { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Raised { error } => Some(&**error),
            Self::Panicked { .. } => None,
        }
    }
}

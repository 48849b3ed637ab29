use crate::{BoxError, Error, Outcome};

/// A value produced by a computation that may have failed.
pub trait Fallible {
    type Data;

    fn into_result(self) -> Result<Self::Data, Error>;
}

impl<T, E> Fallible for Result<T, E>
where
    E: Into<BoxError>,
{
    type Data = T;

    #[inline]
    fn into_result(self) -> Result<Self::Data, Error> {
        self.map_err(Error::raised)
    }
}

// nested wraps flatten into the outer one
impl<T> Fallible for Outcome<T> {
    type Data = T;

    #[inline]
    fn into_result(self) -> Result<Self::Data, Error> {
        Outcome::into_result(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Messages;

    #[test]
    fn results() {
        assert_eq!(Ok::<_, &str>(1).into_result().ok(), Some(1));

        let error = Err::<(), _>("boom").into_result().unwrap_err();
        assert_eq!(error.message(), "boom");

        let error = Err::<(), _>(String::from("owned")).into_result().unwrap_err();
        assert_eq!(error.message(), "owned");

        let error = Err::<(), _>(std::fmt::Error).into_result().unwrap_err();
        assert!(error.downcast_ref::<std::fmt::Error>().is_some());
    }

    #[test]
    fn outcomes() {
        let outcome = Outcome::success(3, &Messages::NONE);
        assert_eq!(Fallible::into_result(outcome).ok(), Some(3));

        let outcome = Outcome::<()>::failure(Error::raised("inner"), &Messages::NONE);
        let error = Fallible::into_result(outcome).unwrap_err();
        assert_eq!(error.message(), "inner");
    }
}

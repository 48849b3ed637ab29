use std::{
    convert::Infallible,
    future::Future,
    panic::{self, AssertUnwindSafe},
};

use futures::{
    future::{self, Either},
    FutureExt as _,
};

use crate::{Error, Fallible, Messages, Outcome};

/// Runs `computation` and turns its result, or its panic, into an [`Outcome`].
///
/// A panic is captured after the installed panic hook has run, so the default
/// hook still prints it to stderr.
pub fn with_error<F, R>(computation: F, messages: &Messages) -> Outcome<R::Data>
where
    F: FnOnce() -> R,
    R: Fallible,
{
    let result = panic::catch_unwind(AssertUnwindSafe(computation))
        .map_err(Error::from_panic)
        .and_then(Fallible::into_result);

    Outcome::settle(result, messages)
}

/// Like [`with_error`], for computations that can only fail by panicking.
///
/// The installed panic hook still runs before the panic is captured.
pub fn with_value<F, T>(computation: F, messages: &Messages) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    with_error(|| Ok::<_, Infallible>(computation()), messages)
}

/// Runs `computation` and resolves to the [`Outcome`] of the future it returns.
///
/// `computation` is invoked right away, its future is only polled when the
/// returned future is. If invoking `computation` panics, the returned future
/// is already settled with that failure.
///
/// The returned future never panics on behalf of the computation: errors and
/// panics while polling are both captured in the outcome. The installed panic
/// hook still runs for those panics.
pub fn with_error_async<F, Fut, T>(
    computation: F,
    messages: &Messages,
) -> impl Future<Output = Outcome<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    Fut::Output: Fallible<Data = T>,
{
    let fut = match panic::catch_unwind(AssertUnwindSafe(computation)) {
        Ok(fut) => fut,
        Err(payload) => {
            let outcome: Outcome<T> = Outcome::settle(Err(Error::from_panic(payload)), messages);
            return Either::Left(future::ready(outcome));
        }
    };

    log::trace!("computation returned a future, deferring its outcome");

    let messages = messages.clone();
    Either::Right(AssertUnwindSafe(fut).catch_unwind().map(move |result| {
        let result = result
            .map_err(Error::from_panic)
            .and_then(Fallible::into_result);
        Outcome::settle(result, &messages)
    }))
}

/// Like [`with_error_async`], for futures that can only fail by panicking.
///
/// The installed panic hook still runs before the panic is captured.
pub fn with_value_async<F, Fut>(
    computation: F,
    messages: &Messages,
) -> impl Future<Output = Outcome<Fut::Output>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    with_error_async(|| computation().map(Ok::<_, Infallible>), messages)
}

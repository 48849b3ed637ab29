mod error;
pub use error::{BoxError, Error};

mod messages;
pub use messages::Messages;

mod outcome;
pub use outcome::Outcome;

mod fallible;
pub use fallible::Fallible;

mod wrap;
pub use wrap::{with_error, with_error_async, with_value, with_value_async};

mod error;
mod message;
mod session;

pub use error::{Error, Result};
pub use message::{Credentials, LoginResponse, ProtectedMessage};
pub use session::{ADMIN_ROLE, AUTH_TOKEN_KEY, Session, USER_ROLE_KEY};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;

/// Build a [`Error`] from a format string, like `anyhow!`.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}

use std::error::Error;

/// Turns a checked failure into a panic, for the operations that mirror [`Vec`] and panic on bad
/// input rather than returning a [`Result`].
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the [`Ok`] value, or panics with the [`Display`](std::fmt::Display) message of the
    /// error. The panic is reported at the caller's location, not here.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}

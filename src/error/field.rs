use crate::error::common::error_chain_fmt;

/// A field name outside the eight recognized profile fields was used at the
/// string boundary. The store state is left untouched when this is raised.
#[derive(thiserror::Error)]
#[error("`{0}` is not a recognized profile field")]
pub struct InvalidFieldError(pub String);

impl std::fmt::Debug for InvalidFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

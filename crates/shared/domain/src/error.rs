use std::borrow::Cow;

/// The only failure the person model knows about.
#[conf_derive::conf_error]
pub enum PersonError {
    /// An argument failed validation; no value was produced.
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PersonError {
    /// Shorthand for an [`PersonError::InvalidArgument`] without context.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument { message: message.into(), context: None }
    }
}

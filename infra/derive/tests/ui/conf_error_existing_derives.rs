use conf_derive::conf_error;
use std::borrow::Cow;

#[conf_error]
#[derive(Debug)]
pub enum RejectError {
    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}

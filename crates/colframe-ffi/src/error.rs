//! Error translation and the last-error slot.
//!
//! The slot is thread-local (errno style): a host calling from several threads
//! reads back the error of its own last call.

use std::cell::RefCell;

use colframe_core::prelude::Error;

use crate::events;
use crate::ErrorCode;

thread_local! {
    static LAST_ERROR: RefCell<Option<(ErrorCode, String)>> = const { RefCell::new(None) };
}

pub fn error_to_code(error: &Error) -> ErrorCode {
    match error {
        Error::Schema(_) => ErrorCode::Schema,
        Error::Type(_) => ErrorCode::Type,
        Error::Lookup(_) => ErrorCode::Lookup,
        Error::Aggregation(_) => ErrorCode::Aggregation,
        Error::Boundary(_) => ErrorCode::Boundary,
        Error::Config(_) => ErrorCode::Config,
        Error::Invariant(_) => ErrorCode::Internal,
    }
}

/// Store `"<Code>: <message>"` as the last error.
pub fn set_last_error(code: ErrorCode, message: impl AsRef<str>) {
    let text = format!("{:?}: {}", code, message.as_ref());
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some((code, text)));
}

pub fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Translate an engine error into its code and record it.
pub fn record_error(op: &str, error: &Error) -> ErrorCode {
    let code = error_to_code(error);
    events::error_translated(op, code, error.message());
    set_last_error(code, error.message());
    code
}

pub fn last_error_code() -> ErrorCode {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(ErrorCode::Success, |(code, _)| *code)
    })
}

pub fn last_error_message() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow().as_ref().map(|(_, text)| text.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_clear() {
        let code = record_error("test", &Error::column_not_found("x"));
        assert_eq!(code, ErrorCode::Lookup);
        assert_eq!(last_error_code(), ErrorCode::Lookup);
        assert_eq!(
            last_error_message().as_deref(),
            Some("Lookup: column 'x' not found")
        );
        clear_last_error();
        assert_eq!(last_error_code(), ErrorCode::Success);
        assert_eq!(last_error_message(), None);
    }

    #[test]
    fn every_variant_has_a_code() {
        assert_eq!(error_to_code(&Error::Invariant("x".into())), ErrorCode::Internal);
        assert_eq!(error_to_code(&Error::Config("x".into())), ErrorCode::Config);
        assert_eq!(error_to_code(&Error::Boundary("x".into())), ErrorCode::Boundary);
    }
}

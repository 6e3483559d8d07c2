//! Positional arguments: `salon [YYYY-MM-DD] [category]`.

use chrono::NaiveDate;

use salon_core::constants::DATE_FORMAT;
use salon_core::types::ServiceCategory;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    /// `None` means today according to the clock.
    pub date: Option<NaiveDate>,
    pub category: ServiceCategory,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            date: None,
            category: ServiceCategory::Hair,
        }
    }
}

/// ## Summary
/// Parses the arguments following the program name. Either argument may be
/// omitted; a date must come before a category.
///
/// ## Errors
/// Returns `AppError::Usage` for an unparseable date, unknown category, or
/// surplus arguments.
pub fn parse_args<I, S>(args: I) -> AppResult<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut invocation = Invocation::default();
    let mut args = args.into_iter().peekable();

    if let Some(first) = args.peek() {
        let first: &str = first.as_ref();
        if first.starts_with(|c: char| c.is_ascii_digit()) {
            let date = NaiveDate::parse_from_str(first, DATE_FORMAT)
                .map_err(|e| AppError::Usage(format!("invalid date {first:?}: {e}")))?;
            invocation.date = Some(date);
            args.next();
        }
    }

    if let Some(category) = args.next() {
        let category: &str = category.as_ref();
        invocation.category = category
            .parse()
            .map_err(|e| AppError::Usage(format!("{e}")))?;
    }

    if let Some(extra) = args.next() {
        let extra: &str = extra.as_ref();
        return Err(AppError::Usage(format!("unexpected argument {extra:?}")));
    }

    Ok(invocation)
}

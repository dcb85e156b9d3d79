//! Ordered-source field resolution.
//!
//! Every value printed on a GR comes from a fixed precedence list: the
//! request-level override, then a value derived from transporter or container
//! details, then a literal placeholder. Keeping the list explicit makes the
//! precedence testable.

/// Placeholder for absent identifiers and contact data.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Placeholder for absent descriptive fields.
pub const NOT_SPECIFIED: &str = "Not Specified";

/// Placeholder for a vehicle that has not been allocated yet.
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Placeholder for absent reference numbers and dates.
pub const DASH: &str = "-";

/// Placeholder for absent quantities.
pub const ZERO_QUANTITY: &str = "00";

/// Consignor line used when the request names no consignor.
pub const SELF_CONSIGNOR: &str = "TEAM ELOGISOL .";

/// Return the first present, non-blank source, trimmed; otherwise `fallback`.
///
/// # Examples
///
/// ```
/// use gr_layout::fallback::{first_present, NOT_ASSIGNED};
///
/// let request_override: Option<&str> = None;
/// let from_transporter = Some("MH04 KL 2211");
/// assert_eq!(first_present([request_override, from_transporter], NOT_ASSIGNED), "MH04 KL 2211");
/// assert_eq!(first_present([None, Some("  ")], NOT_ASSIGNED), NOT_ASSIGNED);
/// ```
pub fn first_present<'a, I>(sources: I, fallback: &str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    sources
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

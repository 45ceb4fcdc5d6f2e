use nutype::nutype;

pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Stable identifier of a search result (a ticker symbol, for instance).
///
/// Used as the list key when rendering rows, so it must be unique within a
/// result set and never blank.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_IDENTIFIER_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Identifier(String);

#[cfg(test)]
mod tests;

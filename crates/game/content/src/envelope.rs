//! Remote sheet envelope.
//!
//! The published-sheet endpoint wraps the JSON table in a JavaScript callback:
//! a fixed 47-character prefix and a 2-character suffix. The lengths are part
//! of the endpoint contract; anything else fails to parse afterwards.

use titans_core::CatalogConfig;

use crate::grid::GridError;

/// Strips the fixed envelope from a remote sheet response.
///
/// Lengths are counted in characters, not bytes.
pub fn strip_envelope(text: &str) -> Result<&str, GridError> {
    let prefix = CatalogConfig::ENVELOPE_PREFIX;
    let suffix = CatalogConfig::ENVELOPE_SUFFIX;
    let needed = prefix + suffix;

    let len = text.chars().count();
    if len < needed {
        return Err(GridError::Envelope { len, needed });
    }

    let start = byte_offset(text, prefix);
    let end = byte_offset(text, len - suffix);
    Ok(&text[start..end])
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

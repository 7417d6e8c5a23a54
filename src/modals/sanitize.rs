// SPDX-License-Identifier: MPL-2.0
//! Plain-text rendering of messages that may carry markup.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is a valid regex"));

/// Removes every `<...>` substring from `input`.
///
/// This is a display rule for plain-text dialogs, not an escaping routine:
/// an unterminated `<` is left as is.
///
/// ```
/// use budget_desk::modals::sanitize::strip_markup;
///
/// assert_eq!(strip_markup("bad <b>thing</b> happened"), "bad thing happened");
/// ```
#[must_use]
pub fn strip_markup(input: &str) -> Cow<'_, str> {
    MARKUP.replace_all(input, "")
}

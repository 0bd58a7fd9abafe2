use std::borrow::Cow;

/// Adds `s` to the end of `text` if `count` is not one.
pub fn pluralize(text: &str, count: usize) -> Cow<'_, str> {
    if count == 1 {
        text.into()
    } else {
        format!("{text}s").into()
    }
}

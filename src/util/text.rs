use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to truncated text.
const ELLIPSIS: char = '…';

/// Number of terminal columns `s` occupies.
///
/// Wide characters (CJK, most emoji) count as two columns and combining marks
/// as zero.
///
/// ```
/// use headlines::util::display_width;
///
/// assert_eq!(display_width("News"), 4);
/// assert_eq!(display_width("新闻"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shorten `s` so it fits in `max_width` columns, ending with `…` when cut.
///
/// Returns the input borrowed when it already fits.
///
/// ```
/// use headlines::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Technology", 20), "Technology");
/// assert_eq!(truncate_to_width("Technology", 5), "Tech…");
/// assert_eq!(truncate_to_width("Technology", 0), "");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    // One column is reserved for the ellipsis.
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::with_capacity(max_width + ELLIPSIS.len_utf8());
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

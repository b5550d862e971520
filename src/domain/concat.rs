//! Concatenating entries into one document

use crate::domain::entry::HEADER_END;
use crate::domain::filename::TITLE_PREFIX;

/// Placed between concatenated entries
pub const HR_BLOCK: &str = "\n---\n\n";

/// What to keep of each entry's header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatOptions {
    /// Keep the whole header. Overrides `keep_title`.
    pub keep_header: bool,

    /// Keep only the `# title` line
    pub keep_title: bool,
}

/// Strip the header from one entry.
///
/// Content that does not open with a `# title` line is not treated as
/// having a header and comes back unchanged.
pub fn decapitate(content: &str, opts: CatOptions) -> String {
    if opts.keep_header || !content.starts_with(TITLE_PREFIX) {
        return content.to_string();
    }
    let Some((head, body)) = content.split_once(HEADER_END) else {
        return content.to_string();
    };
    if opts.keep_title {
        let title = head.split_once('\n').map_or(head, |(title, _)| title);
        return format!("{}{}{}", title, HEADER_END, body);
    }
    body.to_string()
}

/// Decapitate every entry and join them with [`HR_BLOCK`]
pub fn concatenate<S: AsRef<str>>(contents: &[S], opts: CatOptions) -> String {
    contents
        .iter()
        .map(|c| decapitate(c.as_ref(), opts))
        .collect::<Vec<_>>()
        .join(HR_BLOCK)
}

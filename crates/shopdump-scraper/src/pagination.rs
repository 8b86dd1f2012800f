//! Cursor-based pagination over the `products` connection.
//!
//! Each page carries a `pageInfo` object:
//!
//! ```text
//! { "hasNextPage": true, "endCursor": "eyJsYXN0X2lkIjo4MTIzLCJsYXN0X3ZhbHVlIjoiODEyMyJ9" }
//! ```
//!
//! The `endCursor` of page N is sent as the `cursor` variable of page N+1.
//! The loop ends exactly when `hasNextPage` is `false`; an empty last page is
//! never assumed.

use crate::types::PageInfo;

/// What the fetch loop should do after processing a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Request the next page with this cursor.
    Cursor(String),
    /// `hasNextPage` was `false`; pagination is complete.
    Done,
    /// `hasNextPage` was `true` but no usable `endCursor` was returned, so
    /// the loop cannot advance without re-requesting the same page.
    Stalled,
}

/// Decides the next step from a page's `pageInfo`.
#[must_use]
pub fn next_page(page_info: &PageInfo) -> NextPage {
    if !page_info.has_next_page {
        return NextPage::Done;
    }

    match page_info.end_cursor.as_deref() {
        Some(cursor) if !cursor.is_empty() => NextPage::Cursor(cursor.to_owned()),
        _ => NextPage::Stalled,
    }
}

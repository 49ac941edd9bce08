use maud::html;

use crate::pager::PaginationState;

/// Rows of the current page, numbered from one.
///
/// `total` is the real row count; the state floors an empty set to one row.
pub fn render_listing(state: &PaginationState, total: u64) -> maud::Markup {
    let slice = state.slice();
    let slice = slice.start.min(total)..slice.end.min(total);
    html! {
        @if slice.is_empty() {
            p.listing__summary { "No items" }
        } @else {
            p.listing__summary {
                (format!("Showing {}-{} of {}", slice.start + 1, slice.end, total))
            }
            ol.listing start=(slice.start + 1) {
                @for row in slice {
                    li.listing__item { "Item " (row + 1) }
                }
            }
        }
    }
}

//! Page/offset arithmetic and a windowed HTML pager.
//!
//! [`pager::Paginator::pager`] turns a row count and a requested page into a
//! [`pager::PaginationState`] (or a redirect to the last valid page), and
//! [`pager::Paginator::nav`] renders the link window for that state.

pub mod config;
pub mod pager;
pub mod render;
pub mod routes;
pub mod util;

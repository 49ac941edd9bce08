pub mod document;
pub mod error;
pub mod listing;
pub mod nav;

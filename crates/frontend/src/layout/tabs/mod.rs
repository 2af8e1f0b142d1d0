//! Tab management module
//!
//! Содержит:
//! - `registry` - маппинг view key → init routine (единственный источник правды)
//! - `tab_bar` - кнопки переключения view

pub mod registry;
pub mod tab_bar;

pub use registry::{view_entry, ViewEntry};
pub use tab_bar::TabBar;

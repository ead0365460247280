//! Consistent multi-language document generation.
//!
//! One canonical document structure (a [`schema::Schema`] plus a
//! [`template::Template`]) is rendered once per language from per-language
//! [`i18n::Dictionary`] values, so every localized document keeps the same
//! shape while only the text changes.

pub mod config;
pub mod document;
pub mod driver;
pub mod i18n;
pub mod renderer;
pub mod schema;
pub mod sink;
pub mod sources;
pub mod template;

//! dentra-views
//!
//! Projections from records to display rows, cards, dropdown options
//! and summaries, plus the notification surface. Nothing here mutates
//! a record; every function maps inputs to a renderable value.

pub mod badge;
pub mod format;
pub mod notify;
pub mod options;
pub mod report;
pub mod rows;

pub use notify::{Notice, NoticeLevel, Notifier};

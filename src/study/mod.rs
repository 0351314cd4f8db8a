//! Study aids driven by sample content.
//!
//! Each aid is a plain state machine; pages keep one in a signal and render it.

pub(crate) mod chat;
pub(crate) mod fixtures;
pub(crate) mod flashcards;
pub(crate) mod history;
pub(crate) mod mindmap;
pub(crate) mod quiz;
pub(crate) mod stats;

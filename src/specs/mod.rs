//! # Reading “specs” module
//!
//! Knows the shape of the remote dataset and nothing else.
//!
//! ## What lives here
//! - **Document models** for `ccfddl/ccf-deadlines` YAML (`conference::Series` and friends).
//! - **Tolerant deserialization**: the dataset is hand-edited, so odd field types
//!   degrade to `None` instead of failing the whole conference.
//!
//! ## What does **not** live here
//! - Date/timezone interpretation (`normalize`), edition choice and status (`select`),
//!   rendering (`html`), or deciding what to do with a failed fetch (`runner`).
//!
//! ## Typical call chain
//! ```text
//! runner → specs::conference::fetch(source, target)
//!              ↘ Vec<Series>  → select::build_row → html::render_table
//! ```
pub mod conference;

#![forbid(unsafe_code)]

//! Drag-and-drop row reordering for `egui` lists, with edge auto-scroll.
//!
//! The crate has two halves:
//!
//! - [`DragReorderState`] — the engine. UI-agnostic gesture state that turns
//!   pointer deltas into a live offset for the dragged row, at most one
//!   [`RowMove`] request per delta, and an overscroll amount for auto-scroll
//!   near the viewport edges. It only ever looks at a per-call
//!   [`LayoutSnapshot`] of the *visible* rows, so it stays correct under
//!   virtualization, and it never mutates the caller's item collection.
//! - [`ReorderableList`] — an immediate-mode adapter that wires the engine
//!   to an [`egui::ScrollArea`], for callers that just want a reorderable
//!   list widget.

pub mod engine;
pub mod geometry;
pub mod list;

pub use engine::{DragReorderState, RowMove};
pub use geometry::{ItemGeometry, LayoutSnapshot};
pub use list::{ReorderResponse, ReorderableList, RowState};

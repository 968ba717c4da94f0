//! Headless list decoration and edge-drag gestures.
//!
//! This crate provides the two UI-agnostic pieces behind "pull to refresh / pull to load more"
//! lists with header and footer rows:
//!
//! - [`ListDecorator`] wraps a data adapter and presents `headers ++ items ++ footers` as one
//!   list: position and view-kind remapping, an automatic empty-state slot, and change
//!   notification proxying (offset by the header count).
//! - [`DragGestureController`] turns an abstract multi-pointer stream into a damped reveal
//!   distance for one edge and drives `Idle -> Dragging -> ReadyToTrigger -> Triggering`.
//!
//! It holds no UI objects. A TUI/GUI layer is expected to provide:
//! - the wrapped data adapter ([`ListAdapter`])
//! - edge widgets that can be measured and moved ([`EdgeWidget`], [`EdgeWidgetCreator`])
//! - scroll-limit queries ([`ScrollProbe`]) and, for grids, the column count ([`GridLayout`])
//! - pointer events and a millisecond clock (`tick(now_ms)`)
//!
//! For a ready-made composition of both pieces, see the `edgereveal-view` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod decorator;
mod error;
mod gesture;
mod options;
mod pointer;
pub mod position;
mod session;
mod slots;
mod tween;
mod types;
mod widget;

#[cfg(test)]
mod tests;

pub use adapter::{
    ChangePayload, GridLayout, ListAdapter, ListChange, OnListChange, ScrollProbe, SlotHolder,
};
pub use decorator::ListDecorator;
pub use error::{ConfigError, Result};
pub use gesture::{DragGestureController, RevealListener};
pub use options::{DEFAULT_DAMPING_COEFFICIENT, GestureOptions};
pub use pointer::{PointerAction, PointerEvent, PointerId};
pub use session::DragSession;
pub use tween::Tween;
pub use types::{Edge, GestureOutcome, HeightSpec, Position, RevealStatus, SlotKey, ViewKind};
pub use widget::{EdgeWidget, EdgeWidgetCreator};

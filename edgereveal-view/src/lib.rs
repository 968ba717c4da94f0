//! Pull-to-refresh and pull-to-load-more lists built on the `edgereveal` crate.
//!
//! [`EdgeRevealView`] composes one [`edgereveal::ListDecorator`] with a top (refresh) and a
//! bottom (load more) [`edgereveal::DragGestureController`]. It wires the edge widgets into the
//! decorator as header/footer slots and exposes one surface for configuration, pointer input
//! and completion notices.
//!
//! Like `edgereveal`, this crate is framework-agnostic and holds no timers: the host drives it
//! with `on_layout`, `on_pointer` and `tick(now_ms)`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod view;


pub use options::EdgeRevealOptions;
pub use view::EdgeRevealView;

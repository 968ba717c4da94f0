use alloc::rc::Rc;
use core::any::Any;

use crate::Edge;

/// Opaque payload attached to a partial change notification (e.g. "only the title changed").
pub type ChangePayload = Rc<dyn Any>;

/// A callback receiving structural change notifications for the host list view.
pub type OnListChange = Rc<dyn Fn(&ListChange)>;

/// A data-change notification.
///
/// The same type is used in both directions: the wrapped adapter's owner reports changes in
/// adapter coordinates, and the decorator forwards them to the host in list coordinates
/// (offset by the header count).
#[derive(Clone, Debug)]
pub enum ListChange {
    /// Everything may have changed; the host must rebuild.
    Reset,
    Inserted {
        start: usize,
        count: usize,
    },
    Removed {
        start: usize,
        count: usize,
    },
    Changed {
        start: usize,
        count: usize,
        payload: Option<ChangePayload>,
    },
    Moved {
        from: usize,
        to: usize,
        count: usize,
    },
}

impl ListChange {
    pub fn inserted(start: usize, count: usize) -> Self {
        Self::Inserted { start, count }
    }

    pub fn removed(start: usize, count: usize) -> Self {
        Self::Removed { start, count }
    }

    pub fn changed(start: usize, count: usize) -> Self {
        Self::Changed {
            start,
            count,
            payload: None,
        }
    }

    pub fn changed_with(start: usize, count: usize, payload: ChangePayload) -> Self {
        Self::Changed {
            start,
            count,
            payload: Some(payload),
        }
    }

    pub fn moved(from: usize, to: usize, count: usize) -> Self {
        Self::Moved { from, to, count }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }

    /// Returns the same notification with every position shifted by `by`.
    pub fn offset(&self, by: usize) -> Self {
        match self {
            Self::Reset => Self::Reset,
            Self::Inserted { start, count } => Self::Inserted {
                start: start.saturating_add(by),
                count: *count,
            },
            Self::Removed { start, count } => Self::Removed {
                start: start.saturating_add(by),
                count: *count,
            },
            Self::Changed {
                start,
                count,
                payload,
            } => Self::Changed {
                start: start.saturating_add(by),
                count: *count,
                payload: payload.clone(),
            },
            Self::Moved { from, to, count } => Self::Moved {
                from: from.saturating_add(by),
                to: to.saturating_add(by),
                count: *count,
            },
        }
    }
}

impl PartialEq for ListChange {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Reset, Self::Reset) => true,
            (
                Self::Inserted { start, count },
                Self::Inserted {
                    start: s2,
                    count: c2,
                },
            )
            | (
                Self::Removed { start, count },
                Self::Removed {
                    start: s2,
                    count: c2,
                },
            ) => start == s2 && count == c2,
            (
                Self::Changed {
                    start,
                    count,
                    payload,
                },
                Self::Changed {
                    start: s2,
                    count: c2,
                    payload: p2,
                },
            ) => {
                let same_payload = match (payload, p2) {
                    (None, None) => true,
                    (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                    _ => false,
                };
                start == s2 && count == c2 && same_payload
            }
            (
                Self::Moved { from, to, count },
                Self::Moved {
                    from: f2,
                    to: t2,
                    count: c2,
                },
            ) => from == f2 && to == t2 && count == c2,
            _ => false,
        }
    }
}

/// The data adapter wrapped by a [`crate::ListDecorator`].
///
/// Queries take an index local to the adapter's own data. Out-of-range queries return `None`.
pub trait ListAdapter {
    /// The adapter's own view kinds (e.g. one per row layout).
    type Kind: Clone + PartialEq;
    /// The view holder created for a kind and rebound to different items.
    type Holder;

    fn item_count(&self) -> usize;

    fn view_kind_at(&self, index: usize) -> Option<Self::Kind>;

    fn create_view(&mut self, kind: &Self::Kind) -> Option<Self::Holder>;

    fn bind_view(&mut self, holder: &mut Self::Holder, index: usize);

    /// Whether this adapter already delivers its own (correctly offset) notifications to the
    /// host list view.
    ///
    /// A decorator wrapping such an adapter still reacts to its changes but does not forward
    /// them again.
    fn forwards_own_changes(&self) -> bool {
        false
    }
}

/// A view holder produced by a decorated list.
#[derive(Debug)]
pub enum SlotHolder<W, H> {
    /// A header/footer slot; its content is static and never rebound.
    Slot(Rc<W>),
    /// A holder created by the wrapped adapter.
    Item(H),
}

impl<W, H> SlotHolder<W, H> {
    pub fn slot_widget(&self) -> Option<&Rc<W>> {
        match self {
            Self::Slot(w) => Some(w),
            Self::Item(_) => None,
        }
    }

    pub fn item(&self) -> Option<&H> {
        match self {
            Self::Slot(_) => None,
            Self::Item(h) => Some(h),
        }
    }

    pub fn item_mut(&mut self) -> Option<&mut H> {
        match self {
            Self::Slot(_) => None,
            Self::Item(h) => Some(h),
        }
    }
}

/// The host list's layout engine, as far as span adjustment is concerned.
pub trait GridLayout {
    /// Number of columns when the list is arranged as a grid; `None` for linear layouts.
    fn grid_span_count(&self) -> Option<usize>;
}

/// Lets a gesture controller ask the host list whether normal scrolling is still possible.
pub trait ScrollProbe {
    /// `true` if the list can still scroll toward `edge` (i.e. it is not resting at it).
    fn can_scroll_toward(&self, edge: Edge) -> bool;
}

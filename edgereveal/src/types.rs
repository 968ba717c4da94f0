/// The list edge a gesture controller or edge widget belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// The start of the list (pull-to-refresh).
    Top,
    /// The end of the list (pull-to-load).
    Bottom,
}

impl Edge {
    /// Sign applied to a raw vertical displacement so that pulling *away* from the edge is
    /// positive: down for the top edge, up for the bottom edge.
    pub(crate) fn pull_sign(self) -> f32 {
        match self {
            Self::Top => 1.0,
            Self::Bottom => -1.0,
        }
    }
}

impl core::fmt::Display for Edge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
        }
    }
}

/// Status of one edge's reveal gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealStatus {
    #[default]
    Idle,
    /// Pulled, but not far enough to trigger on release.
    Dragging,
    /// Pulled past the edge size; releasing now triggers.
    ReadyToTrigger,
    /// Released past the threshold; waiting for `notify_complete`.
    Triggering,
}

impl RevealStatus {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// Synthetic view kind of a header or footer slot.
///
/// The two namespaces are distinct variants, so a header key can never equal a footer key and
/// neither can equal an item kind of the wrapped adapter (see [`ViewKind`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKey {
    Header(u32),
    Footer(u32),
}

impl SlotKey {
    pub const HEADER_START: u32 = 1000;
    pub const FOOTER_START: u32 = 2000;

    pub fn id(self) -> u32 {
        match self {
            Self::Header(id) | Self::Footer(id) => id,
        }
    }
}

/// View kind reported by a decorated list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewKind<K> {
    /// A header/footer slot (including the empty-state slot).
    Slot(SlotKey),
    /// A body item; carries the wrapped adapter's own view kind.
    Item(K),
}

impl<K> ViewKind<K> {
    pub fn is_slot(&self) -> bool {
        matches!(self, Self::Slot(_))
    }
}

/// Where a virtual position of a decorated list lands.
///
/// Each variant carries the index local to its section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Header(usize),
    Body(usize),
    Footer(usize),
}

impl Position {
    pub fn is_body(self) -> bool {
        matches!(self, Self::Body(_))
    }

    /// `true` for header and footer positions.
    pub fn is_slot(self) -> bool {
        !self.is_body()
    }
}

/// How the host lays out an edge widget's height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightSpec {
    /// A fixed height in display units.
    Exact(u32),
    /// Sized to content; resolved through [`crate::EdgeWidget::measure`].
    WrapContent,
    /// Fills the parent. Not usable for edge widgets: the reveal threshold would be undefined.
    MatchParent,
}

/// Whether a pointer event was used by a gesture controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The gesture handled the event; the host must not scroll with it.
    Consumed,
    /// The host should process the event normally (e.g. scroll the list).
    PassThrough,
}

impl GestureOutcome {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }

    /// Combines the outcomes of two controllers that saw the same event.
    pub fn or(self, other: Self) -> Self {
        if self.is_consumed() { self } else { other }
    }
}

use alloc::rc::Rc;

use crate::{Edge, HeightSpec};

/// The rendering-layer view of an edge widget (the refresh header or load-more footer).
///
/// Widgets are shared with the host through `Rc`, so mutators take `&self`; hosts typically
/// keep margins in a `Cell`.
pub trait EdgeWidget {
    fn height_spec(&self) -> HeightSpec;

    /// Measures the content height for the given available width.
    ///
    /// Only called for [`HeightSpec::WrapContent`] widgets.
    fn measure(&self, available_width: u32) -> u32;

    fn set_top_margin(&self, margin: i32);

    fn set_bottom_margin(&self, margin: i32);

    /// Applies a reveal offset as the margin facing `edge`.
    fn set_reveal_margin(&self, edge: Edge, margin: i32) {
        match edge {
            Edge::Top => self.set_top_margin(margin),
            Edge::Bottom => self.set_bottom_margin(margin),
        }
    }
}

/// Builds an edge widget and renders the gesture's progress on it.
///
/// All callbacks run on the UI thread, synchronously from pointer handling, `tick` or
/// `notify_complete`.
pub trait EdgeWidgetCreator<W> {
    /// Creates the widget. Called once, when the creator is installed.
    fn create_widget(&mut self) -> Option<Rc<W>>;

    /// The widget is being pulled: `distance` of `edge_size` (it may exceed `edge_size`).
    fn on_pulling(&mut self, widget: &W, distance: i32, edge_size: u32);

    /// The gesture was released past the threshold; the action is running.
    fn on_active(&mut self, widget: &W);

    /// The host reported that the action finished.
    fn on_complete(&mut self, widget: &W, result: &str);
}

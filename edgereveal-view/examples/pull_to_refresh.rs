use std::cell::Cell;
use std::rc::Rc;

use edgereveal::{
    Edge, EdgeWidget, EdgeWidgetCreator, HeightSpec, ListAdapter, PointerEvent, ScrollProbe,
};
use edgereveal_view::{EdgeRevealOptions, EdgeRevealView};

fn main() {
    // Example: a simulated pull-to-refresh session driven by a fake frame clock.
    //
    // A host would:
    // - forward pointer events to on_pointer (and scroll the list unless consumed)
    // - call tick(now_ms) every frame while needs_tick() is true
    // - call notify_refresh_complete once its refresh finished
    let mut view = EdgeRevealView::with_adapter(
        Feed((0..20).collect()),
        EdgeRevealOptions::new().with_damping_coefficient(0.5),
    );
    view.set_refresh_creator(Spinner).expect("spinner has a widget");
    let refreshing = Rc::new(Cell::new(false));
    let flag = Rc::clone(&refreshing);
    view.set_on_refresh(Some(move || flag.set(true)));
    view.on_layout(80).expect("spinner has an exact height");

    let mut now_ms = 0u64;
    view.on_pointer(PointerEvent::down(0, 10.0), &AtTop, now_ms);
    for step in 1..=12 {
        now_ms += 16;
        let y = 10.0 + step as f32 * 12.0;
        let outcome = view.on_pointer(PointerEvent::moved(0, y), &AtTop, now_ms);
        println!("t={now_ms} y={y} {outcome:?} status={:?}", view.refresh_status());
    }
    view.on_pointer(PointerEvent::up(0, 154.0), &AtTop, now_ms);
    println!("released: status={:?} refreshing={}", view.refresh_status(), refreshing.get());

    while view.needs_tick() || refreshing.get() {
        now_ms += 16;
        if refreshing.get() && now_ms >= 400 {
            refreshing.set(false);
            view.notify_refresh_complete("updated", 300, now_ms);
        }
        if view.tick(now_ms) {
            let offset = view.controller(Edge::Top).map(|c| c.offset());
            println!("t={now_ms} offset={offset:?} status={:?}", view.refresh_status());
        }
    }
    println!("done at t={now_ms}: {} rows", view.item_count());
}

struct Feed(Vec<u32>);

impl ListAdapter for Feed {
    type Kind = ();
    type Holder = String;

    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn view_kind_at(&self, index: usize) -> Option<()> {
        (index < self.0.len()).then_some(())
    }

    fn create_view(&mut self, _kind: &()) -> Option<String> {
        Some(String::new())
    }

    fn bind_view(&mut self, holder: &mut String, index: usize) {
        *holder = format!("post #{}", self.0[index]);
    }
}

#[derive(Default)]
struct Indicator {
    margin: Cell<i32>,
}

impl EdgeWidget for Indicator {
    fn height_spec(&self) -> HeightSpec {
        HeightSpec::Exact(48)
    }

    fn measure(&self, _available_width: u32) -> u32 {
        48
    }

    fn set_top_margin(&self, margin: i32) {
        self.margin.set(margin);
    }

    fn set_bottom_margin(&self, _margin: i32) {}
}

struct Spinner;

impl EdgeWidgetCreator<Indicator> for Spinner {
    fn create_widget(&mut self) -> Option<Rc<Indicator>> {
        Some(Rc::new(Indicator::default()))
    }

    fn on_pulling(&mut self, widget: &Indicator, distance: i32, edge_size: u32) {
        let label = if distance >= edge_size as i32 {
            "release to refresh"
        } else {
            "pull to refresh"
        };
        println!("  {label} ({distance}/{edge_size}, margin {})", widget.margin.get());
    }

    fn on_active(&mut self, _widget: &Indicator) {
        println!("  refreshing...");
    }

    fn on_complete(&mut self, _widget: &Indicator, result: &str) {
        println!("  {result}");
    }
}

struct AtTop;

impl ScrollProbe for AtTop {
    fn can_scroll_toward(&self, edge: Edge) -> bool {
        edge == Edge::Bottom
    }
}

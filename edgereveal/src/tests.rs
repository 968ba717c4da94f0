use crate::*;

use alloc::borrow::ToOwned;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

#[derive(Debug)]
struct Label(&'static str);

fn label(name: &'static str) -> Rc<Label> {
    Rc::new(Label(name))
}

#[derive(Debug, PartialEq)]
struct Row {
    even: bool,
    value: Option<u32>,
}

#[derive(Debug, Default)]
struct Rows {
    items: Vec<u32>,
    bound: Vec<(usize, u32)>,
}

impl Rows {
    fn of(items: &[u32]) -> Self {
        Self {
            items: items.to_vec(),
            bound: Vec::new(),
        }
    }
}

impl ListAdapter for Rows {
    type Kind = bool;
    type Holder = Row;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn view_kind_at(&self, index: usize) -> Option<bool> {
        self.items.get(index).map(|v| v % 2 == 0)
    }

    fn create_view(&mut self, kind: &bool) -> Option<Row> {
        Some(Row {
            even: *kind,
            value: None,
        })
    }

    fn bind_view(&mut self, holder: &mut Row, index: usize) {
        if let Some(&v) = self.items.get(index) {
            holder.value = Some(v);
            self.bound.push((index, v));
        }
    }
}

type Log = Rc<RefCell<Vec<ListChange>>>;

fn record<A: ListAdapter>(d: &mut ListDecorator<A, Label>) -> Log {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    d.set_on_change(Some(move |c: &ListChange| sink.borrow_mut().push(c.clone())));
    log
}

fn drain(log: &Log) -> Vec<ListChange> {
    core::mem::take(&mut *log.borrow_mut())
}

struct Grid(Option<usize>);

impl GridLayout for Grid {
    fn grid_span_count(&self) -> Option<usize> {
        self.0
    }
}

#[test]
fn classify_covers_every_section() {
    for headers in 0..4 {
        for body in 0..4 {
            for footers in 0..4 {
                let total = position::total(headers, body, footers);
                assert_eq!(total, headers + body + footers);
                for p in 0..total {
                    let expected = if p < headers {
                        Position::Header(p)
                    } else if p < headers + body {
                        Position::Body(p - headers)
                    } else {
                        Position::Footer(p - headers - body)
                    };
                    assert_eq!(
                        position::classify(p, headers, body, footers),
                        Some(expected)
                    );
                }
                assert_eq!(position::classify(total, headers, body, footers), None);
            }
        }
    }
}

#[test]
fn item_count_and_view_kinds_follow_slot_layout() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[10, 11, 12]));
    d.add_header(label("a"));
    d.add_header(label("b"));
    d.add_footer(label("c"));

    assert_eq!(d.item_count(), 6);
    assert_eq!(d.classify(0), Some(Position::Header(0)));
    assert_eq!(d.classify(2), Some(Position::Body(0)));
    assert_eq!(d.classify(5), Some(Position::Footer(0)));
    assert_eq!(d.classify(6), None);

    assert_eq!(d.view_kind_at(0), Some(ViewKind::Slot(SlotKey::Header(1000))));
    assert_eq!(d.view_kind_at(1), Some(ViewKind::Slot(SlotKey::Header(1001))));
    assert_eq!(d.view_kind_at(2), Some(ViewKind::Item(true)));
    assert_eq!(d.view_kind_at(3), Some(ViewKind::Item(false)));
    assert_eq!(d.view_kind_at(5), Some(ViewKind::Slot(SlotKey::Footer(2000))));
    assert_eq!(d.view_kind_at(6), None);
}

#[test]
fn adding_the_same_widget_twice_is_idempotent() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[1]));
    let log = record(&mut d);
    let header = label("h");

    assert!(d.add_header(Rc::clone(&header)));
    assert!(!d.add_header(Rc::clone(&header)));
    assert_eq!(d.header_count(), 1);
    assert_eq!(drain(&log), vec![ListChange::Reset]);

    // Identity, not content, decides.
    assert!(d.add_header(label("h")));
    assert_eq!(d.header_count(), 2);

    let footer = label("f");
    assert!(d.add_footer(Rc::clone(&footer)));
    assert!(!d.add_footer(footer));
    assert_eq!(d.footer_count(), 1);
}

#[test]
fn removing_an_absent_widget_is_a_silent_noop() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[1, 2]));
    let log = record(&mut d);
    let header = label("h");

    assert!(!d.remove_header(&header));
    assert!(!d.remove_footer(&header));
    assert!(drain(&log).is_empty());

    d.add_header(Rc::clone(&header));
    drain(&log);
    assert!(d.remove_header(&header));
    assert_eq!(d.header_count(), 0);
    assert_eq!(drain(&log), vec![ListChange::Reset]);
}

#[test]
fn insert_header_first_places_slot_at_position_zero() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[]));
    let a = label("a");
    let top = label("top");
    d.add_header(Rc::clone(&a));
    d.insert_header_first(Rc::clone(&top));

    assert!(Rc::ptr_eq(d.slot_widget_at(0).unwrap(), &top));
    assert_eq!(d.slot_widget_at(0).unwrap().0, "top");
    assert!(Rc::ptr_eq(d.slot_widget_at(1).unwrap(), &a));
    // Keys are allocated in call order, independent of display order.
    assert_eq!(d.view_kind_at(0), Some(ViewKind::Slot(SlotKey::Header(1001))));
}

#[test]
fn create_and_bind_route_between_slots_and_adapter() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[10, 11]));
    let h0 = label("h0");
    d.add_header(Rc::clone(&h0));
    d.add_header(label("h1"));

    let kind = d.view_kind_at(0).unwrap();
    let mut slot = d.create_view(&kind).unwrap();
    assert!(Rc::ptr_eq(slot.slot_widget().unwrap(), &h0));
    d.bind_view(&mut slot, 0);
    assert!(d.adapter().unwrap().bound.is_empty());

    let kind = d.view_kind_at(2).unwrap();
    let mut item = d.create_view(&kind).unwrap();
    d.bind_view(&mut item, 2);
    assert_eq!(
        item.item(),
        Some(&Row {
            even: true,
            value: Some(10)
        })
    );
    assert_eq!(d.adapter().unwrap().bound, vec![(0, 10)]);

    // A removed slot's key is dead.
    d.remove_header(&h0);
    assert!(d.create_view(&kind_of_header(1000)).is_none());
}

fn kind_of_header(id: u32) -> ViewKind<bool> {
    ViewKind::Slot(SlotKey::Header(id))
}

#[test]
fn empty_state_tracks_adapter_item_count() {
    let mut d: ListDecorator<Rows, Label> = ListDecorator::new();
    let log = record(&mut d);
    let empty = label("empty");

    d.set_empty_state_view(Rc::clone(&empty));
    assert!(!d.is_showing_empty_state(), "detached lists show nothing");

    d.set_adapter(Rows::default());
    assert!(d.is_showing_empty_state());
    assert_eq!(d.header_count(), 1);
    assert_eq!(d.item_count(), 1);
    assert_eq!(drain(&log), vec![ListChange::Reset]);

    d.update_adapter(|rows| {
        rows.items.push(7);
        ListChange::inserted(0, 1)
    });
    assert!(!d.is_showing_empty_state());
    assert_eq!(d.item_count(), 1);
    assert_eq!(drain(&log), vec![ListChange::Reset]);

    d.update_adapter(|rows| {
        rows.items.clear();
        ListChange::removed(0, 1)
    });
    assert!(d.is_showing_empty_state());
    assert_eq!(drain(&log), vec![ListChange::Reset]);

    // Replacing the empty view swaps the slot.
    let other = label("other");
    d.set_empty_state_view(Rc::clone(&other));
    assert!(!d.contains_header(&empty));
    assert!(d.contains_header(&other));
    assert_eq!(d.header_count(), 1);

    assert!(d.clear_empty_state_view().is_some());
    assert_eq!(d.header_count(), 0);
}

#[test]
fn adapter_changes_are_forwarded_offset_by_header_count() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[1, 2, 3, 4, 5]));
    d.add_header(label("a"));
    d.add_header(label("b"));
    let log = record(&mut d);

    d.notify_adapter_changed(ListChange::inserted(3, 2));
    d.notify_adapter_changed(ListChange::removed(0, 1));
    d.notify_adapter_changed(ListChange::moved(0, 4, 1));
    d.notify_adapter_changed(ListChange::Reset);

    assert_eq!(
        drain(&log),
        vec![
            ListChange::inserted(5, 2),
            ListChange::removed(2, 1),
            ListChange::moved(2, 6, 1),
            ListChange::Reset,
        ]
    );

    let payload: ChangePayload = Rc::new(42u32);
    d.notify_adapter_changed(ListChange::changed_with(1, 1, Rc::clone(&payload)));
    let forwarded = drain(&log);
    assert_eq!(forwarded, vec![ListChange::changed_with(3, 1, payload)]);
    let ListChange::Changed {
        payload: Some(p), ..
    } = &forwarded[0]
    else {
        panic!("expected a changed notification");
    };
    assert_eq!(p.downcast_ref::<u32>(), Some(&42));
}

#[test]
fn nested_decorator_does_not_forward_twice() {
    let mut inner = ListDecorator::with_adapter(Rows::of(&[1, 2]));
    inner.add_header(label("inner"));
    let inner_log = record(&mut inner);

    let mut outer: ListDecorator<ListDecorator<Rows, Label>, Label> =
        ListDecorator::with_adapter(inner);
    outer.add_header(label("outer"));
    let outer_log = record(&mut outer);

    assert_eq!(outer.item_count(), 4);
    assert_eq!(
        outer.view_kind_at(1),
        Some(ViewKind::Item(ViewKind::Slot(SlotKey::Header(1000))))
    );

    outer.update_adapter(|inner| {
        inner.update_adapter(|rows| {
            rows.items.push(3);
            ListChange::inserted(2, 1)
        });
        ListChange::inserted(3, 1)
    });

    assert_eq!(drain(&inner_log), vec![ListChange::inserted(3, 1)]);
    assert!(drain(&outer_log).is_empty());
    assert_eq!(outer.item_count(), 5);
}

#[test]
fn batch_update_coalesces_structural_refreshes() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[1, 2]));
    let log = record(&mut d);

    d.batch_update(|d| {
        d.add_header(label("a"));
        d.add_footer(label("b"));
        d.notify_adapter_changed(ListChange::changed(0, 1));
    });
    assert_eq!(drain(&log), vec![ListChange::Reset]);

    d.batch_update(|d| {
        d.notify_adapter_changed(ListChange::changed(0, 1));
        d.notify_adapter_changed(ListChange::inserted(2, 1));
    });
    assert_eq!(
        drain(&log),
        vec![ListChange::changed(1, 1), ListChange::inserted(3, 1)]
    );
}

#[test]
fn grid_spans_follow_live_slot_counts() {
    let mut d = ListDecorator::with_adapter(Rows::of(&[1, 2, 3]));
    d.add_header(label("h"));
    d.add_footer(label("f"));

    assert_eq!(d.span_size_at(0), 1, "no adjustment by default");

    d.set_grid_span_adjustment(&Grid(Some(3)), true);
    let spans: Vec<usize> = (0..d.item_count()).map(|p| d.span_size_at(p)).collect();
    assert_eq!(spans, vec![3, 1, 1, 1, 3]);

    d.add_header(label("h2"));
    assert_eq!(d.span_size_at(1), 3);
    assert_eq!(d.span_size_at(2), 1);

    d.set_grid_span_adjustment(&Grid(None), true);
    assert_eq!(d.span_size_at(0), 1);

    d.set_grid_span_adjustment(&Grid(Some(4)), false);
    assert_eq!(d.span_size_at(0), 1);
}

#[test]
fn slots_registered_before_attach_carry_over() {
    let mut d: ListDecorator<Rows, Label> = ListDecorator::new();
    d.add_header(label("a"));
    d.add_footer(label("b"));
    assert_eq!(d.item_count(), 0);
    assert_eq!(d.classify(0), None);
    assert!(!d.update_adapter(|_| ListChange::Reset));
    d.notify_adapter_changed(ListChange::Reset);

    assert!(d.set_adapter(Rows::of(&[1, 2, 3])).is_none());
    assert_eq!(d.item_count(), 5);

    let prev = d.set_adapter(Rows::of(&[9])).unwrap();
    assert_eq!(prev.items, vec![1, 2, 3]);
    assert_eq!(d.item_count(), 3);

    let taken = d.take_adapter().unwrap();
    assert_eq!(taken.items, vec![9]);
    assert_eq!(d.item_count(), 0);
    assert_eq!(d.header_count(), 1);
}

struct Panel {
    spec: HeightSpec,
    content: u32,
    measure_calls: Cell<u32>,
    top: Cell<i32>,
    bottom: Cell<i32>,
}

impl Panel {
    fn exact(height: u32) -> Rc<Self> {
        Self::with_spec(HeightSpec::Exact(height), 0)
    }

    fn with_spec(spec: HeightSpec, content: u32) -> Rc<Self> {
        Rc::new(Self {
            spec,
            content,
            measure_calls: Cell::new(0),
            top: Cell::new(0),
            bottom: Cell::new(0),
        })
    }
}

impl EdgeWidget for Panel {
    fn height_spec(&self) -> HeightSpec {
        self.spec
    }

    fn measure(&self, _available_width: u32) -> u32 {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.content
    }

    fn set_top_margin(&self, margin: i32) {
        self.top.set(margin);
    }

    fn set_bottom_margin(&self, margin: i32) {
        self.bottom.set(margin);
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Pulling(i32, u32),
    Active,
    Complete(String),
}

struct Recorder {
    widget: Option<Rc<Panel>>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl EdgeWidgetCreator<Panel> for Recorder {
    fn create_widget(&mut self) -> Option<Rc<Panel>> {
        self.widget.clone()
    }

    fn on_pulling(&mut self, _widget: &Panel, distance: i32, edge_size: u32) {
        self.calls
            .borrow_mut()
            .push(Call::Pulling(distance, edge_size));
    }

    fn on_active(&mut self, _widget: &Panel) {
        self.calls.borrow_mut().push(Call::Active);
    }

    fn on_complete(&mut self, _widget: &Panel, result: &str) {
        self.calls
            .borrow_mut()
            .push(Call::Complete(result.to_owned()));
    }
}

struct ListScroll(Cell<bool>);

impl ListScroll {
    fn at_edge() -> Self {
        Self(Cell::new(false))
    }

    fn scrollable() -> Self {
        Self(Cell::new(true))
    }
}

impl ScrollProbe for ListScroll {
    fn can_scroll_toward(&self, _edge: Edge) -> bool {
        self.0.get()
    }
}

struct Rig {
    c: DragGestureController<Panel>,
    panel: Rc<Panel>,
    calls: Rc<RefCell<Vec<Call>>>,
    fired: Rc<Cell<u32>>,
}

impl Rig {
    fn new(edge: Edge, panel: Rc<Panel>, damping: f32) -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let creator = Recorder {
            widget: Some(Rc::clone(&panel)),
            calls: Rc::clone(&calls),
        };
        let options = GestureOptions::new().with_damping_coefficient(damping);
        let mut c = DragGestureController::new(edge, creator, options).unwrap();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        c.set_listener(Some(move || counter.set(counter.get() + 1)));
        c.on_layout(320).unwrap();
        Self {
            c,
            panel,
            calls,
            fired,
        }
    }

    fn top(height: u32, damping: f32) -> Self {
        Self::new(Edge::Top, Panel::exact(height), damping)
    }

    fn calls(&self) -> Vec<Call> {
        core::mem::take(&mut *self.calls.borrow_mut())
    }

    fn send(&mut self, event: PointerEvent, now_ms: u64) -> GestureOutcome {
        self.c.on_pointer(event, &ListScroll::at_edge(), now_ms)
    }

    /// Runs whatever is due at `now_ms`, then lets any running tween finish.
    fn settle(&mut self, now_ms: u64) {
        self.c.tick(now_ms);
        self.c.tick(now_ms + 10_000);
    }

    /// Pulls past the threshold and releases at `now_ms`.
    fn trigger(&mut self, now_ms: u64) {
        let size = self.c.edge_size().unwrap() as f32;
        self.send(PointerEvent::down(0, 0.0), now_ms);
        self.send(PointerEvent::moved(0, size * 2.0), now_ms);
        self.send(PointerEvent::up(0, size * 2.0), now_ms);
        assert_eq!(self.c.status(), RevealStatus::Triggering);
    }
}

#[test]
fn damping_scales_raw_displacement() {
    let mut rig = Rig::top(100, 0.3);
    rig.send(PointerEvent::down(0, 0.0), 0);
    assert_eq!(
        rig.send(PointerEvent::moved(0, 100.0), 0),
        GestureOutcome::Consumed
    );
    assert_eq!(rig.c.session().current_distance(), 30);
    assert_eq!(rig.c.status(), RevealStatus::Dragging);
    assert_eq!(rig.c.offset(), -70);
}

#[test]
fn pull_release_complete_round_trip() {
    let mut rig = Rig::top(100, 1.0);
    assert_eq!(rig.c.offset(), -99);
    assert_eq!(rig.panel.top.get(), -99);

    assert_eq!(
        rig.send(PointerEvent::down(0, 500.0), 0),
        GestureOutcome::PassThrough
    );
    rig.send(PointerEvent::moved(0, 560.0), 10);
    assert_eq!(rig.c.status(), RevealStatus::Dragging);
    assert_eq!(rig.calls(), vec![Call::Pulling(60, 100)]);
    assert_eq!(rig.panel.top.get(), -40);

    rig.send(PointerEvent::moved(0, 610.0), 20);
    assert_eq!(rig.c.status(), RevealStatus::ReadyToTrigger);
    assert_eq!(rig.calls(), vec![Call::Pulling(110, 100)]);
    assert_eq!(rig.panel.top.get(), 10);

    rig.send(PointerEvent::up(0, 610.0), 1000);
    assert_eq!(rig.c.status(), RevealStatus::Triggering);
    assert_eq!(rig.fired.get(), 1);
    assert_eq!(rig.calls(), vec![Call::Active]);

    assert_eq!(rig.c.tick(1005), Some(5));
    assert_eq!(rig.c.tick(1010), Some(0));
    assert_eq!(rig.c.tick(1011), None);
    assert_eq!(rig.panel.top.get(), 0);

    assert!(rig.c.notify_complete("done", 500, 2000));
    assert_eq!(rig.calls(), vec![Call::Complete("done".to_owned())]);
    assert_eq!(rig.c.tick(2499), None);
    assert_eq!(rig.c.status(), RevealStatus::Triggering);

    assert_eq!(rig.c.tick(2500), Some(0));
    assert_eq!(rig.c.status(), RevealStatus::Idle);
    assert_eq!(rig.c.tick(2599), Some(-99));
    assert!(!rig.c.is_animating());
    assert_eq!(rig.panel.top.get(), -99);
    assert_eq!(rig.fired.get(), 1);
}

#[test]
fn hand_off_preserves_distance() {
    let mut rig = Rig::top(200, 0.5);
    rig.send(PointerEvent::down(0, 100.0), 0);
    rig.send(PointerEvent::moved(0, 300.0), 0);
    assert_eq!(rig.c.session().current_distance(), 100);

    assert_eq!(
        rig.send(PointerEvent::secondary_down(1, 400.0), 0),
        GestureOutcome::Consumed
    );
    assert!(rig.c.session().is_handoff_armed());
    // The second finger does not drive the distance while it is not tracked.
    rig.send(PointerEvent::moved(1, 420.0), 0);
    assert_eq!(rig.c.session().current_distance(), 100);

    rig.send(PointerEvent::secondary_up(0, 300.0), 0);
    assert_eq!(rig.c.session().tracked_pointer(), Some(1));
    assert_eq!(rig.c.session().carried_distance(), 100);

    rig.send(PointerEvent::moved(1, 480.0), 0);
    assert_eq!(rig.c.session().current_distance(), 130);
    assert_eq!(rig.c.offset(), -70);
    assert_eq!(rig.c.status(), RevealStatus::Dragging);
}

#[test]
fn lifting_an_untracked_pointer_keeps_tracking() {
    let mut rig = Rig::top(200, 1.0);
    rig.send(PointerEvent::down(0, 0.0), 0);
    rig.send(PointerEvent::moved(0, 50.0), 0);
    rig.send(PointerEvent::secondary_down(1, 10.0), 0);
    rig.send(PointerEvent::secondary_up(1, 10.0), 0);

    assert_eq!(rig.c.session().tracked_pointer(), Some(0));
    rig.send(PointerEvent::moved(0, 70.0), 0);
    assert_eq!(rig.c.session().current_distance(), 70);
}

#[test]
fn release_below_threshold_restores_hidden_offset() {
    let mut rig = Rig::top(100, 1.0);
    rig.send(PointerEvent::down(0, 0.0), 0);
    rig.send(PointerEvent::moved(0, 40.0), 0);
    assert_eq!(rig.c.offset(), -60);

    assert_eq!(
        rig.send(PointerEvent::up(0, 40.0), 0),
        GestureOutcome::Consumed
    );
    assert_eq!(rig.c.status(), RevealStatus::Idle);
    assert!(rig.c.is_animating());
    assert_eq!(rig.c.tick(39), Some(-99));
    assert!(!rig.c.is_animating());
    assert_eq!(rig.fired.get(), 0);
    assert!(!rig.calls().contains(&Call::Active));
}

#[test]
fn cancel_is_handled_like_up() {
    let mut rig = Rig::top(100, 1.0);
    rig.send(PointerEvent::down(0, 0.0), 0);
    rig.send(PointerEvent::moved(0, 150.0), 0);
    rig.send(PointerEvent::cancel(0, 150.0), 0);
    assert_eq!(rig.c.status(), RevealStatus::Triggering);
    assert_eq!(rig.fired.get(), 1);
}

#[test]
fn listener_fires_once_per_gesture() {
    let mut rig = Rig::top(50, 1.0);
    rig.trigger(0);
    // Stray releases after the gesture ended are ignored.
    assert_eq!(
        rig.send(PointerEvent::up(0, 0.0), 1),
        GestureOutcome::PassThrough
    );
    assert_eq!(rig.fired.get(), 1);

    rig.settle(100);
    assert!(rig.c.notify_complete("ok", 0, 100));
    rig.settle(1000);
    assert_eq!(rig.c.status(), RevealStatus::Idle);

    rig.trigger(2000);
    assert_eq!(rig.fired.get(), 2);
}

#[test]
fn notify_complete_outside_triggering_is_ignored() {
    let mut rig = Rig::top(100, 1.0);
    rig.calls();
    assert!(!rig.c.notify_complete("nope", 0, 0));
    assert!(rig.calls().is_empty());
    assert!(!rig.c.is_animating());
    assert!(!rig.c.has_pending_restore());
    assert_eq!(rig.c.tick(10), None);

    rig.send(PointerEvent::down(0, 0.0), 0);
    rig.send(PointerEvent::moved(0, 30.0), 0);
    rig.calls();
    assert!(!rig.c.notify_complete("nope", 0, 0));
    assert!(rig.calls().is_empty());
    assert_eq!(rig.c.status(), RevealStatus::Dragging);
}

#[test]
fn later_completion_supersedes_earlier_restore() {
    let mut rig = Rig::top(10, 1.0);
    rig.trigger(0);
    rig.settle(20);
    rig.calls();

    assert!(rig.c.notify_complete("a", 100, 20));
    assert!(rig.c.notify_complete("b", 300, 50));
    assert_eq!(
        rig.calls(),
        vec![
            Call::Complete("a".to_owned()),
            Call::Complete("b".to_owned())
        ]
    );

    assert_eq!(rig.c.tick(120), None);
    assert_eq!(rig.c.status(), RevealStatus::Triggering);
    assert!(rig.c.tick(350).is_some());
    assert_eq!(rig.c.status(), RevealStatus::Idle);
}

#[test]
fn stale_restore_does_not_touch_a_new_session() {
    let mut rig = Rig::top(100, 1.0);
    rig.trigger(0);
    rig.settle(200);
    assert!(rig.c.notify_complete("done", 100, 200));

    rig.c.cancel();
    assert_eq!(rig.c.status(), RevealStatus::Idle);
    assert_eq!(rig.c.offset(), -99);
    assert!(!rig.c.has_pending_restore());

    rig.send(PointerEvent::down(0, 0.0), 250);
    rig.send(PointerEvent::moved(0, 40.0), 260);
    assert_eq!(rig.c.status(), RevealStatus::Dragging);

    assert_eq!(rig.c.tick(300), None);
    assert_eq!(rig.c.status(), RevealStatus::Dragging);
    assert_eq!(rig.c.offset(), -60);
}

#[test]
fn gesture_waits_until_list_reaches_edge() {
    let mut rig = Rig::top(100, 1.0);
    let list = ListScroll::scrollable();

    rig.c.on_pointer(PointerEvent::down(0, 0.0), &list, 0);
    assert_eq!(
        rig.c.on_pointer(PointerEvent::moved(0, 50.0), &list, 0),
        GestureOutcome::PassThrough
    );
    assert_eq!(rig.c.status(), RevealStatus::Idle);
    assert_eq!(rig.c.offset(), -99);

    list.0.set(false);
    assert_eq!(
        rig.c.on_pointer(PointerEvent::moved(0, 80.0), &list, 0),
        GestureOutcome::Consumed
    );
    assert_eq!(rig.c.session().current_distance(), 30);
}

#[test]
fn slow_drag_builds_up_distance_on_both_edges() {
    for edge in [Edge::Top, Edge::Bottom] {
        let mut rig = Rig::new(edge, Panel::exact(100), 0.3);
        let start = 500.0;
        let step = 2.0 * edge.pull_sign();
        rig.send(PointerEvent::down(0, start), 0);
        for i in 1..=100u16 {
            rig.send(PointerEvent::moved(0, start + step * f32::from(i)), 0);
        }

        assert_eq!(rig.c.session().current_distance(), 60, "{edge}");
        assert_eq!(rig.c.status(), RevealStatus::Dragging, "{edge}");
        assert_eq!(rig.c.offset(), -40, "{edge}");
    }
}

#[test]
fn small_pull_away_does_not_move_the_reference() {
    let mut rig = Rig::top(100, 0.3);
    rig.send(PointerEvent::down(0, 0.0), 0);
    assert_eq!(
        rig.send(PointerEvent::moved(0, 3.0), 0),
        GestureOutcome::PassThrough
    );
    assert_eq!(rig.c.session().reference_y(), 0.0);
    assert_eq!(
        rig.send(PointerEvent::moved(0, 4.0), 0),
        GestureOutcome::Consumed
    );
    assert_eq!(rig.c.session().current_distance(), 1);
}

#[test]
fn pushing_back_past_start_returns_to_idle() {
    let mut rig = Rig::top(100, 1.0);
    rig.send(PointerEvent::down(0, 100.0), 0);
    rig.send(PointerEvent::moved(0, 150.0), 0);
    rig.calls();

    assert_eq!(
        rig.send(PointerEvent::moved(0, 90.0), 0),
        GestureOutcome::PassThrough
    );
    assert_eq!(rig.c.status(), RevealStatus::Idle);
    assert_eq!(rig.c.offset(), -99);
    assert_eq!(rig.calls(), vec![Call::Pulling(0, 100)]);
    assert!(!rig.c.session().is_engaged());

    // The distance is still measured from the pointer-down position.
    rig.send(PointerEvent::moved(0, 95.0), 0);
    assert!(!rig.c.session().is_engaged());
    assert_eq!(
        rig.send(PointerEvent::moved(0, 110.0), 0),
        GestureOutcome::Consumed
    );
    assert_eq!(rig.c.session().current_distance(), 10);
    assert_eq!(rig.c.status(), RevealStatus::Dragging);
}

#[test]
fn bottom_edge_reveals_when_pulling_up() {
    let mut rig = Rig::new(Edge::Bottom, Panel::exact(50), 1.0);
    assert_eq!(rig.panel.bottom.get(), -49);

    rig.send(PointerEvent::down(0, 500.0), 0);
    assert_eq!(
        rig.send(PointerEvent::moved(0, 520.0), 0),
        GestureOutcome::PassThrough
    );
    rig.send(PointerEvent::moved(0, 470.0), 0);
    assert_eq!(rig.c.session().current_distance(), 30);
    assert_eq!(rig.c.status(), RevealStatus::Dragging);
    assert_eq!(rig.panel.bottom.get(), -20);
    assert_eq!(rig.panel.top.get(), 0);
}

#[test]
fn elastic_edge_never_triggers() {
    let mut rig = Rig::top(40, 1.0);
    rig.c.set_trigger_enabled(false);
    rig.send(PointerEvent::down(0, 0.0), 0);
    rig.send(PointerEvent::moved(0, 100.0), 0);
    assert_eq!(rig.c.status(), RevealStatus::ReadyToTrigger);

    rig.send(PointerEvent::up(0, 100.0), 0);
    assert_eq!(rig.c.status(), RevealStatus::Idle);
    assert_eq!(rig.fired.get(), 0);
    rig.settle(1000);
    assert_eq!(rig.c.offset(), -39);
}

#[test]
fn triggering_blocks_new_drags() {
    let mut rig = Rig::top(30, 1.0);
    rig.trigger(0);
    rig.settle(100);

    rig.send(PointerEvent::down(0, 0.0), 100);
    assert_eq!(
        rig.send(PointerEvent::moved(0, 60.0), 100),
        GestureOutcome::PassThrough
    );
    assert_eq!(rig.c.status(), RevealStatus::Triggering);
    assert_eq!(rig.c.offset(), 0);
}

#[test]
fn missing_edge_widget_is_a_configuration_error() {
    let creator = Recorder {
        widget: None,
        calls: Rc::new(RefCell::new(Vec::new())),
    };
    let err = DragGestureController::new(Edge::Bottom, creator, GestureOptions::default())
        .unwrap_err();
    assert_eq!(err, ConfigError::MissingEdgeWidget { edge: Edge::Bottom });
    assert_eq!(err.edge(), Edge::Bottom);
}

#[test]
fn edge_widget_must_not_match_parent() {
    let creator = Recorder {
        widget: Some(Panel::with_spec(HeightSpec::MatchParent, 0)),
        calls: Rc::new(RefCell::new(Vec::new())),
    };
    let mut c = DragGestureController::new(Edge::Top, creator, GestureOptions::default()).unwrap();
    assert_eq!(
        c.on_layout(100),
        Err(ConfigError::NonExactEdgeHeight { edge: Edge::Top })
    );
    assert_eq!(c.edge_size(), None);
}

#[test]
fn wrap_content_edge_is_measured_once() {
    let panel = Panel::with_spec(HeightSpec::WrapContent, 64);
    let mut rig = Rig::new(Edge::Top, Rc::clone(&panel), 1.0);
    assert_eq!(rig.c.edge_size(), Some(64));
    assert_eq!(rig.c.hidden_offset(), -63);

    rig.c.on_layout(800).unwrap();
    rig.c.on_layout(800).unwrap();
    assert_eq!(panel.measure_calls.get(), 1);
}

#[test]
fn unmeasured_edge_passes_events_through() {
    let mut rig = Rig::top(0, 1.0);
    assert_eq!(rig.c.edge_size(), None);
    rig.send(PointerEvent::down(0, 0.0), 0);
    assert_eq!(
        rig.send(PointerEvent::moved(0, 100.0), 0),
        GestureOutcome::PassThrough
    );
    assert_eq!(rig.c.status(), RevealStatus::Idle);
}

#[test]
fn tween_duration_matches_distance() {
    let t = Tween::by_distance(10, -90, 5);
    assert_eq!(t.duration_ms, 100);
    assert_eq!(t.sample(5), 10);
    assert_eq!(t.sample(55), -40);
    assert_eq!(t.sample(105), -90);
    assert!(t.is_done(105));

    let still = Tween::by_distance(3, 3, 0);
    assert_eq!(still.duration_ms, 1);
    assert_eq!(still.sample(0), 3);
}

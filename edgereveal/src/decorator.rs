use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::adapter::OnListChange;
use crate::position;
use crate::slots::{Namespace, SlotTable};
use crate::{GridLayout, ListAdapter, ListChange, Position, SlotHolder, SlotKey, ViewKind};

/// Presents `headers ++ adapter items ++ footers` to a host list view as one list.
///
/// The wrapped adapter only ever sees its own indexes. The decorator:
/// - remaps positions and view kinds (header/footer slots get synthetic [`SlotKey`]s),
/// - manages an optional empty-state slot that is shown as an extra header while the adapter
///   has no items,
/// - proxies the adapter's change notifications to the host, offset by the header count.
///
/// Host notifications are delivered through the `on_change` callback. Nothing is cached between
/// queries: every answer is recomputed from the current slot tables and adapter count.
///
/// Slots can be registered before an adapter is attached; until then the decorated list is
/// empty (`item_count() == 0`).
pub struct ListDecorator<A, W> {
    adapter: Option<A>,
    headers: SlotTable<W>,
    footers: SlotTable<W>,
    empty_view: Option<Rc<W>>,
    grid_span: Option<usize>,
    on_change: Option<OnListChange>,

    notify_depth: usize,
    pending: Vec<ListChange>,
}

impl<A: ListAdapter, W> Default for ListDecorator<A, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ListAdapter, W> ListDecorator<A, W> {
    /// Creates a detached decorator.
    pub fn new() -> Self {
        Self {
            adapter: None,
            headers: SlotTable::new(Namespace::Header),
            footers: SlotTable::new(Namespace::Footer),
            empty_view: None,
            grid_span: None,
            on_change: None,
            notify_depth: 0,
            pending: Vec::new(),
        }
    }

    pub fn with_adapter(adapter: A) -> Self {
        let mut d = Self::new();
        d.set_adapter(adapter);
        d
    }

    /// Attaches `adapter`, replacing (and returning) the previous one.
    ///
    /// Registered headers, footers and the empty-state view carry over to the new adapter.
    pub fn set_adapter(&mut self, adapter: A) -> Option<A> {
        vdebug!(items = adapter.item_count(), "ListDecorator::set_adapter");
        let mut prev = None;
        self.batch_update(|d| {
            prev = d.adapter.replace(adapter);
            d.sync_empty_state();
            d.notify(ListChange::Reset);
        });
        prev
    }

    /// Detaches and returns the wrapped adapter. The decorated list becomes empty.
    pub fn take_adapter(&mut self) -> Option<A> {
        let mut prev = None;
        self.batch_update(|d| {
            prev = d.adapter.take();
            if prev.is_some() {
                d.sync_empty_state();
                d.notify(ListChange::Reset);
            }
        });
        prev
    }

    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    /// Mutable access to the wrapped adapter.
    ///
    /// Changes made through this reference must be reported with
    /// [`notify_adapter_changed`](Self::notify_adapter_changed); prefer
    /// [`update_adapter`](Self::update_adapter), which does both.
    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    pub fn is_attached(&self) -> bool {
        self.adapter.is_some()
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&ListChange) + 'static>) {
        self.on_change = on_change.map(|f| Rc::new(f) as _);
    }

    fn emit(&self, change: &ListChange) {
        vtrace!(change = ?change, "ListDecorator::emit");
        if let Some(cb) = &self.on_change {
            cb(change);
        }
    }

    fn notify(&mut self, change: ListChange) {
        if self.notify_depth > 0 {
            self.pending.push(change);
            return;
        }
        self.emit(&change);
    }

    /// Batches the notifications emitted by `f`.
    ///
    /// When `f` emits any full refresh, the host receives a single [`ListChange::Reset`];
    /// otherwise the ranged notifications are delivered in order once `f` returns.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);
        if self.notify_depth > 0 || self.pending.is_empty() {
            return;
        }

        let pending = core::mem::take(&mut self.pending);
        if pending.iter().any(ListChange::is_reset) {
            self.emit(&ListChange::Reset);
        } else {
            for change in &pending {
                self.emit(change);
            }
        }
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn footer_count(&self) -> usize {
        self.footers.len()
    }

    /// Number of items reported by the wrapped adapter (0 when detached).
    pub fn body_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |a| a.item_count())
    }

    pub fn contains_header(&self, widget: &Rc<W>) -> bool {
        self.headers.contains(widget)
    }

    pub fn contains_footer(&self, widget: &Rc<W>) -> bool {
        self.footers.contains(widget)
    }

    pub fn headers(&self) -> impl Iterator<Item = &Rc<W>> {
        self.headers.iter()
    }

    pub fn footers(&self) -> impl Iterator<Item = &Rc<W>> {
        self.footers.iter()
    }

    /// Appends a header slot. Returns `false` if `widget` is already a header.
    pub fn add_header(&mut self, widget: Rc<W>) -> bool {
        let Some(key) = self.headers.push(widget) else {
            vdebug!("add_header: widget already present");
            return false;
        };
        vdebug!(key = key.id(), headers = self.headers.len(), "add_header");
        self.notify(ListChange::Reset);
        true
    }

    /// Inserts a header slot before all other headers.
    pub fn insert_header_first(&mut self, widget: Rc<W>) -> bool {
        let Some(key) = self.headers.push_front(widget) else {
            vdebug!("insert_header_first: widget already present");
            return false;
        };
        vdebug!(key = key.id(), headers = self.headers.len(), "insert_header_first");
        self.notify(ListChange::Reset);
        true
    }

    /// Appends a footer slot. Returns `false` if `widget` is already a footer.
    pub fn add_footer(&mut self, widget: Rc<W>) -> bool {
        let Some(key) = self.footers.push(widget) else {
            vdebug!("add_footer: widget already present");
            return false;
        };
        vdebug!(key = key.id(), footers = self.footers.len(), "add_footer");
        self.notify(ListChange::Reset);
        true
    }

    pub fn remove_header(&mut self, widget: &Rc<W>) -> bool {
        let Some(key) = self.headers.remove(widget) else {
            return false;
        };
        vdebug!(key = key.id(), headers = self.headers.len(), "remove_header");
        self.notify(ListChange::Reset);
        true
    }

    pub fn remove_footer(&mut self, widget: &Rc<W>) -> bool {
        let Some(key) = self.footers.remove(widget) else {
            return false;
        };
        vdebug!(key = key.id(), footers = self.footers.len(), "remove_footer");
        self.notify(ListChange::Reset);
        true
    }

    /// Sets the widget shown (as an extra header) while the adapter has no items.
    ///
    /// A previously set empty-state widget is removed first.
    pub fn set_empty_state_view(&mut self, widget: Rc<W>) {
        self.batch_update(|d| {
            if let Some(prev) = d.empty_view.take() {
                d.remove_header(&prev);
            }
            d.empty_view = Some(widget);
            d.sync_empty_state();
        });
    }

    pub fn clear_empty_state_view(&mut self) -> Option<Rc<W>> {
        let prev = self.empty_view.take()?;
        self.remove_header(&prev);
        Some(prev)
    }

    pub fn empty_state_view(&self) -> Option<&Rc<W>> {
        self.empty_view.as_ref()
    }

    /// Whether the empty-state slot is currently part of the list.
    pub fn is_showing_empty_state(&self) -> bool {
        self.empty_view
            .as_ref()
            .is_some_and(|w| self.headers.contains(w))
    }

    fn sync_empty_state(&mut self) {
        let Some(empty) = self.empty_view.clone() else {
            return;
        };
        let show = self.adapter.as_ref().is_some_and(|a| a.item_count() == 0);
        if show {
            self.add_header(empty);
        } else {
            self.remove_header(&empty);
        }
    }

    /// Entry point for the wrapped adapter's change notifications (in adapter coordinates).
    ///
    /// Re-evaluates the empty-state slot, then forwards the change to the host offset by the
    /// header count, unless the adapter reports that it notifies the host itself.
    pub fn notify_adapter_changed(&mut self, change: ListChange) {
        let Some(adapter) = self.adapter.as_ref() else {
            vdebug!("notify_adapter_changed: no adapter attached");
            return;
        };
        let forward = !adapter.forwards_own_changes();
        self.batch_update(|d| {
            d.sync_empty_state();
            if forward {
                let by = d.headers.len();
                d.notify(change.offset(by));
            }
        });
    }

    /// Mutates the wrapped adapter and proxies the change it reports.
    ///
    /// Returns `false` (without calling `f`) when no adapter is attached.
    pub fn update_adapter(&mut self, f: impl FnOnce(&mut A) -> ListChange) -> bool {
        let Some(adapter) = self.adapter.as_mut() else {
            return false;
        };
        let change = f(adapter);
        self.notify_adapter_changed(change);
        true
    }

    /// `headers + footers + adapter items`; 0 when detached.
    pub fn item_count(&self) -> usize {
        match &self.adapter {
            Some(a) => position::total(self.headers.len(), a.item_count(), self.footers.len()),
            None => 0,
        }
    }

    pub fn classify(&self, position: usize) -> Option<Position> {
        let adapter = self.adapter.as_ref()?;
        position::classify(
            position,
            self.headers.len(),
            adapter.item_count(),
            self.footers.len(),
        )
    }

    pub fn view_kind_at(&self, position: usize) -> Option<ViewKind<A::Kind>> {
        match self.classify(position)? {
            Position::Header(i) => self.headers.key_at(i).map(ViewKind::Slot),
            Position::Footer(i) => self.footers.key_at(i).map(ViewKind::Slot),
            Position::Body(i) => self.adapter.as_ref()?.view_kind_at(i).map(ViewKind::Item),
        }
    }

    /// The slot widget at `position`, if it is a header or footer position.
    pub fn slot_widget_at(&self, position: usize) -> Option<&Rc<W>> {
        match self.classify(position)? {
            Position::Header(i) => self.headers.widget_at(i),
            Position::Footer(i) => self.footers.widget_at(i),
            Position::Body(_) => None,
        }
    }

    pub fn create_view(&mut self, kind: &ViewKind<A::Kind>) -> Option<SlotHolder<W, A::Holder>> {
        match kind {
            ViewKind::Slot(key) => {
                let table = match key {
                    SlotKey::Header(_) => &self.headers,
                    SlotKey::Footer(_) => &self.footers,
                };
                table
                    .widget_for(*key)
                    .map(|w| SlotHolder::Slot(Rc::clone(w)))
            }
            ViewKind::Item(k) => self.adapter.as_mut()?.create_view(k).map(SlotHolder::Item),
        }
    }

    /// Binds a body position through the wrapped adapter. Slot positions are static: no-op.
    pub fn bind_view(&mut self, holder: &mut SlotHolder<W, A::Holder>, position: usize) {
        let Some(Position::Body(index)) = self.classify(position) else {
            return;
        };
        if let (Some(adapter), SlotHolder::Item(h)) = (self.adapter.as_mut(), holder) {
            adapter.bind_view(h, index);
        }
    }

    /// Enables full-row spans for header/footer slots when `layout` is a grid.
    ///
    /// Disabling, or a non-grid layout, makes every position span a single column.
    pub fn set_grid_span_adjustment(&mut self, layout: &dyn GridLayout, enabled: bool) {
        self.grid_span = if enabled {
            layout.grid_span_count().filter(|&n| n > 0)
        } else {
            None
        };
        vdebug!(span = ?self.grid_span, "set_grid_span_adjustment");
    }

    /// Column span of `position`: the full row for slots when grid adjustment is on, else 1.
    pub fn span_size_at(&self, position: usize) -> usize {
        match (self.grid_span, self.classify(position)) {
            (Some(span), Some(p)) if p.is_slot() => span,
            _ => 1,
        }
    }
}

impl<A: ListAdapter, W> ListAdapter for ListDecorator<A, W> {
    type Kind = ViewKind<A::Kind>;
    type Holder = SlotHolder<W, A::Holder>;

    fn item_count(&self) -> usize {
        ListDecorator::item_count(self)
    }

    fn view_kind_at(&self, index: usize) -> Option<Self::Kind> {
        ListDecorator::view_kind_at(self, index)
    }

    fn create_view(&mut self, kind: &Self::Kind) -> Option<Self::Holder> {
        ListDecorator::create_view(self, kind)
    }

    fn bind_view(&mut self, holder: &mut Self::Holder, index: usize) {
        ListDecorator::bind_view(self, holder, index);
    }

    fn forwards_own_changes(&self) -> bool {
        true
    }
}

impl<A, W> core::fmt::Debug for ListDecorator<A, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListDecorator")
            .field("attached", &self.adapter.is_some())
            .field("headers", &self.headers.len())
            .field("footers", &self.footers.len())
            .field("has_empty_view", &self.empty_view.is_some())
            .field("grid_span", &self.grid_span)
            .finish_non_exhaustive()
    }
}

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::SlotKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Namespace {
    Header,
    Footer,
}

impl Namespace {
    fn start(self) -> u32 {
        match self {
            Self::Header => SlotKey::HEADER_START,
            Self::Footer => SlotKey::FOOTER_START,
        }
    }

    fn key(self, id: u32) -> SlotKey {
        match self {
            Self::Header => SlotKey::Header(id),
            Self::Footer => SlotKey::Footer(id),
        }
    }
}

/// Ordered header or footer slots. Order in the table is display order.
///
/// A widget instance (by `Rc` identity) appears at most once.
pub(crate) struct SlotTable<W> {
    namespace: Namespace,
    next_id: u32,
    entries: Vec<(SlotKey, Rc<W>)>,
}

impl<W> SlotTable<W> {
    pub(crate) fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            next_id: namespace.start(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn contains(&self, widget: &Rc<W>) -> bool {
        self.index_of(widget).is_some()
    }

    fn index_of(&self, widget: &Rc<W>) -> Option<usize> {
        self.entries.iter().position(|(_, w)| Rc::ptr_eq(w, widget))
    }

    fn next_key(&mut self) -> SlotKey {
        let key = self.namespace.key(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        key
    }

    /// Appends `widget`. Returns `None` if it is already present.
    pub(crate) fn push(&mut self, widget: Rc<W>) -> Option<SlotKey> {
        if self.contains(&widget) {
            return None;
        }
        let key = self.next_key();
        self.entries.push((key, widget));
        Some(key)
    }

    /// Inserts `widget` before every other slot. Returns `None` if it is already present.
    pub(crate) fn push_front(&mut self, widget: Rc<W>) -> Option<SlotKey> {
        if self.contains(&widget) {
            return None;
        }
        let key = self.next_key();
        self.entries.insert(0, (key, widget));
        Some(key)
    }

    pub(crate) fn remove(&mut self, widget: &Rc<W>) -> Option<SlotKey> {
        let index = self.index_of(widget)?;
        Some(self.entries.remove(index).0)
    }

    pub(crate) fn key_at(&self, index: usize) -> Option<SlotKey> {
        self.entries.get(index).map(|(k, _)| *k)
    }

    pub(crate) fn widget_at(&self, index: usize) -> Option<&Rc<W>> {
        self.entries.get(index).map(|(_, w)| w)
    }

    pub(crate) fn widget_for(&self, key: SlotKey) -> Option<&Rc<W>> {
        self.entries
            .iter()
            .find_map(|(k, w)| if *k == key { Some(w) } else { None })
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Rc<W>> {
        self.entries.iter().map(|(_, w)| w)
    }
}

//! Observable list with collection-change signals.
//!
//! `ObservableList<T>` is an insertion-ordered sequence that emits a signal
//! after every mutation. It is the storage behind a [`Group`]'s full item
//! list and its capped top-items mirror.
//!
//! [`Group`]: crate::model::Group

use parking_lot::RwLock;
use tidepool_core::Signal;

/// Signals emitted by an [`ObservableList`] after each mutation.
///
/// Every signal fires after the mutation has completed and the internal lock
/// has been released, so slots may freely re-read the list.
pub struct ListSignals {
    /// Emitted after an element was inserted. Arg: the insertion index.
    pub inserted: Signal<usize>,

    /// Emitted after an element was removed. Arg: the index it was removed from.
    pub removed: Signal<usize>,

    /// Emitted after an element was moved. Args: (old index, new index).
    pub moved: Signal<(usize, usize)>,

    /// Emitted after an element was overwritten in place. Arg: the index.
    pub replaced: Signal<usize>,

    /// Emitted after the list was cleared or reloaded wholesale.
    pub reset: Signal<()>,
}

impl Default for ListSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSignals {
    /// Creates a new set of list signals.
    pub fn new() -> Self {
        Self {
            inserted: Signal::new(),
            removed: Signal::new(),
            moved: Signal::new(),
            replaced: Signal::new(),
            reset: Signal::new(),
        }
    }
}

/// An insertion-ordered list that notifies observers of every mutation.
///
/// Observers connect to [`signals`](Self::signals); each mutating operation
/// emits exactly one signal describing the edit. Indices passed to the
/// mutating operations are a programming contract: out-of-range indices
/// panic rather than returning an error.
///
/// # Example
///
/// ```
/// use tidepool::model::ObservableList;
///
/// let list = ObservableList::new();
/// list.signals().inserted.connect(|&idx| {
///     println!("inserted at {idx}");
/// });
/// list.push("Koi Carp".to_string());
/// assert_eq!(list.len(), 1);
/// ```
pub struct ObservableList<T> {
    items: RwLock<Vec<T>>,
    signals: ListSignals,
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObservableList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a list with initial contents. No signal is emitted.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            signals: ListSignals::new(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns the signals for this list.
    pub fn signals(&self) -> &ListSignals {
        &self.signals
    }

    /// Returns a read guard over the elements.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Appends an element to the end of the list.
    pub fn push(&self, item: T) {
        let idx = {
            let mut items = self.items.write();
            items.push(item);
            items.len() - 1
        };
        self.signals.inserted.emit(idx);
    }

    /// Inserts an element at `idx`, shifting later elements right.
    ///
    /// # Panics
    ///
    /// Panics if `idx > len()`.
    pub fn insert(&self, idx: usize, item: T) {
        self.items.write().insert(idx, item);
        self.signals.inserted.emit(idx);
    }

    /// Removes and returns the element at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    pub fn remove(&self, idx: usize) -> T {
        let removed = self.items.write().remove(idx);
        self.signals.removed.emit(idx);
        removed
    }

    /// Moves the element at `old` so that it ends up at index `new`.
    ///
    /// The element is removed first and reinserted at `new` within the
    /// shortened list, matching the classic observable-collection move
    /// semantics. `old == new` is permitted and leaves the contents
    /// unchanged; the `moved` signal still fires.
    ///
    /// # Panics
    ///
    /// Panics if `old` or `new` is out of range.
    pub fn move_item(&self, old: usize, new: usize) {
        {
            let mut items = self.items.write();
            let item = items.remove(old);
            items.insert(new, item);
        }
        self.signals.moved.emit((old, new));
    }

    /// Overwrites the element at `idx`, returning the previous element.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    pub fn replace(&self, idx: usize, item: T) -> T {
        let old = std::mem::replace(&mut self.items.write()[idx], item);
        self.signals.replaced.emit(idx);
        old
    }

    /// Removes all elements. Always emits `reset`, even when already empty.
    pub fn clear(&self) {
        self.items.write().clear();
        self.signals.reset.emit(());
    }

    /// Replaces the entire contents. Emits `reset`.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.signals.reset.emit(());
    }
}

impl<T: Clone> ObservableList<T> {
    /// Returns a clone of the element at `idx`, or `None` if out of range.
    pub fn get(&self, idx: usize) -> Option<T> {
        self.items.read().get(idx).cloned()
    }

    /// Returns a snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.read().clone()
    }
}

static_assertions::assert_impl_all!(ObservableList<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn record<A: Copy + Send + 'static>(signal: &Signal<A>) -> Arc<Mutex<Vec<A>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recv = events.clone();
        signal.connect(move |&arg| recv.lock().push(arg));
        events
    }

    #[test]
    fn test_push_emits_inserted() {
        let list = ObservableList::new();
        let events = record(&list.signals().inserted);

        list.push("a");
        list.push("b");

        assert_eq!(list.len(), 2);
        assert_eq!(*events.lock(), vec![0, 1]);
    }

    #[test]
    fn test_insert_at_index() {
        let list = ObservableList::from_vec(vec![1, 3]);
        let events = record(&list.signals().inserted);

        list.insert(1, 2);

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(*events.lock(), vec![1]);
    }

    #[test]
    fn test_remove_returns_element() {
        let list = ObservableList::from_vec(vec!["a", "b", "c"]);
        let events = record(&list.signals().removed);

        assert_eq!(list.remove(1), "b");
        assert_eq!(list.to_vec(), vec!["a", "c"]);
        assert_eq!(*events.lock(), vec![1]);
    }

    #[test]
    fn test_move_item() {
        let list = ObservableList::from_vec(vec![1, 2, 3, 4]);
        let events = record(&list.signals().moved);

        list.move_item(0, 3);

        assert_eq!(list.to_vec(), vec![2, 3, 4, 1]);
        assert_eq!(*events.lock(), vec![(0, 3)]);
    }

    #[test]
    fn test_move_item_same_index() {
        let list = ObservableList::from_vec(vec![1, 2, 3]);
        let events = record(&list.signals().moved);

        list.move_item(1, 1);

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(*events.lock(), vec![(1, 1)]);
    }

    #[test]
    fn test_replace() {
        let list = ObservableList::from_vec(vec![10, 20]);
        let events = record(&list.signals().replaced);

        assert_eq!(list.replace(1, 25), 20);
        assert_eq!(list.to_vec(), vec![10, 25]);
        assert_eq!(*events.lock(), vec![1]);
    }

    #[test]
    fn test_clear_always_emits_reset() {
        let list = ObservableList::<i32>::new();
        let events = record(&list.signals().reset);

        list.clear();
        list.clear();

        assert_eq!(events.lock().len(), 2);
    }

    #[test]
    fn test_set_items_emits_reset() {
        let list = ObservableList::from_vec(vec![1]);
        let events = record(&list.signals().reset);

        list.set_items(vec![4, 5, 6]);

        assert_eq!(list.to_vec(), vec![4, 5, 6]);
        assert_eq!(events.lock().len(), 1);
    }

    #[test]
    fn test_slot_can_read_list_during_emit() {
        // The lock must be released before the signal fires.
        let list = Arc::new(ObservableList::new());
        let seen_len = Arc::new(Mutex::new(0));

        let list2 = list.clone();
        let recv = seen_len.clone();
        list.signals().inserted.connect(move |_| {
            *recv.lock() = list2.len();
        });

        list.push(1);
        list.push(2);

        assert_eq!(*seen_len.lock(), 2);
    }
}

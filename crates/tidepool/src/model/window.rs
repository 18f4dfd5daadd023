//! Capped prefix mirror of an observable list.
//!
//! `TopWindow<T>` keeps a bounded destination list equal to the first
//! `capacity` elements of an unbounded source list, updating it with
//! incremental edits driven by the source's mutation signals. Views bind to
//! the window where virtualizing the full list would be too expensive.

use std::sync::Arc;

use tidepool_core::ConnectionId;

use super::observable_list::ObservableList;

/// A size-capped, order-preserving mirror of an [`ObservableList`]'s prefix.
///
/// After every source mutation the window equals
/// `source[0..min(capacity, source.len())]`, re-established by an O(1) edit
/// per event rather than a rebuild. The only exception is `reset`, which
/// refills the window from scratch.
///
/// The window is itself an `ObservableList`, so observers can bind to it and
/// receive the incremental edits as they are applied.
///
/// The mirror assumes the source emits well-formed events: indices carried by
/// source signals refer to real positions in the source list. Malformed
/// events are a programming-contract violation and panic.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tidepool::model::{ObservableList, TopWindow};
///
/// let source = Arc::new(ObservableList::new());
/// let window = TopWindow::new(source.clone(), 12);
///
/// for n in 0..15 {
///     source.push(n);
/// }
///
/// assert_eq!(window.len(), 12);
/// assert_eq!(window.to_vec(), (0..12).collect::<Vec<_>>());
/// ```
pub struct TopWindow<T: Clone + Send + Sync + 'static> {
    source: Arc<ObservableList<T>>,
    window: Arc<ObservableList<T>>,
    capacity: usize,
    connections: [ConnectionId; 5],
}

impl<T: Clone + Send + Sync + 'static> TopWindow<T> {
    /// Creates a window over `source`, capped at `capacity` elements.
    ///
    /// The window is seeded from the source's current prefix and then tracks
    /// every subsequent mutation.
    pub fn new(source: Arc<ObservableList<T>>, capacity: usize) -> Self {
        let window = Arc::new(ObservableList::from_vec(prefix(&source, capacity)));

        let inserted = {
            let (src, win) = (source.clone(), window.clone());
            source.signals().inserted.connect(move |&idx| {
                on_inserted(&src, &win, capacity, idx);
            })
        };
        let moved = {
            let (src, win) = (source.clone(), window.clone());
            source.signals().moved.connect(move |&(old, new)| {
                on_moved(&src, &win, capacity, old, new);
            })
        };
        let removed = {
            let (src, win) = (source.clone(), window.clone());
            source.signals().removed.connect(move |&idx| {
                on_removed(&src, &win, capacity, idx);
            })
        };
        let replaced = {
            let (src, win) = (source.clone(), window.clone());
            source.signals().replaced.connect(move |&idx| {
                on_replaced(&src, &win, capacity, idx);
            })
        };
        let reset = {
            let (src, win) = (source.clone(), window.clone());
            source.signals().reset.connect(move |_| {
                on_reset(&src, &win, capacity);
            })
        };

        Self {
            source,
            window,
            capacity,
            connections: [inserted, moved, removed, replaced, reset],
        }
    }

    /// Returns the mirrored window list.
    ///
    /// The returned list is read-only by convention: it is maintained by the
    /// mirror and observers should only connect to its signals.
    pub fn list(&self) -> &Arc<ObservableList<T>> {
        &self.window
    }

    /// Returns the source list this window mirrors.
    pub fn source(&self) -> &Arc<ObservableList<T>> {
        &self.source
    }

    /// Returns the window's capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of mirrored elements.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Returns a snapshot of the mirrored elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.window.to_vec()
    }
}

impl<T: Clone + Send + Sync + 'static> Drop for TopWindow<T> {
    fn drop(&mut self) {
        let signals = self.source.signals();
        let [inserted, moved, removed, replaced, reset] = self.connections;
        signals.inserted.disconnect(inserted);
        signals.moved.disconnect(moved);
        signals.removed.disconnect(removed);
        signals.replaced.disconnect(replaced);
        signals.reset.disconnect(reset);
    }
}

/// The source's first `min(capacity, len)` elements, in order.
fn prefix<T: Clone>(source: &ObservableList<T>, capacity: usize) -> Vec<T> {
    source.items().iter().take(capacity).cloned().collect()
}

/// The source element that now sits at the window boundary (index
/// `capacity - 1`). Used to backfill the window when an in-window element is
/// removed or slides out while the source still fills the window.
fn boundary_element<T: Clone>(source: &ObservableList<T>, capacity: usize) -> T {
    source
        .get(capacity - 1)
        .expect("source shorter than window while backfilling")
}

fn on_inserted<T: Clone>(
    source: &ObservableList<T>,
    window: &ObservableList<T>,
    capacity: usize,
    idx: usize,
) {
    if idx >= capacity {
        return;
    }
    let item = source.get(idx).expect("insert index out of source bounds");
    window.insert(idx, item);
    if window.len() > capacity {
        window.remove(capacity);
    }
}

fn on_moved<T: Clone>(
    source: &ObservableList<T>,
    window: &ObservableList<T>,
    capacity: usize,
    old: usize,
    new: usize,
) {
    match (old < capacity, new < capacity) {
        // Both positions visible: reorder in place.
        (true, true) => window.move_item(old, new),
        // Moved out of the window: the boundary element slid in.
        (true, false) => {
            window.remove(old);
            window.push(boundary_element(source, capacity));
        }
        // Moved into the window: the former last element slid out.
        (false, true) => {
            let item = source.get(new).expect("move target out of source bounds");
            window.insert(new, item);
            window.remove(capacity);
        }
        (false, false) => {}
    }
}

fn on_removed<T: Clone>(
    source: &ObservableList<T>,
    window: &ObservableList<T>,
    capacity: usize,
    idx: usize,
) {
    if idx >= capacity {
        return;
    }
    window.remove(idx);
    if source.len() >= capacity {
        window.push(boundary_element(source, capacity));
    }
}

fn on_replaced<T: Clone>(
    source: &ObservableList<T>,
    window: &ObservableList<T>,
    capacity: usize,
    idx: usize,
) {
    if idx >= capacity {
        return;
    }
    let item = source.get(idx).expect("replace index out of source bounds");
    window.replace(idx, item);
}

fn on_reset<T: Clone>(source: &ObservableList<T>, window: &ObservableList<T>, capacity: usize) {
    window.set_items(prefix(source, capacity));
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: usize = 12;

    fn init_tracing() {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn setup(len: usize) -> (Arc<ObservableList<i32>>, TopWindow<i32>) {
        init_tracing();
        let source = Arc::new(ObservableList::from_vec((0..len as i32).collect()));
        let window = TopWindow::new(source.clone(), CAP);
        (source, window)
    }

    /// The core invariant: the window equals the source's capped prefix.
    fn assert_mirrors(source: &ObservableList<i32>, window: &TopWindow<i32>) {
        let expected: Vec<i32> = source.items().iter().take(CAP).cloned().collect();
        assert_eq!(window.to_vec(), expected);
    }

    #[test]
    fn test_seeds_from_existing_source() {
        let (source, window) = setup(20);
        assert_eq!(window.len(), CAP);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_sequential_appends_fill_then_stop() {
        let source = Arc::new(ObservableList::new());
        let window = TopWindow::new(source.clone(), CAP);

        for n in 0..15 {
            source.push(n);
            assert_mirrors(&source, &window);
        }

        assert_eq!(window.len(), CAP);
        assert_eq!(window.to_vec(), (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert_at_boundary_is_ignored() {
        let (source, window) = setup(12);
        source.insert(12, 99);

        assert_eq!(window.len(), CAP);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_insert_at_front_of_full_window_drops_last() {
        let (source, window) = setup(12);
        source.insert(0, -1);

        assert_eq!(window.len(), CAP);
        assert_eq!(window.to_vec()[0], -1);
        assert!(!window.to_vec().contains(&11));
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_insert_into_partial_window() {
        let (source, window) = setup(5);
        source.insert(2, 99);

        assert_eq!(window.len(), 6);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_remove_last_visible_without_backfill() {
        // |S| == 12 exactly: removing index 11 leaves nothing to backfill.
        let (source, window) = setup(12);
        source.remove(11);

        assert_eq!(window.len(), 11);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_remove_last_visible_with_backfill() {
        // |S| == 13: element 12 backfills the window.
        let (source, window) = setup(13);
        source.remove(11);

        assert_eq!(window.len(), CAP);
        assert_eq!(window.to_vec()[11], 12);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_remove_beyond_window_is_ignored() {
        let (source, window) = setup(20);
        source.remove(15);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_move_within_window() {
        let (source, window) = setup(12);
        source.move_item(0, 11);

        assert_eq!(window.len(), CAP);
        assert_eq!(window.to_vec()[11], 0);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_move_same_index_is_content_noop() {
        let (source, window) = setup(12);
        source.move_item(3, 3);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_move_out_of_window_backfills() {
        let (source, window) = setup(20);
        source.move_item(2, 18);

        assert_eq!(window.len(), CAP);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_move_into_window_evicts_last() {
        let (source, window) = setup(20);
        source.move_item(18, 2);

        assert_eq!(window.len(), CAP);
        assert_eq!(window.to_vec()[2], 18);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_move_entirely_beyond_window_is_ignored() {
        let (source, window) = setup(20);
        source.move_item(14, 17);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_replace_within_window() {
        let (source, window) = setup(15);
        source.replace(4, 400);

        assert_eq!(window.to_vec()[4], 400);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_replace_beyond_window_is_ignored() {
        let (source, window) = setup(15);
        source.replace(13, 1300);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_reset_refills_window() {
        let (source, window) = setup(5);
        source.set_items((100..130).collect());

        assert_eq!(window.len(), CAP);
        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (source, window) = setup(20);
        source.clear();
        let after_first = window.to_vec();
        source.clear();

        assert_eq!(window.to_vec(), after_first);
        assert!(window.is_empty());
    }

    #[test]
    fn test_mixed_event_sequence_preserves_invariant() {
        let source = Arc::new(ObservableList::new());
        let window = TopWindow::new(source.clone(), CAP);

        for n in 0..20 {
            source.push(n);
        }
        source.insert(0, -1);
        source.remove(5);
        source.move_item(0, 15);
        source.move_item(15, 0);
        source.replace(11, 1111);
        source.remove(11);
        source.insert(12, 42);
        source.move_item(12, 3);
        source.set_items((0..8).collect());
        source.remove(7);
        source.push(7);

        assert_mirrors(&source, &window);
    }

    #[test]
    fn test_window_emits_its_own_signals() {
        use parking_lot::Mutex;

        let source = Arc::new(ObservableList::new());
        let window = TopWindow::new(source.clone(), CAP);

        let inserted = Arc::new(Mutex::new(Vec::new()));
        let recv = inserted.clone();
        window.list().signals().inserted.connect(move |&idx| {
            recv.lock().push(idx);
        });

        source.push(1);
        source.push(2);

        assert_eq!(*inserted.lock(), vec![0, 1]);
    }

    #[test]
    fn test_drop_disconnects_from_source() {
        let source = Arc::new(ObservableList::from_vec(vec![1, 2, 3]));
        {
            let _window = TopWindow::new(source.clone(), CAP);
            assert_eq!(source.signals().inserted.connection_count(), 1);
        }
        assert_eq!(source.signals().inserted.connection_count(), 0);
        // Mutations after drop must not panic or touch the old window.
        source.push(4);
    }

    #[test]
    fn test_small_capacity() {
        let source = Arc::new(ObservableList::from_vec(vec![1, 2, 3, 4]));
        let window = TopWindow::new(source.clone(), 2);

        assert_eq!(window.to_vec(), vec![1, 2]);
        source.remove(0);
        assert_eq!(window.to_vec(), vec![2, 3]);
        source.insert(0, 0);
        assert_eq!(window.to_vec(), vec![0, 2]);
    }
}

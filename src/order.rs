use log::debug;

/// Moves the element at `from` so that it ends up at `to`.
///
/// Splice-out then splice-in, not a swap. `to` is clamped into the valid
/// range; an out-of-range `from` leaves the sequence untouched. Returns
/// whether the sequence changed.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    debug!("moved item {from} -> {to}");
    true
}

/// Copying variant of [`move_item`] for callers that keep the old sequence.
pub fn moved<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    move_item(&mut out, from, to);
    out
}

/// An ordered sequence supporting positional moves.
///
/// Works the same for an id order (`OrderedCollection<String>`) and for a
/// full item list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> OrderedCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        move_item(&mut self.items, from, to)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

use std::collections::HashMap;

/// Items that carry a stable id usable in a persisted order.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

/// Derives the display order of `canonical` from a possibly stale `stored`
/// order.
///
/// Stored ids with no canonical item are dropped, repeated stored ids count
/// once, and canonical items the stored order never mentions are appended in
/// catalog order.
pub fn reconcile<T: Keyed + Clone>(canonical: &[T], stored: &[String]) -> Vec<T> {
    resolve_indices(canonical, stored)
        .into_iter()
        .map(|idx| canonical[idx].clone())
        .collect()
}

/// Index form of [`reconcile`]: positions into `canonical` in display order.
pub fn resolve_indices<T: Keyed>(canonical: &[T], stored: &[String]) -> Vec<usize> {
    let index_by_key: HashMap<&str, usize> = canonical
        .iter()
        .enumerate()
        .map(|(idx, item)| (item.key(), idx))
        .collect();

    let mut used = vec![false; canonical.len()];
    let mut order = Vec::with_capacity(canonical.len());

    for id in stored {
        if let Some(&idx) = index_by_key.get(id.as_str()) {
            if !used[idx] {
                used[idx] = true;
                order.push(idx);
            }
        }
    }

    for idx in 0..canonical.len() {
        if !used[idx] {
            order.push(idx);
        }
    }

    order
}

/// The id sequence of `items`, as it gets persisted.
pub fn order_of<T: Keyed>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.key().to_string()).collect()
}

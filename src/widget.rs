use crate::config::{
    LayoutPreference, COMPANY_ORDER_KEY, CUSTOM_LINKS_KEY, CUSTOM_ORDER_KEY, LAYOUT_KEY,
};
use crate::drag::{DragReorderController, InsertionPoint, ItemBounds};
use crate::model::{company_catalog, Link, LinkDraft, LinkFormErrors};
use crate::order::OrderedCollection;
use crate::reconcile::{order_of, reconcile};
use crate::store::{PersistentStore, Store};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkList {
    Company,
    Custom,
}

/// What the host needs to draw an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub list: LinkList,
    pub dragging_index: usize,
    pub insertion: Option<InsertionPoint>,
}

/// The quick links panel: fixed company shortcuts plus the user's own links,
/// both reorderable, with every edit persisted through the store.
pub struct QuickLinks<S> {
    store: PersistentStore<S>,
    catalog: Vec<Link>,
    custom_links: Vec<Link>,
    custom_order: Vec<String>,
    company_order: Vec<String>,
    layout: LayoutPreference,
    drag: DragReorderController,
    drag_list: Option<LinkList>,
}

impl<S: Store> QuickLinks<S> {
    pub fn load(store: S) -> Self {
        Self::with_catalog(store, company_catalog())
    }

    pub fn with_catalog(store: S, catalog: Vec<Link>) -> Self {
        let mut links = Self {
            store: PersistentStore::new(store),
            catalog,
            custom_links: Vec::new(),
            custom_order: Vec::new(),
            company_order: Vec::new(),
            layout: LayoutPreference::default(),
            drag: DragReorderController::new(),
            drag_list: None,
        };
        links.reload();
        links
    }

    /// Re-reads every persisted key, falling back to defaults for anything
    /// missing or unreadable.
    pub fn reload(&mut self) {
        self.cancel_drag();
        self.custom_links = self.store.load_or_default(CUSTOM_LINKS_KEY);
        self.custom_order = self.store.load_or_default(CUSTOM_ORDER_KEY);
        self.company_order = self.store.load_or_default(COMPANY_ORDER_KEY);
        self.layout = self.store.load_or_default(LAYOUT_KEY);
        debug!(
            "loaded {} custom links, layout {:?}",
            self.custom_links.len(),
            self.layout
        );
    }

    pub fn company_links(&self) -> Vec<Link> {
        reconcile(&self.catalog, &self.company_order)
    }

    pub fn custom_links(&self) -> Vec<Link> {
        reconcile(&self.custom_links, &self.custom_order)
    }

    pub fn links(&self, list: LinkList) -> Vec<Link> {
        match list {
            LinkList::Company => self.company_links(),
            LinkList::Custom => self.custom_links(),
        }
    }

    pub fn layout(&self) -> LayoutPreference {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutPreference) {
        if self.layout == layout {
            return;
        }
        self.store.save(LAYOUT_KEY, &layout);
        self.layout = layout;
    }

    pub fn add_link(&mut self, draft: &LinkDraft) -> Result<Link, LinkFormErrors> {
        let fields = draft.validate()?;
        self.cancel_drag();

        let link = Link::new(uuid::Uuid::new_v4().to_string(), fields);
        let mut updated = self.custom_links.clone();
        updated.push(link.clone());
        self.save_custom_links(updated);
        info!("Added link {} ({})", link.title, link.id);
        Ok(link)
    }

    /// Replaces the fields of link `id`. `Ok(false)` if no such link exists.
    pub fn update_link(&mut self, id: &str, draft: &LinkDraft) -> Result<bool, LinkFormErrors> {
        let fields = draft.validate()?;
        let Some(pos) = self.custom_links.iter().position(|link| link.id == id) else {
            return Ok(false);
        };

        let mut updated = self.custom_links.clone();
        updated[pos] = Link::new(id, fields);
        self.save_custom_links(updated);
        info!("Updated link {id}");
        Ok(true)
    }

    /// Removes link `id`. The stored order keeps the dangling id until the
    /// next reorder; reconciliation ignores it.
    pub fn delete_link(&mut self, id: &str) -> bool {
        if !self.custom_links.iter().any(|link| link.id == id) {
            return false;
        }
        self.cancel_drag();

        let updated = self
            .custom_links
            .iter()
            .filter(|link| link.id != id)
            .cloned()
            .collect();
        self.save_custom_links(updated);
        info!("Deleted link {id}");
        true
    }

    /// Moves the displayed item at `from` to `to` and persists the new order.
    pub fn reorder(&mut self, list: LinkList, from: usize, to: usize) -> bool {
        let mut order = OrderedCollection::from(order_of(&self.links(list)));
        if !order.move_item(from, to) {
            return false;
        }
        let order = order.into_inner();
        match list {
            LinkList::Company => {
                self.store.save(COMPANY_ORDER_KEY, &order);
                self.company_order = order;
            }
            LinkList::Custom => {
                self.store.save(CUSTOM_ORDER_KEY, &order);
                self.custom_order = order;
            }
        }
        true
    }

    pub fn begin_drag(&mut self, list: LinkList, index: usize) -> bool {
        if index >= self.list_len(list) {
            return false;
        }
        self.drag.begin(index);
        self.drag_list = Some(list);
        true
    }

    /// Feeds a hover sample from the host; returns whether a move was
    /// committed. Hovers over a list other than the dragged one are ignored.
    pub fn drag_over(
        &mut self,
        list: LinkList,
        hover_index: usize,
        bounds: ItemBounds,
        pointer_y: f32,
    ) -> bool {
        if self.drag_list != Some(list) || hover_index >= self.list_len(list) {
            return false;
        }
        match self.drag.hover(hover_index, bounds, pointer_y) {
            Some(command) => self.reorder(list, command.from, command.to),
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.release();
        self.drag_list = None;
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
        self.drag_list = None;
    }

    pub fn drag_state(&self) -> Option<DragState> {
        let list = self.drag_list?;
        let session = self.drag.session()?;
        Some(DragState {
            list,
            dragging_index: session.origin_index,
            insertion: session.insertion,
        })
    }

    pub fn store(&self) -> &PersistentStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PersistentStore<S> {
        &mut self.store
    }

    fn list_len(&self, list: LinkList) -> usize {
        match list {
            LinkList::Company => self.catalog.len(),
            LinkList::Custom => self.custom_links.len(),
        }
    }

    fn save_custom_links(&mut self, links: Vec<Link>) {
        self.store.save(CUSTOM_LINKS_KEY, &links);
        self.custom_links = links;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnCount, PresentationMode};
    use crate::store::{MemoryStore, StoreError};
    use std::io;

    /// Reads nothing back and refuses every write.
    struct ReadOnlyStore;

    impl Store for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn draft(title: &str) -> LinkDraft {
        LinkDraft::new(title, format!("{}.example.com", title.to_lowercase()), "")
    }

    fn titles(links: &[Link]) -> Vec<String> {
        links.iter().map(|link| link.title.clone()).collect()
    }

    fn widget_with(names: &[&str]) -> QuickLinks<MemoryStore> {
        let mut widget = QuickLinks::load(MemoryStore::new());
        for name in names {
            widget.add_link(&draft(name)).unwrap();
        }
        widget
    }

    fn reopen(widget: QuickLinks<MemoryStore>) -> QuickLinks<MemoryStore> {
        QuickLinks::load(widget.store().inner().clone())
    }

    fn row(index: usize) -> ItemBounds {
        ItemBounds::new(index as f32 * 50.0, index as f32 * 50.0 + 50.0)
    }

    #[test]
    fn fresh_store_shows_catalog_and_no_custom_links() {
        let widget = QuickLinks::load(MemoryStore::new());
        assert_eq!(widget.company_links(), company_catalog());
        assert!(widget.custom_links().is_empty());
        assert_eq!(widget.layout(), LayoutPreference::default());
    }

    #[test]
    fn custom_links_survive_reload() {
        let widget = widget_with(&["Alpha", "Beta", "Gamma"]);
        let before = widget.custom_links();

        let reopened = reopen(widget);
        assert_eq!(reopened.custom_links(), before);
        assert_eq!(titles(&before), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn wiped_or_corrupt_store_yields_empty_set() {
        let mut widget = widget_with(&["Alpha"]);
        widget.store_mut().inner_mut().remove(CUSTOM_LINKS_KEY).unwrap();
        widget.reload();
        assert!(widget.custom_links().is_empty());

        widget.store_mut().inner_mut().set(CUSTOM_LINKS_KEY, "[{\"id\":").unwrap();
        widget.reload();
        assert!(widget.custom_links().is_empty());
    }

    #[test]
    fn invalid_draft_creates_nothing() {
        let mut widget = widget_with(&["Alpha"]);
        let err = widget.add_link(&LinkDraft::new("", "nope", "")).unwrap_err();
        assert!(err.title.is_some());
        assert!(err.url.is_some());
        assert_eq!(widget.custom_links().len(), 1);

        let id = widget.custom_links()[0].id.clone();
        assert!(widget.update_link(&id, &LinkDraft::new("x", "", "")).is_err());
        assert_eq!(widget.custom_links()[0].title, "Alpha");
    }

    #[test]
    fn added_links_get_distinct_ids() {
        let widget = widget_with(&["Alpha", "Beta"]);
        let links = widget.custom_links();
        assert_ne!(links[0].id, links[1].id);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut widget = widget_with(&["Alpha", "Beta", "Gamma"]);
        widget.reorder(LinkList::Custom, 2, 0);
        let id = widget.custom_links()[1].id.clone();

        let edited = LinkDraft::new("Renamed", "renamed.example.com", "notes");
        assert_eq!(widget.update_link(&id, &edited), Ok(true));

        let links = reopen(widget).custom_links();
        assert_eq!(titles(&links), vec!["Gamma", "Renamed", "Beta"]);
        assert_eq!(links[1].id, id);
        assert_eq!(links[1].description.as_deref(), Some("notes"));
    }

    #[test]
    fn update_of_unknown_id_is_reported() {
        let mut widget = widget_with(&["Alpha"]);
        assert_eq!(widget.update_link("missing", &draft("Beta")), Ok(false));
    }

    #[test]
    fn delete_then_reconcile_drops_the_item() {
        let mut widget = widget_with(&["A", "B", "C"]);
        widget.reorder(LinkList::Custom, 0, 0);
        widget.reorder(LinkList::Custom, 2, 1);
        widget.reorder(LinkList::Custom, 1, 2);
        let b = widget.custom_links()[1].id.clone();

        assert!(widget.delete_link(&b));
        assert!(!widget.delete_link(&b));
        assert_eq!(titles(&widget.custom_links()), vec!["A", "C"]);

        let stored: Vec<String> = widget.store().load_or_default(CUSTOM_ORDER_KEY);
        assert!(stored.contains(&b));
        assert_eq!(titles(&reopen(widget).custom_links()), vec!["A", "C"]);
    }

    #[test]
    fn company_order_is_persisted() {
        let mut widget = QuickLinks::load(MemoryStore::new());
        assert!(widget.reorder(LinkList::Company, 0, 2));
        let expected = widget.company_links();
        assert_eq!(expected[2].id, "travel");

        assert_eq!(reopen(widget).company_links(), expected);
    }

    #[test]
    fn new_catalog_entries_appear_last() {
        let mut store = MemoryStore::new();
        store
            .set(COMPANY_ORDER_KEY, r#"["email","removed","travel"]"#)
            .unwrap();
        let widget = QuickLinks::load(store);
        let ids: Vec<String> = order_of(&widget.company_links());
        assert_eq!(ids.len(), company_catalog().len());
        assert_eq!(&ids[..3], ["email", "travel", "expenses"]);
        assert_eq!(ids.last().map(String::as_str), Some("onedrive"));
    }

    #[test]
    fn layout_is_persisted_and_corruption_falls_back() {
        let mut widget = QuickLinks::load(MemoryStore::new());
        let grid = LayoutPreference {
            presentation_mode: PresentationMode::Grid,
            column_count: ColumnCount::Two,
        };
        widget.set_layout(grid);
        let mut widget = reopen(widget);
        assert_eq!(widget.layout(), grid);

        widget
            .store_mut()
            .inner_mut()
            .set(LAYOUT_KEY, r#"{"viewMode":"grid","columns":7}"#)
            .unwrap();
        widget.reload();
        assert_eq!(widget.layout(), LayoutPreference::default());
    }

    #[test]
    fn drag_past_midpoint_reorders_and_persists() {
        let mut widget = widget_with(&["A", "B", "C", "D"]);
        assert!(widget.begin_drag(LinkList::Custom, 0));
        assert!(!widget.drag_over(LinkList::Custom, 1, row(1), 60.0));
        assert!(!widget.drag_over(LinkList::Custom, 2, row(2), 110.0));
        assert!(widget.drag_over(LinkList::Custom, 2, row(2), 130.0));
        assert_eq!(
            widget.drag_state().map(|s| s.dragging_index),
            Some(2)
        );
        widget.end_drag();

        assert!(widget.drag_state().is_none());
        assert_eq!(titles(&reopen(widget).custom_links()), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn abandoned_drag_keeps_last_committed_order() {
        let mut widget = widget_with(&["A", "B", "C"]);
        widget.begin_drag(LinkList::Custom, 2);
        assert!(widget.drag_over(LinkList::Custom, 1, row(1), 60.0));
        assert!(!widget.drag_over(LinkList::Custom, 0, row(0), 40.0));
        assert!(widget.drag_state().and_then(|s| s.insertion).is_some());
        widget.cancel_drag();

        assert!(widget.drag_state().is_none());
        assert_eq!(titles(&widget.custom_links()), vec!["A", "C", "B"]);
    }

    #[test]
    fn hover_over_other_list_is_ignored() {
        let mut widget = widget_with(&["A", "B"]);
        widget.begin_drag(LinkList::Custom, 0);
        assert!(!widget.drag_over(LinkList::Company, 1, row(1), 99.0));
        assert_eq!(widget.company_links(), company_catalog());
        assert!(!widget.begin_drag(LinkList::Custom, 5));
    }

    #[test]
    fn deleting_mid_drag_ends_the_session() {
        let mut widget = widget_with(&["A", "B"]);
        widget.begin_drag(LinkList::Custom, 0);
        let id = widget.custom_links()[1].id.clone();
        widget.delete_link(&id);
        assert!(widget.drag_state().is_none());
    }

    #[test]
    fn out_of_range_reorder_is_ignored() {
        let mut widget = widget_with(&["A", "B"]);
        assert!(!widget.reorder(LinkList::Custom, 2, 0));
        assert!(widget.reorder(LinkList::Custom, 0, 10));
        assert_eq!(titles(&widget.custom_links()), vec!["B", "A"]);
    }

    #[test]
    fn failed_writes_still_update_the_session() {
        let mut widget = QuickLinks::load(ReadOnlyStore);
        widget.add_link(&draft("A")).unwrap();
        widget.add_link(&draft("B")).unwrap();
        assert!(widget.reorder(LinkList::Custom, 1, 0));
        assert_eq!(titles(&widget.custom_links()), vec!["B", "A"]);

        let id = widget.custom_links()[0].id.clone();
        assert!(widget.delete_link(&id));
        assert_eq!(titles(&widget.custom_links()), vec!["A"]);

        let grid = LayoutPreference {
            presentation_mode: PresentationMode::Grid,
            column_count: ColumnCount::Three,
        };
        widget.set_layout(grid);
        assert_eq!(widget.layout(), grid);
    }
}

//! Quick links panel core: persisted, reorderable company and personal
//! shortcut lists.

pub mod config;
pub mod drag;
pub mod model;
pub mod order;
pub mod reconcile;
pub mod store;
pub mod widget;

pub use config::{ColumnCount, LayoutPreference, PresentationMode};
pub use drag::{DragReorderController, InsertionPoint, InsertionSide, ItemBounds, MoveCommand};
pub use model::{Link, LinkDraft, LinkFormErrors};
pub use order::OrderedCollection;
pub use reconcile::reconcile;
pub use store::{FileStore, MemoryStore, PersistentStore, Store, StoreError};
pub use widget::{DragState, LinkList, QuickLinks};

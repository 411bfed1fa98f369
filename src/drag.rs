//! Pointer-driven reordering of a single rendered list.
//!
//! A session starts on one row and is fed hover samples (row index, row
//! bounds, pointer y). A move is committed only once the pointer crosses the
//! hovered row's vertical midpoint in the direction of travel, so small
//! movements around a boundary do not reshuffle the list. After a commit the
//! session's origin follows the dragged row to its new index.

use log::debug;

/// Extent of a rendered item along the drag axis, in the same space as the
/// pointer. Lists use the vertical extent, grids the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub top: f32,
    pub bottom: f32,
}

impl ItemBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Midpoint relative to `top`.
    pub fn half_height(&self) -> f32 {
        (self.bottom - self.top) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionSide {
    Before,
    After,
}

/// Where the dragged row would land relative to the hovered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPoint {
    pub index: usize,
    pub side: InsertionSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub origin_index: usize,
    pub insertion: Option<InsertionPoint>,
}

#[derive(Debug, Default)]
pub struct DragReorderController {
    session: Option<DragSession>,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, index: usize) {
        if let Some(stale) = self.session.take() {
            debug!("drag from {} replaced by new drag", stale.origin_index);
        }
        debug!("drag started at {index}");
        self.session = Some(DragSession {
            origin_index: index,
            insertion: None,
        });
    }

    /// Feeds one hover sample; returns the move to apply if the pointer has
    /// crossed the hovered row's midpoint.
    pub fn hover(
        &mut self,
        hover_index: usize,
        bounds: ItemBounds,
        pointer_y: f32,
    ) -> Option<MoveCommand> {
        let session = self.session.as_mut()?;
        if hover_index == session.origin_index {
            session.insertion = None;
            return None;
        }
        if !pointer_y.is_finite() || !bounds.top.is_finite() || !bounds.bottom.is_finite() {
            return None;
        }

        let middle = bounds.half_height();
        let offset = pointer_y - bounds.top;
        let moving_down = session.origin_index < hover_index;

        session.insertion = Some(InsertionPoint {
            index: hover_index,
            side: if moving_down {
                InsertionSide::After
            } else {
                InsertionSide::Before
            },
        });

        if moving_down && offset < middle {
            return None;
        }
        if !moving_down && offset > middle {
            return None;
        }

        let command = MoveCommand {
            from: session.origin_index,
            to: hover_index,
        };
        session.origin_index = hover_index;
        session.insertion = None;
        debug!("drag committed {} -> {}", command.from, command.to);
        Some(command)
    }

    /// Ends the session on release. Committed moves stay applied.
    pub fn release(&mut self) -> Option<DragSession> {
        let ended = self.session.take();
        if let Some(session) = &ended {
            debug!("drag dropped at {}", session.origin_index);
        }
        ended
    }

    /// Ends the session on interruption, e.g. focus loss.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("drag cancelled");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn dragging_index(&self) -> Option<usize> {
        self.session.map(|s| s.origin_index)
    }

    pub fn insertion(&self) -> Option<InsertionPoint> {
        self.session.and_then(|s| s.insertion)
    }
}

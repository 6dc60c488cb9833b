use egui::{Pos2, Vec2};

use crate::geometry::{ItemGeometry, LayoutSnapshot};

/// A request to move the row at `from` so that it ends up at index `to`.
///
/// The engine never touches the backing collection; the caller applies the
/// move (remove-and-reinsert) and re-layouts before the engine's next
/// snapshot query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowMove {
    pub from: usize,
    pub to: usize,
}

impl RowMove {
    /// The canonical interpretation of the request: remove at `from`,
    /// reinsert at `to`. Out-of-bounds indices are ignored.
    pub fn apply<T>(&self, items: &mut Vec<T>) {
        if self.from == self.to || self.from >= items.len() || self.to >= items.len() {
            return;
        }
        let item = items.remove(self.from);
        items.insert(self.to, item);
    }
}

/// Drag session state. `Idle` and `Dragging` carry their data together, so
/// the tracked index and the start-of-drag geometry cannot disagree about
/// whether a session is live.
#[derive(Clone, Debug, Default, PartialEq)]
enum Session {
    #[default]
    Idle,
    Dragging {
        /// Geometry of the grabbed row at drag start, frozen for the whole
        /// session.
        initial: ItemGeometry,
        /// List index currently treated as "being dragged"; updated on every
        /// swap, re-resolved against the latest snapshot on every call.
        current_index: usize,
        /// Cumulative pointer movement along the scroll axis since drag
        /// start.
        dragged_distance: f32,
    },
}

/// Tracks a pointer drag over a virtualized, scrollable vertical list and
/// turns it into row reordering.
///
/// Per gesture the engine produces three things:
/// - a live offset for rendering the dragged row ([`Self::element_displacement`]),
/// - at most one [`RowMove`] request per [`Self::on_drag`] call, emitted when
///   the dragged span fully passes a neighbor,
/// - an overscroll delta ([`Self::check_overscroll`]) the host applies as an
///   incremental scroll while dragging near a viewport edge.
///
/// The engine owns nothing but gesture state: the host list supplies a fresh
/// [`LayoutSnapshot`] with every call and owns the actual scroll position and
/// item collection. All calls are synchronous and non-blocking; misuse while
/// idle is a no-op, never a fault.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragReorderState {
    session: Session,
}

impl DragReorderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Session::Dragging { .. })
    }

    /// Index of the row currently being dragged, for the host to offset
    /// visually. `None` while idle.
    pub fn current_dragged_index(&self) -> Option<usize> {
        match self.session {
            Session::Idle => None,
            Session::Dragging { current_index, .. } => Some(current_index),
        }
    }

    /// Start a drag session on the visible row under `position`.
    ///
    /// If no row contains `position` (drag started in empty space) no
    /// session starts and subsequent [`Self::on_drag`] calls are no-ops.
    /// Starting while a session is already active is a caller bug; the
    /// existing session is kept.
    pub fn on_drag_start(&mut self, position: Pos2, layout: &LayoutSnapshot<'_>) {
        if let Session::Dragging { current_index, .. } = self.session {
            log::warn!("drag started while row {current_index} is still dragging; ignored");
            return;
        }
        let Some(grabbed) = layout.item_at(position.y) else {
            return;
        };
        log::trace!("drag session started on row {}", grabbed.index);
        self.session = Session::Dragging {
            initial: grabbed,
            current_index: grabbed.index,
            dragged_distance: 0.0,
        };
    }

    /// Feed a pointer delta into the active session.
    ///
    /// Invokes `on_move(from, to)` at most once, when the dragged span has
    /// fully passed a visible neighbor: the first (in visible order)
    /// overlapping row whose trailing edge the span passed while moving down,
    /// or whose leading edge it passed while moving up. Strict comparisons
    /// throughout, so exactly aligned edges do not swap. The caller must
    /// apply the move before the next layout query.
    ///
    /// No-op while idle. If the tracked row is currently scrolled out of the
    /// snapshot, the distance still accumulates but no swap is emitted.
    pub fn on_drag(
        &mut self,
        delta: Vec2,
        layout: &LayoutSnapshot<'_>,
        mut on_move: impl FnMut(usize, usize),
    ) {
        let Session::Dragging {
            initial,
            current_index,
            dragged_distance,
        } = &mut self.session
        else {
            return;
        };

        *dragged_distance += delta.y;
        let start_offset = initial.offset_start + *dragged_distance;
        let end_offset = initial.offset_end() + *dragged_distance;

        let Some(current) = layout.geometry_of(*current_index) else {
            return;
        };

        // Sign of the dragged span's displacement from the tracked row's
        // current slot decides which edge must have been passed.
        let moving_down = start_offset - current.offset_start > 0.0;

        let target = layout
            .items()
            .iter()
            .filter(|row| row.index != *current_index)
            .filter(|row| !(row.offset_end() < start_offset || row.offset_start > end_offset))
            .find(|row| {
                if moving_down {
                    row.offset_end() < end_offset
                } else {
                    row.offset_start > start_offset
                }
            });

        if let Some(target) = target {
            log::trace!("drag swap: row {} -> {}", *current_index, target.index);
            on_move(*current_index, target.index);
            *current_index = target.index;
        }
    }

    /// End the active session. Idempotent; no swap is emitted — the last
    /// swap during [`Self::on_drag`] is final.
    pub fn on_drag_end(&mut self) {
        if let Session::Dragging { current_index, .. } = self.session {
            log::trace!("drag session ended on row {current_index}");
        }
        self.session = Session::Idle;
    }

    /// Cancel the active session. Identical to [`Self::on_drag_end`] as far
    /// as engine state is concerned; cancelling any host-side scroll
    /// animation is the host's job.
    pub fn on_drag_cancel(&mut self) {
        self.on_drag_end();
    }

    /// How far past the viewport edge the dragged span currently reaches.
    ///
    /// Positive: the span's trailing edge passed the viewport bottom while
    /// dragging down — scroll down by this much. Negative: the leading edge
    /// passed the viewport top while dragging up. `0.0` while idle, while
    /// not overshooting, or while the tracked row is scrolled out of view.
    ///
    /// The host applies this as an incremental scroll and re-checks as the
    /// drag continues, taking care not to run two scroll animations at once.
    pub fn check_overscroll(&self, layout: &LayoutSnapshot<'_>) -> f32 {
        let Session::Dragging {
            initial,
            current_index,
            dragged_distance,
        } = &self.session
        else {
            return 0.0;
        };
        if layout.geometry_of(*current_index).is_none() {
            return 0.0;
        }

        let start_offset = initial.offset_start + dragged_distance;
        let end_offset = initial.offset_end() + dragged_distance;
        let viewport = layout.viewport();

        if *dragged_distance > 0.0 && end_offset > viewport.max {
            end_offset - viewport.max
        } else if *dragged_distance < 0.0 && start_offset < viewport.min {
            start_offset - viewport.min
        } else {
            0.0
        }
    }

    /// Extra offset to apply to the dragged row's rendered position so it
    /// tracks the pointer instead of snapping to its layout slot.
    ///
    /// `None` while idle or while the tracked row is not in the snapshot
    /// (scrolled out of view) — render with no offset in that case.
    pub fn element_displacement(&self, layout: &LayoutSnapshot<'_>) -> Option<f32> {
        let Session::Dragging {
            initial,
            current_index,
            dragged_distance,
        } = &self.session
        else {
            return None;
        };
        let current = layout.geometry_of(*current_index)?;
        Some(initial.offset_start + dragged_distance - current.offset_start)
    }
}

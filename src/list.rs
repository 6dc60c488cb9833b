use std::hash::Hash;

use egui::emath::TSTransform;
use egui::{Id, LayerId, Order, Rect, ScrollArea, Sense, Ui, UiBuilder, vec2};

use crate::engine::{DragReorderState, RowMove};
use crate::geometry::{ItemGeometry, LayoutSnapshot};

/// Per-row flags handed to the row closure, so the host can restyle the row
/// that is currently being dragged.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowState {
    pub dragging: bool,
}

/// What [`ReorderableList::show`] did this frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReorderResponse {
    /// The move applied to the item collection this frame, if any.
    /// At most one per frame.
    pub moved: Option<RowMove>,
    /// Index of the row currently being dragged, if a drag is in progress.
    pub dragged_index: Option<usize>,
}

/// A vertical list whose rows can be reordered by dragging, driven by
/// [`DragReorderState`].
///
/// The widget is the "host list" half of the engine's contract: it renders
/// the caller's rows inside a [`ScrollArea`], hands the engine a fresh
/// visible-rows snapshot every frame, applies the engine's move requests to
/// the caller's `Vec`, offsets the dragged row visually, and scrolls the
/// list while the drag overshoots a viewport edge.
pub struct ReorderableList {
    id_salt: Id,
    drag_handle_width: Option<f32>,
    auto_scroll: bool,
    max_height: Option<f32>,
}

impl ReorderableList {
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            drag_handle_width: None,
            auto_scroll: true,
            max_height: None,
        }
    }

    /// Restrict drag start to a leading strip of the given width on each
    /// row, leaving the rest of the row free for interactive content.
    /// By default the whole row is grabbable.
    pub fn drag_handle_width(mut self, width: f32) -> Self {
        self.drag_handle_width = Some(width);
        self
    }

    /// Whether to auto-scroll while a dragged row overshoots a viewport
    /// edge. Default: on.
    pub fn auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Render the list and drive the drag-reorder engine for one frame.
    ///
    /// `row_ui` is called once per row, in order. Requested moves are
    /// applied to `items` after layout, so the next frame's snapshot
    /// reflects the new order.
    pub fn show<T>(
        self,
        ui: &mut Ui,
        items: &mut Vec<T>,
        mut row_ui: impl FnMut(&mut Ui, usize, &mut T, RowState),
    ) -> ReorderResponse {
        let state_id = ui.make_persistent_id(self.id_salt);
        let mut state: DragReorderState = ui
            .ctx()
            .data_mut(|d| d.get_temp(state_id))
            .unwrap_or_default();

        let mut moved = None;

        let mut scroll = ScrollArea::vertical().id_salt(self.id_salt);
        if let Some(max_height) = self.max_height {
            scroll = scroll.max_height(max_height);
        }
        scroll.show(ui, |ui| {
            let viewport = ui.clip_rect().y_range();
            let dragged_index = state.current_dragged_index();
            let dragged_layer = LayerId::new(Order::Tooltip, state_id.with("dragged-row"));

            let mut geometries = Vec::new();
            let mut pressed_at = None;
            let mut drag_delta = None;
            let mut drag_stopped = false;
            let mut dragged_drawn = false;

            for (index, item) in items.iter_mut().enumerate() {
                let row_state = RowState {
                    dragging: dragged_index == Some(index),
                };

                let rect = if row_state.dragging {
                    // The dragged row goes on a foreground layer, which gets
                    // translated by the live displacement after layout.
                    dragged_drawn = true;
                    ui.scope_builder(UiBuilder::new().layer_id(dragged_layer), |ui| {
                        ui.set_min_width(ui.available_width());
                        row_ui(ui, index, item, row_state);
                    })
                    .response
                    .rect
                } else {
                    ui.scope(|ui| {
                        ui.set_min_width(ui.available_width());
                        row_ui(ui, index, item, row_state);
                    })
                    .response
                    .rect
                };

                // The engine only ever sees rows inside the viewport.
                if rect.intersects(ui.clip_rect()) {
                    geometries.push(ItemGeometry::new(index, rect.top(), rect.height()));
                }

                let grab_rect = match self.drag_handle_width {
                    Some(width) => Rect::from_min_size(rect.min, vec2(width, rect.height())),
                    None => rect,
                };
                // Index-keyed ids: after a swap the pointer keeps delivering
                // deltas through the id it captured at drag start, which some
                // row always re-registers.
                let response = ui.interact(grab_rect, state_id.with(index), Sense::drag());
                if response.drag_started() {
                    pressed_at = response.interact_pointer_pos();
                }
                if response.dragged() {
                    drag_delta = Some(response.drag_delta());
                }
                if response.drag_stopped() {
                    drag_stopped = true;
                }
            }

            let layout = LayoutSnapshot::new(&geometries, viewport);

            if let Some(position) = pressed_at {
                state.on_drag_start(position, &layout);
            }
            if let Some(delta) = drag_delta {
                state.on_drag(delta, &layout, |from, to| {
                    moved = Some(RowMove { from, to });
                });
            }

            if dragged_drawn {
                if let Some(displacement) = state.element_displacement(&layout) {
                    ui.ctx().transform_layer_shapes(
                        dragged_layer,
                        TSTransform::from_translation(vec2(0.0, displacement)),
                    );
                }
            }

            if self.auto_scroll && !drag_stopped {
                let overscroll = state.check_overscroll(&layout);
                if overscroll != 0.0 {
                    // One scroll increment per frame stands in for a
                    // caller-owned scroll animation; keep repainting so the
                    // scroll continues while the pointer holds still.
                    ui.scroll_with_delta(vec2(0.0, -overscroll));
                    ui.ctx().request_repaint();
                }
            }

            if drag_stopped {
                state.on_drag_end();
            }
        });

        if let Some(request) = moved {
            request.apply(items);
        }

        let dragged_index = state.current_dragged_index();
        ui.ctx().data_mut(|d| d.insert_temp(state_id, state));

        ReorderResponse {
            moved,
            dragged_index,
        }
    }
}

use egui::Rangef;

/// Read-only geometry of one visible row, along the scroll axis.
///
/// Offsets can be in any coordinate system, as long as all rows and the
/// viewport bounds of the same [`LayoutSnapshot`] share it. The math in
/// [`crate::DragReorderState`] is translation-invariant, so screen
/// coordinates (what [`crate::ReorderableList`] uses) and viewport-relative
/// offsets both work.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    /// Position of the row in the full backing list.
    pub index: usize,
    /// Offset of the row's leading edge.
    pub offset_start: f32,
    /// Extent of the row along the scroll axis.
    pub size: f32,
}

impl ItemGeometry {
    pub fn new(index: usize, offset_start: f32, size: f32) -> Self {
        Self {
            index,
            offset_start,
            size,
        }
    }

    /// Offset of the row's trailing edge.
    pub fn offset_end(&self) -> f32 {
        self.offset_start + self.size
    }

    pub fn span(&self) -> Rangef {
        Rangef::new(self.offset_start, self.offset_end())
    }

    /// Hit test over the half-open span `[offset_start, offset_end)`.
    ///
    /// Half-open so that adjacent rows never both claim their shared edge.
    pub fn contains(&self, offset: f32) -> bool {
        self.offset_start <= offset && offset < self.offset_end()
    }
}

/// A per-call view of the host list: the rows currently on screen plus the
/// viewport bounds along the scroll axis.
///
/// Rows must be ordered by `index` and contain *visible* rows only — the
/// engine never indexes into the full backing list, which keeps it correct
/// under virtualization (off-screen rows are simply not swap candidates).
/// The host recomputes this every layout pass; the engine re-resolves the
/// dragged row in it on every call.
#[derive(Clone, Copy, Debug)]
pub struct LayoutSnapshot<'a> {
    items: &'a [ItemGeometry],
    viewport: Rangef,
}

impl<'a> LayoutSnapshot<'a> {
    pub fn new(items: &'a [ItemGeometry], viewport: Rangef) -> Self {
        debug_assert!(
            items.windows(2).all(|w| w[0].index < w[1].index),
            "visible rows must be ordered by index"
        );
        Self { items, viewport }
    }

    pub fn items(&self) -> &'a [ItemGeometry] {
        self.items
    }

    pub fn viewport(&self) -> Rangef {
        self.viewport
    }

    /// The visible row whose span contains `offset`, if any.
    pub fn item_at(&self, offset: f32) -> Option<ItemGeometry> {
        self.items.iter().copied().find(|row| row.contains(offset))
    }

    /// Current geometry of the row with the given list index, if visible.
    pub fn geometry_of(&self, index: usize) -> Option<ItemGeometry> {
        self.items.iter().copied().find(|row| row.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ItemGeometry> {
        (0..3)
            .map(|i| ItemGeometry::new(i, i as f32 * 50.0, 50.0))
            .collect()
    }

    #[test]
    fn span_is_half_open() {
        let row = ItemGeometry::new(1, 50.0, 50.0);
        assert!(row.contains(50.0));
        assert!(row.contains(99.9));
        assert!(!row.contains(100.0));
        assert!(!row.contains(49.9));
    }

    #[test]
    fn item_at_picks_exactly_one_row_at_shared_edges() {
        let rows = rows();
        let layout = LayoutSnapshot::new(&rows, Rangef::new(0.0, 150.0));
        assert_eq!(layout.item_at(50.0).map(|r| r.index), Some(1));
        assert_eq!(layout.item_at(149.9).map(|r| r.index), Some(2));
        assert_eq!(layout.item_at(150.0), None);
    }

    #[test]
    fn geometry_of_misses_off_screen_rows() {
        let rows = rows();
        let layout = LayoutSnapshot::new(&rows, Rangef::new(0.0, 150.0));
        assert!(layout.geometry_of(2).is_some());
        assert!(layout.geometry_of(7).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn item_geometry_survives_serde() {
        let row = ItemGeometry::new(3, 120.0, 44.0);
        let json = serde_json::to_string(&row).expect("serialize");
        let back: ItemGeometry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(row, back);
    }
}

/// Vertical extent of one on-screen row, `top` inclusive, `bottom` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowExtent {
    pub top: u16,
    pub bottom: u16,
}

impl RowExtent {
    pub fn new(top: u16, bottom: u16) -> Self {
        RowExtent { top, bottom }
    }

    pub fn contains(&self, y: u16) -> bool {
        self.top <= y && y < self.bottom
    }
}

/// Map a pointer-release Y to a list position: the first row whose bottom
/// is below `y`, or the last row when `y` is past every row. `None` only
/// when there are no rows.
pub fn resolve_drop_target(release_y: u16, rows: &[RowExtent]) -> Option<usize> {
    let last = rows.len().checked_sub(1)?;
    Some(
        rows.iter()
            .position(|row| release_y < row.bottom)
            .unwrap_or(last),
    )
}

/// Pointer drag over the task rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { source: usize },
}

impl DragState {
    /// Pointer pressed over the row at `source`
    pub fn press(&mut self, source: usize) {
        *self = DragState::Dragging { source };
    }

    /// Pointer released at `release_y`. Always returns to `Idle`; yields
    /// `(source, target)` when a drag was in progress and there is a row
    /// to drop on.
    pub fn release(&mut self, release_y: u16, rows: &[RowExtent]) -> Option<(usize, usize)> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging { source } => {
                resolve_drop_target(release_y, rows).map(|target| (source, target))
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RowExtent> {
        vec![
            RowExtent::new(0, 20),
            RowExtent::new(20, 40),
            RowExtent::new(40, 60),
        ]
    }

    #[test]
    fn first_row_whose_bottom_exceeds_y() {
        assert_eq!(resolve_drop_target(25, &rows()), Some(1));
        assert_eq!(resolve_drop_target(0, &rows()), Some(0));
        assert_eq!(resolve_drop_target(19, &rows()), Some(0));
        // A row's bottom edge belongs to the next row
        assert_eq!(resolve_drop_target(20, &rows()), Some(1));
    }

    #[test]
    fn below_all_rows_is_last_index() {
        assert_eq!(resolve_drop_target(100, &rows()), Some(2));
        assert_eq!(resolve_drop_target(60, &rows()), Some(2));
    }

    #[test]
    fn no_rows_no_target() {
        assert_eq!(resolve_drop_target(5, &[]), None);
    }

    #[test]
    fn rows_need_not_start_at_zero() {
        let rows = vec![RowExtent::new(3, 4), RowExtent::new(4, 5)];
        // Above the first row still resolves to the first row
        assert_eq!(resolve_drop_target(0, &rows), Some(0));
        assert_eq!(resolve_drop_target(4, &rows), Some(1));
    }

    #[test]
    fn drag_press_then_release() {
        let mut drag = DragState::default();
        drag.press(0);
        assert!(drag.is_dragging());
        assert_eq!(drag.release(45, &rows()), Some((0, 2)));
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut drag = DragState::Idle;
        assert_eq!(drag.release(10, &rows()), None);
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn release_with_no_rows_clears_state() {
        let mut drag = DragState::default();
        drag.press(1);
        assert_eq!(drag.release(10, &[]), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn extent_contains() {
        let r = RowExtent::new(2, 3);
        assert!(r.contains(2));
        assert!(!r.contains(3));
        assert!(!r.contains(1));
    }
}

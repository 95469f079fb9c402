//! Wheel selection state.

use log::trace;

use crate::style::SelectorProperties;

/// Number of rows a wheel shows unless configured otherwise.
pub const DEFAULT_ROW_COUNT: usize = 3;

/// A single snapping column.
///
/// # Example
///
/// ```ignore
/// let mut wheel = Wheel::new(vec!["a".into(), "b".into(), "c".into()], 0);
/// // Accept whatever the wheel settles on.
/// wheel.scroll_by(1, |index| index);
/// assert_eq!(wheel.selected(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Wheel {
    labels: Vec<String>,
    selected: usize,
    row_count: usize,
    selector: SelectorProperties,
}

impl Wheel {
    /// Create a wheel showing `labels`, starting at `start_index`.
    ///
    /// The start index is clamped to the last label.
    pub fn new(labels: Vec<String>, start_index: usize) -> Self {
        let selected = start_index.min(labels.len().saturating_sub(1));
        Self {
            labels,
            selected,
            row_count: DEFAULT_ROW_COUNT,
            selector: SelectorProperties::default(),
        }
    }

    /// Set the number of visible rows. Rounded up to an odd number so the
    /// selected row is centered.
    pub fn with_row_count(mut self, rows: usize) -> Self {
        self.row_count = rows.max(1) | 1;
        self
    }

    /// Set this wheel's own highlight.
    pub fn with_selector(mut self, selector: SelectorProperties) -> Self {
        self.selector = selector;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.labels.get(self.selected).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn selector(&self) -> &SelectorProperties {
        &self.selector
    }

    fn last_index(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    /// Replace the labels, clamping the selection if it no longer exists.
    ///
    /// Returns true when the selection had to be clamped.
    pub fn set_labels(&mut self, labels: Vec<String>) -> bool {
        self.labels = labels;
        let last = self.last_index();
        if self.selected > last {
            trace!("Wheel selection {} clamped to {}", self.selected, last);
            self.selected = last;
            true
        } else {
            false
        }
    }

    /// Move to `index` without notifying anyone.
    pub fn snap_to(&mut self, index: usize) {
        self.selected = index.min(self.last_index());
    }

    /// Scroll by `delta` rows and settle.
    ///
    /// Returns the index the wheel snapped to, or `None` if the wheel did not
    /// move (empty, or already at the boundary it was pushed against).
    pub fn scroll_by<F>(&mut self, delta: isize, on_settle: F) -> Option<usize>
    where
        F: FnOnce(usize) -> usize,
    {
        let target = self.selected.saturating_add_signed(delta).min(self.last_index());
        self.settle_at(target, on_settle)
    }

    /// Jump to `index` (clamped) and settle.
    pub fn settle_at<F>(&mut self, index: usize, on_settle: F) -> Option<usize>
    where
        F: FnOnce(usize) -> usize,
    {
        if self.labels.is_empty() {
            return None;
        }
        let index = index.min(self.last_index());
        if index == self.selected {
            return None;
        }
        self.selected = index;
        let resolved = on_settle(index);
        self.snap_to(resolved);
        trace!("Wheel settled at {} resolved to {}", index, self.selected);
        Some(self.selected)
    }

    /// Label indices for each visible row, top to bottom. Rows past either
    /// end of the label list are `None`.
    pub fn visible_indices(&self) -> Vec<Option<usize>> {
        self.window(self.row_count)
    }

    /// Like [`Wheel::visible_indices`], for `rows` rows centered on the
    /// selection. Used when the area is too short for every configured row.
    pub fn window(&self, rows: usize) -> Vec<Option<usize>> {
        let half = (rows / 2) as isize;
        (-half..=half)
            .map(|offset| {
                self.selected
                    .checked_add_signed(offset)
                    .filter(|&i| i < self.labels.len())
            })
            .collect()
    }
}

//! Horizontal centering of the selected category tab.

use serde::{Deserialize, Serialize};

/// Measured position of one tab inside the scrollable tab strip, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TabGeometry {
    /// Offset of the tab's left edge from the start of the strip.
    pub left: f64,
    pub width: f64,
}

impl TabGeometry {
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Scroll offset that puts the tab at `selected_index` in the middle of a
/// container `container_width` pixels wide.
///
/// The result may be negative or past the end of the strip; clamping is up
/// to the scroll surface.
///
/// # Panics
///
/// Panics if `selected_index` is not a valid index into `tabs`.
#[must_use]
pub fn compute_centering_offset(
    selected_index: usize,
    tabs: &[TabGeometry],
    container_width: f64,
) -> f64 {
    assert!(
        selected_index < tabs.len(),
        "selected tab {selected_index} out of range for {} tabs",
        tabs.len()
    );
    let tab = tabs[selected_index];
    tab.left - (container_width - tab.width) / 2.0
}

/// Lay tabs out left to right with no gaps, from their widths alone.
///
/// Handy when the real layout is a plain horizontal flex row.
#[must_use]
pub fn tabs_from_widths(widths: &[f64]) -> Vec<TabGeometry> {
    widths
        .iter()
        .scan(0.0, |left, &width| {
            let tab = TabGeometry::new(*left, width);
            *left += width;
            Some(tab)
        })
        .collect()
}

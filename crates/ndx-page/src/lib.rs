//! Pagination window planning for ndx.
//!
//! Given a result count, a page size, the current page, and a viewport size
//! class, [`plan`] computes the visible page slice and the compact set of
//! page-number buttons to render: a centered window of numbers, widened at
//! the edges so it keeps its full width, with first/last page and ellipsis
//! affordances when pages fall outside it. Smaller viewports get narrower
//! windows; the smallest drops the boundary affordances entirely.
//!
//! The planner is a pure function and never self-corrects an out-of-range
//! current page; callers clamp first (see `SearchState::clamped` in
//! ndx-search). Degenerate input (no results, zero page size) yields a
//! window that signals "no pagination" rather than an error.

#![warn(missing_docs)]

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// Viewport size classes, controlling how many page buttons fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportClass {
    /// Narrow phone screens: 3 buttons, no boundary affordances.
    VerySmall,
    /// Small screens: 5 buttons.
    Small,
    /// Everything else: 7 buttons.
    #[default]
    Default,
}

impl ViewportClass {
    /// Maximum page buttons shown for this viewport.
    pub fn max_visible(self) -> usize {
        match self {
            Self::VerySmall => 3,
            Self::Small => 5,
            Self::Default => 7,
        }
    }

    /// Returns the kebab-case name used in CLI arguments and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VerySmall => "very-small",
            Self::Small => "small",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewportClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very-small" => Ok(Self::VerySmall),
            "small" => Ok(Self::Small),
            "default" => Ok(Self::Default),
            other => Err(format!(
                "unknown viewport '{other}' (expected default, small, or very-small)"
            )),
        }
    }
}

/// One entry in the page-button row: a page number or an ellipsis gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (1-based, always within `1..=total_pages`).
    Page(usize),
    /// A gap between the boundary page and the window.
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(number) => serializer.serialize_u64(*number as u64),
            Self::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// The computed slice boundaries and button layout for one page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Total pages; 0 signals "no pagination" (callers hide the controls).
    pub total_pages: usize,
    /// The current page as passed in (1-based).
    pub current_page: usize,
    /// Start of the visible slice (0-based, inclusive).
    pub start_index: usize,
    /// End of the visible slice (0-based, exclusive).
    pub end_index: usize,
    /// 1-based ordinal of the first visible record, 0 when the page is empty.
    pub first_visible: usize,
    /// 1-based ordinal of the last visible record, 0 when the page is empty.
    pub last_visible: usize,
    /// Page buttons to render, ascending, with ellipsis gaps.
    pub items: Vec<PageItem>,
}

impl PageWindow {
    /// Returns true when pagination controls should be shown at all.
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 0
    }

    /// Returns true when a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Returns true when a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The degenerate window used for empty result sets.
    fn empty(current_page: usize) -> Self {
        Self {
            total_pages: 0,
            current_page,
            start_index: 0,
            end_index: 0,
            first_visible: 0,
            last_visible: 0,
            items: Vec::new(),
        }
    }
}

/// Plans the page window for a result set.
///
/// `current_page` must already be clamped to `1..=max(total_pages, 1)` by
/// the caller; the planner tolerates violations by degrading to an empty
/// slice, never by raising.
pub fn plan(
    total_count: usize,
    page_size: usize,
    current_page: usize,
    viewport: ViewportClass,
) -> PageWindow {
    if total_count == 0 || page_size == 0 {
        return PageWindow::empty(current_page);
    }

    let total_pages = total_count.div_ceil(page_size);
    let page = current_page.max(1);

    let start_index = (page - 1).saturating_mul(page_size).min(total_count);
    let end_index = start_index.saturating_add(page_size).min(total_count);

    let (first_visible, last_visible) = if start_index < end_index {
        (start_index + 1, end_index)
    } else {
        (0, 0)
    };

    PageWindow {
        total_pages,
        current_page,
        start_index,
        end_index,
        first_visible,
        last_visible,
        items: page_items(total_pages, page, viewport),
    }
}

/// Computes the page-button row for the given page count and position.
fn page_items(total_pages: usize, page: usize, viewport: ViewportClass) -> Vec<PageItem> {
    let max_visible = viewport.max_visible();

    // Everything fits: no window, no ellipses
    if total_pages <= max_visible {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let (start, end) = if viewport == ViewportClass::VerySmall {
        very_small_window(total_pages, page)
    } else {
        centered_window(total_pages, page, max_visible)
    };

    let mut items = Vec::with_capacity(max_visible + 4);

    // Boundary affordances don't fit on the smallest screens
    if start > 1 && viewport != ViewportClass::VerySmall {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total_pages && viewport != ViewportClass::VerySmall {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }

    items
}

/// A window of exactly `max_visible` pages centered on `page`, shifted
/// (not shrunk) when it would overrun either edge.
fn centered_window(total_pages: usize, page: usize, max_visible: usize) -> (usize, usize) {
    let half = max_visible / 2;
    let mut start = page.saturating_sub(half).max(1);
    let mut end = start + max_visible - 1;

    if end > total_pages {
        end = total_pages;
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    (start, end)
}

/// The degraded window for very small screens: the current page and its
/// neighbors, at most 3 wide.
fn very_small_window(total_pages: usize, page: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).max(1);
    let end = (start + 2).min(total_pages);

    if end - start < 2 {
        if start == 1 {
            (start, total_pages.min(3))
        } else {
            (total_pages.saturating_sub(2).max(1), end)
        }
    } else {
        (start, end)
    }
}

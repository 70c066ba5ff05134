// Fixed-size paging over an already filtered list.
//
// Responsibilities
// - Slice the list for a 1-based page number, clamped into [1, total_pages].
// - Represent an empty list as its own state instead of "page 1 of 0".

use serde::Serialize;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Page<T> {
    NoEntries,
    Slice {
        items: Vec<T>,
        number: usize,
        total_pages: usize,
        /// Zero-based position of the first item within the whole list.
        offset: usize,
    },
}

impl<T> Page<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Page::NoEntries => &[],
            Page::Slice { items, .. } => items,
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Page::NoEntries => 1,
            Page::Slice { number, .. } => *number,
        }
    }

    pub fn total_pages(&self) -> usize {
        match self {
            Page::NoEntries => 0,
            Page::Slice { total_pages, .. } => *total_pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        matches!(self, Page::Slice { number, .. } if *number > 1)
    }

    pub fn has_next(&self) -> bool {
        matches!(self, Page::Slice { number, total_pages, .. } if number < total_pages)
    }

    /// 1-based row number of the item at `index` on this page.
    pub fn serial(&self, index: usize) -> usize {
        match self {
            Page::NoEntries => index + 1,
            Page::Slice { offset, .. } => offset + index + 1,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        match self {
            Page::NoEntries => Page::NoEntries,
            Page::Slice {
                items,
                number,
                total_pages,
                offset,
            } => Page::Slice {
                items: items.into_iter().map(f).collect(),
                number,
                total_pages,
                offset,
            },
        }
    }
}

pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Keeps a requested page inside `[1, total_pages]`; page 1 when there are no pages.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<T> {
    if items.is_empty() {
        return Page::NoEntries;
    }
    let total_pages = total_pages(items.len(), page_size);
    let number = clamp_page(page, total_pages);
    let offset = (number - 1) * page_size.get();
    let end = offset.saturating_add(page_size.get()).min(items.len());
    Page::Slice {
        items: items[offset..end].to_vec(),
        number,
        total_pages,
        offset,
    }
}

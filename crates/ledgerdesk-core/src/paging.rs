use serde::{Deserialize, Serialize};

pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slices one 1-based page out of `records`. Out-of-range page numbers land on
/// the nearest valid page.
pub fn paginate<T: Clone>(records: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let total_items = records.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let items = records.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}

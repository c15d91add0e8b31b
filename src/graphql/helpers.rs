use crate::models::dto::request::DashboardQuery;

/// GraphQL page arguments are 1-based; anything below 1 means the first page.
pub fn page_number(page: Option<i32>) -> Option<usize> {
    page.map(|p| p.max(1) as usize)
}

pub fn dashboard_query(
    search: Option<String>,
    show_drafts: Option<bool>,
    show_published: Option<bool>,
    folder_id: Option<String>,
) -> DashboardQuery {
    DashboardQuery {
        search,
        show_drafts,
        show_published,
        folder_id,
    }
}

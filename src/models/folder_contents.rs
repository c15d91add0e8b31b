use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::FormItem;

pub const FOLDER_PAGE_SIZE: usize = 12;

/// Case-insensitive substring match on a title. An empty term matches all.
pub fn title_matches(title: &str, search_term: &str) -> bool {
    search_term.is_empty() || title.to_lowercase().contains(&search_term.to_lowercase())
}

/// Forms of one folder, filtered by a title search and paginated.
///
/// The filtered list is recomputed whenever the listing or the search term
/// changes, and either change sends the view back to page one.
#[derive(Debug, Clone)]
pub struct FolderContents {
    forms: Vec<FormItem>,
    filtered: Vec<FormItem>,
    search_term: String,
    current_page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct FolderPage {
    pub forms: Vec<FormItem>,
    pub current_page: i32,
    pub total_pages: i32,
    pub total_items: i32,
    pub page_size: i32,
}

impl Default for FolderContents {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FolderContents {
    pub fn new(forms: Vec<FormItem>) -> Self {
        let mut contents = Self {
            forms,
            filtered: Vec::new(),
            search_term: String::new(),
            current_page: 1,
        };
        contents.refilter();
        contents
    }

    fn refilter(&mut self) {
        self.filtered = self
            .forms
            .iter()
            .filter(|f| title_matches(&f.title, &self.search_term))
            .cloned()
            .collect();
        self.current_page = 1;
    }

    pub fn set_forms(&mut self, forms: Vec<FormItem>) {
        self.forms = forms;
        self.refilter();
    }

    pub fn set_search_term(&mut self, search_term: &str) {
        self.search_term = search_term.to_string();
        self.refilter();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn forms(&self) -> &[FormItem] {
        &self.forms
    }

    pub fn filtered(&self) -> &[FormItem] {
        &self.filtered
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(FOLDER_PAGE_SIZE)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Moves to `page`, clamped to `[1, total_pages]`. Returns the page landed on.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages().max(1));
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn page_items(&self) -> &[FormItem] {
        let start = (self.current_page - 1) * FOLDER_PAGE_SIZE;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + FOLDER_PAGE_SIZE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn page(&self) -> FolderPage {
        FolderPage {
            forms: self.page_items().to_vec(),
            current_page: self.current_page as i32,
            total_pages: self.total_pages() as i32,
            total_items: self.filtered.len() as i32,
            page_size: FOLDER_PAGE_SIZE as i32,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::{
    domain::{Folder, FormItem, FormStatus},
    folder_contents::title_matches,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// UI state shared by the dashboard screens.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub search_term: String,
    pub show_drafts: bool,
    pub show_published: bool,
    pub view_mode: ViewMode,
    pub active_dropdown: Option<String>,
    pub selected_folder: Option<Folder>,
    pub show_folder_modal: bool,
    pub open_folder: Option<Folder>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            show_drafts: true,
            show_published: true,
            view_mode: ViewMode::Grid,
            active_dropdown: None,
            selected_folder: None,
            show_folder_modal: false,
            open_folder: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    SetSearchTerm(String),
    SetShowDrafts(bool),
    SetShowPublished(bool),
    SetViewMode(ViewMode),
    OpenFolderModal,
    CloseFolderModal,
    SetActiveDropdown(Option<String>),
    SelectFolder(Option<Folder>),
    OpenFolder(Folder),
    CloseFolder,
}

impl DashboardState {
    pub fn apply(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::SetSearchTerm(term) => self.search_term = term,
            ToolbarAction::SetShowDrafts(show) => self.show_drafts = show,
            ToolbarAction::SetShowPublished(show) => self.show_published = show,
            ToolbarAction::SetViewMode(mode) => self.view_mode = mode,
            ToolbarAction::OpenFolderModal => self.show_folder_modal = true,
            ToolbarAction::CloseFolderModal => self.show_folder_modal = false,
            ToolbarAction::SetActiveDropdown(id) => self.active_dropdown = id,
            ToolbarAction::SelectFolder(folder) => self.selected_folder = folder,
            ToolbarAction::OpenFolder(folder) => self.open_folder = Some(folder),
            ToolbarAction::CloseFolder => self.open_folder = None,
        }
    }

    fn status_visible(&self, status: FormStatus) -> bool {
        match status {
            FormStatus::Draft => self.show_drafts,
            FormStatus::Published => self.show_published,
            FormStatus::Closed => true,
        }
    }

    /// Forms passing the status toggles, the selected folder and the search term.
    pub fn visible_forms<'a>(&self, forms: &'a [FormItem]) -> Vec<&'a FormItem> {
        let folder_id = self.selected_folder.as_ref().map(|f| f.id.as_str());

        forms
            .iter()
            .filter(|f| self.status_visible(f.status))
            .filter(|f| folder_id.map_or(true, |id| f.folder_id.as_deref() == Some(id)))
            .filter(|f| title_matches(&f.title, &self.search_term))
            .collect()
    }
}

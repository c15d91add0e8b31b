use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_owner, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{Folder, Form, FormItem, QuestionField, QuestionMode, QuestionOption},
        dto::request::{CreateFormRequest, DashboardQuery, UpdateFormRequest},
        folder_contents::{FolderContents, FolderPage},
    },
    repositories::{FolderRepository, FormRepository, ResponseRepository},
};

pub struct FormService {
    forms: Arc<dyn FormRepository>,
    folders: Arc<dyn FolderRepository>,
    responses: Arc<dyn ResponseRepository>,
}

impl FormService {
    pub fn new(
        forms: Arc<dyn FormRepository>,
        folders: Arc<dyn FolderRepository>,
        responses: Arc<dyn ResponseRepository>,
    ) -> Self {
        Self {
            forms,
            folders,
            responses,
        }
    }

    pub async fn get_form(&self, id: &str) -> AppResult<Form> {
        self.forms
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Form with id '{}' not found", id)))
    }

    pub async fn get_owned_form(&self, id: &str, claims: &Claims) -> AppResult<Form> {
        let form = self.get_form(id).await?;
        require_owner(claims, &form.created_by_user_id)?;
        Ok(form)
    }

    async fn owned_folder(&self, folder_id: &str, claims: &Claims) -> AppResult<Folder> {
        let folder = self
            .folders
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Folder with id '{}' not found", folder_id)))?;
        require_owner(claims, &folder.created_by_user_id)?;
        Ok(folder)
    }

    pub async fn create_form(&self, request: CreateFormRequest, claims: &Claims) -> AppResult<Form> {
        request.validate()?;

        let mut form = Form::new_draft(
            request.title.trim(),
            request.description.as_deref().unwrap_or(""),
            &claims.sub,
        );

        if let Some(folder_id) = request.folder_id.as_deref() {
            self.owned_folder(folder_id, claims).await?;
            form.folder_id = Some(folder_id.to_string());
        }

        log::info!("User {} created form {}", claims.sub, form.id);
        self.forms.create(form).await
    }

    pub async fn update_form(
        &self,
        id: &str,
        request: UpdateFormRequest,
        claims: &Claims,
    ) -> AppResult<Form> {
        request.validate()?;
        let mut form = self.get_owned_form(id, claims).await?;

        if let Some(title) = request.title {
            form.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            form.description = description;
        }
        if let Some(status) = request.status {
            form.status = status;
        }
        if let Some(fields) = request.fields {
            form.fields = fields;
        }

        form.validate_fields()?;
        form.touch();
        self.forms.update(form).await
    }

    pub async fn move_form(
        &self,
        id: &str,
        folder_id: Option<String>,
        claims: &Claims,
    ) -> AppResult<Form> {
        let mut form = self.get_owned_form(id, claims).await?;

        if let Some(folder_id) = folder_id.as_deref() {
            self.owned_folder(folder_id, claims).await?;
        }

        form.folder_id = folder_id;
        form.touch();
        self.forms.update(form).await
    }

    pub async fn delete_form(&self, id: &str, claims: &Claims) -> AppResult<()> {
        let form = self.get_owned_form(id, claims).await?;

        let removed = self.responses.delete_by_form(&form.id).await?;
        self.forms.delete(&form.id).await?;

        log::info!("Deleted form {} and {} responses", form.id, removed);
        Ok(())
    }

    /// Owner's forms filtered the way the dashboard toolbar filters them.
    pub async fn dashboard_forms(
        &self,
        query: &DashboardQuery,
        claims: &Claims,
    ) -> AppResult<Vec<FormItem>> {
        let mut state = query.to_state();
        if let Some(folder_id) = query.folder_id.as_deref() {
            state.selected_folder = Some(self.owned_folder(folder_id, claims).await?);
        }

        let items: Vec<FormItem> = self
            .forms
            .list_by_owner(&claims.sub)
            .await?
            .iter()
            .map(Form::to_item)
            .collect();

        Ok(state.visible_forms(&items).into_iter().cloned().collect())
    }

    pub async fn folder_forms(&self, folder_id: &str, claims: &Claims) -> AppResult<Vec<FormItem>> {
        self.owned_folder(folder_id, claims).await?;

        let forms = self.forms.list_by_folder(folder_id).await?;
        Ok(forms.iter().map(Form::to_item).collect())
    }

    pub async fn folder_page(
        &self,
        folder_id: &str,
        search: Option<&str>,
        page: Option<usize>,
        claims: &Claims,
    ) -> AppResult<FolderPage> {
        let mut contents = FolderContents::new(self.folder_forms(folder_id, claims).await?);
        if let Some(search) = search {
            contents.set_search_term(search);
        }
        contents.go_to_page(page.unwrap_or(1));
        Ok(contents.page())
    }

    async fn edit_question<T, F>(
        &self,
        form_id: &str,
        field_id: &str,
        claims: &Claims,
        edit: F,
    ) -> AppResult<T>
    where
        F: FnOnce(&mut QuestionField) -> AppResult<T>,
    {
        let mut form = self.get_owned_form(form_id, claims).await?;

        let outcome = edit(form.question_mut(field_id)?)?;

        form.validate_fields()?;
        form.touch();
        self.forms.update(form).await?;
        Ok(outcome)
    }

    pub async fn add_option(
        &self,
        form_id: &str,
        field_id: &str,
        text: &str,
        claims: &Claims,
    ) -> AppResult<QuestionOption> {
        self.edit_question(form_id, field_id, claims, |q| q.add_option(text).cloned())
            .await
    }

    pub async fn edit_option_text(
        &self,
        form_id: &str,
        field_id: &str,
        option_id: &str,
        text: &str,
        claims: &Claims,
    ) -> AppResult<QuestionField> {
        self.edit_question(form_id, field_id, claims, |q| {
            q.edit_option_text(option_id, text)?;
            Ok(q.clone())
        })
        .await
    }

    pub async fn delete_option(
        &self,
        form_id: &str,
        field_id: &str,
        option_id: &str,
        claims: &Claims,
    ) -> AppResult<QuestionField> {
        self.edit_question(form_id, field_id, claims, |q| {
            q.delete_option(option_id)?;
            Ok(q.clone())
        })
        .await
    }

    pub async fn toggle_correct(
        &self,
        form_id: &str,
        field_id: &str,
        option_id: &str,
        claims: &Claims,
    ) -> AppResult<QuestionField> {
        self.edit_question(form_id, field_id, claims, |q| {
            q.toggle_correct(option_id)?;
            Ok(q.clone())
        })
        .await
    }

    pub async fn set_question_mode(
        &self,
        form_id: &str,
        field_id: &str,
        mode: QuestionMode,
        claims: &Claims,
    ) -> AppResult<QuestionField> {
        self.edit_question(form_id, field_id, claims, |q| {
            q.set_mode(mode);
            Ok(q.clone())
        })
        .await
    }
}

use async_graphql::{Context, Object, ID};

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    errors::AppResult,
    models::{
        domain::{Folder, QuestionField, QuestionMode, QuestionOption},
        dto::request::CreateFolderRequest,
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_folder(&self, ctx: &Context<'_>, input: CreateFolderRequest) -> AppResult<Folder> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state.folder_service.create_folder(input, &claims).await
    }

    async fn delete_folder(&self, ctx: &Context<'_>, id: ID) -> AppResult<bool> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state.folder_service.delete_folder(&id, &claims).await?;
        Ok(true)
    }

    async fn add_question_option(
        &self,
        ctx: &Context<'_>,
        form_id: ID,
        field_id: ID,
        text: String,
    ) -> AppResult<QuestionOption> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .form_service
            .add_option(&form_id, &field_id, &text, &claims)
            .await
    }

    async fn edit_option_text(
        &self,
        ctx: &Context<'_>,
        form_id: ID,
        field_id: ID,
        option_id: ID,
        text: String,
    ) -> AppResult<QuestionField> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .form_service
            .edit_option_text(&form_id, &field_id, &option_id, &text, &claims)
            .await
    }

    async fn delete_option(
        &self,
        ctx: &Context<'_>,
        form_id: ID,
        field_id: ID,
        option_id: ID,
    ) -> AppResult<QuestionField> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .form_service
            .delete_option(&form_id, &field_id, &option_id, &claims)
            .await
    }

    async fn toggle_option_correct(
        &self,
        ctx: &Context<'_>,
        form_id: ID,
        field_id: ID,
        option_id: ID,
    ) -> AppResult<QuestionField> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .form_service
            .toggle_correct(&form_id, &field_id, &option_id, &claims)
            .await
    }

    async fn set_question_mode(
        &self,
        ctx: &Context<'_>,
        form_id: ID,
        field_id: ID,
        mode: QuestionMode,
    ) -> AppResult<QuestionField> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .form_service
            .set_question_mode(&form_id, &field_id, mode, &claims)
            .await
    }
}

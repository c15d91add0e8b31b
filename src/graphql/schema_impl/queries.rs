use async_graphql::{Context, Object, ID};

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    errors::AppResult,
    graphql::helpers::{dashboard_query, page_number},
    models::{
        domain::{AppUser, FormItem},
        dto::response::FolderWithCount,
        folder_contents::FolderPage,
    },
    services::test_scoring::{AggregateReport, TestReport},
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn me(&self, ctx: &Context<'_>) -> AppResult<AppUser> {
        let claims = extract_claims_from_context(ctx)?;
        Ok(AppUser::from_claims(&claims))
    }

    async fn folders(&self, ctx: &Context<'_>) -> AppResult<Vec<FolderWithCount>> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state.folder_service.list_folders(&claims).await
    }

    async fn dashboard_forms(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        show_drafts: Option<bool>,
        show_published: Option<bool>,
        folder_id: Option<ID>,
    ) -> AppResult<Vec<FormItem>> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        let query = dashboard_query(
            search,
            show_drafts,
            show_published,
            folder_id.map(|id| id.to_string()),
        );
        state.form_service.dashboard_forms(&query, &claims).await
    }

    /// One page of a folder's forms, filtered by title.
    async fn folder_contents(
        &self,
        ctx: &Context<'_>,
        folder_id: ID,
        search: Option<String>,
        page: Option<i32>,
    ) -> AppResult<FolderPage> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .form_service
            .folder_page(&folder_id, search.as_deref(), page_number(page), &claims)
            .await
    }

    async fn test_results(
        &self,
        ctx: &Context<'_>,
        form_id: ID,
        response_id: ID,
    ) -> AppResult<TestReport> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .response_service
            .test_results(&form_id, &response_id, &claims)
            .await
    }

    async fn aggregate_results(&self, ctx: &Context<'_>, form_id: ID) -> AppResult<AggregateReport> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)?;

        state
            .response_service
            .aggregate_results(&form_id, &claims)
            .await
    }
}

use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_owner, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{Form, FormResponse, SubmitterInfo},
        dto::request::SubmitResponseRequest,
    },
    repositories::{FormRepository, ResponseRepository},
    services::test_scoring::{self, AggregateReport, TestReport},
};

pub struct ResponseService {
    responses: Arc<dyn ResponseRepository>,
    forms: Arc<dyn FormRepository>,
}

impl ResponseService {
    pub fn new(responses: Arc<dyn ResponseRepository>, forms: Arc<dyn FormRepository>) -> Self {
        Self { responses, forms }
    }

    async fn form(&self, form_id: &str) -> AppResult<Form> {
        self.forms
            .find_by_id(form_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Form with id '{}' not found", form_id)))
    }

    async fn owned_form(&self, form_id: &str, claims: &Claims) -> AppResult<Form> {
        let form = self.form(form_id).await?;
        require_owner(claims, &form.created_by_user_id)?;
        Ok(form)
    }

    /// Stores a submission against a published form.
    pub async fn submit(
        &self,
        form_id: &str,
        request: SubmitResponseRequest,
        mut submitter: SubmitterInfo,
        user: Option<&Claims>,
    ) -> AppResult<FormResponse> {
        request.validate()?;
        let form = self.form(form_id).await?;

        if !form.is_accepting_responses() {
            return Err(AppError::BadRequest(format!(
                "Form '{}' is {} and does not accept responses",
                form.id,
                form.status.as_str()
            )));
        }

        for answer in &request.responses {
            if form.field(&answer.field_id).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Field '{}' does not belong to form '{}'",
                    answer.field_id, form.id
                )));
            }
        }

        let is_complete = request.is_complete.unwrap_or(true);
        if is_complete {
            let missing: Vec<&str> = form
                .fields
                .iter()
                .filter(|f| f.required)
                .filter(|f| {
                    request
                        .responses
                        .iter()
                        .find(|a| a.field_id == f.id)
                        .map_or(true, |a| a.value.is_null())
                })
                .map(|f| f.label.as_str())
                .collect();

            if !missing.is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Required fields are unanswered: {}",
                    missing.join(", ")
                )));
            }
        }

        submitter.location = request.location.clone().or(submitter.location);
        if let Some(claims) = user {
            submitter.user_id = Some(claims.sub.clone());
            submitter.saved_to_account = request.save_to_account;
        }

        let mut response = FormResponse::new(&form.id, request.responses, submitter);
        response.completion_time = request.completion_time;
        response.is_complete = is_complete;

        let response = self.responses.create(response).await?;
        // The response is already stored; a stale counter must not turn it into a failure.
        if let Err(e) = self.forms.increment_response_count(&form.id).await {
            log::error!(
                "Failed to bump response count for form {} after storing {}: {}",
                form.id,
                response.id,
                e
            );
        }

        log::info!("Recorded response {} for form {}", response.id, form.id);
        Ok(response)
    }

    pub async fn list_responses(
        &self,
        form_id: &str,
        offset: i64,
        limit: i64,
        claims: &Claims,
    ) -> AppResult<(Vec<FormResponse>, i64)> {
        let form = self.owned_form(form_id, claims).await?;
        self.responses.list_by_form(&form.id, offset, limit).await
    }

    pub async fn get_response(
        &self,
        form_id: &str,
        response_id: &str,
        claims: &Claims,
    ) -> AppResult<FormResponse> {
        let form = self.owned_form(form_id, claims).await?;
        self.response_of(&form, response_id).await
    }

    async fn response_of(&self, form: &Form, response_id: &str) -> AppResult<FormResponse> {
        self.responses
            .find_by_id(response_id)
            .await?
            .filter(|r| r.form_id == form.id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Response '{}' not found for form '{}'",
                    response_id, form.id
                ))
            })
    }

    /// Scores one response against the form's answer key.
    pub async fn test_results(
        &self,
        form_id: &str,
        response_id: &str,
        claims: &Claims,
    ) -> AppResult<TestReport> {
        let form = self.owned_form(form_id, claims).await?;
        let response = self.response_of(&form, response_id).await?;
        Ok(test_scoring::score_response(&form, &response))
    }

    pub async fn aggregate_results(
        &self,
        form_id: &str,
        claims: &Claims,
    ) -> AppResult<AggregateReport> {
        let form = self.owned_form(form_id, claims).await?;
        let responses = self.responses.find_by_form(&form.id).await?;
        Ok(test_scoring::aggregate(&form, &responses))
    }
}

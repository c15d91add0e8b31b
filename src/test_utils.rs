#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;
    use serde_json::Value;

    use crate::{
        auth::Claims,
        models::domain::{
            FieldAnswer, FieldKind, Form, FormField, FormItem, FormStatus, QuestionField,
            QuestionMode, QuestionOption,
        },
    };

    pub const OWNER_ID: &str = "user-1";

    pub fn claims_for(user_id: &str) -> Claims {
        Claims::new(user_id, &format!("{}@example.com", user_id), 1)
    }

    /// Published listing items `form-1..=form-n` titled `"{prefix} {i}"`.
    pub fn form_items(n: usize, prefix: &str) -> Vec<FormItem> {
        (1..=n)
            .map(|i| FormItem {
                id: format!("form-{}", i),
                title: format!("{} {}", prefix, i),
                description: String::new(),
                responses: 0,
                views: 0,
                created_at: Some(Utc::now()),
                status: FormStatus::Published,
                share_url: None,
                folder_id: None,
            })
            .collect()
    }

    fn option(id: &str, text: &str, is_correct: bool) -> QuestionOption {
        QuestionOption {
            id: id.to_string(),
            text: text.to_string(),
            is_correct,
        }
    }

    fn question(id: &str, text: &str, mode: QuestionMode, options: Vec<QuestionOption>) -> FormField {
        let mut question = QuestionField::new(text, mode);
        question.options = options;

        let mut field = FormField::new(text, FieldKind::Question(question));
        field.id = id.to_string();
        field
    }

    /// Published quiz owned by [`OWNER_ID`].
    ///
    /// `q1` is single choice with `q1-o1` correct. `q2` is multiple choice
    /// with `q2-o3` and `q2-o4` correct. A trailing optional text field has id
    /// `name`.
    pub fn quiz_form() -> Form {
        let mut form = Form::new_draft("Capitals quiz", "Test your geography", OWNER_ID);
        form.status = FormStatus::Published;
        form.fields = vec![
            question(
                "q1",
                "Capital of France?",
                QuestionMode::Single,
                vec![
                    option("q1-o1", "Paris", true),
                    option("q1-o2", "Lyon", false),
                    option("q1-o3", "Nice", false),
                ],
            ),
            question(
                "q2",
                "Which are in Spain?",
                QuestionMode::Multiple,
                vec![
                    option("q2-o1", "Porto", false),
                    option("q2-o2", "Lisbon", false),
                    option("q2-o3", "Madrid", true),
                    option("q2-o4", "Seville", true),
                ],
            ),
            {
                let mut name = FormField::new("Your name", FieldKind::Text);
                name.id = "name".to_string();
                name
            },
        ];
        form
    }

    pub fn answer(field_id: &str, value: Value) -> FieldAnswer {
        FieldAnswer {
            field_id: field_id.to_string(),
            field_label: String::new(),
            field_type: "question".to_string(),
            value,
            files: Vec::new(),
        }
    }
}

#[cfg(test)]
pub mod mocks {
    use async_trait::async_trait;
    use mockall::mock;

    use crate::{
        errors::AppResult,
        models::domain::{Folder, Form, FormResponse},
        repositories::{FolderRepository, FormRepository, ResponseRepository},
    };

    mock! {
        pub Forms {}
        #[async_trait]
        impl FormRepository for Forms {
            async fn create(&self, form: Form) -> AppResult<Form>;
            async fn find_by_id(&self, id: &str) -> AppResult<Option<Form>>;
            async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Form>>;
            async fn list_by_folder(&self, folder_id: &str) -> AppResult<Vec<Form>>;
            async fn update(&self, form: Form) -> AppResult<Form>;
            async fn delete(&self, id: &str) -> AppResult<()>;
            async fn detach_folder(&self, folder_id: &str) -> AppResult<u64>;
            async fn increment_response_count(&self, id: &str) -> AppResult<()>;
        }
    }

    mock! {
        pub Folders {}
        #[async_trait]
        impl FolderRepository for Folders {
            async fn create(&self, folder: Folder) -> AppResult<Folder>;
            async fn find_by_id(&self, id: &str) -> AppResult<Option<Folder>>;
            async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Folder>>;
            async fn delete(&self, id: &str) -> AppResult<()>;
        }
    }

    mock! {
        pub Responses {}
        #[async_trait]
        impl ResponseRepository for Responses {
            async fn create(&self, response: FormResponse) -> AppResult<FormResponse>;
            async fn find_by_id(&self, id: &str) -> AppResult<Option<FormResponse>>;
            async fn find_by_form(&self, form_id: &str) -> AppResult<Vec<FormResponse>>;
            async fn list_by_form(
                &self,
                form_id: &str,
                offset: i64,
                limit: i64,
            ) -> AppResult<(Vec<FormResponse>, i64)>;
            async fn delete_by_form(&self, form_id: &str) -> AppResult<u64>;
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_quiz_form_is_consistent() {
        let form = quiz_form();
        assert!(form.validate_fields().is_ok());
        assert_eq!(form.question_fields().count(), 2);
        assert!(form.is_accepting_responses());
    }

    #[test]
    fn test_form_items_are_numbered_from_one() {
        let items = form_items(3, "Survey");
        assert_eq!(items[0].id, "form-1");
        assert_eq!(items[2].title, "Survey 3");
    }
}

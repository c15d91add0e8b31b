pub mod mutations;
pub mod queries;

use async_graphql::{EmptySubscription, Schema as GraphQLSchema};

use crate::app_state::AppState;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        models::domain::{Folder, Form},
        test_utils::{
            fixtures::{claims_for, form_items},
            mocks::{MockFolders, MockForms, MockResponses},
        },
    };
    use std::sync::Arc;

    fn schema(forms: MockForms, folders: MockFolders) -> Schema {
        create_schema(AppState::from_repositories(
            Config::test_config(),
            Arc::new(forms),
            Arc::new(folders),
            Arc::new(MockResponses::new()),
        ))
    }

    #[actix_rt::test]
    async fn test_me_requires_claims() {
        let schema = schema(MockForms::new(), MockFolders::new());

        let response = schema.execute("{ me { id } }").await;
        assert_eq!(response.errors.len(), 1);
    }

    #[actix_rt::test]
    async fn test_me_resolves_from_claims() {
        let schema = schema(MockForms::new(), MockFolders::new());

        let request = async_graphql::Request::new("{ me { id role } }").data(claims_for("user-7"));
        let response = schema.execute(request).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["me"]["id"], "user-7");
        assert_eq!(data["me"]["role"], "user");
    }

    #[actix_rt::test]
    async fn test_folder_contents_pages_server_side() {
        let folder = Folder::new("Quizzes", None, "user-1");
        let folder_id = folder.id.clone();

        let mut folders = MockFolders::new();
        folders
            .expect_find_by_id()
            .returning(move |_| Ok(Some(folder.clone())));

        let mut forms = MockForms::new();
        forms.expect_list_by_folder().returning(|_| {
            Ok(form_items(13, "Form")
                .into_iter()
                .map(|item| {
                    let mut form = Form::new_draft(&item.title, "", "user-1");
                    form.id = item.id;
                    form
                })
                .collect())
        });

        let query = format!(
            r#"{{ folderContents(folderId: "{}", page: 9) {{ currentPage totalPages totalItems forms {{ title }} }} }}"#,
            folder_id
        );
        let request = async_graphql::Request::new(query).data(claims_for("user-1"));
        let response = schema(forms, folders).execute(request).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["folderContents"]["currentPage"], 2);
        assert_eq!(data["folderContents"]["totalPages"], 2);
        assert_eq!(data["folderContents"]["totalItems"], 13);
        assert_eq!(data["folderContents"]["forms"].as_array().map(Vec::len), Some(1));
    }
}

pub mod helpers;
pub mod schema_impl;

use actix_web::{post, web};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::auth::OptionalUser;

pub use schema_impl::{create_schema, MutationRoot, QueryRoot, Schema};

/// `POST /graphql`. The caller's claims, when present, are attached to the
/// request data; resolvers that need an identity fail with `Unauthorized`.
#[post("/graphql")]
pub async fn graphql_handler(
    schema: web::Data<Schema>,
    user: OptionalUser,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(claims) = user.0 {
        request = request.data(claims);
    }
    schema.execute(request).await.into()
}

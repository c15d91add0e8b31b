use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use formcraft_server::{
    app_state::AppState, auth::AuthMiddleware, config::Config, graphql, handlers,
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let bind_address = config.bind_address();
    let state = AppState::new(config).await.map_err(|err| {
        log::error!("Failed to initialise application state: {}", err);
        std::io::Error::other(err.to_string())
    })?;

    let schema = graphql::create_schema(state.clone());
    let jwt_service = state.jwt_service.clone();
    let cors_origin = state.config.cors_allowed_origin.clone();

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
            ])
            .expose_headers(vec![header::HeaderName::from_static(
                formcraft_server::middleware::REQUEST_ID_HEADER,
            )])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(AuthMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(graphql::graphql_handler)
    })
    .bind(bind_address)?
    .run()
    .await
}

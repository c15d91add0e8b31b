use actix_web::web;

pub mod auth_handler;
pub mod folder_handler;
pub mod form_handler;
pub mod health_handler;
pub mod response_handler;

/// Registers every REST route. `/api/forms/folder/{id}` is registered before
/// `/api/forms/{id}` so the literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_live)
        .service(health_handler::health_check_ready)
        .service(auth_handler::auth_config)
        .service(auth_handler::me)
        .service(folder_handler::list_folders)
        .service(folder_handler::create_folder)
        .service(folder_handler::get_folder)
        .service(folder_handler::delete_folder)
        .service(form_handler::list_forms)
        .service(form_handler::create_form)
        .service(form_handler::get_folder_forms)
        .service(form_handler::get_form)
        .service(form_handler::update_form)
        .service(form_handler::move_form)
        .service(form_handler::delete_form)
        .service(form_handler::add_option)
        .service(form_handler::edit_option)
        .service(form_handler::delete_option)
        .service(form_handler::toggle_option)
        .service(form_handler::set_question_mode)
        .service(response_handler::submit_response)
        .service(response_handler::list_responses)
        .service(response_handler::get_response)
        .service(response_handler::get_test_results)
        .service(response_handler::get_aggregate_results);
}

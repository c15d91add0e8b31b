pub mod folder_service;
pub mod form_service;
pub mod response_service;
pub mod test_scoring;

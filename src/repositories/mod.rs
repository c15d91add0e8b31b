pub mod folder_repository;
pub mod form_repository;
pub mod response_repository;

pub use folder_repository::{FolderRepository, MongoFolderRepository};
pub use form_repository::{FormRepository, MongoFormRepository};
pub use response_repository::{MongoResponseRepository, ResponseRepository};

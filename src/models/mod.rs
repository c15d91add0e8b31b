pub mod dashboard;
pub mod domain;
pub mod dto;
pub mod folder_contents;

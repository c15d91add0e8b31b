pub mod field;
pub mod folder;
pub mod form;
pub mod response;
pub mod user;
pub use field::{FieldKind, FormField, QuestionField, QuestionMode, QuestionOption};
pub use folder::Folder;
pub use form::{Form, FormItem, FormStatus};
pub use response::{FieldAnswer, FormResponse, SubmitterInfo};
pub use user::AppUser;

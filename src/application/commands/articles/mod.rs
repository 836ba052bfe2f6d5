mod create;
mod delete;
mod update;

pub use create::{CreateArticleCommand, CreateArticleHandler, CreateArticlePayload};
pub use delete::{DeleteArticleCommand, DeleteArticleHandler};
pub use update::{UpdateArticleCommand, UpdateArticleHandler, UpdateArticlePayload};

pub(super) const MSG_TITLE_EXISTS: &str = "Article with this title already exists";
pub(super) const MSG_NO_MODIFY_PERMISSION: &str =
    "User has no permission to modify this article";

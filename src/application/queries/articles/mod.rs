mod get;
mod list;

pub use get::{GetArticleHandler, GetArticleQuery};
pub use list::{GetArticlesHandler, GetArticlesQuery};

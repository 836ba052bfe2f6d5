pub mod authorization;
pub mod entity;
pub mod repository;
pub mod validator;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};

pub mod authorization;
pub mod entity;
pub mod repository;
pub mod validator;
pub mod value_objects;

pub use entity::{NewUser, User};
pub use repository::UserRepository;
pub use value_objects::{Actor, Email, PasswordHash, Role, UserId, UserName};

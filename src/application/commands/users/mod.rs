mod create;
mod delete;
mod login;
mod register;
mod update;

pub use create::{CreateUserCommand, CreateUserHandler, CreateUserPayload};
pub use delete::{DeleteUserCommand, DeleteUserHandler};
pub use login::{LoginUserCommand, LoginUserHandler, LoginUserPayload};
pub use register::{RegisterUserCommand, RegisterUserHandler, RegisterUserPayload};
pub use update::{UpdateUserCommand, UpdateUserHandler, UpdateUserPayload};

pub(super) const MSG_USER_EXISTS: &str = "User with this email already exists";
pub(super) const MSG_NO_MANAGE_PERMISSION: &str = "User has no permission to manage users";

mod get;
mod list;

pub use get::{GetUserHandler, GetUserQuery};
pub use list::{GetUsersHandler, GetUsersQuery};

pub(super) const MSG_NO_READ_PERMISSION: &str = "User has no permission to read users";

pub mod security;
pub mod time;

//! User account entity and role.

mod model;
mod role;

pub use model::{NewUser, User};
pub use role::Role;

//! Password hashing and strength policy.

mod hasher;
mod policy;

pub use hasher::PasswordHasher;
pub use policy::PasswordPolicy;

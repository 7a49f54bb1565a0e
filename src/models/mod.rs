pub mod dealership;
pub mod user;

pub use dealership::Dealership;
pub use user::{Role, User, UserProfile};

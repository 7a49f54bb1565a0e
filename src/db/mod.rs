pub mod dealerships;
pub mod users;

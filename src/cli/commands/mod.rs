pub mod auth;
pub mod business;
pub mod dashboard;
pub mod employment;
pub mod leads;
pub mod loans;
pub mod profile;
pub mod users;

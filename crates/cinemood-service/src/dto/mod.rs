//! Data Transfer Objects for the service layer

mod mappers;
pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;

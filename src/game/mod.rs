pub mod errors;
pub mod models;
pub mod rounds;
pub mod session;

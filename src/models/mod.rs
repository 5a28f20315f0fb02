pub mod coverage;
pub mod date_like;
pub mod endpoint;
pub mod resume;

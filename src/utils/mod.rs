pub mod paths;
pub mod unicode;

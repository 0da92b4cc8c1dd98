pub mod filters;
pub mod http;
pub mod timestamps;

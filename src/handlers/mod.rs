pub mod auth;
pub mod fallback;
pub mod health;
pub mod path_params;
pub mod query_params;
pub mod request_body;

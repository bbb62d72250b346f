//! bookrack - A minimal, self-hostable book catalog HTTP service

pub mod api;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;

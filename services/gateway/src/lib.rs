pub mod clients;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod service;

pub mod controller;
pub mod crud;
pub mod model;
pub mod prompt;
pub mod routes;
pub mod schema;

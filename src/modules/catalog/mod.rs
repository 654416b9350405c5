pub mod controller;
pub mod data;
pub mod model;
pub mod routes;

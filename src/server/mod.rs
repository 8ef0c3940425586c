pub mod extract;
pub mod router;
pub mod routes;

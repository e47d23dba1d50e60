pub mod building;
pub mod provenance;
pub mod query_params;
pub mod room;
pub mod server;

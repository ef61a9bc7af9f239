pub mod http_client_factory;
pub mod observability;

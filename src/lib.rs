pub mod configuration;
pub mod domain;
pub mod formspark_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod turnstile_client;

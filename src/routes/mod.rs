pub mod default_route;
pub mod enrich_route;

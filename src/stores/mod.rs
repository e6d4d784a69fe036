// Stores handle persistent state: saved links and API provider configurations.

pub mod api_config_store;
pub mod link_store;

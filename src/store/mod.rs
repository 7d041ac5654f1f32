pub mod network_store;

pub mod store_purge;

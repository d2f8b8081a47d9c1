pub mod source_registry;

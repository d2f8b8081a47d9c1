pub mod direct_buffer;

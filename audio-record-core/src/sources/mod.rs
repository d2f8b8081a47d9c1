pub mod default_source;
pub mod failing_source;
pub mod sample_queue_source;

//! Storage for completed intake conversations

mod log;
mod record;
mod sink;

pub use log::{corrupt_path, RecordLog, RecordLogError};
pub use record::CallRecord;
pub use sink::RecordSink;

use super::record::CallRecord;
use super::log::RecordLogError;

/// Append-only destination for completed call records
///
/// Implementations:
/// - `RecordLog`: JSON file rewritten on every append
#[async_trait::async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist one record
    async fn append(&self, record: CallRecord) -> Result<(), RecordLogError>;

    /// Every record stored so far, oldest first
    async fn list(&self) -> Vec<CallRecord>;
}

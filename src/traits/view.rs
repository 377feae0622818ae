use async_trait::async_trait;

use crate::engine::Status;

/// Surface the orchestrator renders a conversion onto.
///
/// Calls are cosmetic: nothing a view does can change the computed result.
#[async_trait]
pub trait ConversionView: Send {
    async fn show_status(&mut self, status: Status);

    async fn clear_output(&mut self);

    async fn append_output(&mut self, ch: char);
}

//! Seam to the embedding document/viewport layer.

use log::info;

use crate::aggregate::FormData;

/// Side effects the engine requests from its embedding: native form
/// submission and scrolling the first errored field into view.
pub trait Host: Send + Sync {
    /// Submit the form with the collected data.
    fn submit(&self, data: &FormData);

    /// Bring the given field into view.
    fn scroll_to(&self, field_id: &str);
}

/// Default host: logs the requests instead of performing them. Real
/// embeddings provide their own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHost;

impl Host for LogHost {
    fn submit(&self, data: &FormData) {
        match serde_json::to_string(data) {
            Ok(json) => info!("submit requested: {json}"),
            Err(_) => info!("submit requested"),
        }
    }

    fn scroll_to(&self, field_id: &str) {
        info!("scroll to '{field_id}' requested");
    }
}

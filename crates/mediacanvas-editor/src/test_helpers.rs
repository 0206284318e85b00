use tokio::sync::mpsc::{self, UnboundedReceiver};

use mediacanvas_core::config::EditorConfig;

use crate::app::Editor;
use crate::message::Message;

impl Editor {
    /// Create an Editor wired to a channel the test drains itself.
    /// Must be called inside a tokio runtime.
    pub fn new_with_test_channel() -> (Self, UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_channel(EditorConfig::default(), tx), rx)
    }

    pub fn has_active_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Generation of the running ticker, if any.
    pub fn ticker_generation(&self) -> Option<u64> {
        self.ticker.as_ref().map(|t| t.generation())
    }
}

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::Message;

/// Completion channel from background tasks back to the UI thread.
///
/// Senders are cloned into tasks; the app drains the receiving end once per frame.
pub struct Mailbox {
    sender: UnboundedSender<Message>,
    receiver: UnboundedReceiver<Message>,
}

impl std::fmt::Debug for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailbox").finish_non_exhaustive()
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailbox {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded();
        Self { sender, receiver }
    }

    /// A handle that tasks use to post their result
    pub fn poster(&self, repaint: Option<egui::Context>) -> Poster {
        Poster {
            sender: self.sender.clone(),
            repaint,
        }
    }

    /// Take every message posted since the last call, oldest first
    pub fn drain(&mut self) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Ok(message) = self.receiver.try_recv() {
            messages.push(message);
        }
        messages
    }
}

/// Sending half of the mailbox, safe to move into a task.
#[derive(Clone)]
pub struct Poster {
    sender: UnboundedSender<Message>,
    repaint: Option<egui::Context>,
}

impl Poster {
    pub fn post(&self, message: Message) {
        log::debug!("Posting {}", message.name());
        if self.sender.unbounded_send(message).is_err() {
            // app already shut down
            log::warn!("Mailbox closed, dropping task result");
            return;
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

//! Fire-and-forget background work.
//!
//! A task runs to completion and posts its result through a [`Poster`]; there is
//! no cancellation.

use std::future::Future;
use std::sync::Arc;

use crate::event::{Message, Poster};
use crate::export::{CapturedSurface, ExportStrategy};
use crate::picker::PickFuture;

#[cfg(not(target_arch = "wasm32"))]
fn spawn<F>(name: &str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let spawned = std::thread::Builder::new()
        .name(name.to_owned())
        .spawn(move || futures::executor::block_on(future));
    if let Err(err) = spawned {
        log::error!("Failed to spawn {} task: {}", name, err);
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn<F>(_name: &str, future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Wait for the image source and post `PickFinished`
pub fn spawn_pick(pick: PickFuture, poster: Poster) {
    spawn("image-pick", async move {
        let outcome = pick.await;
        poster.post(Message::PickFinished(outcome));
    });
}

/// Run the export strategy and post `ExportFinished`
pub fn spawn_export(exporter: Arc<dyn ExportStrategy>, surface: CapturedSurface, poster: Poster) {
    spawn("export", async move {
        log::info!(
            "Exporting {}x{} capture via {}",
            surface.size()[0],
            surface.size()[1],
            exporter.name()
        );
        let result = exporter.export(&surface);
        poster.post(Message::ExportFinished(result));
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::event::Mailbox;
    use crate::export::ExportReceipt;
    use crate::picker::PickOutcome;
    use egui::{Color32, ColorImage};
    use std::time::{Duration, Instant};

    struct Rejecting;

    impl ExportStrategy for Rejecting {
        fn name(&self) -> &'static str {
            "rejecting"
        }

        fn export(&self, _surface: &CapturedSurface) -> Result<ExportReceipt, ExportError> {
            Err(ExportError::EmptyCapture)
        }
    }

    fn wait_for_message(mailbox: &mut Mailbox) -> Message {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(message) = mailbox.drain().into_iter().next() {
                return message;
            }
            assert!(Instant::now() < deadline, "task never posted");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn pick_result_is_posted() {
        let mut mailbox = Mailbox::new();
        spawn_pick(
            Box::pin(async { PickOutcome::Canceled }),
            mailbox.poster(None),
        );
        assert!(matches!(
            wait_for_message(&mut mailbox),
            Message::PickFinished(PickOutcome::Canceled)
        ));
    }

    #[test]
    fn export_error_is_posted_not_raised() {
        let mut mailbox = Mailbox::new();
        let surface = CapturedSurface::new(ColorImage::new([1, 1], Color32::WHITE));
        spawn_export(Arc::new(Rejecting), surface, mailbox.poster(None));
        assert!(matches!(
            wait_for_message(&mut mailbox),
            Message::ExportFinished(Err(ExportError::EmptyCapture))
        ));
    }
}

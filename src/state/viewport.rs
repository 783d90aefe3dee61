use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Button layout direction derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Footer buttons stacked vertically
    Narrow,
    /// Footer buttons side by side
    Wide,
}

impl LayoutMode {
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

type Callback = Box<dyn FnMut(LayoutMode)>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

/// Observable viewport width owned by the root app.
///
/// The app feeds it the current width every frame; subscribers are called only
/// when the derived [`LayoutMode`] actually changes.
pub struct ViewportWatcher {
    breakpoint: f32,
    width: Option<f32>,
    mode: LayoutMode,
    subscribers: Rc<RefCell<Subscribers>>,
}

impl std::fmt::Debug for ViewportWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportWatcher")
            .field("width", &self.width)
            .field("mode", &self.mode)
            .field(
                "subscribers",
                &format!("<{} subscribers>", self.subscribers.borrow().callbacks.len()),
            )
            .finish()
    }
}

impl ViewportWatcher {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            width: None,
            // No width known yet: assume the small screen until the first frame reports one
            mode: LayoutMode::Narrow,
            subscribers: Rc::new(RefCell::new(Subscribers::default())),
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Record the latest width and recompute the layout mode
    pub fn observe_width(&mut self, width: f32) {
        if self.width == Some(width) {
            return;
        }
        self.width = Some(width);

        let mode = LayoutMode::for_width(width, self.breakpoint);
        if mode == self.mode {
            return;
        }
        log::debug!("Viewport width {} -> {:?}", width, mode);
        self.mode = mode;

        // Callbacks must not subscribe or unsubscribe while being notified.
        for (_, callback) in &mut self.subscribers.borrow_mut().callbacks {
            callback(mode);
        }
    }

    /// Register a callback for layout changes. It stays registered until the
    /// returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(LayoutMode) + 'static) -> Subscription {
        let mut subscribers = self.subscribers.borrow_mut();
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.callbacks.push((id, Box::new(callback)));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().callbacks.len()
    }
}

/// Scoped registration with a [`ViewportWatcher`].
pub struct Subscription {
    id: u64,
    subscribers: Weak<RefCell<Subscribers>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            if let Ok(mut subscribers) = subscribers.try_borrow_mut() {
                subscribers.callbacks.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

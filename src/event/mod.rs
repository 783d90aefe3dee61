mod events;
mod mailbox;

pub use events::{Effect, Message, Notice};
pub use mailbox::{Mailbox, Poster};

//! # Events Module
//!
//! Progress reporting decoupled from any particular UI.
//!
//! ## Design
//! The core library emits events through channels; the CLI subscribes on a
//! separate thread and turns them into spinners and progress bars.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! let consumer = receiver.spawn_consumer(|event| {
//!     if let Event::Watermark(WatermarkEvent::Progress(p)) = event {
//!         println!("Watermarked {}/{}", p.completed, p.total);
//!     }
//! });
//!
//! pipeline.run_with_events(&sender)?;
//! drop(sender);
//! consumer.join().ok();
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;

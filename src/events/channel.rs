//! Progress channel between the pipeline and whoever renders it.

use super::{Event, PipelineEvent, PipelinePhase};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Producer half, handed to the pipeline stages by reference.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<Event>,
}

impl EventSender {
    /// Emit an event. Once the receiver is gone events are dropped.
    pub fn send(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    /// Announce that the pipeline entered `phase`
    pub fn phase(&self, phase: PipelinePhase) {
        self.send(Event::Pipeline(PipelineEvent::PhaseChanged { phase }));
    }
}

/// Consumer half
pub struct EventReceiver {
    rx: Receiver<Event>,
}

impl EventReceiver {
    /// Next queued event, if any
    pub fn try_recv(&self) -> Option<Event> {
        self.rx.try_recv().ok()
    }

    /// Blocking iterator; ends once every sender is dropped
    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.rx.iter()
    }

    /// Feed every event to `handler` on a separate thread.
    ///
    /// The thread exits after the last sender is dropped; join the handle to
    /// wait for the final events to be handled.
    pub fn spawn_consumer<F>(self, mut handler: F) -> JoinHandle<()>
    where
        F: FnMut(Event) + Send + 'static,
    {
        thread::spawn(move || {
            for event in self.rx.iter() {
                handler(event);
            }
        })
    }
}

/// Constructor for sender/receiver pairs
pub struct EventChannel;

impl EventChannel {
    /// Unbounded channel; the pipeline never waits on the UI.
    pub fn new() -> (EventSender, EventReceiver) {
        let (tx, rx) = unbounded();
        (EventSender { tx }, EventReceiver { rx })
    }
}

/// Sender whose events go nowhere, for headless runs and tests.
pub fn null_sender() -> EventSender {
    EventChannel::new().0
}

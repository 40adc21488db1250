//! Routing from rendered widgets to the per-frame UI event queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::{StatusNotice, UiEvent};

pub fn dispatch_ui_event(
    ui_tx: &Sender<UiEvent>,
    event: UiEvent,
    status: &mut Option<StatusNotice>,
) {
    let event_name = event.name();
    match ui_tx.try_send(event) {
        Ok(()) => tracing::trace!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "ui event queue full; dropping event");
            *status = Some(StatusNotice::warning(
                "UI event queue is full; please retry",
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(event = event_name, "ui event queue disconnected");
            *status = Some(StatusNotice::warning(
                "UI event queue disconnected; restart the app",
            ));
        }
    }
}

/// Sending half handed to render functions for one frame.
pub struct Outbox<'a> {
    ui_tx: &'a Sender<UiEvent>,
    status: &'a mut Option<StatusNotice>,
}

impl<'a> Outbox<'a> {
    pub fn new(ui_tx: &'a Sender<UiEvent>, status: &'a mut Option<StatusNotice>) -> Self {
        Self { ui_tx, status }
    }

    pub fn send(&mut self, event: UiEvent) {
        dispatch_ui_event(self.ui_tx, event, self.status);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;
    use crate::controller::events::NoticeSeverity;

    #[test]
    fn full_queue_reports_warning_and_keeps_earlier_events() {
        let (tx, rx) = bounded::<UiEvent>(1);
        let mut status = None;
        let mut outbox = Outbox::new(&tx, &mut status);
        outbox.send(UiEvent::ToggleMenu);
        outbox.send(UiEvent::CloseDetail);

        assert!(matches!(rx.try_recv(), Ok(UiEvent::ToggleMenu)));
        assert!(rx.try_recv().is_err());
        let notice = status.expect("queue full notice");
        assert_eq!(notice.severity(), NoticeSeverity::Warning);
    }

    #[test]
    fn disconnected_queue_reports_warning() {
        let (tx, rx) = bounded::<UiEvent>(4);
        drop(rx);
        let mut status = None;
        dispatch_ui_event(&tx, UiEvent::FrameRendered, &mut status);
        assert!(status
            .expect("disconnect notice")
            .message()
            .contains("disconnected"));
    }
}

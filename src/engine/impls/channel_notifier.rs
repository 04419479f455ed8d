use crate::engine::structs::award_notification::AwardNotification;
use crate::engine::structs::channel_notifier::ChannelNotifier;
use crate::engine::traits::award_notifier::AwardNotifier;
use log::warn;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

impl ChannelNotifier {
    pub fn new(sender: UnboundedSender<AwardNotification>) -> ChannelNotifier {
        ChannelNotifier { sender }
    }

    /// Notifier plus the receiving end for the reward side.
    pub fn channel() -> (ChannelNotifier, UnboundedReceiver<AwardNotification>) {
        let (sender, receiver) = unbounded_channel();
        (ChannelNotifier { sender }, receiver)
    }
}

impl AwardNotifier for ChannelNotifier {
    fn notify(&self, notification: AwardNotification) {
        if let Err(e) = self.sender.send(notification) {
            warn!("[AWARD] Receiver dropped, {} for {} was not delivered", e.0.award, e.0.subject);
        }
    }
}

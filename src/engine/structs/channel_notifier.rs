use crate::engine::structs::award_notification::AwardNotification;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    pub(crate) sender: UnboundedSender<AwardNotification>,
}

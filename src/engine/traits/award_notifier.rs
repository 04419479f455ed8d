use crate::engine::structs::award_notification::AwardNotification;

/// Receives each newly granted award exactly once.
///
/// Called from the engine's task after the grant is stored; implementations should hand
/// the work off rather than block.
pub trait AwardNotifier: Send + Sync {
    fn notify(&self, notification: AwardNotification);
}

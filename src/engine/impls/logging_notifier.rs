use crate::engine::structs::award_notification::AwardNotification;
use crate::engine::structs::logging_notifier::LoggingNotifier;
use crate::engine::traits::award_notifier::AwardNotifier;
use log::info;

impl AwardNotifier for LoggingNotifier {
    fn notify(&self, notification: AwardNotification) {
        let definition = &notification.definition;
        let display_name = if definition.display_name.is_empty() { &definition.name } else { &definition.display_name };
        info!(
            "[AWARD] {} reached {} {}: {} - {}",
            notification.subject, notification.threshold, notification.key, display_name, definition.message
        );
        if let Some(reward) = &definition.reward {
            let mut parts = Vec::new();
            if let Some(money) = reward.money { parts.push(format!("money {money}")); }
            if let Some(experience) = reward.experience { parts.push(format!("experience {experience}")); }
            if let Some(health) = reward.increase_max_health { parts.push(format!("max health +{health}")); }
            if let Some(oxygen) = reward.increase_max_oxygen { parts.push(format!("max oxygen +{oxygen}")); }
            if let Some(item) = &reward.item { parts.push(format!("item {item}")); }
            if !reward.commands.is_empty() { parts.push(format!("{} commands", reward.commands.len())); }
            if !parts.is_empty() {
                info!("[AWARD] {} rewards for {}: {}", notification.award, notification.subject, parts.join(", "));
            }
        }
    }
}

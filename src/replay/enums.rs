/// One line of a replay file.
pub mod replay_event;

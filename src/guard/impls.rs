pub mod deferred_task_guard;

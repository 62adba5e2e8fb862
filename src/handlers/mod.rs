mod button_release_handler;
mod shell_event_handler;
mod window_count_handler;
mod workspace_changed_handler;

pub mod window_count;

pub mod task_text;

pub mod session_exercises;
pub mod sessions;

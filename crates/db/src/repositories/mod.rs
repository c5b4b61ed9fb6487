//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod session_exercise_repo;
pub mod session_repo;

pub use session_exercise_repo::SessionExerciseRepo;
pub use session_repo::SessionRepo;

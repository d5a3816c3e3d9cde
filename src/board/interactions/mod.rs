pub mod flee;

pub use flee::{flee_from_pointer, flee_push};

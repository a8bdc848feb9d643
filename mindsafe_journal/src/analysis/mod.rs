pub mod entry;
pub mod patterns;

pub use entry::analyze_entry;
pub use patterns::analyze_patterns;

pub mod candidate;
pub mod events;
pub mod poll;

pub use candidate::*;
pub use events::*;
pub use poll::*;

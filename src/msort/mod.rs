pub mod core;
pub mod merge;
pub mod parallel;
pub mod partition;


pub use self::core::*;
pub use self::merge::*;
pub use self::parallel::*;
pub use self::partition::*;

pub mod compact;
pub mod eci;
pub mod encoder;
pub mod planner;
pub mod types;

pub use compact::{compact_text, TextState};
pub use eci::Segment;
pub use encoder::{assemble, Stream};
pub use planner::{plan, Run};
pub use types::{Compaction, TextStep};

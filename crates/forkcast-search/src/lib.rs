pub mod cuisines;
pub mod pipeline;
pub mod select;

pub use cuisines::TOP_CUISINES;
pub use pipeline::{EmptyReason, FailureReason, SearchOutcome, SearchPipeline};
pub use select::sample;

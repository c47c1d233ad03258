pub mod query;
pub mod sample;

pub use query::{PageResult, SampleQuery};
pub use sample::{HeavyMetals, Parameters, Sample, SampleType, Status, Zone};

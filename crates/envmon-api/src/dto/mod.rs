mod request;
mod response;

pub use request::SampleQueryParams;
pub use response::{HealthResponse, PageResponse};

pub mod error;
pub mod government;
pub mod metrics;
pub mod registry;

pub use error::ServiceError;
pub use government::GovernmentService;
pub use metrics::{get_metrics, init_metrics};
pub use registry::{InMemoryRegistry, Registry};

pub mod api;
pub mod endpoints;
pub mod queries;
pub mod query;
pub mod retry;

pub use api::{AemoClient, ApiConfig};
pub use endpoints::{Endpoint, QueryKey, QueryParams};
pub use query::{Query, QueryCache, QueryClient, QueryClientHandle, QueryOptions};

mod balance_dashboard_tests;
mod http_transport_tests;

use crate::core::client::ApiClient;
use crate::infrastructure::transport::in_memory::InMemoryTransport;

pub const TEST_ORIGIN: &str = "http://localhost:8080";

/// Client wired to an in-memory transport; the returned handle shares its request log.
pub fn create_test_client() -> (ApiClient<InMemoryTransport>, InMemoryTransport) {
    let transport = InMemoryTransport::new();
    let client = ApiClient::new(TEST_ORIGIN, transport.clone());
    (client, transport)
}

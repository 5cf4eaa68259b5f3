use crate::guard::AdmissionGuard;
use crate::upstream::UpstreamClient;

// App's shared state
pub struct AppState {
    pub upstream: UpstreamClient,
    pub guard: AdmissionGuard,
}

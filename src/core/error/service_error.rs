//! Errors describing service-registry rejections.

/// The requested service id does not match any registered service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnauthorizedService {
    pub service_id: String,
}

impl UnauthorizedService {
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
        }
    }
}

impl std::fmt::Display for UnauthorizedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "service '{}' is not authorized to use this authority", self.service_id)
    }
}

use triangle_auth::{AuthorizationContext, RouteClass};

/// Session context for a request (verified identity + the gate that admitted it).
///
/// Inserted by the session gate middleware; read-only for handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    identity: AuthorizationContext,
    admitted_by: RouteClass,
}

impl SessionContext {
    pub fn new(identity: AuthorizationContext, admitted_by: RouteClass) -> Self {
        Self {
            identity,
            admitted_by,
        }
    }

    pub fn identity(&self) -> &AuthorizationContext {
        &self.identity
    }

    pub fn admitted_by(&self) -> RouteClass {
        self.admitted_by
    }
}

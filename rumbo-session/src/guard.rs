use rumbo_shared::Role;

/// The set of roles a guarded view requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any authenticated account.
    UserOnly,
    /// Administrators only.
    AdminOnly,
    /// Airline operators or administrators.
    AirlineOrAdmin,
}

/// Whether a role satisfies a capability. One predicate for every guard;
/// there are no per-role guard variants.
pub fn allows(role: Role, capability: Capability) -> bool {
    match capability {
        Capability::UserOnly => true,
        Capability::AdminOnly => role == Role::Admin,
        Capability::AirlineOrAdmin => matches!(role, Role::Airline | Role::Admin),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected subtree.
    Render,
    /// Navigate back to home. `prompt_login` is true only for the first
    /// anonymous evaluation of this guard instance.
    RedirectHome { prompt_login: bool },
}

/// Gates rendering of a protected subtree. One instance per mount: repeated
/// evaluations (re-renders) never re-trigger the login prompt.
///
/// Anonymous visitors get redirected with a login prompt; authenticated
/// visitors with the wrong role get redirected silently.
#[derive(Debug)]
pub struct RouteGuard {
    capability: Capability,
    login_prompted: bool,
}

impl RouteGuard {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            login_prompted: false,
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn evaluate(&mut self, role: Option<Role>) -> GuardDecision {
        match role {
            None => {
                let prompt_login = !self.login_prompted;
                self.login_prompted = true;
                if prompt_login {
                    tracing::debug!(capability = ?self.capability, "Anonymous visitor, prompting login");
                }
                GuardDecision::RedirectHome { prompt_login }
            }
            Some(role) if allows(role, self.capability) => GuardDecision::Render,
            Some(role) => {
                tracing::debug!(?role, capability = ?self.capability, "Role not allowed, redirecting");
                GuardDecision::RedirectHome { prompt_login: false }
            }
        }
    }
}

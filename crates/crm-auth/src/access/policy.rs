//! Ordered access rules with a fallback requirement.

use tracing::warn;

use crm_core::config::SecurityMode;

use super::pattern::PathPattern;

/// What a request must present to pass the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No credentials needed.
    PermitAll,
    /// Valid Basic credentials for the provisioned account.
    Authenticated,
}

/// One `(pattern, requirement)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    /// Paths the rule applies to.
    pub pattern: PathPattern,
    /// Requirement for matching paths.
    pub requirement: Requirement,
}

impl AccessRule {
    /// Rule that opens `pattern` to anonymous callers.
    pub fn permit(pattern: &str) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            requirement: Requirement::PermitAll,
        }
    }

    /// Rule that requires credentials for `pattern`.
    pub fn authenticated(pattern: &str) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            requirement: Requirement::Authenticated,
        }
    }
}

/// Ordered rule list; the first matching rule decides, otherwise `fallback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
    fallback: Requirement,
}

/// Paths reachable without credentials in standard mode.
const OPEN_PATHS: [&str; 6] = [
    "/actuator/health",
    "/actuator/info",
    "/v3/api-docs/**",
    "/swagger-ui/**",
    "/swagger-ui.html",
    "/db-console/**",
];

impl AccessPolicy {
    /// Build a policy from explicit rules.
    pub fn new(rules: Vec<AccessRule>, fallback: Requirement) -> Self {
        Self { rules, fallback }
    }

    /// Probes, API docs and the development console are open; everything
    /// else requires credentials.
    pub fn standard() -> Self {
        Self::new(
            OPEN_PATHS.iter().map(|p| AccessRule::permit(p)).collect(),
            Requirement::Authenticated,
        )
    }

    /// Every path is open. Test execution only.
    pub fn permit_all() -> Self {
        Self::new(Vec::new(), Requirement::PermitAll)
    }

    /// Select the rule set named by configuration.
    pub fn from_mode(mode: SecurityMode) -> Self {
        match mode {
            SecurityMode::Standard => Self::standard(),
            SecurityMode::PermitAll => {
                warn!(
                    "security.mode = \"permit-all\": every endpoint is reachable WITHOUT \
                     credentials. Never run this configuration outside tests."
                );
                Self::permit_all()
            }
        }
    }

    /// Requirement for `path`.
    pub fn requirement_for(&self, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.requirement)
            .unwrap_or(self.fallback)
    }

    /// Whether no path needs credentials.
    pub fn is_permit_all(&self) -> bool {
        self.fallback == Requirement::PermitAll
            && self
                .rules
                .iter()
                .all(|rule| rule.requirement == Requirement::PermitAll)
    }

    /// The configured rules, in evaluation order.
    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }
}

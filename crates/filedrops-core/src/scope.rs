//! Credential-scoped execution.
//!
//! When a [`FileSystem`](crate::FileSystem) is configured with
//! [`Credentials`], file reads and writes run through its
//! [`ScopedExecutor`]. The executor enters the alternate identity right
//! before the operation and leaves it right after, on every exit path.
//!
//! Real OS impersonation is platform specific and plugs in by implementing
//! [`ScopedExecutor`]. The crate ships [`DirectExecutor`] and
//! [`IdentityScopeExecutor`], which tracks the active identity per thread.

use std::cell::RefCell;
use std::fmt;

use crate::error::CoreResult;

/// Alternate identity used for credential-scoped I/O.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub domain: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            domain: domain.into(),
        }
    }

    /// Returns `DOMAIN\user`, or just `user` when no domain is set.
    pub fn principal(&self) -> String {
        if self.domain.trim().is_empty() {
            self.username.clone()
        } else {
            format!("{}\\{}", self.domain, self.username)
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

/// Runs a single operation under an alternate identity.
///
/// Implementations must tear the identity down even if `op` fails or
/// panics, and must never change identity for other threads.
pub trait ScopedExecutor: fmt::Debug + Send + Sync {
    fn run_scoped(
        &self,
        credentials: &Credentials,
        op: &mut dyn FnMut() -> CoreResult<()>,
    ) -> CoreResult<()>;
}

/// Executor that ignores the credentials and runs the operation directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectExecutor;

impl ScopedExecutor for DirectExecutor {
    fn run_scoped(
        &self,
        _credentials: &Credentials,
        op: &mut dyn FnMut() -> CoreResult<()>,
    ) -> CoreResult<()> {
        op()
    }
}

thread_local! {
    static CURRENT_IDENTITY: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Returns the identity active on the calling thread, if any.
pub fn current_identity() -> Option<String> {
    CURRENT_IDENTITY.with(|current| current.borrow().clone())
}

/// RAII guard for the thread-local identity. Restores the previous value on drop.
struct IdentityGuard {
    previous: Option<String>,
}

impl IdentityGuard {
    fn enter(principal: String) -> Self {
        let previous = CURRENT_IDENTITY.with(|current| current.replace(Some(principal)));
        Self { previous }
    }
}

impl Drop for IdentityGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT_IDENTITY.with(|current| *current.borrow_mut() = previous);
    }
}

/// Executor that publishes the identity through [`current_identity`] for the
/// duration of the operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScopeExecutor;

impl ScopedExecutor for IdentityScopeExecutor {
    fn run_scoped(
        &self,
        credentials: &Credentials,
        op: &mut dyn FnMut() -> CoreResult<()>,
    ) -> CoreResult<()> {
        let principal = credentials.principal();
        let span = tracing::debug_span!("scoped", principal = %principal);
        let _entered = span.enter();
        let _guard = IdentityGuard::enter(principal);
        op()
    }
}

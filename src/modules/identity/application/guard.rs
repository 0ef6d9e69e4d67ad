//! Capability gate composed around use cases (decorator pattern), so
//! moderation handlers never repeat the permission check.
use async_trait::async_trait;

use crate::modules::identity::domain::{Caller, Capability};
use crate::shared::application::{Query, UseCase};
use crate::shared::errors::AppResult;

/// A command or query issued by an identified caller.
#[derive(Debug, Clone)]
pub struct Authorized<C> {
    pub caller: Caller,
    pub command: C,
}

impl<C> Authorized<C> {
    pub fn new(caller: Caller, command: C) -> Self {
        Self { caller, command }
    }
}

/// Runs the inner handler only when the caller holds `capability`.
pub struct RequireCapability<H> {
    capability: Capability,
    inner: H,
}

impl<H> RequireCapability<H> {
    pub fn new(capability: Capability, inner: H) -> Self {
        Self { capability, inner }
    }

    pub fn administrator(inner: H) -> Self {
        Self::new(Capability::Administrator, inner)
    }
}

#[async_trait]
impl<C, R, H> UseCase<Authorized<C>, R> for RequireCapability<H>
where
    C: Send + 'static,
    R: Send + 'static,
    H: UseCase<Authorized<C>, R>,
{
    async fn execute(&self, request: Authorized<C>) -> AppResult<R> {
        self.capability.check(&request.caller)?;
        self.inner.execute(request).await
    }
}

#[async_trait]
impl<Q, R, H> Query<Authorized<Q>, R> for RequireCapability<H>
where
    Q: Send + 'static,
    R: Send + 'static,
    H: Query<Authorized<Q>, R>,
{
    async fn execute(&self, request: Authorized<Q>) -> AppResult<R> {
        self.capability.check(&request.caller)?;
        self.inner.execute(request).await
    }
}

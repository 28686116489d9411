//! Request Context
//!
//! Per-request values (request id, locale) made available to code that has
//! no access to the request itself, such as `IntoResponse` implementations.

use std::future::Future;

use super::i18n::Locale;

tokio::task_local! {
    static CURRENT: RequestContext;
}

/// Values scoped to the request being processed
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: Option<String>,
    pub locale: Locale,
}

impl RequestContext {
    /// Run `future` with this context installed
    pub async fn scope<F: Future>(self, future: F) -> F::Output {
        CURRENT.scope(self, future).await
    }

    /// Context of the current task, or the default outside a request
    #[must_use]
    pub fn current() -> Self {
        CURRENT.try_with(Clone::clone).unwrap_or_default()
    }

    /// Locale of the current request
    #[must_use]
    pub fn locale() -> Locale {
        CURRENT.try_with(|ctx| ctx.locale).unwrap_or_default()
    }
}

//! Shared REST-client handle.

use crate::services::api::ApiClient;
use std::rc::Rc;

/// Context value handing every page the app's single [`ApiClient`].
#[derive(Clone, PartialEq)]
pub(crate) struct ApiCtx {
    /// Client configured with the resolved backend base URL.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

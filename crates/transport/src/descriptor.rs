use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::DispatchError;

pub use reqwest::Method;

/// Caller-supplied parameters for a single request: an optional JSON body
/// plus any query parameters. Auth is not part of this; the dispatcher adds
/// it from the descriptor context.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl RequestParams {
    pub fn from_body(body: Value) -> Self {
        Self {
            body: Some(body),
            query: Vec::new(),
        }
    }

    /// Whether a named parameter was supplied. The request body rides under
    /// the reserved `resource` name, everything else is a query parameter.
    pub fn has(&self, name: &str) -> bool {
        if name == "resource" {
            return self.body.is_some();
        }
        self.query.iter().any(|(key, _)| key.as_str() == name)
    }
}

/// Declarative record of one API call: target URL, HTTP method, parameters,
/// and the configuration of the client instance that built it. Bindings
/// construct descriptors; the dispatcher executes them.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub params: RequestParams,
    /// Parameter names that must be present before dispatching.
    pub required_params: Vec<&'static str>,
    /// Parameter names substituted into `{name}` templates in the URL.
    pub path_params: Vec<&'static str>,
    /// Configuration of the client that issued the call (auth, base URL
    /// override, default request options).
    pub context: Arc<ClientConfig>,
}

impl RequestDescriptor {
    /// Check that every required parameter was supplied.
    pub fn validate(&self) -> Result<(), DispatchError> {
        for &name in &self.required_params {
            if !self.params.has(name) {
                return Err(DispatchError::MissingParam { name });
            }
        }
        Ok(())
    }

    /// Expand `{name}` path templates from the query parameters and return
    /// the final URL together with the remaining query pairs. Consumed path
    /// parameters are removed from the query.
    pub fn expanded_url(&self) -> Result<(String, Vec<(String, String)>), DispatchError> {
        let mut url = self.url.clone();
        let mut query = self.params.query.clone();

        for &name in &self.path_params {
            let index = match query.iter().position(|(key, _)| key.as_str() == name) {
                Some(index) => index,
                None => return Err(DispatchError::MissingParam { name }),
            };
            let (_, value) = query.remove(index);
            url = url.replace(&format!("{{{}}}", name), &value);
        }

        Ok((url, query))
    }
}

// src/seed/transport.rs

use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Routes of the service's create-resource protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    User,
    Task,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::User => "/user",
            Route::Task => "/task",
        }
    }
}

/// Delivers an encoded command to the service and returns its reply.
///
/// Any non-success reply must come back as `AppError::Service`.
pub trait Transport {
    fn send(&self, route: Route, payload: &Value) -> AppResult<Value>;
}

/// Blocking HTTP transport against a base URL such as
/// `http://127.0.0.1/mindless/api`.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn url(&self, route: Route) -> String {
        format!("{}{}", self.base_url, route.path())
    }
}

impl Transport for HttpTransport {
    fn send(&self, route: Route, payload: &Value) -> AppResult<Value> {
        let url = self.url(route);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(payload).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AppError::Service {
                route: route.path().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(v) => Ok(v),
            Err(e) => {
                tracing::warn!(%url, "response is not JSON: {e}");
                Ok(Value::String(body))
            }
        }
    }
}

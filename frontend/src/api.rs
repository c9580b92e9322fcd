//! Client for the remote records service.
//!
//! Every call is a single request awaited to completion. Non-2xx statuses are
//! turned into [`ApiError::Status`]; callers log failures and keep their state.

use common::config::{ClientConfig, CONFIG_PATH};
use common::model::certificate::Certificate;
use common::model::student::Student;
use common::requests::{CertificateList, StudentDraft};
use gloo_console::log;
use gloo_net::http::{Request, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("{method} {url} returned {status} {status_text}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        status_text: String,
    },
}

fn check(method: &'static str, url: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            method,
            url: url.to_string(),
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let url = self.config.users_url();
        let response = check("GET", &url, Request::get(&url).send().await?)?;
        Ok(response.json().await?)
    }

    pub async fn create_student(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        let url = self.config.users_url();
        let response = check("POST", &url, Request::post(&url).json(draft)?.send().await?)?;
        Ok(response.json().await?)
    }

    pub async fn update_student(&self, id: &str, draft: &StudentDraft) -> Result<Student, ApiError> {
        let url = self.config.user_url(id);
        let response = check("PUT", &url, Request::put(&url).json(draft)?.send().await?)?;
        Ok(response.json().await?)
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        let url = self.config.user_url(id);
        check("DELETE", &url, Request::delete(&url).send().await?)?;
        Ok(())
    }

    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, ApiError> {
        let url = self.config.calls_url();
        let response = check("GET", &url, Request::get(&url).send().await?)?;
        let list: CertificateList = response.json().await?;
        Ok(list.data)
    }
}

/// Reads the host-provided configuration, falling back to the built-in one.
pub async fn load_client_config() -> ClientConfig {
    let fetched = async {
        let response = check("GET", CONFIG_PATH, Request::get(CONFIG_PATH).send().await?)?;
        Ok::<ClientConfig, ApiError>(response.json().await?)
    }
    .await;

    match fetched.map(ClientConfig::validated) {
        Ok(Ok(config)) => config,
        Ok(Err(e)) => {
            log!(format!("Ignoring runtime config: {}", e));
            ClientConfig::default()
        }
        Err(e) => {
            log!(format!("No runtime config ({}), using built-in API URL", e));
            ClientConfig::default()
        }
    }
}

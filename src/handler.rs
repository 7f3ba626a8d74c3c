// ABOUTME: Invocation boundary turning one synthesis call into a complete HTTP-style response
// ABOUTME: Catches every per-call failure, including panics, and reports it as a 500 response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cocktail Invocation
//!
//! [`invoke`] runs a single synthesis and always returns an
//! [`InvocationResponse`]: either `200` with the `{name, ingredients}` JSON
//! body, or `500` with the failure message as plain body. Both carry the
//! permissive CORS headers. A panic anywhere in the call is caught here and
//! reported the same way, so one bad call never takes the process down.

use crate::resources::ServerResources;
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use barkeep_core::constants::cors::ALLOW_ALL;
use barkeep_core::errors::{AppError, AppResult};
use barkeep_mixology::CocktailCard;
use http::{header::HeaderName, HeaderValue, StatusCode};
use rand::Rng;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info, warn};

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Complete response for one invocation, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers, ordered by name
    pub headers: BTreeMap<String, String>,
    /// Response body
    pub body: String,
}

impl InvocationResponse {
    /// `200` response carrying a JSON body
    #[must_use]
    pub fn json(body: String) -> Self {
        let mut headers = cors_headers();
        headers.insert(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned());
        Self {
            status_code: 200,
            headers,
            body,
        }
    }

    /// `500` response carrying the failure message as body
    #[must_use]
    pub fn failure(error: &AppError) -> Self {
        Self {
            status_code: 500,
            headers: cors_headers(),
            body: error.message.clone(),
        }
    }

    /// True for a `2xx` status
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

fn cors_headers() -> BTreeMap<String, String> {
    [ALLOW_ORIGIN, ALLOW_METHODS, ALLOW_HEADERS]
        .into_iter()
        .map(|name| (name.to_owned(), ALLOW_ALL.to_owned()))
        .collect()
}

/// Invent one cocktail using the thread-local random generator
#[must_use]
pub fn invoke(resources: &ServerResources) -> InvocationResponse {
    invoke_with_rng(resources, &mut rand::thread_rng())
}

/// Invent one cocktail with an explicit random source
#[must_use]
pub fn invoke_with_rng<R: Rng + ?Sized>(
    resources: &ServerResources,
    rng: &mut R,
) -> InvocationResponse {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| render_cocktail(resources, rng)));

    match outcome {
        Ok(Ok(body)) => {
            info!(status = 200, body = %body, "Cocktail served");
            InvocationResponse::json(body)
        }
        Ok(Err(app_error)) => {
            warn!(
                status = 500,
                code = ?app_error.code,
                error = %app_error,
                "Cocktail synthesis failed"
            );
            InvocationResponse::failure(&app_error)
        }
        Err(payload) => {
            let app_error = AppError::internal(panic_message(payload.as_ref()));
            error!(status = 500, error = %app_error, "Cocktail synthesis panicked");
            InvocationResponse::failure(&app_error)
        }
    }
}

fn render_cocktail<R>(resources: &ServerResources, rng: &mut R) -> AppResult<String>
where
    R: Rng + ?Sized,
{
    let cocktail = resources.synthesizer().synthesize(rng)?;
    let card: CocktailCard = cocktail.rendered();
    Ok(serde_json::to_string(&card)?)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic during cocktail synthesis".to_owned())
}

impl IntoResponse for InvocationResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Body::from(self.body)).into_response();

        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!(header = %name, "Dropping invalid response header"),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_headers_include_content_type() {
        let response = InvocationResponse::json("{}".into());

        assert_eq!(response.status_code, 200);
        assert!(response.is_success());
        assert_eq!(response.headers[CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(response.headers[ALLOW_ORIGIN], "*");
        assert_eq!(response.headers.len(), 4);
    }

    #[test]
    fn test_failure_has_cors_but_no_content_type() {
        let response = InvocationResponse::failure(&AppError::internal("boom"));

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "boom");
        assert!(!response.headers.contains_key(CONTENT_TYPE));
        assert_eq!(response.headers[ALLOW_METHODS], "*");
        assert_eq!(response.headers[ALLOW_HEADERS], "*");
    }

    #[test]
    fn test_panic_payloads_become_messages() {
        let caught = panic::catch_unwind(|| panic!("shaken, not stirred")).unwrap_err();
        assert_eq!(panic_message(caught.as_ref()), "shaken, not stirred");

        let owned = panic::catch_unwind(|| panic!("{} olives", 2)).unwrap_err();
        assert_eq!(panic_message(owned.as_ref()), "2 olives");
    }

    #[test]
    fn test_into_response_copies_status_and_headers() {
        let response = InvocationResponse::json(r#"{"name":"x"}"#.into()).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            APPLICATION_JSON
        );
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}

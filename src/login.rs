//! Login endpoint: decodes a JSON credential form and answers with a bare
//! status code, the way a minimal session endpoint would.

use std::convert::Infallible;
use std::fmt::Display;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::{Request, Response, StatusCode};
use serde::Deserialize;

use crate::response;

/// The credential pair accepted by the demo endpoint.
const VALID_CODE: &str = "a@example.com";
const VALID_PASSWORD: &str = "password";

/// Absent fields decode to empty strings and fall through to the
/// credential check instead of failing the decode.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub code: String,
    pub password: String,
}

/// Handle a login request.
///
/// - 500 `read post body failed` when the body cannot be read;
/// - 400 `input invalid format` when the body is not a valid form;
/// - 400 `invalid code or password` on a credential mismatch;
/// - 200 `ok` otherwise.
///
/// Generic over the body type so tests can supply a body that fails
/// mid-read; the handler itself is total.
pub async fn login_handler<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Display,
{
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            tracing::warn!(error = %err, "reading login request body failed");
            return Ok(response::text(
                StatusCode::INTERNAL_SERVER_ERROR,
                "read post body failed",
            ));
        }
    };

    let input: LoginForm = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(_) => return Ok(response::text(StatusCode::BAD_REQUEST, "input invalid format")),
    };

    if input.code != VALID_CODE || input.password != VALID_PASSWORD {
        return Ok(response::text(
            StatusCode::BAD_REQUEST,
            "invalid code or password",
        ));
    }

    Ok(response::text(StatusCode::OK, "ok"))
}

//! HTTP adapter for the dispatcher.
//!
//! - 200: encoded response, `application/octet-stream`, exact `Content-Length`
//! - 400: undecodable body or unknown path
//! - 500: collector or encoder failure

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use tmstats_core::error::{ClientCode, Result};

use crate::app_state::AppState;

const OCTET_STREAM: &str = "application/octet-stream";

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest | ClientCode::RouteNotFound => StatusCode::BAD_REQUEST,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        // config load only; no request path yields it
        ClientCode::UnsupportedVersion => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn into_response(res: Result<Bytes>) -> Response {
    match res {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM)),
                (header::CONTENT_LENGTH, HeaderValue::from(body.len())),
            ],
            body,
        )
            .into_response(),
        Err(e) => status_for(e.client_code()).into_response(),
    }
}

pub async fn handle_query(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    into_response(state.dispatcher().dispatch(uri.path(), body))
}

pub async fn handle_unknown(State(state): State<AppState>, uri: Uri) -> Response {
    into_response(Err(state.dispatcher().reject_unknown(uri.path())))
}

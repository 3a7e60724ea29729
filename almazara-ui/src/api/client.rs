//! HTTP API Client
//!
//! Functions for communicating with the mill's REST API. Bodies are decoded
//! through the shared envelope rules, so a failure arrives as the same
//! [`ApiError`] the native client produces. A 401 removes the stored session
//! before the error is returned.

use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;

use almazara::api::{
    decode_body, decode_empty, endpoints, ApiError, ApiResult, LoginRequest, LoginResponse,
    Resource,
};
use almazara::model::{Profile, RecordId, Role};
use almazara::session::{Session, TokenStore};

use super::storage::{get_api_base, LocalStorageStore};

fn url(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn bearer() -> ApiResult<String> {
    match LocalStorageStore.load() {
        Ok(Some(session)) => Ok(session.bearer()),
        Ok(None) => Err(ApiError::NotLoggedIn),
        Err(e) => {
            web_sys::console::warn_1(&format!("Cannot read stored session: {}", e).into());
            Err(ApiError::NotLoggedIn)
        }
    }
}

fn authorized(builder: RequestBuilder) -> ApiResult<RequestBuilder> {
    Ok(builder.header("Authorization", &bearer()?))
}

fn forget_stored_session() {
    if let Err(e) = LocalStorageStore.clear() {
        web_sys::console::warn_1(&format!("Cannot clear stored session: {}", e).into());
    }
}

/// Send a request and return the body of a 2xx response
async fn send(request: Request) -> ApiResult<String> {
    let response = request.send().await.map_err(network)?;
    let status = response.status();
    let text = response.text().await.map_err(network)?;

    if response.ok() {
        return Ok(text);
    }

    let err = ApiError::from_status(status, &text);
    match &err {
        ApiError::Unauthorized => forget_stored_session(),
        ApiError::Server { status } => {
            web_sys::console::error_1(&format!("API server error {}: {}", status, text).into());
        }
        _ => {}
    }
    Err(err)
}

async fn send_empty(builder: RequestBuilder) -> ApiResult<String> {
    send(builder.build().map_err(network)?).await
}

async fn send_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> ApiResult<String> {
    send(builder.json(body).map_err(network)?).await
}

/// Log in and keep the session in local storage
pub async fn login(username: &str, password: &str) -> ApiResult<Session> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let text = send_json(Request::post(&url(endpoints::LOGIN)), &body).await?;
    let login: LoginResponse = decode_body(&text)?;

    let mut role = login.user.role_kind(&[]);
    if role.is_none() && login.user.role_id.is_some() {
        let builder = Request::get(&Role::collection_url(&get_api_base()))
            .header("Authorization", &format!("Bearer {}", login.token));
        match send_empty(builder).await.and_then(|t| decode_body::<Vec<Role>>(&t)) {
            Ok(roles) => role = login.user.role_kind(&roles),
            Err(e) => web_sys::console::warn_1(&format!("Cannot resolve role: {}", e).into()),
        }
    }

    let now = chrono::Utc::now().timestamp_millis();
    let session = Session::new(login.token, login.user, role, now);
    LocalStorageStore.save(&session)?;
    Ok(session)
}

/// Log out; local credentials are removed whatever the server answers
pub async fn logout() {
    if let Ok(builder) = authorized(Request::post(&url(endpoints::LOGOUT))) {
        if let Err(e) = send_empty(builder).await.and_then(|t| decode_empty(&t)) {
            web_sys::console::warn_1(&format!("Logout failed: {}", e).into());
        }
    }
    forget_stored_session();
}

/// `GET /profile`
pub async fn fetch_profile() -> ApiResult<Profile> {
    let text = send_empty(authorized(Request::get(&url(endpoints::PROFILE)))?).await?;
    decode_body(&text)
}

/// `GET /{resource}`
pub async fn list<R: Resource>() -> ApiResult<Vec<R>> {
    let builder = authorized(Request::get(&R::collection_url(&get_api_base())))?;
    decode_body(&send_empty(builder).await?)
}

/// `POST /{resource}`
pub async fn create<R: Resource>(body: &serde_json::Value) -> ApiResult<R> {
    let builder = authorized(Request::post(&R::collection_url(&get_api_base())))?;
    decode_body(&send_json(builder, body).await?)
}

/// `PUT /{resource}/{id}`
pub async fn update<R: Resource>(id: RecordId, body: &serde_json::Value) -> ApiResult<R> {
    let builder = authorized(Request::put(&R::item_url(&get_api_base(), id)))?;
    decode_body(&send_json(builder, body).await?)
}

/// `DELETE /{resource}/{id}`
pub async fn delete<R: Resource>(id: RecordId) -> ApiResult<()> {
    let builder = authorized(Request::delete(&R::item_url(&get_api_base(), id)))?;
    decode_empty(&send_empty(builder).await?)
}

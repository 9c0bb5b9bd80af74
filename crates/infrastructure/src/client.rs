//! Authenticated HTTP client with transparent token refresh.
//!
//! Every request carries the bearer token read from the session store at
//! send time. A 401 on an authenticated path triggers the single-flight
//! refresh coordinator and one replay of the original request; a second
//! 401 is surfaced to the caller as a normal API error.

use std::sync::{Arc, RwLock};

use reqwest::multipart::Form;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use url::Url;

use lobbydesk_application::{RefreshCoordinator, RefreshedTokens, SessionStore, TokenRefresher};
use lobbydesk_domain::{
    ClientError, ClientResult, Envelope, Page, QueryPairs, UserProfile, extract_error_message,
};

use crate::config::{ApiConfig, USER_AGENT};

/// Notifications about the session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session is gone and the user must log in again.
    AuthenticationRequired,
}

type SessionListener = Arc<dyn Fn(SessionEvent) + Send + Sync>;

/// Successful login payload.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub access: String,
    /// Token accepted by the refresh endpoint.
    pub refresh: String,
    /// Profile of the authenticated user.
    pub user: UserProfile,
}

#[derive(Debug, serde::Deserialize)]
struct RefreshPayload {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

/// Request payload variants, kept rebuildable so the 401 replay path
/// works for multipart uploads too.
enum Payload<'a> {
    None,
    Json(&'a Value),
    Multipart(&'a (dyn Fn() -> ClientResult<Form> + Send + Sync)),
}

/// The admin console's HTTP client.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
    coordinator: RefreshCoordinator,
    listener: RwLock<Option<SessionListener>>,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the underlying
    /// HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ClientError::Api {
            status: 0,
            message: format!("invalid base URL: {e}"),
            body: None,
        })?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Api {
                status: 0,
                message: e.to_string(),
                body: None,
            })?;
        Ok(Self {
            http,
            base_url,
            session: SessionStore::new(),
            coordinator: RefreshCoordinator::new(),
            listener: RwLock::new(None),
        })
    }

    /// The session store backing this client.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Registers the listener invoked on session events, replacing any
    /// previous one.
    pub fn on_session_event(&self, listener: impl Fn(SessionEvent) + Send + Sync + 'static) {
        if let Ok(mut slot) = self.listener.write() {
            *slot = Some(Arc::new(listener));
        }
    }

    fn emit(&self, event: SessionEvent) {
        let listener = self
            .listener
            .read()
            .ok()
            .and_then(|slot| slot.clone());
        if let Some(listener) = listener {
            listener(event);
        }
    }

    /// Authenticates with a username and installs the session.
    ///
    /// The user's role is checked against the console allow-list before
    /// any session state is written; accounts outside the allow-list get
    /// [`ClientError::ForbiddenUser`] and no stored tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ForbiddenUser`] for disallowed roles and
    /// [`ClientError::Api`] for rejected credentials or transport
    /// failures. Any failure leaves the session cleared.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        self.login_with(json!({ "username": username, "password": password }))
            .await
    }

    /// Authenticates with an email address instead of a username.
    ///
    /// Same allow-list check and failure handling as [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ForbiddenUser`] for disallowed roles and
    /// [`ClientError::Api`] for rejected credentials or transport
    /// failures. Any failure leaves the session cleared.
    pub async fn login_with_email(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        self.login_with(json!({ "email": email, "password": password }))
            .await
    }

    async fn login_with(&self, body: Value) -> ClientResult<LoginResponse> {
        let result = self
            .send(Method::POST, "/login/", &QueryPairs::new(), Payload::Json(&body))
            .await
            .and_then(decode_envelope::<LoginResponse>);
        match result {
            Ok(response) => {
                if !response.user.user_type.is_console_role() {
                    self.session.clear().await;
                    return Err(ClientError::ForbiddenUser(
                        "this account cannot access the admin console".to_owned(),
                    ));
                }
                self.session
                    .install_login(
                        response.access.clone(),
                        response.refresh.clone(),
                        response.user.clone(),
                    )
                    .await;
                Ok(response)
            }
            Err(err) => {
                self.session.clear().await;
                Err(err)
            }
        }
    }

    /// Logs out, clearing local session state unconditionally.
    ///
    /// The backend logout call is best-effort; a failure is logged and
    /// not surfaced.
    pub async fn logout(&self) {
        if let Some(refresh) = self.session.refresh_token().await {
            let body = json!({ "refresh": refresh });
            if let Err(err) = self
                .send(Method::POST, "/logout/", &QueryPairs::new(), Payload::Json(&body))
                .await
            {
                tracing::warn!(error = %err, "backend logout failed");
            }
        }
        self.session.clear().await;
    }

    /// Requests a password reset OTP for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the backend rejects the request.
    pub async fn request_password_reset(&self, email: &str) -> ClientResult<()> {
        let body = json!({ "email": email });
        self.send(
            Method::POST,
            "/password-reset/request/",
            &QueryPairs::new(),
            Payload::Json(&body),
        )
        .await
        .map(|_| ())
    }

    /// Completes a password reset with the emailed OTP.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the backend rejects the OTP or
    /// the new password.
    pub async fn confirm_password_reset(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> ClientResult<()> {
        let body = json!({ "email": email, "otp": otp, "new_password": new_password });
        self.send(
            Method::POST,
            "/password-reset/confirm/",
            &QueryPairs::new(),
            Payload::Json(&body),
        )
        .await
        .map(|_| ())
    }

    // Typed helpers used by the resource facades.

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> ClientResult<T> {
        self.send(Method::GET, path, query, Payload::None)
            .await
            .and_then(decode_envelope)
    }

    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> ClientResult<Page<T>> {
        let value = self.send(Method::GET, path, query, Payload::None).await?;
        Page::from_value(value).map_err(decode_error)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body).map_err(decode_error)?;
        self.send(Method::POST, path, &QueryPairs::new(), Payload::Json(&body))
            .await
            .and_then(decode_envelope)
    }

    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body).map_err(decode_error)?;
        self.send(Method::PATCH, path, &QueryPairs::new(), Payload::Json(&body))
            .await
            .and_then(decode_envelope)
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(Method::DELETE, path, &QueryPairs::new(), Payload::None)
            .await
            .map(|_| ())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &(dyn Fn() -> ClientResult<Form> + Send + Sync),
    ) -> ClientResult<T> {
        self.send(Method::POST, path, &QueryPairs::new(), Payload::Multipart(form))
            .await
            .and_then(decode_envelope)
    }

    pub(crate) async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &(dyn Fn() -> ClientResult<Form> + Send + Sync),
    ) -> ClientResult<T> {
        self.send(Method::PATCH, path, &QueryPairs::new(), Payload::Multipart(form))
            .await
            .and_then(decode_envelope)
    }

    /// Sends one request, recovering from a single 401 via token refresh.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryPairs,
        payload: Payload<'_>,
    ) -> ClientResult<Value> {
        let public = is_public_path(path);
        let response = self.dispatch(&method, path, query, &payload, public).await?;

        if response.status() == StatusCode::UNAUTHORIZED && !public {
            self.refresh_session().await?;
            let replay = self.dispatch(&method, path, query, &payload, public).await?;
            return decode_response(replay).await;
        }
        decode_response(response).await
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        query: &QueryPairs,
        payload: &Payload<'_>,
        public: bool,
    ) -> ClientResult<reqwest::Response> {
        // Endpoint paths carry a leading slash, so the base path must not.
        let mut builder = self.http.request(
            method.clone(),
            format!("{}{path}", self.base_url.as_str().trim_end_matches('/')),
        );
        if !query.is_empty() {
            builder = builder.query(query.as_slice());
        }
        if !public
            && let Some(token) = self.session.access_token().await
        {
            builder = builder.bearer_auth(token);
        }
        builder = match payload {
            Payload::None => builder,
            Payload::Json(value) => builder.json(value),
            Payload::Multipart(form) => builder.multipart(form()?),
        };
        builder.send().await.map_err(|err| transport_error(&err))
    }

    async fn refresh_session(&self) -> ClientResult<()> {
        let refresher = HttpRefresher {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
        };
        match self
            .coordinator
            .acquire_or_await_refresh(&self.session, &refresher)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                self.emit(SessionEvent::AuthenticationRequired);
                Err(err)
            }
        }
    }
}

/// Refresher hitting the backend's token refresh endpoint.
struct HttpRefresher {
    http: Client,
    base_url: Url,
}

impl TokenRefresher for HttpRefresher {
    async fn refresh(&self, refresh_token: &str) -> ClientResult<RefreshedTokens> {
        let response = self
            .http
            .post(format!(
                "{}/login/refresh/",
                self.base_url.as_str().trim_end_matches('/')
            ))
            .json(&json!({ "refresh": refresh_token }))
            .send()
            .await
            .map_err(|err| transport_error(&err))?;
        let payload: RefreshPayload = decode_response(response).await.and_then(decode_envelope)?;
        Ok(RefreshedTokens {
            access: payload.access,
            refresh: payload.refresh,
        })
    }
}

/// Login and refresh never carry a bearer token and never trigger
/// refresh recovery; everything else gets the stored token when one is
/// held, password reset included.
fn is_public_path(path: &str) -> bool {
    path.starts_with("/login")
}

/// Reads a response body, normalizing non-2xx statuses into
/// [`ClientError::Api`] with the backend's error message extracted.
async fn decode_response(response: reqwest::Response) -> ClientResult<Value> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|err| transport_error(&err))?;
    let body: Option<Value> = if bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(&bytes).ok()
    };
    if status.is_success() {
        return Ok(body.unwrap_or(Value::Null));
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message: extract_error_message(body.as_ref(), None),
        body,
    })
}

fn decode_envelope<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    Envelope::from_value(value)
        .map(Envelope::into_data)
        .map_err(decode_error)
}

fn decode_error(err: serde_json::Error) -> ClientError {
    ClientError::Api {
        status: 0,
        message: format!("failed to decode response: {err}"),
        body: None,
    }
}

/// Network-level failures have no HTTP status; the original client
/// reported them as status 0.
fn transport_error(err: &reqwest::Error) -> ClientError {
    ClientError::Api {
        status: err.status().map_or(0, |s| s.as_u16()),
        message: extract_error_message(None, Some(&err.to_string())),
        body: None,
    }
}

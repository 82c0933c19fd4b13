//! Authentication context and hooks for the UI.
//!
//! The identity provider's ID token is the only piece of client state that
//! persists across page loads. It lives in `localStorage` and is re-verified
//! against `GET /api/auth/me` every time the app starts; a stale or revoked
//! token is dropped and the user lands back on the login page.

use api::{ApiClient, ClientError, IdentityClient, IdentityToken, RegisterRequest, UserInfo};
use dioxus::prelude::*;

/// `localStorage` key holding the identity provider's ID token.
pub const TOKEN_STORAGE_KEY: &str = "taskdeck-token";

/// Identity provider web API key, baked in at build time.
const AUTH_API_KEY: Option<&str> = option_env!("TASKDECK_AUTH_KEY");

/// The provider client, or an explicit error when the key was never baked
/// in. Login forms show this message as-is, so a misconfigured build fails
/// with something actionable instead of the provider's opaque rejection.
fn identity_client() -> Result<IdentityClient, ClientError> {
    match AUTH_API_KEY {
        Some(key) if !key.is_empty() => Ok(IdentityClient::new(key)),
        _ => Err(ClientError::Config(
            "Identity provider key is not configured; rebuild with TASKDECK_AUTH_KEY set"
                .to_string(),
        )),
    }
}

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    /// Bearer credential presented to the backend on every request.
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl AuthState {
    fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// An [`ApiClient`] carrying the given state's bearer token.
pub fn client(auth: &AuthState) -> ApiClient {
    ApiClient::new(api_base(), auth.token.clone())
}

/// Base URL of the backend. In the browser this is the page's own origin,
/// so the built client works wherever the server happens to be deployed.
pub fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    "http://localhost:8080".to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn load_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_token() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn save_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_token(_token: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the persisted token on mount and re-verify it.
    let _ = use_resource(move || async move {
        let Some(token) = load_token() else {
            auth_state.set(AuthState::signed_out());
            return;
        };
        let api = ApiClient::new(api_base(), Some(token.clone()));
        match api.me().await {
            Ok(user) => auth_state.set(AuthState {
                token: Some(token),
                user: Some(user),
                loading: false,
            }),
            // 404 means the credential is good but no user record exists yet;
            // registering creates it.
            Err(ClientError::Api { status: 404, .. }) => {
                match api.register(&RegisterRequest::default()).await {
                    Ok(response) => auth_state.set(AuthState {
                        token: Some(token),
                        user: Some(response.user),
                        loading: false,
                    }),
                    Err(err) => {
                        tracing::error!("failed to register restored session: {err}");
                        clear_token();
                        auth_state.set(AuthState::signed_out());
                    }
                }
            }
            Err(err) => {
                if err.is_unauthorized() {
                    clear_token();
                } else {
                    tracing::error!("failed to restore session: {err}");
                }
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Sign in against the identity provider, then register the session with the
/// backend. On success the token is persisted and the auth signal updated.
pub async fn sign_in(
    auth: Signal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), ClientError> {
    let token = identity_client()?.sign_in(email, password).await?;
    establish_session(auth, token, None).await
}

/// Create an account with the identity provider, then register it with the
/// backend under the chosen display name.
pub async fn sign_up(
    auth: Signal<AuthState>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ClientError> {
    let token = identity_client()?.sign_up(email, password).await?;
    establish_session(auth, token, Some(name.to_string())).await
}

async fn establish_session(
    mut auth: Signal<AuthState>,
    token: IdentityToken,
    name: Option<String>,
) -> Result<(), ClientError> {
    let api = ApiClient::new(api_base(), Some(token.id_token.clone()));
    let request = RegisterRequest {
        email: Some(token.email.clone()),
        name: name.or_else(|| token.display_name.clone()),
    };
    let response = api.register(&request).await?;
    save_token(&token.id_token);
    auth.set(AuthState {
        token: Some(token.id_token),
        user: Some(response.user),
        loading: false,
    });
    Ok(())
}

/// Drop the persisted token and reset the auth state.
pub fn sign_out(mut auth: Signal<AuthState>) {
    clear_token();
    auth.set(AuthState::signed_out());
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();

    let onclick = move |_| {
        sign_out(auth_state);
        // Redirect to login
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

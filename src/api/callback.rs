use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::{
    config::Config,
    spotify::auth::exchange_code_for_token,
    types::{AuthState, SharedAuthState},
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(config): Extension<Arc<Config>>,
    Extension(shared_state): Extension<SharedAuthState>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        // The provider reports denied or failed authorizations via an
        // `error` parameter instead of a code.
        if let Some(err) = params.get("error") {
            warning!("Authorization was not granted: {}", err);
        }
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    if let AuthState::Authenticated { .. } = *state {
        // The code in this redirect has already been consumed.
        return Html("<h2>Already authenticated.</h2><p>Close browser window.</p>");
    }

    match exchange_code_for_token(&config, code).await {
        Ok(token) => {
            *state = AuthState::Authenticated { token };
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}

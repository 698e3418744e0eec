use crate::{config::Config, error, info, spotify, success};

pub async fn auth(config: &Config, print_url: bool) {
    if print_url {
        match spotify::auth::build_authorization_url(config) {
            Ok(url) => info!("Log in with Spotify: {}", url),
            Err(e) => error!("Cannot build authorization URL: {}", e),
        }
        return;
    }

    match spotify::auth::login(config).await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("Authentication failed: {}", e),
    }
}

use crate::api::{balances::get_balances, chain::get_chain, multicall::multicall};
use crate::app_state::AppState;
use crate::infra::ChainCaller;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// No configured origins means any origin. A `*` in an entry matches any
/// run of characters, e.g. `https://*.vercel.app`.
pub fn origin_allowed(origin: &str, allowed_origins: &[String]) -> bool {
    if allowed_origins.is_empty() {
        return true;
    }

    allowed_origins.iter().any(|allowed| match allowed.split_once('*') {
        Some((prefix, suffix)) => {
            origin.len() >= prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        }
        None => origin == allowed,
    })
}

pub fn create_router<C: ChainCaller + 'static>(
    app_state: Arc<AppState<C>>,
    allowed_origins: Vec<String>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin_allowed(origin.to_str().unwrap_or(""), &allowed_origins)
        }))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chain", get(get_chain::<C>))
        .route("/multicall", post(multicall::<C>))
        .route("/balances/{owner}", get(get_balances::<C>))
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origins(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_allows_any_origin() {
        assert!(origin_allowed("https://anything.example", &[]));
    }

    #[test]
    fn exact_entries_match_exactly() {
        let allowed = origins(&["https://app.example"]);

        assert!(origin_allowed("https://app.example", &allowed));
        assert!(!origin_allowed("https://app.example.evil", &allowed));
    }

    #[test]
    fn wildcard_matches_subdomains() {
        let allowed = origins(&["https://*.vercel.app"]);

        assert!(origin_allowed("https://foo.vercel.app", &allowed));
        assert!(origin_allowed("https://pr-12-foo.vercel.app", &allowed));
        assert!(!origin_allowed("https://foo.vercel.app.evil", &allowed));
        assert!(!origin_allowed("http://foo.vercel.app", &allowed));
    }

    #[test]
    fn wildcard_prefix_and_suffix_do_not_overlap() {
        let allowed = origins(&["https://a*a"]);

        assert!(!origin_allowed("https://a", &allowed));
        assert!(origin_allowed("https://aa", &allowed));
    }
}

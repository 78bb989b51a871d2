//! Shared default header set.
//!
//! # Design
//! One `DefaultHeaders` is created by the composition root and handed to
//! every `ApiClient` that should see the same credentials. Clones share the
//! underlying map. The only writer is `set_auth_token`; every request takes a
//! snapshot when it is built, so a token change never affects a call that
//! has already been constructed.

use std::sync::{Arc, PoisonError, RwLock};

use crate::http::Headers;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// Process-wide baseline headers, seeded with `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct DefaultHeaders {
    inner: Arc<RwLock<Headers>>,
}

impl Default for DefaultHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultHeaders {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(vec![(
                CONTENT_TYPE.to_string(),
                APPLICATION_JSON.to_string(),
            )])),
        }
    }

    /// Add or overwrite the `Authorization` entry with a bearer token.
    /// Last write wins.
    pub fn set_auth_token(&self, token: &str) {
        let mut headers = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        upsert(&mut headers, AUTHORIZATION, &format!("Bearer {token}"));
    }

    /// Copy of the current header set.
    pub fn snapshot(&self) -> Headers {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current snapshot with `overrides` laid over it. Keys match
    /// case-insensitively and the override wins; the shared set is untouched.
    pub fn merged_with(&self, overrides: &[(&str, &str)]) -> Headers {
        let mut headers = self.snapshot();
        for (name, value) in overrides {
            upsert(&mut headers, name, value);
        }
        headers
    }
}

fn upsert(headers: &mut Headers, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
    {
        Some(entry) => entry.1 = value.to_string(),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn seeded_with_json_content_type() {
        let headers = DefaultHeaders::new();
        assert_eq!(headers.snapshot(), vec![pair("Content-Type", "application/json")]);
    }

    #[test]
    fn auth_token_last_write_wins() {
        let headers = DefaultHeaders::new();
        headers.set_auth_token("abc");
        headers.set_auth_token("xyz");
        assert_eq!(
            headers.snapshot(),
            vec![
                pair("Content-Type", "application/json"),
                pair("Authorization", "Bearer xyz"),
            ]
        );
    }

    #[test]
    fn clones_share_state() {
        let headers = DefaultHeaders::new();
        let other = headers.clone();
        other.set_auth_token("shared");
        assert_eq!(
            headers.snapshot().last(),
            Some(&pair("Authorization", "Bearer shared"))
        );
    }

    #[test]
    fn overrides_win_without_mutating_defaults() {
        let headers = DefaultHeaders::new();
        headers.set_auth_token("abc");

        let merged = headers.merged_with(&[("content-type", "text/csv"), ("X-Trace", "1")]);
        assert_eq!(
            merged,
            vec![
                pair("Content-Type", "text/csv"),
                pair("Authorization", "Bearer abc"),
                pair("X-Trace", "1"),
            ]
        );
        assert_eq!(
            headers.snapshot(),
            vec![
                pair("Content-Type", "application/json"),
                pair("Authorization", "Bearer abc"),
            ]
        );
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let headers = DefaultHeaders::new();
        headers.set_auth_token("before");
        let snapshot = headers.snapshot();
        headers.set_auth_token("after");
        assert_eq!(snapshot[1], pair("Authorization", "Bearer before"));
    }
}

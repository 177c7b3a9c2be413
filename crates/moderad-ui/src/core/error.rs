//! Error type surfaced by the REST client.

use thiserror::Error;

/// Failure reported by a backend call, already carrying display text.
///
/// `status` is set for non-success HTTP responses so call sites can specialise
/// the message (e.g. a 404 on the detail endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status when the backend answered with a non-success code.
    pub status: Option<u16>,
    /// Human-readable message shown in alert banners.
    pub message: String,
}

impl ApiError {
    /// Error for a non-success HTTP response.
    #[must_use]
    pub fn http(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("Ошибка загрузки ({status})"),
        }
    }

    /// Error for a transport failure (request never got an HTTP answer).
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Replace the message, keeping the status.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Substitute `fallback` when the carried message is blank.
    #[must_use]
    pub fn or_fallback(self, fallback: &str) -> Self {
        if self.message.trim().is_empty() {
            self.with_message(fallback)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_in_message() {
        let err = ApiError::http(404);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "Ошибка загрузки (404)");
    }

    #[test]
    fn with_message_keeps_status() {
        let err = ApiError::http(404).with_message("Объявление не найдено");
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "Объявление не найдено");
    }

    #[test]
    fn fallback_applies_only_to_blank_messages() {
        let blank = ApiError::transport("  ").or_fallback("Неизвестная ошибка загрузки");
        assert_eq!(blank.to_string(), "Неизвестная ошибка загрузки");
        let kept = ApiError::transport("Сервер недоступен").or_fallback("Неизвестная ошибка");
        assert_eq!(kept.to_string(), "Сервер недоступен");
    }
}

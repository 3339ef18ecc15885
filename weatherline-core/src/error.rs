use thiserror::Error;

/// Failures reported by the services weatherline depends on.
///
/// Transport and decoding problems travel as plain `anyhow` context; these
/// variants carry the reason the remote side gave us.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("weather service error: {reason}")]
    Weather { reason: String },

    #[error("geolocation failed: {reason}")]
    Geolocation { reason: String },
}

impl ServiceError {
    pub fn weather<S: Into<String>>(reason: S) -> Self {
        Self::Weather {
            reason: reason.into(),
        }
    }

    pub fn geolocation<S: Into<String>>(reason: S) -> Self {
        Self::Geolocation {
            reason: reason.into(),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let end = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

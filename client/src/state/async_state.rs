//! Fetch lifecycle state owned by the view that issued the fetch.

#[cfg(test)]
#[path = "async_state_test.rs"]
mod async_state_test;

/// Exactly one phase of a fetch is active at a time.
///
/// Legal transitions: `Idle | Error -> Loading -> Success | Error`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AsyncState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> AsyncState<T> {
    /// Enter `Loading`. Returns `false` (and changes nothing) while a fetch is
    /// already running or after it succeeded.
    pub fn start(&mut self) -> bool {
        match self {
            Self::Idle | Self::Error(_) => {
                *self = Self::Loading;
                true
            }
            Self::Loading | Self::Success(_) => false,
        }
    }

    /// Settle a running fetch. Returns `false` if no fetch was running.
    pub fn settle(&mut self, result: Result<T, String>) -> bool {
        if !matches!(self, Self::Loading) {
            return false;
        }
        *self = match result {
            Ok(data) => Self::Success(data),
            Err(message) => Self::Error(message),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

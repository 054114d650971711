use crate::error::InfoHubError;

/// Where one dashboard module is in its fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

/// Client-side state for one module.
///
/// Every action re-enters `Loading` from whatever state the panel is in. Requests are
/// neither de-duplicated nor cancelled, so when several overlap the last one to
/// `finish` decides what is shown.
#[derive(Debug, Clone)]
pub struct Panel<T> {
    state: ModuleState<T>,
    fallback_error: &'static str,
}

impl<T> Panel<T> {
    pub fn new(fallback_error: &'static str) -> Self {
        Self {
            state: ModuleState::Idle,
            fallback_error,
        }
    }

    pub fn state(&self) -> &ModuleState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ModuleState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ModuleState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ModuleState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin(&mut self) {
        self.state = ModuleState::Loading;
    }

    pub fn finish(&mut self, outcome: Result<T, InfoHubError>) {
        self.state = match outcome {
            Ok(data) => ModuleState::Ready(data),
            Err(err) => ModuleState::Failed(self.message_for(err)),
        };
    }

    /// Fails without a request, for input the client rejects itself.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ModuleState::Failed(message.into());
    }

    fn message_for(&self, err: InfoHubError) -> String {
        match err {
            InfoHubError::Remote {
                message: Some(message),
                ..
            } => message,
            other => {
                tracing::debug!("Showing fallback for {}", other);
                self.fallback_error.to_string()
            }
        }
    }
}

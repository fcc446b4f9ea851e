use std::collections::VecDeque;
use std::sync::Mutex;

use lcommon::BoxFuture;

use crate::{ModelReply, ModelRequest, ProviderError, ProviderId};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

pub trait ModelProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn generate<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelReply, ProviderError>>;
}

/// Deterministic provider for tests and scripted demos. Replies are
/// consumed in order; every received request is recorded for assertions.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn from_texts<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(replies.into_iter().map(|text| Ok(text.into())).collect())
    }

    pub fn recorded_requests(&self) -> Vec<ModelRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn remaining_replies(&self) -> usize {
        self.replies.lock().map(|replies| replies.len()).unwrap_or(0)
    }
}

impl ModelProvider for ScriptedProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Scripted
    }

    fn generate<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelReply, ProviderError>> {
        Box::pin(async move {
            request.validate()?;

            self.requests
                .lock()
                .map_err(|_| ProviderError::other("scripted request log lock poisoned"))?
                .push(request.clone());

            let next = self
                .replies
                .lock()
                .map_err(|_| ProviderError::other("scripted reply queue lock poisoned"))?
                .pop_front();

            match next {
                Some(Ok(text)) => Ok(ModelReply {
                    provider: ProviderId::Scripted,
                    model: request.model,
                    text,
                }),
                Some(Err(error)) => Err(error),
                None => Err(ProviderError::unavailable("scripted replies exhausted")),
            }
        })
    }
}

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use transport::{DispatchError, Method, RequestDescriptor, RequestParams};

use crate::client::Language;
use crate::schema::{
    AnalyzeEntitiesRequest, AnalyzeEntitiesResponse, AnalyzeSentimentRequest,
    AnalyzeSentimentResponse, AnnotateTextRequest, AnnotateTextResponse,
};

/// The `documents` resource. Every method posts the serialized request as
/// the call body; none of them take query or path parameters. The returned
/// future is the in-flight request, so dropping it abandons the call.
pub struct Documents<'a> {
    client: &'a Language,
}

impl<'a> Documents<'a> {
    pub(crate) fn new(client: &'a Language) -> Self {
        Self { client }
    }

    /// Analyzes the sentiment of the provided text.
    pub async fn analyze_sentiment(
        &self,
        request: &AnalyzeSentimentRequest,
    ) -> Result<AnalyzeSentimentResponse, DispatchError> {
        self.call("analyzeSentiment", request).await
    }

    /// Finds named entities in the text, currently proper names, and
    /// returns their types, salience and mentions.
    pub async fn analyze_entities(
        &self,
        request: &AnalyzeEntitiesRequest,
    ) -> Result<AnalyzeEntitiesResponse, DispatchError> {
        self.call("analyzeEntities", request).await
    }

    /// Runs several analyses over the document in a single call, as
    /// selected by the request features. Sentiment, entity and syntax
    /// results come back together in one response.
    pub async fn annotate_text(
        &self,
        request: &AnnotateTextRequest,
    ) -> Result<AnnotateTextResponse, DispatchError> {
        self.call("annotateText", request).await
    }

    fn descriptor<Req: Serialize>(
        &self,
        verb: &str,
        request: &Req,
    ) -> Result<RequestDescriptor, DispatchError> {
        let body = serde_json::to_value(request).map_err(DispatchError::Encode)?;

        Ok(RequestDescriptor {
            method: Method::POST,
            url: format!(
                "{}/v1beta1/documents:{}",
                self.client.config.base_url, verb
            ),
            params: RequestParams::from_body(body),
            required_params: Vec::new(),
            path_params: Vec::new(),
            context: Arc::clone(&self.client.config),
        })
    }

    async fn call<Req, Resp>(&self, verb: &str, request: &Req) -> Result<Resp, DispatchError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let descriptor = self.descriptor(verb, request)?;
        let raw = self.client.dispatcher.dispatch(descriptor).await?;
        serde_json::from_value(raw).map_err(DispatchError::Decode)
    }
}

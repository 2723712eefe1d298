pub mod client;
pub mod documents;
pub mod schema;

pub use client::{DEFAULT_BASE_URL, Language};
pub use documents::Documents;
pub use schema::{
    AnalyzeEntitiesRequest, AnalyzeEntitiesResponse, AnalyzeSentimentRequest,
    AnalyzeSentimentResponse, AnnotateTextRequest, AnnotateTextResponse, DependencyEdge,
    Document, DocumentType, EncodingType, Entity, EntityMention, Features, PartOfSpeech,
    Sentence, Sentiment, TextSpan, Token,
};

pub use transport::{
    ClientConfig, Credentials, Dispatch, DispatchError, HttpDispatcher, Method,
    RequestDescriptor, RequestParams, RetryConfig, Status,
};

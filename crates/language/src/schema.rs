use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Format of the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    TypeUnspecified,
    PlainText,
    Html,
}

/// Text encoding the service should use when computing byte offsets.
/// With `None` the service skips offset calculation and reports -1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncodingType {
    #[default]
    None,
    Utf8,
    Utf16,
    Utf32,
}

/// Input to every analysis method. Text is supplied either inline via
/// `content` or by reference via `gcs_content_uri`, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_content_uri: Option<String>,
    /// ISO or BCP-47 language code. Detected automatically when absent.
    /// The service currently accepts English, Spanish and Japanese text;
    /// sentiment analysis is English only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Document {
    pub fn plain_text(content: &str) -> Self {
        Self::inline(DocumentType::PlainText, content)
    }

    pub fn html(content: &str) -> Self {
        Self::inline(DocumentType::Html, content)
    }

    fn inline(document_type: DocumentType, content: &str) -> Self {
        Self {
            document_type,
            content: Some(content.to_string()),
            gcs_content_uri: None,
            language: None,
        }
    }

    /// Document stored in Google Cloud Storage, e.g. `gs://bucket/object`.
    pub fn from_gcs_uri(document_type: DocumentType, uri: &str) -> Self {
        Self {
            document_type,
            content: None,
            gcs_content_uri: Some(uri.to_string()),
            language: None,
        }
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }
}

/// Selects which analyses `annotate_text` runs in one call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default)]
    pub extract_document_sentiment: bool,
    #[serde(default)]
    pub extract_entities: bool,
    #[serde(default)]
    pub extract_syntax: bool,
}

impl Features {
    pub fn all() -> Self {
        Self {
            extract_document_sentiment: true,
            extract_entities: true,
            extract_syntax: true,
        }
    }
}

/// Slice of the input the annotation applies to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
    #[serde(default)]
    pub content: String,
    /// Byte offset in the requested encoding, -1 when none was requested.
    #[serde(default)]
    pub begin_offset: i32,
}

/// Feeling of the text. `polarity` runs from -1.0 (negative) to 1.0
/// (positive); `magnitude` is the unbounded absolute strength.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    #[serde(default)]
    pub polarity: f32,
    #[serde(default)]
    pub magnitude: f32,
}

/// Phrase in the text that names a known person, place, organization
/// and so on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default)]
    pub name: String,
    /// Server-assigned category such as `PERSON` or `LOCATION`.
    #[serde(rename = "type", default)]
    pub entity_type: String,
    /// Associated facts, e.g. a `wikipedia_url` for well-known entities.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Importance of the entity within the document, 0.0 to 1.0.
    #[serde(default)]
    pub salience: f32,
    #[serde(default)]
    pub mentions: Vec<EntityMention>,
}

/// One occurrence of an entity in the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMention {
    #[serde(default)]
    pub text: TextSpan,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    #[serde(default)]
    pub text: TextSpan,
}

/// Smallest syntactic unit of the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default)]
    pub text: TextSpan,
    #[serde(default)]
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub dependency_edge: DependencyEdge,
    /// Dictionary form of the token, e.g. "run" for "ran".
    #[serde(default)]
    pub lemma: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOfSpeech {
    /// Coarse grammatical category such as `NOUN` or `VERB`.
    #[serde(default)]
    pub tag: String,
}

/// Edge in the dependency parse tree. The head of the root token is
/// the root itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEdge {
    /// Index of this token's head within the response token list.
    #[serde(default)]
    pub head_token_index: i32,
    /// Parse label such as `NSUBJ` or `ROOT`.
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentimentRequest {
    pub document: Document,
}

impl AnalyzeSentimentRequest {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentimentResponse {
    pub document_sentiment: Sentiment,
    /// Language of the text, detected when the request left it unset.
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEntitiesRequest {
    pub document: Document,
    pub encoding_type: EncodingType,
}

impl AnalyzeEntitiesRequest {
    pub fn new(document: Document, encoding_type: EncodingType) -> Self {
        Self {
            document,
            encoding_type,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEntitiesResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateTextRequest {
    pub document: Document,
    pub features: Features,
    pub encoding_type: EncodingType,
}

impl AnnotateTextRequest {
    pub fn new(document: Document, features: Features, encoding_type: EncodingType) -> Self {
        Self {
            document,
            features,
            encoding_type,
        }
    }
}

/// Combined result of every analysis the request's features enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateTextResponse {
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_sentiment: Option<Sentiment>,
    #[serde(default)]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_serializes_with_wire_field_names() {
        let document = Document::plain_text("Hello world").with_language("en");
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "PLAIN_TEXT",
                "content": "Hello world",
                "language": "en"
            })
        );
    }

    #[test]
    fn test_gcs_document_omits_inline_content() {
        let document = Document::from_gcs_uri(DocumentType::Html, "gs://corpus/page.html");
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["type"], "HTML");
        assert_eq!(value["gcsContentUri"], "gs://corpus/page.html");
        assert!(value.get("content").is_none());
        assert!(value.get("language").is_none());
    }

    #[test]
    fn test_annotate_request_uses_camel_case_keys() {
        let request = AnnotateTextRequest::new(
            Document::plain_text("ok"),
            Features::all(),
            EncodingType::Utf8,
        );
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["encodingType"], "UTF8");
        assert_eq!(value["features"]["extractDocumentSentiment"], true);
        assert_eq!(value["features"]["extractEntities"], true);
        assert_eq!(value["features"]["extractSyntax"], true);
    }

    #[test]
    fn test_encoding_and_document_types_use_screaming_snake_case() {
        assert_eq!(serde_json::to_value(EncodingType::None).unwrap(), json!("NONE"));
        assert_eq!(serde_json::to_value(EncodingType::Utf16).unwrap(), json!("UTF16"));
        assert_eq!(
            serde_json::to_value(DocumentType::TypeUnspecified).unwrap(),
            json!("TYPE_UNSPECIFIED")
        );
    }

    #[test]
    fn test_decodes_sentiment_response() {
        let body = json!({
            "documentSentiment": {"polarity": 0.8, "magnitude": 1.9},
            "language": "en"
        });

        let response: AnalyzeSentimentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.document_sentiment.polarity, 0.8);
        assert_eq!(response.document_sentiment.magnitude, 1.9);
        assert_eq!(response.language, "en");
    }

    #[test]
    fn test_decodes_entities_response() {
        let body = json!({
            "entities": [{
                "name": "Ada Lovelace",
                "type": "PERSON",
                "metadata": {"wikipedia_url": "https://en.wikipedia.org/wiki/Ada_Lovelace"},
                "salience": 0.92,
                "mentions": [{"text": {"content": "Ada Lovelace", "beginOffset": 0}}]
            }],
            "language": "en"
        });

        let response: AnalyzeEntitiesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.entities.len(), 1);

        let entity = &response.entities[0];
        assert_eq!(entity.name, "Ada Lovelace");
        assert_eq!(entity.entity_type, "PERSON");
        assert_eq!(
            entity.metadata.get("wikipedia_url").map(String::as_str),
            Some("https://en.wikipedia.org/wiki/Ada_Lovelace")
        );
        assert_eq!(entity.mentions[0].text.content, "Ada Lovelace");
        assert_eq!(entity.mentions[0].text.begin_offset, 0);
    }

    #[test]
    fn test_missing_response_collections_decode_as_empty() {
        let response: AnalyzeEntitiesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.entities.is_empty());
        assert!(response.language.is_empty());
    }

    #[test]
    fn test_decodes_annotate_response_with_syntax() {
        let body = json!({
            "sentences": [{"text": {"content": "Dogs run.", "beginOffset": 0}}],
            "tokens": [
                {
                    "text": {"content": "Dogs", "beginOffset": 0},
                    "partOfSpeech": {"tag": "NOUN"},
                    "dependencyEdge": {"headTokenIndex": 1, "label": "NSUBJ"},
                    "lemma": "dog"
                },
                {
                    "text": {"content": "run", "beginOffset": 5},
                    "partOfSpeech": {"tag": "VERB"},
                    "dependencyEdge": {"headTokenIndex": 1, "label": "ROOT"},
                    "lemma": "run"
                }
            ],
            "language": "en"
        });

        let response: AnnotateTextResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.sentences.len(), 1);
        assert_eq!(response.tokens.len(), 2);
        assert_eq!(response.tokens[0].part_of_speech.tag, "NOUN");
        assert_eq!(response.tokens[0].dependency_edge.label, "NSUBJ");
        assert_eq!(response.tokens[0].lemma, "dog");
        assert_eq!(response.tokens[1].dependency_edge.head_token_index, 1);
        assert!(response.document_sentiment.is_none());
        assert!(response.entities.is_empty());
    }

    #[test]
    fn test_offsets_without_encoding_are_negative_one() {
        let span: TextSpan =
            serde_json::from_value(json!({"content": "hi", "beginOffset": -1})).unwrap();
        assert_eq!(span.begin_offset, -1);
    }
}

use anyhow::{Context, bail};
use language::{
    AnalyzeEntitiesRequest, AnalyzeSentimentRequest, AnnotateTextRequest, Document,
    EncodingType, Features, Language,
};

const USAGE: &str = "usage: analyze <sentiment|entities|annotate> <text>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let command = match args.next() {
        Some(command) => command,
        None => bail!(USAGE),
    };
    let text = args.collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        bail!(USAGE);
    }

    // Credentials and endpoint come from LANGUAGE_API_KEY / LANGUAGE_BASE_URL.
    let client = Language::from_env();
    let document = Document::plain_text(&text);

    let output = match command.as_str() {
        "sentiment" => {
            let request = AnalyzeSentimentRequest::new(document);
            let response = client
                .documents()
                .analyze_sentiment(&request)
                .await
                .context("sentiment analysis failed")?;
            serde_json::to_string_pretty(&response)?
        }
        "entities" => {
            let request = AnalyzeEntitiesRequest::new(document, EncodingType::Utf8);
            let response = client
                .documents()
                .analyze_entities(&request)
                .await
                .context("entity analysis failed")?;
            serde_json::to_string_pretty(&response)?
        }
        "annotate" => {
            let request =
                AnnotateTextRequest::new(document, Features::all(), EncodingType::Utf8);
            let response = client
                .documents()
                .annotate_text(&request)
                .await
                .context("annotation failed")?;
            serde_json::to_string_pretty(&response)?
        }
        other => bail!("unknown command '{other}', expected sentiment, entities or annotate"),
    };

    println!("{output}");
    Ok(())
}

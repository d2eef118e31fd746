//! Repositories exercised directly against the upstream stubs

use crate::e2e::helpers::upstream::{
    Upstream, BLOCKED_MODEL, EMPTY_MODEL, GENERATED_SUMMARY, VALID_API_KEY, VASE_PAGE,
};

use pretty_assertions::assert_eq;
use product_narrator::domain::summary::{ApiKey, Language};
use product_narrator::infrastructure::repositories::{
    GeminiSummaryRepository, GoogleTtsRepository, HttpPageRepository, PageRepository,
    SummaryRepository, TtsRepository,
};

#[tokio::test]
async fn it_should_fetch_page_markup() {
    let upstream = Upstream::start().await;
    let repo = HttpPageRepository::new().unwrap();

    let markup = repo.fetch(&upstream.product_url("vase")).await.unwrap();

    assert_eq!(markup, VASE_PAGE);
}

#[tokio::test]
async fn it_should_fail_on_non_success_status() {
    let upstream = Upstream::start().await;
    let repo = HttpPageRepository::new().unwrap();

    let err = repo
        .fetch(&upstream.product_url("missing"))
        .await
        .unwrap_err();
    assert!(err.contains("404"), "unexpected error: {}", err);

    let err = repo.fetch(&upstream.product_url("broken")).await.unwrap_err();
    assert!(err.contains("500"), "unexpected error: {}", err);
}

#[tokio::test]
async fn it_should_fail_when_host_is_unreachable() {
    let repo = HttpPageRepository::new().unwrap();

    let result = repo.fetch("http://127.0.0.1:1/products/vase").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn it_should_return_generated_text_unmodified() {
    let upstream = Upstream::start().await;
    let repo = GeminiSummaryRepository::new(upstream.gemini_base_url());

    let text = repo
        .summarize("Describe this.", &ApiKey::new(VALID_API_KEY), "gemini-2.5-flash")
        .await
        .unwrap();

    assert_eq!(text, GENERATED_SUMMARY);
    let recorded = upstream.recorded.gemini.lock().clone();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].prompt, "Describe this.");
    assert_eq!(recorded[0].model_action, "gemini-2.5-flash:generateContent");
}

#[tokio::test]
async fn it_should_surface_gemini_error_message() {
    let upstream = Upstream::start().await;
    let repo = GeminiSummaryRepository::new(upstream.gemini_base_url());

    let err = repo
        .summarize("Describe this.", &ApiKey::new("bogus"), "gemini-2.5-pro")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        "Gemini API error 400: API key not valid. Please pass a valid API key. (INVALID_ARGUMENT)"
    );
}

#[tokio::test]
async fn it_should_fail_when_no_candidates_are_returned() {
    let upstream = Upstream::start().await;
    let repo = GeminiSummaryRepository::new(upstream.gemini_base_url());

    let err = repo
        .summarize("Describe this.", &ApiKey::new(VALID_API_KEY), EMPTY_MODEL)
        .await
        .unwrap_err();

    assert_eq!(err, "Gemini returned no candidates");
}

#[tokio::test]
async fn it_should_fail_when_candidate_has_no_text() {
    let upstream = Upstream::start().await;
    let repo = GeminiSummaryRepository::new(upstream.gemini_base_url());

    let err = repo
        .summarize("Describe this.", &ApiKey::new(VALID_API_KEY), BLOCKED_MODEL)
        .await
        .unwrap_err();

    assert!(
        err.contains("empty candidate (finish reason: SAFETY)"),
        "unexpected error: {}",
        err
    );
}

#[tokio::test]
async fn it_should_synthesize_short_text_in_one_request() {
    let upstream = Upstream::start().await;
    let repo = GoogleTtsRepository::new(upstream.base_url.clone());

    let audio = repo.synthesize("Dzień dobry.", Language::Polish).await.unwrap();

    assert_eq!(String::from_utf8(audio).unwrap(), "[pl:Dzień dobry.]");
    assert_eq!(repo.provider(), "google");
}

#[tokio::test]
async fn it_should_split_long_text_and_keep_order() {
    let upstream = Upstream::start().await;
    let repo = GoogleTtsRepository::new(upstream.base_url.clone());

    let sentences: Vec<String> = (1..=4)
        .map(|n| format!("This is sentence number {} of a rather long product description.", n))
        .collect();
    let text = sentences.join(" ");

    let audio = repo.synthesize(&text, Language::English).await.unwrap();

    let recorded = upstream.recorded.tts.lock().clone();
    assert_eq!(recorded.len(), 4);
    for (request, sentence) in recorded.iter().zip(&sentences) {
        assert_eq!(&request.text, sentence);
        assert_eq!(request.language, "en");
        assert!(request.text.chars().count() <= 100);
    }

    let expected: String = sentences.iter().map(|s| format!("[en:{}]", s)).collect();
    assert_eq!(String::from_utf8(audio).unwrap(), expected);
}

#[tokio::test]
async fn it_should_refuse_blank_text_without_calling_service() {
    let upstream = Upstream::start().await;
    let repo = GoogleTtsRepository::new(upstream.base_url.clone());

    let err = repo.synthesize("   ", Language::German).await.unwrap_err();

    assert_eq!(err, "No text to synthesize");
    assert!(upstream.recorded.tts.lock().is_empty());
}

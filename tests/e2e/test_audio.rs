use crate::e2e::helpers;

use helpers::{summary_request, TestContext, AUDIO_FILE_NAME};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use product_narrator::domain::pipeline::AudioResponse;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_narrate_generated_summary(ctx: &mut TestContext) {
    let session_id = ctx.session_with_summary("pl").await;

    let response = ctx
        .client
        .post_empty(&format!("/api/sessions/{}/audio", session_id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let audio: AudioResponse = response.json().unwrap();
    assert_eq!(audio.file_name, AUDIO_FILE_NAME);
    assert_eq!(audio.playback_url, "/api/audio");
    assert_eq!(audio.download_url, "/api/audio/download");

    // The summary is longer than one TTS request allows, so it goes out
    // sentence by sentence and the chunks are joined in order
    let tts = ctx.upstream.recorded.tts.lock().clone();
    let sentences: Vec<&str> = tts.iter().map(|request| request.text.as_str()).collect();
    assert_eq!(
        sentences,
        vec![
            "Elegancki szklany wazon o wysokości dwudziestu centymetrów.",
            "Zapraszamy do zakupów w sklepie helios-szklo.pl.",
        ]
    );
    assert!(tts.iter().all(|request| request.language == "pl"));

    let written = std::fs::read(&ctx.audio_path).unwrap();
    assert_eq!(
        String::from_utf8(written.clone()).unwrap(),
        "[pl:Elegancki szklany wazon o wysokości dwudziestu centymetrów.]\
         [pl:Zapraszamy do zakupów w sklepie helios-szklo.pl.]"
    );
    assert_eq!(audio.size_bytes, written.len() as u64);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_narrate_edited_text_in_summary_language(ctx: &mut TestContext) {
    let session_id = ctx.session_with_summary("de").await;

    let response = ctx
        .client
        .post(
            &format!("/api/sessions/{}/audio", session_id),
            &json!({ "text": "Eine schöne Vase." }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    let tts = ctx.upstream.recorded.tts.lock().clone();
    assert_eq!(tts.len(), 1);
    assert_eq!(tts[0].text, "Eine schöne Vase.");
    assert_eq!(tts[0].language, "de");

    // The narrated text is kept as the session's edit
    let session = ctx
        .client
        .get(&format!("/api/sessions/{}", session_id))
        .await
        .unwrap();
    let body = session.body.as_ref().unwrap();
    assert_eq!(body["summary"]["text"], json!("Eine schöne Vase."));
    assert_eq!(body["summary"]["edited"], json!(true));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_audio_for_playback_and_download(ctx: &mut TestContext) {
    let session_id = ctx.session_with_summary("en").await;
    ctx.client
        .post(
            &format!("/api/sessions/{}/audio", session_id),
            &json!({ "text": "Short text." }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let playback = ctx.client.get("/api/audio").await.unwrap();
    playback
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("content-disposition", "inline");
    assert_eq!(playback.body_bytes, b"[en:Short text.]".to_vec());

    let download = ctx.client.get("/api/audio/download").await.unwrap();
    download
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header(
            "content-disposition",
            "attachment; filename=\"podsumowanie_produktu.mp3\"",
        );
    assert_eq!(download.body_bytes, playback.body_bytes);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_overwrite_previous_audio(ctx: &mut TestContext) {
    let session_id = ctx.session_with_summary("en").await;

    for text in ["First take.", "Second take."] {
        ctx.client
            .post(
                &format!("/api/sessions/{}/audio", session_id),
                &json!({ "text": text }),
            )
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    let playback = ctx.client.get("/api/audio").await.unwrap();
    assert_eq!(playback.body_bytes, b"[en:Second take.]".to_vec());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_text(ctx: &mut TestContext) {
    let session_id = ctx.session_with_summary("pl").await;

    let response = ctx
        .client
        .post(
            &format!("/api/sessions/{}/audio", session_id),
            &json!({ "text": "   \n  " }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("cannot be empty");
    assert!(ctx.upstream.recorded.tts.lock().is_empty());
    assert!(!ctx.audio_path.exists());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_audio_body(ctx: &mut TestContext) {
    let session_id = ctx.session_with_summary("en").await;

    let response = ctx
        .client
        .post(
            &format!("/api/sessions/{}/audio", session_id),
            &json!({ "text": 42 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Invalid audio request body");
    assert!(ctx.upstream.recorded.tts.lock().is_empty());
    assert!(!ctx.audio_path.exists());

    // The stored summary is left as generated
    let session = ctx
        .client
        .get(&format!("/api/sessions/{}", session_id))
        .await
        .unwrap();
    assert_eq!(
        session.body.as_ref().unwrap()["summary"]["edited"],
        json!(false)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_narration_limit(ctx: &mut TestContext) {
    let session_id = ctx.session_with_summary("pl").await;

    let response = ctx
        .client
        .post(
            &format!("/api/sessions/{}/audio", session_id),
            &json!({ "text": "a".repeat(10_001) }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert!(ctx.upstream.recorded.tts.lock().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_audio_without_summary(ctx: &mut TestContext) {
    let session_id = ctx.create_session().await;

    let response = ctx
        .client
        .post_empty(&format!("/api/sessions/{}/audio", session_id))
        .await
        .unwrap();

    response.assert_status(StatusCode::CONFLICT);
    response.assert_error_message("no summary has been generated yet");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_missing_audio_before_first_narration(ctx: &mut TestContext) {
    for path in ["/api/audio", "/api/audio/download"] {
        let response = ctx.client.get(path).await.unwrap();
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_error_message("no audio has been generated yet");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_audio_generation_independent_of_model_tier(ctx: &mut TestContext) {
    let session_id = ctx.create_session().await;
    let mut request = summary_request(&ctx.upstream.product_url("vase"), "en");
    request["model"] = json!("thorough");

    ctx.client
        .post(&format!("/api/sessions/{}/summary", session_id), &request)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    assert_eq!(
        ctx.upstream.recorded.gemini.lock()[0].model_action,
        "gemini-2.5-pro:generateContent"
    );

    ctx.client
        .post_empty(&format!("/api/sessions/{}/audio", session_id))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    assert!(ctx.audio_path.exists());
}

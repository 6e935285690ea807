use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_supported_languages_in_display_order(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["source_language"], json!("en-US"));

    let codes: Vec<&str> = body["languages"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|l| l["code"].as_str())
        .collect();
    assert_eq!(codes, vec!["en-US", "ms-MY", "zh-CN", "zh-TW"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_speech_parameters_per_language(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();
    let body = response.body.as_ref().unwrap();
    let languages = body["languages"].as_array().unwrap();

    let malay = languages
        .iter()
        .find(|l| l["code"] == "ms-MY")
        .expect("Missing ms-MY");
    assert_eq!(
        malay,
        &json!({
            "code": "ms-MY",
            "name": "Malay (Malaysia)",
            "flag": "🇲🇾",
            "rate": 0.8,
            "pitch": 1.2,
            "is_source": false
        })
    );

    let english = languages
        .iter()
        .find(|l| l["code"] == "en-US")
        .expect("Missing en-US");
    assert_eq!(english["is_source"], json!(true));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_offer_sample_announcements(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();
    let body = response.body.as_ref().unwrap();

    let samples = body["sample_announcements"].as_array().unwrap();
    assert_eq!(samples.len(), 4);
    assert_eq!(
        samples[0],
        json!("Attention passengers, Flight MH123 to Kuala Lumpur is now boarding at Gate 5.")
    );
}

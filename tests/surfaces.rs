use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use linggloss::batch::{gloss_lines, parse_record};
use linggloss::server::{FlexcodeValue, GlossRequest, gloss_tokens, router};
use linggloss::settings::Settings;
use linggloss::{CollectingSink, Glosser, PosInfo, resolve_flexcode};

#[test]
fn gloss_request_round() {
    let request: GlossRequest = serde_json::from_str(
        r#"{"tokens": [
            {"flexcode": 70060, "lemma_id": "125581", "pos": {"type": "substantive", "subtype": "substantive_masc"}},
            {"flexcode": "10020", "pos": {"type": "verb"}},
            {"flexcode": "x"},
            {"flexcode": 0, "lemma_id": "10030"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(request.tokens[1].flexcode, FlexcodeValue::Text("10020".into()));

    let response = gloss_tokens(&request);
    assert_eq!(response.status, "ok");
    assert_eq!(response.glosses, vec!["N.m:sg:stc", "V\\tam.act", "(invalid code)", "=1sg"]);
    assert_eq!(response.diagnostics.len(), 1);
    assert_eq!(response.diagnostics[0].token, 2);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["diagnostics"][0]["token"], 2);
    assert_eq!(json["diagnostics"][0]["severity"], "Error");
    assert_eq!(json["diagnostics"][0]["flexcode"], "x");
    assert!(json["elapsed_ms"].is_f64());
}

#[test]
fn diagnostics_are_tagged_per_token() {
    let request: GlossRequest = serde_json::from_str(
        r#"{"tokens": [
            {"flexcode": 10000, "pos": {"type": "verb"}},
            {"flexcode": 10020, "pos": {"type": "verb"}},
            {"flexcode": 10010, "pos": {"type": "particle"}}
        ]}"#,
    )
    .unwrap();
    let response = gloss_tokens(&request);
    let tokens: Vec<usize> = response.diagnostics.iter().map(|d| d.token).collect();
    assert_eq!(tokens, vec![0, 2, 2]);
}

async fn send(trace: bool, request: Request<Body>) -> (StatusCode, String) {
    let response = router(trace).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn flexcode_route_known_code() {
    let (status, body) = send(false, get("/v1/flexcode/96423")).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], "96423");
    assert_eq!(json["label"], resolve_flexcode(96423).unwrap());
}

#[tokio::test]
async fn flexcode_route_unknown_code() {
    let (status, body) = send(false, get("/v1/flexcode/73000")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Unknown flexcode");
}

#[tokio::test]
async fn gloss_route() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/gloss")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"tokens": [{"flexcode": 10020, "pos": {"type": "verb"}}, {"flexcode": "x"}]}"#))
        .unwrap();
    let (status, body) = send(true, request).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["glosses"], serde_json::json!(["V\\tam.act", "(invalid code)"]));
    assert_eq!(json["diagnostics"][0]["token"], 1);
}

#[test]
fn batch_records() {
    let record = parse_record("70060\t125581\tsubstantive\tsubstantive_masc\r\n").unwrap();
    assert_eq!(record.flexcode, "70060");
    assert_eq!(record.lemma_id, "125581");
    assert_eq!(record.pos, PosInfo::with_subtype("substantive", "substantive_masc"));

    let record = parse_record("10020").unwrap();
    assert_eq!(record.lemma_id, "");
    assert_eq!(record.pos, PosInfo::default());

    assert_eq!(parse_record(""), None);
    assert_eq!(parse_record("   "), None);
    assert_eq!(parse_record("# flexcode\tlemma"), None);
}

#[test]
fn batch_glossing() {
    let input = "# flexcode\tlemma\tpos\tsub_pos\n\
                 70060\t125581\tsubstantive\tsubstantive_masc\n\
                 \n\
                 10020\t\tverb\n\
                 abc\tx\n";
    let glosser = Glosser::with_sink(CollectingSink::new());
    let mut output = Vec::new();
    let count = gloss_lines(&glosser, input.as_bytes(), &mut output).unwrap();
    assert_eq!(count, 3);
    assert_eq!(String::from_utf8(output).unwrap(), "N.m:sg:stc\nV\\tam.act\n(invalid code)\n");
    assert_eq!(glosser.sink().len(), 1);
}

#[test]
fn default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.log.filter, "info");
    assert_eq!(settings.server.listen, "127.0.0.1:8080");
    assert_eq!(settings.diagnostics.path, None);
    assert!(!settings.diagnostics.tracing);
}

#[test]
fn settings_from_toml() {
    let settings = Settings::from_toml(
        "[log]\nfilter = \"linggloss=debug\"\n\n[diagnostics]\npath = \"gloss.log\"\ntracing = true\n",
    )
    .unwrap();
    assert_eq!(settings.log.filter, "linggloss=debug");
    assert_eq!(settings.diagnostics.path.as_deref(), Some("gloss.log"));
    assert!(settings.diagnostics.tracing);
    // untouched sections keep their defaults
    assert_eq!(settings.server.listen, "127.0.0.1:8080");
}

#[test]
fn broken_settings_are_config_errors() {
    let err = Settings::from_toml("[log\nfilter = ").unwrap_err();
    assert!(err.to_string().starts_with("Config error: "));
}

use std::sync::Arc;
use std::time::Duration;

use rae_config::ClientConfig;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use super::fake::FakeTransport;
use crate::{CallContext, Client, Dictionary, Operation, RaeError, TransportError};

fn config() -> ClientConfig {
    ClientConfig {
        version: "test".to_string(),
        ..ClientConfig::default()
    }
}

fn client_with(fake: FakeTransport) -> (Client, Arc<FakeTransport>) {
    let fake = Arc::new(fake);
    (Client::with_transport(config(), fake.clone()), fake)
}

fn perro_entry() -> serde_json::Value {
    json!({
        "word": "perro",
        "meanings": [{
            "senses": [{
                "raw": "1. m. Mamífero doméstico.",
                "meaning_number": 1,
                "category": "noun",
                "gender": "masculine",
                "usage": "common",
                "description": "Mamífero doméstico.",
                "synonyms": ["can"],
                "antonyms": []
            }]
        }]
    })
}

#[tokio::test]
async fn lookup_returns_entry() {
    let body = json!({ "ok": true, "data": perro_entry() }).to_string();
    let (client, fake) = client_with(FakeTransport::new().route("/words/perro", 200, body));

    let entry = client.lookup("perro").await.unwrap();
    assert_eq!(entry.word, "perro");
    assert_eq!(entry.meanings.len(), 1);

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, reqwest::Method::GET);
    assert_eq!(
        requests[0].headers,
        vec![("User-Agent", "rae-api/test See https://rae-api.com".to_string())]
    );
}

#[tokio::test]
async fn lookup_not_found_carries_suggestions() {
    let body = json!({
        "ok": false,
        "data": null,
        "error": "NOT_FOUND",
        "suggestions": ["perros", "perra"]
    })
    .to_string();
    let (client, _) = client_with(FakeTransport::new().route("/words/perrx", 404, body));

    let err = client.lookup("perrx").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.suggestions(), ["perros".to_string(), "perra".to_string()]);

    match err {
        RaeError::NotFound { op, arg, message, .. } => {
            assert_eq!(op, Operation::Lookup);
            assert_eq!(arg, "perrx");
            assert_eq!(message, "NOT_FOUND");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_404_is_transport_failure_when_not_accepted() {
    let body = json!({ "ok": false, "suggestions": ["perros"] }).to_string();
    let fake = Arc::new(FakeTransport::new().route("/words/perrx", 404, body));
    let config = ClientConfig {
        lookup_accepts_not_found: false,
        ..config()
    };
    let client = Client::with_transport(config, fake);

    let err = client.lookup("perrx").await.unwrap_err();
    assert!(matches!(
        err,
        RaeError::Transport {
            source: TransportError::UnexpectedStatus { status: 404 },
            ..
        }
    ));
}

#[tokio::test]
async fn lookup_normalizes_headword() {
    let body = json!({ "ok": true, "data": { "word": "efímero", "meanings": [] } }).to_string();
    let (client, fake) = client_with(FakeTransport::new().route("/words/efímero", 200, body));

    let entry = client.lookup("  efi\u{0301}mero ").await.unwrap();
    assert_eq!(entry.word, "efímero");
    assert_eq!(fake.requests()[0].segments, vec!["words", "efímero"]);
}

#[tokio::test]
async fn lookup_rejects_blank_word_without_a_request() {
    let (client, fake) = client_with(FakeTransport::new());

    let err = client.lookup("   ").await.unwrap_err();
    match err {
        RaeError::EmptyWord { arg } => assert_eq!(arg, "   "),
        other => panic!("expected EmptyWord, got {other:?}"),
    }
    assert_eq!(RaeError::EmptyWord { arg: String::new() }.operation(), Operation::Lookup);
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn lookup_decode_failure_is_not_not_found() {
    let body = json!({ "ok": true, "data": { "word": "perro", "meanings": [{
        "senses": [{ "category": "gerund", "usage": "common" }]
    }] } })
    .to_string();
    let (client, _) = client_with(FakeTransport::new().route("/words/perro", 200, body));

    let err = client.lookup("perro").await.unwrap_err();
    assert!(!err.is_not_found());
    match err {
        RaeError::Decode { op, arg, .. } => {
            assert_eq!(op, Operation::Lookup);
            assert_eq!(arg, "perro");
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_transport_failure_keeps_word() {
    let (client, _) = client_with(FakeTransport::new().route("/words/perro", 500, "oops"));

    let err = client.lookup("perro").await.unwrap_err();
    match err {
        RaeError::Transport { op, arg, source } => {
            assert_eq!(op, Operation::Lookup);
            assert_eq!(arg, "perro");
            assert!(matches!(source, TransportError::UnexpectedStatus { status: 500 }));
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_errors_keep_the_word_as_given() {
    let (client, fake) = client_with(FakeTransport::new().route("/words/perro", 503, "busy"));

    let err = client.lookup(" perro\n").await.unwrap_err();
    match err {
        RaeError::Transport { arg, .. } => assert_eq!(arg, " perro\n"),
        other => panic!("expected Transport, got {other:?}"),
    }
    assert_eq!(fake.requests()[0].segments, vec!["words", "perro"]);
}

#[tokio::test]
async fn unwrapped_entry_is_a_decode_failure() {
    let body = json!({ "word": "perro", "meanings": [] }).to_string();
    let (client, _) = client_with(FakeTransport::new().route("/words/perro", 200, body));

    let err = client.lookup("perro").await.unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, RaeError::Decode { op: Operation::Lookup, .. }));
}

#[tokio::test]
async fn empty_object_is_a_decode_failure() {
    let (client, _) = client_with(
        FakeTransport::new()
            .route("/random", 200, "{}")
            .route("/daily", 200, "{}"),
    );

    let err = client.random().await.unwrap_err();
    assert!(matches!(err, RaeError::Decode { op: Operation::Random, .. }));

    let err = client.daily().await.unwrap_err();
    assert!(matches!(err, RaeError::Decode { op: Operation::Daily, .. }));
}

#[tokio::test]
async fn random_and_daily_return_the_word() {
    let body = json!({ "ok": true, "data": { "word": "efímero" } }).to_string();
    let (client, _) = client_with(
        FakeTransport::new()
            .route("/random", 200, body.clone())
            .route("/daily", 200, body),
    );

    assert_eq!(client.random().await.unwrap(), "efímero");
    assert_eq!(client.daily().await.unwrap(), "efímero");
}

#[tokio::test]
async fn daily_miss_is_not_found_without_suggestions() {
    let body = json!({ "ok": false, "error": "unavailable" }).to_string();
    let (client, _) = client_with(FakeTransport::new().route("/daily", 200, body));

    let err = client.daily().await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.suggestions().is_empty());
    assert_eq!(err.operation(), Operation::Daily);
}

#[tokio::test]
async fn search_maps_hits_in_order() {
    let hits = json!({
        "ok": true,
        "data": [
            { "doc": { "id": "perro", "raw": json!({ "word": "stale", "meanings": [] }).to_string() }, "hits": 1 },
            { "doc": { "id": "perra", "raw": json!({ "meanings": [] }).to_string() }, "hits": 7 }
        ]
    })
    .to_string();
    let (client, fake) = client_with(FakeTransport::new().route("/search", 200, hits));

    let entries = client.search("perro grande").await.unwrap();
    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["perro", "perra"]);

    let request = &fake.requests()[0];
    assert_eq!(request.query_string().as_deref(), Some("q=perro+grande"));
}

#[tokio::test]
async fn search_sends_engine_when_configured() {
    let fake = Arc::new(FakeTransport::new().route("/search", 200, "[]"));
    let config = ClientConfig {
        search_engine: Some("fuzzy".to_string()),
        ..config()
    };
    let client = Client::with_transport(config, fake.clone());

    assert!(client.search("").await.unwrap().is_empty());
    assert_eq!(
        fake.requests()[0].query_string().as_deref(),
        Some("q=&eng=fuzzy")
    );
}

#[tokio::test]
async fn search_failure_reported_by_service_is_surfaced() {
    let body = json!({ "ok": false, "error": "boom" }).to_string();
    let (client, _) = client_with(FakeTransport::new().route("/search", 200, body));

    let err = client.search("perro").await.unwrap_err();
    match err {
        RaeError::Service { op, arg, message } => {
            assert_eq!(op, Operation::Search);
            assert_eq!(arg, "perro");
            assert_eq!(message, "boom");
        }
        other => panic!("expected Service, got {other:?}"),
    }
}

#[tokio::test]
async fn search_body_without_ok_is_a_decode_failure() {
    let body = json!({ "error": "boom" }).to_string();
    let (client, _) = client_with(FakeTransport::new().route("/search", 200, body));

    let err = client.search("perro").await.unwrap_err();
    assert!(matches!(err, RaeError::Decode { op: Operation::Search, .. }));
}

#[tokio::test]
async fn search_with_one_bad_hit_fails() {
    let hits = json!([
        { "doc": { "id": "perro", "raw": json!({ "word": "perro" }).to_string() }, "hits": 1 },
        { "doc": { "id": "perra", "raw": "{broken" }, "hits": 1 }
    ])
    .to_string();
    let (client, _) = client_with(FakeTransport::new().route("/search", 200, hits));

    let err = client.search("perr").await.unwrap_err();
    match err {
        RaeError::SearchHit { terms, index, id, .. } => {
            assert_eq!(terms, "perr");
            assert_eq!(index, 1);
            assert_eq!(id, "perra");
        }
        other => panic!("expected SearchHit, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_transport_times_out() {
    let (client, _) = client_with(
        FakeTransport::new()
            .route("/random", 200, json!({ "ok": true, "data": { "word": "x" } }).to_string())
            .delayed(Duration::from_secs(5)),
    );

    let ctx = CallContext::new().with_timeout(Duration::from_millis(20));
    let err = client.random_with(&ctx).await.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(err.operation(), Operation::Random);
}

#[tokio::test]
async fn cancelled_call_returns_promptly() {
    let (client, _) = client_with(
        FakeTransport::new()
            .route("/words/perro", 200, "{}")
            .delayed(Duration::from_secs(5)),
    );

    let token = CancellationToken::new();
    let ctx = CallContext::new().with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(2), client.lookup_with(&ctx, "perro")).await;
    canceller.await.unwrap();

    match result {
        Ok(Err(RaeError::Cancelled { op, arg })) => {
            assert_eq!(op, Operation::Lookup);
            assert_eq!(arg, "perro");
        }
        Ok(other) => panic!("expected Cancelled, got {other:?}"),
        Err(_) => panic!("Timeout - cancellation was not observed"),
    }
}

#[tokio::test]
async fn usable_through_the_trait() {
    let body = json!({ "ok": true, "data": { "word": "alba" } }).to_string();
    let (client, _) = client_with(FakeTransport::new().route("/random", 200, body));

    let dictionary: Box<dyn Dictionary> = Box::new(client);
    assert_eq!(dictionary.random().await.unwrap(), "alba");
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let body = json!({ "ok": true, "data": { "word": "alba" } }).to_string();
    let (client, fake) = client_with(FakeTransport::new().route("/daily", 200, body));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.daily().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "alba");
    }
    assert_eq!(fake.requests().len(), 8);
}

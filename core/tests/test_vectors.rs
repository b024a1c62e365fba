//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or errors. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use adoteai_core::{AdoteClient, Animal, ApiError, HttpMethod, HttpRequest, HttpResponse, LoginRequest, LoginResponse, MatchRequest};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> AdoteClient {
    AdoteClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("headers") {
        Some(headers) => {
            let expected_headers: Vec<(String, String)> = headers
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }
        None => assert!(req.headers.is_empty(), "{name}: headers should be empty"),
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn check_error(name: &str, err: &ApiError, case: &serde_json::Value) {
    match case["expected_error"].as_str().unwrap() {
        "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
        "NoMatch" => assert!(matches!(err, ApiError::NoMatch), "{name}: expected NoMatch"),
        "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http"),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
    if let Some(message) = case.get("expected_message") {
        assert_eq!(err.user_message(), message.as_str().unwrap(), "{name}: user message");
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[test]
fn login_test_vectors() {
    let raw = include_str!("../../test-vectors/login.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: LoginRequest = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_login(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_login(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, &result.unwrap_err(), case);
        } else {
            let expected: LoginResponse = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

#[test]
fn match_test_vectors() {
    let raw = include_str!("../../test-vectors/match.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: MatchRequest = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_find_match(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_find_match(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, &result.unwrap_err(), case);
        } else {
            let result = result.unwrap();
            let expected = &case["expected_result"];
            assert_eq!(result.animal.id, expected["animal_id"].as_i64().unwrap(), "{name}: animal");
            assert_eq!(u64::from(result.match_score), expected["matchScore"].as_u64().unwrap(), "{name}: score");
            assert_eq!(result.ia_reasoning, expected["iaReasoning"].as_str().unwrap(), "{name}: reasoning");
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_animals();
        check_request(name, &req, &case["expected_request"]);

        let animals = c.parse_list_animals(simulated_response(case)).unwrap();
        let expected: Vec<Animal> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(animals, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_get_animal(id);
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_animal(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, &result.unwrap_err(), case);
        } else {
            let expected: Animal = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

mod common;
mod support;

use actix_web::test;
use backend::state::app_state::AppState;
use common::assert_problem_details_structure;
use serde_json::json;
use support::app_builder::create_test_app;
use support::games::{create_game, create_game_id, get_game};

#[actix_web::test]
async fn create_returns_a_fresh_unstarted_session() {
    let app = create_test_app(AppState::with_canned_words()).await;

    let session = create_game(&app, "user").await;

    let game_id = session["gameId"].as_str().expect("gameId string");
    assert_eq!(game_id.len(), 15);
    assert_eq!(&game_id[8..9], "-");
    assert_eq!(session["firstActor"], "user");
    assert_eq!(session["turn"], 0);
    assert_eq!(session["status"], "created");
    assert_eq!(session["result"], serde_json::Value::Null);
    assert_eq!(session["history"].as_array().expect("history array").len(), 0);
}

#[actix_web::test]
async fn list_shows_id_and_result_pairs() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "ai").await;

    let req = test::TestRequest::get().uri("/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    let list: serde_json::Value = serde_json::from_slice(&body).expect("valid JSON");
    let items = list.as_array().expect("list array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["gameId"], game_id.as_str());
    assert_eq!(items[0]["result"], serde_json::Value::Null);
    // overview items carry no history
    assert!(items[0].get("history").is_none());
}

#[actix_web::test]
async fn get_unknown_game_is_a_problem_404() {
    let app = create_test_app(AppState::with_canned_words()).await;

    let req = test::TestRequest::get()
        .uri("/games/20991231-000000")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 404, "GAME_NOT_FOUND", Some("20991231-000000")).await;
}

#[actix_web::test]
async fn patch_merges_only_the_documented_fields() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    // abort via patch: the only path to the aborted terminal state
    let req = test::TestRequest::patch()
        .uri(&format!("/games/{game_id}"))
        .set_json(json!({ "status": "aborted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let session = get_game(&app, &game_id).await;
    assert_eq!(session["status"], "aborted");
    assert_eq!(session["result"], serde_json::Value::Null);

    // a result-only patch leaves status untouched
    let req = test::TestRequest::patch()
        .uri(&format!("/games/{game_id}"))
        .set_json(json!({ "result": "draw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let session = get_game(&app, &game_id).await;
    assert_eq!(session["status"], "aborted");
    assert_eq!(session["result"], "draw");
}

#[actix_web::test]
async fn patch_rejects_undocumented_fields() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    // turn is engine-owned; writing it out of band must fail
    let req = test::TestRequest::patch()
        .uri(&format!("/games/{game_id}"))
        .set_json(json!({ "turn": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "BAD_REQUEST", None).await;

    let session = get_game(&app, &game_id).await;
    assert_eq!(session["turn"], 0);
}

#[actix_web::test]
async fn patch_unknown_game_is_a_problem_404() {
    let app = create_test_app(AppState::with_canned_words()).await;

    let req = test::TestRequest::patch()
        .uri("/games/20991231-000000")
        .set_json(json!({ "status": "aborted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 404, "GAME_NOT_FOUND", None).await;
}

#[actix_web::test]
async fn create_rejects_an_unknown_actor() {
    let app = create_test_app(AppState::with_canned_words()).await;

    let req = test::TestRequest::post()
        .uri("/games")
        .set_json(json!({ "firstActor": "referee" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "BAD_REQUEST", None).await;
}

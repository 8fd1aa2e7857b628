mod common;
mod support;

use std::sync::Arc;

use actix_web::test;
use backend::ai::ScriptedWords;
use backend::state::app_state::AppState;
use common::{assert_problem_details_structure, read_json};
use serde_json::json;
use support::app_builder::create_test_app;
use support::games::{create_game_id, get_game, post_game};

fn scripted_state<const N: usize>(words: [&str; N]) -> AppState {
    AppState::new(Arc::new(ScriptedWords::new(words)))
}

#[actix_web::test]
async fn turns_alternate_starting_with_the_first_actor() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    let resp = post_game(&app, &game_id, "turn/advance").await;
    let session = read_json(resp).await;
    assert_eq!(session["turn"], 1);
    assert_eq!(session["status"], "playing");
    assert_eq!(
        session["history"],
        json!([{ "actor": "user", "word": null, "image": null }])
    );

    let resp = post_game(&app, &game_id, "turn/advance").await;
    let session = read_json(resp).await;
    assert_eq!(session["turn"], 2);
    assert_eq!(session["history"].as_array().expect("history").len(), 2);
    assert_eq!(session["history"][1]["actor"], "ai");
}

#[actix_web::test]
async fn capture_tags_the_current_turn_and_overwrites_on_repeat() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    post_game(&app, &game_id, "turn/advance").await;
    post_game(&app, &game_id, "turn/advance").await;

    let resp = post_game(&app, &game_id, "capture").await;
    assert_eq!(resp.status().as_u16(), 201);
    let session = read_json(resp).await;
    assert_eq!(session["history"][1]["image"], "turn-2.png");
    assert_eq!(session["history"][0]["image"], serde_json::Value::Null);

    let resp = post_game(&app, &game_id, "capture").await;
    let session = read_json(resp).await;
    assert_eq!(session["history"][1]["image"], "turn-2.png");
    assert_eq!(session["history"].as_array().expect("history").len(), 2);
}

#[actix_web::test]
async fn capture_before_any_turn_is_rejected() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    let resp = post_game(&app, &game_id, "capture").await;
    assert_problem_details_structure(resp, 400, "NO_ACTIVE_TURN", None).await;
}

#[actix_web::test]
async fn analyze_fills_the_word_and_keeps_playing() {
    let app = create_test_app(scripted_state(["りんご"])).await;
    let game_id = create_game_id(&app, "user").await;

    post_game(&app, &game_id, "turn/advance").await;
    let resp = post_game(&app, &game_id, "ai/analyze").await;
    assert_eq!(resp.status().as_u16(), 200);
    let session = read_json(resp).await;

    assert_eq!(session["history"][0]["word"], "りんご");
    assert_eq!(session["status"], "playing");
    assert_eq!(session["result"], serde_json::Value::Null);
}

#[actix_web::test]
async fn terminal_user_word_hands_the_win_to_the_ai() {
    let app = create_test_app(scripted_state(["みかん"])).await;
    let game_id = create_game_id(&app, "user").await;

    post_game(&app, &game_id, "turn/advance").await;
    let resp = post_game(&app, &game_id, "ai/analyze").await;
    let session = read_json(resp).await;

    assert_eq!(session["result"], "ai-win");
    assert_eq!(session["status"], "finished");
}

#[actix_web::test]
async fn terminal_ai_word_hands_the_win_to_the_user() {
    let app = create_test_app(scripted_state(["ぱん"])).await;
    let game_id = create_game_id(&app, "ai").await;

    post_game(&app, &game_id, "turn/advance").await;
    let resp = post_game(&app, &game_id, "ai/next").await;
    assert_eq!(resp.status().as_u16(), 201);
    let session = read_json(resp).await;

    assert_eq!(session["result"], "user-win");
    assert_eq!(session["status"], "finished");
}

#[actix_web::test]
async fn analyze_before_any_turn_is_rejected() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    let resp = post_game(&app, &game_id, "ai/analyze").await;
    assert_problem_details_structure(resp, 400, "NO_ACTIVE_TURN", None).await;
}

#[actix_web::test]
async fn hint_answers_without_touching_the_session() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    let req = test::TestRequest::post()
        .uri(&format!("/games/{game_id}/ai/hint"))
        .set_json(json!({ "word": "りんご" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = read_json(resp).await;
    assert!(body["hint"]
        .as_str()
        .expect("hint string")
        .contains("りんご"));

    let session = get_game(&app, &game_id).await;
    assert_eq!(session["turn"], 0);
    assert_eq!(session["history"].as_array().expect("history").len(), 0);
}

#[actix_web::test]
async fn hint_rejects_an_empty_word() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    let req = test::TestRequest::post()
        .uri(&format!("/games/{game_id}/ai/hint"))
        .set_json(json!({ "word": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "EMPTY_WORD", None).await;
}

#[actix_web::test]
async fn end_forces_a_draw_and_is_idempotent() {
    let app = create_test_app(AppState::with_canned_words()).await;
    let game_id = create_game_id(&app, "user").await;

    post_game(&app, &game_id, "turn/advance").await;

    let resp = post_game(&app, &game_id, "end").await;
    let session = read_json(resp).await;
    assert_eq!(session["result"], "draw");
    assert_eq!(session["status"], "finished");

    let resp = post_game(&app, &game_id, "end").await;
    let session = read_json(resp).await;
    assert_eq!(session["result"], "draw");
    assert_eq!(session["status"], "finished");
}

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::{json, Value};

/// Create a game over HTTP and return its body as JSON.
pub async fn create_game<S>(app: &S, first_actor: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/games")
        .set_json(json!({ "firstActor": first_actor }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "game creation should succeed");
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("game body should be valid JSON")
}

/// Create a game and return just its id.
pub async fn create_game_id<S>(app: &S, first_actor: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    create_game(app, first_actor).await["gameId"]
        .as_str()
        .expect("gameId should be a string")
        .to_string()
}

/// POST to a game sub-path (e.g. `turn/advance`, `end`) and return the
/// response.
pub async fn post_game<S>(app: &S, game_id: &str, tail: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/games/{game_id}/{tail}"))
        .to_request();
    test::call_service(app, req).await
}

/// GET a game snapshot as JSON.
pub async fn get_game<S>(app: &S, game_id: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get()
        .uri(&format!("/games/{game_id}"))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "get_game should succeed");
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("game body should be valid JSON")
}

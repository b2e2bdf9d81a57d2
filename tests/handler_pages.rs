mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::FakeSiteApi;
use kittyk::domain::entities::Site;

fn make_server() -> axum_test::TestServer {
    common::make_server(Arc::new(FakeSiteApi::new(common::owner_site())))
}

#[tokio::test]
async fn test_landing_page_links_to_login() {
    let server = make_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Your kinky link in bio."));
    assert!(html.contains("Continue with Discord"));
    assert!(html.contains(common::LOGIN_URL));
}

#[tokio::test]
async fn test_public_site_renders_profile() {
    let server = make_server();

    let response = server.get("/kitty").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Kitty"));
    assert!(html.contains("Purring professionally"));
    assert!(html.contains("Wax"));
    assert!(html.contains("@kitty"));
    assert!(html.contains("link-icon--discord"));
    assert!(html.contains("Made with KittyKinks"));
    // Rating 7: three full stars and a half.
    assert_eq!(html.matches("star--half").count(), 1);
}

#[tokio::test]
async fn test_public_site_not_found() {
    let server = make_server();

    let response = server.get("/nobody").await;

    response.assert_status_not_found();
    let html = response.text();
    assert!(html.contains("An Error Occurred!"));
    assert!(html.contains("What about making this your own?"));
}

#[tokio::test]
async fn test_public_site_empty_sections() {
    let server = common::make_server(Arc::new(FakeSiteApi::new(Site::new("s2", "shy"))));

    let response = server.get("/shy").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("So boring."));
    assert!(html.contains("No sex for now."));
}

#[tokio::test]
async fn test_nested_path_not_found() {
    let server = make_server();

    let response = server.get("/kitty/extra").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_own_site_alias_is_not_a_public_page() {
    let server = make_server();

    let response = server
        .get("/me")
        .add_header("Cookie", common::AUTH_COOKIE)
        .await;

    response.assert_status_not_found();
    assert!(!response.text().contains("Purring professionally"));
}

//! HTTP-level tests for the recipes side, including page fetching.
//!
//! Recipe URLs point at a fixture server on an ephemeral local port, so
//! the extractor runs for real without touching the network.

mod common;

use axum::http::StatusCode;
use common::{
    body_string, build_test_app, form_value, get, post_empty, post_form, redirect_location,
    spawn_page_server, test_state,
};
use recipe_notes::{service, CategoryKind, UNTITLED_RECIPE};

#[tokio::test]
async fn test_recipes_page_renders() {
    let app = build_test_app(test_state().await);
    let response = get(&app, "/recipes").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("No recipes yet."));
}

#[tokio::test]
async fn test_add_recipe_extracts_title_and_image() {
    let addr = spawn_page_server().await;
    let state = test_state().await;
    let app = build_test_app(state.clone());

    let url = format!("http://{addr}/pancakes");
    let response = post_form(&app, "/add_recipe", &format!("url={}", form_value(&url))).await;
    assert_eq!(redirect_location(&response), "/recipes");

    let recipes = service::list_recipes(&state.pool, None).await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Grandma's Pancakes");
    assert_eq!(recipes[0].image_url, "https://img.example.com/pancakes.jpg");
    assert_eq!(recipes[0].url, url);
    assert_eq!(recipes[0].category_id, None);

    let html = body_string(get(&app, "/recipes").await).await;
    assert!(html.contains("Grandma&#39;s Pancakes"));
    assert!(html.contains(r#"<img src="https://img.example.com/pancakes.jpg""#));
}

#[tokio::test]
async fn test_add_recipe_without_title_uses_placeholder() {
    let addr = spawn_page_server().await;
    let state = test_state().await;
    let app = build_test_app(state.clone());

    let url = format!("http://{addr}/untitled");
    post_form(&app, "/add_recipe", &format!("url={}", form_value(&url))).await;

    let recipes = service::list_recipes(&state.pool, None).await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, UNTITLED_RECIPE);
    assert_eq!(recipes[0].image_url, "https://img.example.com/mystery.jpg");
}

#[tokio::test]
async fn test_add_recipe_without_image_stores_empty_string() {
    let addr = spawn_page_server().await;
    let state = test_state().await;
    let app = build_test_app(state.clone());

    let url = format!("http://{addr}/plain");
    post_form(&app, "/add_recipe", &format!("url={}", form_value(&url))).await;

    let recipes = service::list_recipes(&state.pool, None).await.unwrap();
    assert_eq!(recipes[0].title, "Plain Soup");
    assert_eq!(recipes[0].image_url, "");
}

#[tokio::test]
async fn test_add_recipe_timeout_is_silent_noop() {
    let addr = spawn_page_server().await;
    let state = test_state().await;
    let app = build_test_app(state.clone());

    let url = format!("http://{addr}/slow");
    let response = post_form(&app, "/add_recipe", &format!("url={}", form_value(&url))).await;
    assert_eq!(redirect_location(&response), "/recipes");
    assert!(service::list_recipes(&state.pool, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_recipe_unreachable_or_invalid_url_is_noop() {
    let state = test_state().await;
    let app = build_test_app(state.clone());

    // Nothing listens on port 9 locally
    let response = post_form(&app, "/add_recipe", "url=http%3A%2F%2F127.0.0.1%3A9%2Fx").await;
    assert_eq!(redirect_location(&response), "/recipes");

    let response = post_form(&app, "/add_recipe", "url=definitely+not+a+url").await;
    assert_eq!(redirect_location(&response), "/recipes");

    let response = post_form(&app, "/add_recipe", "").await;
    assert_eq!(redirect_location(&response), "/recipes");

    assert!(service::list_recipes(&state.pool, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_recipe_category_round_trip() {
    let addr = spawn_page_server().await;
    let state = test_state().await;
    let app = build_test_app(state.clone());

    let response = post_form(&app, "/add_category_recipe", "name=Breakfast").await;
    assert_eq!(redirect_location(&response), "/recipes");
    post_form(&app, "/add_category_recipe", "name=Dinner").await;
    let categories = service::list_categories(&state.pool, CategoryKind::Recipe).await.unwrap();
    let (breakfast, dinner) = (categories[0].id, categories[1].id);

    let pancakes = form_value(&format!("http://{addr}/pancakes"));
    let soup = form_value(&format!("http://{addr}/plain"));
    post_form(&app, "/add_recipe", &format!("url={pancakes}&category_id={breakfast}")).await;
    post_form(&app, "/add_recipe", &format!("url={soup}&category_id={dinner}")).await;

    let html = body_string(get(&app, &format!("/recipes?category={breakfast}")).await).await;
    assert!(html.contains("Pancakes"));
    assert!(!html.contains("Plain Soup"));

    let filtered = service::list_recipes(&state.pool, Some(breakfast)).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].category_id, Some(breakfast));

    let response = post_form(
        &app,
        &format!("/delete_category_recipe/{breakfast}"),
        "next=%2Frecipes%3Fcategory%3D2",
    )
    .await;
    assert_eq!(redirect_location(&response), "/recipes?category=2");

    assert!(service::list_recipes(&state.pool, Some(breakfast)).await.unwrap().is_empty());
    assert_eq!(service::list_recipes(&state.pool, None).await.unwrap().len(), 1);

    let response = get(&app, &format!("/recipes?category={breakfast}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("No recipes yet."));
}

#[tokio::test]
async fn test_add_recipe_with_missing_category_is_dropped() {
    let addr = spawn_page_server().await;
    let state = test_state().await;
    let app = build_test_app(state.clone());

    let url = form_value(&format!("http://{addr}/pancakes"));
    let response = post_form(&app, "/add_recipe", &format!("url={url}&category_id=31337")).await;
    assert_eq!(redirect_location(&response), "/recipes");
    assert!(service::list_recipes(&state.pool, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_recipe() {
    let addr = spawn_page_server().await;
    let state = test_state().await;
    let app = build_test_app(state.clone());

    let url = form_value(&format!("http://{addr}/plain"));
    post_form(&app, "/add_recipe", &format!("url={url}")).await;
    let id = service::list_recipes(&state.pool, None).await.unwrap()[0].id;

    let response = post_empty(&app, &format!("/delete_recipe/{id}")).await;
    assert_eq!(redirect_location(&response), "/recipes");
    assert!(service::list_recipes(&state.pool, None).await.unwrap().is_empty());

    let response = post_empty(&app, &format!("/delete_recipe/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_recipe_category_is_404() {
    let app = build_test_app(test_state().await);
    let response = post_empty(&app, "/delete_category_recipe/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recipe_deletes_with_non_numeric_id_are_404() {
    let app = build_test_app(test_state().await);

    let response = post_empty(&app, "/delete_recipe/soup").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Recipe not found"));

    let response = post_form(&app, "/delete_category_recipe/x", "next=%2Frecipes").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

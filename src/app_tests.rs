#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

#[path = "../tests/common/mod.rs"]
mod common;

use super::*;
use common::{faq, order, product, Harness};
use flora_admin::session::Session;
use http::Method;
use serde_json::json;

fn app(harness: &Harness) -> App {
    App::new(harness.client.clone(), ReorderConfig::default())
}

fn update(entity: EntityKind, id: &str, json: &str) -> Command {
    Command::Update {
        entity,
        id: id.to_string(),
        json: json.to_string(),
    }
}

#[tokio::test]
async fn test_partial_update_keeps_untouched_fields() {
    let harness = Harness::new();
    let mut rose = product(1, "Bouquet de roses");
    rose["description"] = json!("Douze roses rouges");
    harness.backend.seed("products", vec![rose]).await;

    app(&harness)
        .run(update(EntityKind::Products, "1", r#"{"price": 32.0}"#))
        .await
        .unwrap();

    let row = &harness.backend.rows("products").await[0];
    assert_eq!(row["price"], json!(32.0));
    assert_eq!(row["name"], json!("Bouquet de roses"));
    assert_eq!(row["description"], json!("Douze roses rouges"));
    assert_eq!(row["stock"], json!(3));
}

#[tokio::test]
async fn test_update_rejects_non_object_json() {
    let harness = Harness::new();
    harness.backend.seed("products", vec![product(1, "Pivoines")]).await;

    let err = app(&harness)
        .run(update(EntityKind::Products, "1", "[1, 2]"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "--json must be an object of fields");
    assert!(harness.backend.calls().await.is_empty());
}

#[tokio::test]
async fn test_update_unknown_row() {
    let harness = Harness::new();
    harness.backend.seed("faqs", vec![faq(1, 1)]).await;

    let err = app(&harness)
        .run(update(EntityKind::Faqs, "9", r#"{"answer": "Oui"}"#))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "No FAQ with id 9");
    assert_eq!(harness.backend.write_count().await, 0);
}

#[tokio::test]
async fn test_update_with_invalid_field_fails_without_write() {
    let harness = Harness::new();
    harness.backend.seed("faqs", vec![faq(1, 1)]).await;

    let err = app(&harness)
        .run(update(EntityKind::Faqs, "1", r#"{"question": "   "}"#))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Request failed");
    assert_eq!(harness.backend.write_count().await, 0);
    assert_eq!(harness.backend.rows("faqs").await[0]["question"], json!("Question 1"));
}

#[tokio::test]
async fn test_list_rejects_unknown_search_column() {
    let harness = Harness::new();
    harness.backend.seed("faqs", vec![faq(1, 1)]).await;

    let err = app(&harness)
        .run(Command::List {
            entity: EntityKind::Faqs,
            search: Some("colour=rouge".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unknown column 'colour'. Columns: id, display_order, question, category"
    );
}

#[tokio::test]
async fn test_list_search_needs_column_and_text() {
    let harness = Harness::new();

    let err = app(&harness)
        .run(Command::List {
            entity: EntityKind::Faqs,
            search: Some("livraison".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "--search expects column=text");
}

#[tokio::test]
async fn test_list_with_known_search_column() {
    let harness = Harness::new();
    harness.backend.seed("faqs", vec![faq(1, 1), faq(2, 2)]).await;

    app(&harness)
        .run(Command::List {
            entity: EntityKind::Faqs,
            search: Some("question=2".to_string()),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_refused_without_yes() {
    let harness = Harness::new();
    harness.backend.seed("orders", vec![order(4, "pending")]).await;

    let err = app(&harness)
        .run(Command::Delete {
            entity: EntityKind::Orders,
            id: "4".to_string(),
            yes: false,
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Refusing to delete orders 4 without --yes");
    assert!(harness.backend.calls().await.is_empty());
    assert_eq!(harness.backend.rows("orders").await.len(), 1);
}

#[tokio::test]
async fn test_delete_with_yes_removes_row() {
    let harness = Harness::new();
    harness.backend.seed("orders", vec![order(4, "pending")]).await;

    app(&harness)
        .run(Command::Delete {
            entity: EntityKind::Orders,
            id: "4".to_string(),
            yes: true,
        })
        .await
        .unwrap();

    assert!(harness.backend.rows("orders").await.is_empty());
    assert!(harness
        .backend
        .calls()
        .await
        .contains(&(Method::DELETE, "/api/admin/orders/4".to_string())));
}

#[tokio::test]
async fn test_invalid_id_is_rejected_before_any_request() {
    let harness = Harness::new();

    let err = app(&harness)
        .run(Command::Get {
            entity: EntityKind::Faqs,
            id: "abc".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid FAQ id 'abc'");
    assert!(harness.backend.calls().await.is_empty());
}

#[tokio::test]
async fn test_status_on_entity_without_status() {
    let harness = Harness::new();

    let err = app(&harness)
        .run(Command::Status {
            entity: EntityKind::Categories,
            id: "1".to_string(),
            value: "pending".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "categories have no status");
}

#[tokio::test]
async fn test_signed_out_command_asks_for_login() {
    let harness = Harness::with_session(Session::default());
    harness.backend.seed("faqs", vec![faq(1, 1)]).await;

    let err = app(&harness)
        .run(Command::List {
            entity: EntityKind::Faqs,
            search: None,
        })
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Not signed in or session expired"));
}

#[tokio::test]
async fn test_boundary_move_is_nothing_to_do() {
    let harness = Harness::new();
    harness.backend.seed("faqs", vec![faq(1, 1), faq(2, 2)]).await;

    app(&harness)
        .run(Command::Move {
            entity: EntityKind::Faqs,
            id: "1".to_string(),
            direction: Direction::Up,
        })
        .await
        .unwrap();

    assert_eq!(harness.backend.write_count().await, 0);
}

#[test]
fn test_settle_maps_outcomes_to_exit_status() {
    let harness = Harness::new();
    let app = app(&harness);

    assert!(app.settle(ActionOutcome::Done).is_ok());
    assert!(app.settle(ActionOutcome::NoOp).is_ok());
    assert_eq!(
        app.settle(ActionOutcome::Busy).unwrap_err().to_string(),
        "Another move on this list is in progress"
    );
    assert_eq!(
        app.settle(ActionOutcome::Failed).unwrap_err().to_string(),
        "Request failed"
    );
    assert!(app.settle(ActionOutcome::LoginRequired).is_err());
}

#[test]
fn test_entity_kind_display_is_cli_name() {
    assert_eq!(EntityKind::BlogPosts.to_string(), "blog-posts");
    assert_eq!(EntityKind::ContactInfo.to_string(), "contact-info");
}

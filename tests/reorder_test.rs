#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

mod common;

use common::{contact_info, faq, Failure, Harness};
use flora_admin::model::{ContactInfo, ContactSubject, Faq};
use flora_admin::reorder::{BusyPolicy, Direction, MoveAffordance, SwapPersistence};
use flora_admin::ActionOutcome;
use http::{Method, StatusCode};
use serde_json::json;
use std::time::Duration;

async fn seeded_contact_info(harness: &Harness) {
    harness
        .backend
        .seed(
            "contact-info",
            vec![contact_info(1, 1), contact_info(2, 2), contact_info(3, 3), contact_info(4, 4)],
        )
        .await;
}

#[tokio::test]
async fn test_move_down_swaps_only_the_adjacent_pair() {
    let harness = Harness::new();
    seeded_contact_info(&harness).await;
    let screen = harness.screen::<ContactInfo>();
    screen.refresh().await;

    assert_eq!(screen.move_row(&2, Direction::Down).await, ActionOutcome::Done);

    assert_eq!(
        harness.backend.orders("contact-info").await,
        vec![(1, 1), (2, 3), (3, 2), (4, 4)]
    );
    let rows = screen.rows().await;
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3, 2, 4]);
    assert_eq!(harness.messages(), vec!["Contact info moved down".to_string()]);
}

#[tokio::test]
async fn test_batched_swap_is_one_request() {
    let harness = Harness::new();
    seeded_contact_info(&harness).await;
    let screen = harness.screen::<ContactInfo>();
    screen.refresh().await;
    screen.move_row(&3, Direction::Up).await;

    let requests = harness.backend.requests().await;
    let writes: Vec<_> = requests.iter().filter(|r| r.method != Method::GET).collect();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].path, "/api/admin/contact-info/reorder");
    assert_eq!(
        writes[0].body,
        Some(json!([{"id": 3, "display_order": 2}, {"id": 2, "display_order": 3}]))
    );
}

#[tokio::test]
async fn test_sequential_swap_is_two_single_field_patches() {
    let harness = Harness::new();
    seeded_contact_info(&harness).await;
    let screen = harness.screen_with::<ContactInfo>(BusyPolicy::Queue, SwapPersistence::Sequential);
    screen.refresh().await;

    assert_eq!(screen.move_row(&1, Direction::Down).await, ActionOutcome::Done);

    let writes: Vec<String> = harness
        .backend
        .calls()
        .await
        .into_iter()
        .filter(|(method, _)| *method == Method::PATCH)
        .map(|(_, path)| path)
        .collect();
    assert_eq!(
        writes,
        vec![
            "/api/admin/contact-info/1/display-order".to_string(),
            "/api/admin/contact-info/2/display-order".to_string(),
        ]
    );
    assert_eq!(
        harness.backend.orders("contact-info").await,
        vec![(1, 2), (2, 1), (3, 3), (4, 4)]
    );
}

#[tokio::test]
async fn test_boundary_moves_issue_no_request() {
    let harness = Harness::new();
    seeded_contact_info(&harness).await;
    let screen = harness.screen::<ContactInfo>();
    screen.refresh().await;
    let before = harness.backend.calls().await.len();

    assert_eq!(screen.move_row(&1, Direction::Up).await, ActionOutcome::NoOp);
    assert_eq!(screen.move_row(&4, Direction::Down).await, ActionOutcome::NoOp);

    assert_eq!(harness.backend.calls().await.len(), before);
    assert!(harness.messages().is_empty());
}

#[tokio::test]
async fn test_failed_persist_leaves_rows_untouched() {
    let harness = Harness::new();
    seeded_contact_info(&harness).await;
    let screen = harness.screen::<ContactInfo>();
    screen.refresh().await;
    let before = screen.rows().await;

    harness
        .backend
        .fail_next(
            Method::PATCH,
            "/contact-info/reorder",
            Failure::Status(StatusCode::INTERNAL_SERVER_ERROR, json!({"message": "db down"})),
        )
        .await;
    assert_eq!(screen.move_row(&2, Direction::Up).await, ActionOutcome::Failed);

    assert_eq!(screen.rows().await, before);
    assert_eq!(
        harness.messages(),
        vec!["Failed to reorder contact info: Server error (500): db down".to_string()]
    );
}

#[tokio::test]
async fn test_half_applied_sequential_swap_keeps_local_rows() {
    let harness = Harness::new();
    seeded_contact_info(&harness).await;
    let screen = harness.screen_with::<ContactInfo>(BusyPolicy::Queue, SwapPersistence::Sequential);
    screen.refresh().await;
    let before = screen.rows().await;

    harness
        .backend
        .fail_next(Method::PATCH, "/contact-info/3/display-order", Failure::Network)
        .await;
    assert_eq!(screen.move_row(&2, Direction::Down).await, ActionOutcome::Failed);
    assert_eq!(screen.rows().await, before);
}

#[tokio::test]
async fn test_failed_adopt_leaves_faq_rows_untouched() {
    let harness = Harness::new();
    harness
        .backend
        .seed("faqs", vec![faq(1, 1), faq(2, 2), faq(3, 3)])
        .await;
    let screen = harness.screen::<Faq>();
    screen.refresh().await;
    let before = screen.rows().await;

    harness
        .backend
        .fail_next(
            Method::PATCH,
            "/faqs/2/display-order",
            Failure::Status(StatusCode::INTERNAL_SERVER_ERROR, json!({"message": "db down"})),
        )
        .await;
    assert_eq!(screen.move_row(&2, Direction::Up).await, ActionOutcome::Failed);

    assert_eq!(screen.rows().await, before);
    assert_eq!(harness.backend.orders("faqs").await, vec![(1, 1), (2, 2), (3, 3)]);
    assert_eq!(
        harness.messages(),
        vec!["Failed to reorder FAQ: Server error (500): db down".to_string()]
    );
}

#[tokio::test]
async fn test_faq_move_up_adopts_neighbor_order() {
    let harness = Harness::new();
    harness
        .backend
        .seed("faqs", vec![faq(1, 1), faq(2, 2), faq(3, 3)])
        .await;
    let screen = harness.screen::<Faq>();
    screen.refresh().await;

    assert_eq!(screen.move_row(&2, Direction::Up).await, ActionOutcome::Done);

    let requests = harness.backend.requests().await;
    let patch = requests.iter().find(|r| r.method == Method::PATCH).unwrap();
    assert_eq!(patch.path, "/api/admin/faqs/2/display-order");
    assert_eq!(patch.body, Some(json!({"display_order": 1})));

    let orders: Vec<(i64, u32)> = screen
        .rows()
        .await
        .iter()
        .map(|f| (f.id, f.display_order))
        .collect();
    assert_eq!(orders, vec![(2, 1), (1, 2), (3, 3)]);
}

#[tokio::test]
async fn test_affordances_follow_list_position() {
    let harness = Harness::new();
    harness.backend.seed("faqs", vec![faq(1, 1), faq(3, 3)]).await;
    let screen = harness.screen::<Faq>();
    screen.refresh().await;

    assert_eq!(screen.move_affordance(&1).await, MoveAffordance { up: false, down: true });
    assert_eq!(screen.move_affordance(&3).await, MoveAffordance { up: true, down: false });
}

#[tokio::test]
async fn test_queued_moves_replan_after_refetch() {
    let harness = Harness::new();
    harness
        .backend
        .seed(
            "contact-subjects",
            vec![
                json!({"id": 1, "label": "Mariage", "display_order": 1}),
                json!({"id": 2, "label": "Deuil", "display_order": 2}),
                json!({"id": 3, "label": "Entreprise", "display_order": 3}),
            ],
        )
        .await;
    harness.backend.slow_writes(Duration::from_millis(30)).await;
    let screen = harness.screen::<ContactSubject>();
    screen.refresh().await;

    // Two rapid clicks on the same row: the second must see the first's result.
    let (first, second) = tokio::join!(
        screen.move_row(&3, Direction::Up),
        screen.move_row(&3, Direction::Up)
    );
    assert_eq!((first, second), (ActionOutcome::Done, ActionOutcome::Done));

    let labels: Vec<String> = screen.rows().await.into_iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Entreprise", "Mariage", "Deuil"]);
    let mut orders: Vec<u32> = screen.rows().await.iter().map(|s| s.display_order).collect();
    orders.sort_unstable();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_drop_policy_rejects_move_while_busy() {
    let harness = Harness::new();
    seeded_contact_info(&harness).await;
    harness.backend.slow_writes(Duration::from_millis(30)).await;
    let screen = harness.screen_with::<ContactInfo>(BusyPolicy::Drop, SwapPersistence::Batched);
    screen.refresh().await;

    let (first, second) = tokio::join!(
        screen.move_row(&2, Direction::Up),
        screen.move_row(&3, Direction::Up)
    );
    assert_eq!(first, ActionOutcome::Done);
    assert_eq!(second, ActionOutcome::Busy);
    assert_eq!(harness.backend.write_count().await, 1);
}

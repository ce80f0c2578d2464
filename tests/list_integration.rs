//! List controllers driven by real list endpoints

use apigw_tests::{error_envelope, page_envelope, stages, Console};
use gateway_client::api::stages::{self as stage_api, Stage};
use gateway_client::{
    FetchOutcome, Filter, ListController, ListOptions, ResponseOrdering, FETCH_ALL_PAGE_SIZE,
};
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

const STAGES_PATH: &str = "/api/v1/gateways/3/stages/";

fn names(rows: &[Stage]) -> Vec<String> {
    rows.iter().map(|stage| stage.name.clone()).collect()
}

#[tokio::test]
async fn test_page_change_sends_row_offset_and_limit() {
    let console = Console::start().await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(stages(&[21, 22]), 22)))
        .expect(1)
        .mount(&console.server)
        .await;

    let list = ListController::new(stage_api::lister(&console.client), "3", None);
    let outcome = list.handle_page_change(2).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(names(&list.rows()), vec!["stage-21", "stage-22"]);
    assert_eq!(list.pagination().count, 22);
    assert_eq!(list.pagination().page, 2);
    assert!(!list.loading());
}

#[tokio::test]
async fn test_fetch_all_uses_single_large_page() {
    let console = Console::start().await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("limit", FETCH_ALL_PAGE_SIZE.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(stages(&[1, 2, 3]), 3)))
        .expect(1)
        .mount(&console.server)
        .await;

    let list = ListController::with_options(
        stage_api::lister(&console.client),
        "3",
        None,
        ListOptions {
            limit: FETCH_ALL_PAGE_SIZE,
            ..ListOptions::default()
        },
    );
    list.get_list().await.unwrap();

    assert_eq!(list.rows().len(), 3);
}

#[tokio::test]
async fn test_failed_fetch_keeps_rows_and_notifies() {
    let console = Console::start().await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(stages(&[1]), 11)))
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("offset", "10"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(error_envelope(50000, "db down", Value::Null)),
        )
        .mount(&console.server)
        .await;

    let list = ListController::new(stage_api::lister(&console.client), "3", None);
    list.get_list().await.unwrap();
    let err = list.handle_page_change(1).await.unwrap_err();

    assert_eq!(err.code, 500);
    assert_eq!(names(&list.rows()), vec!["stage-1"]);
    assert_eq!(list.last_error(), Some(err));
    assert!(!list.loading());
    assert_eq!(console.notifier.notifications().len(), 1);
}

#[tokio::test]
async fn test_slow_stale_response_is_discarded() {
    let console = Console::start().await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_envelope(stages(&[1]), 20))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(stages(&[11]), 20)))
        .mount(&console.server)
        .await;

    let list = ListController::new(stage_api::lister(&console.client), "3", None);
    let slow = {
        let list = list.clone();
        tokio::spawn(async move { list.get_list().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let fast = list.handle_page_change(1).await.unwrap();
    let slow = slow.await.unwrap().unwrap();

    assert_eq!(fast, FetchOutcome::Applied);
    assert_eq!(slow, FetchOutcome::Superseded);
    assert_eq!(names(&list.rows()), vec!["stage-11"]);
    assert!(!list.loading());
}

#[tokio::test]
async fn test_last_resolved_ordering_lets_slow_response_win() {
    let console = Console::start().await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_envelope(stages(&[1]), 20))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(stages(&[11]), 20)))
        .mount(&console.server)
        .await;

    let list = ListController::with_options(
        stage_api::lister(&console.client),
        "3",
        None,
        ListOptions {
            ordering: ResponseOrdering::LastResolved,
            ..ListOptions::default()
        },
    );
    let slow = {
        let list = list.clone();
        tokio::spawn(async move { list.get_list().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    list.handle_page_change(1).await.unwrap();
    slow.await.unwrap().unwrap();

    assert_eq!(names(&list.rows()), vec!["stage-1"]);
    assert_eq!(list.pagination().page, 1);
}

#[tokio::test]
async fn test_mounted_list_refetches_on_filter_change() {
    let console = Console::start().await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .and(query_param("name", "prod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(stages(&[7]), 1)))
        .expect(1)
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path(STAGES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(stages(&[1, 2]), 2)))
        .mount(&console.server)
        .await;

    let filter = Filter::new();
    let list = ListController::new(stage_api::lister(&console.client), "3", Some(filter.clone()));
    let mut states = list.subscribe();
    let mounted = list.mount();

    timeout(
        Duration::from_secs(5),
        states.wait_for(|state| !state.loading && state.rows.len() == 2),
    )
    .await
    .expect("initial fetch finishes")
    .unwrap();

    assert!(filter.set("name", "prod"));
    timeout(
        Duration::from_secs(5),
        states.wait_for(|state| !state.loading && state.rows.len() == 1),
    )
    .await
    .expect("filtered fetch finishes")
    .unwrap();

    assert_eq!(names(&list.rows()), vec!["stage-7"]);
    mounted.unmount();
}

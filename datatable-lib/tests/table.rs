//! Integration tests for the table and its pagination wiring.

use std::time::Duration;

use datatable_lib::TableConfig;
use datatable_lib::dataset::InMemoryDataset;
use datatable_lib::fetch::SimulatedSource;
use datatable_lib::model::Column;
use datatable_lib::query::{FilterKind, PageRequest};
use datatable_lib::table::Table;

fn config() -> TableConfig {
    TableConfig::default().with_seed(11)
}

fn table(dataset: &InMemoryDataset) -> Table {
    let source = SimulatedSource::new(dataset.clone()).with_latency(Duration::from_millis(1000));
    Table::new(&config(), source)
}

#[tokio::test(start_paused = true)]
async fn test_mount_learns_page_count() {
    let dataset = InMemoryDataset::generate(10_000, Some(11));
    let mut table = table(&dataset);
    assert_eq!(table.state().page_count(), 0);

    table.mount().unwrap();
    let fetched = table.settled().await.unwrap();

    assert_eq!(fetched.rows(), &dataset.records()[0..10]);
    assert_eq!(table.state().page_count(), 1000);
    assert_eq!(table.state().page_label(), "Page 1 of 1000");
    assert_eq!(
        table.state().summary(fetched.is_loading(), fetched.rows().len()),
        "Showing 10 of 10000 results"
    );
}

#[tokio::test(start_paused = true)]
async fn test_navigation_requests_one_page_each() {
    let dataset = InMemoryDataset::generate(10_000, Some(11));
    let mut table = table(&dataset);
    table.mount().unwrap();
    table.settled().await.unwrap();

    // There is no page before the first one.
    assert_eq!(table.previous_page().unwrap(), None);

    table.next_page().unwrap().unwrap();
    table.next_page().unwrap().unwrap();
    let fetched = table.settled().await.unwrap();

    assert_eq!(table.state().page_index(), 2);
    assert_eq!(fetched.rows(), &dataset.records()[20..30]);
    assert_eq!(fetched.current_request(), Some(PageRequest::new(2, 10)));
    // Mount plus the last of the two navigations.
    assert_eq!(fetched.revision(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_page_size_change_refetches() {
    let dataset = InMemoryDataset::generate(10_000, Some(11));
    let mut table = table(&dataset);
    table.mount().unwrap();
    table.settled().await.unwrap();
    table.goto_page(6).unwrap();

    assert!(table.set_page_size(20).unwrap().is_some());
    assert_eq!(table.set_page_size(20).unwrap(), None);
    let fetched = table.settled().await.unwrap();

    assert_eq!(table.state().page_index(), 3);
    assert_eq!(table.state().page_count(), 500);
    assert_eq!(fetched.rows(), &dataset.records()[60..80]);
}

#[tokio::test(start_paused = true)]
async fn test_filters_and_sort_apply_to_visible_page_only() {
    let dataset = InMemoryDataset::generate(10_000, Some(11));
    let mut table = table(&dataset);
    table.mount().unwrap();
    let fetched = table.settled().await.unwrap();

    table
        .state_mut()
        .set_filter(Column::Age, FilterKind::GreaterThan, "15");
    table.state_mut().toggle_sort(Column::Age);
    table.state_mut().toggle_sort(Column::Age);

    let visible = table.visible_rows(&fetched);
    let expected = dataset.records()[0..10]
        .iter()
        .filter(|r| r.age() >= 15)
        .count();
    assert_eq!(visible.len(), expected);
    assert!(visible.windows(2).all(|w| w[0].age() >= w[1].age()));

    // The delivered page itself is untouched.
    assert_eq!(fetched.rows(), &dataset.records()[0..10]);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_table_from_config() {
    let config = TableConfig::default()
        .with_dataset_size(45)
        .with_page_size(20)
        .with_seed(5);
    let mut table = Table::simulated(&config);

    table.mount().unwrap();
    assert!(table.fetch_state().is_loading());
    table.settled().await.unwrap();
    assert_eq!(table.state().page_count(), 3);

    table.goto_page(2).unwrap();
    let fetched = table.settled().await.unwrap();
    assert_eq!(fetched.rows().len(), 5);
    assert!(!table.state().can_next_page());
}

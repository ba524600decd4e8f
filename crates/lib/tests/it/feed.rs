use voxpop::{
    CommentStore, FeedSettings,
    feed::{self, FeedPage, PageRequest},
};

use crate::helpers::populate;

async fn load_page(store: &CommentStore, page: i64, page_size: i64) -> FeedPage {
    let request =
        PageRequest::new(Some(page), Some(page_size), &FeedSettings::default()).unwrap();
    feed::load(store, request).await
}

fn texts(page: &FeedPage) -> Vec<String> {
    page.items.iter().map(|c| c.text().to_string()).collect()
}

#[tokio::test]
async fn test_pagination_over_twelve_comments() {
    let store = CommentStore::new();
    populate(&store, 12).await;

    let page = load_page(&store, 1, 5).await;
    assert_eq!(
        texts(&page),
        vec!["comment 12", "comment 11", "comment 10", "comment 9", "comment 8"]
    );
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.prev_page, None);

    let page = load_page(&store, 2, 5).await;
    assert_eq!(
        texts(&page),
        vec!["comment 7", "comment 6", "comment 5", "comment 4", "comment 3"]
    );
    assert_eq!(page.next_page, Some(3));
    assert_eq!(page.prev_page, Some(1));

    let page = load_page(&store, 3, 5).await;
    assert_eq!(texts(&page), vec!["comment 2", "comment 1"]);
    assert_eq!(page.next_page, None);
    assert_eq!(page.prev_page, Some(2));
    assert_eq!(page.current_page, 3);
}

#[tokio::test]
async fn test_empty_store_has_no_neighbours() {
    let store = CommentStore::new();

    let page = load_page(&store, 1, 5).await;
    assert!(page.items.is_empty());
    assert_eq!(page.next_page, None);
    assert_eq!(page.prev_page, None);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let store = CommentStore::new();
    populate(&store, 3).await;

    let page = load_page(&store, 2, 5).await;
    assert!(page.items.is_empty());
    assert_eq!(page.next_page, None);
    assert_eq!(page.prev_page, Some(1));
}

#[tokio::test]
async fn test_clamped_page_size_still_paginates() {
    let store = CommentStore::new();
    populate(&store, 3).await;

    // page_size=0 is clamped to a single item per page
    let page = load_page(&store, 2, 0).await;
    assert_eq!(page.page_size, 1);
    assert_eq!(texts(&page), vec!["comment 2"]);
    assert_eq!(page.next_page, Some(3));
    assert_eq!(page.prev_page, Some(1));
}

#[tokio::test]
async fn test_concurrent_submissions_are_all_stored() {
    let store = CommentStore::new();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { populate(&store, 25).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.len().await, 200);
    let page = load_page(&store, 40, 5).await;
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.next_page, None);
}

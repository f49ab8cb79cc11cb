use super::*;

use mockall::predicate::eq;

fn info() -> KeyValue {
    KeyValue::section("appinfo", vec![KeyValue::section("common", vec![KeyValue::leaf("name", "Test Game")])])
}

#[tokio::test]
async fn fetch_product_info() {
    let mut client = MockProductInfoHandling::new();
    client
        .expect_get_product_info()
        .with(eq(AppId { app_id: 10 }))
        .times(1)
        .returning(|_| Ok(info()));

    let fetcher = ProductInfoFetcher::new(Box::new(client), false);
    let actual = fetcher.fetch(AppId { app_id: 10 }, &CancellationToken::new()).await.unwrap();

    assert_eq!(actual, Some(info()));
}

#[tokio::test]
async fn failures_become_absence() {
    let mut client = MockProductInfoHandling::new();
    client
        .expect_get_product_info()
        .times(1)
        .returning(|_| Err(ProductInfoError::Connection("no route to host".to_string())));

    let fetcher = ProductInfoFetcher::new(Box::new(client), false);
    let actual = fetcher.fetch(AppId { app_id: 10 }, &CancellationToken::new()).await.unwrap();

    assert_eq!(actual, None);
}

#[tokio::test]
async fn failures_propagate_in_strict_mode() {
    let mut client = MockProductInfoHandling::new();
    client
        .expect_get_product_info()
        .returning(|_| Err(ProductInfoError::Protocol("bad packet".to_string())));

    let fetcher = ProductInfoFetcher::new(Box::new(client), true);
    let actual = fetcher.fetch(AppId { app_id: 10 }, &CancellationToken::new()).await;

    assert!(matches!(actual, Err(MetadataError::ProductInfo(ProductInfoError::Protocol(_)))));
}

#[tokio::test]
async fn cancelled_before_request() {
    let mut client = MockProductInfoHandling::new();
    client.expect_get_product_info().returning(|_| Ok(info()));

    let cancel = CancellationToken::new();
    cancel.cancel();

    let fetcher = ProductInfoFetcher::new(Box::new(client), false);
    let actual = fetcher.fetch(AppId { app_id: 10 }, &cancel).await;

    assert!(matches!(actual, Err(MetadataError::Cancelled)));
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use receipt_processor::api::server::create_app;
    use receipt_processor::ReceiptStore;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
            ],
            "total": "35.35"
        })
    }

    fn corner_market_receipt() -> Value {
        json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"}
            ],
            "total": "9.00"
        })
    }

    fn post_receipt(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn get_points(id: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/receipts/{}/points", id))
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn submit(app: &Router, receipt: Value) -> String {
        let response = app
            .clone()
            .oneshot(post_receipt(receipt.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    async fn points_for(app: &Router, id: &str) -> u64 {
        let response = app.clone().oneshot(get_points(id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        body["points"].as_u64().unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_bytes(response).await[..], b"OK");
    }

    #[tokio::test]
    async fn test_target_receipt_scores_28() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let id = submit(&app, target_receipt()).await;

        assert_eq!(points_for(&app, &id).await, 28);
    }

    #[tokio::test]
    async fn test_corner_market_receipt_scores_109() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let id = submit(&app, corner_market_receipt()).await;

        assert_eq!(points_for(&app, &id).await, 109);
    }

    #[tokio::test]
    async fn test_resubmitting_creates_a_new_id() {
        let store = Arc::new(ReceiptStore::new());
        let app = create_app(store.clone());

        let first = submit(&app, target_receipt()).await;
        let second = submit(&app, target_receipt()).await;

        assert_ne!(first, second);
        assert_eq!(points_for(&app, &first).await, 28);
        assert_eq!(points_for(&app, &second).await, 28);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_submit_without_content_type() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from(corner_market_receipt().to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let store = Arc::new(ReceiptStore::new());
        let app = create_app(store.clone());

        let response = app.oneshot(post_receipt("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(&body_bytes(response).await[..], b"The receipt is invalid");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_items_is_bad_request() {
        let store = Arc::new(ReceiptStore::new());
        let app = create_app(store.clone());

        let mut receipt = target_receipt();
        receipt["items"] = json!([]);
        let response = app.oneshot(post_receipt(receipt.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(&body_bytes(response).await[..], b"Missing required fields");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_null_retailer_is_missing_fields() {
        let store = Arc::new(ReceiptStore::new());
        let app = create_app(store.clone());

        let mut receipt = target_receipt();
        receipt["retailer"] = Value::Null;
        let response = app.oneshot(post_receipt(receipt.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(&body_bytes(response).await[..], b"Missing required fields");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_date_is_bad_request() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let mut receipt = target_receipt();
        receipt["purchaseDate"] = json!("2022-13-99");
        let response = app.oneshot(post_receipt(receipt.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(message.starts_with("Invalid date format"), "unexpected message: {}", message);
    }

    #[tokio::test]
    async fn test_wrong_method_on_process() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/receipts/process")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let response = app
            .oneshot(get_points("0b0d5e7a-3f1e-4c3a-9d43-5d8e0a5f6b21"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(&body_bytes(response).await[..], b"No receipt found for that ID");
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let app = create_app(Arc::new(ReceiptStore::new()));

        let response = app.oneshot(get_points("not-a-receipt-id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

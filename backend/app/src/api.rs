use axum::Router;

use crate::{app::AppState, common::ApiError};

pub mod devices;
pub mod software;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .nest("/devices", devices::routes())
                .nest("/software", software::routes()),
        )
        .fallback(async || -> ApiError {
            tracing::info!("Not Found!");
            ApiError::NotFound
        })
        .method_not_allowed_fallback(async || -> ApiError {
            tracing::info!("Method Not Allowed!");
            ApiError::MethodNotAllowed
        })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        entity::{device, job, software_detail, software_type},
        service::DeviceRepository,
    };

    fn router(db: DatabaseConnection) -> Router {
        create_router().with_state(AppState::new(DeviceRepository::new(db)))
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn laptop() -> device::Model {
        device::Model {
            id: 7,
            device_id: Some("IT-0007".to_string()),
            serial_no: Some("PF3X".to_string()),
            device_name: Some("Design Laptop".to_string()),
            device_brand: Some("Apple".to_string()),
            device_model: Some("MacBook Pro".to_string()),
            cpu: Some("M3".to_string()),
            memory: Some("32GB".to_string()),
            harddisk: Some("1TB".to_string()),
            monitor: None,
            device_ip: None,
            mac: None,
            hardware_other: None,
            device_status: Some("enable".to_string()),
            device_type_id: Some(1),
            department_id: Some(2),
            vender: None,
            device_price: None,
            date_use: None,
            date_expire: None,
            warranty: None,
            software: None,
            software_sn: None,
        }
    }

    #[tokio::test]
    async fn unknown_route_is_enveloped_404() {
        let (status, body) = get(router(empty_db()), "/printers").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
        assert_eq!(body["data"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn wrong_method_is_405() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/devices/stats")
            .body(Body::empty())
            .unwrap();
        let response = router(empty_db()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn non_numeric_device_id_is_404() {
        let (status, body) = get(router(empty_db()), "/api/devices/abc").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Device abc Not Found");
    }

    #[tokio::test]
    async fn device_detail_carries_status_label() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![laptop()]])
            .into_connection();

        let (status, body) = get(router(db), "/api/devices/7").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status_label"], "Normal");
        assert_eq!(body["data"]["age"], "N/A");
        assert_eq!(body["data"]["monitor"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn device_list_returns_summaries() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![laptop()]])
            .into_connection();

        let (status, body) = get(router(db), "/api/devices?cpu=m3&department_id=2&order=asc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["id"], 7);
        assert_eq!(body["data"][0]["status_label"], "Normal");
    }

    #[tokio::test]
    async fn bad_numeric_criterion_is_400() {
        let (status, body) = get(router(empty_db()), "/api/devices?department_id=it").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn overlong_criterion_is_400() {
        let uri = format!("/api/devices?cpu={}", "x".repeat(300));
        let (status, _) = get(router(empty_db()), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    fn num_items(count: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
    }

    #[tokio::test]
    async fn stats_report_each_status_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[num_items(5)]])
            .append_query_results([[num_items(1)]])
            .append_query_results([[num_items(2)]])
            .into_connection();

        let (status, body) = get(router(db), "/api/devices/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            serde_json::json!({ "enable": 5, "disable": 1, "repair": 2 })
        );
    }

    #[tokio::test]
    async fn quick_search_returns_summaries() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![laptop()]])
            .into_connection();

        let (status, body) = get(router(db), "/api/devices/search?query=macbook").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["device_model"], "MacBook Pro");
    }

    #[tokio::test]
    async fn jobs_of_a_device() {
        let ticket = job::Model {
            id: 3,
            device_id: 7,
            job_status: "pending".to_string(),
            job_detail: Some("Battery swelling".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 5, 2, 8, 30, 0).unwrap(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![laptop()]])
            .append_query_results([vec![ticket]])
            .into_connection();

        let (status, body) = get(router(db), "/api/devices/7/jobs").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["job_status"], "pending");
        assert_eq!(body["data"][0]["device_id"], 7);
    }

    #[tokio::test]
    async fn jobs_of_unknown_device_is_404() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<device::Model>::new()])
            .into_connection();

        let (status, body) = get(router(db), "/api/devices/99/jobs").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Device 99 Not Found");
    }

    #[tokio::test]
    async fn installed_software_carries_serials() {
        let with_software = device::Model {
            software: Some("4".to_string()),
            software_sn: Some(r#"[{"4":"ADOBE-77"}]"#.to_string()),
            ..laptop()
        };
        let catalog = vec![
            (
                software_detail::Model {
                    id: 4,
                    software_detail: "Illustrator".to_string(),
                    software_type_id: Some(9),
                },
                Some(software_type::Model {
                    id: 9,
                    software_type: "Design".to_string(),
                }),
            ),
            (
                software_detail::Model {
                    id: 5,
                    software_detail: "Excel".to_string(),
                    software_type_id: Some(9),
                },
                Some(software_type::Model {
                    id: 9,
                    software_type: "Design".to_string(),
                }),
            ),
        ];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![with_software]])
            .append_query_results([catalog])
            .into_connection();

        let (status, body) = get(router(db), "/api/devices/7/software").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            serde_json::json!([{
                "id": 4,
                "software_name": "Illustrator",
                "software_type": "Design",
                "serial": "ADOBE-77"
            }])
        );
    }

    #[tokio::test]
    async fn store_failure_yields_empty_report() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let (status, body) = get(router(db), "/api/software/totals").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!({}));
    }
}

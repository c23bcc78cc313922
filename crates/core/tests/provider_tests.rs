// ═══════════════════════════════════════════════════════════════════
// Provider Tests — hh.ru request shape, response parsing, trait objects
// ═══════════════════════════════════════════════════════════════════

use serde_json::json;

use vacancy_tracker_core::errors::CoreError;
use vacancy_tracker_core::models::settings::Settings;
use vacancy_tracker_core::providers::hh::HhProvider;
use vacancy_tracker_core::providers::traits::VacancyProvider;

mod hh {
    use super::*;

    #[test]
    fn name() {
        assert_eq!(HhProvider::new().name(), "hh.ru");
    }

    #[test]
    fn default_trait() {
        let p = HhProvider::default();
        assert_eq!(p.api_url(), "https://api.hh.ru/vacancies");
    }

    #[test]
    fn default_query_params() {
        let params = HhProvider::new().query_params("rust developer");
        assert_eq!(
            params,
            vec![
                ("text", "rust developer".to_string()),
                ("per_page", "100".to_string()),
                ("only_with_salary", "true".to_string()),
            ]
        );
    }

    #[test]
    fn settings_drive_endpoint_and_params() {
        let settings = Settings {
            api_url: "http://localhost:8080/vacancies".into(),
            per_page: 10,
            only_with_salary: false,
            ..Settings::default()
        };
        let p = HhProvider::with_settings(&settings);
        assert_eq!(p.api_url(), "http://localhost:8080/vacancies");
        let params = p.query_params("go");
        assert!(params.contains(&("per_page", "10".to_string())));
        assert!(params.contains(&("only_with_salary", "false".to_string())));
    }

    #[test]
    fn parse_items_returns_raw_records() {
        let body = json!({
            "items": [{ "id": "1" }, { "id": "2", "salary": null }],
            "found": 2,
            "pages": 1,
            "page": 0
        });
        let items = HhProvider::parse_items(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["id"], "2");
    }

    #[test]
    fn parse_items_empty_page() {
        let items = HhProvider::parse_items(json!({ "items": [] })).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn parse_items_without_items_is_api_error() {
        let err = HhProvider::parse_items(json!({ "errors": [{ "type": "bad_argument" }] }))
            .unwrap_err();
        match err {
            CoreError::Api { provider, .. } => assert_eq!(provider, "hh.ru"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let settings = Settings {
            // Port 9 (discard) on loopback: connection is refused immediately.
            api_url: "http://127.0.0.1:9/vacancies".into(),
            ..Settings::default()
        };
        let err = HhProvider::with_settings(&settings)
            .search("secret query")
            .await
            .unwrap_err();
        match err {
            CoreError::Network(msg) => assert!(!msg.contains("secret")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

mod trait_compliance {
    use super::*;

    #[test]
    fn providers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HhProvider>();
    }

    #[test]
    fn providers_as_trait_objects() {
        let providers: Vec<Box<dyn VacancyProvider>> = vec![Box::new(HhProvider::new())];
        assert_eq!(providers[0].name(), "hh.ru");
    }
}

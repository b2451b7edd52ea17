//! Integration tests for the download page and static files

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serial_test::serial;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app, test_catalog};

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    /// Files are listed by name with sidecar descriptions
    #[tokio::test]
    #[serial]
    async fn it_lists_downloads() {
        let app = test_app(test_catalog("http://127.0.0.1:1"));
        let response = app.router.oneshot(request("/download?lang=en")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains(r#"href="/api/downloads/flyer.pdf""#));
        assert!(body.contains("Kursflyer 2024"));
        // No sidecar so the file name is the description
        assert!(body.contains(r#"href="/api/downloads/plan.txt" download>plan.txt</a>"#));
        // Sidecars are not listed themselves
        assert!(!body.contains("flyer.info"));
        assert!(body.find("flyer.pdf") < body.find("plan.txt"));
    }

    #[tokio::test]
    #[serial]
    async fn it_returns_500_when_directory_is_missing() {
        let app = test_app(test_catalog("http://127.0.0.1:1"));
        std::fs::remove_dir_all(app.dir.path().join("downloads")).unwrap();

        let response = app.router.oneshot(request("/download")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("Download directory not found"));
    }

    /// Static files are served from disk without caching
    #[tokio::test]
    #[serial]
    async fn it_serves_static_files() {
        let app = test_app(test_catalog("http://127.0.0.1:1"));

        let response = app
            .router
            .clone()
            .oneshot(request("/api/downloads/flyer.pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        assert_eq!(body_to_string(response.into_body()).await, "pdf");

        let response = app
            .router
            .clone()
            .oneshot(request("/api/images/logo.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.router.oneshot(request("/api/images/missing.png")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

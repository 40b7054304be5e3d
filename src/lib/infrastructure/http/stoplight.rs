//! API documentation.

use axum::response::Html;

/// Stoplight API documentation.
pub async fn handler() -> Html<String> {
    Html(
        r#"
<html lang="en">
<head>
    <title>Mail Courier API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
    <main role="main">
        <elements-api apiDescriptionUrl="/openapi.json" router="hash" />
    </main>
</body>
</html>
"#
        .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::test_state, test_config};

    #[tokio::test]
    async fn test_docs_handler() -> TestResult {
        let response = TestServer::new(router(test_state(None), &test_config())?)?
            .get("/")
            .await;

        response.assert_status_ok();

        let raw_text = response.text();

        assert!(raw_text.contains("Mail Courier API"));
        assert!(raw_text.contains("/openapi.json"));

        Ok(())
    }

    #[tokio::test]
    async fn test_docs_are_cached_for_the_configured_ttl() -> TestResult {
        let response = TestServer::new(router(test_state(None), &test_config())?)?
            .get("/openapi.json")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("cache-control"), "public, max-age=60");

        Ok(())
    }
}

//! One-shot category file loading.
//!
//! `remote_file` may point at a local path or an http(s) URL. The load
//! happens once at startup and is fire-and-forget: no retry, no
//! timeout, no cancellation. Callers keep the previous category map on
//! any failure so a bad fetch can never take down the render loop.

use std::path::Path;

use url::Url;

use crate::categories::Categories;
use crate::error::FetchError;

/// Whether `source` is an http(s) URL rather than a local path.
fn is_remote(source: &str) -> bool {
    matches!(
        Url::parse(source),
        Ok(url) if url.scheme() == "http" || url.scheme() == "https"
    )
}

/// Load a category map from a local path or remote URL.
pub async fn load_categories(source: &str) -> Result<Categories, FetchError> {
    if is_remote(source) {
        fetch_remote(source).await
    } else {
        read_local(Path::new(source))
    }
}

async fn fetch_remote(url: &str) -> Result<Categories, FetchError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    Ok(Categories::from_json(&body)?)
}

fn read_local(path: &Path) -> Result<Categories, FetchError> {
    let body = std::fs::read_to_string(path).map_err(|source| FetchError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Categories::from_json(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    const BODY: &str = indoc! {r#"
        {
            "anytime": ["Fetched!"],
            "rain": ["Bring an umbrella"]
        }
    "#};

    #[test]
    fn scheme_detection() {
        assert!(is_remote("https://example.com/compliments.json"));
        assert!(is_remote("http://localhost:8080/c.json"));
        assert!(!is_remote("compliments.json"));
        assert!(!is_remote("/etc/glimmer/compliments.json"));
        assert!(!is_remote("file.json?query=1"));
    }

    #[tokio::test]
    async fn fetches_and_parses_a_remote_file() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/compliments.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let url = format!("{}/compliments.json", server.url());
        let cats = load_categories(&url).await.unwrap();
        assert_eq!(cats.get("anytime"), ["Fetched!"]);
        assert_eq!(cats.get("rain"), ["Bring an umbrella"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/compliments.json")
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/compliments.json", server.url());
        match load_categories(&url).await {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/compliments.json")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let url = format!("{}/compliments.json", server.url());
        assert!(matches!(
            load_categories(&url).await,
            Err(FetchError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn loads_a_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BODY.as_bytes()).unwrap();
        let cats = load_categories(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(cats.get("anytime"), ["Fetched!"]);
    }

    #[tokio::test]
    async fn missing_local_file_is_a_read_error() {
        assert!(matches!(
            load_categories("/no/such/file.json").await,
            Err(FetchError::ReadFailed { .. })
        ));
    }
}

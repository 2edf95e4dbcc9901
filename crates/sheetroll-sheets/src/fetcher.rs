//! Remote sheet retrieval

use std::future::Future;

use crate::error::{SheetsError, SheetsResult};
use crate::options::FetchOptions;
use crate::reader::CsvRowReader;
use crate::row::SheetRow;
use crate::sheet_id::SheetId;

/// Source of sheet rows
///
/// Every call retrieves the sheet afresh; implementations do not cache.
pub trait SheetFetcher: Send + Sync {
    /// Retrieve all rows of a sheet
    fn fetch(&self, id: &SheetId) -> impl Future<Output = SheetsResult<Vec<SheetRow>>> + Send;
}

/// Fetches a sheet's published CSV export over HTTP
///
/// One attempt per call, bounded by [`FetchOptions::timeout`]. Non-success statuses are
/// errors.
pub struct HttpSheetFetcher {
    client: reqwest::Client,
    options: FetchOptions,
}

impl HttpSheetFetcher {
    /// Create a fetcher with its own HTTP client
    pub fn new(options: FetchOptions) -> SheetsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;

        Ok(Self { client, options })
    }

    fn transport_error(&self, err: reqwest::Error, url: &str) -> SheetsError {
        if err.is_timeout() {
            SheetsError::Timeout {
                url: url.to_string(),
                seconds: self.options.timeout.as_secs(),
            }
        } else {
            SheetsError::Http(err)
        }
    }
}

impl SheetFetcher for HttpSheetFetcher {
    async fn fetch(&self, id: &SheetId) -> SheetsResult<Vec<SheetRow>> {
        let url = self.options.csv_url(id);
        tracing::debug!("Fetching sheet {id} from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let rows = CsvRowReader::read(&body[..], &self.options)?;
        tracing::debug!("Fetched {} rows from sheet {id}", rows.len());

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet_id::extract_sheet_id;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and return a URL template pointing at it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await.unwrap();

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });

        format!("http://{addr}/d/{{id}}/export.csv")
    }

    fn fetcher(url_template: String, timeout: Duration) -> HttpSheetFetcher {
        HttpSheetFetcher::new(FetchOptions {
            url_template,
            timeout,
            ..Default::default()
        })
        .unwrap()
    }

    fn sheet_id() -> SheetId {
        extract_sheet_id("https://docs.google.com/spreadsheets/d/SHEET42/edit").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_rows() {
        let template = serve_once("200 OK", "\"Attack\",\"\",\"1d6+2\"\n\"Defend\",\"\",\"3\"\n").await;
        let rows = fetcher(template, Duration::from_secs(5))
            .fetch(&sheet_id())
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field(0), Some("Attack"));
        assert_eq!(rows[1].field(2), Some("3"));
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let template = serve_once("404 Not Found", "missing").await;
        let err = fetcher(template, Duration::from_secs(5))
            .fetch(&sheet_id())
            .await
            .unwrap_err();

        match err {
            SheetsError::Status { status, url } => {
                assert_eq!(status, 404);
                assert!(url.contains("/d/SHEET42/"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let err = fetcher(format!("http://{addr}/{{id}}"), Duration::from_millis(200))
            .fetch(&sheet_id())
            .await
            .unwrap_err();

        assert!(matches!(err, SheetsError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let err = fetcher(format!("http://{addr}/{{id}}"), Duration::from_secs(5))
            .fetch(&sheet_id())
            .await
            .unwrap_err();

        assert!(matches!(err, SheetsError::Http(_)), "got {err:?}");
    }
}

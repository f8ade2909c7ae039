//! Bibliographic sources against a local HTTP server.
//!
//! Covers slow upstreams, error statuses and fall-through to the next source.

use shelfmark_core::Isbn;
use shelfmark_error::{MetadataErrorKind, ShelfmarkErrorKind};
use shelfmark_interface::BibliographicSource;
use shelfmark_metadata::{GoogleBooksSource, HintResolver, NdlSource};
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const NDL_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <item>
      <dc:title>ソフトウェア設計の結合バランス</dc:title>
      <dc:creator>水野, 貴明, 1973-</dc:creator>
    </item>
  </channel>
</rss>"#;

const GOOGLE_BOOKS_JSON: &str = r#"{"totalItems": 1, "items": [{"volumeInfo": {
    "title": "Balancing Coupling in Software Design",
    "authors": ["Vlad Khononov"]
}}]}"#;

/// How the local server answers every request.
#[derive(Debug, Clone)]
enum Reply {
    /// Read the request and never answer
    Hang,
    /// Empty body with this status
    Status(u16),
    /// 200 with this content type and body
    Body(&'static str, &'static str),
}

/// Serve `reply` on an ephemeral port and return the base URL.
async fn serve(reply: Reply) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let reply = reply.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let _ = socket.read(&mut buf).await;

                let (status, content_type, body) = match reply {
                    Reply::Hang => {
                        tokio::time::sleep(Duration::from_secs(60)).await;
                        return;
                    }
                    Reply::Status(code) => (code, "text/plain", ""),
                    Reply::Body(content_type, body) => (200, content_type, body),
                };

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status == 200 { "OK" } else { "Error" },
                    content_type,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    Ok(format!("http://{}/search", addr))
}

fn isbn() -> Isbn {
    Isbn::parse("9784798186788").expect("valid isbn")
}

#[tokio::test]
async fn test_ndl_source_reads_rss() -> anyhow::Result<()> {
    let url = serve(Reply::Body("application/rss+xml", NDL_RSS)).await?;
    let source = NdlSource::new(url, Duration::from_secs(5))?;

    let hint = source.lookup(&isbn()).await?.expect("hint present");

    assert_eq!(hint.title(), "ソフトウェア設計の結合バランス");
    assert_eq!(hint.authors(), &vec!["水野貴明".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_metadata_status_error() -> anyhow::Result<()> {
    let url = serve(Reply::Status(500)).await?;
    let source = NdlSource::new(url, Duration::from_secs(5))?;

    let err = source.lookup(&isbn()).await.unwrap_err();

    match err.kind() {
        ShelfmarkErrorKind::Metadata(e) => assert_eq!(
            e.kind,
            MetadataErrorKind::Status {
                source_name: "ndl".to_string(),
                status_code: 500,
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_hung_source_times_out() -> anyhow::Result<()> {
    let url = serve(Reply::Hang).await?;
    let source = GoogleBooksSource::new(url, Duration::from_millis(500))?;

    let started = Instant::now();
    let err = source.lookup(&isbn()).await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(matches!(
        err.kind(),
        ShelfmarkErrorKind::Metadata(e) if matches!(e.kind, MetadataErrorKind::Http { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_resolver_falls_through_hung_and_failing_sources() -> anyhow::Result<()> {
    let hung = serve(Reply::Hang).await?;
    let failing = serve(Reply::Status(503)).await?;
    let good = serve(Reply::Body("application/json", GOOGLE_BOOKS_JSON)).await?;

    let resolver = HintResolver::new(vec![
        Box::new(NdlSource::new(hung, Duration::from_secs(1))?),
        Box::new(NdlSource::new(failing, Duration::from_secs(1))?),
        Box::new(GoogleBooksSource::new(good, Duration::from_secs(1))?),
    ]);

    let started = Instant::now();
    let hint = resolver.resolve_hint(&isbn()).await;

    assert_eq!(hint.title(), "Balancing Coupling in Software Design");
    assert_eq!(hint.authors(), &vec!["Vlad Khononov".to_string()]);
    assert!(started.elapsed() < Duration::from_secs(10));
    Ok(())
}

use std::time::{Duration, Instant};

use asset_fallback::domain::entities::ProbeResult;
use asset_fallback::domain::prober::ExistenceProber;
use asset_fallback::infrastructure::probe::{HttpProber, ProbeMethod};

fn prober(method: ProbeMethod) -> HttpProber {
    HttpProber::new(Duration::from_millis(500), Duration::from_millis(250), method).unwrap()
}

#[tokio::test]
async fn test_not_found_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("HEAD", "/img/missing.png")
        .with_status(404)
        .create_async()
        .await;

    let result = prober(ProbeMethod::Head)
        .check(&format!("{}/img/missing.png", server.url()))
        .await;

    assert_eq!(result, ProbeResult::NotFound);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_other_statuses_count_as_found() {
    let mut server = mockito::Server::new_async().await;
    let prober = prober(ProbeMethod::Head);

    for status in [200, 301, 403, 410, 500] {
        let path = format!("/img/{}.png", status);
        let mock = server
            .mock("HEAD", path.as_str())
            .with_status(status)
            .create_async()
            .await;

        let result = prober.check(&format!("{}{}", server.url(), path)).await;

        assert_eq!(result, ProbeResult::Found, "status {}", status);
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let mut server = mockito::Server::new_async().await;
    let redirect = server
        .mock("HEAD", "/old.png")
        .with_status(302)
        .with_header("location", "/gone.png")
        .create_async()
        .await;
    let target = server
        .mock("HEAD", "/gone.png")
        .with_status(404)
        .expect(0)
        .create_async()
        .await;

    let result = prober(ProbeMethod::Head)
        .check(&format!("{}/old.png", server.url()))
        .await;

    assert_eq!(result, ProbeResult::Found);
    redirect.assert_async().await;
    target.assert_async().await;
}

#[tokio::test]
async fn test_get_method() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/img/a.png")
        .with_status(404)
        .create_async()
        .await;

    let result = prober(ProbeMethod::Get)
        .check(&format!("{}/img/a.png", server.url()))
        .await;

    assert_eq!(result, ProbeResult::NotFound);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_indeterminate() {
    let result = prober(ProbeMethod::Head)
        .check("http://127.0.0.1:1/img/a.png")
        .await;

    assert_eq!(result, ProbeResult::Indeterminate);
}

#[tokio::test]
async fn test_silent_host_times_out_as_indeterminate() {
    // Accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accept = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let started = Instant::now();
    let result = prober(ProbeMethod::Head)
        .check(&format!("http://{}/img/a.png", addr))
        .await;

    assert_eq!(result, ProbeResult::Indeterminate);
    assert!(started.elapsed() < Duration::from_secs(5));

    accept.abort();
}

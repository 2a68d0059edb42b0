//! Integration tests for the simulated-behaviour and fixture endpoints.

use serde_json::Value;

mod common;

#[tokio::test]
async fn test_status_code_table() {
    let (base, _shutdown) = common::start_service().await;
    let client = common::manual_redirect_client();

    let res = client.get(format!("{base}/status/418")).send().await.unwrap();
    assert_eq!(res.status(), 418);
    assert_eq!(res.headers()["x-more-info"], "http://tools.ietf.org/html/rfc2324");
    assert_eq!(res.text().await.unwrap(), "I'm a teapot!");

    let res = client.get(format!("{base}/status/301")).send().await.unwrap();
    assert_eq!(res.status(), 301);
    assert_eq!(res.headers()["location"], "/redirect/1");

    let res = client.get(format!("{base}/status/401")).send().await.unwrap();
    assert_eq!(res.status(), 401);
    assert_eq!(res.headers()["www-authenticate"], r#"Basic realm="Fake Realm""#);

    // Unlisted codes pass through verbatim.
    let res = client.post(format!("{base}/status/999")).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 999);
    assert_eq!(res.text().await.unwrap(), "");

    let res = client.get(format!("{base}/status/nonsense")).send().await.unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn test_redirect_chain_hops() {
    let (base, _shutdown) = common::start_service().await;
    let client = common::manual_redirect_client();

    let res = client.get(format!("{base}/redirect/3")).send().await.unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "/relative-redirect/2");

    let res = client.get(format!("{base}/relative-redirect/5")).send().await.unwrap();
    assert_eq!(res.headers()["location"], "/relative-redirect/4");

    let res = client.get(format!("{base}/relative-redirect/1")).send().await.unwrap();
    assert_eq!(res.headers()["location"], "/get");
}

#[tokio::test]
async fn test_redirect_chain_followed_to_landing() {
    let (base, _shutdown) = common::start_service().await;
    // Default client follows redirects.
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("{base}/redirect/4")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.url().path().ends_with("/get"));
}

#[tokio::test]
async fn test_redirect_to_status_handling() {
    let (base, _shutdown) = common::start_service().await;
    let client = common::manual_redirect_client();

    let res = client
        .get(format!("{base}/redirect-to?url=/html&status_code=307"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 307);
    assert_eq!(res.headers()["location"], "/html");

    // Codes outside [300, 400) are ignored.
    let res = client
        .get(format!("{base}/redirect-to?url=/html&status_code=404"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);

    let res = client.get(format!("{base}/redirect-to")).send().await.unwrap();
    assert_eq!(res.headers()["location"], "/");
}

#[tokio::test]
async fn test_response_headers_self_reference() {
    let (base, _shutdown) = common::start_service().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("{base}/response-headers?Server=echobin&X-One=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["server"], "echobin");
    assert_eq!(res.headers()["content-type"], "application/json");

    let body = res.text().await.unwrap();
    let echoed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(echoed["X-One"], "1");
    // The echoed length describes the body itself.
    assert_eq!(echoed["Content-Length"], body.len().to_string());
}

#[tokio::test]
async fn test_base64_endpoint() {
    let (base, _shutdown) = common::start_service().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("{base}/base64/SFRUUEJJTiBpcyBhd2Vzb21l"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "HTTPBIN is awesome");

    let res = client.get(format!("{base}/base64/@@@@")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.text().await.unwrap(),
        "Incorrect Base64 data try: SFRUUEJJTiBpcyBhd2Vzb21l"
    );
}

#[tokio::test]
async fn test_image_negotiation() {
    let (base, _shutdown) = common::start_service().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("{base}/image"))
        .header("Accept", "image/webp,image/png")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["content-type"], "image/webp");

    let res = client
        .get(format!("{base}/image"))
        .header("Accept", "image/*")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["content-type"], "image/png");

    let res = client
        .get(format!("{base}/image"))
        .header("Accept", "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 406);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["accept"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_direct_image_endpoints() {
    let (base, _shutdown) = common::start_service().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    for (path, media_type, magic) in [
        ("/image/png", "image/png", &b"\x89PNG"[..]),
        ("/image/jpeg", "image/jpeg", &b"\xff\xd8"[..]),
        ("/image/webp", "image/webp", &b"RIFF"[..]),
    ] {
        let res = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(res.headers()["content-type"], media_type, "{path}");
        let bytes = res.bytes().await.unwrap();
        assert!(bytes.starts_with(magic), "{path}");
    }

    let res = client.get(format!("{base}/image/svg")).send().await.unwrap();
    assert_eq!(res.headers()["content-type"], "image/svg+xml");
}

#[tokio::test]
async fn test_fixture_endpoints() {
    let (base, _shutdown) = common::start_service().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("{base}/")).send().await.unwrap();
    assert!(res.headers()["content-type"].to_str().unwrap().starts_with("text/html"));

    let res = client.get(format!("{base}/html")).send().await.unwrap();
    assert!(res.text().await.unwrap().contains("Moby-Dick"));

    let res = client.get(format!("{base}/xml")).send().await.unwrap();
    assert_eq!(res.headers()["content-type"], "application/xml");
    assert!(res.text().await.unwrap().contains("<slideshow"));

    let res = client.get(format!("{base}/robots.txt")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "User-agent: *\nDisallow: /deny\n");

    let res = client.get(format!("{base}/deny")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "YOU SHOULDN'T BE HERE");

    let res = client.get(format!("{base}/json")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["slideshow"]["title"], "Sample Slide Show");
    assert_eq!(body["slideshow"]["slides"].as_array().unwrap().len(), 2);

    let res = client.get(format!("{base}/encoding/utf8")).send().await.unwrap();
    assert!(res.text().await.unwrap().contains("∮"));
}

#[tokio::test]
async fn test_unmatched_route_is_terminal_404() {
    let (base, _shutdown) = common::start_service().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("{base}/no/such/route")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), "Not Found.");
}

#[tokio::test]
async fn test_cors_decoration_is_applied() {
    let (base, _shutdown) = common::start_service().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("{base}/get"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
}

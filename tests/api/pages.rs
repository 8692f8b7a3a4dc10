use crate::helpers::spawn_app;

#[tokio::test]
async fn landing_page_renders_the_signup_form() {
    let app = spawn_app().await;

    let response = app.get_page("/").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        Some("text/html; charset=utf-8"),
        response
            .headers()
            .get("Content-Type")
            .and_then(|h| h.to_str().ok())
    );
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"id="waitlist-form""#));
    assert!(html.contains(r#"data-sitekey="1x00000000000000000000AA""#));
    assert!(html.contains("Please enter your email address"));
    assert!(html.contains("turnstile.remove(widgetId)"));
}

#[tokio::test]
async fn thank_you_page_confirms_the_signup() {
    let app = spawn_app().await;

    let response = app.get_page("/thank-you").await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("You're on the list!"));
}

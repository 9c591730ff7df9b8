use serde_json::json;

use crate::helpers::spawn_app;

fn valid_submission() -> serde_json::Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "I would like to know more about the beta.",
    })
}

#[tokio::test]
async fn submit_ok() {
    let app = spawn_app().await;

    let resp = app.post_form("submit", &valid_submission()).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Form submitted successfully! We'll get back to you soon."
    );
}

#[tokio::test]
async fn contact_ok() {
    let app = spawn_app().await;

    let resp = app.post_form("contact", &valid_submission()).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thank you for contacting us! We'll respond soon.");
}

#[tokio::test]
async fn optional_fields_accepted() {
    let app = spawn_app().await;

    let mut body = valid_submission();
    body["subject"] = json!("Beta access");
    body["phone"] = json!("+31 6 1234 5678");

    let resp = app.post_form("submit", &body).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn submit_invalid() {
    let app = spawn_app().await;

    for (body, expected) in [
        (json!({"email": "ada@example.com", "message": "hi"}), "Name is required"),
        (
            json!({"name": "Ada", "email": "not-an-email", "message": "hi"}),
            "Invalid email address",
        ),
        (
            json!({"name": "Ada", "email": "ada@example.com"}),
            "Message is required",
        ),
        (
            json!({"name": "Ada", "email": "ada@example.com", "message": "a".repeat(5001)}),
            "Message is too long",
        ),
        (
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "hi",
                "subject": "a".repeat(256),
            }),
            "Subject is too long",
        ),
        (
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "hi",
                "phone": "0".repeat(21),
            }),
            "Phone number is too long",
        ),
    ] {
        for endpoint in ["submit", "contact"] {
            let resp = app.post_form(endpoint, &body).await;
            assert_eq!(resp.status().as_u16(), 400, "{expected}");

            let body: serde_json::Value = resp.json().await.expect("parse body");
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], expected);
        }
    }
}

#[tokio::test]
async fn form_submission_never_touches_the_waitlist() {
    let app = spawn_app().await;

    let resp = app.post_form("submit", &valid_submission()).await;
    assert_eq!(resp.status().as_u16(), 200);
    let resp = app.post_form("contact", &valid_submission()).await;
    assert_eq!(resp.status().as_u16(), 200);

    assert_eq!(app.waitlist_count().await, 0);
}

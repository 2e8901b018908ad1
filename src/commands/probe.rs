//! Sample client exercising the HTTP surface of a running server.
//!
//! Sends one request per endpoint plus the interesting failure cases
//! (conflicting booking, missing field, unknown ids) and prints each
//! status code and body. The `Authorization` header is attached the way
//! a real client would, even though the server never checks it.

use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde_json::json;

const PROBE_TOKEN: &str = "Bearer tutordesk-probe";

#[derive(Debug, Args)]
pub struct ProbeArgs {
    /// Base URL of a running tutordesk server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    base_url: String,
}

#[tokio::main]
pub async fn cmd(args: ProbeArgs) -> Result<()> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static(PROBE_TOKEN));
    let client = Client::builder().default_headers(headers).build()?;
    let base = args.base_url.trim_end_matches('/');

    msg_print!(Message::ProbeTarget(base.to_string()));

    msg_print!(Message::ProbeCase("GET /teacher-list".to_string()), true);
    report(client.get(format!("{base}/teacher-list")).send().await?).await?;

    msg_print!(Message::ProbeCase("GET /teacher-details/1".to_string()), true);
    report(client.get(format!("{base}/teacher-details/1")).send().await?).await?;

    msg_print!(Message::ProbeCase("GET /teacher-details/999 (unknown teacher)".to_string()), true);
    report(client.get(format!("{base}/teacher-details/999")).send().await?).await?;

    let booking = json!({
        "student_id": 1,
        "teacher_id": 1,
        "timestamp": "2024-12-18 10:00",
    });
    msg_print!(Message::ProbeCase("POST /book-lesson".to_string()), true);
    report(client.post(format!("{base}/book-lesson")).json(&booking).send().await?).await?;

    msg_print!(Message::ProbeCase("POST /book-lesson (same slot again)".to_string()), true);
    report(client.post(format!("{base}/book-lesson")).json(&booking).send().await?).await?;

    let new_teacher = json!({
        "name": "Adam",
        "surname": "Newman",
        "subjects": "math, physics",
        "description": "Patient explainer",
        "rating": 4.2,
        "phone": "555123456",
        "hourly_rate": 40,
        "currency": "EUR",
        "email": "adam.newman@example.com",
        "availability_id": 3,
    });
    msg_print!(Message::ProbeCase("POST /add-teacher".to_string()), true);
    report(client.post(format!("{base}/add-teacher")).json(&new_teacher).send().await?).await?;

    let mut incomplete = new_teacher.clone();
    if let Some(body) = incomplete.as_object_mut() {
        body.remove("name");
    }
    msg_print!(Message::ProbeCase("POST /add-teacher (missing name)".to_string()), true);
    report(client.post(format!("{base}/add-teacher")).json(&incomplete).send().await?).await?;

    msg_print!(Message::ProbeCase("GET /get-lessons for student 1".to_string()), true);
    report(
        client
            .get(format!("{base}/get-lessons"))
            .query(&[
                ("student_id", "1"),
                ("start", "2024-12-10 08:00"),
                ("end", "2024-12-18 18:00"),
            ])
            .send()
            .await?,
    )
    .await?;

    msg_print!(Message::ProbeCase("GET /get-lessons for unknown student".to_string()), true);
    report(
        client
            .get(format!("{base}/get-lessons"))
            .query(&[
                ("student_id", "999"),
                ("start", "2024-12-10 08:00"),
                ("end", "2024-12-18 18:00"),
            ])
            .send()
            .await?,
    )
    .await?;

    Ok(())
}

async fn report(response: Response) -> Result<()> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    if body.is_empty() {
        msg_print!(Message::ProbeEmptyResponse(status));
    } else {
        msg_print!(Message::ProbeResponse(status, body));
    }
    Ok(())
}

//! Test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::sync::Arc;

use axum::{Router, body::Body};
use tempfile::TempDir;

use ytc::api::{AppState, app};
use ytc::calendar::{CalendarCatalog, CalendarSource};
use ytc::core::AppConfig;
use ytc::web::Templates;

/// A router plus the temporary directory backing its static files.
/// The directory is removed when this is dropped so keep it around
/// for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

/// Creates a test application router with temporary directories.
///
/// The download directory contains `flyer.pdf` with a `flyer.info`
/// description and `plan.txt` without one. Feeds are whatever
/// `catalog` points at, usually a `mockito` server.
pub fn test_app(catalog: CalendarCatalog) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let images_path = dir.path().join("images");
    let downloads_path = dir.path().join("downloads");
    fs::create_dir_all(&images_path).expect("Failed to create images directory");
    fs::create_dir_all(&downloads_path).expect("Failed to create downloads directory");

    fs::write(images_path.join("logo.png"), "png").unwrap();
    fs::write(downloads_path.join("flyer.pdf"), "pdf").unwrap();
    fs::write(downloads_path.join("flyer.info"), "Kursflyer 2024\n").unwrap();
    fs::write(downloads_path.join("plan.txt"), "plan").unwrap();

    let downloads_dir = downloads_path.display().to_string();
    let app_config = AppConfig {
        images_dir: images_path.display().to_string(),
        download_files_dir: downloads_dir.clone(),
        downloads_dir,
        github_api_url: String::from("http://127.0.0.1:1"),
        update_repo_owner: String::from("WillyWinkel"),
        update_repo_name: String::from("ytc"),
        update_interval_secs: 60,
    };
    let templates = Templates::embedded().expect("Failed to load templates");
    let app_state = AppState::new(app_config, catalog, templates);

    TestApp {
        router: app(Arc::new(app_state)),
        dir,
    }
}

/// Catalog with two calendars and a news feed served from `base_url`
/// as `/<id>.ics`.
pub fn test_catalog(base_url: &str) -> CalendarCatalog {
    let source = |id: &str, color: &str, btn_class: &str| {
        CalendarSource::new(id, &format!("{base_url}/{id}.ics"), color, btn_class)
    };
    CalendarCatalog::new(
        vec![
            source("wochenkurse", "#0d6efd", "primary"),
            source("sonderkurse", "#198754", "success"),
        ],
        source("news", "#6c757d", "secondary"),
    )
}

/// Minimal ICS document from `(summary, dtstart, dtend)` triples.
pub fn ics(events: &[(&str, &str, &str)]) -> String {
    let mut body = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//test//EN\r\n");
    for (i, (summary, start, end)) in events.iter().enumerate() {
        body.push_str(&format!(
            "BEGIN:VEVENT\r\nUID:{i}\r\nSUMMARY:{summary}\r\nDTSTART:{start}\r\nDTEND:{end}\r\nEND:VEVENT\r\n"
        ));
    }
    body.push_str("END:VCALENDAR\r\n");
    body
}

pub async fn mock_feed(server: &mut mockito::ServerGuard, id: &str, body: String) -> mockito::Mock {
    server
        .mock("GET", format!("/{id}.ics").as_str())
        .with_status(200)
        .with_header("content-type", "text/calendar")
        .with_body(body)
        .create_async()
        .await
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

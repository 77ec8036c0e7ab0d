//! End-to-end HTTP tests.

mod common;

use common::harness::{TestServerConfig, find_available_port, spawn_test_server};
use ranker::gateway::run_health_check;
use common::http_client::{RankRequest, TestClient, TestClientError};

const JOB_DESCRIPTION: &str = "Backend engineer building python services on aws with docker";

fn sample_resumes() -> TestServerConfig {
    TestServerConfig::default()
        .with_resume(
            "alice.pdf",
            "Backend engineer building python services on aws with docker and kubernetes",
        )
        .with_resume("bob.pdf", "Python data analyst, some docker")
        .with_resume("carol.pdf", "Pastry chef and bakery manager")
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let health = client.health().await.expect("Health check should succeed");

    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_health_check_against_live_server() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    assert_eq!(run_health_check(server.addr.port()).await, 0);
}

#[tokio::test]
async fn test_health_check_against_closed_port() {
    let port = find_available_port().await.expect("Should find a free port");

    assert_eq!(run_health_check(port).await, 1);
}

#[tokio::test]
async fn test_ready_reports_stub_embedder() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let ready = client.ready().await.expect("Ready check should succeed");

    assert_eq!(ready.status, "ok");
    assert_eq!(ready.components.http, "ready");
    assert_eq!(ready.components.embedder_mode, "stub");
}

#[tokio::test]
async fn test_list_resumes() {
    let server = spawn_test_server(sample_resumes().with_resume("notes.txt", "ignored"))
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let list = client.list_resumes().await.expect("List should succeed");

    let names: Vec<_> = list.resumes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
    assert_eq!(
        list.resumes[0].file,
        server.resume_path("alice.pdf").display().to_string()
    );
}

#[tokio::test]
async fn test_list_creates_missing_directory() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    std::fs::remove_dir_all(&server.resume_dir).unwrap();

    let client = TestClient::new(server.url());
    let list = client.list_resumes().await.expect("List should succeed");

    assert!(list.resumes.is_empty());
    assert!(server.resume_dir.is_dir());
}

#[tokio::test]
async fn test_rank_library_sorted_descending() {
    let server = spawn_test_server(sample_resumes())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest::new("Backend Engineer", JOB_DESCRIPTION, "Python, AWS, Docker");
    let ranked = client
        .rank_multipart(&request)
        .await
        .expect("Ranking should succeed");

    assert_eq!(ranked.results.len(), 3);
    assert!(ranked.errors.is_empty());
    assert_eq!(ranked.results[0].name, "alice");
    assert_eq!(ranked.results[0].file_name, "alice.pdf");
    assert_eq!(ranked.results[0].skills, vec!["Python", "AWS", "Docker"]);
    assert_eq!(ranked.results[2].name, "carol");

    for pair in ranked.results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for result in &ranked.results {
        assert!((0.0..=100.0).contains(&result.score));
        assert!((0.0..=100.0).contains(&result.similarity_score));
        assert!((0.0..=100.0).contains(&result.skill_match_percentage));
    }
}

#[tokio::test]
async fn test_urlencoded_matches_multipart() {
    let server = spawn_test_server(sample_resumes())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest::new("Backend Engineer", JOB_DESCRIPTION, "Python,AWS,Docker");

    let multipart = client.rank_multipart(&request).await.unwrap();
    let urlencoded = client.rank_urlencoded(&request).await.unwrap();

    assert_eq!(multipart, urlencoded);
}

#[tokio::test]
async fn test_rank_partial_skill_match() {
    let server = spawn_test_server(
        TestServerConfig::default().with_resume("dev.pdf", "Senior Python developer"),
    )
    .await
    .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest::new("Engineer", "cloud platform engineer", "Python,AWS,Docker");
    let ranked = client.rank_multipart(&request).await.unwrap();

    assert_eq!(ranked.results[0].skills, vec!["Python"]);
    assert_eq!(ranked.results[0].skill_match_percentage, 33.33);
}

#[tokio::test]
async fn test_rank_without_skills_uses_similarity_only() {
    let server = spawn_test_server(
        TestServerConfig::default().with_resume("dev.pdf", "rust systems programmer"),
    )
    .await
    .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest::new("Engineer", "rust systems programming", "");
    let ranked = client.rank_multipart(&request).await.unwrap();
    let result = &ranked.results[0];

    assert!(result.skills.is_empty());
    assert_eq!(result.skill_match_percentage, 0.0);
    assert!((result.score - result.similarity_score * 0.7).abs() < 0.02);
}

#[tokio::test]
async fn test_rank_empty_library() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let resp = TestClient::new(server.url())
        .raw()
        .post(format!("{}/rank-resumes", server.url()))
        .form(&[
            ("job_title", "Engineer"),
            ("job_description", "anything"),
            ("required_skills", "Rust"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"results": []}));
}

#[tokio::test]
async fn test_corrupt_resume_reported_separately() {
    let server = spawn_test_server(sample_resumes().with_raw_resume("broken.pdf", &[0xff, 0xfe]))
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest::new("Backend Engineer", JOB_DESCRIPTION, "Python");
    let ranked = client.rank_multipart(&request).await.unwrap();

    assert_eq!(ranked.results.len(), 3);
    assert_eq!(ranked.errors.len(), 1);
    assert_eq!(ranked.errors[0].name, "broken");
    assert_eq!(ranked.errors[0].kind, "extraction");
    assert!(ranked.results.iter().all(|r| r.name != "broken"));
}

#[tokio::test]
async fn test_uploaded_files_ranked_instead_of_library() {
    let server = spawn_test_server(sample_resumes())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest::new("Engineer", "go microservices", "Go")
        .with_file("gopher.pdf", b"go microservices and grpc")
        .with_file("painter.pdf", b"oil painting");
    let ranked = client.rank_multipart(&request).await.unwrap();

    let names: Vec<_> = ranked.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["gopher", "painter"]);
}

#[tokio::test]
async fn test_missing_description_is_rejected() {
    let server = spawn_test_server(sample_resumes())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest {
        job_description: None,
        ..RankRequest::new("Engineer", "", "Python")
    };

    let err = client.rank_multipart(&request).await.unwrap_err();
    match err {
        TestClientError::Unprocessable(body) => assert!(body.contains("job_description")),
        other => panic!("expected 422, got {other:?}"),
    }
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let server = spawn_test_server(sample_resumes())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let request = RankRequest::new("Backend Engineer", JOB_DESCRIPTION, "Python,AWS");

    let first = client.rank_multipart(&request).await.unwrap();
    let second = client.rank_multipart(&request).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let resp = TestClient::new(server.url())
        .raw()
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/rank-resumes", server.url()),
        )
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

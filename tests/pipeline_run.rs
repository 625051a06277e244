//! End-to-end behavior across the crate boundaries: fetch adapter ->
//! analytics pipeline -> report assembly.

use analytics::classify::LexiconScorer;
use report::ReportAssembler;
use social_client::SocialClient;
use socialscope_core::{CoreError, Credentials, Post, SocialNetwork};

#[tokio::test]
async fn unsupported_network_fetches_empty_and_pipeline_reports_it() {
    let client = SocialClient::new();
    let credentials = Credentials::default();

    // Unsupported networks are indistinguishable from an empty search.
    let posts = client
        .fetch_posts(SocialNetwork::Instagram, "rust", &credentials, 20)
        .await
        .unwrap();
    assert!(posts.is_empty());

    let scorer = LexiconScorer::new();
    let err = analytics::pipeline::run(SocialNetwork::Instagram, "rust", &posts, &scorer)
        .unwrap_err();
    assert!(matches!(err, CoreError::EmptyResult { .. }));
}

#[tokio::test]
async fn fetched_posts_flow_through_to_report_artifacts() {
    let posts = vec![
        Post {
            text: "I love #great days".to_string(),
            created_at: "2024-01-01 09:00".to_string(),
        },
        Post {
            text: "I hate bad days".to_string(),
            created_at: "2024-01-01 09:30".to_string(),
        },
    ];

    let scorer = LexiconScorer::new();
    let run = analytics::pipeline::run(SocialNetwork::Twitter, "days", &posts, &scorer).unwrap();
    assert_eq!(run.counts.positive, 1);
    assert_eq!(run.counts.negative, 1);
    assert_eq!(run.summary.hourly.get("09"), Some(&2));

    let dir = tempfile::tempdir().unwrap();
    let assembler = ReportAssembler::new(dir.path());
    let artifacts = assembler.write_report(&run).unwrap();
    assert_eq!(artifacts.len(), 2);

    let markdown = std::fs::read_to_string(&artifacts[1]).unwrap();
    assert!(markdown.contains("Total posts: 2"));
    assert!(markdown.contains("- 09h: 2"));
}

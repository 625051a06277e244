use analytics::classify::{classify, LexiconScorer, PolarityScorer};
use analytics::keywords;
use analytics::normalize::strip_urls;
use analytics::stats::StatsAggregator;
use socialscope_core::{AnalyticsError, Post, SentimentLabel};

fn post(text: &str, created_at: &str) -> Post {
    Post {
        text: text.to_string(),
        created_at: created_at.to_string(),
    }
}

#[test]
fn aggregate_empty_corpus_yields_zero_defaults() {
    let scorer = LexiconScorer::new();
    let (counts, summary) = StatsAggregator::new(&scorer).aggregate(&[]).unwrap();

    assert_eq!(counts.total(), 0);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.positive_pct, 0.0);
    assert_eq!(summary.negative_pct, 0.0);
    assert_eq!(summary.neutral_pct, 0.0);
    assert_eq!(summary.mean_length, 0.0);
    assert!(summary.top_positive.is_empty());
    assert!(summary.top_negative.is_empty());
    assert!(summary.top_overall.is_empty());
    assert!(summary.hourly.is_empty());
}

#[test]
fn percentages_sum_to_one_hundred_when_nonempty() {
    let scorer = LexiconScorer::new();
    let posts = vec![
        post("I love this", "2024-01-01 08:00"),
        post("this is terrible", "2024-01-01 09:00"),
        post("the sky has clouds", "2024-01-01 10:00"),
        post("what a great day", "2024-01-01 11:00"),
        post("completely neutral words here", "2024-01-01 12:00"),
        post("awful awful awful", "2024-01-01 13:00"),
        post("nothing much", "2024-01-01 14:00"),
    ];
    let (_, summary) = StatsAggregator::new(&scorer).aggregate(&posts).unwrap();

    let sum = summary.positive_pct + summary.negative_pct + summary.neutral_pct;
    assert!((sum - 100.0).abs() < 0.01, "percentages summed to {}", sum);
}

#[test]
fn two_post_fixture_matches_expected_summary() {
    let scorer = LexiconScorer::new();
    let posts = vec![
        post("I love #great days", "2024-01-01 09:00"),
        post("I hate bad days", "2024-01-01 09:30"),
    ];
    let (counts, summary) = StatsAggregator::new(&scorer).aggregate(&posts).unwrap();

    assert_eq!(counts.positive, 1);
    assert_eq!(counts.negative, 1);
    assert_eq!(counts.neutral, 0);

    assert_eq!(summary.hourly.len(), 1);
    assert_eq!(summary.hourly.get("09"), Some(&2));

    let expected_mean =
        ("I love #great days".chars().count() + "I hate bad days".chars().count()) as f64 / 2.0;
    assert_eq!(summary.mean_length, expected_mean);

    // Keywords bucket per label: hashtags and >3-char words, lowercased.
    assert!(summary
        .top_positive
        .iter()
        .any(|(keyword, _)| keyword == "#great"));
    assert!(summary
        .top_negative
        .iter()
        .any(|(keyword, _)| keyword == "days"));
}

#[test]
fn malformed_timestamp_aborts_the_run() {
    let scorer = LexiconScorer::new();
    let posts = vec![
        post("a perfectly fine post", "2024-01-01 10:00"),
        post("broken clock", "not-a-date"),
    ];
    let err = StatsAggregator::new(&scorer).aggregate(&posts).unwrap_err();
    assert!(matches!(
        err,
        AnalyticsError::MalformedTimestamp { ref value } if value == "not-a-date"
    ));
}

#[test]
fn top_five_ranking_is_deterministic_across_runs() {
    let scorer = LexiconScorer::new();
    let posts = vec![
        post("rust rust rust tokio tokio serde", "2024-01-01 10:00"),
        post("serde tokio hyper hyper axum", "2024-01-01 11:00"),
        post("axum tower sled sled sled", "2024-01-01 12:00"),
    ];

    let (_, first) = StatsAggregator::new(&scorer).aggregate(&posts).unwrap();
    let (_, second) = StatsAggregator::new(&scorer).aggregate(&posts).unwrap();

    assert_eq!(first.top_overall, second.top_overall);
    assert_eq!(first.top_overall.len(), 5);
    // Frequency ties resolve by first-encountered order.
    assert_eq!(first.top_overall[0], ("rust".to_string(), 3));
    assert_eq!(first.top_overall[1], ("tokio".to_string(), 3));
    assert_eq!(first.top_overall[2], ("sled".to_string(), 3));
}

#[test]
fn keyword_extraction_is_idempotent_on_normalized_text() {
    for text in [
        "Loving #rustlang https://rust-lang.org so much",
        "plain words only",
        "www.example.com leading URL",
        "",
    ] {
        let once = keywords::extract(&strip_urls(text));
        let twice = keywords::extract(&strip_urls(&strip_urls(text)));
        assert_eq!(once, twice);
    }
}

#[test]
fn classification_reads_raw_text_while_keywords_read_stripped_text() {
    // The URL contributes characters to the mean length and is visible to
    // the classifier, but never reaches the keyword tables.
    let scorer = LexiconScorer::new();
    let text = "great stuff at https://example.com/amazing-page";
    let posts = vec![post(text, "2024-01-01 10:00")];

    let (counts, summary) = StatsAggregator::new(&scorer).aggregate(&posts).unwrap();
    assert_eq!(counts.positive, 1);
    assert_eq!(summary.mean_length, text.chars().count() as f64);
    assert!(summary
        .top_overall
        .iter()
        .all(|(keyword, _)| !keyword.contains("example.com")));
}

#[test]
fn zero_polarity_always_classifies_neutral() {
    struct FlatScorer;
    impl PolarityScorer for FlatScorer {
        fn polarity(&self, _text: &str) -> f64 {
            0.0
        }
    }

    let scorer = FlatScorer;
    for text in ["", "anything at all", "#tags #only", "42"] {
        assert_eq!(classify(&scorer, text), SentimentLabel::Neutral);
    }
}

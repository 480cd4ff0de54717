//! One-shot query + derived dashboard printout.

use std::time::Duration;

use civicpulse_aggregator::AggregatorClient;
use civicpulse_analytics::derive_snapshot;
use civicpulse_analytics::types::AnalyticsSnapshot;

/// Fetch one query from the aggregation service and print the dashboard
/// summary.
///
/// # Errors
///
/// Returns an error if config is missing/invalid or every platform adapter
/// fails.
pub async fn run_query(query: &str, limit_override: Option<u32>) -> anyhow::Result<()> {
    let config = civicpulse_core::load_app_config()?;
    let client = AggregatorClient::new(
        &config.aggregator_url,
        Duration::from_secs(config.fetch_timeout_secs),
        limit_override.unwrap_or(config.fetch_limit),
    );

    let result = client.fetch_social_data(query).await?;
    let posts = result.all_posts();
    let snapshot = derive_snapshot(&result);

    println!("query: {query}");
    println!(
        "posts: {} collected ({} reported upstream)",
        posts.len(),
        result.total_count()
    );
    print_snapshot(&snapshot);

    Ok(())
}

fn print_snapshot(snapshot: &AnalyticsSnapshot) {
    println!("\nKPIs");
    println!("  public sentiment     {:>3}%", snapshot.kpis.public_sentiment);
    println!("  opposition momentum  {:>3}%", snapshot.kpis.opposition_momentum);
    println!("  misinformation risk  {:>3}%", snapshot.kpis.misinformation_risk);
    println!("  crisis escalation    {:>3}%", snapshot.kpis.crisis_escalation);

    if !snapshot.hashtags.is_empty() {
        println!("\ntop hashtags");
        for tag in snapshot.hashtags.iter().take(5) {
            println!(
                "  {:<24} volume {:>6}  growth {:>+7.1}  {}",
                tag.tag, tag.volume, tag.growth, tag.sentiment
            );
        }
    }

    if !snapshot.topics.is_empty() {
        println!("\ntopics");
        for topic in &snapshot.topics {
            println!(
                "  {:<16} {:<14} volume {:>6}  {:?}",
                topic.name, topic.category, topic.volume, topic.trend
            );
        }
    }

    if !snapshot.influencers.is_empty() {
        println!("\ninfluencers");
        for influencer in snapshot.influencers.iter().take(5) {
            println!(
                "  {:<20} @{:<18} reach {:>8}  avg engagement {:.1}",
                influencer.name, influencer.handle, influencer.reach, influencer.engagement
            );
        }
    }

    if !snapshot.misinformation.is_empty() {
        println!("\nmisinformation candidates");
        for claim in &snapshot.misinformation {
            println!("  [{:?}] {}", claim.severity, claim.claim);
        }
    }

    if !snapshot.breaking_news.is_empty() {
        println!("\nbreaking news");
        for alert in &snapshot.breaking_news {
            println!("  [{:?}] {} — {}", alert.severity, alert.source, alert.headline);
        }
    }
}

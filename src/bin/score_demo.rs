//! Demo that runs the mock search for a query and prints each trust breakdown.
//!
//! Usage: `cargo run --bin score_demo -- "Nike Air Max"`

use recensor::search::{search_and_score, MockProductSource};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = if args.is_empty() {
        "iPhone 15".to_string()
    } else {
        args.join(" ")
    };

    let results = search_and_score(&MockProductSource::new(), &query).await;

    for p in &results {
        println!(
            "{:>3}/100 {:<12} {} ({} stars, {} reviews, {})",
            p.trust_score,
            p.label.as_str(),
            p.product.title,
            p.product.rating,
            p.product.review_count,
            p.product.price
        );
        println!(
            "        rating {:.1} | volume {:.0} | authenticity {:.0} | sentiment {:.0}",
            p.trust.rating, p.trust.volume, p.trust.authenticity, p.trust.sentiment
        );
        for f in &p.trust.factors {
            println!("        - {f}");
        }
    }

    println!("score-demo done ({} products)", results.len());
}

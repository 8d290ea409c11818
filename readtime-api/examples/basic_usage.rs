//! Basic usage example for readtime-api

use readtime_api::{
    estimate, estimate_with, Config, EstimateOption, Estimator, WhitespaceOrPunctuation,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let article = "Reading time is a rough guide.  It counts words,\n\
                   divides by a reading speed and rounds up.\n";

    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let result = estimate(article);
    println!("{} words, {}", result.words, result);

    // Method 2: Ordered overrides, last one wins
    println!("\n=== Method 2: Options ===");
    let result = estimate_with(
        article,
        [
            EstimateOption::words_per_minute(100),
            EstimateOption::words_per_minute(10),
        ],
    )?;
    println!("{} words at 10 wpm, {}", result.words, result);

    // Method 3: Reusable estimator with custom configuration
    println!("\n=== Method 3: Custom Configuration ===");
    let estimator = Estimator::with_config(
        Config::builder()
            .words_per_minute(250)
            .word_bound(WhitespaceOrPunctuation)
            .build()?,
    );
    let long_article = article.repeat(40);
    let result = estimator.estimate(&long_article);
    println!("{} words, {} ({:?})", result.words, result, result.duration);

    #[cfg(feature = "serde")]
    println!("\n{}", result.to_json()?);

    Ok(())
}

//! One-shot classification of an image file.

use std::path::Path;

use anyhow::Result;
use emoji_hunt_core::{ClassificationResult, Classifier, Frame, GameSettings, HttpClassifier};

pub async fn run(mut settings: GameSettings, image: &Path, endpoint: Option<String>) -> Result<()> {
    if let Some(endpoint) = endpoint {
        settings.classifier.endpoint = endpoint;
    }

    let frame = Frame::from_file(image)?;
    let classifier = HttpClassifier::new(&settings.classifier)?;

    match classifier.classify(frame).await? {
        ClassificationResult::Symbol(symbol) => println!("{}", symbol),
        ClassificationResult::Unclear => println!("? (no confident answer)"),
    }
    Ok(())
}

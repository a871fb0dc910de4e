// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards recognition.
//!
//! A [CardRecognizer] turns a picture of the board into text with one
//! `"<rank> of <suit>"` line per card, the text is parsed into cards before
//! they are passed to the simulator.
use anyhow::{Context, Result};
use std::future::Future;

use pocketeq_eval::Card;

/// A service that recognizes cards in an image.
pub trait CardRecognizer {
    /// Recognizes the cards in `image` and returns the recognized text.
    fn recognize(&self, image: &[u8]) -> impl Future<Output = Result<String>> + Send;
}

/// A recognizer for images that have already been transcribed to text by an
/// external service.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranscriptRecognizer;

impl CardRecognizer for TranscriptRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(image).context("Transcript is not valid UTF-8")?;
        Ok(text.to_string())
    }
}

/// Recognizes the cards in `image` using the given recognizer.
pub async fn recognize_cards<R: CardRecognizer>(
    recognizer: &R,
    image: &[u8],
) -> Result<Vec<Card>> {
    let text = recognizer
        .recognize(image)
        .await
        .context("Cards recognition failed")?;
    parse_card_lines(&text)
}

/// Parses one card per line, blank lines and list markers are skipped.
pub fn parse_card_lines(text: &str) -> Result<Vec<Card>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, strip_list_marker(line)))
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| {
            line.parse::<Card>()
                .with_context(|| format!("Invalid card at line {n}: '{line}'"))
        })
        .collect()
}

/// Strips bullets (`-`, `*`, `•`) and numbers (`1.`, `2)`) from a list item.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim().trim_start_matches(['-', '*', '•']).trim_start();

    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    match line[digits..].strip_prefix(['.', ')']) {
        Some(item) if digits > 0 => item.trim(),
        _ => line.trim_end(),
    }
}

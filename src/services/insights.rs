// SPDX-License-Identifier: MIT

//! AI trip insights via the Gemini generateContent endpoint.
//!
//! Insights are a best-effort enrichment: a missing API key or a failed
//! upstream call yields fallback text rather than an error, so the trail
//! page always renders.

use serde::{Deserialize, Serialize};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-2.0-flash";

const GUIDE_PREAMBLE: &str = "You are a knowledgeable hiking guide who helps users prepare for trail adventures in Canadian national parks.";

/// Trail details as posted by the frontend for insight generation.
///
/// Lenient on purpose: the frontend sends whatever trail record it holds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightTrail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub park: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub description: String,
}

/// A user review included in the prompt.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub text: String,
}

/// Assemble the insight prompt from trail details and reviews.
pub fn build_prompt(trail: &InsightTrail, reviews: &[Review]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Trail Name: {}", trail.name));
    lines.push(format!("Park: {}", trail.park));
    lines.push(format!("Province: {}", trail.province));
    lines.push(format!("Length: {} km", trail.length));
    lines.push(format!("Difficulty: {}", trail.difficulty));
    lines.push(format!("Season: {}", trail.season));
    lines.push(format!("Description: {}", trail.description));
    lines.push("\nUser Reviews:".to_string());
    for (idx, review) in reviews.iter().enumerate() {
        lines.push(format!(
            "{}. ({} stars) {}",
            idx + 1,
            review.rating,
            review.text
        ));
    }
    lines.push("\nBased on the above, provide:".to_string());
    lines.push("1. Expected weather and wildlife encounters.".to_string());
    lines.push(
        "2. Essential packing list (including safety items like bear spray).".to_string(),
    );
    lines.push("3. Summary of visitor experience insights.".to_string());

    format!("{}\n\n{}", GUIDE_PREAMBLE, lines.join("\n"))
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini-backed insight generator.
#[derive(Clone)]
pub struct InsightsService {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl InsightsService {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Generate insight text; never fails.
    pub async fn generate(&self, trail: &InsightTrail, reviews: &[Review]) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("No Google API key configured, skipping AI insights");
            return "AI insights unavailable (no API key configured)".to_string();
        };

        let prompt = build_prompt(trail, reviews);

        match self.request_insights(api_key, prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "AI insight generation failed");
                format!("AI insights unavailable (error: {})", e)
            }
        }
    }

    async fn request_insights(&self, api_key: &str, prompt: String) -> anyhow::Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_BASE_URL, GEMINI_MODEL, api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Gemini returned status {}", response.status());
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text: String = parsed
            .candidates
            .into_iter()
            .flat_map(|c| c.content.map(|c| c.parts).unwrap_or_default())
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            anyhow::bail!("Gemini returned no text candidates");
        }

        Ok(text)
    }
}

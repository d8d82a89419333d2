use reds_common::{Score, SignedGameResult};

/// POST the signed result to the server. Exactly one request: transport
/// failures propagate, the response comes back to the caller unread.
pub async fn submit(server_url: &str, payload: &SignedGameResult) -> std::result::Result<reqwest::Response, Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let url = format!("{server_url}/api/submit");

    let response = client.post(&url).json(payload).send().await?;
    Ok(response)
}

pub async fn top_scores(server_url: &str) -> std::result::Result<Vec<Score>, Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let url = format!("{server_url}/api/top");

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(format!("Server error: {}", response.status()).into());
    }

    let scores: Vec<Score> = response.json().await?;
    Ok(scores)
}

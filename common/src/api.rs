use serde::{Deserialize, Serialize};

/// One row of the server's top-scores table, as `GET /api/top` returns it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Score {
    pub id: i32,
    pub name: String,
    pub score: i64,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_response() {
        let body = r#"[
            {"id": 1, "name": "alice", "score": 4200, "created_at": "2021-05-11T10:00:00Z"},
            {"id": 2, "name": "bob", "score": 100, "created_at": "2021-05-12T09:30:00Z"}
        ]"#;

        let scores: Vec<Score> = serde_json::from_str(body).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].name, "alice");
        assert_eq!(scores[0].score, 4200);
        assert_eq!(scores[1].id, 2);
    }
}

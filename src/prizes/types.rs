use serde::{Deserialize, Serialize};

/// A configured prize: a display name with an associated win probability.
///
/// `id` is the stable mutation key and stays fixed across edits. The
/// documented probability domain is [0, 1]; the remainder after summing all
/// prizes is the implicit "no win" mass. Field names are part of the
/// persisted format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub id: String,
    pub name: String,
    pub probability: f64,
}

impl Prize {
    pub fn new(id: impl Into<String>, name: impl Into<String>, probability: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            probability,
        }
    }
}

/// The five-entry default prize set used when no saved state exists.
pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new("1", "一等奖", 0.05),
        Prize::new("2", "二等奖", 0.1),
        Prize::new("3", "三等奖", 0.15),
        Prize::new("4", "四等奖", 0.2),
        Prize::new("5", "五等奖", 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_five_prizes_summing_to_one() {
        let prizes = default_prizes();
        assert_eq!(prizes.len(), 5);
        let sum: f64 = prizes.iter().map(|p| p.probability).sum();
        assert!((sum - 1.0).abs() < 1e-9, "default sum should be 1, got {sum}");
    }

    #[test]
    fn serde_field_names_are_stable() {
        let prize = Prize::new("1", "一等奖", 0.05);
        let json = serde_json::to_string(&prize).unwrap();
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"probability\""));
    }

    #[test]
    fn deserializes_previously_saved_records() {
        // Shape written by earlier versions of the app.
        let json = r#"[{"id":"1","name":"一等奖","probability":0.05},
                       {"id":"2","name":"二等奖","probability":0.1}]"#;
        let prizes: Vec<Prize> = serde_json::from_str(json).unwrap();
        assert_eq!(prizes.len(), 2);
        assert_eq!(prizes[0].name, "一等奖");
        assert!((prizes[1].probability - 0.1).abs() < f64::EPSILON);
    }
}

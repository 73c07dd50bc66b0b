use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed course catalog. Serializes to the value identifier the backend expects.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    #[serde(rename = "fullstack course")]
    Fullstack,
    #[serde(rename = "Frontend course")]
    Frontend,
    #[serde(rename = "Backend course")]
    Backend,
    #[serde(rename = "DevOps course")]
    DevOps,
    #[serde(rename = "Web3 course")]
    Web3,
}

impl Course {
    pub const ALL: [Course; 5] = [
        Course::Fullstack,
        Course::Frontend,
        Course::Backend,
        Course::DevOps,
        Course::Web3,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Course::Fullstack => "fullstack course",
            Course::Frontend => "Frontend course",
            Course::Backend => "Backend course",
            Course::DevOps => "DevOps course",
            Course::Web3 => "Web3 course",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Course::Fullstack => "Fullstack",
            Course::Frontend => "Frontend",
            Course::Backend => "Backend",
            Course::DevOps => "DevOps",
            Course::Web3 => "Web3",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Course::Fullstack => "Ship complete products, from the database to the browser.",
            Course::Frontend => "Build fast, accessible interfaces people enjoy using.",
            Course::Backend => "Design APIs and services that hold up under real traffic.",
            Course::DevOps => "Automate builds, deployments and the infrastructure behind them.",
            Course::Web3 => "Write and audit smart contracts and the apps around them.",
        }
    }
}

/// Body of `POST /referdata`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequest {
    pub name: String,
    pub referred_to: String,
    pub email: String,
    pub courses: Vec<Course>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReferralResponse {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReferralResponse {
    /// `status` is boolean-like: anything falsy, or a missing field, means the backend refused.
    pub fn is_accepted(&self) -> bool {
        match &self.status {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: Value) -> ReferralResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn request_uses_backend_field_names() {
        let request = ReferralRequest {
            name: "Ada".to_string(),
            referred_to: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            courses: vec![Course::Frontend, Course::DevOps],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Ada",
                "referredTo": "Grace",
                "email": "grace@example.com",
                "courses": ["Frontend course", "DevOps course"],
            })
        );
    }

    #[test]
    fn course_value_matches_serialized_form() {
        for course in Course::ALL {
            assert_eq!(serde_json::to_value(course).unwrap(), json!(course.value()));
        }
    }

    #[test]
    fn labels_differ_from_wire_values() {
        for course in Course::ALL {
            assert_ne!(course.label(), course.value());
        }
    }

    #[test]
    fn status_truthiness() {
        assert!(response(json!({"status": true})).is_accepted());
        assert!(response(json!({"status": 1})).is_accepted());
        assert!(response(json!({"status": "ok"})).is_accepted());

        assert!(!response(json!({"status": false})).is_accepted());
        assert!(!response(json!({"status": 0})).is_accepted());
        assert!(!response(json!({"status": ""})).is_accepted());
        assert!(!response(json!({"status": null})).is_accepted());
        assert!(!response(json!({})).is_accepted());
    }

    #[test]
    fn message_is_optional() {
        let resp = response(json!({"status": false, "message": "Already referred"}));
        assert_eq!(resp.message.as_deref(), Some("Already referred"));
        assert!(response(json!({"status": true})).message.is_none());
    }
}

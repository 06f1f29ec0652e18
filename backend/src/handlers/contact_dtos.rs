use serde::Deserialize;

use crate::error::ApiError;
use crate::repositories::recent_applications::phone_key;

pub const MINIMUM_AGE: u32 = 18;

pub const EXPERIENCE_BRACKETS: &[&str] = &["0~2年", "3~5年", "6~8年", "9~12年", "13年以上"];
pub const POSITIONS: &[&str] = &["アシスタント", "スタイリスト", "保育士", "その他"];
pub const LICENSES: &[&str] = &["美容師免許", "管理美容師", "保育士資格", "幼稚園教諭免許"];

/// `age` arrives as a number from the form, but older clients sent the raw
/// input string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeField {
    Number(i64),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub experience: String,
    pub licenses: Vec<String>,
    pub position: String,
    pub age: Option<AgeField>,
    pub message: String,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub experience: String,
    pub licenses: Vec<String>,
    pub position: Option<String>,
    pub age: u32,
    pub message: String,
}

impl Application {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ContactRequest {
    pub fn validate(self) -> Result<Application, ApiError> {
        let age = match &self.age {
            None => None,
            Some(AgeField::Number(n)) => Some(*n),
            Some(AgeField::Text(text)) if text.trim().is_empty() => None,
            Some(AgeField::Text(text)) => Some(
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| ApiError::Validation(format!("年齢が不正です: {}", text)))?,
            ),
        };

        let mut missing = Vec::new();
        for (name, value) in [
            ("lastName", &self.last_name),
            ("firstName", &self.first_name),
            ("phone", &self.phone),
            ("experience", &self.experience),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if age.is_none() {
            missing.push("age");
        }
        if !missing.is_empty() {
            return Err(ApiError::Validation(format!(
                "必須項目が未入力です: {}",
                missing.join(", ")
            )));
        }

        let age = match age {
            Some(age) if age >= i64::from(MINIMUM_AGE) => {
                u32::try_from(age).map_err(|_| ApiError::Validation(format!("年齢が不正です: {}", age)))?
            }
            _ => {
                return Err(ApiError::Validation(format!(
                    "{}歳以上の方が対象です",
                    MINIMUM_AGE
                )))
            }
        };

        if phone_key(&self.phone).is_empty() {
            return Err(ApiError::Validation(format!("電話番号が不正です: {}", self.phone.trim())));
        }

        let experience = self.experience.trim().to_string();
        if !EXPERIENCE_BRACKETS.contains(&experience.as_str()) {
            return Err(ApiError::Validation(format!("不正な選択肢です: experience={}", experience)));
        }

        let position = non_empty(&self.position);
        if let Some(position) = &position {
            if !POSITIONS.contains(&position.as_str()) {
                return Err(ApiError::Validation(format!("不正な選択肢です: position={}", position)));
            }
        }

        let mut licenses: Vec<String> = Vec::with_capacity(self.licenses.len());
        for license in self.licenses {
            if !LICENSES.contains(&license.as_str()) {
                return Err(ApiError::Validation(format!("不正な選択肢です: licenses={}", license)));
            }
            if !licenses.contains(&license) {
                licenses.push(license);
            }
        }

        Ok(Application {
            last_name: self.last_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: non_empty(&self.email),
            experience,
            licenses,
            position,
            age,
            message: self.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> ContactRequest {
        serde_json::from_value(body).unwrap()
    }

    fn valid() -> serde_json::Value {
        json!({
            "lastName": "山田",
            "firstName": "花子",
            "phone": "090-1234-5678",
            "email": "",
            "experience": "3~5年",
            "licenses": ["美容師免許"],
            "position": "スタイリスト",
            "age": 29,
            "message": "",
        })
    }

    #[test]
    fn accepts_a_complete_application() {
        let application = request(valid()).validate().unwrap();
        assert_eq!(application.full_name(), "山田 花子");
        assert_eq!(application.age, 29);
        assert_eq!(application.email, None);
        assert_eq!(application.position.as_deref(), Some("スタイリスト"));
    }

    #[test]
    fn numeric_string_age_is_accepted() {
        let mut body = valid();
        body["age"] = json!(" 31 ");
        assert_eq!(request(body).validate().unwrap().age, 31);
    }

    #[test]
    fn lists_every_missing_field() {
        let mut body = valid();
        body["phone"] = json!("  ");
        body["age"] = json!("");
        let err = request(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "必須項目が未入力です: phone, age");
    }

    #[test]
    fn absent_keys_count_as_missing() {
        let err = request(json!({})).validate().unwrap_err();
        assert!(err.to_string().contains("lastName"));
    }

    #[test]
    fn phone_without_digits_is_rejected() {
        let mut body = valid();
        body["phone"] = json!("なし");
        let err = request(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "電話番号が不正です: なし");
    }

    #[test]
    fn full_width_phone_is_accepted() {
        let mut body = valid();
        body["phone"] = json!("０９０-１２３４-５６７８");
        assert!(request(body).validate().is_ok());
    }

    #[test]
    fn underage_applicants_are_rejected() {
        let mut body = valid();
        body["age"] = json!(17);
        let err = request(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "18歳以上の方が対象です");
    }

    #[test]
    fn unknown_choices_are_rejected() {
        let mut body = valid();
        body["licenses"] = json!(["調理師免許"]);
        assert!(request(body).validate().is_err());

        let mut body = valid();
        body["experience"] = json!("20年");
        assert!(request(body).validate().is_err());
    }

    #[test]
    fn repeated_licenses_collapse() {
        let mut body = valid();
        body["licenses"] = json!(["管理美容師", "管理美容師", "美容師免許"]);
        let application = request(body).validate().unwrap();
        assert_eq!(application.licenses, vec!["管理美容師", "美容師免許"]);
    }
}

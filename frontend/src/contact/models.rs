use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MINIMUM_AGE: u32 = 18;

macro_rules! labelled_choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|choice| choice.label() == label)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_choice! {
    /// Years working as a hairdresser.
    ExperienceBracket {
        UpToTwo => "0~2年",
        ThreeToFive => "3~5年",
        SixToEight => "6~8年",
        NineToTwelve => "9~12年",
        ThirteenPlus => "13年以上",
    }
}

labelled_choice! {
    Position {
        Assistant => "アシスタント",
        Stylist => "スタイリスト",
        Childcare => "保育士",
        Other => "その他",
    }
}

pub const LICENSES: &[&str] = &["美容師免許", "管理美容師", "保育士資格", "幼稚園教諭免許"];

/// Form controls, named by their `name` attribute (which is also the JSON key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    LastName,
    FirstName,
    Phone,
    Email,
    Experience,
    Licenses,
    Position,
    Age,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::LastName => "lastName",
            Field::FirstName => "firstName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Experience => "experience",
            Field::Licenses => "licenses",
            Field::Position => "position",
            Field::Age => "age",
            Field::Message => "message",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "lastName" => Field::LastName,
            "firstName" => Field::FirstName,
            "phone" => Field::Phone,
            "email" => Field::Email,
            "experience" => Field::Experience,
            "licenses" => Field::Licenses,
            "position" => Field::Position,
            "age" => Field::Age,
            "message" => Field::Message,
            other => return Err(format!("unknown form field: {other}")),
        })
    }
}

/// Kind of control an input event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Radio,
    TextArea,
    Checkbox { checked: bool },
}

/// Multi-select values with set semantics; keeps the order they were checked in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Licenses(Vec<String>);

impl Licenses {
    pub fn insert(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|item| item != value);
        before != self.0.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|item| item == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Applicant data as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub experience: Option<ExperienceBracket>,
    pub licenses: Licenses,
    pub position: Option<Position>,
    pub age: Option<u32>,
    pub message: String,
}

impl ContactForm {
    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            experience: self.experience.map(|e| e.label().to_string()).unwrap_or_default(),
            message: self.message.clone(),
            licenses: self.licenses.as_slice().to_vec(),
            position: self.position.map(|p| p.label().to_string()).unwrap_or_default(),
            age: self.age,
        }
    }
}

/// Body of `POST /api/contact`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub experience: String,
    pub message: String,
    pub licenses: Vec<String>,
    pub position: String,
    pub age: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub message: Option<String>,
}

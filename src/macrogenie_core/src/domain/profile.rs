#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Please fill in all the required fields.")]
    MissingFields(Vec<&'static str>),
}

/// Onboarding details finished after registration or Google sign-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetails {
    pub first_name: String,
    pub last_name: String,
    pub birthdate: String,
    pub height: String,
    pub kilos: String,
    pub gender: String,
}

impl ProfileDetails {
    pub const FIELDS: [&'static str; 6] = [
        "first_name",
        "last_name",
        "birthdate",
        "height",
        "kilos",
        "gender",
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "birthdate" => &self.birthdate,
            "height" => &self.height,
            "kilos" => &self.kilos,
            "gender" => &self.gender,
            _ => "",
        }
    }

    /// Names of the fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .into_iter()
            .filter(|name| self.field(name).trim().is_empty())
            .collect()
    }

    pub fn ensure_complete(&self) -> Result<(), ProfileError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::MissingFields(missing))
        }
    }
}

/// Profile as the backend currently knows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileStatus {
    pub details: ProfileDetails,
    /// Fields already saved; the UI keeps these read-only.
    pub completed_fields: Vec<String>,
}

impl ProfileStatus {
    pub fn is_completed(&self, field: &str) -> bool {
        self.completed_fields.iter().any(|completed| completed == field)
    }
}

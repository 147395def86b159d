use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Error, NewAccount};

/// Width of the `firstname` / `lastname` columns.
pub const MAX_NAME_LEN: usize = 25;

/// Body of `POST /account` and `PUT /account/{id}`.
///
/// Absent fields decode as empty strings, so an update always overwrites both names.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateAccountRequest {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            if value.chars().count() > MAX_NAME_LEN {
                return Err(Error::Validation(format!(
                    "{field} must be at most {MAX_NAME_LEN} characters"
                )));
            }
        }
        Ok(())
    }

    pub fn into_new_account(self) -> NewAccount {
        NewAccount::new(self.first_name, self.last_name)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let req: CreateAccountRequest = serde_json::from_str(r#"{"first_name":"Ada"}"#).unwrap();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "");
    }

    #[test]
    fn wrong_types_fail_to_decode() {
        assert!(serde_json::from_str::<CreateAccountRequest>(r#"{"first_name":1}"#).is_err());
        assert!(serde_json::from_str::<CreateAccountRequest>("not json").is_err());
    }

    #[test]
    fn rejects_names_wider_than_column() {
        let req = CreateAccountRequest {
            first_name: "a".repeat(MAX_NAME_LEN + 1),
            last_name: "b".into(),
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, Error::Validation(ref msg) if msg.starts_with("first_name")));

        let req = CreateAccountRequest {
            first_name: "a".repeat(MAX_NAME_LEN),
            last_name: "é".repeat(MAX_NAME_LEN),
        };
        assert!(req.validate().is_ok());
    }
}

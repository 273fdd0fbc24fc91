//! DTOs for the link CRUD endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, message = "should not be empty"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "should not be empty"),
        url(message = "must be a well-formed absolute URL")
    )]
    pub url: String,
}

/// Request body for `PUT /links/{id}`.
///
/// Both fields are required: an update replaces `name` and `url`
/// wholesale, never partially.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, message = "should not be empty"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "should not be empty"),
        url(message = "must be a well-formed absolute URL")
    )]
    pub url: String,
}

/// JSON representation of a stored link: `{ id, name, url }`.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            name: link.name,
            url: link.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_create_request() {
        let request = CreateLinkRequest {
            name: "docs".to_string(),
            url: "https://example.com/docs".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let request = CreateLinkRequest {
            name: String::new(),
            url: "https://example.com".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let request = CreateLinkRequest {
            name: "docs".to_string(),
            url: "not-a-url".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let request = UpdateLinkRequest {
            name: "docs".to_string(),
            url: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_link_response_shape() {
        let link = Link::new(
            Uuid::new_v4(),
            "docs".to_string(),
            "https://example.com".to_string(),
        );
        let response = LinkResponse::from(link.clone());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], link.id.to_string());
        assert_eq!(json["name"], "docs");
        assert_eq!(json["url"], "https://example.com");
    }
}

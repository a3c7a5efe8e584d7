// src/joke/model.rs
// =============================================================================
// This module defines the typed shape of the joke API's JSON response.
//
// The API returns a JSON object like:
//   {
//     "id": "abc123",
//     "value": "Chuck Norris can divide by zero.",
//     "url": "https://api.chucknorris.io/jokes/abc123",
//     "icon_url": "https://.../chucknorris_icon.png",
//     "categories": ["dev"],
//     "created_at": "2020-01-05 13:42:19.576875",
//     "updated_at": "2020-01-05 13:42:19.576875"
//   }
//
// We model the shape explicitly instead of poking at a dynamic JSON value:
// if a required field is missing, deserialization fails with a clear error
// instead of the program assuming the shape at use time.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: Fields that may or may not be present in the response
// =============================================================================

use serde::Deserialize;

// The parsed response body from the joke endpoint
//
// #[derive(Deserialize)] tells serde to generate JSON decoding code.
// Fields without Option are REQUIRED: serde returns an error if the body
// lacks them, which we surface as a decode failure.
// Unknown keys in the body are simply ignored (serde's default).
#[derive(Debug, Clone, Deserialize)]
pub struct JokeResponse {
    /// Unique identifier for the joke (required)
    pub id: String,

    /// The joke text itself (required) - this is what we print
    pub value: String,

    /// Permalink to the joke on the API's website (optional)
    #[serde(default)]
    pub url: Option<String>,

    /// URL of the Chuck Norris icon the API serves alongside jokes (optional)
    #[serde(default)]
    pub icon_url: Option<String>,

    /// Category tags like "dev" or "sport" (optional, often empty)
    #[serde(default)]
    pub categories: Vec<String>,

    /// Creation timestamp as the API formats it (optional, kept as a string)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp (optional, kept as a string)
    #[serde(default)]
    pub updated_at: Option<String>,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a struct instead of serde_json::Value?
//    - Value is dynamic: you'd write data["value"] and hope the key exists
//    - A struct is checked once, at decode time, with a useful error message
//    - After that the compiler guarantees the fields are there
//
// 2. What does #[serde(default)] do?
//    - If the key is missing from the JSON, use the type's default value
//    - For Option<String> that's None, for Vec<String> that's an empty vec
//    - Without it, a missing optional key would fail deserialization
//
// 3. Why keep timestamps as String?
//    - The API uses a non-standard datetime format
//    - We never compute with them, only (potentially) display them
//    - Parsing them into a date type would add a dependency for no benefit
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_response() {
        let body = r#"{
            "id": "abc123",
            "value": "Chuck Norris can divide by zero.",
            "url": "https://api.chucknorris.io/jokes/abc123",
            "icon_url": "https://assets.chucknorris.host/img/avatar/chuck-norris.png",
            "categories": ["dev"],
            "created_at": "2020-01-05 13:42:19.576875",
            "updated_at": "2020-01-05 13:42:19.576875"
        }"#;

        let joke: JokeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(joke.id, "abc123");
        assert_eq!(joke.value, "Chuck Norris can divide by zero.");
        assert_eq!(joke.categories, vec!["dev"]);
    }

    #[test]
    fn test_decode_minimal_response() {
        // Only the required fields - everything else defaults
        let body = r#"{"id":"abc","value":"A joke."}"#;

        let joke: JokeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(joke.id, "abc");
        assert_eq!(joke.value, "A joke.");
        assert!(joke.url.is_none());
        assert!(joke.categories.is_empty());
    }

    #[test]
    fn test_missing_value_field_is_an_error() {
        // 'value' is required, so this must fail to decode
        let body = r#"{"id":"abc"}"#;

        let result: Result<JokeResponse, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let body = r#"{"id":"abc","value":"A joke.","bonus":42}"#;

        let joke: JokeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(joke.value, "A joke.");
    }
}

use crate::api::{ApiClient, DatasetSource};
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// A user profile as shown in the dashboard list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "UserRecord")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub city: String,
    pub country: String,
    pub avatar_url: String,
}

impl UserProfile {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "City, Country"
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// User directory API record structures
#[derive(Debug, Deserialize)]
struct UserRecord {
    login: UserLogin,
    name: UserName,
    dob: UserDob,
    location: UserLocation,
    picture: UserPicture,
}

#[derive(Debug, Deserialize)]
struct UserLogin {
    uuid: String,
}

#[derive(Debug, Deserialize)]
struct UserName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct UserDob {
    age: u32,
}

#[derive(Debug, Deserialize)]
struct UserLocation {
    city: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct UserPicture {
    thumbnail: String,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.login.uuid,
            first_name: record.name.first,
            last_name: record.name.last,
            age: record.dob.age,
            city: record.location.city,
            country: record.location.country,
            avatar_url: record.picture.thumbnail,
        }
    }
}

/// Decode the primary dataset payload into user profiles.
///
/// The payload is all-or-nothing: one malformed record fails the lot.
pub fn users_from_value(dataset: &str, value: Value) -> FetchResult<Vec<UserProfile>> {
    serde_json::from_value(value).map_err(|e| FetchError::payload(dataset, e.to_string()))
}

/// The user directory API.
///
/// Answers with an object whose `results` field holds the user records. A
/// missing or non-array `results` is treated as an empty directory.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    client: ApiClient,
    url: Url,
}

impl UserDirectory {
    pub fn new(client: ApiClient, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

fn extract_results(mut response: Value) -> Value {
    match response.get_mut("results").map(Value::take) {
        Some(results @ Value::Array(_)) => results,
        _ => Value::Array(Vec::new()),
    }
}

#[async_trait]
impl DatasetSource for UserDirectory {
    async fn fetch(&self) -> FetchResult<Value> {
        let response = self.client.get_json(&self.url).await?;
        Ok(extract_results(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn john_doe() -> Value {
        json!({
            "login": { "uuid": "1" },
            "name": { "first": "John", "last": "Doe" },
            "dob": { "age": 30 },
            "location": { "city": "NY", "country": "USA" },
            "picture": { "thumbnail": "a.jpg" }
        })
    }

    #[test]
    fn test_users_from_value() {
        let users = users_from_value("Users", json!([john_doe()])).unwrap();
        assert_eq!(users.len(), 1);

        let user = &users[0];
        assert_eq!(user.id, "1");
        assert_eq!(user.full_name(), "John Doe");
        assert_eq!(user.age, 30);
        assert_eq!(user.location(), "NY, USA");
        assert_eq!(user.avatar_url, "a.jpg");
    }

    #[test]
    fn test_users_from_value_ignores_extra_fields() {
        let mut record = john_doe();
        record["email"] = json!("john@example.com");
        record["dob"]["date"] = json!("1994-01-01T00:00:00Z");

        let users = users_from_value("Users", json!([record])).unwrap();
        assert_eq!(users[0].first_name, "John");
    }

    #[test]
    fn test_malformed_record_fails_whole_payload() {
        let broken = json!({ "name": { "first": "Jane", "last": "Smith" } });
        let result = users_from_value("Users", json!([john_doe(), broken]));
        assert!(matches!(result, Err(FetchError::Payload { ref dataset, .. }) if dataset == "Users"));
    }

    #[test]
    fn test_non_array_payload_fails() {
        assert!(users_from_value("Users", json!({ "results": [] })).is_err());
    }

    #[test]
    fn test_extract_results() {
        let results = extract_results(json!({ "results": [john_doe()], "info": { "seed": "x" } }));
        assert_eq!(results.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_extract_results_missing_or_not_array() {
        assert_eq!(extract_results(json!({ "info": {} })), json!([]));
        assert_eq!(extract_results(json!({ "results": "nope" })), json!([]));
        assert_eq!(extract_results(json!({ "results": null })), json!([]));
        assert_eq!(extract_results(json!([1, 2, 3])), json!([]));
    }
}

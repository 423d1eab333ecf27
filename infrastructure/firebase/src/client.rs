use reqwest::Client;

/// Shared HTTP client bound to one Firebase project's REST surface.
pub struct FirebaseClient {
    pub client: Client,
    pub api_key: String,
    pub database_url: String,
    pub storage_bucket: String,
}

impl FirebaseClient {
    pub fn new(api_key: String, database_url: String, storage_bucket: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            database_url,
            storage_bucket,
        }
    }

    /// Builds the Identity Toolkit endpoint for an account action, keyed with
    /// the project's API key.
    pub fn identity_url(&self, action: &str) -> String {
        format!(
            "https://identitytoolkit.googleapis.com/v1/accounts:{}?key={}",
            action, self.api_key
        )
    }

    /// Returns the realtime-database REST endpoint for a document path.
    pub fn database_document_url(&self, path: &str) -> String {
        format!(
            "{}/{}.json",
            self.database_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Returns the object-listing endpoint for the project's storage bucket.
    pub fn storage_objects_url(&self) -> String {
        format!(
            "https://firebasestorage.googleapis.com/v0/b/{}/o",
            self.storage_bucket
        )
    }

    /// Returns the measurement collection endpoint for an analytics stream.
    pub fn analytics_collect_url(&self, measurement_id: &str) -> String {
        format!(
            "https://www.google-analytics.com/mp/collect?measurement_id={}",
            measurement_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> FirebaseClient {
        FirebaseClient::new(
            "AIzaSyTestKey".to_string(),
            "https://quizzed-base-default-rtdb.europe-west1.firebasedatabase.app".to_string(),
            "quizzed-base.firebasestorage.app".to_string(),
        )
    }

    #[test]
    fn should_key_identity_endpoint_with_the_api_key() {
        let client = test_client();

        let url = client.identity_url("signInWithPassword");

        assert_eq!(
            url,
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=AIzaSyTestKey"
        );
    }

    #[test]
    fn should_build_database_document_url_from_path() {
        let client = test_client();

        let url = client.database_document_url("/quizzes/abc123");

        assert_eq!(
            url,
            "https://quizzed-base-default-rtdb.europe-west1.firebasedatabase.app/quizzes/abc123.json"
        );
    }

    #[test]
    fn should_build_storage_objects_url_from_bucket() {
        let client = test_client();

        let url = client.storage_objects_url();

        assert_eq!(
            url,
            "https://firebasestorage.googleapis.com/v0/b/quizzed-base.firebasestorage.app/o"
        );
    }

    #[test]
    fn should_build_analytics_collect_url_from_measurement_id() {
        let client = test_client();

        let url = client.analytics_collect_url("G-VKXENK378H");

        assert_eq!(
            url,
            "https://www.google-analytics.com/mp/collect?measurement_id=G-VKXENK378H"
        );
    }
}

//! Lazy iteration over paginated collection listings

use log::debug;
use std::collections::VecDeque;

use crate::error::Result;

use super::client::AviClient;
use super::models::ObjectRef;

/// Single-pass cursor over one collection listing
///
/// Buffers one page at a time and follows the server's `next` link as the
/// buffer drains. Not restartable; issue a fresh query to iterate again.
pub struct ObjectPager<'a> {
    client: &'a AviClient,
    buffered: VecDeque<ObjectRef>,
    next_url: Option<String>,
    total: Option<u32>,
}

impl<'a> ObjectPager<'a> {
    pub(crate) fn new(client: &'a AviClient, first_url: String) -> Self {
        Self {
            client,
            buffered: VecDeque::new(),
            next_url: Some(first_url),
            total: None,
        }
    }

    /// Total object count reported by the server, known after the first fetch
    pub fn total_count(&self) -> Option<u32> {
        self.total
    }

    /// Next object, transparently fetching the following page when needed
    pub async fn try_next(&mut self) -> Result<Option<ObjectRef>> {
        loop {
            if let Some(obj) = self.buffered.pop_front() {
                return Ok(Some(obj));
            }
            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };
            let page = self.client.get_collection_page(&url).await?;
            debug!(
                "Fetched page with {} objects ({} total)",
                page.results.len(),
                page.count
            );
            self.total = Some(page.count);
            self.next_url = page.next;
            self.buffered.extend(page.results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avi::query::{NameFilter, ObjectQuery};
    use crate::error::AviError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn object_json(uuid: &str, name: &str) -> serde_json::Value {
        serde_json::json!({"uuid": uuid, "name": name})
    }

    async fn drain(pager: &mut ObjectPager<'_>) -> Vec<ObjectRef> {
        let mut objects = Vec::new();
        while let Some(obj) = pager.try_next().await.unwrap() {
            objects.push(obj);
        }
        objects
    }

    #[tokio::test]
    async fn test_single_page_listing() {
        let mock_server = MockServer::start().await;
        let client = AviClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .and(query_param("fields", "uuid,name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "results": [object_json("u1", "p1"), object_json("u2", "p2")]
            })))
            .mount(&mock_server)
            .await;

        let filter = NameFilter::All;
        let query = ObjectQuery {
            object_type: "pool",
            filter: &filter,
        };
        let mut pager = client.list_objects(&query);
        let objects = drain(&mut pager).await;

        assert_eq!(pager.total_count(), Some(2));
        let uuids: Vec<&str> = objects.iter().map(|o| o.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["u1", "u2"]);
    }

    #[tokio::test]
    async fn test_follows_next_links_in_order() {
        let mock_server = MockServer::start().await;
        let client = AviClient::test_client(&mock_server.uri());

        let page2_url = format!("{}/api/pool?page=2", mock_server.uri());
        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .and(query_param("fields", "uuid,name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 3,
                "next": page2_url,
                "results": [object_json("u1", "p1"), object_json("u2", "p2")]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 3,
                "results": [object_json("u3", "p3")]
            })))
            .mount(&mock_server)
            .await;

        let filter = NameFilter::All;
        let query = ObjectQuery {
            object_type: "pool",
            filter: &filter,
        };
        let mut pager = client.list_objects(&query);
        let objects = drain(&mut pager).await;

        let uuids: Vec<&str> = objects.iter().map(|o| o.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["u1", "u2", "u3"]);
    }

    #[tokio::test]
    async fn test_name_set_filter_is_sent() {
        let mock_server = MockServer::start().await;
        let client = AviClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .and(query_param("fields", "uuid,name"))
            .and(query_param("name.in", "p1,p2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "results": [object_json("u1", "p1"), object_json("u2", "p2")]
            })))
            .mount(&mock_server)
            .await;

        let filter = NameFilter::Names(vec!["p1".to_string(), "p2".to_string()]);
        let query = ObjectQuery {
            object_type: "pool",
            filter: &filter,
        };
        let mut pager = client.list_objects(&query);
        let objects = drain(&mut pager).await;
        assert_eq!(objects.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let mock_server = MockServer::start().await;
        let client = AviClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0,
                "results": []
            })))
            .mount(&mock_server)
            .await;

        let filter = NameFilter::All;
        let query = ObjectQuery {
            object_type: "pool",
            filter: &filter,
        };
        let mut pager = client.list_objects(&query);
        let objects = drain(&mut pager).await;
        assert!(objects.is_empty());
        assert_eq!(pager.total_count(), Some(0));
    }

    #[tokio::test]
    async fn test_api_error_surfaces() {
        let mock_server = MockServer::start().await;
        let client = AviClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let filter = NameFilter::All;
        let query = ObjectQuery {
            object_type: "pool",
            filter: &filter,
        };
        let mut pager = client.list_objects(&query);
        let err = pager.try_next().await.unwrap_err();

        match err {
            AviError::Api { status, .. } => assert_eq!(status, 403),
            _ => panic!("Expected AviError::Api"),
        }
    }
}

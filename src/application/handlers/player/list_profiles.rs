//! ListProfiles - Query handler for the profile listing pages.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{ProfileListing, ProfileReader};

/// Handler for listing all profiles as (name, slug) pairs.
pub struct ListProfilesHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListProfilesHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<ProfileListing>, DomainError> {
        self.reader.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Slug;
    use async_trait::async_trait;

    struct MockProfileReader {
        listings: Vec<ProfileListing>,
    }

    #[async_trait]
    impl ProfileReader for MockProfileReader {
        async fn list_all(&self) -> Result<Vec<ProfileListing>, DomainError> {
            Ok(self.listings.clone())
        }
    }

    #[tokio::test]
    async fn returns_all_listings() {
        let reader = Arc::new(MockProfileReader {
            listings: vec![
                ProfileListing {
                    name: "Jane Doe".to_string(),
                    slug: Slug::from_raw("jane-doe"),
                },
                ProfileListing {
                    name: "John Roe".to_string(),
                    slug: Slug::from_raw("john-roe"),
                },
            ],
        });
        let handler = ListProfilesHandler::new(reader);

        let listings = handler.handle().await.unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name, "Jane Doe");
        assert_eq!(listings[1].slug.as_str(), "john-roe");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let reader = Arc::new(MockProfileReader { listings: vec![] });
        let handler = ListProfilesHandler::new(reader);

        assert!(handler.handle().await.unwrap().is_empty());
    }
}

//! Application key operations.

use tracing::{debug, instrument};

use b2_core::models::ListKeysResponse;
use b2_core::pagination::paginate;
use b2_core::{ApplicationKey, KeyCursor, ListPage, NewApplicationKey, Paginated, Result, Transport};

use crate::client::B2Client;
use crate::endpoints::*;

impl<T: Transport> B2Client<T> {
    /// Create an application key. The secret is only returned here.
    #[instrument(skip(self, key), fields(key_name = %key.key_name))]
    pub async fn create_key(&self, key: &NewApplicationKey) -> Result<ApplicationKey> {
        debug!("Creating application key");
        let session = self.ensure_authorized().await?;
        let body = CreateKeyRequest {
            account_id: &session.account_id,
            key,
        };
        self.call_with(&session, CREATE_KEY, &body).await
    }

    #[instrument(skip(self))]
    pub async fn delete_key(&self, application_key_id: &str) -> Result<ApplicationKey> {
        debug!("Deleting application key");
        self.call(DELETE_KEY, &DeleteKeyRequest { application_key_id })
            .await
    }

    /// Fetch one page of application keys.
    #[instrument(skip(self, cursor))]
    pub async fn list_keys_page(
        &self,
        page_size: Option<u32>,
        cursor: Option<&KeyCursor>,
    ) -> Result<ListPage<ApplicationKey, KeyCursor>> {
        let max_key_count = self.page_size(page_size)?;
        let session = self.ensure_authorized().await?;
        let body = ListKeysRequest {
            account_id: &session.account_id,
            max_key_count,
            start_application_key_id: cursor.map(KeyCursor::as_str),
        };
        let response: ListKeysResponse = self.call_with(&session, LIST_KEYS, &body).await?;
        Ok(response.into_page())
    }

    /// Lazily list every application key of the account.
    pub fn list_keys(&self, page_size: Option<u32>) -> Paginated<'_, ApplicationKey> {
        paginate(move |cursor: Option<KeyCursor>| async move {
            self.list_keys_page(page_size, cursor.as_ref()).await
        })
    }
}

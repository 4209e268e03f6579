//! Bucket operations.

use tracing::{debug, instrument};

use b2_core::models::ListBucketsResponse;
use b2_core::{ApiError, Bucket, BucketType, Error, Result, Transport};

use crate::client::B2Client;
use crate::endpoints::*;

/// Narrows `list_buckets`. The default lists every bucket of every type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketFilter {
    pub bucket_id: Option<String>,
    pub bucket_name: Option<String>,
    /// Empty means all types.
    pub bucket_types: Vec<BucketType>,
}

impl BucketFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            bucket_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            bucket_id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = BucketType>) -> Self {
        self.bucket_types = types.into_iter().collect();
        self
    }
}

impl<T: Transport> B2Client<T> {
    #[instrument(skip(self))]
    pub async fn create_bucket(&self, bucket_name: &str, bucket_type: BucketType) -> Result<Bucket> {
        debug!("Creating bucket");
        let session = self.ensure_authorized().await?;
        let body = CreateBucketRequest {
            account_id: &session.account_id,
            bucket_name,
            bucket_type: &bucket_type,
        };
        self.call_with(&session, CREATE_BUCKET, &body).await
    }

    #[instrument(skip(self))]
    pub async fn delete_bucket(&self, bucket_id: &str) -> Result<Bucket> {
        debug!("Deleting bucket");
        let session = self.ensure_authorized().await?;
        let body = DeleteBucketRequest {
            account_id: &session.account_id,
            bucket_id,
        };
        self.call_with(&session, DELETE_BUCKET, &body).await
    }

    /// List buckets. This call is never paginated.
    #[instrument(skip(self))]
    pub async fn list_buckets(&self, filter: &BucketFilter) -> Result<Vec<Bucket>> {
        debug!("Listing buckets");
        let session = self.ensure_authorized().await?;
        let bucket_types = if filter.bucket_types.is_empty() {
            vec!["all"]
        } else {
            filter.bucket_types.iter().map(BucketType::as_str).collect()
        };
        let body = ListBucketsRequest {
            account_id: &session.account_id,
            bucket_id: filter.bucket_id.as_deref(),
            bucket_name: filter.bucket_name.as_deref(),
            bucket_types,
        };
        let response: ListBucketsResponse = self.call_with(&session, LIST_BUCKETS, &body).await?;
        Ok(response.buckets)
    }

    /// Look up a bucket by exact name.
    ///
    /// Returns a not-found error when no bucket has that name.
    #[instrument(skip(self))]
    pub async fn find_bucket_by_name(&self, bucket_name: &str) -> Result<Bucket> {
        self.list_buckets(&BucketFilter::by_name(bucket_name))
            .await?
            .into_iter()
            .find(|b| b.bucket_name == bucket_name)
            .ok_or_else(|| {
                Error::Api(ApiError::not_found(format!(
                    "bucket not found: {}",
                    bucket_name
                )))
            })
    }

    /// Not supported by this client.
    pub async fn update_bucket(&self) -> Result<Bucket> {
        Err(Error::NotImplemented("update_bucket"))
    }
}

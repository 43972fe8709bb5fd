//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `taskboard_core::storage`.
//! Requests that never got a response become `ConnectionFailed`; anything the
//! service rejected becomes `QueryFailed`, except the update's existence
//! condition, which is a `NotFound`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use taskboard_core::storage::RepositoryError;

fn is_transport_failure<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    )
}

fn connection_failed<E, R>(err: SdkError<E, R>) -> RepositoryError
where
    E: std::error::Error + 'static,
    R: Debug,
{
    RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string())
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if is_transport_failure(&err) {
        return connection_failed(err);
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {}", DisplayErrorContext(err))),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if is_transport_failure(&err) {
        return connection_failed(err);
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => {
            RepositoryError::QueryFailed(format!("PutItem failed: {}", DisplayErrorContext(err)))
        }
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// A failed `attribute_exists` condition means there was no record to patch.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if is_transport_failure(&err) {
        return connection_failed(err);
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
        UpdateItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        UpdateItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!(
            "UpdateItem failed: {}",
            DisplayErrorContext(err)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceNotFoundException,
    };

    #[test]
    fn test_conditional_check_failure_on_update_is_not_found() {
        let err: SdkError<UpdateItemError, ()> = SdkError::service_error(
            UpdateItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder().build(),
            ),
            (),
        );

        assert_eq!(
            map_update_item_error(err, "Task", "does-not-exist"),
            RepositoryError::NotFound {
                entity_type: "Task",
                id: "does-not-exist".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_table_is_query_failure() {
        let err: SdkError<QueryError, ()> = SdkError::service_error(
            QueryError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );

        assert_eq!(
            map_query_error(err),
            RepositoryError::QueryFailed("Table not found".to_string())
        );
    }

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<PutItemError, ()> = SdkError::timeout_error("request timed out");

        assert!(matches!(
            map_put_item_error(err),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_update_timeout_is_not_reported_as_not_found() {
        let err: SdkError<UpdateItemError, ()> = SdkError::timeout_error("request timed out");

        assert!(matches!(
            map_update_item_error(err, "Task", "t-1"),
            RepositoryError::ConnectionFailed(_)
        ));
    }
}

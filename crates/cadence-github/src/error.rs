use cadence_core::TimestampError;
use thiserror::Error;

/// Everything that can go wrong between issuing the request and handing back
/// the series. Nothing is retried or recovered locally; each failure names
/// the pipeline stage it happened in.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced an HTTP response, or the body could not
    /// be read off the wire.
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The forge answered with a non-success status.
    #[error("{url} returned HTTP {status}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body is not JSON at all.
    #[error("response from {url} is not valid JSON: {reason}")]
    Decode { url: String, reason: String },

    /// The JSON is well-formed but not a list of commit records.
    #[error("unexpected response shape from {url}: {reason}")]
    Schema { url: String, reason: String },

    /// A commit record carries an author date that is not a timestamp.
    /// The index is the record's position in the response.
    #[error("commit record {index}: {source}")]
    TimestampParse {
        index: usize,
        #[source]
        source: TimestampError,
    },
}

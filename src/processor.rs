//! Response processors for endpoint builders

use crate::error::{Error, Result};
use crate::response::Response;

/// Trait for turning a raw HTTP response into a builder's output type
pub trait Processor {
    /// The processed output type
    type Output;

    /// Process the response of an executed request
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

/// Raw processor returning the response body as a JSON string
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        let resp = response?;
        if resp.status() != 200 {
            return Err(Error::Api {
                request_id: resp.request_id().to_owned(),
                status: resp.status().to_owned(),
                message: resp.body().to_owned(),
            });
        }
        Ok(resp.body().to_owned())
    }
}

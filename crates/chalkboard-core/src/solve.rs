//! Contract with the external solving service.
//!
//! The board is rasterized elsewhere and sent together with the user's
//! variable dictionary; the service answers with a line of text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors reported by a [`Solver`].
#[derive(Debug, Error)]
pub enum SolveError {
    /// The request carried no image.
    #[error("Nothing to solve: the image is empty")]
    EmptyImage,
    /// The service could not be reached or refused the request.
    #[error("Solver unavailable: {0}")]
    Unavailable(String),
    /// The service answered with something that is not a solve response.
    #[error("Invalid solver response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// A rasterized board plus the variables known so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// PNG-encoded snapshot of the board.
    #[serde(skip)]
    pub image_png: Vec<u8>,
    /// Opaque variable dictionary forwarded to the service as-is.
    #[serde(rename = "dict_of_vars")]
    pub variables: BTreeMap<String, serde_json::Value>,
}

impl SolveRequest {
    pub fn new(image_png: Vec<u8>) -> Self {
        Self {
            image_png,
            variables: BTreeMap::new(),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// The variable dictionary as the JSON form field the service expects.
    pub fn variables_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.variables)
    }

    /// Reject requests that cannot produce an answer.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.image_png.is_empty() {
            return Err(SolveError::EmptyImage);
        }
        Ok(())
    }
}

/// Text answer from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub result: String,
}

impl SolveResponse {
    /// Parse the service's JSON body.
    pub fn from_json(json: &str) -> Result<Self, SolveError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Something that can turn a board snapshot into an answer.
pub trait Solver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}

impl<F> Solver for F
where
    F: Fn(&SolveRequest) -> Result<SolveResponse, SolveError>,
{
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_json() {
        let request = SolveRequest::new(vec![1, 2, 3])
            .with_variable("x", 2)
            .with_variable("name", "area");
        assert_eq!(request.variables_json().unwrap(), r#"{"name":"area","x":2}"#);
    }

    #[test]
    fn test_validate_empty_image() {
        assert!(matches!(SolveRequest::default().validate(), Err(SolveError::EmptyImage)));
        assert!(SolveRequest::new(vec![0x89]).validate().is_ok());
    }

    #[test]
    fn test_parse_response() {
        let response = SolveResponse::from_json(r#"{ "result": "x = 4" }"#).unwrap();
        assert_eq!(response.result, "x = 4");
        assert!(matches!(
            SolveResponse::from_json(r#"{ "answer": 4 }"#),
            Err(SolveError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_closure_solver() {
        let solver = |request: &SolveRequest| {
            Ok::<_, SolveError>(SolveResponse {
                result: format!("{} bytes", request.image_png.len()),
            })
        };
        let response = solver.solve(&SolveRequest::new(vec![0; 4])).unwrap();
        assert_eq!(response.result, "4 bytes");
    }
}

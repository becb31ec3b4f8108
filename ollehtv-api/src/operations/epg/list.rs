//! EpgList operation

use otp_client::{Envelope, Params};
use serde_json::Value;

use crate::model::{Genre, ListingDate};
use crate::{ApiError, Endpoint, OtpOperation};

/// EpgList operation
pub struct EpgListOperation;

/// Request for EpgList operation
#[derive(Debug, Clone, Default)]
pub struct EpgListRequest {
    pub genre: Genre,
    pub date: ListingDate,
}

impl OtpOperation for EpgListOperation {
    type Request = EpgListRequest;
    type Response = Value;

    const ENDPOINT: Endpoint = Endpoint::EpgList;

    fn build_params(request: &Self::Request) -> Params {
        let mut params = Params::new();
        params.insert("GENRE_ID".to_string(), Value::from(request.genre.code().to_string()));
        params.insert("SRCH_DATE".to_string(), Value::from(request.date.to_param()));
        params
    }

    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError> {
        Ok(envelope.into_data()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_request_params() {
        let params = EpgListOperation::build_params(&EpgListRequest::default());
        assert_eq!(params["GENRE_ID"], "0");
        assert_eq!(params["SRCH_DATE"], "0");
    }

    #[test]
    fn test_genre_and_date_params() {
        let request = EpgListRequest {
            genre: Genre::Sports,
            date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap().into(),
        };
        let params = EpgListOperation::build_params(&request);
        assert_eq!(params["GENRE_ID"], "4");
        assert_eq!(params["SRCH_DATE"], "20170101");
    }
}

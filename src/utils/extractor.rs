//! Path id extractors. Non-numeric or non-positive ids are rejected with a
//! 400 envelope before any handler runs.

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let message = format!("Invalid path parameter '{name}': {raw}");
            let response = HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
            Err(InternalError::from_response(message, response).into())
        }
    }
}

macro_rules! define_safe_id {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(parse_positive_id(req, $param).map($name))
                }
            }
        )*
    };
}

define_safe_id! {
    SafeIDI64 => "id",
    SafeSubIDI64 => "sub_id",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_positive_ids_only() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        assert_eq!(parse_positive_id(&req, "id").unwrap(), 42);

        let req = TestRequest::default().param("id", "0").to_http_request();
        assert!(parse_positive_id(&req, "id").is_err());

        let req = TestRequest::default().param("id", "abc").to_http_request();
        assert!(parse_positive_id(&req, "id").is_err());

        let req = TestRequest::default().to_http_request();
        assert!(parse_positive_id(&req, "sub_id").is_err());
    }
}

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

/// Response of `GET /maps/details/{id}`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct MapDetail {
    pub details: PlaceDetails,
    /// The service sends `null` instead of an empty list
    /// for places without reviews.
    pub reviews: Option<Vec<Review>>,
    pub page_info: PageInfo,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    pub info_url       : String,
    pub name           : String,
    pub map_address    : String,
    pub category       : String,
    pub operation_time : Option<String>,
    pub tel            : Option<String>,
    pub homepage       : Option<String>,
    pub my_pick        : bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub pet_id        : u64,
    pub comment_id    : u64,
    pub profile_image : Option<String>,
    pub pet_name      : String,
    pub contents      : String,
    pub created_at    : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

/// Body of `POST /maps/addplace` and `DELETE /maps/cancel`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub pet_id: u64,
    pub info_map_id: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub info_map_id: u64,
    pub contents: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UpdateReview {
    pub contents: String,
}

/// Response of `GET /pets/{id}`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PetInfoResponse {
    pub pet_info: PetInfo,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PetInfo {
    pub pet_name: String,
    pub profile_image: Option<String>,
}

/// Error body returned by the service for non-2xx responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message} ({status})"))]
pub struct Error {
    pub status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_map_detail_with_missing_optionals() {
        let json = r#"{
            "details": {
                "infoUrl": "https://img.example/park.png",
                "name": "Dog Park",
                "mapAddress": "1 Main St",
                "category": "park",
                "operationTime": null,
                "tel": null,
                "homepage": "park.example",
                "myPick": true
            },
            "reviews": [{
                "petId": 1,
                "commentId": 10,
                "profileImage": null,
                "petName": "Rex",
                "contents": "great walk",
                "createdAt": "2022-11-20T12:30:00"
            }],
            "pageInfo": { "page": 1, "size": 15, "totalElements": 1, "totalPages": 1 }
        }"#;
        let detail: MapDetail = serde_json::from_str(json).unwrap();
        assert!(detail.details.my_pick);
        assert!(detail.details.operation_time.is_none());
        assert!(detail.details.tel.is_none());
        assert_eq!(Some("park.example"), detail.details.homepage.as_deref());
        let reviews = detail.reviews.unwrap();
        assert_eq!(1, reviews.len());
        assert_eq!(10, reviews[0].comment_id);
        assert_eq!(1, detail.page_info.total_elements);
    }

    #[test]
    fn deserialize_null_reviews() {
        let json = r#"{
            "details": {
                "infoUrl": "", "name": "", "mapAddress": "", "category": "",
                "operationTime": "0900-1800", "tel": "02-555-8888", "homepage": null,
                "myPick": false
            },
            "reviews": null,
            "pageInfo": { "page": 1, "size": 15, "totalElements": 0, "totalPages": 0 }
        }"#;
        let detail: MapDetail = serde_json::from_str(json).unwrap();
        assert!(detail.reviews.is_none());
    }

    #[test]
    fn serialize_bookmark_request_in_camel_case() {
        let json = serde_json::to_string(&Bookmark {
            pet_id: 3,
            info_map_id: 5,
        })
        .unwrap();
        assert_eq!(r#"{"petId":3,"infoMapId":5}"#, json);
    }
}

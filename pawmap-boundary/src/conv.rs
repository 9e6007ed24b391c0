use super::*;
use pawmap_entities as e;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Timestamp(#[from] e::time::TimestampParseError),
}

impl From<PageInfo> for e::page::PageInfo {
    fn from(from: PageInfo) -> Self {
        let PageInfo {
            page,
            size,
            total_elements,
            total_pages,
        } = from;
        Self {
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

impl From<e::page::PageInfo> for PageInfo {
    fn from(from: e::page::PageInfo) -> Self {
        let e::page::PageInfo {
            page,
            size,
            total_elements,
            total_pages,
        } = from;
        Self {
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

// Blank optional strings are treated as "not provided".
fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

impl From<(e::id::PlaceId, PlaceDetails)> for e::place::Place {
    fn from((id, from): (e::id::PlaceId, PlaceDetails)) -> Self {
        let PlaceDetails {
            info_url,
            name,
            map_address,
            category,
            operation_time,
            tel,
            homepage,
            my_pick,
        } = from;
        Self {
            id,
            name,
            category,
            address: map_address,
            opening_hours: non_blank(operation_time),
            phone: non_blank(tel),
            homepage: non_blank(homepage),
            cover_image: info_url,
            bookmarked: my_pick,
        }
    }
}

impl TryFrom<(e::id::PlaceId, Review)> for e::review::Review {
    type Error = ConversionError;
    fn try_from((place_id, from): (e::id::PlaceId, Review)) -> Result<Self, Self::Error> {
        let Review {
            pet_id,
            comment_id,
            profile_image,
            pet_name,
            contents,
            created_at,
        } = from;
        Ok(Self {
            id: comment_id.into(),
            place_id,
            author_id: pet_id.into(),
            author_name: pet_name,
            author_avatar: non_blank(profile_image),
            text: contents,
            created_at: created_at.parse()?,
        })
    }
}

impl TryFrom<(e::id::PlaceId, MapDetail)> for e::place::PlaceDetail {
    type Error = ConversionError;
    fn try_from((place_id, from): (e::id::PlaceId, MapDetail)) -> Result<Self, Self::Error> {
        let MapDetail {
            details,
            reviews,
            page_info,
        } = from;
        let reviews = reviews
            .unwrap_or_default()
            .into_iter()
            .map(|r| e::review::Review::try_from((place_id, r)))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            place: (place_id, details).into(),
            reviews,
            page_info: page_info.into(),
        })
    }
}

impl From<PetInfoResponse> for e::user::Profile {
    fn from(from: PetInfoResponse) -> Self {
        let PetInfo {
            pet_name,
            profile_image,
        } = from.pet_info;
        Self {
            display_name: pet_name,
            avatar: non_blank(profile_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> PlaceDetails {
        PlaceDetails {
            info_url: "cover.png".into(),
            name: "Dog Park".into(),
            map_address: "1 Main St".into(),
            category: "park".into(),
            operation_time: Some("  ".into()),
            tel: None,
            homepage: Some("park.example".into()),
            my_pick: true,
        }
    }

    fn review(id: u64, created_at: &str) -> Review {
        Review {
            pet_id: 7,
            comment_id: id,
            profile_image: None,
            pet_name: "Rex".into(),
            contents: "great walk".into(),
            created_at: created_at.into(),
        }
    }

    #[test]
    fn convert_place_details() {
        let place: e::place::Place = (e::id::PlaceId::new(3), details()).into();
        assert_eq!(e::id::PlaceId::new(3), place.id);
        assert_eq!("1 Main St", place.address);
        assert_eq!("cover.png", place.cover_image);
        assert!(place.opening_hours.is_none());
        assert!(place.phone.is_none());
        assert_eq!(Some("park.example".to_string()), place.homepage);
        assert!(place.bookmarked);
    }

    #[test]
    fn convert_map_detail_keeps_review_order() {
        let detail = MapDetail {
            details: details(),
            reviews: Some(vec![
                review(2, "2022-11-21T08:00:00"),
                review(1, "2022-11-20T08:00:00"),
            ]),
            page_info: PageInfo {
                page: 1,
                size: 15,
                total_elements: 2,
                total_pages: 1,
            },
        };
        let detail = e::place::PlaceDetail::try_from((e::id::PlaceId::new(3), detail)).unwrap();
        let ids: Vec<_> = detail.reviews.iter().map(|r| r.id.get()).collect();
        assert_eq!(vec![2, 1], ids);
        assert!(detail
            .reviews
            .iter()
            .all(|r| r.place_id == e::id::PlaceId::new(3)));
        assert!(detail.reviews[0].is_authored_by(e::id::UserId::new(7)));
    }

    #[test]
    fn convert_null_reviews_into_empty_list() {
        let detail = MapDetail {
            details: details(),
            reviews: None,
            page_info: PageInfo {
                page: 1,
                size: 15,
                total_elements: 0,
                total_pages: 0,
            },
        };
        let detail = e::place::PlaceDetail::try_from((e::id::PlaceId::new(3), detail)).unwrap();
        assert!(detail.reviews.is_empty());
    }

    #[test]
    fn reject_review_with_invalid_timestamp() {
        let res = e::review::Review::try_from((e::id::PlaceId::new(3), review(1, "soon")));
        assert!(res.is_err());
    }
}

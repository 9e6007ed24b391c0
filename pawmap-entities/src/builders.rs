pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, review_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{id::*, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.category = category.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.place.address = address.into();
            self
        }
        pub fn opening_hours(mut self, hours: Option<&str>) -> Self {
            self.place.opening_hours = hours.map(Into::into);
            self
        }
        pub fn phone(mut self, phone: Option<&str>) -> Self {
            self.place.phone = phone.map(Into::into);
            self
        }
        pub fn homepage(mut self, homepage: Option<&str>) -> Self {
            self.place.homepage = homepage.map(Into::into);
            self
        }
        pub fn bookmarked(mut self, bookmarked: bool) -> Self {
            self.place.bookmarked = bookmarked;
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> Self::Build {
            PlaceBuild {
                place: Place {
                    id: PlaceId::new(1),
                    name: "".into(),
                    category: "".into(),
                    address: "".into(),
                    opening_hours: None,
                    phone: None,
                    homepage: None,
                    cover_image: "".into(),
                    bookmarked: false,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::Timestamp};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn place(mut self, id: u64) -> Self {
            self.review.place_id = id.into();
            self
        }
        pub fn author(mut self, id: u64, name: &str) -> Self {
            self.review.author_id = id.into();
            self.review.author_name = name.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.review.text = text.into();
            self
        }
        pub fn created_at(mut self, seconds: i64) -> Self {
            self.review.created_at = Timestamp::from_seconds(seconds);
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> Self::Build {
            ReviewBuild {
                review: Review {
                    id: ReviewId::new(1),
                    place_id: PlaceId::new(1),
                    author_id: UserId::new(1),
                    author_name: "".into(),
                    author_avatar: None,
                    text: "".into(),
                    created_at: Timestamp::from_seconds(0),
                },
            }
        }
    }
}

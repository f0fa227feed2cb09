use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use slotbook_core::{
    models::{
        booking::{Booking, BookingStatus, BookingWithUser, NewBooking},
        user::User,
    },
    repository::{BookingRepository, StatusFilter, UserRepository},
};
use uuid::Uuid;

// Mock repositories for testing
mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingRepository for BookingRepo {
        async fn find_by_user(
            &self,
            user_id: Uuid,
            filter: StatusFilter,
        ) -> eyre::Result<Vec<Booking>>;

        async fn find_by_start_date(
            &self,
            start_date: DateTime<Utc>,
            filter: StatusFilter,
        ) -> eyre::Result<Vec<BookingWithUser>>;

        async fn count_by_start_date(
            &self,
            start_date: DateTime<Utc>,
            filter: StatusFilter,
        ) -> eyre::Result<i64>;

        async fn find_one_by_user_and_start_date(
            &self,
            user_id: Uuid,
            start_date: DateTime<Utc>,
            filter: StatusFilter,
        ) -> eyre::Result<Option<Booking>>;

        async fn update_status(
            &self,
            id: Uuid,
            status: BookingStatus,
        ) -> eyre::Result<Option<Booking>>;

        async fn insert(&self, booking: NewBooking) -> eyre::Result<Booking>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> eyre::Result<Option<User>>;
    }
}

use serde::{Deserialize, Serialize};

use super::SeatId;

/// Тело запроса `POST /submit`: `{"seats":[...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSeatsRequest {
    pub seats: Vec<SeatId>,
}

impl SubmitSeatsRequest {
    pub fn new(seats: &[SeatId]) -> Self {
        Self { seats: seats.to_vec() }
    }
}

pub mod seat;
pub mod booking;

pub use seat::{Seat, SeatId, SeatLayout, SeatPayload, SeatRow};
pub use booking::SubmitSeatsRequest;

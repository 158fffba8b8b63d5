use serde::{Deserialize, Serialize};

/// Номер места в треугольной нумерации (1..n(n+1)/2).
pub type SeatId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    /// Ряд, начиная с 1
    pub row: u32,
    /// Позиция внутри ряда, начиная с 1
    pub position: u32,
    pub reserved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    pub number: u32,
    pub seats: Vec<Seat>,
}

/// Треугольная схема зала: ряд i содержит ровно i мест.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatLayout {
    pub rows: Vec<SeatRow>,
}

impl SeatLayout {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|r| r.seats.len()).sum()
    }

    /// Все места построчно, слева направо.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(|r| r.seats.iter())
    }

    /// Номера сплошные, так что место есть в схеме, если 1 <= id <= числа мест.
    pub fn contains(&self, id: SeatId) -> bool {
        id >= 1 && (id as usize) <= self.seat_count()
    }

    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.seats().find(|s| s.id == id)
    }
}

/// Тело ответа `GET /seats`. Форма ответа не документирована, поэтому храним как есть.
pub type SeatPayload = serde_json::Value;

//! Расчёт стоимости выбранных мест.
//!
//! Итог = сумма (ряд * 10) по каждому месту + фиксированный сбор 20.
//! Считается всегда с нуля по текущему выбору и текущему числу рядов.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::SeatId;
use crate::services::layout::row_of;

pub const BASE_FEE: u64 = 20;
pub const ROW_PRICE: u64 = 10;

/// Откуда берётся "ряд" при расчёте цены.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRule {
    /// `ceil(seat / row_count)`: исторический расчёт, не совпадает с настоящим рядом
    /// треугольной схемы. Оставлен по умолчанию, чтобы итоговые суммы не менялись.
    #[default]
    Legacy,
    /// Настоящий ряд места из треугольной нумерации.
    Layout,
}

impl FromStr for PriceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(PriceRule::Legacy),
            "layout" => Ok(PriceRule::Layout),
            other => Err(format!("unknown price rule '{}', expected legacy or layout", other)),
        }
    }
}

/// Вклад одного места в итог.
pub fn seat_price(seat: SeatId, row_count: i64, rule: PriceRule) -> u64 {
    let row = match rule {
        PriceRule::Legacy => {
            // Делитель <= 0 даёт деление на ноль, считаем его за 1
            let divisor = row_count.max(1) as u64;
            (seat as u64).div_ceil(divisor)
        }
        PriceRule::Layout => row_of(seat).unwrap_or(0) as u64,
    };
    row * ROW_PRICE
}

pub fn total_cost(selected: &[SeatId], row_count: i64, rule: PriceRule) -> u64 {
    selected
        .iter()
        .map(|&seat| seat_price(seat, row_count, rule))
        .sum::<u64>()
        + BASE_FEE
}

/// Место забронировано (недоступно для выбора), если его номер простое число.
///
/// Не зависит ни от ряда, ни от текущего выбора. Числа <= 1 простыми не считаются.
pub fn is_reserved(seat: i64) -> bool {
    if seat <= 1 {
        return false;
    }
    if seat < 4 {
        return true;
    }
    if seat % 2 == 0 {
        return false;
    }

    // Достаточно проверить нечётные делители до корня
    let mut divisor = 3;
    while divisor <= seat / divisor {
        if seat % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes_are_reserved() {
        for s in [2, 3, 5, 7, 11, 13, 53] {
            assert!(is_reserved(s), "{s} should be reserved");
        }
    }

    #[test]
    fn composites_and_units_are_free() {
        for s in [-7, 0, 1, 4, 6, 8, 9, 10, 25, 49, 55] {
            assert!(!is_reserved(s), "{s} should be free");
        }
    }
}

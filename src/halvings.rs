// The fixed halving table. Embedded constants, never loaded from config.
use crate::model::HalvingEvent;
use chrono::NaiveDate;

pub fn halving_events() -> [HalvingEvent; 4] {
    [
        HalvingEvent {
            date: date(2012, 11, 28),
            block_height: 210_000,
            cycle: 1,
            price_at_halving: 12.35,
        },
        HalvingEvent {
            date: date(2016, 7, 9),
            block_height: 420_000,
            cycle: 2,
            price_at_halving: 650.63,
        },
        HalvingEvent {
            date: date(2020, 5, 11),
            block_height: 630_000,
            cycle: 3,
            price_at_halving: 8_821.42,
        },
        HalvingEvent {
            date: date(2024, 4, 20),
            block_height: 840_000,
            cycle: 4,
            price_at_halving: 63_842.00,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid halving date")
}

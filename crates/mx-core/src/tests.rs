//! Unit tests for mx-core primitives.

#[cfg(test)]
mod ids {
    use crate::{GroupId, NetworkId, PersonId, PlaceId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PersonId(0) < PersonId(1));
        assert!(PlaceId(100) > PlaceId(99));
    }

    #[test]
    fn network_id_rejects_overflow() {
        assert!(NetworkId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
        assert_eq!(GroupId::from(PlaceId(3)).to_string(), "PlaceId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Day, SimCalendar, SimConfig, Weekday};

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.offset(3), Day(13));
        assert_eq!(Day(15) - Day(10), 5);
        assert_eq!(Day(15).since(Day(10)), 5);
    }

    #[test]
    fn calendar_wraps_weekly() {
        let cal = SimCalendar::new(Weekday::Friday);
        assert_eq!(cal.weekday(Day(0)), Weekday::Friday);
        assert_eq!(cal.weekday(Day(1)), Weekday::Saturday);
        assert_eq!(cal.weekday(Day(2)), Weekday::Sunday);
        assert_eq!(cal.weekday(Day(3)), Weekday::Monday);
        assert_eq!(cal.weekday(Day(7)), Weekday::Friday);
        assert!(cal.is_weekday(Day(0)));
        assert!(cal.is_weekend(Day(1)));
        assert!(cal.is_weekend(Day(2)));
        assert!(cal.is_weekday(Day(3)));
    }

    #[test]
    fn first_run_uses_base_seed() {
        let config = SimConfig { seed: 7, run_number: 1, ..SimConfig::default() };
        assert_eq!(config.simulation_seed(), 7);
        assert_eq!(config.reseed_seed(), 7);
    }

    #[test]
    fn later_runs_derive_seed_without_reseed_day() {
        let config = SimConfig { seed: 7, run_number: 3, ..SimConfig::default() };
        assert_eq!(config.simulation_seed(), 702);
    }

    #[test]
    fn reseed_day_keeps_base_seed_until_reseed() {
        let config = SimConfig {
            seed:       7,
            run_number: 3,
            reseed_day: Some(Day(10)),
            ..SimConfig::default()
        };
        assert_eq!(config.simulation_seed(), 7);
        assert_eq!(config.reseed_seed(), 9);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.draw_random().to_bits(), b.draw_random().to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let va: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let vb: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn reseed_restarts_stream() {
        let mut a = SimRng::new(5);
        let first: Vec<u64> = (0..4).map(|_| a.random()).collect();
        a.reseed(5);
        let again: Vec<u64> = (0..4).map(|_| a.random()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn reseed_logs_nothing() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static RECORDS: AtomicUsize = AtomicUsize::new(0);

        struct Counter;

        impl log::Log for Counter {
            fn enabled(&self, _: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, _: &log::Record<'_>) {
                RECORDS.fetch_add(1, Ordering::SeqCst);
            }

            fn flush(&self) {}
        }

        static COUNTER: Counter = Counter;
        log::set_logger(&COUNTER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        let mut r = SimRng::new(5);
        r.reseed(6);
        r.draw_random();
        assert_eq!(RECORDS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn draw_random_in_unit_interval() {
        let mut r = SimRng::new(3);
        for _ in 0..1_000 {
            let x = r.draw_random();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn draw_random_int_is_inclusive() {
        let mut r = SimRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            let x = r.draw_random_int(0, 2);
            seen[x as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
        assert_eq!(r.draw_random_int(4, 4), 4);
    }

    #[test]
    fn clone_replays_stream() {
        let mut a = SimRng::new(11);
        let _ = a.draw_random();
        let mut b = a.clone();
        assert_eq!(a.draw_random_int(0, 1_000), b.draw_random_int(0, 1_000));
    }

    #[test]
    fn shuffle_is_deterministic() {
        let mut a = SimRng::new(8);
        let mut b = SimRng::new(8);
        let mut va: Vec<u32> = (0..20).collect();
        let mut vb = va.clone();
        a.shuffle(&mut va);
        b.shuffle(&mut vb);
        assert_eq!(va, vb);
    }

    #[test]
    fn stochastic_round_whole_numbers_do_not_draw() {
        let mut a = SimRng::new(4);
        let mut b = a.clone();
        assert_eq!(a.stochastic_round(3.0), 3);
        assert_eq!(a.stochastic_round(-1.0), 0);
        assert_eq!(a.draw_random().to_bits(), b.draw_random().to_bits());
    }

    #[test]
    fn stochastic_round_bounds() {
        let mut r = SimRng::new(4);
        for _ in 0..200 {
            let n = r.stochastic_round(2.25);
            assert!(n == 2 || n == 3);
        }
    }
}

use super::*;

mod entry_parse_tests {
    use super::*;

    // two examples provided in the `proc_stat(5)` man page.
    const EXAMPLE_1: &str = "cpu 10132153 290696 3084719 46828483 16683 0 25195 0 175628 0";
    const EXAMPLE_2: &str = "cpu0 1393280 32966 572056 13343292 6130 0 17875 0 23933 0";

    #[test]
    fn example_1() {
        let time = EXAMPLE_1.parse::<CpuTime>().unwrap();
        assert_eq!(time.user, UserHz::new(10132153));
        assert_eq!(time.softirq, UserHz::new(25195));
    }

    #[test]
    fn per_cpu_entry_is_not_aggregate() {
        let err = EXAMPLE_2.parse::<CpuTime>().unwrap_err();
        match err {
            EntryParseError::UnrecognizedEntry { kind } if kind == "cpu0" => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn double_space() {
        const ENTRY: &str = "cpu  10132153 290696 3084719 46828483 16683 0 25195 0 175628 0";
        let _ = ENTRY.parse::<CpuTime>().unwrap();
    }

    /// older kernels only report the first seven buckets.
    #[test]
    fn seven_times() {
        let time = "cpu 1 2 3 4 5 6 7".parse::<CpuTime>().unwrap();
        assert_eq!(time.total(), UserHz::new(28));
    }

    #[test]
    fn missing_time() {
        let err = "cpu 1 2 3 4 5 6".parse::<CpuTime>().unwrap_err();
        assert_eq!(err, EntryParseError::CpuTime { found: 6 });
    }

    #[test]
    fn bad_time() {
        let err = "cpu 1 2 x 4 5 6 7".parse::<CpuTime>().unwrap_err();
        assert!(matches!(err, EntryParseError::UserHzParse(_)));
    }

    #[test]
    fn empty() {
        assert_eq!("".parse::<CpuTime>(), Err(EntryParseError::Missing));
    }

    #[test]
    fn big() {
        let time = "cpu  5000000000 5000000000 5000000000 5000000000 5000000000 5000000000 5000000000 0 0 0"
            .parse::<CpuTime>()
            .unwrap();
        assert_eq!(time.total(), UserHz::new(35000000000));
    }
}

mod usage_tests {
    use super::*;

    fn time(line: &str) -> CpuTime {
        line.parse().unwrap()
    }

    #[test]
    fn since_boot() {
        let time = time("cpu 100 0 50 800 20 5 25 0 0 0");
        assert_eq!(time.total(), UserHz::new(1000));
        let usage = time.usage().unwrap();
        assert!((usage - 20.0).abs() < 1e-9);
        assert_eq!(format!("{usage:.2}"), "20.00");
    }

    #[test]
    fn nothing_accounted() {
        assert_eq!(CpuTime::default().usage(), None);
    }

    #[test]
    fn interval() {
        let a = time("cpu 100 0 50 800 20 5 25");
        let b = time("cpu 190 0 60 900 20 5 25");
        // 100 idle ticks out of 200 elapsed.
        let usage = Measurement::new(a, b).usage().unwrap();
        assert!((usage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn interval_without_elapsed_time() {
        let a = time("cpu 100 0 50 800 20 5 25");
        assert_eq!(Measurement::new(a, a).usage(), None);
    }

    #[test]
    fn decreasing_counter_floors_at_zero() {
        let a = time("cpu 100 0 50 800 20 5 25");
        let b = time("cpu 100 0 50 900 10 5 25");
        let usage = Measurement::new(a, b).usage().unwrap();
        assert!(usage.abs() < 1e-9);
    }
}

mod read_tests {
    use {super::*, std::io::Cursor};

    #[test]
    fn reads_first_line() {
        let table = "cpu 100 0 50 800 20 5 25 0 0 0\ncpu0 1 2 3 4 5 6 7 0 0 0\nintr 1462898\n";
        let time = CpuTime::read(Cursor::new(table)).unwrap();
        assert_eq!(time.idle, UserHz::new(800));
    }

    #[test]
    fn empty_table() {
        let err = CpuTime::read(Cursor::new("")).unwrap_err();
        assert!(matches!(err, StatReadError::Entry(EntryParseError::Missing)));
    }
}

use seq_macro::seq;

const MODULI: [u64; 4] = [1, 12, 1_000_000_007, u64::MAX];

seq!(R in 1..=24 {
    #[test]
    fn rows_~R() {
        check_rows(R, 1..=40);
    }
});

seq!(N in 3..=5 {
    #[test]
    fn around_power_~N() {
        let n = 1u64 << N;
        for rows in [n - 1, n, n + 1] {
            check_rows(rows, n - 2..=3 * n + 1);
        }
    }
});

fn check_rows(rows: u64, cols: std::ops::RangeInclusive<u64>) {
    for cols in cols {
        for threshold in 0..=rows + cols {
            for modulus in MODULI {
                assert_eq!(
                    immortal::compute(rows, cols, threshold, modulus),
                    immortal::naive(rows, cols, threshold, modulus),
                    "{rows}x{cols} threshold={threshold} modulus={modulus}"
                );
            }
        }
    }
}

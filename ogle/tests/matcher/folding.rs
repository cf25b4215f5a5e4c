use ogle::matcher::{equals, Matcher};
use ogle::Verdict;
use proptest::prelude::*;

macro_rules! assert_width {
    ($m:expr, $n:expr, $( $type:ty ),+) => {
        $(
            if let Ok(x) = <$type>::try_from($n) {
                prop_assert_eq!($m.check(&x).verdict, Verdict::True, "{} as {}", $n, stringify!($type));
            }
        )+
    };
}

proptest! {
    #[test]
    fn integers_of_every_width(n in any::<i64>()) {
        let m = equals(n);

        assert_width!(m, n, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn integers_as_float32(n in any::<i64>()) {
        prop_assert_eq!(equals(n).check(&(n as f32)).verdict, Verdict::True);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn integers_as_float64(n in any::<i64>()) {
        prop_assert_eq!(equals(n).check(&(n as f64)).verdict, Verdict::True);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn float32_neighbours(n in (1_i64 << 24)..(1_i64 << 40), d in -64_i64..64) {
        let k = n + d;
        let expected = (k as f32) == (n as f32);

        prop_assert_eq!(equals(n).check(&(k as f32)).is_match(), expected);
    }

    #[test]
    fn small_integers_are_exact_in_float32(n in -(1_i64 << 24)..=(1_i64 << 24), d in 1_i64..16) {
        #[allow(clippy::cast_precision_loss)]
        let candidate = (n + d) as f32;

        prop_assume!(n + d <= 1 << 24);
        prop_assert_eq!(equals(n).check(&candidate).verdict, Verdict::False);
    }
}

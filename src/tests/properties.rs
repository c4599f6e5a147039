use crate::{ErrorKind, Rational};
use hmath::{BigInt, Ratio};

#[derive(Clone, Copy, Debug)]
enum Op {
    Add(Rational),
    Sub(Rational),
    Mul(Rational),
    Div(Rational),
    AddInt(i64),
    MulInt(i64),
    Neg,
    Inv,
    Pow(i32),
}

fn small_rational() -> Rational {
    let numer = (rand::random::<i8>() as i64) >> 2;
    let mut denom = (rand::random::<i8>() as i64) >> 2;

    while denom == 0 {
        denom = (rand::random::<i8>() as i64) >> 2;
    }

    Rational::new(numer, denom).unwrap()
}

fn random_op() -> Op {
    match rand::random::<u8>() % 9 {
        0 => Op::Add(small_rational()),
        1 => Op::Sub(small_rational()),
        2 => Op::Mul(small_rational()),
        3 => Op::Div(small_rational()),
        4 => Op::AddInt((rand::random::<i8>() as i64) >> 3),
        5 => Op::MulInt((rand::random::<i8>() as i64) >> 3),
        6 => Op::Neg,
        7 => Op::Inv,
        _ => Op::Pow((rand::random::<u8>() % 7) as i32 - 3),
    }
}

fn to_hmath(r: &Rational) -> Ratio {
    let n = Ratio::from_denom_and_numer(
        BigInt::from(r.denom.unsigned_abs()),
        BigInt::from(r.numer),
    );

    if r.denom < 0 {
        n.neg()
    }

    else {
        n
    }
}

fn hmath_pow(base: &Ratio, exponent: i32) -> Ratio {
    let mut result = Ratio::one();

    for _ in 0..exponent.unsigned_abs() {
        result = result.mul_rat(base);
    }

    if exponent < 0 {
        Ratio::one().div_rat(&result)
    }

    else {
        result
    }
}

fn apply(x: &Rational, op: Op) -> Result<Rational, crate::RationalError> {
    match op {
        Op::Add(y) => x.add(y),
        Op::Sub(y) => x.subtract(y),
        Op::Mul(y) => x.multiply(y),
        Op::Div(y) => x.divide(y),
        Op::AddInt(n) => x.add(n),
        Op::MulInt(n) => x.multiply(n),
        Op::Neg => x.negate(),
        Op::Inv => x.inverse(),
        Op::Pow(e) => x.pow(e),
    }
}

// `None` when the operation is undefined (division by zero)
fn apply_hmath(x: &Ratio, op: Op) -> Option<Ratio> {
    let zero = Ratio::zero();

    match op {
        Op::Add(y) => Some(x.add_rat(&to_hmath(&y))),
        Op::Sub(y) => Some(x.sub_rat(&to_hmath(&y))),
        Op::Mul(y) => Some(x.mul_rat(&to_hmath(&y))),
        Op::Div(y) if y.numer == 0 => None,
        Op::Div(y) => Some(x.div_rat(&to_hmath(&y))),
        Op::AddInt(n) => Some(x.add_rat(&to_hmath(&Rational::from(n)))),
        Op::MulInt(n) => Some(x.mul_rat(&to_hmath(&Rational::from(n)))),
        Op::Neg => Some(x.neg()),
        Op::Inv if x.eq_rat(&zero) => None,
        Op::Pow(e) if e < 0 && x.eq_rat(&zero) => None,
        Op::Inv => Some(Ratio::one().div_rat(x)),
        Op::Pow(e) => Some(hmath_pow(x, e)),
    }
}

// Random chains of operations never drift from exact arithmetic.
// A chain stops at the first overflow, since i64 can't hold the result anyway.
#[test]
fn random_chain_test() {
    for _ in 0..256 {
        let mut x = small_rational();
        let mut expected = to_hmath(&x);
        let mut history = vec![];

        for _ in 0..24 {
            let op = random_op();
            history.push(op);

            match (apply(&x, op), apply_hmath(&expected, op)) {
                (Ok(y), Some(e)) => {
                    assert!(y.is_valid());
                    assert!(to_hmath(&y).eq_rat(&e), "{history:?}");

                    x = y;
                    expected = e;
                },
                // `(0/n)^-k` may overflow on `n^k` before it finds out that 0 has no inverse
                (Err(e), None) => {
                    assert!(e.is_invalid_argument() || e.is_overflow(), "{history:?}");
                    break;
                },
                (Err(e), Some(_)) => {
                    assert_eq!(e.kind, ErrorKind::Overflow, "{history:?}");
                    break;
                },
                (Ok(y), None) => panic!("{history:?} -> {y:?}"),
            }
        }
    }
}

#[test]
fn identity_test() {
    for _ in 0..512 {
        let a = small_rational();
        let b = small_rational();

        assert_eq!(a.add(0i64).unwrap(), a);
        assert_eq!(a.subtract(0i64).unwrap(), a);
        assert_eq!(a.multiply(1i64).unwrap(), a);
        assert_eq!(a.divide(1i64).unwrap(), a);
        assert_eq!(a.add(0i64).unwrap().denom, a.denom);
        assert_eq!(a.negate().unwrap().negate().unwrap(), a);
        assert_eq!(a.pow(0).unwrap(), Rational::one());
        assert_eq!(a.multiply(b).unwrap().numer, a.numer * b.numer);
        assert_eq!(a.multiply(b).unwrap().denom, a.denom * b.denom);

        let abs = a.abs().unwrap();
        assert!(abs.numer >= 0 && abs.denom >= 0);
        assert!(abs >= Rational::zero());

        if a.numer != 0 {
            assert_eq!(a.inverse().unwrap().inverse().unwrap(), a);
        }

        if b.numer != 0 {
            assert_eq!(a.multiply(b).unwrap().divide(b).unwrap(), a);
        }
    }
}

#[test]
fn forced_zero_denominator_test() {
    for _ in 0..64 {
        let mut a = small_rational();
        let b = small_rational();
        a.denom = 0;

        assert!(a.add(b).unwrap_err().is_invalid_argument());
        assert!(b.add(a).unwrap_err().is_invalid_argument());
        assert!(a.subtract(rand::random::<i32>() as i64).unwrap_err().is_invalid_argument());
        assert!(a.multiply(1i64).unwrap_err().is_invalid_argument());
        assert!(b.divide(a).unwrap_err().is_invalid_argument());
        assert!(a.negate().unwrap_err().is_invalid_argument());
        assert!(a.abs().unwrap_err().is_invalid_argument());
        assert!(a.pow(0).unwrap_err().is_invalid_argument());
        assert!(a.to_f64().unwrap_err().is_invalid_argument());
        assert!(a.to_i32().unwrap_err().is_invalid_argument());
    }
}

//! # BigInt
//! Arbitrary-precision signed integers. The magnitude is kept as a sequence of decimal digits,
//! least significant digit first, so the value is only bounded by memory.
//! # Example
//! ```
//! use longint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a << 3 = {}", &a << 3);
//! ```
//!

use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Shl, ShlAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::big_num_constants::*;
use crate::big_num_cache::*;
use crate::error::Error;

/// Signed integer of unbounded magnitude.
///
/// `digits` is never empty and has no most significant zero digit unless the value is zero,
/// which is always `[0]` and never negative. Equality and hashing rely on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
    negative: bool,
}

// 实现构造
impl BigInt {
    pub(crate) fn from_raw(digits: Vec<u8>, negative: bool) -> Self {
        BigInt { digits, negative }
    }

    pub fn zero() -> Self {
        BigInt::from_raw(vec![0], false)
    }

    /// Builds a value from raw digits, least significant first.
    ///
    /// Every digit must be below the base. An empty vector is read as zero.
    /// The result is normalized, so leading zeros and a negative zero are accepted.
    pub fn from_digits(digits: Vec<u8>, negative: bool) -> Result<BigInt, Error> {
        if let Some((position, &digit)) = digits.iter().enumerate().find(|(_, d)| **d >= BASE) {
            return Err(Error::DigitOutOfRange { digit, position });
        }
        let mut n = BigInt::from_raw(digits, negative);
        if n.digits.is_empty() {
            n.digits.push(0);
        }
        n.normalize();
        Ok(n)
    }

    /// Moves the value out, leaving zero behind.
    pub fn take(&mut self) -> BigInt {
        std::mem::take(self)
    }

    /// Strips most significant zero digits and clears the sign of zero.
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.is_zero() {
            self.negative = false;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

impl BigInt {
    fn value_of(mut val: u128, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u128 {
            return if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let mut digits = Vec::with_capacity(40);
        while val != 0 {
            digits.push((val % BASE as u128) as u8);
            val /= BASE as u128;
        }
        BigInt::from_raw(digits, negative)
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        BigInt::parse_decimal(val).map_err(|err| {
            debug!(len = val.len(), %err, "rejected BigInt literal");
            err
        })
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

impl BigInt {
    fn parse_decimal(val: &str) -> Result<BigInt, Error> {
        if val.is_empty() {
            return Err(Error::Empty);
        }

        let (negative, cursor) = match val.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };
        let body = &val[cursor..];
        if body.is_empty() {
            return Err(Error::MissingDigits);
        }

        let mut digits = Vec::with_capacity(body.len());
        for (i, ch) in body.char_indices() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(Error::InvalidDigit { ch, position: cursor + i }),
            }
        }
        digits.reverse();

        let mut n = BigInt::from_raw(digits, negative);
        n.normalize();
        Ok(n)
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.digits
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect();
        f.pad_integral(!self.negative, "", &s)
    }
}

// 杂项辅助函数
impl BigInt {
    /// Digits of the magnitude, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    pub fn digit(&self, i: usize) -> Option<u8> {
        self.digits.get(i).copied()
    }
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn abs(&self) -> BigInt {
        BigInt::from_raw(self.digits.clone(), false)
    }
}

// 实现大小比较
impl BigInt {
    /// Compares magnitudes, ignoring both signs.
    pub fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        let mut pos = self_len;
        while pos > 0 {
            pos -= 1;
            let a = self.digits[pos];
            let b = other.digits[pos];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_mag(other),
            (true, true) => self.compare_mag(other).reverse(),
        }
    }
}

// 实现加减法
impl BigInt {
    /// `|a| += |b|`, the sign of `a` is left alone.
    fn sum(a: &mut BigInt, b: &BigInt) {
        let m = b.digits.len();
        if a.digits.len() < m {
            a.digits.resize(m, 0);
        }

        let mut carry: u8 = 0;
        for i in 0..m {
            carry += a.digits[i] + b.digits[i];
            a.digits[i] = carry % BASE;
            carry /= BASE;
        }

        let mut i = m;
        while carry > 0 && i < a.digits.len() {
            carry += a.digits[i];
            a.digits[i] = carry % BASE;
            carry /= BASE;
            i += 1;
        }

        if carry != 0 {
            a.digits.push(carry);
        }
    }

    /// `|minuend| -= |subtrahend|`. Requires `|minuend| >= |subtrahend|`.
    fn subtract(minuend: &mut BigInt, subtrahend: &BigInt) {
        debug_assert!(
            minuend.compare_mag(subtrahend) != Ordering::Less,
            "subtrahend magnitude exceeds minuend"
        );

        let fr = &mut minuend.digits;
        let mut borrow: u8 = 0;
        for (i, wh) in subtrahend.digits.iter().enumerate() {
            let wh = wh + borrow;
            if fr[i] >= wh {
                fr[i] -= wh;
                borrow = 0;
            } else {
                fr[i] = BASE + fr[i] - wh;
                borrow = 1;
            }
        }

        let mut i = subtrahend.digits.len();
        while borrow > 0 {
            if fr[i] >= borrow {
                fr[i] -= borrow;
                borrow = 0;
            } else {
                fr[i] = BASE + fr[i] - borrow;
            }
            i += 1;
        }

        minuend.normalize();
    }

    /// Signed `a += b`, or `a -= b` when `flip_sign` is set.
    fn linear(a: &mut BigInt, b: &BigInt, flip_sign: bool) {
        let sign = flip_sign ^ b.negative;
        if a.negative == sign {
            BigInt::sum(a, b);
            return;
        }

        if a.compare_mag(b) != Ordering::Less {
            BigInt::subtract(a, b);
        } else {
            let mut buff = BigInt::from_raw(b.digits.clone(), !a.negative);
            BigInt::subtract(&mut buff, a);
            *a = buff;
        }
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: Self) -> Self::Output {
        BigInt::linear(&mut self, &rhs, false);
        self
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: &BigInt) -> Self::Output {
        BigInt::linear(&mut self, rhs, false);
        self
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        BigInt::linear(self, &rhs, false);
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        BigInt::linear(self, rhs, false);
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: Self) -> Self::Output {
        BigInt::linear(&mut self, &rhs, true);
        self
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: &BigInt) -> Self::Output {
        BigInt::linear(&mut self, rhs, true);
        self
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        BigInt::linear(self, &rhs, true);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        BigInt::linear(self, rhs, true);
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现左移 (以十进制位为单位)
impl BigInt {
    /// Multiplies by `BASE^k` in place by prepending `k` zero digits. Zero stays `[0]`.
    pub fn shl_digits(&mut self, k: usize) {
        if k == 0 || self.is_zero() {
            return;
        }
        self.digits.splice(0..0, std::iter::repeat(0).take(k));
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, k: usize) -> Self::Output {
        self.shl_digits(k);
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, k: usize) -> Self::Output {
        self.clone() << k
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, k: usize) {
        self.shl_digits(k);
    }
}

// 实现乘法
impl BigInt {
    /// `|a| *= d` for a single digit `d`.
    fn mul_digit(a: &mut BigInt, d: u8) {
        if d == 0 {
            a.digits.clear();
            a.digits.push(0);
            return;
        }

        let mut carry: u8 = 0;
        for x in a.digits.iter_mut() {
            carry += *x * d;
            *x = carry % BASE;
            carry /= BASE;
        }
        if carry != 0 {
            a.digits.push(carry);
        }
    }

    /// Schoolbook multiplication, O(len_a * len_b).
    fn product(a: &BigInt, b: &BigInt) -> BigInt {
        let mut ret = BigInt::zero();
        for (i, &d) in b.digits.iter().enumerate() {
            if d == 0 {
                continue;
            }
            let mut buff = a.clone();
            BigInt::mul_digit(&mut buff, d);
            buff.shl_digits(i);
            BigInt::sum(&mut ret, &buff);
        }
        ret.negative = a.negative ^ b.negative;
        ret.normalize();
        ret
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        BigInt::product(&self, &rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        BigInt::product(&self, rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        BigInt::product(self, rhs)
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = BigInt::product(self, &rhs);
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::product(self, rhs);
    }
}

// 实现除法
impl BigInt {
    /// Truncating division, or [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, Error> {
        if rhs.is_zero() {
            warn!(dividend_digits = self.digits.len(), "rejected division by zero");
            return Err(Error::DivisionByZero);
        }
        Ok(BigInt::quotient(self, rhs))
    }

    /// Long division, one quotient digit per dividend digit, each digit found by repeated
    /// subtraction. That costs up to `BASE - 1` subtractions per digit, so the worst case is
    /// O(len_a * len_b * BASE).
    fn quotient(a: &BigInt, b: &BigInt) -> BigInt {
        let negative = a.negative ^ b.negative;
        match a.compare_mag(b) {
            Ordering::Less => return POS_CACHE[0].clone(),
            Ordering::Equal => {
                return if negative { NEG_CACHE[1].clone() } else { POS_CACHE[1].clone() };
            },
            Ordering::Greater => {},
        }

        let l = a.digits.len();
        let mut ret: Vec<u8> = Vec::with_capacity(l);
        let mut buff = BigInt::zero();
        for i in (0..l).rev() {
            buff.shl_digits(1);
            BigInt::sum(&mut buff, &POS_CACHE[a.digits[i] as usize]);

            let mut d: u8 = 0;
            while buff.compare_mag(b) != Ordering::Less {
                BigInt::subtract(&mut buff, b);
                d += 1;
            }
            ret.push(d);
        }

        ret.reverse();
        let mut q = BigInt::from_raw(ret, negative);
        q.normalize();
        trace!(
            dividend_digits = l,
            divisor_digits = b.digits.len(),
            quotient_digits = q.digits.len(),
            "long division"
        );
        q
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&BigInt> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        &self / rhs
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("Divide by 0"),
        }
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let n: BigInt = num.into();
    assert_eq!(n.digits, vec![2, 1]);
    assert!(!n.negative);

    let num: i16 = -100;
    let n: BigInt = num.into();
    assert_eq!(n.digits, vec![0, 0, 1]);
    assert!(n.negative);

    let n = BigInt::from(0_i64);
    assert_eq!(n.digits, vec![0]);
    assert!(!n.negative);

    let n = BigInt::from(i64::MIN);
    assert_eq!(n.to_string(), "-9223372036854775808");

    let n = BigInt::from(u128::MAX);
    assert_eq!(n.to_string(), "340282366920938463463374607431768211455");

    let n = BigInt::from(-7_isize);
    assert_eq!(n, NEG_CACHE[7]);
}

#[test]
fn test_parse() {
    let n = big("-00120");
    assert_eq!(n.digits, vec![0, 2, 1]);
    assert!(n.negative);

    let n = big("+42");
    assert_eq!(n.to_string(), "42");

    let n = big("-0000");
    assert_eq!(n.digits, vec![0]);
    assert!(!n.negative);

    assert_eq!("".parse::<BigInt>(), Err(Error::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(Error::MissingDigits));
    assert_eq!(
        "12a4".parse::<BigInt>(),
        Err(Error::InvalidDigit { ch: 'a', position: 2 })
    );
    assert_eq!(
        "--1".parse::<BigInt>(),
        Err(Error::InvalidDigit { ch: '-', position: 1 })
    );
    assert_eq!(
        BigInt::try_from(" 1"),
        Err(Error::InvalidDigit { ch: ' ', position: 0 })
    );
}

#[test]
fn test_from_digits() {
    let n = BigInt::from_digits(vec![3, 2, 1, 0, 0], true).unwrap();
    assert_eq!(n.to_string(), "-123");

    let n = BigInt::from_digits(vec![0, 0], true).unwrap();
    assert!(n.is_zero());
    assert!(!n.is_negative());

    let n = BigInt::from_digits(vec![], false).unwrap();
    assert_eq!(n.digits(), &[0]);

    assert_eq!(
        BigInt::from_digits(vec![1, 10], false),
        Err(Error::DigitOutOfRange { digit: 10, position: 1 })
    );
}

#[test]
fn test_to_string() {
    assert_eq!(big("12345678909876523784950683472613487560983287654321").to_string(),
               "12345678909876523784950683472613487560983287654321");
    assert_eq!(big("-5").to_string(), "-5");
    assert_eq!(format!("{:+}", big("5")), "+5");
    assert_eq!(format!("{:>5}", big("-12")), "  -12");
    assert_eq!(format!("{:05}", big("-12")), "-0012");
}

#[test]
fn test_compare() {
    assert_eq!(big("100").compare_mag(&big("99")), Ordering::Greater);
    assert_eq!(big("-100").compare_mag(&big("99")), Ordering::Greater);
    assert_eq!(big("123").compare_mag(&big("124")), Ordering::Less);
    assert_eq!(big("-123").compare_mag(&big("123")), Ordering::Equal);

    assert!(big("-100") < big("99"));
    assert!(big("-100") < big("-99"));
    assert!(big("0") > big("-1"));
    assert!(big("1000") > big("999"));
}

#[test]
fn test_sum_carry() {
    let mut a = big("999");
    BigInt::sum(&mut a, &big("1"));
    assert_eq!(a.digits, vec![0, 0, 0, 1]);

    let mut a = big("1");
    BigInt::sum(&mut a, &big("99999"));
    assert_eq!(a.to_string(), "100000");
}

#[test]
fn test_subtract_borrow() {
    let mut a = big("1000");
    BigInt::subtract(&mut a, &big("1"));
    assert_eq!(a.digits, vec![9, 9, 9]);

    let mut a = big("-5");
    BigInt::subtract(&mut a, &big("5"));
    assert_eq!(a.digits, vec![0]);
    assert!(!a.negative);
}

#[test]
fn test_linear() {
    assert_eq!(big("123") + big("456"), big("579"));
    assert_eq!(big("1000") - big("999"), big("1"));
    assert_eq!(big("999") - big("1000"), big("-1"));
    assert_eq!(big("-10") + big("10"), BigInt::zero());
    assert_eq!(big("10") + big("-10"), BigInt::zero());
    assert_eq!(big("-3") - big("-3"), BigInt::zero());
    assert_eq!(big("-3") + big("-4"), big("-7"));
    assert_eq!(big("3") - big("-4"), big("7"));
    assert_eq!(big("-3") + big("4"), big("1"));
    assert_eq!(big("3") + big("-4"), big("-1"));
    assert_eq!(big("0") - big("5"), big("-5"));
    assert_eq!(big("0") - big("-5"), big("5"));

    let mut a = big("99999999999999999999");
    a += &big("1");
    assert_eq!(a.to_string(), "100000000000000000000");
    a -= big("100000000000000000001");
    assert_eq!(a.to_string(), "-1");
}

#[test]
fn test_shl_digits() {
    let mut a = big("12");
    a.shl_digits(3);
    assert_eq!(a.to_string(), "12000");
    assert_eq!(&big("-7") << 2, big("-700"));

    let mut z = BigInt::zero();
    z <<= 5;
    assert_eq!(z.digits, vec![0]);
}

#[test]
fn test_mul() {
    assert_eq!(big("12345") * big("0"), BigInt::zero());
    assert!(!(big("-12345") * big("0")).is_negative());
    assert_eq!(big("-12") * big("12"), big("-144"));
    assert_eq!(big("-12") * big("-12"), big("144"));
    assert_eq!(
        &big("123456789012345678901234567890") * &big("987654321098765432109876543210"),
        big("121932631137021795226185032733622923332237463801111263526900")
    );

    let mut a = big("25");
    BigInt::mul_digit(&mut a, 4);
    assert_eq!(a.digits, vec![0, 0, 1]);
    BigInt::mul_digit(&mut a, 0);
    assert_eq!(a.digits, vec![0]);

    let mut a = big("-9");
    a *= big("9");
    assert_eq!(a, big("-81"));
}

#[test]
fn test_div() {
    assert_eq!(big("7") / big("2"), big("3"));
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(big("-7") / big("2"), big("-3"));
    assert_eq!(big("7") / big("-2"), big("-3"));
    assert_eq!(big("-7") / big("-2"), big("3"));
    assert_eq!(big("3") / big("-7"), BigInt::zero());
    assert!(!(big("-3") / big("7")).is_negative());
    assert_eq!(big("-42") / big("42"), big("-1"));
    assert_eq!(big("42") / big("42"), big("1"));
    assert_eq!(
        big("10000000000000000000000000000000000") / big("1000"),
        big("10000000000000000000000000000000")
    );
    assert_eq!(
        big("121932631137021795226185032733622923332237463801111263526900")
            / big("987654321098765432109876543210"),
        big("123456789012345678901234567890")
    );

    let mut a = big("1000");
    a /= &big("7");
    assert_eq!(a, big("142"));
}

#[test]
fn test_div_by_zero() {
    assert_eq!(big("5").checked_div(&BigInt::zero()), Err(Error::DivisionByZero));
    assert_eq!(big("0").checked_div(&big("-0")), Err(Error::DivisionByZero));
    let result = std::panic::catch_unwind(|| big("5") / BigInt::zero());
    assert!(result.is_err());
}

#[test]
fn test_take() {
    let mut a = big("-123");
    let b = a.take();
    assert_eq!(b, big("-123"));
    assert_eq!(a, BigInt::zero());

    let c = b.clone();
    assert_eq!(b, c);
    assert_eq!(-&c, big("123"));
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(big("-9").abs(), big("9"));
    assert_eq!(c.digit(2), Some(1));
    assert_eq!(c.digit(3), None);
    assert_eq!(c.num_digits(), 3);
}

use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

macro_rules! cache_of {
    ($negative: expr) => {
        {
            let mut cache = Vec::with_capacity(MAX_CONSTANT + 1);
            for n in 0..=MAX_CONSTANT {
                let digits = if n < BASE as usize {
                    vec![n as u8]
                } else {
                    vec![(n % BASE as usize) as u8, (n / BASE as usize) as u8]
                };
                cache.push(BigInt::from_raw(digits, $negative && n != 0));
            }
            cache
        }
    };
}

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInt> = cache_of!(false);
    pub static ref NEG_CACHE: Vec<BigInt> = cache_of!(true);
}

#[test]
fn test_cache_is_normalized() {
    assert_eq!(POS_CACHE.len(), MAX_CONSTANT + 1);
    assert_eq!(POS_CACHE[0].digits(), &[0]);
    assert!(!NEG_CACHE[0].is_negative());
    assert_eq!(POS_CACHE[16].digits(), &[6, 1]);
    assert_eq!(NEG_CACHE[16].to_string(), "-16");
    assert_eq!(POS_CACHE[9].to_string(), "9");
}

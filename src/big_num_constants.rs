/// Radix of one digit slot. One slot holds one decimal digit.
pub const BASE: u8 = 10;

pub const DIGITS: [char; BASE as usize] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

/// Largest magnitude kept in the small value caches.
pub const MAX_CONSTANT: usize = 16;
